//! Chain fee provider implementations

pub mod blocknative;
pub mod etherscan;

pub use blocknative::BlocknativeProvider;
pub use etherscan::EtherscanProvider;
