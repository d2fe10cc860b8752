//! Rendering of poll outcomes into the short display status line

use crate::{
    error::{FetchError, ParseError, TransportError},
    types::{Chain, PollOutcome},
};

/// Renders one poll outcome as the display string for the given chain.
///
/// Pure and total: every transport and parse variant maps to exactly one
/// string, and the chain glyph is always the prefix.
pub fn status_line(chain: Chain, outcome: &PollOutcome) -> String {
    let glyph = chain.glyph();
    match outcome {
        Ok(est) => format!("{} S:{:.2} F:{:.2}", glyph, est.safe, est.fast),
        Err(FetchError::Transport(err)) => match err {
            TransportError::Timeout => format!("{} Timeout", glyph),
            TransportError::ConnectionError => format!("{} No Network", glyph),
            TransportError::HttpStatus(429) => format!("{} Rate Limited", glyph),
            TransportError::HttpStatus(403) => format!("{} API Key Issue", glyph),
            TransportError::HttpStatus(code) => format!("{} HTTP {}", glyph, code),
            TransportError::Other => format!("{} Network Error", glyph),
        },
        Err(FetchError::Parse(err)) => match err {
            ParseError::RateLimited => format!("{} Rate Limited", glyph),
            ParseError::InvalidApiKey => format!("{} Invalid API", glyph),
            ParseError::Malformed => format!("{} Parse Error", glyph),
            ParseError::ApiError => format!("{} API Error", glyph),
            ParseError::MissingData => format!("{} Data Error", glyph),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FeeEstimate;

    fn all_errors() -> Vec<FetchError> {
        vec![
            TransportError::Timeout.into(),
            TransportError::ConnectionError.into(),
            TransportError::HttpStatus(429).into(),
            TransportError::HttpStatus(403).into(),
            TransportError::HttpStatus(500).into(),
            TransportError::Other.into(),
            ParseError::RateLimited.into(),
            ParseError::InvalidApiKey.into(),
            ParseError::Malformed.into(),
            ParseError::ApiError.into(),
            ParseError::MissingData.into(),
        ]
    }

    #[test]
    fn success_renders_two_decimal_prices() {
        let est = FeeEstimate::new(Chain::Ethereum, 12.5, 30.1);
        assert_eq!(status_line(Chain::Ethereum, &Ok(est)), "Ξ S:12.50 F:30.10");

        let est = FeeEstimate::new(Chain::Bitcoin, 5.0, 20.0);
        assert_eq!(status_line(Chain::Bitcoin, &Ok(est)), "₿ S:5.00 F:20.00");
    }

    #[test]
    fn transport_errors_render_expected_labels() {
        let chain = Chain::Ethereum;
        assert_eq!(
            status_line(chain, &Err(TransportError::Timeout.into())),
            "Ξ Timeout"
        );
        assert_eq!(
            status_line(chain, &Err(TransportError::ConnectionError.into())),
            "Ξ No Network"
        );
        assert_eq!(
            status_line(chain, &Err(TransportError::HttpStatus(429).into())),
            "Ξ Rate Limited"
        );
        assert_eq!(
            status_line(chain, &Err(TransportError::HttpStatus(403).into())),
            "Ξ API Key Issue"
        );
        assert_eq!(
            status_line(chain, &Err(TransportError::HttpStatus(502).into())),
            "Ξ HTTP 502"
        );
        assert_eq!(
            status_line(chain, &Err(TransportError::Other.into())),
            "Ξ Network Error"
        );
    }

    #[test]
    fn parse_errors_render_expected_labels() {
        let chain = Chain::Bitcoin;
        assert_eq!(
            status_line(chain, &Err(ParseError::RateLimited.into())),
            "₿ Rate Limited"
        );
        assert_eq!(
            status_line(chain, &Err(ParseError::InvalidApiKey.into())),
            "₿ Invalid API"
        );
        assert_eq!(
            status_line(chain, &Err(ParseError::Malformed.into())),
            "₿ Parse Error"
        );
        assert_eq!(
            status_line(chain, &Err(ParseError::ApiError.into())),
            "₿ API Error"
        );
        assert_eq!(
            status_line(chain, &Err(ParseError::MissingData.into())),
            "₿ Data Error"
        );
    }

    #[test]
    fn every_error_gets_a_glyph_prefixed_line_on_every_chain() {
        for chain in Chain::all() {
            for err in all_errors() {
                let line = status_line(*chain, &Err(err));
                let rest = line
                    .strip_prefix(chain.glyph())
                    .expect("status line must start with the chain glyph");
                assert!(rest.starts_with(' '));
                assert!(rest.trim().len() > 1, "status text must not be empty");
            }
        }
    }

    #[test]
    fn timeout_renders_per_chain_glyph() {
        assert_eq!(
            status_line(Chain::Ethereum, &Err(TransportError::Timeout.into())),
            "Ξ Timeout"
        );
        assert_eq!(
            status_line(Chain::Bitcoin, &Err(TransportError::Timeout.into())),
            "₿ Timeout"
        );
    }
}
