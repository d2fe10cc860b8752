//! Login-item registration for the embedding app
//!
//! Delegates to macOS System Events via `osascript`, matching how menu-bar
//! apps register themselves without a helper bundle. Other platforms report
//! [`AutostartError::Unsupported`]; the tracker itself never depends on
//! registration succeeding, it only persists the flag.

use crate::error::AutostartError;

/// Registers the app bundle as a hidden login item
///
/// # Arguments
/// * `app_path` - Absolute path of the packaged app bundle
/// * `app_name` - Login item name, used later for removal
#[cfg(target_os = "macos")]
pub fn enable(app_path: &str, app_name: &str) -> Result<(), AutostartError> {
    let script = format!(
        "tell application \"System Events\" to make login item at end \
         with properties {{path:\"{}\", hidden:true, name:\"{}\"}}",
        app_path, app_name
    );
    run_osascript(&script)
}

/// Removes the login item, if present
#[cfg(target_os = "macos")]
pub fn disable(app_name: &str) -> Result<(), AutostartError> {
    let script = format!(
        "tell application \"System Events\" to delete login item \"{}\"",
        app_name
    );
    run_osascript(&script)
}

#[cfg(target_os = "macos")]
fn run_osascript(script: &str) -> Result<(), AutostartError> {
    let output = std::process::Command::new("osascript")
        .arg("-e")
        .arg(script)
        .output()?;

    if output.status.success() {
        Ok(())
    } else {
        Err(AutostartError::Script(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ))
    }
}

/// Registers the app as a login item (unsupported on this platform)
#[cfg(not(target_os = "macos"))]
pub fn enable(_app_path: &str, _app_name: &str) -> Result<(), AutostartError> {
    Err(AutostartError::Unsupported)
}

/// Removes the login item (unsupported on this platform)
#[cfg(not(target_os = "macos"))]
pub fn disable(_app_name: &str) -> Result<(), AutostartError> {
    Err(AutostartError::Unsupported)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn reports_unsupported_off_macos() {
        assert!(matches!(
            enable("/Applications/Fees.app", "Fees"),
            Err(AutostartError::Unsupported)
        ));
        assert!(matches!(
            disable("Fees"),
            Err(AutostartError::Unsupported)
        ));
    }
}
