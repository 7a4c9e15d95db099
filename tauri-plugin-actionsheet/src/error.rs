//! Error types for the actionsheet plugin.

use serde::{Deserialize, Serialize};

/// Result type alias for plugin operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while presenting a dialog.
///
/// Dismissals, out-of-range indices and disabled actions are not errors;
/// those resolve quietly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "type", content = "message")]
pub enum Error {
    /// The running platform has no native dialog implementation.
    #[error("Native dialogs are only available on iOS and Android")]
    UnsupportedPlatform,

    /// Mobile plugin invocation error.
    #[cfg(mobile)]
    #[error("Plugin invoke error: {0}")]
    PluginInvoke(String),
}

#[cfg(mobile)]
impl From<tauri::plugin::mobile::PluginInvokeError> for Error {
    fn from(err: tauri::plugin::mobile::PluginInvokeError) -> Self {
        Error::PluginInvoke(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_platform_serialization() {
        let json = serde_json::to_value(Error::UnsupportedPlatform).unwrap();
        assert_eq!(json["type"], "UnsupportedPlatform");
    }

    #[test]
    fn test_unsupported_platform_message() {
        assert_eq!(
            Error::UnsupportedPlatform.to_string(),
            "Native dialogs are only available on iOS and Android"
        );
    }
}
