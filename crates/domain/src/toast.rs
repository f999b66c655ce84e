//! Toasts — transient user-facing notifications.

use serde::{Deserialize, Serialize};

use crate::time::{self, Timestamp};

/// Severity of a toast, used by presentation layers for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastSeverity {
    #[default]
    Info,
    Error,
}

impl std::fmt::Display for ToastSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => f.write_str("info"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// A short-lived notification shown to the user.
///
/// Toasts carry controller replies and delivery failures back to whatever
/// presentation layer is attached; they are never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toast {
    pub message: String,
    pub severity: ToastSeverity,
    pub at: Timestamp,
}

impl Toast {
    /// An informational toast stamped with the current time.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: ToastSeverity::Info,
            at: time::now(),
        }
    }

    /// An error toast stamped with the current time.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: ToastSeverity::Error,
            at: time::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_info_toast_with_info_severity() {
        let toast = Toast::info("Lamp is now On");
        assert_eq!(toast.message, "Lamp is now On");
        assert_eq!(toast.severity, ToastSeverity::Info);
    }

    #[test]
    fn should_build_error_toast_with_error_severity() {
        let toast = Toast::error("There was an error sending the HTTP request");
        assert_eq!(toast.severity, ToastSeverity::Error);
    }

    #[test]
    fn should_display_lowercase_severity() {
        assert_eq!(ToastSeverity::Info.to_string(), "info");
        assert_eq!(ToastSeverity::Error.to_string(), "error");
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let toast = Toast::info("Restarting RF Station");
        let json = serde_json::to_string(&toast).unwrap();
        let parsed: Toast = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, toast);
    }
}
