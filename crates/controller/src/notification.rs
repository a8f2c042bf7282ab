//! Single-slot notifications

use procurex_core::ConsoleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

impl NotificationLevel {
    /// CSS class suffix
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationLevel::Success => "success",
            NotificationLevel::Error => "error",
        }
    }
}

/// Message shown after an operation settles
///
/// Each controller keeps at most one; a new message replaces the old one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    /// "Error adding vendor: <detail>"
    pub fn failure(action: &str, label: &str, err: &ConsoleError) -> Self {
        Self::error(format!(
            "Error {action} {}: {}",
            label.to_lowercase(),
            err.user_message()
        ))
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message() {
        let note = Notification::failure("adding", "Vendor", &ConsoleError::server(500, "db down"));
        assert!(note.is_error());
        assert_eq!(note.message, "Error adding vendor: db down");
        assert_eq!(note.level.css_class(), "error");
    }
}
