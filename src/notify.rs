//! User-facing notifications
//!
//! Stores and modals report outcomes through a [`Notifier`]. The CLI prints
//! them; embedders and tests record them.

use std::sync::Mutex;
use std::time::Instant;

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    /// Informational message
    Info,
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Error message
    Error,
}

impl NotificationType {
    /// Get the icon/prefix for this notification type
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "+",
            Self::Warning => "!",
            Self::Error => "x",
        }
    }

    pub fn is_problem(&self) -> bool {
        matches!(self, Self::Warning | Self::Error)
    }
}

/// A toast-style notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    pub created_at: Instant,
    /// How long a UI should keep it visible
    pub duration_secs: u64,
}

impl Notification {
    pub fn new(message: impl Into<String>, notification_type: NotificationType) -> Self {
        Self {
            message: message.into(),
            notification_type,
            created_at: Instant::now(),
            duration_secs: 3,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Error)
    }

    /// Set the duration for this notification
    pub fn with_duration(mut self, seconds: u64) -> Self {
        self.duration_secs = seconds;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed().as_secs() >= self.duration_secs
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Prints to the terminal: problems to stderr, everything else to stdout
#[derive(Debug, Default)]
pub struct ConsoleNotifier {
    quiet: bool,
    skip_problems: bool,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only print warnings and errors
    pub fn quiet() -> Self {
        Self {
            quiet: true,
            ..Self::default()
        }
    }

    /// Leave warnings and errors to the caller, which also receives them
    /// as `Err` values
    pub fn without_problems(mut self) -> Self {
        self.skip_problems = true;
        self
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        let kind = notification.notification_type;
        let line = format!("[{}] {}", kind.icon(), notification.message);
        if kind.is_problem() {
            if !self.skip_problems {
                eprintln!("{}", line);
            }
        } else if !self.quiet {
            println!("{}", line);
        }
    }
}

/// Keeps every notification in memory
#[derive(Debug, Default)]
pub struct NotificationLog {
    entries: Mutex<Vec<Notification>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all recorded notifications
    pub fn drain(&self) -> Vec<Notification> {
        self.entries
            .lock()
            .map(|mut entries| std::mem::take(&mut *entries))
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<Notification> {
        self.entries.lock().ok().and_then(|e| e.last().cloned())
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Messages of the given type, oldest first
    pub fn messages(&self, notification_type: NotificationType) -> Vec<String> {
        self.entries
            .lock()
            .map(|entries| {
                entries
                    .iter()
                    .filter(|n| n.notification_type == notification_type)
                    .map(|n| n.message.clone())
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Notifier for NotificationLog {
    fn notify(&self, notification: Notification) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_records_and_drains() {
        let log = NotificationLog::new();
        log.notify(Notification::success("Budget added"));
        log.notify(Notification::error("Failed to add budget"));

        assert_eq!(log.len(), 2);
        assert_eq!(log.last().unwrap().notification_type, NotificationType::Error);
        assert_eq!(log.messages(NotificationType::Success), vec!["Budget added".to_string()]);

        let drained = log.drain();
        assert_eq!(drained.len(), 2);
        assert!(log.is_empty());
    }

    #[test]
    fn test_expiry() {
        let note = Notification::info("hi").with_duration(0);
        assert!(note.is_expired());
        assert!(!Notification::info("hi").is_expired());
    }
}
