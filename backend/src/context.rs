//! Explicit client state that pages receive instead of reaching for globals:
//! the logged-in session and the queue of transient notifications.

use std::collections::VecDeque;

use crate::config::NotificationSettings;

/// Authentication state of the current user.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<String>,
    email: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(&mut self, token: impl Into<String>, email: impl Into<String>) {
        self.token = Some(token.into());
        self.email = Some(email.into());
    }

    pub fn logout(&mut self) {
        self.token = None;
        self.email = None;
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

/// Bounded queue of notices waiting to be shown. When full, the oldest notice
/// is dropped.
#[derive(Debug, Clone)]
pub struct Notifications {
    queue: VecDeque<Notice>,
    capacity: usize,
}

impl Notifications {
    /// A capacity of zero is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            queue: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Queue sized by the `[notifications]` config section.
    pub fn from_settings(settings: &NotificationSettings) -> Self {
        Self::with_capacity(settings.max_queued)
    }

    pub fn push(&mut self, severity: Severity, message: impl Into<String>) {
        if self.queue.len() == self.capacity {
            self.queue.pop_front();
        }
        self.queue.push_back(Notice {
            severity,
            message: message.into(),
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Severity::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Severity::Error, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Severity::Info, message);
    }

    pub fn last(&self) -> Option<&Notice> {
        self.queue.back()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Take every queued notice, oldest first.
    pub fn drain(&mut self) -> Vec<Notice> {
        self.queue.drain(..).collect()
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::from_settings(&NotificationSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_login_logout() {
        let mut session = Session::new();
        assert!(!session.is_logged_in());

        session.login("tok-123", "host@example.com");
        assert!(session.is_logged_in());
        assert_eq!(session.token(), Some("tok-123"));
        assert_eq!(session.email(), Some("host@example.com"));

        session.logout();
        assert!(!session.is_logged_in());
        assert_eq!(session.email(), None);
    }

    #[test]
    fn test_notifications_drop_oldest() {
        let mut notes = Notifications::with_capacity(2);
        notes.info("one");
        notes.error("two");
        notes.success("three");

        let drained = notes.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].message, "two");
        assert_eq!(drained[1].severity, Severity::Success);
        assert!(notes.is_empty());
    }

    #[test]
    fn test_capacity_from_settings() {
        let mut notes = Notifications::from_settings(&NotificationSettings { max_queued: 3 });
        for i in 0..5 {
            notes.info(i.to_string());
        }
        let kept: Vec<String> = notes.drain().into_iter().map(|n| n.message).collect();
        assert_eq!(kept, vec!["2", "3", "4"]);

        let mut notes = Notifications::default();
        for i in 0..7 {
            notes.info(i.to_string());
        }
        assert_eq!(notes.len(), NotificationSettings::default().max_queued);
    }

    #[test]
    fn test_zero_capacity_holds_one() {
        let mut notes = Notifications::with_capacity(0);
        notes.info("a");
        notes.info("b");
        assert_eq!(notes.len(), 1);
        assert_eq!(notes.last().unwrap().message, "b");
    }
}
