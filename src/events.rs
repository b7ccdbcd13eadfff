//! Structured event log.
//!
//! Every observable side effect of a network operation is recorded as an
//! [`Event`] instead of being printed, so callers choose their own sink.
//! The `Display` impl reproduces the network's human-readable message
//! formats verbatim, which keeps behavioral compatibility testable.

use parking_lot::Mutex;
use std::fmt;

/// Why a login or logout attempt was absorbed without effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRejectReason {
    /// The username is not in the registry.
    UnknownUser,
    /// The password did not match.
    WrongPassword,
}

/// An observable side effect of a network operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The network itself came into existence.
    NetworkCreated { name: String },
    /// Successful login.
    Connected { username: String },
    /// Logout.
    Disconnected { username: String },
    /// Soft-failed login or logout; the operation had no effect.
    AuthRejected {
        username: String,
        reason: AuthRejectReason,
    },
    /// A follow edge was added.
    Followed { follower: String, target: String },
    /// A follow edge was removed.
    Unfollowed { follower: String, target: String },
    /// A post was created; `summary` is its `describe()` output.
    PostPublished { author: String, summary: String },
    /// An author-directed like/comment notification reached its inbox.
    NotificationDelivered { to: String, body: String },
    /// A sale listing was re-priced.
    Discounted { seller: String, new_price: f64 },
    /// A sale listing became unavailable.
    Sold { seller: String },
    /// An image post's picture was shown.
    Rendered { path: String },
}

impl Event {
    /// Short static label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NetworkCreated { .. } => "network_created",
            Self::Connected { .. } => "connected",
            Self::Disconnected { .. } => "disconnected",
            Self::AuthRejected { .. } => "auth_rejected",
            Self::Followed { .. } => "followed",
            Self::Unfollowed { .. } => "unfollowed",
            Self::PostPublished { .. } => "post_published",
            Self::NotificationDelivered { .. } => "notification_delivered",
            Self::Discounted { .. } => "discounted",
            Self::Sold { .. } => "sold",
            Self::Rendered { .. } => "rendered",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NetworkCreated { name } => {
                write!(f, "The social network {name} was created!")
            }
            Self::Connected { username } => write!(f, "{username} connected"),
            Self::Disconnected { username } => write!(f, "{username} disconnected"),
            Self::AuthRejected { username, reason } => match reason {
                AuthRejectReason::UnknownUser => {
                    write!(f, "{username} is not a registered user")
                }
                AuthRejectReason::WrongPassword => {
                    write!(f, "invalid password for {username}")
                }
            },
            Self::Followed { follower, target } => {
                write!(f, "{follower} started following {target}")
            }
            Self::Unfollowed { follower, target } => {
                write!(f, "{follower} unfollowed {target}")
            }
            Self::PostPublished { summary, .. } => write!(f, "{summary}"),
            Self::NotificationDelivered { to, body } => {
                write!(f, "notification to {to}: {body}")
            }
            Self::Discounted { seller, new_price } => {
                write!(f, "Discount on {seller} product! the new price is: {new_price}")
            }
            Self::Sold { seller } => write!(f, "{seller}'s product is sold"),
            Self::Rendered { .. } => write!(f, "Shows picture"),
        }
    }
}

/// Append-only record of everything a network has done.
#[derive(Default)]
pub struct EventLog {
    entries: Mutex<Vec<Event>>,
}

impl EventLog {
    /// Append an event and emit a matching trace line.
    pub fn record(&self, event: Event) {
        tracing::debug!(kind = event.kind(), "{event}");
        self.entries.lock().push(event);
    }

    /// Copy of the recorded events, in order.
    pub fn snapshot(&self) -> Vec<Event> {
        self.entries.lock().clone()
    }

    /// Recorded events rendered through their `Display` formats.
    pub fn rendered(&self) -> Vec<String> {
        self.entries.lock().iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_message_format() {
        let event = Event::NetworkCreated { name: "Chirper".into() };
        assert_eq!(event.to_string(), "The social network Chirper was created!");
    }

    #[test]
    fn session_message_formats() {
        assert_eq!(
            Event::Connected { username: "alice".into() }.to_string(),
            "alice connected"
        );
        assert_eq!(
            Event::Disconnected { username: "alice".into() }.to_string(),
            "alice disconnected"
        );
    }

    #[test]
    fn auth_reject_formats() {
        assert_eq!(
            Event::AuthRejected {
                username: "ghost".into(),
                reason: AuthRejectReason::UnknownUser,
            }
            .to_string(),
            "ghost is not a registered user"
        );
        assert_eq!(
            Event::AuthRejected {
                username: "alice".into(),
                reason: AuthRejectReason::WrongPassword,
            }
            .to_string(),
            "invalid password for alice"
        );
    }

    #[test]
    fn follow_message_formats() {
        assert_eq!(
            Event::Followed { follower: "bob".into(), target: "alice".into() }.to_string(),
            "bob started following alice"
        );
        assert_eq!(
            Event::Unfollowed { follower: "bob".into(), target: "alice".into() }.to_string(),
            "bob unfollowed alice"
        );
    }

    #[test]
    fn notification_message_format() {
        let event = Event::NotificationDelivered {
            to: "alice".into(),
            body: "bob liked your post".into(),
        };
        assert_eq!(event.to_string(), "notification to alice: bob liked your post");
    }

    #[test]
    fn sale_message_formats() {
        assert_eq!(
            Event::Discounted { seller: "alice".into(), new_price: 500.0 }.to_string(),
            "Discount on alice product! the new price is: 500"
        );
        assert_eq!(
            Event::Sold { seller: "alice".into() }.to_string(),
            "alice's product is sold"
        );
        assert_eq!(
            Event::Rendered { path: "a.png".into() }.to_string(),
            "Shows picture"
        );
    }

    #[test]
    fn log_preserves_order() {
        let log = EventLog::default();
        assert!(log.is_empty());
        log.record(Event::Connected { username: "a".into() });
        log.record(Event::Disconnected { username: "a".into() });
        assert_eq!(log.len(), 2);
        let events = log.snapshot();
        assert_eq!(events[0], Event::Connected { username: "a".into() });
        assert_eq!(events[1], Event::Disconnected { username: "a".into() });
        assert_eq!(log.rendered(), vec!["a connected", "a disconnected"]);
    }
}
