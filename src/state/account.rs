//! Account state: credentials, session flag, follower set, inbox, posts.

use crate::state::observer::{Notifier, Receiver};
use crate::state::post::SharedPost;
use std::collections::HashSet;

/// A registered account.
///
/// Follow edges are stored on the target side only: `followers` holds the
/// usernames of everyone following *this* account. The inbox is append-only
/// and unbounded; accounts are never deleted.
#[derive(Debug)]
pub struct Account {
    /// Unique identifier, immutable after creation.
    pub username: String,
    /// Plaintext credential, immutable after creation. Cryptographic
    /// strength is an explicit non-goal; there is no reset flow.
    pub(crate) password: String,
    /// Session flag gating every mutating operation.
    pub is_logged_in: bool,
    /// Usernames of accounts following this one.
    pub followers: HashSet<String>,
    /// Delivered notifications, in delivery order.
    pub notifications: Vec<String>,
    /// Posts authored by this account, in publication order.
    pub posts: Vec<SharedPost>,
    /// Unix timestamp of registration.
    pub created_at: i64,
}

impl Account {
    /// Create a new account. The session starts closed; sign-up opens it.
    pub(crate) fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            is_logged_in: false,
            followers: HashSet::new(),
            notifications: Vec::new(),
            posts: Vec::new(),
            created_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Plaintext comparison against the stored credential.
    pub(crate) fn check_password(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    /// One-line summary used by the network roster.
    pub fn describe(&self) -> String {
        format!(
            "User name: {}, Number of posts: {}, Number of followers: {}",
            self.username,
            self.posts.len(),
            self.followers.len()
        )
    }

    /// The inbox rendered as a labeled block, one notification per line.
    pub fn inbox_report(&self) -> String {
        let mut out = format!("{}'s notifications:\n", self.username);
        for notification in &self.notifications {
            out.push_str(notification);
            out.push('\n');
        }
        out
    }
}

impl Receiver for Account {
    fn deliver(&mut self, notification: String) {
        self.notifications.push(notification);
    }
}

impl Notifier for Account {
    fn sender_name(&self) -> &str {
        &self.username
    }

    fn audience(&self) -> Vec<String> {
        self.followers.iter().cloned().collect()
    }
}
