//! The Network - central shared state for the social graph.
//!
//! The Network holds every account in concurrent collections and owns the
//! operations that touch more than one entity: sign-up, the follow graph,
//! publication, notification fan-out, and engagement routing. Each account
//! and each post sits behind its own lock; no operation holds two entity
//! locks except in short, strictly ordered sections (guard read first,
//! then the single mutation lock), so a failed guard never leaves partial
//! state behind.

use crate::config::{Config, LimitsConfig};
use crate::error::NetworkError;
use crate::events::{AuthRejectReason, Event, EventLog};
use crate::render::{FsRenderer, ImageRenderer, RenderError};
use crate::state::account::Account;
use crate::state::factory::{self, PostType};
use crate::state::observer::{Notifier, Receiver};
use crate::state::post::{PostKind, SharedPost};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Shared handle to an account.
pub type SharedAccount = Arc<RwLock<Account>>;

/// A social network: account directory, follow graph, and event log.
///
/// Explicitly constructed and passed by reference; there is no process
/// global, so tests run independent networks side by side.
pub struct Network {
    name: String,
    /// All accounts, indexed by username.
    accounts: DashMap<String, SharedAccount>,
    /// Usernames in registration order, for `describe`.
    roster: Mutex<Vec<String>>,
    limits: LimitsConfig,
    renderer: Arc<dyn ImageRenderer>,
    events: EventLog,
}

impl Network {
    /// Create a network with the given name and default limits.
    pub fn new(name: impl Into<String>) -> Self {
        let config = Config {
            network: crate::config::NetworkConfig { name: name.into() },
            ..Config::default()
        };
        Self::from_config(&config)
    }

    /// Create a network from configuration, rendering images off the
    /// local filesystem.
    pub fn from_config(config: &Config) -> Self {
        Self::with_renderer(config, Arc::new(FsRenderer))
    }

    /// Create a network with a caller-supplied image renderer.
    pub fn with_renderer(config: &Config, renderer: Arc<dyn ImageRenderer>) -> Self {
        let events = EventLog::default();
        events.record(Event::NetworkCreated {
            name: config.network.name.clone(),
        });
        info!(network = %config.network.name, "social network created");
        Self {
            name: config.network.name.clone(),
            accounts: DashMap::new(),
            roster: Mutex::new(Vec::new()),
            limits: config.limits.clone(),
            renderer,
            events,
        }
    }

    /// Network display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of registered accounts.
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Look up an account handle by username.
    pub fn account(&self, username: &str) -> Option<SharedAccount> {
        self.accounts.get(username).map(|r| Arc::clone(r.value()))
    }

    /// Copy of the event log, in order.
    pub fn events(&self) -> Vec<Event> {
        self.events.snapshot()
    }

    /// Event log rendered through the message formats.
    pub fn event_lines(&self) -> Vec<String> {
        self.events.rendered()
    }

    // ========================================================================
    // Registry: sign-up, login, logout
    // ========================================================================

    /// Register a new account and open its session.
    ///
    /// Fails with `DuplicateUsername` if the name is taken and with
    /// `InvalidPassword` if the password falls outside the configured
    /// length window. Both checks run before anything is inserted.
    pub fn sign_up(&self, username: &str, password: &str) -> Result<SharedAccount, NetworkError> {
        if self.accounts.contains_key(username) {
            return Err(NetworkError::DuplicateUsername(username.to_string()));
        }
        let len = password.chars().count();
        if len < self.limits.password_min || len > self.limits.password_max {
            return Err(NetworkError::InvalidPassword(password.to_string()));
        }

        let mut account = Account::new(username, password);
        account.is_logged_in = true;
        let shared = Arc::new(RwLock::new(account));

        // The entry API closes the race between the check above and the
        // insert: whoever lands in the vacant slot first wins.
        match self.accounts.entry(username.to_string()) {
            Entry::Occupied(_) => {
                return Err(NetworkError::DuplicateUsername(username.to_string()));
            }
            Entry::Vacant(slot) => {
                slot.insert(Arc::clone(&shared));
            }
        }
        self.roster.lock().push(username.to_string());
        info!(username = %username, "account registered");
        Ok(shared)
    }

    /// Open a session. Soft: an unknown user or a wrong password is
    /// reported and absorbed, never an error.
    pub fn log_in(&self, username: &str, password: &str) {
        let Some(account) = self.account(username) else {
            warn!(username = %username, "login for unknown user absorbed");
            self.events.record(Event::AuthRejected {
                username: username.to_string(),
                reason: AuthRejectReason::UnknownUser,
            });
            return;
        };
        let mut guard = account.write();
        if !guard.check_password(password) {
            warn!(username = %username, "login with wrong password absorbed");
            self.events.record(Event::AuthRejected {
                username: username.to_string(),
                reason: AuthRejectReason::WrongPassword,
            });
            return;
        }
        guard.is_logged_in = true;
        drop(guard);
        info!(username = %username, "connected");
        self.events.record(Event::Connected {
            username: username.to_string(),
        });
    }

    /// Close a session. Soft: an unknown user is reported and absorbed.
    pub fn log_out(&self, username: &str) {
        let Some(account) = self.account(username) else {
            warn!(username = %username, "logout for unknown user absorbed");
            self.events.record(Event::AuthRejected {
                username: username.to_string(),
                reason: AuthRejectReason::UnknownUser,
            });
            return;
        };
        account.write().is_logged_in = false;
        info!(username = %username, "disconnected");
        self.events.record(Event::Disconnected {
            username: username.to_string(),
        });
    }

    // ========================================================================
    // Follow graph
    // ========================================================================

    /// Add `follower` to `target`'s follower set.
    ///
    /// Idempotent under set semantics; self-follow is not blocked, and a
    /// self-follower receives their own fan-out messages.
    pub fn follow(
        &self,
        follower: &SharedAccount,
        target: &SharedAccount,
    ) -> Result<(), NetworkError> {
        let follower_name = {
            let guard = follower.read();
            if !guard.is_logged_in {
                return Err(NetworkError::NotAuthorized { action: "follow" });
            }
            guard.username.clone()
        };
        let target_name = {
            let mut guard = target.write();
            guard.followers.insert(follower_name.clone());
            guard.username.clone()
        };
        info!(follower = %follower_name, target = %target_name, "follow edge added");
        self.events.record(Event::Followed {
            follower: follower_name,
            target: target_name,
        });
        Ok(())
    }

    /// Remove `follower` from `target`'s follower set.
    ///
    /// Fails with `NotFollowing` if the edge does not exist.
    pub fn unfollow(
        &self,
        follower: &SharedAccount,
        target: &SharedAccount,
    ) -> Result<(), NetworkError> {
        let follower_name = {
            let guard = follower.read();
            if !guard.is_logged_in {
                return Err(NetworkError::NotAuthorized { action: "unfollow" });
            }
            guard.username.clone()
        };
        let (removed, target_name) = {
            let mut guard = target.write();
            (guard.followers.remove(&follower_name), guard.username.clone())
        };
        if !removed {
            return Err(NetworkError::NotFollowing {
                follower: follower_name,
                target: target_name,
            });
        }
        info!(follower = %follower_name, target = %target_name, "follow edge removed");
        self.events.record(Event::Unfollowed {
            follower: follower_name,
            target: target_name,
        });
        Ok(())
    }

    // ========================================================================
    // Notification fan-out
    // ========================================================================

    /// Deliver `message` to every current follower of `sender`.
    ///
    /// Each recipient gets exactly one inbox append; delivery order to a
    /// given recipient equals the order of calls at the sender.
    pub fn notify(&self, sender: &SharedAccount, message: &str) {
        let (sender_name, audience) = {
            let guard = sender.read();
            (guard.sender_name().to_string(), guard.audience())
        };
        self.fan_out(&sender_name, &audience, message);
    }

    /// One inbox at a time; the audience was snapshotted beforehand, so no
    /// account lock is held across deliveries.
    fn fan_out(&self, sender: &str, audience: &[String], message: &str) {
        for follower in audience {
            if let Some(account) = self.accounts.get(follower) {
                account.write().deliver(message.to_string());
            }
        }
        debug!(sender = %sender, recipients = audience.len(), "fan-out complete");
    }

    /// Deliver an author-directed notification (like/comment) and record it.
    fn notify_author(&self, author: &str, body: String) {
        if let Some(account) = self.accounts.get(author) {
            account.write().deliver(body.clone());
        }
        self.events.record(Event::NotificationDelivered {
            to: author.to_string(),
            body,
        });
    }

    // ========================================================================
    // Posts
    // ========================================================================

    /// Publish a post.
    ///
    /// Dispatches on the factory tag, appends the post to the author's
    /// list, records the post's `describe()` output, and fans the
    /// new-post message out to every current follower exactly once.
    pub fn publish_post(
        &self,
        author: &SharedAccount,
        post_type: &str,
        content: &str,
        price: Option<f64>,
        location: Option<&str>,
    ) -> Result<SharedPost, NetworkError> {
        let tag: PostType = post_type.parse()?;
        let author_name = {
            let guard = author.read();
            if !guard.is_logged_in {
                return Err(NetworkError::NotAuthorized { action: "publish post" });
            }
            guard.username.clone()
        };

        let post = factory::build(&author_name, tag, content, price, location)?;
        let summary = post.describe();
        let shared = Arc::new(RwLock::new(post));

        let audience = {
            let mut guard = author.write();
            guard.posts.push(Arc::clone(&shared));
            guard.audience()
        };

        info!(author = %author_name, kind = %post_type, "post published");
        self.events.record(Event::PostPublished {
            author: author_name.clone(),
            summary,
        });
        self.fan_out(
            &author_name,
            &audience,
            &format!("{author_name} has a new post"),
        );
        Ok(shared)
    }

    /// Like a post on behalf of `actor`.
    ///
    /// The author is notified unless the actor is the author; own-post
    /// likes still count.
    pub fn like(&self, post: &SharedPost, actor: &SharedAccount) -> Result<(), NetworkError> {
        let (author_name, notification) = {
            let actor_guard = actor.read();
            let mut post_guard = post.write();
            let note = post_guard.like(&actor_guard)?;
            (post_guard.author.clone(), note)
        };
        if let Some(body) = notification {
            self.notify_author(&author_name, body);
        }
        Ok(())
    }

    /// Comment on a post on behalf of `actor`. The comment text reaches
    /// the author's inbox; the commenter's identity is not retained on
    /// the post.
    pub fn comment(
        &self,
        post: &SharedPost,
        actor: &SharedAccount,
        text: &str,
    ) -> Result<(), NetworkError> {
        let (author_name, notification) = {
            let actor_guard = actor.read();
            let mut post_guard = post.write();
            let note = post_guard.comment(&actor_guard, text)?;
            (post_guard.author.clone(), note)
        };
        if let Some(body) = notification {
            self.notify_author(&author_name, body);
        }
        Ok(())
    }

    /// Re-price a sale listing, gated on the author's session and password.
    pub fn discount(
        &self,
        post: &SharedPost,
        percent: f64,
        password: &str,
    ) -> Result<(), NetworkError> {
        let author_name = post.read().author.clone();
        let Some(author) = self.accounts.get(&author_name) else {
            // Accounts are never removed from the directory; a missing
            // author means the post belongs to a different network.
            return Err(NetworkError::InvalidCredential);
        };
        let new_price = {
            let author_guard = author.read();
            post.write().discount(percent, password, &author_guard)?
        };
        info!(seller = %author_name, new_price, "discount applied");
        self.events.record(Event::Discounted {
            seller: author_name,
            new_price,
        });
        Ok(())
    }

    /// Mark a sale listing sold, gated on the author's session and
    /// password. Idempotent; authorization is re-checked every call.
    pub fn mark_sold(&self, post: &SharedPost, password: &str) -> Result<(), NetworkError> {
        let author_name = post.read().author.clone();
        let Some(author) = self.accounts.get(&author_name) else {
            return Err(NetworkError::InvalidCredential);
        };
        {
            let author_guard = author.read();
            post.write().mark_sold(password, &author_guard)?;
        }
        info!(seller = %author_name, "listing sold");
        self.events.record(Event::Sold { seller: author_name });
        Ok(())
    }

    /// Show an image post's picture through the configured renderer.
    pub fn render(&self, post: &SharedPost) -> Result<(), NetworkError> {
        let path = {
            let guard = post.read();
            if !matches!(guard.kind, PostKind::Image) {
                return Err(NetworkError::NotImagePost);
            }
            guard.content.clone()
        };
        self.renderer
            .render(&path)
            .map_err(|RenderError::NotFound(p)| NetworkError::PictureNotFound(p))?;
        self.events.record(Event::Rendered { path });
        Ok(())
    }

    // ========================================================================
    // Reporting
    // ========================================================================

    /// Network name plus one summary line per account, in registration
    /// order.
    pub fn describe(&self) -> String {
        let mut out = format!("{} social network:\n", self.name);
        for username in self.roster.lock().iter() {
            if let Some(account) = self.accounts.get(username) {
                out.push_str(&account.read().describe());
                out.push('\n');
            }
        }
        out
    }
}
