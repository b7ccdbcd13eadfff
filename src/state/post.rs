//! Posts and their engagement state machine.
//!
//! A post is a closed tagged variant rather than a class hierarchy: shared
//! engagement state lives on [`Post`], the variant payload on [`PostKind`].
//! Guarded mutations check every precondition before touching state, so a
//! failed call leaves the post exactly as it was.

use crate::error::NetworkError;
use crate::state::account::Account;
use parking_lot::RwLock;
use std::sync::Arc;

/// Shared handle to a post.
pub type SharedPost = Arc<RwLock<Post>>;

/// Variant-specific payload of a post.
#[derive(Debug, Clone, PartialEq)]
pub enum PostKind {
    /// Plain text; `content` is the body.
    Text,
    /// Picture; `content` is the image path handed to the renderer.
    Image,
    /// Product listing with a one-way available -> sold transition.
    Sale {
        price: f64,
        location: String,
        available: bool,
    },
}

/// A published post.
#[derive(Debug)]
pub struct Post {
    /// Username of the authoring account, fixed for the post's lifetime.
    pub author: String,
    /// Opaque payload: body text, image path, or product description.
    pub content: String,
    /// Like counter; equals `likers.len()` at all times.
    pub likes: u64,
    /// Comment counter; commenter identities are not retained.
    pub comments: u64,
    /// Who liked this post, in like order. Duplicates are allowed.
    pub likers: Vec<String>,
    /// Unix timestamp of publication.
    pub created: i64,
    pub kind: PostKind,
}

impl Post {
    pub(crate) fn new(author: &str, content: &str, kind: PostKind) -> Self {
        Self {
            author: author.to_string(),
            content: content.to_string(),
            likes: 0,
            comments: 0,
            likers: Vec::new(),
            created: chrono::Utc::now().timestamp(),
            kind,
        }
    }

    /// Record a like by `actor`.
    ///
    /// Returns the notification to deliver to the author, or `None` when
    /// the actor is the author (own-post likes count but never notify).
    pub(crate) fn like(&mut self, actor: &Account) -> Result<Option<String>, NetworkError> {
        if !actor.is_logged_in {
            return Err(NetworkError::NotAuthorized { action: "like" });
        }
        self.likes += 1;
        self.likers.push(actor.username.clone());
        if actor.username != self.author {
            Ok(Some(format!("{} liked your post", actor.username)))
        } else {
            Ok(None)
        }
    }

    /// Record a comment by `actor`. Only the count is kept.
    pub(crate) fn comment(
        &mut self,
        actor: &Account,
        text: &str,
    ) -> Result<Option<String>, NetworkError> {
        if !actor.is_logged_in {
            return Err(NetworkError::NotAuthorized { action: "comment" });
        }
        self.comments += 1;
        if actor.username != self.author {
            Ok(Some(format!(
                "{} commented on your post: {text}",
                actor.username
            )))
        } else {
            Ok(None)
        }
    }

    /// Re-price a sale listing. `percent` is deliberately unbounded:
    /// values over 100 drive the price negative and negative values raise
    /// it. Returns the new price.
    pub(crate) fn discount(
        &mut self,
        percent: f64,
        password: &str,
        author: &Account,
    ) -> Result<f64, NetworkError> {
        if !author.is_logged_in {
            return Err(NetworkError::NotAuthorized { action: "discount" });
        }
        if !author.check_password(password) {
            return Err(NetworkError::InvalidCredential);
        }
        let PostKind::Sale { price, .. } = &mut self.kind else {
            return Err(NetworkError::NotSaleListing);
        };
        *price *= (100.0 - percent) / 100.0;
        Ok(*price)
    }

    /// Mark a sale listing unavailable. One-way: there is no relist.
    /// Idempotent, but authorization is re-checked on every call.
    pub(crate) fn mark_sold(
        &mut self,
        password: &str,
        author: &Account,
    ) -> Result<(), NetworkError> {
        if !author.is_logged_in {
            return Err(NetworkError::NotAuthorized { action: "sold" });
        }
        if !author.check_password(password) {
            return Err(NetworkError::InvalidCredential);
        }
        let PostKind::Sale { available, .. } = &mut self.kind else {
            return Err(NetworkError::NotSaleListing);
        };
        *available = false;
        Ok(())
    }

    /// Variant-specific human-readable rendering.
    pub fn describe(&self) -> String {
        match &self.kind {
            PostKind::Text => {
                format!("{} published a post:\n\"{}\"\n", self.author, self.content)
            }
            PostKind::Image => format!("{} posted a picture\n", self.author),
            PostKind::Sale {
                price,
                location,
                available,
            } => {
                let status = if *available { "For sale!" } else { "Sold!" };
                format!(
                    "{} posted a product for sale:\n{status} {}, price: {price}, pickup from: {location}\n",
                    self.author, self.content
                )
            }
        }
    }

    /// Current price, for sale listings.
    pub fn price(&self) -> Option<f64> {
        match &self.kind {
            PostKind::Sale { price, .. } => Some(*price),
            _ => None,
        }
    }

    /// Availability flag, for sale listings.
    pub fn is_available(&self) -> Option<bool> {
        match &self.kind {
            PostKind::Sale { available, .. } => Some(*available),
            _ => None,
        }
    }
}
