//! Unified error handling for flocknet.
//!
//! One taxonomy covers every guarded operation on the network. Write-guard
//! failures are hard errors and leave no partial state behind; the soft
//! login/logout path never produces a `NetworkError` at all (see
//! [`crate::state::Network::log_in`]).

use thiserror::Error;

/// Errors surfaced by guarded operations on the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// A mutating operation was attempted without an active session.
    #[error("You are not authorized to {action} because you are not logged in.")]
    NotAuthorized {
        /// The operation that was refused, e.g. `"like"` or `"publish post"`.
        action: &'static str,
    },

    /// Password mismatch on a privileged sale mutation.
    #[error("password invalid")]
    InvalidCredential,

    /// Sign-up with a username that is already registered.
    #[error("The username {0} already exists!")]
    DuplicateUsername(String),

    /// Sign-up with a password outside the configured length window.
    #[error("The password {0} is invalid")]
    InvalidPassword(String),

    /// Unfollow without an existing follow edge.
    #[error("{follower} is not following {target}")]
    NotFollowing { follower: String, target: String },

    /// Post factory tag outside the closed {Text, Image, Sale} set.
    #[error("unknown post type: {0}")]
    UnknownPostType(String),

    /// Sale listing published without both a price and a pickup location.
    #[error("a sale listing requires both a price and a pickup location")]
    IncompleteSaleListing,

    /// Sale-only transition (`discount`/`sold`) invoked on a non-sale post.
    #[error("this post is not a sale listing")]
    NotSaleListing,

    /// Render invoked on a post that carries no picture.
    #[error("this post has no picture to render")]
    NotImagePost,

    /// The image collaborator could not find the picture.
    #[error("the picture not found in {0}")]
    PictureNotFound(String),
}

impl NetworkError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotAuthorized { .. } => "not_authorized",
            Self::InvalidCredential => "invalid_credential",
            Self::DuplicateUsername(_) => "duplicate_username",
            Self::InvalidPassword(_) => "invalid_password",
            Self::NotFollowing { .. } => "not_following",
            Self::UnknownPostType(_) => "unknown_post_type",
            Self::IncompleteSaleListing => "incomplete_sale_listing",
            Self::NotSaleListing => "not_sale_listing",
            Self::NotImagePost => "not_image_post",
            Self::PictureNotFound(_) => "picture_not_found",
        }
    }
}
