//! State management module.
//!
//! Contains the Network (shared social graph state) and its entities.

mod account;
mod factory;
mod network;
mod observer;
mod post;

pub use account::Account;
pub use factory::PostType;
pub use network::{Network, SharedAccount};
pub use observer::{Notifier, Receiver};
pub use post::{Post, PostKind, SharedPost};
