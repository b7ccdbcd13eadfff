//! flocknet - an embeddable social network core.
//!
//! Accounts, a follow graph, content posts, and a notification fan-out
//! loop, all behind session-gated operations. There is no network or
//! storage boundary: the crate is the in-process API surface plus a
//! structured event log that replaces console output.

pub mod config;
pub mod error;
pub mod events;
pub mod render;
pub mod state;

pub use config::Config;
pub use error::NetworkError;
pub use events::{Event, EventLog};
pub use state::{Account, Network, Post, PostKind, PostType, SharedAccount, SharedPost};
