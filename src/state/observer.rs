//! Observer capabilities for notification fan-out.
//!
//! The original design splits an account into a sending role and a
//! receiving role. Here those are two small traits implemented by the one
//! [`Account`](crate::state::Account) type; the fan-out path in
//! [`Network`](crate::state::Network) is written against the traits, not
//! the concrete type.

/// Receiving side of the observer graph: an inbox that accepts
/// notifications in delivery order.
pub trait Receiver {
    /// Append a notification to the inbox. Never fails; a delivery is a
    /// single append.
    fn deliver(&mut self, notification: String);
}

/// Sending side of the observer graph.
pub trait Notifier {
    /// Name the sender goes by in delivered messages.
    fn sender_name(&self) -> &str;

    /// Snapshot of the usernames to deliver to.
    ///
    /// Iteration order is whatever the underlying set yields; callers must
    /// not assume it is sorted, only that it is stable within one run.
    fn audience(&self) -> Vec<String>;
}
