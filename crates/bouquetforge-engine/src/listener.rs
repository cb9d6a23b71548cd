//! Pool mutation notifications.
//!
//! A pool holds an ordered list of subscribers and tells each of them about
//! every flower that joins or leaves it. Subscribers keep their own counts in
//! step with the pool instead of rescanning it on every event.

use bouquetforge_core::Species;

use crate::error::EngineError;

/// Subscriber to the credit/debit stream of one pool.
///
/// Notifications arrive synchronously in registration order.
pub trait PoolListener {
    /// Called after one flower of `species` joined the pool.
    ///
    /// Returns true if the listener can now assemble a bouquet.
    fn on_credit(&mut self, species: Species) -> bool;

    /// Called after `quantity` flowers of `species` left the pool.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::CacheUnderflow` if the listener never saw that
    /// many flowers arrive.
    fn on_debit(&mut self, species: Species, quantity: usize) -> Result<(), EngineError>;
}
