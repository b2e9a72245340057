//! Custom actions for the Movie actor.
//!
//! Actions on one movie run one at a time, so each action sees and changes
//! `number_in_stock` without interference from other requests for the same movie. Actions on
//! other movies, in the same shard or not, do not wait for it.

use crate::model::{Rental, RentalDraft};

#[derive(Debug, Clone)]
pub enum MovieAction {
    /// Reads the current stock level.
    CheckStock,
    /// Takes one copy out of stock without recording a rental (a write-off).
    ///
    /// # Errors
    /// `OutOfStock` if the stock is already 0.
    DecrementStockIfPositive,
    /// Appends the rental to the ledger and takes one copy out of stock, as one unit.
    ///
    /// The movie snapshot in the draft is replaced with the live record before appending.
    ///
    /// # Errors
    /// `OutOfStock` if the stock is 0; `LedgerUnavailable` if the append failed, in which
    /// case the stock is unchanged.
    CheckOut(RentalDraft),
}

/// Results from MovieActions - variants match 1:1 with MovieAction
#[derive(Debug, Clone)]
pub enum MovieActionResult {
    CheckStock(u8),
    /// Stock left after the decrement.
    DecrementStockIfPositive(u8),
    CheckOut(Rental),
}
