//! Orderbook reconstruction module
//!
//! Contains the bid book, ask book and the state builder that partitions
//! a snapshot's orders between them.

pub mod bid_book;
pub mod ask_book;
pub mod state;

pub use bid_book::BidBook;
pub use ask_book::AskBook;
pub use state::OrderbookState;
