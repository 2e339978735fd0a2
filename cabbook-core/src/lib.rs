//! Core types for cabbook.
//!
//! This crate provides everything cabbook-cli builds on:
//! - `BookingRecord` and `BookingStatus` for individual bookings
//! - `Ledger` for the ordered, persisted booking sequence
//! - `store` for the flat-file format behind the ledger

pub mod config;
pub mod error;
pub mod ledger;
pub mod record;
pub mod store;

pub use error::{LedgerError, LedgerResult};
pub use ledger::Ledger;
pub use record::{BookingRecord, BookingStatus};
