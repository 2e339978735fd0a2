//! Booking record types.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

/// A single taxi booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    /// 1-based position in the ledger. Numbers stay dense: they are
    /// recomputed after every deletion, so this is a display number,
    /// not a stable identifier.
    pub number: u32,
    pub status: BookingStatus,
    pub date: NaiveDate,
    /// Pickup time, minute precision (seconds are always zero).
    pub time: NaiveTime,
    pub pickup: String,
    pub destination: String,
}

/// Lifecycle of a booking: Pending ⇄ Booked via the "book" toggle,
/// either of those → Cancelled (one-way).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Pending,
    Booked,
    Cancelled,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Booked => "Booked",
            BookingStatus::Cancelled => "Cancelled",
        };
        f.write_str(label)
    }
}

/// Parse a booking date field (YYYY-MM-DD).
///
/// Rejects both non-numeric input and impossible calendar dates; the input
/// is surfaced in the error, never auto-corrected.
pub fn parse_date(input: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        LedgerError::InvalidInput(format!("Not a valid date: \"{input}\" (expected YYYY-MM-DD)"))
    })
}

/// Parse a booking time field (HH:MM).
pub fn parse_time(input: &str) -> LedgerResult<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M").map_err(|_| {
        LedgerError::InvalidInput(format!("Not a valid time: \"{input}\" (expected HH:MM)"))
    })
}
