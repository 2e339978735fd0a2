//! Terminal rendering for cabbook types.
//!
//! Extension traits that add colored terminal rendering to cabbook-core
//! types using owo_colors.

use cabbook_core::ledger::Ledger;
use cabbook_core::record::{BookingRecord, BookingStatus};
use owo_colors::OwoColorize;

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for BookingStatus {
    fn render(&self) -> String {
        match self {
            BookingStatus::Pending => "Pending".yellow().to_string(),
            BookingStatus::Booked => "Booked".green().to_string(),
            BookingStatus::Cancelled => "Cancelled".red().to_string(),
        }
    }
}

impl Render for BookingRecord {
    fn render(&self) -> String {
        let route = format!("{} -> {}", self.pickup, self.destination);

        format!(
            "Booking {}: {} - {} {} - {}",
            self.number,
            self.status.render(),
            self.date.format("%d/%m/%Y"),
            self.time.format("%H:%M"),
            route,
        )
    }
}

/// Print the full ledger, one row per booking.
pub fn render_ledger(ledger: &Ledger) {
    if ledger.is_empty() {
        println!("{}", "No bookings yet".dimmed());
        return;
    }

    for record in ledger.records() {
        println!("{}", record.render());
    }
}
