//! The booking ledger: the ordered record sequence plus its backing store.

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};

use crate::error::{LedgerError, LedgerResult};
use crate::record::{BookingRecord, BookingStatus};
use crate::store;

/// The in-memory booking sequence, persisted in full after every mutation.
///
/// The ledger is an explicitly owned value: load it once at startup and pass
/// it by reference to whoever renders it. Exactly one mutator at a time,
/// no background tasks.
#[derive(Debug)]
pub struct Ledger {
    path: PathBuf,
    records: Vec<BookingRecord>,
}

impl Ledger {
    /// Load the ledger from its store.
    ///
    /// An absent file is the first run and yields an empty ledger; any other
    /// read or parse failure is surfaced.
    pub fn load(path: impl Into<PathBuf>) -> LedgerResult<Self> {
        let path = path.into();
        let records = store::load(&path)?;

        Ok(Ledger { path, records })
    }

    pub fn records(&self) -> &[BookingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Persist the full sequence, overwriting the store.
    pub fn save(&self) -> LedgerResult<()> {
        store::save(&self.path, &self.records)
    }

    /// Append a new Pending booking and persist. Returns the booking number
    /// assigned to it (current length + 1).
    pub fn append(
        &mut self,
        date: NaiveDate,
        time: NaiveTime,
        pickup: String,
        destination: String,
    ) -> LedgerResult<u32> {
        let number = self.records.len() as u32 + 1;

        self.records.push(BookingRecord {
            number,
            status: BookingStatus::Pending,
            date,
            time,
            pickup,
            destination,
        });

        self.save()?;
        Ok(number)
    }

    /// Flip Pending ⇄ Booked at `index` (0-based). A Cancelled booking is
    /// left unchanged. Persists either way, matching the unconditional save
    /// after every action. Returns the status after the toggle.
    pub fn toggle_booked(&mut self, index: usize) -> LedgerResult<BookingStatus> {
        self.check_index(index)?;

        let record = &mut self.records[index];
        record.status = match record.status {
            BookingStatus::Pending => BookingStatus::Booked,
            BookingStatus::Booked => BookingStatus::Pending,
            BookingStatus::Cancelled => BookingStatus::Cancelled,
        };
        let status = record.status;

        self.save()?;
        Ok(status)
    }

    /// Cancel the booking at `index`. One-way and unconditional: a Booked
    /// booking is cancelled without ceremony, an already-Cancelled one is
    /// re-confirmed, never an error.
    pub fn cancel(&mut self, index: usize) -> LedgerResult<()> {
        self.check_index(index)?;

        self.records[index].status = BookingStatus::Cancelled;
        self.save()
    }

    /// Remove the booking at `index` and renumber every record after it,
    /// keeping booking numbers dense and 1-based. Returns the removed record.
    pub fn delete(&mut self, index: usize) -> LedgerResult<BookingRecord> {
        self.check_index(index)?;

        let removed = self.records.remove(index);
        for record in &mut self.records[index..] {
            record.number -= 1;
        }

        self.save()?;
        Ok(removed)
    }

    fn check_index(&self, index: usize) -> LedgerResult<()> {
        if index >= self.records.len() {
            return Err(LedgerError::OutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(())
    }
}
