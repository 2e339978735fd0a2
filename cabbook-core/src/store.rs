//! Flat-file persistence for the booking ledger.
//!
//! The store is one JSON file holding the full booking sequence. Every
//! mutation rewrites the whole file; there is no incremental persistence.

use std::io::ErrorKind;
use std::path::Path;

use crate::error::{LedgerError, LedgerResult};
use crate::record::BookingRecord;

/// Read the full booking sequence from `path`.
///
/// A missing file is the first-run case and yields an empty sequence.
/// Any other read or parse failure is surfaced.
pub fn load(path: &Path) -> LedgerResult<Vec<BookingRecord>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(LedgerError::Io(e)),
    };

    serde_json::from_str(&content).map_err(|e| {
        LedgerError::Serialization(format!("Could not parse {}: {e}", path.display()))
    })
}

/// Overwrite `path` with the full booking sequence, creating the parent
/// directory on first save.
pub fn save(path: &Path, records: &[BookingRecord]) -> LedgerResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = serde_json::to_string_pretty(records)
        .map_err(|e| LedgerError::Serialization(e.to_string()))?;

    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::BookingStatus;
    use chrono::{NaiveDate, NaiveTime};
    use tempfile::TempDir;

    fn record(number: u32, status: BookingStatus) -> BookingRecord {
        BookingRecord {
            number,
            status,
            date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            time: NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
            pickup: "Airport".to_string(),
            destination: "Downtown".to_string(),
        }
    }

    #[test]
    fn round_trip_preserves_every_field() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bookings.json");

        let records = vec![
            record(1, BookingStatus::Pending),
            record(2, BookingStatus::Booked),
            record(3, BookingStatus::Cancelled),
        ];

        save(&path, &records).unwrap();
        assert_eq!(load(&path).unwrap(), records);
    }

    #[test]
    fn empty_sequence_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bookings.json");

        save(&path, &[]).unwrap();
        assert!(load(&path).unwrap().is_empty());
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        let loaded = load(&dir.path().join("does-not-exist.json")).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn corrupt_store_is_a_serialization_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bookings.json");
        std::fs::write(&path, "not json at all").unwrap();

        assert!(matches!(load(&path), Err(LedgerError::Serialization(_))));
    }

    #[test]
    fn save_creates_the_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/data/bookings.json");

        save(&path, &[record(1, BookingStatus::Pending)]).unwrap();
        assert_eq!(load(&path).unwrap().len(), 1);
    }
}
