pub mod add;
pub mod book;
pub mod cancel;
pub mod delete;
pub mod list;

use anyhow::Result;

/// Booking numbers are 1-based in the list; the ledger indexes from 0.
pub(crate) fn to_index(number: u32) -> Result<usize> {
    (number as usize)
        .checked_sub(1)
        .ok_or_else(|| anyhow::anyhow!("Booking numbers start at 1"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_numbers_are_one_based() {
        assert_eq!(to_index(1).unwrap(), 0);
        assert_eq!(to_index(4).unwrap(), 3);
        assert!(to_index(0).is_err());
    }
}
