use anyhow::Result;
use cabbook_core::ledger::Ledger;

use crate::render::{Render, render_ledger};

pub fn run(ledger: &mut Ledger, number: u32) -> Result<()> {
    let index = super::to_index(number)?;
    let status = ledger.toggle_booked(index)?;

    println!("Booking {number} is now {}", status.render());
    println!();
    render_ledger(ledger);

    Ok(())
}
