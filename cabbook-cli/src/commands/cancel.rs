use anyhow::Result;
use cabbook_core::ledger::Ledger;
use owo_colors::OwoColorize;

use crate::render::render_ledger;

pub fn run(ledger: &mut Ledger, number: u32) -> Result<()> {
    let index = super::to_index(number)?;
    ledger.cancel(index)?;

    println!("{}", format!("Booking {number} cancelled").red());
    println!();
    render_ledger(ledger);

    Ok(())
}
