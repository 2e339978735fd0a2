use anyhow::Result;
use cabbook_core::ledger::Ledger;

use crate::render::render_ledger;

pub fn run(ledger: &Ledger) -> Result<()> {
    render_ledger(ledger);
    Ok(())
}
