use anyhow::Result;
use cabbook_core::ledger::Ledger;
use cabbook_core::record::{parse_date, parse_time};
use owo_colors::OwoColorize;

use crate::render::render_ledger;

pub fn run(
    ledger: &mut Ledger,
    date: &str,
    time: &str,
    pickup: String,
    destination: String,
) -> Result<()> {
    let date = parse_date(date)?;
    let time = parse_time(time)?;

    let number = ledger.append(date, time, pickup, destination)?;

    println!("{}", format!("Added booking {number}").green());
    println!();
    render_ledger(ledger);

    Ok(())
}
