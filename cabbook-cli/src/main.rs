mod commands;
mod render;

use anyhow::Result;
use cabbook_core::config::CabbookConfig;
use cabbook_core::ledger::Ledger;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cabbook")]
#[command(about = "Record and manage your taxi bookings")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new booking (it starts out Pending)
    Add {
        pickup: String,
        destination: String,

        /// Booking date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Pickup time (HH:MM)
        #[arg(short, long)]
        time: String,
    },
    /// Show all bookings
    List,
    /// Toggle a booking between Pending and Booked
    Book {
        /// Booking number, as shown by `list`
        number: u32,
    },
    /// Cancel a booking (it stays in the list)
    Cancel {
        /// Booking number, as shown by `list`
        number: u32,
    },
    /// Delete a booking and renumber the ones after it
    Delete {
        /// Booking number, as shown by `list`
        number: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = CabbookConfig::load()?;
    let mut ledger = Ledger::load(config.data_path())?;

    match cli.command {
        Commands::Add {
            pickup,
            destination,
            date,
            time,
        } => commands::add::run(&mut ledger, &date, &time, pickup, destination),
        Commands::List => commands::list::run(&ledger),
        Commands::Book { number } => commands::book::run(&mut ledger, number),
        Commands::Cancel { number } => commands::cancel::run(&mut ledger, number),
        Commands::Delete { number } => commands::delete::run(&mut ledger, number),
    }
}
