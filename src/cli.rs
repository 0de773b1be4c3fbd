//! Command-line surface for the reservation desk.
//!
//! This layer translates arguments into core calls and formats the results;
//! it holds no booking logic of its own. `book` runs one booking attempt
//! through the draft state machine, `reservations` lists the ledger,
//! `clear` empties it, and `catalog` shows what can be booked.

use crate::config::AppConfig;
use crate::core::desk::{BookingDesk, SubmitOutcome};
use crate::entities::{ReservationKind, ReservationModel};
use crate::errors::{Error, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use sea_orm::DatabaseConnection;

/// Reservation desk for the VERTEX resort.
#[derive(Debug, Parser)]
#[command(name = "vertex-desk", version, about)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Book a suite or a dining table
    #[command(subcommand)]
    Book(BookCommand),
    /// List all confirmed reservations
    Reservations,
    /// Remove every stored reservation
    Clear {
        /// Confirm the removal; without this flag nothing is deleted
        #[arg(long)]
        yes: bool,
    },
    /// Show the suites and dining slots available for booking
    Catalog,
}

#[derive(Debug, Subcommand)]
enum BookCommand {
    /// Book a suite
    Room(BookArgs),
    /// Reserve a dining table
    Table(BookArgs),
}

#[derive(Debug, Args)]
struct BookArgs {
    /// Stay or seating date, YYYY-MM-DD
    #[arg(long)]
    date: String,
    /// Number of guests (1-10)
    #[arg(long)]
    guests: u8,
    /// Suite name (for `room`) or time slot like 19:00 (for `table`)
    #[arg(long, value_name = "SELECTION")]
    choice: String,
    /// Name to hold the reservation under
    #[arg(long)]
    name: Option<String>,
}

impl Cli {
    /// Parses process arguments.
    #[must_use]
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Executes the parsed command against a fresh desk.
    pub async fn run(self, db: DatabaseConnection, config: AppConfig) -> Result<()> {
        let submit_delay = config.submit_delay();
        let mut desk = BookingDesk::new(db, config.catalog, submit_delay);

        match self.command {
            Command::Book(BookCommand::Room(args)) => {
                book(&mut desk, ReservationKind::Room, args).await
            }
            Command::Book(BookCommand::Table(args)) => {
                book(&mut desk, ReservationKind::Table, args).await
            }
            Command::Reservations => list(&desk).await,
            Command::Clear { yes } => clear(&desk, yes).await,
            Command::Catalog => {
                print_catalog(&desk);
                Ok(())
            }
        }
    }
}

/// Runs one booking attempt through the draft state machine.
async fn book(desk: &mut BookingDesk, kind: ReservationKind, args: BookArgs) -> Result<()> {
    let date = parse_date(&args.date)?;

    let draft = desk.open_draft(kind);
    draft.set_date(date);
    draft.set_party_size(args.guests);
    draft.set_selection(args.choice);
    if let Some(name) = args.name {
        draft.set_guest_name(name);
    }

    println!("Submitting your {} request...", kind.label());
    match desk.submit().await? {
        SubmitOutcome::Confirmed(record) => {
            println!("Confirmed! Your confirmation code is {}.", record.code);
            println!("{}", format_reservation(&record));
        }
        SubmitOutcome::Rejected(issues) => {
            println!("Your request could not be submitted:");
            for issue in issues {
                println!("  - {}: {}", issue.field(), issue.message());
            }
        }
    }
    desk.close_draft();
    Ok(())
}

async fn list(desk: &BookingDesk) -> Result<()> {
    let reservations = desk.list_reservations().await?;
    if reservations.is_empty() {
        println!("No reservations found.");
        return Ok(());
    }

    println!("{} reservation(s):", reservations.len());
    for record in &reservations {
        println!("{}", format_reservation(record));
    }
    Ok(())
}

async fn clear(desk: &BookingDesk, yes: bool) -> Result<()> {
    if !yes {
        println!("This permanently removes all booking records. Re-run with --yes to confirm.");
        return Ok(());
    }
    let removed = desk.clear_reservations().await?;
    println!("Removed {removed} reservation(s).");
    Ok(())
}

fn print_catalog(desk: &BookingDesk) {
    println!("Suites:");
    for suite in &desk.catalog().suites {
        println!(
            "  {} - ${}/night, sleeps {}",
            suite.name, suite.nightly_rate, suite.max_guests
        );
    }
    println!("Dinner seatings:");
    for slot in &desk.catalog().dining.slots {
        println!("  {slot}");
    }
}

/// Parses a `YYYY-MM-DD` date argument.
fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| Error::InvalidDate {
        value: value.to_string(),
    })
}

/// One reservation as a display line, e.g.
/// `VTX-4821  suite  Jun 1, 2025  2 guests  Ocean Deluxe (Ada Mol)`.
fn format_reservation(record: &ReservationModel) -> String {
    let guests = if record.party_size == 1 {
        "1 guest".to_string()
    } else {
        format!("{} guests", record.party_size)
    };
    let mut line = format!(
        "{}  {}  {}  {}  {}",
        record.code,
        record.kind,
        record.date.format("%b %-d, %Y"),
        guests,
        record.detail
    );
    if let Some(name) = &record.guest_name {
        line.push_str(&format!(" ({name})"));
    }
    line
}
