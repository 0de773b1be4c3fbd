//! Suite and dining-slot catalog loaded from config.toml.
//!
//! The catalog is the source of truth for what a booking draft may select:
//! suite names for room bookings, time slots for table bookings. It is
//! loaded once at startup and handed to the desk; it never touches the
//! database.

use crate::entities::ReservationKind;
use serde::Deserialize;

/// A bookable suite as configured in config.toml
#[derive(Debug, Deserialize, Clone)]
pub struct SuiteConfig {
    /// Display name of the suite (e.g., "Ocean Deluxe")
    pub name: String,
    /// Nightly rate in whole dollars, for catalog listings only
    pub nightly_rate: u32,
    /// Maximum number of guests the suite sleeps
    pub max_guests: u8,
}

/// Dining configuration: the fixed set of seating time slots
#[derive(Debug, Deserialize, Clone)]
pub struct DiningConfig {
    /// Seating slots in `HH:MM` form (e.g., "19:00")
    pub slots: Vec<String>,
}

/// The full selection catalog for both reservation kinds
#[derive(Debug, Deserialize, Clone)]
pub struct Catalog {
    /// All bookable suites
    pub suites: Vec<SuiteConfig>,
    /// Dining slot configuration
    pub dining: DiningConfig,
}

impl Catalog {
    /// Whether `selection` is a valid choice for a draft of the given kind.
    #[must_use]
    pub fn allows(&self, kind: ReservationKind, selection: &str) -> bool {
        match kind {
            ReservationKind::Room => self.suites.iter().any(|s| s.name == selection),
            ReservationKind::Table => self.dining.slots.iter().any(|s| s == selection),
        }
    }

    /// Returns the allowed selection labels for the given kind, in
    /// configuration order.
    #[must_use]
    pub fn selections(&self, kind: ReservationKind) -> Vec<&str> {
        match kind {
            ReservationKind::Room => self.suites.iter().map(|s| s.name.as_str()).collect(),
            ReservationKind::Table => self.dining.slots.iter().map(String::as_str).collect(),
        }
    }
}
