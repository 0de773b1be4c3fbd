//! Shared test utilities for `vertex-desk`.
//!
//! Common helpers for setting up in-memory databases, a zero-delay desk,
//! and reservation payloads with sensible defaults.

use crate::{
    config::catalog::{Catalog, DiningConfig, SuiteConfig},
    core::desk::BookingDesk,
    core::reservation::NewReservation,
    entities::ReservationKind,
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use std::time::Duration;

/// The fixed "today" used for date validation in tests.
#[must_use]
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 15).expect("valid test date")
}

/// A small catalog matching the resort's real offering: two suites and
/// three dinner seatings.
#[must_use]
pub fn test_catalog() -> Catalog {
    Catalog {
        suites: vec![
            SuiteConfig {
                name: "Ocean Deluxe".to_string(),
                nightly_rate: 850,
                max_guests: 2,
            },
            SuiteConfig {
                name: "The Presidential Suite".to_string(),
                nightly_rate: 1200,
                max_guests: 4,
            },
        ],
        dining: DiningConfig {
            slots: vec![
                "19:00".to_string(),
                "20:00".to_string(),
                "21:00".to_string(),
            ],
        },
    }
}

/// Creates an in-memory `SQLite` database with the schema initialized.
/// This is the standard setup for all store tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a desk over a fresh in-memory database with the test catalog
/// and zero submission delay.
pub async fn setup_test_desk() -> Result<BookingDesk> {
    let db = setup_test_db().await?;
    Ok(BookingDesk::new(db, test_catalog(), Duration::ZERO))
}

/// A valid reservation payload with sensible defaults.
///
/// # Defaults
/// * `date`: 2025-06-01
/// * `party_size`: 2
/// * `detail`: `"Ocean Deluxe"` for rooms, `"19:00"` for tables
/// * `guest_name`: None
#[must_use]
pub fn test_new_reservation(kind: ReservationKind) -> NewReservation {
    let detail = match kind {
        ReservationKind::Room => "Ocean Deluxe",
        ReservationKind::Table => "19:00",
    };
    NewReservation {
        kind,
        date: NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid test date"),
        party_size: 2,
        detail: detail.to_string(),
        guest_name: None,
    }
}
