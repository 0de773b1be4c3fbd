//! Reservation entity - Represents a confirmed booking record.
//!
//! Each reservation carries a display confirmation code (`VTX-####`), the
//! reservation kind (suite or dining table), a typed stay/seating date, the
//! party size, and the chosen suite or time slot. Records are immutable once
//! written; the only mutation the system performs on this table is clear-all.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Category of a reservation: a suite booking or a dining-table booking.
///
/// Stored as a string column (`"room"` / `"table"`), which keeps the
/// database readable while giving callers a real enum to match on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
pub enum ReservationKind {
    /// A suite booking
    #[sea_orm(string_value = "room")]
    Room,
    /// A dining-table booking
    #[sea_orm(string_value = "table")]
    Table,
}

impl ReservationKind {
    /// Human-readable label used in CLI output and log lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Room => "suite",
            Self::Table => "table",
        }
    }
}

impl std::fmt::Display for ReservationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Reservation database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reservations")]
pub struct Model {
    /// Unique identifier; insertion order is the listing order
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display confirmation code, format `VTX-<digits>`
    #[sea_orm(unique)]
    pub code: String,
    /// Whether this reserves a suite or a dining table
    pub kind: ReservationKind,
    /// Stay date (suite) or seating date (table)
    pub date: Date,
    /// Number of guests, 1 through 10
    pub party_size: i32,
    /// Suite name or dining time slot, depending on `kind`
    pub detail: String,
    /// Name the reservation is held under, when one was given
    pub guest_name: Option<String>,
    /// When the reservation was confirmed
    pub created_at: DateTimeUtc,
}

/// Reservations stand alone; there is no draft table to relate back to
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
