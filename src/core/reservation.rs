//! Reservation store operations.
//!
//! The store is an append-only ledger: records are written once on
//! confirmation, listed in insertion order, and only ever removed all at
//! once. Every operation returns an explicit `Result`; a storage failure is
//! the caller's to handle, never silently dropped.

use crate::{
    entities::{Reservation, ReservationColumn, ReservationKind, reservation},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use rand::Rng;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

/// How many 4-digit codes to try before widening to 6 digits.
const SHORT_CODE_ATTEMPTS: u32 = 8;
/// Total attempts before giving up with [`Error::CodeExhausted`].
const MAX_CODE_ATTEMPTS: u32 = 16;

/// Everything needed to append one reservation. Built by the desk from a
/// validated draft; surfaces never construct records directly.
#[derive(Debug, Clone)]
pub struct NewReservation {
    /// Suite or table
    pub kind: ReservationKind,
    /// Stay or seating date
    pub date: NaiveDate,
    /// Number of guests
    pub party_size: u8,
    /// Suite name or time slot
    pub detail: String,
    /// Optional name the booking is held under
    pub guest_name: Option<String>,
}

/// Appends a reservation to the ledger and returns the stored record,
/// including its generated confirmation code and timestamp.
pub async fn append_reservation(
    db: &DatabaseConnection,
    new: NewReservation,
) -> Result<reservation::Model> {
    let code = generate_confirmation_code(db).await?;
    let now = chrono::Utc::now();

    let model = reservation::ActiveModel {
        code: Set(code),
        kind: Set(new.kind),
        date: Set(new.date),
        party_size: Set(i32::from(new.party_size)),
        detail: Set(new.detail),
        guest_name: Set(new.guest_name),
        created_at: Set(now),
        ..Default::default()
    };

    let stored = model.insert(db).await?;
    tracing::debug!(code = %stored.code, kind = %stored.kind, "appended reservation");
    Ok(stored)
}

/// Lists every reservation in insertion order (oldest first).
pub async fn list_reservations(db: &DatabaseConnection) -> Result<Vec<reservation::Model>> {
    Reservation::find()
        .order_by_asc(ReservationColumn::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Deletes every reservation unconditionally. Returns the number removed;
/// clearing an empty ledger is a no-op that returns 0.
pub async fn clear_reservations(db: &DatabaseConnection) -> Result<u64> {
    let result = Reservation::delete_many().exec(db).await?;
    tracing::debug!(rows = result.rows_affected, "cleared reservations");
    Ok(result.rows_affected)
}

/// Generates a confirmation code that no stored reservation already uses.
///
/// Codes are `VTX-` plus 4 random digits for display friendliness. Because
/// that range is small, each candidate is checked against the ledger and
/// re-rolled on collision; after [`SHORT_CODE_ATTEMPTS`] collisions the
/// digit count widens to 6. The `code` column is unique as a backstop.
pub async fn generate_confirmation_code(db: &DatabaseConnection) -> Result<String> {
    generate_code_with_attempts(db, SHORT_CODE_ATTEMPTS, MAX_CODE_ATTEMPTS).await
}

/// [`generate_confirmation_code`] with explicit attempt limits, so the
/// widening and exhaustion paths can be driven deterministically under test.
async fn generate_code_with_attempts(
    db: &DatabaseConnection,
    short_attempts: u32,
    max_attempts: u32,
) -> Result<String> {
    for attempt in 0..max_attempts {
        let candidate = if attempt < short_attempts {
            format!("VTX-{:04}", rand::thread_rng().gen_range(0..10_000))
        } else {
            format!("VTX-{:06}", rand::thread_rng().gen_range(0..1_000_000))
        };

        let taken = Reservation::find()
            .filter(ReservationColumn::Code.eq(candidate.as_str()))
            .count(db)
            .await?
            > 0;

        if !taken {
            return Ok(candidate);
        }
        tracing::debug!(code = %candidate, attempt, "confirmation code collision, re-rolling");
    }

    Err(Error::CodeExhausted {
        attempts: max_attempts,
    })
}
