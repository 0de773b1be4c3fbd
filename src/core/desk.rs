//! The booking desk: owner of the single active draft.
//!
//! The desk is the boundary the surface layer talks to. It enforces the
//! one-draft-at-a-time rule structurally (the draft is an `Option` it owns),
//! runs the submission flow, and notifies subscribers of confirmations over
//! a broadcast channel.
//!
//! Submission awaits a configurable delay where a real backend round trip
//! would go. Tests pass `Duration::ZERO`; the shipped default of 1500 ms
//! comes from config.toml and exists only to exercise the `Submitting`
//! state at the surface.

use crate::config::catalog::Catalog;
use crate::core::draft::{BookingDraft, DraftIssue, DraftStatus};
use crate::core::reservation;
use crate::entities::{ReservationKind, reservation::Model as ReservationModel};
use crate::errors::{Error, Result};
use sea_orm::DatabaseConnection;
use std::time::Duration;
use tokio::sync::broadcast;

/// Capacity of the confirmation broadcast channel. Confirmations are rare
/// and receivers drain them immediately, so a small buffer is plenty.
const CONFIRMED_CHANNEL_CAPACITY: usize = 16;

/// Result of a submission attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The reservation was appended to the ledger
    Confirmed(ReservationModel),
    /// Validation failed; the draft is still editable
    Rejected(Vec<DraftIssue>),
}

/// The single point of entry for booking operations.
pub struct BookingDesk {
    db: DatabaseConnection,
    catalog: Catalog,
    submit_delay: Duration,
    draft: Option<BookingDraft>,
    confirmed_tx: broadcast::Sender<ReservationModel>,
}

impl BookingDesk {
    /// Creates a desk over the given database and catalog.
    #[must_use]
    pub fn new(db: DatabaseConnection, catalog: Catalog, submit_delay: Duration) -> Self {
        let (confirmed_tx, _) = broadcast::channel(CONFIRMED_CHANNEL_CAPACITY);
        Self {
            db,
            catalog,
            submit_delay,
            draft: None,
            confirmed_tx,
        }
    }

    /// The catalog this desk validates selections against.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Opens a fresh draft for `kind`, discarding any prior draft whatever
    /// its state. Reopening never carries fields over.
    pub fn open_draft(&mut self, kind: ReservationKind) -> &mut BookingDraft {
        if let Some(old) = self.draft.take() {
            tracing::debug!(status = old.status().label(), "discarding previous draft");
        }
        self.draft.insert(BookingDraft::new(kind))
    }

    /// Discards the active draft, if any. Closing from `Editing` has no
    /// side effects; closing from `Confirmed` is the normal way out.
    pub fn close_draft(&mut self) {
        self.draft = None;
    }

    /// The active draft, if one is open.
    #[must_use]
    pub const fn draft(&self) -> Option<&BookingDraft> {
        self.draft.as_ref()
    }

    /// Mutable access to the active draft for field updates.
    pub fn draft_mut(&mut self) -> Option<&mut BookingDraft> {
        self.draft.as_mut()
    }

    /// Subscribes to confirmed reservations. Every successful submission is
    /// sent to all live receivers.
    #[must_use]
    pub fn subscribe_confirmed(&self) -> broadcast::Receiver<ReservationModel> {
        self.confirmed_tx.subscribe()
    }

    /// Submits the active draft.
    ///
    /// Validation failures come back as [`SubmitOutcome::Rejected`] with the
    /// draft untouched in `Editing`. On success the draft moves through
    /// `Submitting` (awaiting the configured delay) to `Confirmed`, exactly
    /// one record is appended, and the record is broadcast and returned.
    ///
    /// # Errors
    /// [`Error::NoActiveDraft`] when nothing is open,
    /// [`Error::DraftNotEditing`] when the draft already left `Editing`, and
    /// [`Error::Database`] when the append fails — in which case the draft
    /// drops back to `Editing` so the caller may retry or close.
    pub async fn submit(&mut self) -> Result<SubmitOutcome> {
        let today = chrono::Local::now().date_naive();
        self.submit_with_today(today).await
    }

    /// [`Self::submit`] with an explicit "today", so date validation is
    /// deterministic under test.
    pub async fn submit_with_today(&mut self, today: chrono::NaiveDate) -> Result<SubmitOutcome> {
        let draft = self.draft.as_mut().ok_or(Error::NoActiveDraft)?;

        if draft.status() != DraftStatus::Editing {
            return Err(Error::DraftNotEditing {
                status: draft.status().label(),
            });
        }

        let new = match draft.validate(&self.catalog, today) {
            Ok(new) => new,
            Err(issues) => {
                tracing::debug!(count = issues.len(), "submission rejected by validation");
                return Ok(SubmitOutcome::Rejected(issues));
            }
        };

        draft.begin_submit();

        // Placeholder for the eventual backend call.
        tokio::time::sleep(self.submit_delay).await;

        let stored = match reservation::append_reservation(&self.db, new).await {
            Ok(stored) => stored,
            Err(e) => {
                draft.abort_submit();
                tracing::error!(error = %e, "reservation append failed, draft back to editing");
                return Err(e);
            }
        };

        draft.confirm();
        tracing::info!(code = %stored.code, kind = %stored.kind, "reservation confirmed");

        // No receivers is fine; confirmation is not contingent on listeners.
        let _ = self.confirmed_tx.send(stored.clone());

        Ok(SubmitOutcome::Confirmed(stored))
    }

    /// Lists every stored reservation, oldest first.
    pub async fn list_reservations(&self) -> Result<Vec<ReservationModel>> {
        reservation::list_reservations(&self.db).await
    }

    /// Removes every stored reservation. Returns how many were removed.
    pub async fn clear_reservations(&self) -> Result<u64> {
        reservation::clear_reservations(&self.db).await
    }
}
