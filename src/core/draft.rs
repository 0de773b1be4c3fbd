//! Booking draft state machine.
//!
//! A draft is the in-memory working copy of one booking attempt. It starts
//! in `Editing`, accepts field updates, and moves `Editing -> Submitting ->
//! Confirmed` exactly once; there is no path back. Validation happens before
//! the `Submitting` transition and is reported as a list of problem fields,
//! never as a blocking interaction.
//!
//! Drafts are plain data. The async submission flow (simulated latency,
//! store append, confirmation broadcast) lives in [`crate::core::desk`];
//! everything here is synchronous and unit-testable without a database.

use crate::config::catalog::Catalog;
use crate::core::reservation::NewReservation;
use crate::entities::ReservationKind;
use chrono::NaiveDate;

/// Party sizes the desk accepts, inclusive.
pub const PARTY_SIZE_RANGE: std::ops::RangeInclusive<u8> = 1..=10;

/// Lifecycle status of a booking draft.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftStatus {
    /// Accepting field updates
    Editing,
    /// Submission in flight; no further edits
    Submitting,
    /// A reservation record was written; terminal
    Confirmed,
}

impl DraftStatus {
    /// Status label used in error messages and logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Editing => "editing",
            Self::Submitting => "submitting",
            Self::Confirmed => "confirmed",
        }
    }
}

/// A draft field that failed validation at submit time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftIssue {
    /// No date chosen
    DateMissing,
    /// Date is before today
    DateInPast,
    /// No party size chosen
    PartySizeMissing,
    /// Party size outside [`PARTY_SIZE_RANGE`]
    PartySizeOutOfRange,
    /// No suite / time slot chosen
    SelectionMissing,
    /// Selection is not in the catalog for this draft's kind
    SelectionUnknown,
}

impl DraftIssue {
    /// The field this issue belongs to, for surfaces that report per-field.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Self::DateMissing | Self::DateInPast => "date",
            Self::PartySizeMissing | Self::PartySizeOutOfRange => "party_size",
            Self::SelectionMissing | Self::SelectionUnknown => "selection",
        }
    }

    /// User-facing description of the problem.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::DateMissing => "a date is required",
            Self::DateInPast => "the date must be today or later",
            Self::PartySizeMissing => "the number of guests is required",
            Self::PartySizeOutOfRange => "the number of guests must be between 1 and 10",
            Self::SelectionMissing => "a suite or time slot must be chosen",
            Self::SelectionUnknown => "that suite or time slot is not offered",
        }
    }
}

/// One booking attempt's field state.
///
/// At most one draft exists at a time; ownership is enforced by
/// [`crate::core::desk::BookingDesk`], which holds it as an `Option`.
#[derive(Clone, Debug)]
pub struct BookingDraft {
    kind: ReservationKind,
    status: DraftStatus,
    /// Stay or seating date
    pub date: Option<NaiveDate>,
    /// Number of guests
    pub party_size: Option<u8>,
    /// Suite name (room) or time slot (table)
    pub selection: Option<String>,
    /// Optional name the booking is held under
    pub guest_name: Option<String>,
}

impl BookingDraft {
    /// Creates a fresh draft in `Editing` with every field empty.
    #[must_use]
    pub const fn new(kind: ReservationKind) -> Self {
        Self {
            kind,
            status: DraftStatus::Editing,
            date: None,
            party_size: None,
            selection: None,
            guest_name: None,
        }
    }

    /// The reservation kind this draft was opened for.
    #[must_use]
    pub const fn kind(&self) -> ReservationKind {
        self.kind
    }

    /// Current lifecycle status.
    #[must_use]
    pub const fn status(&self) -> DraftStatus {
        self.status
    }

    /// Whether the draft still accepts field updates.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self.status, DraftStatus::Editing)
    }

    /// Sets the stay/seating date. Ignored outside `Editing`.
    pub fn set_date(&mut self, date: NaiveDate) {
        if self.is_editing() {
            self.date = Some(date);
        }
    }

    /// Sets the guest count. Ignored outside `Editing`.
    pub fn set_party_size(&mut self, party_size: u8) {
        if self.is_editing() {
            self.party_size = Some(party_size);
        }
    }

    /// Sets the suite name or time slot. Ignored outside `Editing`.
    pub fn set_selection(&mut self, selection: impl Into<String>) {
        if self.is_editing() {
            self.selection = Some(selection.into());
        }
    }

    /// Sets the guest name. Ignored outside `Editing`.
    pub fn set_guest_name(&mut self, guest_name: impl Into<String>) {
        if self.is_editing() {
            self.guest_name = Some(guest_name.into());
        }
    }

    /// Validates the draft against the catalog and `today`.
    ///
    /// Returns every problem found, in field order, so a surface can report
    /// them all at once. An empty list means the draft may be submitted.
    #[must_use]
    pub fn issues(&self, catalog: &Catalog, today: NaiveDate) -> Vec<DraftIssue> {
        let mut issues = Vec::new();

        match self.date {
            None => issues.push(DraftIssue::DateMissing),
            Some(date) if date < today => issues.push(DraftIssue::DateInPast),
            Some(_) => {}
        }

        match self.party_size {
            None => issues.push(DraftIssue::PartySizeMissing),
            Some(n) if !PARTY_SIZE_RANGE.contains(&n) => {
                issues.push(DraftIssue::PartySizeOutOfRange);
            }
            Some(_) => {}
        }

        match self.selection.as_deref() {
            None => issues.push(DraftIssue::SelectionMissing),
            Some(selection) if !catalog.allows(self.kind, selection) => {
                issues.push(DraftIssue::SelectionUnknown);
            }
            Some(_) => {}
        }

        issues
    }

    /// Validates the draft and, when it is complete, hands back the
    /// reservation payload to append.
    ///
    /// # Errors
    /// The full issue list when anything is missing or invalid, so every
    /// problem can be reported at once.
    pub fn validate(
        &self,
        catalog: &Catalog,
        today: NaiveDate,
    ) -> std::result::Result<NewReservation, Vec<DraftIssue>> {
        let issues = self.issues(catalog, today);
        match (self.date, self.party_size, self.selection.as_ref()) {
            (Some(date), Some(party_size), Some(selection)) if issues.is_empty() => {
                Ok(NewReservation {
                    kind: self.kind,
                    date,
                    party_size,
                    detail: selection.clone(),
                    guest_name: self.guest_name.clone(),
                })
            }
            _ => Err(issues),
        }
    }

    /// `Editing -> Submitting`. Caller must have validated first.
    pub(crate) fn begin_submit(&mut self) {
        debug_assert_eq!(self.status, DraftStatus::Editing);
        self.status = DraftStatus::Submitting;
    }

    /// `Submitting -> Confirmed`. Terminal.
    pub(crate) fn confirm(&mut self) {
        debug_assert_eq!(self.status, DraftStatus::Submitting);
        self.status = DraftStatus::Confirmed;
    }

    /// `Submitting -> Editing`, taken only when the store append fails so
    /// the caller can fix nothing, retry, or close.
    pub(crate) fn abort_submit(&mut self) {
        debug_assert_eq!(self.status, DraftStatus::Submitting);
        self.status = DraftStatus::Editing;
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::test_catalog;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 15).unwrap()
    }

    #[test]
    fn test_new_draft_is_empty_and_editing() {
        let draft = BookingDraft::new(ReservationKind::Room);
        assert_eq!(draft.status(), DraftStatus::Editing);
        assert!(draft.date.is_none());
        assert!(draft.party_size.is_none());
        assert!(draft.selection.is_none());
        assert!(draft.guest_name.is_none());
    }

    #[test]
    fn test_empty_draft_reports_all_missing_fields() {
        let draft = BookingDraft::new(ReservationKind::Room);
        let issues = draft.issues(&test_catalog(), today());
        assert_eq!(
            issues,
            vec![
                DraftIssue::DateMissing,
                DraftIssue::PartySizeMissing,
                DraftIssue::SelectionMissing,
            ]
        );
    }

    #[test]
    fn test_complete_draft_has_no_issues() {
        let mut draft = BookingDraft::new(ReservationKind::Room);
        draft.set_date(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        draft.set_party_size(2);
        draft.set_selection("Ocean Deluxe");
        assert!(draft.issues(&test_catalog(), today()).is_empty());
    }

    #[test]
    fn test_guest_name_is_optional() {
        let mut draft = BookingDraft::new(ReservationKind::Table);
        draft.set_date(today());
        draft.set_party_size(4);
        draft.set_selection("19:00");
        assert!(draft.issues(&test_catalog(), today()).is_empty());

        draft.set_guest_name("A. Moreau");
        assert!(draft.issues(&test_catalog(), today()).is_empty());
    }

    #[test]
    fn test_past_date_is_rejected() {
        let mut draft = BookingDraft::new(ReservationKind::Room);
        draft.set_date(NaiveDate::from_ymd_opt(2025, 5, 14).unwrap());
        draft.set_party_size(2);
        draft.set_selection("Ocean Deluxe");
        assert_eq!(
            draft.issues(&test_catalog(), today()),
            vec![DraftIssue::DateInPast]
        );
    }

    #[test]
    fn test_today_is_accepted() {
        let mut draft = BookingDraft::new(ReservationKind::Room);
        draft.set_date(today());
        draft.set_party_size(2);
        draft.set_selection("Ocean Deluxe");
        assert!(draft.issues(&test_catalog(), today()).is_empty());
    }

    #[test]
    fn test_party_size_bounds() {
        let mut draft = BookingDraft::new(ReservationKind::Room);
        draft.set_date(today());
        draft.set_selection("Ocean Deluxe");

        draft.set_party_size(0);
        assert_eq!(
            draft.issues(&test_catalog(), today()),
            vec![DraftIssue::PartySizeOutOfRange]
        );

        draft.set_party_size(11);
        assert_eq!(
            draft.issues(&test_catalog(), today()),
            vec![DraftIssue::PartySizeOutOfRange]
        );

        draft.set_party_size(10);
        assert!(draft.issues(&test_catalog(), today()).is_empty());

        draft.set_party_size(1);
        assert!(draft.issues(&test_catalog(), today()).is_empty());
    }

    #[test]
    fn test_selection_must_match_kind() {
        // A dining slot is not a valid suite selection
        let mut draft = BookingDraft::new(ReservationKind::Room);
        draft.set_date(today());
        draft.set_party_size(2);
        draft.set_selection("19:00");
        assert_eq!(
            draft.issues(&test_catalog(), today()),
            vec![DraftIssue::SelectionUnknown]
        );
    }

    #[test]
    fn test_edits_ignored_after_editing_ends() {
        let mut draft = BookingDraft::new(ReservationKind::Room);
        draft.set_date(today());
        draft.begin_submit();

        draft.set_party_size(2);
        draft.set_selection("Ocean Deluxe");
        assert!(draft.party_size.is_none());
        assert!(draft.selection.is_none());
    }

    #[test]
    fn test_validate_returns_payload_when_complete() {
        let mut draft = BookingDraft::new(ReservationKind::Table);
        draft.set_date(today());
        draft.set_party_size(4);
        draft.set_selection("19:00");
        draft.set_guest_name("A. Moreau");

        let new = draft.validate(&test_catalog(), today()).unwrap();
        assert_eq!(new.kind, ReservationKind::Table);
        assert_eq!(new.date, today());
        assert_eq!(new.party_size, 4);
        assert_eq!(new.detail, "19:00");
        assert_eq!(new.guest_name.as_deref(), Some("A. Moreau"));
    }

    #[test]
    fn test_validate_returns_issues_when_incomplete() {
        let mut draft = BookingDraft::new(ReservationKind::Table);
        draft.set_selection("19:00");

        let issues = draft.validate(&test_catalog(), today()).unwrap_err();
        assert_eq!(
            issues,
            vec![DraftIssue::DateMissing, DraftIssue::PartySizeMissing]
        );
    }

    #[test]
    fn test_issue_field_names() {
        assert_eq!(DraftIssue::DateMissing.field(), "date");
        assert_eq!(DraftIssue::DateInPast.field(), "date");
        assert_eq!(DraftIssue::PartySizeOutOfRange.field(), "party_size");
        assert_eq!(DraftIssue::SelectionUnknown.field(), "selection");
    }
}
