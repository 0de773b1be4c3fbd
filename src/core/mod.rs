//! Core business logic - framework-agnostic booking and reservation operations.
//!
//! Nothing in here knows about the CLI (or any other surface). The draft
//! module is pure state; the desk orchestrates submissions; the reservation
//! module owns the ledger.

/// Booking desk: single active draft, submission flow, confirmation broadcast
pub mod desk;
/// Booking draft state machine and validation
pub mod draft;
/// Reservation ledger operations: append, list, clear, code generation
pub mod reservation;
