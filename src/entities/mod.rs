//! Entity module - SeaORM entity definitions for the database.
//! The only persisted collection is the reservation ledger; booking drafts
//! live entirely in memory and never get a table.

pub mod reservation;

pub use reservation::{
    Column as ReservationColumn, Entity as Reservation, Model as ReservationModel, ReservationKind,
};
