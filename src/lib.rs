//! Cabin CLI - in-memory seat inventory and booking for a single flight
//!
//! Cabin models one flight's seat grid: seats are free, reserved, or
//! structurally unavailable (aisle/storage), and a booking ledger records
//! which passenger holds which reservation. The domain core exposes four
//! operations (availability, book, release, report); the CLI wraps them in
//! an interactive session plus one-shot layout commands.

pub mod cli;
pub mod config;
pub mod domain;

pub use domain::{
    Availability, Booking, BookingRef, CabinLayout, Passenger, SeatId, SeatInventory, SeatStatus,
};
