//! Seat inventory manager
//!
//! Owns the seat grid and the booking ledger, and is their sole mutator.
//! Every operation validates its own coordinates, returns a discriminated
//! result, and either fully succeeds or leaves all state untouched.
//!
//! Per-seat state machine: Free <-> Reserved via book/release; Unbookable
//! is a permanent sink with no transitions in or out.

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

use super::booking::{Booking, Passenger};
use super::layout::CabinLayout;
use super::reference::BookingRef;
use super::seat::{Blockage, SeatId, SeatStatus, SeatTag};

/// Redraw limit when minting a booking reference. With a 36^8 token space
/// and at most one live booking per seat, hitting this means the RNG is
/// broken, not the cabin full.
const MAX_MINT_ATTEMPTS: u32 = 64;

#[derive(Debug, Error, PartialEq)]
pub enum InventoryError {
    #[error("Seat {0} is outside the cabin layout")]
    InvalidCoordinate(SeatId),

    #[error("Seat {seat} cannot be booked ({blockage})")]
    SeatUnbookable { seat: SeatId, blockage: Blockage },

    #[error("Seat {0} is already reserved")]
    SeatAlreadyReserved(SeatId),

    #[error("Seat {0} is not reserved")]
    SeatNotReserved(SeatId),

    #[error("Could not mint a unique booking reference after {0} attempts")]
    ReferenceSpaceExhausted(u32),
}

/// Violation of the 1:1 seat/ledger link reported by [`SeatInventory::audit`]
#[derive(Debug, Error, PartialEq)]
pub enum AuditError {
    #[error("Seat {seat} is reserved under {reference}, but the ledger has no matching booking")]
    DanglingReservation { seat: SeatId, reference: BookingRef },

    #[error("Booking {reference} points at seat {seat}, which is not reserved under it")]
    OrphanBooking { reference: BookingRef, seat: SeatId },
}

/// Answer to an availability query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    Reserved,
    Unbookable(Blockage),
}

impl Availability {
    /// Returns a display label for the availability
    pub fn label(&self) -> &'static str {
        match self {
            Availability::Available => "available",
            Availability::Reserved => "reserved",
            Availability::Unbookable(_) => "unbookable",
        }
    }
}

/// One entry of a grid snapshot: status tag only, no holder identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeatSnapshot {
    pub seat: SeatId,
    pub tag: SeatTag,
}

/// The seat grid and booking ledger for one flight
pub struct SeatInventory {
    layout: CabinLayout,
    /// Row-major in layout order, aligned with `layout.seats()`
    seats: Vec<SeatStatus>,
    bookings: HashMap<BookingRef, Booking>,
}

impl SeatInventory {
    /// Builds the grid for a layout, classifying every seat per the layout
    /// rule. Deterministic; no other side effects.
    pub fn new(layout: CabinLayout) -> Self {
        let seats = layout
            .seats()
            .filter_map(|seat| layout.classify(seat))
            .collect();
        Self {
            layout,
            seats,
            bookings: HashMap::new(),
        }
    }

    /// The layout this inventory was built from
    pub fn layout(&self) -> &CabinLayout {
        &self.layout
    }

    /// Current availability of a seat. Read-only.
    pub fn availability(&self, seat: SeatId) -> Result<Availability, InventoryError> {
        Ok(match self.status(seat)? {
            SeatStatus::Free => Availability::Available,
            SeatStatus::Reserved(_) => Availability::Reserved,
            SeatStatus::Unbookable(blockage) => Availability::Unbookable(*blockage),
        })
    }

    /// Books a free seat for a passenger and returns the minted reference.
    ///
    /// Fails without mutation when the seat is outside the grid, structurally
    /// unbookable, or already reserved.
    pub fn book(&mut self, seat: SeatId, passenger: Passenger) -> Result<BookingRef, InventoryError> {
        let idx = self.index(seat)?;
        match &self.seats[idx] {
            SeatStatus::Unbookable(blockage) => {
                return Err(InventoryError::SeatUnbookable {
                    seat,
                    blockage: *blockage,
                })
            }
            SeatStatus::Reserved(_) => return Err(InventoryError::SeatAlreadyReserved(seat)),
            SeatStatus::Free => {}
        }

        let reference = self.mint_reference()?;
        self.seats[idx] = SeatStatus::Reserved(reference.clone());
        self.bookings.insert(
            reference.clone(),
            Booking::new(reference.clone(), passenger, seat),
        );
        Ok(reference)
    }

    /// Releases a reserved seat, deletes its booking from the ledger, and
    /// returns the removed booking. The reference becomes eligible for
    /// reuse.
    ///
    /// Fails without mutation when the seat is outside the grid,
    /// structurally unbookable, or not reserved.
    pub fn release(&mut self, seat: SeatId) -> Result<Booking, InventoryError> {
        let idx = self.index(seat)?;
        let reference = match &self.seats[idx] {
            SeatStatus::Unbookable(blockage) => {
                return Err(InventoryError::SeatUnbookable {
                    seat,
                    blockage: *blockage,
                })
            }
            SeatStatus::Free => return Err(InventoryError::SeatNotReserved(seat)),
            SeatStatus::Reserved(reference) => reference.clone(),
        };

        // book/release are the only mutators, so the ledger entry must
        // exist; a miss means the 1:1 link broke and audit() will name it
        let booking = self
            .bookings
            .remove(&reference)
            .ok_or(InventoryError::SeatNotReserved(seat))?;
        self.seats[idx] = SeatStatus::Free;
        Ok(booking)
    }

    /// Snapshot of every seat's status tag, ordered by row then by column
    /// in layout order. Read-only.
    pub fn snapshot(&self) -> Vec<SeatSnapshot> {
        self.layout
            .seats()
            .zip(self.seats.iter())
            .map(|(seat, status)| SeatSnapshot {
                seat,
                tag: status.tag(),
            })
            .collect()
    }

    /// Number of seats currently free. Read-only.
    pub fn available_count(&self) -> usize {
        self.seats.iter().filter(|s| s.is_free()).count()
    }

    /// Looks up a booking by its reference
    pub fn booking(&self, reference: &BookingRef) -> Option<&Booking> {
        self.bookings.get(reference)
    }

    /// Looks up the booking occupying a seat, if any
    pub fn booking_at(&self, seat: SeatId) -> Option<&Booking> {
        match self.status(seat).ok()? {
            SeatStatus::Reserved(reference) => self.bookings.get(reference),
            _ => None,
        }
    }

    /// All live bookings, ordered by reference for stable output
    pub fn bookings(&self) -> Vec<&Booking> {
        let mut all: Vec<&Booking> = self.bookings.values().collect();
        all.sort_by(|a, b| a.reference.cmp(&b.reference));
        all
    }

    /// Verifies the 1:1 seat/ledger invariant in both directions: every
    /// reserved seat's reference resolves to a booking for that seat, and
    /// every booking's seat is reserved under its reference.
    pub fn audit(&self) -> Result<(), AuditError> {
        for (seat, status) in self.layout.seats().zip(self.seats.iter()) {
            if let SeatStatus::Reserved(reference) = status {
                match self.bookings.get(reference) {
                    Some(booking) if booking.seat == seat => {}
                    _ => {
                        return Err(AuditError::DanglingReservation {
                            seat,
                            reference: reference.clone(),
                        })
                    }
                }
            }
        }

        for booking in self.bookings.values() {
            let linked = matches!(
                self.status(booking.seat),
                Ok(SeatStatus::Reserved(reference)) if *reference == booking.reference
            );
            if !linked {
                return Err(AuditError::OrphanBooking {
                    reference: booking.reference.clone(),
                    seat: booking.seat,
                });
            }
        }

        Ok(())
    }

    fn index(&self, seat: SeatId) -> Result<usize, InventoryError> {
        if !self.layout.contains(seat) {
            return Err(InventoryError::InvalidCoordinate(seat));
        }
        self.layout
            .col_index(seat.col)
            .map(|col| (seat.row as usize - 1) * self.layout.columns().len() + col)
            .ok_or(InventoryError::InvalidCoordinate(seat))
    }

    fn status(&self, seat: SeatId) -> Result<&SeatStatus, InventoryError> {
        self.index(seat).map(|idx| &self.seats[idx])
    }

    fn mint_reference(&self) -> Result<BookingRef, InventoryError> {
        let mut rng = rand::thread_rng();
        for _ in 0..MAX_MINT_ATTEMPTS {
            let candidate = BookingRef::mint(&mut rng);
            if !self.bookings.contains_key(&candidate) {
                return Ok(candidate);
            }
        }
        Err(InventoryError::ReferenceSpaceExhausted(MAX_MINT_ATTEMPTS))
    }
}

impl Default for SeatInventory {
    fn default() -> Self {
        Self::new(CabinLayout::default())
    }
}
