//! Booking records
//!
//! A booking exists only while its seat is reserved: `book` creates it,
//! `release` destroys it, and nothing else does.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::reference::BookingRef;
use super::seat::SeatId;

/// Passenger identity attached to a booking
///
/// All fields are opaque strings; format validation is a caller concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    pub passport: String,
    pub first_name: String,
    pub last_name: String,
}

impl Passenger {
    pub fn new(
        passport: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            passport: passport.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Returns "first last" for display
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One active reservation
///
/// Holds a non-owning back-link to its seat coordinates; the seat's
/// `Reserved` state holds the reference in return (1:1, lifetime-linked).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Ledger key, unique among live bookings
    pub reference: BookingRef,

    /// Who holds the reservation
    pub passenger: Passenger,

    /// The seat this booking occupies
    pub seat: SeatId,

    /// When the booking was made
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Creates a new booking stamped with the current time
    pub fn new(reference: BookingRef, passenger: Passenger, seat: SeatId) -> Self {
        Self {
            reference,
            passenger,
            seat,
            created_at: Utc::now(),
        }
    }
}
