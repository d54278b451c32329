//! Seat identity and seat state
//!
//! Seat ID Format: `{row}{column}` (e.g. `12C`) — row digits followed by a
//! single column letter. Input is case-insensitive; the column is stored
//! uppercase.
//!
//! Parsing is syntax-only. Whether the coordinates fall inside a given
//! cabin is decided by the inventory operations, which report
//! `InvalidCoordinate` for out-of-range seats.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::reference::BookingRef;

#[derive(Debug, Error, PartialEq)]
pub enum SeatIdError {
    #[error("Invalid seat format: expected '{{row}}{{column}}' like '12C', got '{0}'")]
    Invalid(String),

    #[error("Invalid row number in seat '{0}'")]
    InvalidRow(String),
}

/// Seat coordinates in the format `{row}{column}` (e.g. `12C`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SeatId {
    /// 1-based row number
    pub row: u32,
    /// Column label, uppercase
    pub col: char,
}

impl SeatId {
    pub fn new(row: u32, col: char) -> Self {
        Self {
            row,
            col: col.to_ascii_uppercase(),
        }
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.col)
    }
}

impl FromStr for SeatId {
    type Err = SeatIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits: String = s.chars().take_while(|c| c.is_ascii_digit()).collect();
        let rest = &s[digits.len()..];

        if digits.is_empty() || rest.len() != 1 {
            return Err(SeatIdError::Invalid(s.to_string()));
        }

        let col = match rest.chars().next() {
            Some(c) if c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
            _ => return Err(SeatIdError::Invalid(s.to_string())),
        };

        let row: u32 = digits
            .parse()
            .map_err(|_| SeatIdError::InvalidRow(s.to_string()))?;

        Ok(Self { row, col })
    }
}

impl TryFrom<String> for SeatId {
    type Error = SeatIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SeatId> for String {
    fn from(seat: SeatId) -> Self {
        seat.to_string()
    }
}

/// Structural reason a seat can never be booked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Blockage {
    /// The seat position is part of the aisle column
    Aisle,
    /// The seat position is taken up by rear storage
    Storage,
}

impl Blockage {
    /// Returns a display label for the blockage
    pub fn label(&self) -> &'static str {
        match self {
            Blockage::Aisle => "aisle",
            Blockage::Storage => "storage",
        }
    }
}

impl fmt::Display for Blockage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Current state of one seat
///
/// Structural classification (`Unbookable`) is fixed at grid construction
/// and never transitions; `Free` and `Reserved` alternate via book/release.
/// A `Reserved` seat carries the reference of its booking, not the booking
/// itself — the ledger owns the bookings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeatStatus {
    Free,
    Unbookable(Blockage),
    Reserved(BookingRef),
}

impl SeatStatus {
    /// Returns true if the seat is currently bookable
    pub fn is_free(&self) -> bool {
        matches!(self, SeatStatus::Free)
    }

    /// Returns true if the seat holds a live booking
    pub fn is_reserved(&self) -> bool {
        matches!(self, SeatStatus::Reserved(_))
    }

    /// Returns true if the seat can never be booked
    pub fn is_unbookable(&self) -> bool {
        matches!(self, SeatStatus::Unbookable(_))
    }

    /// Projects the status onto its snapshot tag (holder identity dropped)
    pub fn tag(&self) -> SeatTag {
        match self {
            SeatStatus::Free => SeatTag::Free,
            SeatStatus::Reserved(_) => SeatTag::Reserved,
            SeatStatus::Unbookable(Blockage::Aisle) => SeatTag::Aisle,
            SeatStatus::Unbookable(Blockage::Storage) => SeatTag::Storage,
        }
    }
}

/// Status tag as it appears in a grid snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatTag {
    Free,
    Reserved,
    Aisle,
    Storage,
}

impl SeatTag {
    /// One-character symbol used on the rendered seat map
    pub fn symbol(&self) -> char {
        match self {
            SeatTag::Free => 'F',
            SeatTag::Reserved => 'R',
            SeatTag::Aisle => 'X',
            SeatTag::Storage => 'S',
        }
    }
}
