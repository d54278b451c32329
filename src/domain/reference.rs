//! Booking reference tokens
//!
//! A reference is a fixed-length token over the uppercase alphanumeric
//! alphabet (A-Z, 0-9), e.g. `Q7K2M9P4`. References identify live bookings
//! and key the ledger; once a booking is deleted its token may be minted
//! again.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of characters in a booking reference
pub const REFERENCE_LEN: usize = 8;

/// Alphabet references are drawn from
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

#[derive(Debug, Error, PartialEq)]
pub enum ReferenceError {
    #[error("Invalid booking reference: expected 8 characters from A-Z and 0-9, got '{0}'")]
    Invalid(String),
}

/// Booking reference in the format `{8 chars of A-Z0-9}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BookingRef(String);

impl BookingRef {
    /// Draws one candidate reference uniformly from the alphabet.
    ///
    /// Uniqueness against live bookings is the caller's concern; the
    /// inventory redraws on collision.
    pub fn mint<R: Rng>(rng: &mut R) -> Self {
        let token = (0..REFERENCE_LEN)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        Self(token)
    }

    /// Returns the token as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for BookingRef {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_uppercase();
        if token.len() != REFERENCE_LEN
            || !token.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        {
            return Err(ReferenceError::Invalid(s.to_string()));
        }
        Ok(Self(token))
    }
}

impl TryFrom<String> for BookingRef {
    type Error = ReferenceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BookingRef> for String {
    fn from(reference: BookingRef) -> Self {
        reference.0
    }
}
