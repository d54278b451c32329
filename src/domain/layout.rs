//! Cabin layout construction
//!
//! A layout is a fixed grid of `rows` x column labels with exactly one
//! column marked as the aisle. Structural classification is decided here,
//! once, at construction:
//!
//! - every seat in the aisle column is unbookable (aisle);
//! - the rear storage block covers the 3-row band ending one row before the
//!   last row, at the rearmost up-to-three columns positioned after the
//!   aisle marker (rows 77-79 x D/E/F in the default 80-row `ABCXDEF`
//!   layout);
//! - everything else starts free.
//!
//! A layout with no columns after the aisle has no storage block.

use thiserror::Error;

use super::seat::{Blockage, SeatId, SeatStatus};

/// Default number of seat rows
pub const DEFAULT_ROWS: u32 = 80;

/// Default ordered column labels, aisle marker included
pub const DEFAULT_COLUMNS: &str = "ABCXDEF";

/// Default aisle marker
pub const DEFAULT_AISLE: char = 'X';

/// Rows in the rear storage band
const STORAGE_BAND_ROWS: u32 = 3;

/// Columns in the rear storage block
const STORAGE_BAND_COLS: usize = 3;

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("Cabin must have at least one seat row")]
    NoRows,

    #[error("Column label sequence is empty")]
    NoColumns,

    #[error("Column label '{0}' is not an ASCII letter")]
    InvalidLabel(char),

    #[error("Duplicate column label '{0}'")]
    DuplicateLabel(char),

    #[error("Aisle marker '{0}' does not appear in the column sequence")]
    AisleMissing(char),
}

/// Immutable cabin geometry: row count, column order, and the structural
/// classification rule
#[derive(Debug, Clone, PartialEq)]
pub struct CabinLayout {
    rows: u32,
    columns: Vec<char>,
    aisle: char,
    storage_cols: Vec<char>,
    /// Inclusive row band; empty when start > end
    storage_band: (u32, u32),
}

impl CabinLayout {
    /// Builds a validated layout from a row count, an ordered column label
    /// string, and the aisle marker. Labels are uppercased.
    pub fn new(rows: u32, columns: &str, aisle: char) -> Result<Self, LayoutError> {
        if rows == 0 {
            return Err(LayoutError::NoRows);
        }

        let aisle = aisle.to_ascii_uppercase();
        let mut labels = Vec::with_capacity(columns.len());
        for label in columns.chars() {
            let label = label.to_ascii_uppercase();
            if !label.is_ascii_alphabetic() {
                return Err(LayoutError::InvalidLabel(label));
            }
            if labels.contains(&label) {
                return Err(LayoutError::DuplicateLabel(label));
            }
            labels.push(label);
        }

        if labels.is_empty() {
            return Err(LayoutError::NoColumns);
        }
        if !labels.contains(&aisle) {
            return Err(LayoutError::AisleMissing(aisle));
        }

        let (storage_cols, storage_band) = storage_plan(rows, &labels, aisle);

        Ok(Self {
            rows,
            columns: labels,
            aisle,
            storage_cols,
            storage_band,
        })
    }

    /// Number of seat rows
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Ordered column labels, aisle included
    pub fn columns(&self) -> &[char] {
        &self.columns
    }

    /// The aisle marker
    pub fn aisle(&self) -> char {
        self.aisle
    }

    /// Total number of grid positions (bookable or not)
    pub fn seat_count(&self) -> usize {
        self.rows as usize * self.columns.len()
    }

    /// Returns true if the coordinates fall inside the grid
    pub fn contains(&self, seat: SeatId) -> bool {
        (1..=self.rows).contains(&seat.row) && self.columns.contains(&seat.col)
    }

    /// Position of a column label in layout order
    pub fn col_index(&self, col: char) -> Option<usize> {
        self.columns.iter().position(|&c| c == col)
    }

    /// Initial status of a seat, or None for coordinates outside the grid
    pub fn classify(&self, seat: SeatId) -> Option<SeatStatus> {
        if !self.contains(seat) {
            return None;
        }
        if seat.col == self.aisle {
            return Some(SeatStatus::Unbookable(Blockage::Aisle));
        }
        if self.is_storage(seat) {
            return Some(SeatStatus::Unbookable(Blockage::Storage));
        }
        Some(SeatStatus::Free)
    }

    /// Iterates every seat in snapshot order: by row, then by column in
    /// layout order
    pub fn seats(&self) -> impl Iterator<Item = SeatId> + '_ {
        (1..=self.rows)
            .flat_map(move |row| self.columns.iter().map(move |&col| SeatId::new(row, col)))
    }

    fn is_storage(&self, seat: SeatId) -> bool {
        let (start, end) = self.storage_band;
        (start..=end).contains(&seat.row) && self.storage_cols.contains(&seat.col)
    }
}

impl Default for CabinLayout {
    fn default() -> Self {
        let columns: Vec<char> = DEFAULT_COLUMNS.chars().collect();
        let (storage_cols, storage_band) = storage_plan(DEFAULT_ROWS, &columns, DEFAULT_AISLE);
        Self {
            rows: DEFAULT_ROWS,
            columns,
            aisle: DEFAULT_AISLE,
            storage_cols,
            storage_band,
        }
    }
}

/// Computes the storage block: the rearmost up-to-three columns after the
/// aisle, over the 3-row band ending one row before the last row.
fn storage_plan(rows: u32, columns: &[char], aisle: char) -> (Vec<char>, (u32, u32)) {
    let after_aisle: Vec<char> = columns
        .iter()
        .skip_while(|&&c| c != aisle)
        .skip(1)
        .copied()
        .collect();
    let cols = after_aisle[after_aisle.len().saturating_sub(STORAGE_BAND_COLS)..].to_vec();

    let end = rows.saturating_sub(1);
    let start = rows.saturating_sub(STORAGE_BAND_ROWS).max(1);

    (cols, (start, end))
}
