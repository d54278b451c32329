//! Cabin layout configuration
//!
//! The layout comes from defaults, optionally replaced by a TOML file
//! (`--config` / `CABIN_CONFIG`), with individual `--rows` / `--cols` /
//! `--aisle` flag overrides applied on top. Configuration is construction
//! input only; booking state itself is never persisted.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::{CabinLayout, LayoutError, DEFAULT_AISLE, DEFAULT_COLUMNS, DEFAULT_ROWS};

/// Cabin geometry as supplied by the user
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CabinConfig {
    /// Number of seat rows
    pub rows: u32,

    /// Ordered column labels, aisle marker included
    pub columns: String,

    /// Which column label is the aisle
    pub aisle: char,
}

impl Default for CabinConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS.to_string(),
            aisle: DEFAULT_AISLE,
        }
    }
}

impl CabinConfig {
    /// Loads a cabin config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read cabin config: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse cabin config: {}", path.display()))
    }

    /// Validates the config and builds the layout
    pub fn into_layout(self) -> Result<CabinLayout, LayoutError> {
        CabinLayout::new(self.rows, &self.columns, self.aisle)
    }
}
