use std::ops::Index;

use crate::consts::LEVEL_COUNT;
use crate::error::{HistMatchError, Result};

use super::cdf::Cdf;

/// Lookup table from source intensity to matched intensity.
///
/// Not necessarily monotonic or injective: flat stretches in either CDF
/// can send several source levels to one target level, or out of order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MappingTable([u8; LEVEL_COUNT]);

/// Coarse shape of a table, as reported when inspecting exports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MappingKind {
    Identity,
    Monotonic { min: u8, max: u8 },
    NonMonotonic { min: u8, max: u8 },
}

impl Default for MappingTable {
    fn default() -> Self {
        Self::identity()
    }
}

impl MappingTable {
    /// The no-op table: every level maps to itself.
    pub fn identity() -> Self {
        Self(std::array::from_fn(|k| k as u8))
    }

    pub fn from_levels(levels: [u8; LEVEL_COUNT]) -> Self {
        Self(levels)
    }

    /// Build a table from a slice that must hold exactly 256 levels.
    pub fn from_slice(levels: &[u8]) -> Result<Self> {
        let levels: [u8; LEVEL_COUNT] = levels.try_into().map_err(|_| {
            HistMatchError::InvalidInput(format!(
                "mapping table has {} entries, expected {}",
                levels.len(),
                LEVEL_COUNT
            ))
        })?;
        Ok(Self(levels))
    }

    pub fn levels(&self) -> &[u8; LEVEL_COUNT] {
        &self.0
    }

    #[inline]
    pub fn lookup(&self, level: u8) -> u8 {
        self.0[level as usize]
    }

    pub fn is_identity(&self) -> bool {
        self.0.iter().enumerate().all(|(k, &v)| k == v as usize)
    }

    /// True when the table never maps a higher level below a lower one.
    pub fn is_monotonic(&self) -> bool {
        self.0.windows(2).all(|w| w[0] <= w[1])
    }

    pub fn kind(&self) -> MappingKind {
        if self.is_identity() {
            return MappingKind::Identity;
        }
        let (min, max) = self.output_range();
        if self.is_monotonic() {
            MappingKind::Monotonic { min, max }
        } else {
            MappingKind::NonMonotonic { min, max }
        }
    }

    /// Smallest and largest output level.
    pub fn output_range(&self) -> (u8, u8) {
        let min = self.0.iter().copied().min().unwrap_or(0);
        let max = self.0.iter().copied().max().unwrap_or(0);
        (min, max)
    }
}

impl Index<u8> for MappingTable {
    type Output = u8;

    fn index(&self, level: u8) -> &u8 {
        &self.0[level as usize]
    }
}

/// Build the lookup table that carries `source` onto `target`.
///
/// Each source level `s` maps to the target level whose CDF value is closest
/// to `source[s]`. Ties go to the smallest target level.
pub fn build_mapping(source: &Cdf, target: &Cdf) -> MappingTable {
    let levels = std::array::from_fn(|s| nearest_level(target, source.values()[s]));
    MappingTable(levels)
}

/// First level of `cdf` minimising `|cdf[t] - probability|`.
fn nearest_level(cdf: &Cdf, probability: f64) -> u8 {
    let mut best_level = 0usize;
    let mut best_diff = f64::INFINITY;
    for (level, &value) in cdf.values().iter().enumerate() {
        let diff = (value - probability).abs();
        // Strict comparison keeps the earliest level on ties.
        if diff < best_diff {
            best_diff = diff;
            best_level = level;
        }
    }
    best_level as u8
}
