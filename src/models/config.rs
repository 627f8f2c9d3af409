//! Match format configuration.
//!
//! A `MatchConfig` fixes the two constants a rotation plan depends on:
//! the total match length and how many outfield players may be on the
//! pitch at once. Band boundaries (`C`, `2C`, `3C`) are derived from
//! the capacity, never hard-coded.

use serde::{Deserialize, Serialize};

/// Maximum number of equal segments a match is split into.
///
/// Outfield sets larger than `MAX_SEGMENTS * outfield_capacity` cannot
/// be given minutes by a plan and are rejected by the scheduler.
pub const MAX_SEGMENTS: usize = 3;

/// Immutable constants for a small-sided match format.
///
/// Missing fields fall back to the nine-a-side values when deserialized.
///
/// # Example
///
/// ```
/// use u_rotation::models::MatchConfig;
///
/// let config = MatchConfig::nine_a_side();
/// assert_eq!(config.duration_minutes, 60);
/// assert_eq!(config.outfield_capacity, 8);
/// assert_eq!(config.max_rotating_players(), 24);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Total match length (minutes).
    pub duration_minutes: u32,
    /// Non-goalkeeper players on the pitch simultaneously.
    pub outfield_capacity: usize,
}

impl MatchConfig {
    /// Creates a configuration.
    pub fn new(duration_minutes: u32, outfield_capacity: usize) -> Self {
        Self {
            duration_minutes,
            outfield_capacity,
        }
    }

    /// 9-a-side: 60 minutes, 8 outfield players plus a goalkeeper.
    pub fn nine_a_side() -> Self {
        Self::new(60, 8)
    }

    /// Sets the match length.
    pub fn with_duration(mut self, duration_minutes: u32) -> Self {
        self.duration_minutes = duration_minutes;
        self
    }

    /// Sets the outfield capacity.
    pub fn with_outfield_capacity(mut self, outfield_capacity: usize) -> Self {
        self.outfield_capacity = outfield_capacity;
        self
    }

    /// Largest outfield set a rotation plan can cover (`3C`).
    #[inline]
    pub fn max_rotating_players(&self) -> usize {
        MAX_SEGMENTS.saturating_mul(self.outfield_capacity)
    }

    /// Total outfield player-minutes available (`C × duration`).
    #[inline]
    pub fn outfield_slot_minutes(&self) -> u64 {
        (self.outfield_capacity as u64).saturating_mul(u64::from(self.duration_minutes))
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::nine_a_side()
    }
}
