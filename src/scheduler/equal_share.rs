//! Equal-share minutes estimator.
//!
//! Splits the outfield player-minutes (`C × duration`) evenly across the
//! outfield players. A goalkeeper, when attending, is assumed to play
//! the whole match and is excluded from the split.

use tracing::trace;

use crate::models::{AttendanceRoster, EqualShareEstimate, MatchConfig};

/// Stateless equal-share estimator for a fixed match format.
///
/// # Example
///
/// ```
/// use u_rotation::models::{AttendanceRoster, MatchConfig};
/// use u_rotation::scheduler::EqualShareEstimator;
///
/// let estimator = EqualShareEstimator::new(MatchConfig::nine_a_side());
/// let roster = AttendanceRoster::new(["A", "B", "C", "GK"]).with_goalkeeper("GK");
/// let est = estimator.estimate(&roster);
/// assert!(est.has_goalkeeper);
/// assert_eq!(est.outfield_count, 3);
/// assert_eq!(est.outfield_minutes, 160);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EqualShareEstimator {
    config: MatchConfig,
}

impl EqualShareEstimator {
    /// Creates an estimator.
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// The match format this estimator uses.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Estimates minutes per player for `roster`.
    pub fn estimate(&self, roster: &AttendanceRoster) -> EqualShareEstimate {
        estimate(roster, &self.config)
    }
}

/// Estimates equal-share minutes for `roster` under `config`.
///
/// An empty roster still reports the full match for the goalkeeper
/// figure, with `has_goalkeeper = false`.
pub fn estimate(roster: &AttendanceRoster, config: &MatchConfig) -> EqualShareEstimate {
    if roster.is_empty() {
        return EqualShareEstimate {
            goalkeeper_minutes: config.duration_minutes,
            outfield_minutes: 0,
            outfield_count: 0,
            has_goalkeeper: false,
        };
    }

    let has_goalkeeper = roster.has_goalkeeper();
    let outfield_count = roster.outfield_count();
    let outfield_minutes = rounded_share(config.outfield_slot_minutes(), outfield_count);

    trace!(outfield_count, has_goalkeeper, outfield_minutes, "equal-share estimate");

    EqualShareEstimate {
        goalkeeper_minutes: config.duration_minutes,
        outfield_minutes,
        outfield_count,
        has_goalkeeper,
    }
}

/// `round(total / count)` with halves rounded up; 0 when `count` is 0.
fn rounded_share(total: u64, count: usize) -> u32 {
    if count == 0 {
        return 0;
    }
    let count = count as u64;
    let share = total.saturating_mul(2).saturating_add(count) / count.saturating_mul(2);
    // Saturates at u32::MAX
    u32::try_from(share).unwrap_or_else(|_| {
        trace!(share, "outfield share exceeds u32 minutes, clamping");
        u32::MAX
    })
}
