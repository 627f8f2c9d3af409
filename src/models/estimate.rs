//! Equal-share playing-time estimate.

use serde::{Deserialize, Serialize};

/// Proportional minutes per player, for display.
///
/// Independent of any rotation schedule: the outfield figure is the
/// average share of outfield minutes, not what a plan actually gives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EqualShareEstimate {
    /// Minutes for the goalkeeper (always the full match).
    pub goalkeeper_minutes: u32,
    /// Average minutes per outfield player, rounded.
    pub outfield_minutes: u32,
    /// Number of outfield players.
    pub outfield_count: usize,
    /// Whether a designated goalkeeper is attending.
    pub has_goalkeeper: bool,
}
