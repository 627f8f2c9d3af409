//! Rotation schedule (solution) model.
//!
//! A rotation schedule splits the match into contiguous segments, each
//! with a fixed set of outfield players on the pitch. Changeovers between
//! segments are derived on demand rather than stored.

use serde::{Deserialize, Serialize};

/// A complete rotation plan for one match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationSchedule {
    /// Segments in match order, tiling `[0, duration)`.
    pub segments: Vec<Segment>,
    /// Player swaps across all segment boundaries.
    pub total_substitutions: usize,
}

/// A contiguous stretch of match time with a fixed on/off assignment.
///
/// `on_players` and `off_players` partition the outfield set; both keep
/// its name-sorted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Start minute (inclusive).
    pub start_minute: u32,
    /// End minute (exclusive).
    pub end_minute: u32,
    /// Players on the pitch.
    pub on_players: Vec<String>,
    /// Players on the bench.
    pub off_players: Vec<String>,
}

/// Players swapped at a segment boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Changeover {
    /// Match minute at which the swap happens.
    pub minute: u32,
    /// Players entering (absent from the previous segment).
    pub coming_on: Vec<String>,
    /// Players leaving (absent from the next segment).
    pub going_off: Vec<String>,
}

impl Segment {
    /// Creates a segment.
    pub fn new(
        start_minute: u32,
        end_minute: u32,
        on_players: Vec<String>,
        off_players: Vec<String>,
    ) -> Self {
        Self {
            start_minute,
            end_minute,
            on_players,
            off_players,
        }
    }

    /// Segment length (minutes).
    #[inline]
    pub fn duration_minutes(&self) -> u32 {
        self.end_minute - self.start_minute
    }

    /// Whether `name` is on the pitch during this segment.
    pub fn is_on(&self, name: &str) -> bool {
        self.on_players.iter().any(|p| p == name)
    }
}

impl Changeover {
    /// Number of swaps at this boundary.
    #[inline]
    pub fn size(&self) -> usize {
        self.coming_on.len()
    }
}

impl RotationSchedule {
    /// Creates a schedule from segments, counting substitutions from the
    /// changeovers between them.
    ///
    /// Changeovers match players by name, so players sharing a name are
    /// merged. The scheduler counts by position instead.
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        let mut schedule = Self {
            segments,
            total_substitutions: 0,
        };
        schedule.total_substitutions = schedule.changeovers().iter().map(Changeover::size).sum();
        schedule
    }

    /// Number of segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Changeovers at every boundary, in match order.
    ///
    /// A presentation view keyed by name; `total_substitutions` is the
    /// authoritative count.
    pub fn changeovers(&self) -> Vec<Changeover> {
        self.segments
            .windows(2)
            .map(|pair| {
                let (prev, next) = (&pair[0], &pair[1]);
                Changeover {
                    minute: next.start_minute,
                    coming_on: next
                        .on_players
                        .iter()
                        .filter(|p| !prev.is_on(p))
                        .cloned()
                        .collect(),
                    going_off: prev
                        .on_players
                        .iter()
                        .filter(|p| !next.is_on(p))
                        .cloned()
                        .collect(),
                }
            })
            .collect()
    }

    /// Minutes played by `name` across all segments.
    ///
    /// Players sharing a name are indistinguishable here.
    pub fn minutes_for(&self, name: &str) -> u32 {
        self.segments
            .iter()
            .filter(|s| s.is_on(name))
            .map(Segment::duration_minutes)
            .sum()
    }

    /// Latest segment end (minutes).
    pub fn end_minute(&self) -> u32 {
        self.segments.last().map(|s| s.end_minute).unwrap_or(0)
    }
}
