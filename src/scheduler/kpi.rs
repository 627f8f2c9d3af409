//! Playing-time metrics for a rotation schedule.
//!
//! Summarises how evenly a plan spreads minutes across the outfield.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Minutes by player | Sum of on-pitch segment lengths |
//! | Min / Max minutes | Extremes across the outfield |
//! | Spread | Max − Min |
//! | Full-match players | Players on in every segment |
//! | Players without minutes | Outfield players never on |
//! | Mean minutes | Average across the outfield |

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{MatchConfig, RotationSchedule};

/// Per-player minutes and fairness indicators for one schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayingTimeReport {
    /// Minutes played, keyed by name (sorted).
    pub minutes_by_player: BTreeMap<String, u32>,
    /// Fewest minutes any outfield player gets.
    pub min_minutes: u32,
    /// Most minutes any outfield player gets.
    pub max_minutes: u32,
    /// `max_minutes - min_minutes`.
    pub spread_minutes: u32,
    /// Players on for the whole match.
    pub players_on_full_match: usize,
    /// Outfield players who never come on.
    pub players_without_minutes: usize,
    /// Mean minutes per outfield player.
    pub mean_minutes: f64,
}

impl PlayingTimeReport {
    /// Computes playing-time metrics from a schedule.
    ///
    /// The outfield is read from the first segment (on + off), which every
    /// segment partitions identically. Players sharing a name are
    /// reported under one key.
    pub fn calculate(schedule: &RotationSchedule, config: &MatchConfig) -> Self {
        let mut minutes_by_player: BTreeMap<String, u32> = BTreeMap::new();

        if let Some(first) = schedule.segments.first() {
            for name in first.on_players.iter().chain(&first.off_players) {
                minutes_by_player.entry(name.clone()).or_insert(0);
            }
        }
        for segment in &schedule.segments {
            let length = segment.duration_minutes();
            for name in &segment.on_players {
                *minutes_by_player.entry(name.clone()).or_insert(0) += length;
            }
        }

        let min_minutes = minutes_by_player.values().copied().min().unwrap_or(0);
        let max_minutes = minutes_by_player.values().copied().max().unwrap_or(0);
        let players_on_full_match = minutes_by_player
            .values()
            .filter(|&&m| m > 0 && m >= config.duration_minutes)
            .count();
        let players_without_minutes = minutes_by_player.values().filter(|&&m| m == 0).count();

        let mean_minutes = if minutes_by_player.is_empty() {
            0.0
        } else {
            let total: u64 = minutes_by_player.values().map(|&m| u64::from(m)).sum();
            total as f64 / minutes_by_player.len() as f64
        };

        Self {
            minutes_by_player,
            min_minutes,
            max_minutes,
            spread_minutes: max_minutes - min_minutes,
            players_on_full_match,
            players_without_minutes,
            mean_minutes,
        }
    }

    /// Whether every player gets minutes and the spread is within `tolerance`.
    pub fn is_balanced(&self, tolerance_minutes: u32) -> bool {
        self.players_without_minutes == 0 && self.spread_minutes <= tolerance_minutes
    }
}
