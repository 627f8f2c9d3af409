//! Least-change rotation scheduler.
//!
//! # Algorithm
//!
//! 1. Derive the outfield set: attendees minus the attending goalkeeper,
//!    sorted by name.
//! 2. Pick the segment count `K = ceil(N / C)`; reject `N > 3C`.
//! 3. Split the match into `K` near-equal segments with boundaries at
//!    `floor(duration · k / K)`.
//! 4. Segment `k` puts on the `C` outfield positions `k·C .. k·C + C`,
//!    taken modulo `N` (a cyclic window over the sorted set).
//! 5. Everyone else in the outfield set is off for that segment.
//!
//! With two segments this leaves the first `2C − N` players on for the
//! whole match and swaps only the smallest possible group at half time.
//! With three segments consecutive windows never overlap, so each
//! boundary swaps a full `C`, and the first `3C − N` players get a
//! second stint in the last segment. Every outfield player gets minutes.
//!
//! # Complexity
//! O(N log N) for the sort, then O(K · N).

use tracing::debug;

use crate::models::{AttendanceRoster, MatchConfig, RotationSchedule, Segment};

/// Stateless rotation scheduler for a fixed match format.
///
/// # Example
///
/// ```
/// use u_rotation::models::{AttendanceRoster, MatchConfig};
/// use u_rotation::scheduler::RotationScheduler;
///
/// let roster = AttendanceRoster::new(["J", "I", "H", "G", "F", "E", "D", "C", "B", "A"]);
/// let scheduler = RotationScheduler::new(MatchConfig::nine_a_side());
///
/// let schedule = scheduler.schedule(&roster).unwrap();
/// assert_eq!(schedule.segment_count(), 2);
/// assert_eq!(schedule.total_substitutions, 2);
/// assert_eq!(schedule.segments[0].off_players, vec!["I", "J"]);
/// assert_eq!(schedule.segments[1].off_players, vec!["G", "H"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RotationScheduler {
    config: MatchConfig,
}

impl RotationScheduler {
    /// Creates a scheduler.
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// The match format this scheduler plans for.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Plans a rotation for `roster`.
    ///
    /// Returns `None` when there is nobody to rotate or the outfield set
    /// exceeds `3C`.
    pub fn schedule(&self, roster: &AttendanceRoster) -> Option<RotationSchedule> {
        compute_schedule(roster, &self.config)
    }
}

/// Plans a rotation for `roster` under `config`.
///
/// Returns `None` for an empty (or goalkeeper-only) outfield, and when the
/// outfield set is larger than `config.max_rotating_players()`. Callers
/// should fall back to showing no plan in that case.
pub fn compute_schedule(
    roster: &AttendanceRoster,
    config: &MatchConfig,
) -> Option<RotationSchedule> {
    let outfield = roster.outfield_players();
    let n = outfield.len();
    let capacity = config.outfield_capacity;

    if n == 0 {
        debug!("no outfield players, nothing to rotate");
        return None;
    }
    if n > config.max_rotating_players() {
        debug!(
            outfield = n,
            limit = config.max_rotating_players(),
            "outfield exceeds rotation capacity"
        );
        return None;
    }

    // capacity > 0 here: n ≥ 1 and n ≤ 3 · capacity
    let segment_count = n.div_ceil(capacity);
    let on_count = capacity.min(n);

    let masks: Vec<Vec<bool>> = (0..segment_count)
        .map(|k| {
            let mut on_field = vec![false; n];
            for offset in 0..on_count {
                on_field[(k * capacity + offset) % n] = true;
            }
            on_field
        })
        .collect();

    let segments = masks
        .iter()
        .enumerate()
        .map(|(k, on_field)| {
            let (on, off): (Vec<_>, Vec<_>) = outfield
                .iter()
                .zip(on_field)
                .partition(|(_, on)| **on);

            Segment::new(
                segment_boundary(config.duration_minutes, k, segment_count),
                segment_boundary(config.duration_minutes, k + 1, segment_count),
                on.into_iter().map(|(name, _)| name.clone()).collect(),
                off.into_iter().map(|(name, _)| name.clone()).collect(),
            )
        })
        .collect();

    let schedule = RotationSchedule {
        segments,
        total_substitutions: substitutions(&masks),
    };
    debug!(
        outfield = n,
        capacity,
        segments = segment_count,
        substitutions = schedule.total_substitutions,
        "planned rotation"
    );
    Some(schedule)
}

/// Positions coming on at each boundary, summed over the match.
///
/// Counted by outfield position so players sharing a name stay distinct.
fn substitutions(masks: &[Vec<bool>]) -> usize {
    masks
        .windows(2)
        .map(|pair| {
            pair[1]
                .iter()
                .zip(&pair[0])
                .filter(|(now, before)| **now && !**before)
                .count()
        })
        .sum()
}

/// Minute at which segment `k` of `count` starts.
fn segment_boundary(duration: u32, k: usize, count: usize) -> u32 {
    (u64::from(duration) * k as u64 / count as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use std::collections::BTreeSet;

    fn cfg() -> MatchConfig {
        MatchConfig::nine_a_side()
    }

    fn players(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("P{i:02}")).collect()
    }

    fn letters(list: &str) -> Vec<String> {
        list.chars().map(|c| c.to_string()).collect()
    }

    /// Checks coverage, capacity, contiguity, and substitution counting.
    fn assert_well_formed(
        schedule: &RotationSchedule,
        roster: &AttendanceRoster,
        config: &MatchConfig,
    ) {
        let outfield = roster.outfield_players();
        let expected_on = outfield.len().min(config.outfield_capacity);

        let mut cursor = 0;
        for seg in &schedule.segments {
            assert_eq!(seg.start_minute, cursor);
            assert!(seg.end_minute >= seg.start_minute);
            cursor = seg.end_minute;

            assert_eq!(seg.on_players.len(), expected_on);
            let on: BTreeSet<_> = seg.on_players.iter().collect();
            let off: BTreeSet<_> = seg.off_players.iter().collect();
            assert!(on.is_disjoint(&off));

            let mut union: Vec<String> = seg
                .on_players
                .iter()
                .chain(&seg.off_players)
                .cloned()
                .collect();
            union.sort();
            assert_eq!(union, outfield);

            // Both sides keep the sorted order
            assert!(seg.on_players.windows(2).all(|w| w[0] <= w[1]));
            assert!(seg.off_players.windows(2).all(|w| w[0] <= w[1]));
        }
        assert_eq!(cursor, config.duration_minutes);

        let changes = schedule.changeovers();
        for c in &changes {
            assert_eq!(c.coming_on.len(), c.going_off.len());
        }
        let total: usize = changes.iter().map(|c| c.size()).sum();
        assert_eq!(total, schedule.total_substitutions);

        // Every outfield player gets some minutes
        for name in &outfield {
            assert!(schedule.minutes_for(name) > 0, "{name} never plays");
        }
    }

    #[test]
    fn test_empty_roster() {
        assert!(compute_schedule(&AttendanceRoster::default(), &cfg()).is_none());
        let gk_only = AttendanceRoster::new(Vec::<String>::new()).with_goalkeeper("GK");
        assert!(compute_schedule(&gk_only, &cfg()).is_none());
    }

    #[test]
    fn test_goalkeeper_only_roster() {
        let roster = AttendanceRoster::new(["GK"]).with_goalkeeper("GK");
        assert!(compute_schedule(&roster, &cfg()).is_none());
    }

    #[test]
    fn test_exactly_fits() {
        let roster = AttendanceRoster::new(letters("HGFEDCBA"));
        let s = compute_schedule(&roster, &cfg()).unwrap();
        assert_eq!(s.segment_count(), 1);
        assert_eq!(s.segments[0].start_minute, 0);
        assert_eq!(s.segments[0].end_minute, 60);
        assert_eq!(s.segments[0].on_players, letters("ABCDEFGH"));
        assert!(s.segments[0].off_players.is_empty());
        assert_eq!(s.total_substitutions, 0);
    }

    #[test]
    fn test_fewer_than_capacity() {
        let roster = AttendanceRoster::new(letters("CAB"));
        let s = compute_schedule(&roster, &cfg()).unwrap();
        assert_eq!(s.segment_count(), 1);
        assert_eq!(s.segments[0].on_players, letters("ABC"));
        assert_eq!(s.total_substitutions, 0);
    }

    #[test]
    fn test_goalkeeper_excluded() {
        let mut names = letters("ABCDEFGH");
        names.push("GK".into());
        let roster = AttendanceRoster::new(names).with_goalkeeper("GK");
        let s = compute_schedule(&roster, &cfg()).unwrap();
        assert_eq!(s.segment_count(), 1);
        assert_eq!(s.segments[0].on_players.len(), 8);
        assert!(!s.segments[0].is_on("GK"));
        assert!(!s.segments[0].off_players.contains(&"GK".to_string()));
    }

    #[test]
    fn test_goalkeeper_not_attending_rotates_everyone() {
        let roster = AttendanceRoster::new(letters("ABCDEFGHI")).with_goalkeeper("GK");
        let s = compute_schedule(&roster, &cfg()).unwrap();
        assert_eq!(s.segment_count(), 2);
        assert_well_formed(&s, &roster, &cfg());
    }

    #[test]
    fn test_two_segments_ten_players() {
        let roster = AttendanceRoster::new(letters("ABCDEFGHIJ"));
        let s = compute_schedule(&roster, &cfg()).unwrap();
        assert_eq!(s.segment_count(), 2);
        assert_eq!((s.segments[0].start_minute, s.segments[0].end_minute), (0, 30));
        assert_eq!((s.segments[1].start_minute, s.segments[1].end_minute), (30, 60));
        assert_eq!(s.segments[0].on_players, letters("ABCDEFGH"));
        assert_eq!(s.segments[1].on_players, letters("ABCDEFIJ"));
        assert_eq!(s.segments[0].off_players, letters("IJ"));
        assert_eq!(s.segments[1].off_players, letters("GH"));
        assert_eq!(s.total_substitutions, 2);

        let changes = s.changeovers();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].minute, 30);
        assert_eq!(changes[0].coming_on, letters("IJ"));
        assert_eq!(changes[0].going_off, letters("GH"));
    }

    #[test]
    fn test_two_segment_band_formula() {
        // stayers = 2C - N, substitutions = C - stayers
        let config = cfg();
        let c = config.outfield_capacity;
        for n in (c + 1)..=(2 * c) {
            let roster = AttendanceRoster::new(players(n));
            let s = compute_schedule(&roster, &config).unwrap();
            let outfield = roster.outfield_players();
            let stayers = 2 * c - n;

            assert_eq!(s.segment_count(), 2, "n = {n}");
            assert_eq!(s.segments[0].on_players, outfield[..c].to_vec());
            let mut second: Vec<String> = outfield[..stayers].to_vec();
            second.extend_from_slice(&outfield[c..]);
            assert_eq!(s.segments[1].on_players, second);
            assert_eq!(s.total_substitutions, c - stayers);
            assert_well_formed(&s, &roster, &config);
        }
    }

    #[test]
    fn test_three_segments_eighteen_players() {
        let roster = AttendanceRoster::new(players(18));
        let s = compute_schedule(&roster, &cfg()).unwrap();
        assert_eq!(s.segment_count(), 3);
        let ends: Vec<u32> = s.segments.iter().map(|seg| seg.end_minute).collect();
        assert_eq!(ends, vec![20, 40, 60]);
        for seg in &s.segments {
            assert_eq!(seg.on_players.len(), 8);
            assert_eq!(seg.off_players.len(), 10);
        }
        assert_eq!(s.total_substitutions, 16);

        // First 3C - N = 6 players return for the last segment
        let outfield = roster.outfield_players();
        let mut last: Vec<String> = outfield[..6].to_vec();
        last.extend_from_slice(&outfield[16..]);
        assert_eq!(s.segments[2].on_players, last);
        assert_well_formed(&s, &roster, &cfg());
    }

    #[test]
    fn test_three_segment_band() {
        let config = cfg();
        let c = config.outfield_capacity;
        for n in (2 * c + 1)..=(3 * c) {
            let roster = AttendanceRoster::new(players(n));
            let s = compute_schedule(&roster, &config).unwrap();
            assert_eq!(s.segment_count(), 3, "n = {n}");
            assert_eq!(s.total_substitutions, 2 * c, "n = {n}");
            assert_well_formed(&s, &roster, &config);
        }
    }

    #[test]
    fn test_full_three_segment_band_is_disjoint_blocks() {
        let roster = AttendanceRoster::new(players(24));
        let s = compute_schedule(&roster, &cfg()).unwrap();
        let outfield = roster.outfield_players();
        for (k, seg) in s.segments.iter().enumerate() {
            assert_eq!(seg.on_players, outfield[k * 8..k * 8 + 8].to_vec());
        }
        for name in &outfield {
            assert_eq!(s.minutes_for(name), 20);
        }
    }

    #[test]
    fn test_band_boundaries() {
        let config = cfg();
        let count = |n| {
            let roster = AttendanceRoster::new(players(n));
            compute_schedule(&roster, &config).map(|s| s.segment_count())
        };
        assert_eq!(count(8), Some(1));
        assert_eq!(count(9), Some(2));
        assert_eq!(count(16), Some(2));
        assert_eq!(count(17), Some(3));
        assert_eq!(count(24), Some(3));
        assert_eq!(count(25), None);
    }

    #[test]
    fn test_capacity_exceeded() {
        let roster = AttendanceRoster::new(players(25));
        assert!(compute_schedule(&roster, &cfg()).is_none());

        // With a goalkeeper, 25 attendees leave 24 outfield
        let mut names = players(24);
        names.push("GK".into());
        let with_gk = AttendanceRoster::new(names).with_goalkeeper("GK");
        assert!(compute_schedule(&with_gk, &cfg()).is_some());
    }

    #[test]
    fn test_zero_capacity() {
        let config = MatchConfig::new(60, 0);
        assert!(compute_schedule(&AttendanceRoster::new(["A"]), &config).is_none());
    }

    #[test]
    fn test_uneven_duration_tiles_match() {
        let config = MatchConfig::new(50, 8);
        let roster = AttendanceRoster::new(players(20));
        let s = compute_schedule(&roster, &config).unwrap();
        let bounds: Vec<(u32, u32)> = s
            .segments
            .iter()
            .map(|seg| (seg.start_minute, seg.end_minute))
            .collect();
        assert_eq!(bounds, vec![(0, 16), (16, 33), (33, 50)]);
        assert_well_formed(&s, &roster, &config);
    }

    #[test]
    fn test_other_formats() {
        // 7-a-side: 6 outfield, 50 minutes
        let config = MatchConfig::new(50, 6);
        for n in 1..=18 {
            let roster = AttendanceRoster::new(players(n));
            let s = compute_schedule(&roster, &config).unwrap();
            assert_well_formed(&s, &roster, &config);
        }
        assert!(compute_schedule(&AttendanceRoster::new(players(19)), &config).is_none());
    }

    #[test]
    fn test_deterministic_across_insertion_order() {
        let config = cfg();
        let mut rng = StdRng::seed_from_u64(7);
        for n in 1..=24 {
            let mut names = players(n);
            names.push("GK".into());
            let baseline = compute_schedule(
                &AttendanceRoster::new(names.clone()).with_goalkeeper("GK"),
                &config,
            );
            for _ in 0..5 {
                names.shuffle(&mut rng);
                let shuffled = AttendanceRoster::new(names.clone()).with_goalkeeper("GK");
                assert_eq!(compute_schedule(&shuffled, &config), baseline, "n = {n}");
            }
        }
    }

    #[test]
    fn test_duplicate_names_count_as_distinct_players() {
        let roster = AttendanceRoster::new(letters("ABCDEFXXXX"));
        let s = compute_schedule(&roster, &cfg()).unwrap();
        assert_eq!(s.segment_count(), 2);
        assert_eq!(s.segments[0].on_players, letters("ABCDEFXX"));
        assert_eq!(s.segments[1].on_players, letters("ABCDEFXX"));
        assert_eq!(s.segments[0].off_players, letters("XX"));
        // C - stayers = 8 - 6, even though the names on both sides match
        assert_eq!(s.total_substitutions, 2);
    }

    #[test]
    fn test_duplicate_names_three_segments() {
        let mut names = players(14);
        names.extend(["DUP".to_string(), "DUP".to_string(), "DUP".to_string()]);
        let s = compute_schedule(&AttendanceRoster::new(names), &cfg()).unwrap();
        assert_eq!(s.segment_count(), 3);
        assert_eq!(s.total_substitutions, 16);
    }

    #[test]
    fn test_huge_capacity_does_not_overflow() {
        let config: MatchConfig =
            serde_json::from_str(r#"{"outfield_capacity": 18446744073709551615}"#).unwrap();
        let s = compute_schedule(&AttendanceRoster::new(["A"]), &config).unwrap();
        assert_eq!(s.segment_count(), 1);
        assert_eq!(s.segments[0].on_players, letters("A"));
    }

    #[test]
    fn test_scheduler_uses_its_config() {
        let scheduler = RotationScheduler::new(MatchConfig::new(40, 4));
        assert_eq!(scheduler.config().outfield_capacity, 4);
        let s = scheduler.schedule(&AttendanceRoster::new(players(6))).unwrap();
        assert_eq!(s.segment_count(), 2);
        assert_eq!(s.segments[0].end_minute, 20);
        assert_eq!(s.total_substitutions, 2);
    }
}
