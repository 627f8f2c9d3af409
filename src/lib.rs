//! Equal playing-time rotation planning for small-sided matches.
//!
//! Given who turned up and who is in goal, plans which outfield players
//! are on the pitch in each part of the match so that everyone plays and
//! substitutions stay few. Pure computation: no I/O, no shared state.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `MatchConfig`, `AttendanceRoster`,
//!   `Segment`, `RotationSchedule`, `Changeover`, `EqualShareEstimate`
//! - **`scheduler`**: `EqualShareEstimator`, `RotationScheduler`,
//!   `PlayingTimeReport`
//! - **`validation`**: Input checks (blank/duplicate names, capacity)
//!
//! # Example
//!
//! ```
//! use u_rotation::models::{AttendanceRoster, MatchConfig};
//! use u_rotation::scheduler::{compute_schedule, estimate};
//!
//! let config = MatchConfig::nine_a_side();
//! let roster = AttendanceRoster::new(["Ava", "Ben", "Cal", "Dan", "Eve", "Fin",
//!                                     "Gus", "Hal", "Ivy", "Joe", "Kit"])
//!     .with_goalkeeper("Kit");
//!
//! let est = estimate(&roster, &config);
//! assert_eq!(est.outfield_minutes, 48);
//!
//! let plan = compute_schedule(&roster, &config).unwrap();
//! assert_eq!(plan.segment_count(), 2);
//! assert_eq!(plan.total_substitutions, 2);
//! ```

pub mod models;
pub mod scheduler;
pub mod validation;
