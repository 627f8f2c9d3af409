//! Rotation planning and playing-time metrics.
//!
//! # Algorithms
//!
//! `EqualShareEstimator` gives the proportional minutes each outfield
//! player would get if time were perfectly divisible. It is a display
//! figure and does not look at any schedule.
//!
//! `RotationScheduler` produces the discrete plan: the match is split
//! into at most three equal segments and a cyclic window over the
//! name-sorted outfield decides who is on in each. Plans are
//! deterministic for a given set of attendees.
//!
//! # KPI
//!
//! `PlayingTimeReport` measures how evenly a plan spreads minutes.

mod equal_share;
mod kpi;
mod rotation;

pub use equal_share::{estimate, EqualShareEstimator};
pub use kpi::PlayingTimeReport;
pub use rotation::{compute_schedule, RotationScheduler};
