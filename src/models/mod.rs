//! Rotation domain models.
//!
//! Provides the data types a rotation plan is computed from and the
//! plans themselves. Everything here is plain data: the scheduler
//! never mutates a roster or config it is given.
//!
//! # Domain Mappings
//!
//! | u-rotation | Match day |
//! |------------|-----------|
//! | AttendanceRoster | Players present |
//! | MatchConfig | Format (duration, players on) |
//! | Segment | Stretch between substitutions |
//! | RotationSchedule | Substitution plan |

mod config;
mod estimate;
mod roster;
mod schedule;

pub use config::{MatchConfig, MAX_SEGMENTS};
pub use estimate::EqualShareEstimate;
pub use roster::AttendanceRoster;
pub use schedule::{Changeover, RotationSchedule, Segment};
