//! Attendance roster model.
//!
//! The roster is the caller's view of who turned up for a match. The
//! goalkeeper designation is only honoured when that player is actually
//! attending; otherwise everyone is treated as outfield.

use serde::{Deserialize, Serialize};

/// Players marked present for one match, plus an optional goalkeeper.
///
/// Names are expected to be unique. Duplicates are not rejected; they are
/// simply carried through as distinct entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRoster {
    /// Attendee names in the caller's order.
    pub attendees: Vec<String>,
    /// Designated goalkeeper. `None` = nobody in goal.
    #[serde(default)]
    pub goalkeeper: Option<String>,
}

impl AttendanceRoster {
    /// Creates a roster without a goalkeeper.
    pub fn new<I, S>(attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            attendees: attendees.into_iter().map(Into::into).collect(),
            goalkeeper: None,
        }
    }

    /// Designates a goalkeeper.
    pub fn with_goalkeeper(mut self, name: impl Into<String>) -> Self {
        self.goalkeeper = Some(name.into());
        self
    }

    /// The goalkeeper, if one is designated **and** attending.
    pub fn active_goalkeeper(&self) -> Option<&str> {
        self.goalkeeper
            .as_deref()
            .filter(|gk| self.attendees.iter().any(|a| a == gk))
    }

    /// Whether a designated goalkeeper is attending.
    #[inline]
    pub fn has_goalkeeper(&self) -> bool {
        self.active_goalkeeper().is_some()
    }

    /// Outfield players: attendees minus the active goalkeeper, sorted
    /// ascending by name.
    ///
    /// Only the first entry matching the goalkeeper is removed. The sort
    /// makes every downstream plan independent of attendance order.
    pub fn outfield_players(&self) -> Vec<String> {
        let mut outfield = self.attendees.clone();
        if let Some(gk) = self.active_goalkeeper() {
            if let Some(pos) = outfield.iter().position(|a| a == gk) {
                outfield.remove(pos);
            }
        }
        outfield.sort();
        outfield
    }

    /// Number of outfield players.
    pub fn outfield_count(&self) -> usize {
        if self.has_goalkeeper() {
            self.attendees.len() - 1
        } else {
            self.attendees.len()
        }
    }

    /// Number of attendees, goalkeeper included.
    #[inline]
    pub fn len(&self) -> usize {
        self.attendees.len()
    }

    /// Whether nobody is attending.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.attendees.is_empty()
    }
}
