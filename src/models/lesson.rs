//! Lesson (gene) model.
//!
//! A lesson is one scheduled class: a subject taught by a teacher to a
//! group in a time slot, optionally in an audience. The subject is
//! positional — candidate timetables carry one lesson per subject of the
//! problem, in problem order, and genetic operators never move a subject
//! between positions.

use serde::{Deserialize, Serialize};

/// A single scheduled class.
///
/// Time slots are 1-based: `time_slot` ranges over
/// `[1, classes_per_day]` of the owning problem. The audience is `None`
/// when the problem models no audiences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    /// Subject taught. Fixed per timetable position.
    pub subject: String,
    /// Assigned teacher ID.
    pub teacher: String,
    /// Attending group ID.
    pub group: String,
    /// Time slot within the day (1-based).
    pub time_slot: u32,
    /// Assigned audience ID, if audiences are modeled.
    pub audience: Option<String>,
}

impl Lesson {
    /// Creates a lesson without an audience.
    pub fn new(
        subject: impl Into<String>,
        teacher: impl Into<String>,
        group: impl Into<String>,
        time_slot: u32,
    ) -> Self {
        Self {
            subject: subject.into(),
            teacher: teacher.into(),
            group: group.into(),
            time_slot,
            audience: None,
        }
    }

    /// Sets the audience.
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    /// Whether this lesson collides with another in the same time slot.
    ///
    /// Two lessons clash when they share a time slot and compete for the
    /// same group, the same teacher, or the same audience. Audiences are
    /// compared only when both lessons carry one.
    pub fn clashes_with(&self, other: &Lesson) -> bool {
        if self.time_slot != other.time_slot {
            return false;
        }
        self.group == other.group
            || self.teacher == other.teacher
            || matches!((&self.audience, &other.audience), (Some(a), Some(b)) if a == b)
    }
}
