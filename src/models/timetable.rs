//! Timetable (candidate solution) model.
//!
//! A timetable is a complete assignment: one lesson per subject of the
//! problem, in problem order. It may contain scheduling conflicts — the
//! evolutionary search penalizes those through fitness instead of
//! preventing them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Lesson;

/// A candidate timetable.
///
/// Holds exactly one lesson per subject of the originating problem, at
/// the subject's position. Timetables from different problems are not
/// comparable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    /// Lessons, one per subject, in problem subject order.
    pub lessons: Vec<Lesson>,
}

/// A detected scheduling conflict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// Type of conflict.
    pub kind: ConflictKind,
    /// Related entity ID (time slot, teacher, or group).
    pub entity: String,
    /// Human-readable description.
    pub message: String,
}

/// Classification of scheduling conflicts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictKind {
    /// Two lessons in the same time slot compete for a group, teacher,
    /// or audience.
    SlotClash,
    /// A teacher is assigned a subject outside their qualifications.
    UnqualifiedTeacher,
    /// A group is assigned a subject absent from its curriculum.
    OffCurriculum,
    /// A teacher's total load exceeds their weekly maximum.
    TeacherOverload,
}

impl Conflict {
    /// Creates a slot clash conflict.
    pub fn slot_clash(time_slot: u32, message: impl Into<String>) -> Self {
        Self {
            kind: ConflictKind::SlotClash,
            entity: time_slot.to_string(),
            message: message.into(),
        }
    }

    /// Creates an unqualified teacher conflict.
    pub fn unqualified_teacher(teacher: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ConflictKind::UnqualifiedTeacher,
            entity: teacher.into(),
            message: message.into(),
        }
    }

    /// Creates an off-curriculum conflict.
    pub fn off_curriculum(group: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ConflictKind::OffCurriculum,
            entity: group.into(),
            message: message.into(),
        }
    }

    /// Creates a teacher overload conflict.
    pub fn teacher_overload(teacher: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ConflictKind::TeacherOverload,
            entity: teacher.into(),
            message: message.into(),
        }
    }
}

impl Timetable {
    /// Creates a timetable from lessons.
    pub fn new(lessons: Vec<Lesson>) -> Self {
        Self { lessons }
    }

    /// Number of lessons.
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    /// Whether the timetable has no lessons.
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    /// Returns all lessons in a given time slot.
    pub fn lessons_at(&self, time_slot: u32) -> Vec<&Lesson> {
        self.lessons
            .iter()
            .filter(|l| l.time_slot == time_slot)
            .collect()
    }

    /// Returns all lessons taught by a given teacher.
    pub fn lessons_for_teacher(&self, teacher: &str) -> Vec<&Lesson> {
        self.lessons.iter().filter(|l| l.teacher == teacher).collect()
    }

    /// Returns all lessons attended by a given group.
    pub fn lessons_for_group(&self, group: &str) -> Vec<&Lesson> {
        self.lessons.iter().filter(|l| l.group == group).collect()
    }

    /// Per-teacher teaching load: the sum of time-slot values of each
    /// teacher's lessons.
    ///
    /// This is the load measure the overload check compares against
    /// `teacher_max_hours` — a lesson in slot 5 weighs five units.
    pub fn teaching_hours(&self) -> HashMap<String, u32> {
        let mut hours: HashMap<String, u32> = HashMap::new();
        for lesson in &self.lessons {
            *hours.entry(lesson.teacher.clone()).or_insert(0) += lesson.time_slot;
        }
        hours
    }
}
