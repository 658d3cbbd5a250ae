//! Timetabling problem definition.
//!
//! A problem fixes the subject list (which defines candidate gene
//! positions), the teacher/group/audience catalogs, the number of time
//! slots per day, and the constraint maps: teacher qualifications, group
//! curricula, and optional per-teacher load caps.
//!
//! Problems are plain values. Build them with the `with_*` methods or
//! deserialize them from JSON; run [`crate::validation::validate_problem`]
//! (or construct a `GaScheduler`, which does so) before solving.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An immutable timetabling problem definition.
///
/// The subject list is ordered and may repeat a subject (the same subject
/// taught in several class slots). Teacher, group, and audience catalogs
/// are identifier sets; the audience catalog may be empty, in which case
/// lessons carry no audience and audience clashes are never counted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimetableProblem {
    /// Subjects in gene-position order.
    pub subjects: Vec<String>,
    /// Teacher catalog.
    pub teachers: Vec<String>,
    /// Group catalog.
    pub groups: Vec<String>,
    /// Audience catalog. May be empty.
    #[serde(default)]
    pub audiences: Vec<String>,
    /// Number of time slots per day. Slot values range over
    /// `[1, classes_per_day]`.
    pub classes_per_day: u32,
    /// Teacher → subjects that teacher is qualified to teach.
    pub teacher_subjects: HashMap<String, Vec<String>>,
    /// Group → subjects that group must attend.
    pub group_subjects: HashMap<String, Vec<String>>,
    /// Teacher → maximum teaching load. Teachers absent from this map are
    /// exempt from the overload check.
    #[serde(default)]
    pub teacher_max_hours: HashMap<String, u32>,
}

impl TimetableProblem {
    /// Creates an empty problem with the given number of time slots per day.
    pub fn new(classes_per_day: u32) -> Self {
        Self {
            classes_per_day,
            ..Self::default()
        }
    }

    /// Appends a subject to the gene-position order.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subjects.push(subject.into());
        self
    }

    /// Appends several subjects to the gene-position order.
    pub fn with_subjects<I, S>(mut self, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subjects.extend(subjects.into_iter().map(Into::into));
        self
    }

    /// Registers a teacher together with their qualification entry.
    pub fn with_teacher<I, S>(mut self, teacher: impl Into<String>, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let teacher = teacher.into();
        self.teachers.push(teacher.clone());
        self.teacher_subjects
            .insert(teacher, subjects.into_iter().map(Into::into).collect());
        self
    }

    /// Caps a teacher's teaching load.
    pub fn with_teacher_max_hours(mut self, teacher: impl Into<String>, max_hours: u32) -> Self {
        self.teacher_max_hours.insert(teacher.into(), max_hours);
        self
    }

    /// Registers a group together with its curriculum entry.
    pub fn with_group<I, S>(mut self, group: impl Into<String>, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let group = group.into();
        self.groups.push(group.clone());
        self.group_subjects
            .insert(group, subjects.into_iter().map(Into::into).collect());
        self
    }

    /// Registers an audience.
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audiences.push(audience.into());
        self
    }

    /// Registers several audiences.
    pub fn with_audiences<I, S>(mut self, audiences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.audiences.extend(audiences.into_iter().map(Into::into));
        self
    }

    /// Number of subjects (candidate length).
    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }

    /// Whether audiences are modeled.
    pub fn has_audiences(&self) -> bool {
        !self.audiences.is_empty()
    }

    /// Whether a teacher is qualified to teach a subject.
    ///
    /// Teachers without a qualification entry are qualified for nothing;
    /// [`crate::validation::validate_problem`] rejects such problems.
    pub fn is_qualified(&self, teacher: &str, subject: &str) -> bool {
        self.teacher_subjects
            .get(teacher)
            .map(|subjects| subjects.iter().any(|s| s == subject))
            .unwrap_or(false)
    }

    /// Whether a subject belongs to a group's curriculum.
    pub fn in_curriculum(&self, group: &str, subject: &str) -> bool {
        self.group_subjects
            .get(group)
            .map(|subjects| subjects.iter().any(|s| s == subject))
            .unwrap_or(false)
    }

    /// The teacher's load cap, if one is set.
    pub fn max_hours(&self, teacher: &str) -> Option<u32> {
        self.teacher_max_hours.get(teacher).copied()
    }
}
