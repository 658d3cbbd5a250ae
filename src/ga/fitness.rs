//! Conflict scoring for candidate timetables.
//!
//! The conflict count sums four categories:
//! 1. Slot clashes — every unordered lesson pair sharing a time slot and
//!    a group, teacher, or audience counts once.
//! 2. Unqualified teachers — lessons whose teacher is not qualified for
//!    the subject.
//! 3. Off-curriculum groups — lessons whose group does not study the
//!    subject.
//! 4. Teacher overloads — one per teacher whose load
//!    ([`Timetable::teaching_hours`]) exceeds their cap; uncapped
//!    teachers are exempt.
//!
//! The normalized score is `1.0 / (1.0 + conflicts)` — always in
//! `(0, 1]`, `1.0` exactly when no conflict was detected. Scoring is
//! deterministic; all selection pressure in the engine derives from it.
//!
//! Evaluation expects a problem accepted by
//! [`crate::validation::validate_problem`]. Pair comparison is O(n²) over
//! the lesson list; subject counts are small enough that no slot indexing
//! is warranted.

use serde::{Deserialize, Serialize};

use crate::models::{Conflict, Timetable, TimetableProblem};

/// Which conflict categories the engine scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringMode {
    /// All four categories. The default.
    Full,
    /// Slot clashes only — the scoring rule of the first engine revision,
    /// kept selectable for comparison runs.
    Pairwise,
}

impl Default for ScoringMode {
    fn default() -> Self {
        ScoringMode::Full
    }
}

/// Counts slot clashes between lesson pairs.
pub fn pairwise_conflict_count(timetable: &Timetable) -> usize {
    let lessons = &timetable.lessons;
    let mut count = 0;
    for (i, a) in lessons.iter().enumerate() {
        for b in &lessons[i + 1..] {
            if a.clashes_with(b) {
                count += 1;
            }
        }
    }
    count
}

/// Counts all conflicts in the timetable.
pub fn conflict_count(timetable: &Timetable, problem: &TimetableProblem) -> usize {
    let mut count = pairwise_conflict_count(timetable);

    for lesson in &timetable.lessons {
        if !problem.is_qualified(&lesson.teacher, &lesson.subject) {
            count += 1;
        }
        if !problem.in_curriculum(&lesson.group, &lesson.subject) {
            count += 1;
        }
    }

    for (teacher, hours) in timetable.teaching_hours() {
        if let Some(max) = problem.max_hours(&teacher) {
            if hours > max {
                count += 1;
            }
        }
    }

    count
}

/// Scores a timetable: `1.0 / (1.0 + conflicts)`, all categories.
pub fn evaluate(timetable: &Timetable, problem: &TimetableProblem) -> f64 {
    evaluate_with(timetable, problem, ScoringMode::Full)
}

/// Scores a timetable under the given scoring mode.
pub fn evaluate_with(timetable: &Timetable, problem: &TimetableProblem, mode: ScoringMode) -> f64 {
    let conflicts = match mode {
        ScoringMode::Full => conflict_count(timetable, problem),
        ScoringMode::Pairwise => pairwise_conflict_count(timetable),
    };
    1.0 / (1.0 + conflicts as f64)
}

/// Itemizes every conflict the full scoring mode counts.
///
/// Produces one [`Conflict`] per counted unit, so
/// `audit(t, p).len() == conflict_count(t, p)`.
pub fn audit(timetable: &Timetable, problem: &TimetableProblem) -> Vec<Conflict> {
    let mut conflicts = Vec::new();
    let lessons = &timetable.lessons;

    for (i, a) in lessons.iter().enumerate() {
        for b in &lessons[i + 1..] {
            if a.clashes_with(b) {
                conflicts.push(Conflict::slot_clash(
                    a.time_slot,
                    format!(
                        "'{}' and '{}' collide in slot {}",
                        a.subject, b.subject, a.time_slot
                    ),
                ));
            }
        }
    }

    for lesson in lessons {
        if !problem.is_qualified(&lesson.teacher, &lesson.subject) {
            conflicts.push(Conflict::unqualified_teacher(
                lesson.teacher.clone(),
                format!(
                    "Teacher '{}' is not qualified for '{}'",
                    lesson.teacher, lesson.subject
                ),
            ));
        }
        if !problem.in_curriculum(&lesson.group, &lesson.subject) {
            conflicts.push(Conflict::off_curriculum(
                lesson.group.clone(),
                format!(
                    "Group '{}' does not study '{}'",
                    lesson.group, lesson.subject
                ),
            ));
        }
    }

    for (teacher, hours) in timetable.teaching_hours() {
        if let Some(max) = problem.max_hours(&teacher) {
            if hours > max {
                conflicts.push(Conflict::teacher_overload(
                    teacher.clone(),
                    format!("Teacher '{teacher}' load {hours} exceeds maximum {max}"),
                ));
            }
        }
    }

    conflicts
}
