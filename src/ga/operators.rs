//! Genetic operators over timetables.
//!
//! Candidate generation, two-point crossover, and per-gene mutation. All
//! operators are pure over their inputs and draw randomness from an
//! injected [`Rng`], so seeded runs reproduce exactly.
//!
//! Generation and mutation are deliberately constraint-blind: they sample
//! teachers, groups, slots, and audiences uniformly from the catalogs and
//! let fitness penalize the violations.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::models::{Lesson, Timetable, TimetableProblem};

/// Creates a uniformly random timetable for the problem.
///
/// Assigns each subject, in problem order, a uniformly drawn teacher,
/// group, time slot in `[1, classes_per_day]`, and (when audiences are
/// modeled) audience. Expects a problem accepted by
/// [`crate::validation::validate_problem`].
pub fn random_timetable<R: Rng>(problem: &TimetableProblem, rng: &mut R) -> Timetable {
    let lessons = problem
        .subjects
        .iter()
        .map(|subject| random_lesson(subject, problem, rng))
        .collect();
    Timetable::new(lessons)
}

/// Creates `size` independent random timetables.
pub fn random_population<R: Rng>(
    problem: &TimetableProblem,
    size: usize,
    rng: &mut R,
) -> Vec<Timetable> {
    (0..size).map(|_| random_timetable(problem, rng)).collect()
}

/// Resamples one gene: fresh teacher, group, slot, and audience for a
/// fixed subject.
fn random_lesson<R: Rng>(subject: &str, problem: &TimetableProblem, rng: &mut R) -> Lesson {
    Lesson {
        subject: subject.to_string(),
        teacher: pick(&problem.teachers, rng),
        group: pick(&problem.groups, rng),
        time_slot: rng.random_range(1..=problem.classes_per_day),
        audience: problem.audiences.choose(rng).cloned(),
    }
}

fn pick<R: Rng>(ids: &[String], rng: &mut R) -> String {
    ids.choose(rng).cloned().unwrap_or_default()
}

/// Two-point crossover with random interior cut points.
///
/// Samples cut points `p1 < p2` with `p1 >= 1` and `p2 <= len - 1`, then
/// swaps the `[p1, p2)` segment between the parents. Since genes are
/// positional by subject, the children automatically keep one lesson per
/// subject at the subject's position.
///
/// Returns `None` when the parents hold fewer than three lessons — no
/// interior two-point split exists for them.
pub fn crossover<R: Rng>(
    a: &Timetable,
    b: &Timetable,
    rng: &mut R,
) -> Option<(Timetable, Timetable)> {
    let len = a.len();
    if len < 3 {
        return None;
    }
    let p1 = rng.random_range(1..len - 1);
    let p2 = rng.random_range(p1 + 1..len);
    Some(crossover_at(a, b, p1, p2))
}

/// Two-point crossover at fixed cut points.
///
/// Builds `(a[..p1] ++ b[p1..p2] ++ a[p2..], b[..p1] ++ a[p1..p2] ++
/// b[p2..])`. Cut points must satisfy `p1 < p2 <= len`; applying the same
/// cut points twice restores the original parents.
pub fn crossover_at(a: &Timetable, b: &Timetable, p1: usize, p2: usize) -> (Timetable, Timetable) {
    (splice(a, b, p1, p2), splice(b, a, p1, p2))
}

fn splice(base: &Timetable, donor: &Timetable, p1: usize, p2: usize) -> Timetable {
    let mut lessons = Vec::with_capacity(base.len());
    lessons.extend_from_slice(&base.lessons[..p1]);
    lessons.extend_from_slice(&donor.lessons[p1..p2]);
    lessons.extend_from_slice(&base.lessons[p2..]);
    Timetable::new(lessons)
}

/// Per-gene mutation.
///
/// Independently, with probability `rate` per lesson, resamples the
/// lesson's teacher, group, slot, and audience from the same distribution
/// the generator uses. The subject at each position is never altered.
/// Returns a new timetable; the input is untouched.
pub fn mutate<R: Rng>(
    timetable: &Timetable,
    problem: &TimetableProblem,
    rate: f64,
    rng: &mut R,
) -> Timetable {
    let lessons = timetable
        .lessons
        .iter()
        .map(|lesson| {
            if rng.random_bool(rate) {
                random_lesson(&lesson.subject, problem, rng)
            } else {
                lesson.clone()
            }
        })
        .collect();
    Timetable::new(lessons)
}
