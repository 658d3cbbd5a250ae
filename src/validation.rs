//! Input validation for timetabling problems.
//!
//! Checks structural integrity of a [`TimetableProblem`] before solving.
//! Detects:
//! - Empty subject/teacher/group catalogs
//! - Duplicate catalog identifiers
//! - Teachers without a qualification entry, groups without a curriculum
//!   entry (evaluation assumes both lookups always hit)
//! - Constraint-map references to entities missing from the catalogs
//! - A zero time-slot count
//!
//! The audience catalog may be empty (audiences are then not modeled) and
//! `teacher_max_hours` may omit any teacher (that teacher is exempt from
//! the overload check).

use crate::models::TimetableProblem;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A required catalog has no entries.
    EmptyCatalog,
    /// Two catalog entries share the same ID.
    DuplicateId,
    /// `classes_per_day` is zero.
    InvalidTimeSlots,
    /// A cataloged teacher has no qualification entry.
    MissingTeacherSubjects,
    /// A cataloged group has no curriculum entry.
    MissingGroupSubjects,
    /// A constraint map references an entity missing from the catalogs.
    UnknownReference,
    /// An engine parameter is out of range.
    InvalidParameter,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a timetabling problem.
///
/// Checks:
/// 1. Subjects, teachers, and groups are non-empty
/// 2. No duplicate teacher, group, or audience IDs (subjects may repeat —
///    a repeated subject means several class slots of it)
/// 3. `classes_per_day >= 1`
/// 4. Every cataloged teacher has a `teacher_subjects` entry
/// 5. Every cataloged group has a `group_subjects` entry
/// 6. Constraint-map keys and subject values reference cataloged entities
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_problem(problem: &TimetableProblem) -> ValidationResult {
    let mut errors = Vec::new();

    if problem.subjects.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCatalog,
            "Subject list is empty",
        ));
    }
    if problem.teachers.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCatalog,
            "Teacher catalog is empty",
        ));
    }
    if problem.groups.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCatalog,
            "Group catalog is empty",
        ));
    }

    if problem.classes_per_day == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidTimeSlots,
            "classes_per_day must be at least 1",
        ));
    }

    check_duplicates("teacher", &problem.teachers, &mut errors);
    check_duplicates("group", &problem.groups, &mut errors);
    check_duplicates("audience", &problem.audiences, &mut errors);

    let subjects: HashSet<&str> = problem.subjects.iter().map(|s| s.as_str()).collect();
    let teachers: HashSet<&str> = problem.teachers.iter().map(|s| s.as_str()).collect();
    let groups: HashSet<&str> = problem.groups.iter().map(|s| s.as_str()).collect();

    // Every cataloged teacher and group needs its constraint entry.
    for teacher in &problem.teachers {
        if !problem.teacher_subjects.contains_key(teacher) {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingTeacherSubjects,
                format!("Teacher '{teacher}' has no qualification entry"),
            ));
        }
    }
    for group in &problem.groups {
        if !problem.group_subjects.contains_key(group) {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingGroupSubjects,
                format!("Group '{group}' has no curriculum entry"),
            ));
        }
    }

    // Constraint maps may not reference entities outside the catalogs.
    for (teacher, taught) in &problem.teacher_subjects {
        if !teachers.contains(teacher.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownReference,
                format!("Qualification entry for unknown teacher '{teacher}'"),
            ));
        }
        for subject in taught {
            if !subjects.contains(subject.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownReference,
                    format!("Teacher '{teacher}' is qualified for unknown subject '{subject}'"),
                ));
            }
        }
    }
    for (group, required) in &problem.group_subjects {
        if !groups.contains(group.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownReference,
                format!("Curriculum entry for unknown group '{group}'"),
            ));
        }
        for subject in required {
            if !subjects.contains(subject.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownReference,
                    format!("Group '{group}' requires unknown subject '{subject}'"),
                ));
            }
        }
    }
    for teacher in problem.teacher_max_hours.keys() {
        if !teachers.contains(teacher.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownReference,
                format!("Load cap for unknown teacher '{teacher}'"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_duplicates(label: &str, ids: &[String], errors: &mut Vec<ValidationError>) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {label} ID: {id}"),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_problem() -> TimetableProblem {
        TimetableProblem::new(5)
            .with_subjects(["Analysis", "Algebra", "Programming"])
            .with_teacher("Novak", ["Analysis", "Algebra"])
            .with_teacher("Reyes", ["Programming"])
            .with_teacher_max_hours("Novak", 20)
            .with_group("G1", ["Analysis", "Algebra"])
            .with_group("G2", ["Programming"])
            .with_audiences(["101", "102"])
    }

    fn kinds(errors: &[ValidationError]) -> Vec<&ValidationErrorKind> {
        errors.iter().map(|e| &e.kind).collect()
    }

    #[test]
    fn test_valid_problem() {
        assert!(validate_problem(&valid_problem()).is_ok());
    }

    #[test]
    fn test_no_audiences_is_valid() {
        let mut p = valid_problem();
        p.audiences.clear();
        assert!(validate_problem(&p).is_ok());
    }

    #[test]
    fn test_empty_catalogs() {
        let p = TimetableProblem::new(5);
        let errors = validate_problem(&p).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::EmptyCatalog)
                .count(),
            3
        );
    }

    #[test]
    fn test_zero_classes_per_day() {
        let mut p = valid_problem();
        p.classes_per_day = 0;
        let errors = validate_problem(&p).unwrap_err();
        assert!(kinds(&errors).contains(&&ValidationErrorKind::InvalidTimeSlots));
    }

    #[test]
    fn test_duplicate_teacher() {
        let p = valid_problem().with_teacher("Novak", ["Analysis"]);
        let errors = validate_problem(&p).unwrap_err();
        assert!(kinds(&errors).contains(&&ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_duplicate_subjects_are_not_errors() {
        let p = valid_problem().with_subject("Analysis");
        assert!(validate_problem(&p).is_ok());
    }

    #[test]
    fn test_missing_teacher_subjects() {
        let mut p = valid_problem();
        p.teachers.push("Smith".to_string());
        let errors = validate_problem(&p).unwrap_err();
        assert!(kinds(&errors).contains(&&ValidationErrorKind::MissingTeacherSubjects));
    }

    #[test]
    fn test_missing_group_subjects() {
        let mut p = valid_problem();
        p.groups.push("G3".to_string());
        let errors = validate_problem(&p).unwrap_err();
        assert!(kinds(&errors).contains(&&ValidationErrorKind::MissingGroupSubjects));
    }

    #[test]
    fn test_missing_max_hours_is_not_an_error() {
        // Reyes has no load cap; that simply exempts them from the check.
        assert!(validate_problem(&valid_problem()).is_ok());
    }

    #[test]
    fn test_qualification_for_unknown_subject() {
        let mut p = valid_problem();
        p.teacher_subjects
            .get_mut("Novak")
            .unwrap()
            .push("Quantum Computing".to_string());
        let errors = validate_problem(&p).unwrap_err();
        assert!(kinds(&errors).contains(&&ValidationErrorKind::UnknownReference));
    }

    #[test]
    fn test_entry_for_unknown_teacher() {
        let mut p = valid_problem();
        p.teacher_subjects
            .insert("Ghost".to_string(), vec!["Analysis".to_string()]);
        let errors = validate_problem(&p).unwrap_err();
        assert!(kinds(&errors).contains(&&ValidationErrorKind::UnknownReference));
    }

    #[test]
    fn test_load_cap_for_unknown_teacher() {
        let p = valid_problem().with_teacher_max_hours("Ghost", 10);
        let errors = validate_problem(&p).unwrap_err();
        assert!(kinds(&errors).contains(&&ValidationErrorKind::UnknownReference));
    }

    #[test]
    fn test_multiple_errors_reported_together() {
        let mut p = valid_problem();
        p.classes_per_day = 0;
        p.teachers.push("Smith".to_string());
        let errors = validate_problem(&p).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
