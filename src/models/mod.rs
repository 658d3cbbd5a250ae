//! Timetabling domain models.
//!
//! Provides the data types for representing timetabling problems and
//! candidate solutions. A problem fixes the subject list plus the teacher,
//! group, and audience catalogs; a candidate assigns one [`Lesson`] per
//! subject.
//!
//! # Domain Mappings
//!
//! | timetable-ga | University | School | Training Center |
//! |--------------|------------|--------|-----------------|
//! | Subject | Course | Class Subject | Module |
//! | Group | Student Group | Form | Cohort |
//! | Audience | Lecture Hall | Classroom | Lab |
//! | Time Slot | Period of Day | Period | Session |

mod lesson;
mod problem;
mod timetable;

pub use lesson::Lesson;
pub use problem::TimetableProblem;
pub use timetable::{Conflict, ConflictKind, Timetable};
