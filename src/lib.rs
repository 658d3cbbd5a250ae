//! Genetic-algorithm search for low-conflict class timetables.
//!
//! Given catalogs of subjects, teachers, groups, and audiences plus
//! qualification, curriculum, and load constraints, the engine evolves a
//! population of candidate timetables toward one minimizing scheduling
//! conflicts. This is a stochastic local-search heuristic — it penalizes
//! constraint violations through fitness rather than preventing them, and
//! makes no completeness guarantees.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Lesson`, `Timetable`, `Conflict`,
//!   `TimetableProblem`
//! - **`validation`**: Input integrity checks (empty catalogs, missing
//!   qualification/curriculum entries, dangling references)
//! - **`ga`**: The evolutionary engine — candidate generation, conflict
//!   scoring, crossover/mutation operators, generational loop
//!
//! # References
//!
//! - Colorni, Dorigo & Maniezzo (1991), "Genetic Algorithms and Highly
//!   Constrained Problems: The Time-Table Case"
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//!   Machine Learning"

pub mod ga;
pub mod models;
pub mod validation;
