//! GA-based timetable search.
//!
//! The candidate encoding is positional: a timetable carries one lesson
//! per subject of the problem, in problem order, so crossover and
//! mutation can rearrange assignments freely without ever moving a
//! subject between positions.
//!
//! # Submodules
//!
//! - [`operators`]: Random generation, two-point crossover, per-gene
//!   mutation
//! - [`fitness`]: Conflict counting and the normalized score
//! - `engine` (re-exported here): [`GaConfig`], [`GaScheduler`],
//!   [`GaResult`], [`GenerationReport`]
//!
//! # Reference
//! - Colorni, Dorigo & Maniezzo (1991), "Genetic Algorithms and Highly
//!   Constrained Problems: The Time-Table Case"

mod engine;
pub mod fitness;
pub mod operators;

pub use engine::{GaConfig, GaResult, GaScheduler, GenerationReport};
pub use fitness::ScoringMode;
