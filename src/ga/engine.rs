//! Generational evolutionary engine.
//!
//! [`GaScheduler`] evolves a fixed-size population of candidate
//! timetables for a fixed number of generations. Each generation it
//! scores every candidate, updates the best seen so far, and rebuilds the
//! population by sampling parent pairs, probabilistically crossing them
//! over, and probabilistically mutating the offspring. There is no
//! early-stopping on convergence — the loop always runs the configured
//! generation count.
//!
//! Failing to reach a conflict-free timetable is not an error; the best
//! candidate found is returned with its score, whatever that score is.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::fitness::{self, ScoringMode};
use super::operators;
use crate::models::{Timetable, TimetableProblem};
use crate::validation::{validate_problem, ValidationError, ValidationErrorKind, ValidationResult};

/// Engine parameters.
///
/// Probabilities are per reproduction step: `crossover_probability` gates
/// the two-point crossover of a sampled parent pair,
/// `mutation_general_probability` gates whether the pair's offspring are
/// considered for mutation at all, and `mutation_probability` is each
/// offspring's chance of being replaced by its mutated copy.
/// `gene_mutation_rate` is the per-lesson resample probability inside one
/// mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Population size, constant across generations.
    pub population_size: usize,
    /// Number of generations to run.
    pub generations: usize,
    /// Probability of crossing over a sampled parent pair.
    pub crossover_probability: f64,
    /// Per-offspring probability of mutation.
    pub mutation_probability: f64,
    /// Probability that an offspring pair is considered for mutation.
    pub mutation_general_probability: f64,
    /// Per-lesson resample probability within a mutation.
    pub gene_mutation_rate: f64,
    /// Conflict categories to score.
    pub scoring: ScoringMode,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 100,
            crossover_probability: 0.8,
            mutation_probability: 0.1,
            mutation_general_probability: 0.8,
            gene_mutation_rate: 0.1,
            scoring: ScoringMode::Full,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the generation count.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the crossover probability.
    pub fn with_crossover_probability(mut self, probability: f64) -> Self {
        self.crossover_probability = probability;
        self
    }

    /// Sets the per-offspring mutation probability.
    pub fn with_mutation_probability(mut self, probability: f64) -> Self {
        self.mutation_probability = probability;
        self
    }

    /// Sets the probability that an offspring pair is considered for
    /// mutation.
    pub fn with_mutation_general_probability(mut self, probability: f64) -> Self {
        self.mutation_general_probability = probability;
        self
    }

    /// Sets the per-lesson resample probability.
    pub fn with_gene_mutation_rate(mut self, rate: f64) -> Self {
        self.gene_mutation_rate = rate;
        self
    }

    /// Sets the scoring mode.
    pub fn with_scoring(mut self, scoring: ScoringMode) -> Self {
        self.scoring = scoring;
        self
    }

    fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        if self.population_size == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidParameter,
                "population_size must be at least 1",
            ));
        }
        if self.generations == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidParameter,
                "generations must be at least 1",
            ));
        }
        for (name, value) in [
            ("crossover_probability", self.crossover_probability),
            ("mutation_probability", self.mutation_probability),
            (
                "mutation_general_probability",
                self.mutation_general_probability,
            ),
            ("gene_mutation_rate", self.gene_mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidParameter,
                    format!("{name} must lie in [0, 1], got {value}"),
                ));
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Per-generation progress event.
///
/// Emitted once per generation to the observer passed to
/// [`GaScheduler::solve_observed`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Generation index, 1-based.
    pub generation: usize,
    /// Best score within this generation's population.
    pub best_fitness: f64,
    /// Best score seen across all generations so far. Never decreases.
    pub best_overall: f64,
}

/// Outcome of a solver run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaResult {
    /// Best timetable found across all generations.
    pub best_timetable: Timetable,
    /// Its score.
    pub best_fitness: f64,
    /// Number of generations run.
    pub generations: usize,
}

/// Genetic timetable solver.
///
/// # Example
/// ```
/// use timetable_ga::ga::{GaConfig, GaScheduler};
/// use timetable_ga::models::TimetableProblem;
///
/// let problem = TimetableProblem::new(3)
///     .with_subjects(["Analysis", "Algebra", "Programming"])
///     .with_teacher("Novak", ["Analysis", "Algebra"])
///     .with_teacher("Reyes", ["Programming"])
///     .with_group("G1", ["Analysis", "Algebra"])
///     .with_group("G2", ["Programming"])
///     .with_audiences(["101", "102"]);
///
/// let config = GaConfig::default()
///     .with_population_size(30)
///     .with_generations(20);
///
/// let scheduler = GaScheduler::new(problem, config).unwrap();
/// let result = scheduler.solve();
/// assert!(result.best_fitness > 0.0 && result.best_fitness <= 1.0);
/// assert_eq!(result.best_timetable.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct GaScheduler {
    problem: TimetableProblem,
    config: GaConfig,
}

impl GaScheduler {
    /// Creates a solver over a validated problem and configuration.
    ///
    /// Rejects malformed problems (see
    /// [`crate::validation::validate_problem`]) and out-of-range engine
    /// parameters, so the solve loop itself has no failure modes.
    pub fn new(problem: TimetableProblem, config: GaConfig) -> Result<Self, Vec<ValidationError>> {
        let mut errors = Vec::new();
        if let Err(mut problem_errors) = validate_problem(&problem) {
            errors.append(&mut problem_errors);
        }
        if let Err(mut config_errors) = config.validate() {
            errors.append(&mut config_errors);
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Self { problem, config })
    }

    /// The problem being solved.
    pub fn problem(&self) -> &TimetableProblem {
        &self.problem
    }

    /// The engine parameters.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Runs the search with a thread-local RNG.
    pub fn solve(&self) -> GaResult {
        self.solve_with(&mut rand::rng())
    }

    /// Runs the search with the given RNG. Seeded RNGs reproduce exactly.
    pub fn solve_with<R: Rng>(&self, rng: &mut R) -> GaResult {
        self.solve_observed(rng, |_| {})
    }

    /// Runs the search, emitting a [`GenerationReport`] per generation.
    ///
    /// # Algorithm
    /// Per generation:
    /// 1. Score every candidate (first index wins fitness ties).
    /// 2. Update the best-seen candidate if this generation beats it.
    /// 3. Rebuild the population: sample parent pairs uniformly with
    ///    replacement; cross them over with `crossover_probability`
    ///    (parents pass through otherwise, and always when the problem
    ///    has fewer than three subjects); with
    ///    `mutation_general_probability`, give each of the two new
    ///    offspring a `mutation_probability` chance of being replaced by
    ///    its mutated copy.
    /// 4. Truncate the rebuilt population to the configured size (the
    ///    pair loop may overshoot by one) and swap it in.
    pub fn solve_observed<R, F>(&self, rng: &mut R, mut on_generation: F) -> GaResult
    where
        R: Rng,
        F: FnMut(&GenerationReport),
    {
        let config = &self.config;
        let mut population = operators::random_population(&self.problem, config.population_size, rng);
        let mut best_timetable = population[0].clone();
        let mut best_fitness = 0.0_f64;

        for generation in 1..=config.generations {
            let scores: Vec<f64> = population
                .iter()
                .map(|t| fitness::evaluate_with(t, &self.problem, config.scoring))
                .collect();

            let mut best_index = 0;
            for (index, score) in scores.iter().enumerate() {
                if *score > scores[best_index] {
                    best_index = index;
                }
            }
            // Scores are strictly positive, so generation 1 always
            // replaces the placeholder best.
            if scores[best_index] > best_fitness {
                best_fitness = scores[best_index];
                best_timetable = population[best_index].clone();
            }

            on_generation(&GenerationReport {
                generation,
                best_fitness: scores[best_index],
                best_overall: best_fitness,
            });

            let mut next = Vec::with_capacity(config.population_size + 1);
            while next.len() < config.population_size {
                let parent1 = &population[rng.random_range(0..population.len())];
                let parent2 = &population[rng.random_range(0..population.len())];

                let crossed = if rng.random_bool(config.crossover_probability) {
                    operators::crossover(parent1, parent2, rng)
                } else {
                    None
                };
                match crossed {
                    Some((child1, child2)) => {
                        next.push(child1);
                        next.push(child2);
                    }
                    None => {
                        next.push(parent1.clone());
                        next.push(parent2.clone());
                    }
                }

                if rng.random_bool(config.mutation_general_probability) {
                    for offspring in next.len() - 2..next.len() {
                        if rng.random_bool(config.mutation_probability) {
                            let mutated = operators::mutate(
                                &next[offspring],
                                &self.problem,
                                config.gene_mutation_rate,
                                rng,
                            );
                            next[offspring] = mutated;
                        }
                    }
                }
            }
            next.truncate(config.population_size);
            population = next;
        }

        GaResult {
            best_timetable,
            best_fitness,
            generations: config.generations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::fitness::conflict_count;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    /// Six subjects with disjoint one-subject qualifications and
    /// curricula.
    fn disjoint_problem() -> TimetableProblem {
        let subjects = [
            "Analysis",
            "Programming",
            "Physics",
            "Algebra",
            "Mechanics",
            "Projects",
        ];
        let mut problem = TimetableProblem::new(5).with_subjects(subjects);
        for (i, subject) in subjects.iter().enumerate() {
            problem = problem
                .with_teacher(format!("T{i}"), [*subject])
                .with_group(format!("G{i}"), [*subject]);
        }
        problem.with_audiences(["101", "102", "103", "104", "105", "106"])
    }

    #[test]
    fn test_rejects_invalid_problem() {
        let problem = TimetableProblem::new(5).with_subject("Analysis");
        let errors = GaScheduler::new(problem, GaConfig::default()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyCatalog));
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        let errors = GaScheduler::new(
            disjoint_problem(),
            GaConfig::default()
                .with_population_size(0)
                .with_generations(0)
                .with_crossover_probability(1.5),
        )
        .unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::InvalidParameter)
                .count(),
            3
        );
    }

    #[test]
    fn test_result_shape() {
        let scheduler = GaScheduler::new(
            disjoint_problem(),
            GaConfig::default()
                .with_population_size(20)
                .with_generations(5),
        )
        .unwrap();
        let mut rng = SmallRng::seed_from_u64(42);
        let result = scheduler.solve_with(&mut rng);

        assert_eq!(result.generations, 5);
        assert_eq!(result.best_timetable.len(), 6);
        assert!(result.best_fitness > 0.0 && result.best_fitness <= 1.0);
        // The returned score matches the returned timetable.
        let conflicts = conflict_count(&result.best_timetable, scheduler.problem());
        assert_eq!(result.best_fitness, 1.0 / (1.0 + conflicts as f64));
    }

    #[test]
    fn test_best_overall_never_regresses() {
        let scheduler = GaScheduler::new(
            disjoint_problem(),
            GaConfig::default()
                .with_population_size(50)
                .with_generations(10),
        )
        .unwrap();
        let mut rng = SmallRng::seed_from_u64(42);

        let mut reports = Vec::new();
        let result = scheduler.solve_observed(&mut rng, |r| reports.push(r.clone()));

        assert_eq!(reports.len(), 10);
        assert_eq!(
            reports.iter().map(|r| r.generation).collect::<Vec<_>>(),
            (1..=10).collect::<Vec<_>>()
        );
        for pair in reports.windows(2) {
            assert!(pair[1].best_overall >= pair[0].best_overall);
        }
        for report in &reports {
            assert!(report.best_overall >= report.best_fitness - 1e-12);
        }
        // The final running best is the returned score.
        assert_eq!(reports.last().unwrap().best_overall, result.best_fitness);
    }

    #[test]
    fn test_forced_single_assignment_is_perfect() {
        // One subject, one teacher, one group, one slot: the only
        // possible lesson, and it cannot conflict with anything.
        let problem = TimetableProblem::new(1)
            .with_subject("Analysis")
            .with_teacher("Novak", ["Analysis"])
            .with_group("G1", ["Analysis"])
            .with_audience("101");
        let scheduler = GaScheduler::new(
            problem,
            GaConfig::default()
                .with_population_size(4)
                .with_generations(3),
        )
        .unwrap();
        let mut rng = SmallRng::seed_from_u64(42);

        let result = scheduler.solve_with(&mut rng);
        assert_eq!(result.best_fitness, 1.0);
        assert_eq!(result.best_timetable.lessons[0].teacher, "Novak");
    }

    #[test]
    fn test_two_subject_problem_runs_without_crossover() {
        // Below three subjects no interior split exists; parents pass
        // through and the loop must still complete normally.
        let problem = TimetableProblem::new(2)
            .with_subjects(["Analysis", "Algebra"])
            .with_teacher("Novak", ["Analysis", "Algebra"])
            .with_group("G1", ["Analysis", "Algebra"])
            .with_audience("101");
        let scheduler = GaScheduler::new(
            problem,
            GaConfig::default()
                .with_population_size(10)
                .with_generations(20),
        )
        .unwrap();
        let mut rng = SmallRng::seed_from_u64(42);

        let result = scheduler.solve_with(&mut rng);
        assert_eq!(result.best_timetable.len(), 2);
        assert!(result.best_fitness > 0.0 && result.best_fitness <= 1.0);
    }

    #[test]
    fn test_seeded_runs_reproduce() {
        let scheduler = GaScheduler::new(
            disjoint_problem(),
            GaConfig::default()
                .with_population_size(20)
                .with_generations(5),
        )
        .unwrap();

        let r1 = scheduler.solve_with(&mut SmallRng::seed_from_u64(7));
        let r2 = scheduler.solve_with(&mut SmallRng::seed_from_u64(7));
        assert_eq!(r1.best_fitness, r2.best_fitness);
        assert_eq!(r1.best_timetable, r2.best_timetable);
    }

    #[test]
    fn test_pairwise_scoring_mode() {
        let scheduler = GaScheduler::new(
            disjoint_problem(),
            GaConfig::default()
                .with_population_size(20)
                .with_generations(5)
                .with_scoring(ScoringMode::Pairwise),
        )
        .unwrap();
        let mut rng = SmallRng::seed_from_u64(42);

        let result = scheduler.solve_with(&mut rng);
        assert!(result.best_fitness > 0.0 && result.best_fitness <= 1.0);
    }

    #[test]
    fn test_solution_invariants() {
        let scheduler = GaScheduler::new(
            disjoint_problem(),
            GaConfig::default()
                .with_population_size(30)
                .with_generations(15),
        )
        .unwrap();
        let mut rng = SmallRng::seed_from_u64(42);
        let result = scheduler.solve_with(&mut rng);
        let problem = scheduler.problem();

        for (lesson, subject) in result.best_timetable.lessons.iter().zip(&problem.subjects) {
            assert_eq!(&lesson.subject, subject);
            assert!(problem.teachers.contains(&lesson.teacher));
            assert!(problem.groups.contains(&lesson.group));
            assert!(lesson.time_slot >= 1 && lesson.time_slot <= problem.classes_per_day);
        }
    }
}
