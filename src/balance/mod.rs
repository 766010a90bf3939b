//! Monte-Carlo Run Survey
//!
//! Generates many runs from one base seed and reports how often they pass
//! validation, how long they are and how room types are distributed.
//! Uses rayon for parallel execution across CPU cores. Every run draws from its
//! own `RunSeed::rng_for_run` stream, so reports do not depend on scheduling.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_RUN_SEED;
use crate::generation::{ConfigError, PathConfig, PathGenerator};
use crate::graph::GraphValidator;
use crate::logging::TimingSpan;
use crate::room::RoomType;
use crate::seed::RunSeed;

/// Configuration for a survey
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyConfig {
    pub run_count: u64,
    pub base_seed: u64,
    pub path: PathConfig,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            run_count: 1_000,
            base_seed: DEFAULT_RUN_SEED,
            path: PathConfig::default(),
        }
    }
}

/// Summary of one surveyed run
#[derive(Debug, Clone)]
struct RunSample {
    room_count: u32,
    valid: bool,
    type_counts: [u64; RoomType::ALL.len()],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyReport {
    pub total_runs: u64,
    pub valid_runs: u64,
    pub min_room_count: u32,
    pub max_room_count: u32,
    pub avg_room_count: f32,
    /// Share of all generated rooms per type, in `RoomType::ALL` order
    pub type_frequencies: Vec<(String, f32)>,
}

impl SurveyReport {
    pub fn all_valid(&self) -> bool {
        self.valid_runs == self.total_runs
    }

    pub fn frequency(&self, room_type: RoomType) -> f32 {
        self.type_frequencies
            .iter()
            .find(|(name, _)| name == room_type.as_str())
            .map(|(_, f)| *f)
            .unwrap_or(0.0)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

fn type_slot(room_type: RoomType) -> usize {
    RoomType::ALL
        .iter()
        .position(|t| *t == room_type)
        .unwrap_or_default()
}

fn sample_run(
    seed: RunSeed,
    run_index: u64,
    path: &PathConfig,
) -> Result<RunSample, ConfigError> {
    let mut rng = seed.rng_for_run(run_index);
    let graph = PathGenerator::with_config(&mut rng, path.clone())?.generate_path();

    let mut type_counts = [0u64; RoomType::ALL.len()];
    for node in graph.nodes() {
        type_counts[type_slot(node.room_type())] += 1;
    }

    Ok(RunSample {
        room_count: graph.node_count() as u32,
        valid: GraphValidator::new().validate(&graph).is_valid(),
        type_counts,
    })
}

/// Run the survey in parallel with rayon
pub fn run_survey(config: &SurveyConfig) -> Result<SurveyReport, ConfigError> {
    config.path.validate()?;
    let _span = TimingSpan::new("run_survey");
    let seed = RunSeed::new(config.base_seed);

    let samples: Vec<RunSample> = (0..config.run_count)
        .into_par_iter()
        .map(|i| sample_run(seed, i, &config.path))
        .collect::<Result<_, _>>()?;

    let report = summarize(&samples);
    tracing::info!(
        runs = report.total_runs,
        valid = report.valid_runs,
        avg_rooms = report.avg_room_count,
        "run survey complete"
    );
    Ok(report)
}

fn summarize(samples: &[RunSample]) -> SurveyReport {
    if samples.is_empty() {
        return SurveyReport {
            total_runs: 0,
            valid_runs: 0,
            min_room_count: 0,
            max_room_count: 0,
            avg_room_count: 0.0,
            type_frequencies: RoomType::ALL
                .iter()
                .map(|t| (t.as_str().to_string(), 0.0))
                .collect(),
        };
    }

    let mut totals = [0u64; RoomType::ALL.len()];
    for sample in samples {
        for (total, count) in totals.iter_mut().zip(sample.type_counts) {
            *total += count;
        }
    }
    let room_total: u64 = totals.iter().sum();

    let type_frequencies = RoomType::ALL
        .iter()
        .zip(totals)
        .map(|(t, count)| {
            let share = if room_total == 0 {
                0.0
            } else {
                count as f32 / room_total as f32
            };
            (t.as_str().to_string(), share)
        })
        .collect();

    SurveyReport {
        total_runs: samples.len() as u64,
        valid_runs: samples.iter().filter(|s| s.valid).count() as u64,
        min_room_count: samples.iter().map(|s| s.room_count).min().unwrap_or(0),
        max_room_count: samples.iter().map(|s| s.room_count).max().unwrap_or(0),
        avg_room_count: room_total as f32 / samples.len() as f32,
        type_frequencies,
    }
}
