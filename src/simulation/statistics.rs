//! Statistics aggregation from respondent records.
//!
//! Computes per-dimension tally statistics (mean, spread, primary and
//! secondary rates, sparse count distributions) and the overall profile
//! label distribution from raw [`RespondentRecord`] data.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::types::Dimension;

use super::engine::RespondentRecord;

// ── Top-level statistics ────────────────────────────────────────────

#[derive(Serialize)]
pub struct AssessmentStatistics {
    pub num_respondents: u64,
    pub seed: u64,
    /// Share of respondents whose profile carries a secondary dimension.
    pub secondary_rate: f64,
    pub dimensions: Vec<DimensionStatistics>,
    /// Profile label ("D", "D-I", ...) -> share of respondents.
    pub profiles: BTreeMap<String, f64>,
}

// ── Per-dimension statistics ────────────────────────────────────────

#[derive(Serialize)]
pub struct DimensionStatistics {
    pub symbol: String,
    pub name: String,
    /// Mean "most" count across respondents.
    pub mean_most: f64,
    pub std_dev: f64,
    /// Share of respondents with this dimension primary.
    pub primary_rate: f64,
    /// Share of respondents with this dimension secondary.
    pub secondary_rate: f64,
    /// Sparse count distribution: only counts that actually occur.
    pub count_distribution: BTreeMap<u32, f64>,
}

// ── Aggregation ─────────────────────────────────────────────────────

/// Aggregate statistics from a slice of respondent records.
pub fn aggregate_statistics(records: &[RespondentRecord], seed: u64) -> AssessmentStatistics {
    let n = records.len().max(1) as f64;

    let dimensions: Vec<DimensionStatistics> = Dimension::ALL
        .iter()
        .map(|&dim| {
            let counts: Vec<u32> = records.iter().map(|r| r.tally.get(dim)).collect();

            let sum: f64 = counts.iter().map(|&c| c as f64).sum();
            let mean = sum / n;
            let variance: f64 = counts
                .iter()
                .map(|&c| (c as f64 - mean).powi(2))
                .sum::<f64>()
                / n;

            let primary = records.iter().filter(|r| r.profile.primary == dim).count();
            let secondary = records
                .iter()
                .filter(|r| r.profile.secondary == Some(dim))
                .count();

            let mut occurrences: BTreeMap<u32, u32> = BTreeMap::new();
            for &c in &counts {
                *occurrences.entry(c).or_insert(0) += 1;
            }
            let count_distribution: BTreeMap<u32, f64> = occurrences
                .into_iter()
                .map(|(c, occ)| (c, occ as f64 / n))
                .collect();

            DimensionStatistics {
                symbol: dim.symbol().to_string(),
                name: dim.name().to_string(),
                mean_most: mean,
                std_dev: variance.sqrt(),
                primary_rate: primary as f64 / n,
                secondary_rate: secondary as f64 / n,
                count_distribution,
            }
        })
        .collect();

    let mut label_counts: BTreeMap<String, u32> = BTreeMap::new();
    for record in records {
        *label_counts.entry(record.profile.label()).or_insert(0) += 1;
    }
    let profiles: BTreeMap<String, f64> = label_counts
        .into_iter()
        .map(|(label, c)| (label, c as f64 / n))
        .collect();

    let with_secondary = records.iter().filter(|r| r.profile.secondary.is_some()).count();

    AssessmentStatistics {
        num_respondents: records.len() as u64,
        seed,
        secondary_rate: with_secondary as f64 / n,
        dimensions,
        profiles,
    }
}

/// Save aggregated statistics as JSON.
pub fn save_statistics(stats: &AssessmentStatistics, path: &str) {
    if let Some(parent) = std::path::Path::new(path).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let json = serde_json::to_string_pretty(stats).expect("Failed to serialize statistics");
    std::fs::write(path, json).expect("Failed to write statistics file");
}
