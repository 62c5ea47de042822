//! Renders exact orderable probabilities as a text table or JSON rows.

use serde::Serialize;
use std::fmt::Write as _;
use suitsort_core::simulate::Estimate;
use suitsort_core::{Orderability, ProbabilityError, ProbabilityRow};

use crate::config::{OutputFormat, SimulationConfig};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub hand_size: usize,
    pub fraction: String,
    pub probability: f64,
    pub percent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<EstimateSummary>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EstimateSummary {
    pub trials: u64,
    pub hits: u64,
    pub ratio: f64,
}

impl From<Estimate> for EstimateSummary {
    fn from(estimate: Estimate) -> Self {
        Self {
            trials: estimate.trials,
            hits: estimate.hits,
            ratio: estimate.ratio(),
        }
    }
}

impl ReportRow {
    fn from_exact(row: &ProbabilityRow) -> Self {
        Self {
            hand_size: row.hand_size,
            fraction: row.probability.to_string(),
            probability: row.as_f64(),
            percent: row.percent(),
            estimate: None,
        }
    }
}

/// Computes one row per hand size, attaching a Monte Carlo estimate when enabled.
pub fn build_rows(
    engine: &mut Orderability,
    hand_sizes: std::ops::RangeInclusive<usize>,
    simulation: &SimulationConfig,
) -> Result<Vec<ReportRow>, ProbabilityError> {
    let exact = engine.table(hand_sizes)?;
    let mut rows = Vec::with_capacity(exact.len());
    for row in &exact {
        let mut report = ReportRow::from_exact(row);
        if simulation.enabled() {
            let estimate = engine.estimate(row.hand_size, simulation.trials, simulation.seed)?;
            report.estimate = Some(estimate.into());
        }
        rows.push(report);
    }
    Ok(rows)
}

pub fn render(rows: &[ReportRow], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(rows)),
        OutputFormat::Json => serde_json::to_string_pretty(rows),
    }
}

pub fn render_text(rows: &[ReportRow]) -> String {
    let mut out = String::new();
    for row in rows {
        let _ = write!(
            out,
            "{:>2} cards: {:>9.5}%  {}",
            row.hand_size, row.percent, row.fraction
        );
        if let Some(estimate) = row.estimate {
            let _ = write!(
                out,
                "  (sampled {:.3}% over {} deals)",
                estimate.ratio * 100.0,
                estimate.trials
            );
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(range: std::ops::RangeInclusive<usize>, trials: u64) -> Vec<ReportRow> {
        let mut engine = Orderability::default();
        let simulation = SimulationConfig { trials, seed: 3 };
        build_rows(&mut engine, range, &simulation).expect("in range")
    }

    #[test]
    fn text_lists_fraction_and_percentage() {
        let text = render_text(&rows(4..=5, 0));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], " 4 cards: 100.00000%  1");
        assert_eq!(lines[1], " 5 cards:  85.24170%  213019/249900");
    }

    #[test]
    fn json_rows_carry_exact_fraction() {
        let json = render(&rows(6..=6, 0), OutputFormat::Json).expect("serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value[0]["hand_size"], 6);
        assert_eq!(value[0]["fraction"], "51083/83895");
        assert!(value[0].get("estimate").is_none());
    }

    #[test]
    fn estimates_are_attached_when_trials_are_set() {
        let rows = rows(2..=3, 200);
        for row in rows {
            let estimate = row.estimate.expect("simulation enabled");
            assert_eq!(estimate.trials, 200);
            assert_eq!(estimate.hits, 200);
        }
    }
}
