//! Display metrics derived from a normalized analysis result

use crate::analysis::payload::AnalysisResult;
use colored::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Excellent,
    Good,
    Average,
    Poor,
}

impl ScoreBand {
    /// Lower bounds are inclusive: 80 is Excellent, 60 is Good, 40 is Average.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreBand::Excellent
        } else if score >= 60.0 {
            ScoreBand::Good
        } else if score >= 40.0 {
            ScoreBand::Average
        } else {
            ScoreBand::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent Match",
            ScoreBand::Good => "Good Match",
            ScoreBand::Average => "Average Match",
            ScoreBand::Poor => "Poor Match",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn score_band(score: f64) -> ScoreBand {
    ScoreBand::from_score(score)
}

/// Headline score colour. Coarser than the band: everything under 60 is red.
pub fn score_color(score: f64) -> Color {
    if score >= 80.0 {
        Color::Green
    } else if score >= 60.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// Gauge fill colour, one tier per band.
pub fn gauge_color(score: f64) -> Color {
    match ScoreBand::from_score(score) {
        ScoreBand::Excellent => Color::Green,
        ScoreBand::Good => Color::Yellow,
        ScoreBand::Average => Color::TrueColor { r: 255, g: 165, b: 0 },
        ScoreBand::Poor => Color::Red,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarDataset {
    pub resume_count: usize,
    pub jd_count: usize,
    pub matched_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieDataset {
    pub matched_count: usize,
    pub missing_count: usize,
}

/// Half-donut gauge segments; the score is clamped here, not in normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GaugeDataset {
    pub filled: u8,
    pub remaining: u8,
}

pub fn bar_dataset(result: &AnalysisResult) -> BarDataset {
    BarDataset {
        resume_count: result.resume_skills.len(),
        jd_count: result.jd_skills.len(),
        matched_count: result.matched_skills.len(),
    }
}

pub fn pie_dataset(result: &AnalysisResult) -> PieDataset {
    PieDataset {
        matched_count: result.matched_skills.len(),
        missing_count: result.missing_skills.len(),
    }
}

pub fn gauge_dataset(result: &AnalysisResult) -> GaugeDataset {
    let filled = result.score.clamp(0.0, 100.0).round() as u8;
    GaugeDataset {
        filled,
        remaining: 100 - filled,
    }
}

/// Share of matched skills in the pie, or `None` for an empty pie.
pub fn match_ratio(pie: &PieDataset) -> Option<f64> {
    let total = pie.matched_count + pie.missing_count;
    if total == 0 {
        None
    } else {
        Some(pie.matched_count as f64 / total as f64)
    }
}
