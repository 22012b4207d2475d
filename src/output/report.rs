//! Report structure handed to the formatters

use crate::analysis::metrics::{
    bar_dataset, gauge_dataset, match_ratio, pie_dataset, BarDataset, GaugeDataset, PieDataset,
    ScoreBand,
};
use crate::analysis::payload::AnalysisResult;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Normalized result plus everything derived from it for display
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub result: AnalysisResult,

    pub score_band: ScoreBand,

    /// Human-readable band, e.g. "Good Match"
    pub score_label: String,

    /// Resume / JD / matched skill counts
    pub skills_comparison: BarDataset,

    /// Matched vs missing skill counts
    pub match_breakdown: PieDataset,

    /// Share of matched skills, absent when nothing was matched or missing
    pub match_ratio: Option<f64>,

    pub gauge: GaugeDataset,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub tool_version: String,
    pub resume_file: String,
    pub job_file: String,
    pub backend_url: String,
}

impl ReportMetadata {
    pub fn new(resume_file: &str, job_file: &str, backend_url: &str) -> Self {
        Self {
            generated_at: Utc::now(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            resume_file: resume_file.to_string(),
            job_file: job_file.to_string(),
            backend_url: backend_url.to_string(),
        }
    }
}

impl AnalysisReport {
    pub fn new(result: AnalysisResult, metadata: ReportMetadata) -> Self {
        let score_band = ScoreBand::from_score(result.score);
        let match_breakdown = pie_dataset(&result);

        Self {
            score_band,
            score_label: score_band.label().to_string(),
            skills_comparison: bar_dataset(&result),
            match_ratio: match_ratio(&match_breakdown),
            match_breakdown,
            gauge: gauge_dataset(&result),
            result,
            metadata,
        }
    }
}
