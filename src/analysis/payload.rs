//! Wire payload from the analysis service and its normalized form

use serde::{Deserialize, Serialize};

/// Body of a successful `/analyze` response. Every field may be missing or null.
///
/// Unknown fields are ignored. `score` is any JSON number and is taken as
/// sent, including fractions and values outside 0..=100.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawPayload {
    #[serde(default)]
    pub jd_skills: Option<Vec<String>>,
    #[serde(default)]
    pub matched_skills: Option<Vec<String>>,
    #[serde(default)]
    pub missing_skills: Option<Vec<String>>,
    #[serde(default)]
    pub resume_skills: Option<Vec<String>>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub suggestions_for_improvements: Option<String>,
}

/// Fully populated analysis result. Consumers never check for presence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub jd_skills: Vec<String>,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub resume_skills: Vec<String>,
    pub score: f64,
    pub suggestions_for_improvements: String,
}

impl AnalysisResult {
    pub fn has_suggestions(&self) -> bool {
        !self.suggestions_for_improvements.is_empty()
    }
}

pub fn normalize(raw: RawPayload) -> AnalysisResult {
    AnalysisResult {
        jd_skills: raw.jd_skills.unwrap_or_default(),
        matched_skills: raw.matched_skills.unwrap_or_default(),
        missing_skills: raw.missing_skills.unwrap_or_default(),
        resume_skills: raw.resume_skills.unwrap_or_default(),
        score: raw.score.unwrap_or(0.0),
        suggestions_for_improvements: raw.suggestions_for_improvements.unwrap_or_default(),
    }
}

impl From<RawPayload> for AnalysisResult {
    fn from(raw: RawPayload) -> Self {
        normalize(raw)
    }
}
