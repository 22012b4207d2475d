//! Workflow state exposed to the view layer

use crate::analysis::payload::AnalysisResult;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", content = "detail", rename_all = "snake_case")]
pub enum AnalysisState {
    #[default]
    Idle,
    Loading,
    Success(AnalysisResult),
    Failure(String),
}

impl AnalysisState {
    pub fn is_idle(&self) -> bool {
        matches!(self, AnalysisState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AnalysisState::Loading)
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            AnalysisState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            AnalysisState::Failure(reason) => Some(reason.as_str()),
            _ => None,
        }
    }

    /// Only idle and failed workflows accept a new submission.
    pub fn accepts_submission(&self) -> bool {
        matches!(self, AnalysisState::Idle | AnalysisState::Failure(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            AnalysisState::Idle => "idle",
            AnalysisState::Loading => "loading",
            AnalysisState::Success(_) => "success",
            AnalysisState::Failure(_) => "failure",
        }
    }
}

impl fmt::Display for AnalysisState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
