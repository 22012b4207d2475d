//! Analysis workflow state machine
//!
//! ```text
//! Idle | Failure --submit--> Loading --response--> Success | Failure
//! Success | Failure | Loading --reset--> Idle
//! ```
//!
//! Every submission carries a generation number. A completion whose generation
//! is no longer current (the user reset, or submitted again) is dropped without
//! touching the state.

use crate::analysis::payload::{normalize, RawPayload};
use crate::analysis::state::AnalysisState;
use crate::analysis::transport::AnalysisTransport;
use crate::error::{Result, ResumeMatchError};
use crate::input::document::DocumentFile;
use crate::input::selector::DocumentSelector;
use log::{debug, error, info, warn};

/// An accepted submission, owning the documents until they are sent.
#[derive(Debug)]
pub struct Submission {
    generation: u64,
    resume: DocumentFile,
    job_description: DocumentFile,
}

impl Submission {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn resume(&self) -> &DocumentFile {
        &self.resume
    }

    pub fn job_description(&self) -> &DocumentFile {
        &self.job_description
    }

    /// Performs the network call. The orchestrator is not borrowed while this runs.
    pub async fn dispatch<T: AnalysisTransport>(self, transport: &T) -> Completion {
        let outcome = transport
            .analyze(&self.resume, &self.job_description)
            .await;
        Completion {
            generation: self.generation,
            outcome,
        }
    }
}

/// Outcome of a dispatched submission, tagged with its generation.
#[derive(Debug)]
pub struct Completion {
    generation: u64,
    outcome: Result<RawPayload>,
}

impl Completion {
    pub fn new(generation: u64, outcome: Result<RawPayload>) -> Self {
        Self { generation, outcome }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Default)]
pub struct AnalysisOrchestrator {
    state: AnalysisState,
    generation: u64,
}

impl AnalysisOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AnalysisState {
        &self.state
    }

    /// Generation of the most recent submission or abandonment.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn check_accepts_submission(&self) -> Result<()> {
        if self.state.accepts_submission() {
            return Ok(());
        }

        let reason = if self.state.is_loading() {
            warn!("Submission rejected: generation {} still in flight", self.generation);
            "an analysis is already in progress"
        } else {
            warn!("Submission rejected: previous result not reset");
            "reset the current result before starting a new analysis"
        };
        Err(ResumeMatchError::SubmissionRejected(reason.to_string()))
    }

    /// Moves to `Loading` and hands back the request to send. Rejected
    /// submissions leave state and generation as they were.
    pub fn submit(
        &mut self,
        resume: DocumentFile,
        job_description: DocumentFile,
    ) -> Result<Submission> {
        self.check_accepts_submission()?;
        resume.ensure_allowed_type()?;
        job_description.ensure_allowed_type()?;

        self.generation += 1;
        self.state = AnalysisState::Loading;
        info!(
            "Analysis {} started: {} vs {}",
            self.generation,
            resume.name(),
            job_description.name()
        );

        Ok(Submission {
            generation: self.generation,
            resume,
            job_description,
        })
    }

    /// Releases both selected documents into a new submission.
    pub fn submit_from(&mut self, selector: &mut DocumentSelector) -> Result<Submission> {
        self.check_accepts_submission()?;
        let (resume, job_description) = selector.take_ready().ok_or_else(|| {
            ResumeMatchError::InvalidInput(
                "both a resume and a job description are required".to_string(),
            )
        })?;
        self.submit(resume, job_description)
    }

    /// Applies a completion if it belongs to the current request. Returns
    /// whether the state changed.
    pub fn complete(&mut self, completion: Completion) -> bool {
        if completion.generation != self.generation || !self.state.is_loading() {
            debug!(
                "Discarding stale response for generation {} (current {}, state {})",
                completion.generation, self.generation, self.state
            );
            return false;
        }

        self.state = match completion.outcome {
            Ok(raw) => {
                let result = normalize(raw);
                info!("Analysis {} succeeded with score {}", self.generation, result.score);
                AnalysisState::Success(result)
            }
            Err(e) => {
                if e.is_analysis_failure() {
                    warn!("Analysis {} failed: {}", self.generation, e);
                } else {
                    error!("Analysis {} could not be sent: {}", self.generation, e);
                }
                AnalysisState::Failure(e.to_string())
            }
        };
        true
    }

    /// Returns to `Idle`. Resetting while loading abandons the in-flight request.
    pub fn reset(&mut self) {
        match self.state {
            AnalysisState::Idle => {}
            AnalysisState::Loading => {
                self.generation += 1;
                info!("Abandoned in-flight analysis");
                self.state = AnalysisState::Idle;
            }
            AnalysisState::Success(_) | AnalysisState::Failure(_) => {
                debug!("Reset from {}", self.state);
                self.state = AnalysisState::Idle;
            }
        }
    }

    /// Submits the selected documents and waits for the outcome.
    pub async fn run<T: AnalysisTransport>(
        &mut self,
        selector: &mut DocumentSelector,
        transport: &T,
    ) -> Result<&AnalysisState> {
        let submission = self.submit_from(selector)?;
        let completion = submission.dispatch(transport).await;
        self.complete(completion);
        Ok(&self.state)
    }
}
