//! Analysis module
//! Submission lifecycle, response normalization, and display metrics

pub mod metrics;
pub mod orchestrator;
pub mod payload;
pub mod state;
pub mod transport;

pub use metrics::{bar_dataset, pie_dataset, score_band, BarDataset, PieDataset, ScoreBand};
pub use orchestrator::{AnalysisOrchestrator, Completion, Submission};
pub use payload::{normalize, AnalysisResult, RawPayload};
pub use state::AnalysisState;
pub use transport::{AnalysisTransport, HttpTransport};
