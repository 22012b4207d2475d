//! Integration tests for the resume matcher

use resume_match::analysis::{
    bar_dataset, pie_dataset, score_band, AnalysisOrchestrator, AnalysisResult, AnalysisState,
    AnalysisTransport, BarDataset, PieDataset, RawPayload, ScoreBand,
};
use resume_match::input::file_detector::{PDF_MEDIA_TYPE, WORD_LEGACY_MEDIA_TYPE};
use resume_match::input::{DocumentFile, DocumentSelector, SlotKind};
use resume_match::{Result, ResumeMatchError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tempfile::tempdir;

/// Answers every request the same way and counts calls.
struct ScriptedTransport {
    reply: Reply,
    calls: AtomicUsize,
}

enum Reply {
    Payload(&'static str),
    Http(u16, &'static str),
    Network,
}

impl ScriptedTransport {
    fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AnalysisTransport for ScriptedTransport {
    async fn analyze(&self, _resume: &DocumentFile, _job: &DocumentFile) -> Result<RawPayload> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Reply::Payload(body) => serde_json::from_str(body)
                .map_err(|e| ResumeMatchError::MalformedResponse(e.to_string())),
            Reply::Http(status, text) => Err(ResumeMatchError::Http {
                status: *status,
                status_text: text.to_string(),
            }),
            Reply::Network => Err(ResumeMatchError::Network("connection refused".to_string())),
        }
    }
}

/// Never answers.
struct HungTransport;

impl AnalysisTransport for HungTransport {
    async fn analyze(&self, _resume: &DocumentFile, _job: &DocumentFile) -> Result<RawPayload> {
        std::future::pending().await
    }
}

const SAMPLE_PAYLOAD: &str = r#"{
    "jd_skills": ["sql", "python"],
    "matched_skills": ["python"],
    "missing_skills": ["sql"],
    "resume_skills": ["python", "java"],
    "score": 75
}"#;

fn pdf(name: &str) -> DocumentFile {
    DocumentFile::new(name, PDF_MEDIA_TYPE, b"%PDF-1.4 sample".to_vec())
}

fn ready_selector() -> DocumentSelector {
    let mut selector = DocumentSelector::new();
    selector.assign(SlotKind::Resume, pdf("resume.pdf")).unwrap();
    selector.assign(SlotKind::JobDescription, pdf("job.pdf")).unwrap();
    selector
}

#[tokio::test]
async fn test_end_to_end_success() {
    let transport = ScriptedTransport::new(Reply::Payload(SAMPLE_PAYLOAD));
    let mut selector = ready_selector();
    let mut orchestrator = AnalysisOrchestrator::new();

    let state = orchestrator.run(&mut selector, &transport).await.unwrap();
    let result = state.result().expect("analysis should succeed");

    assert_eq!(
        result,
        &AnalysisResult {
            jd_skills: vec!["sql".into(), "python".into()],
            matched_skills: vec!["python".into()],
            missing_skills: vec!["sql".into()],
            resume_skills: vec!["python".into(), "java".into()],
            score: 75.0,
            suggestions_for_improvements: String::new(),
        }
    );
    assert_eq!(
        bar_dataset(result),
        BarDataset { resume_count: 2, jd_count: 2, matched_count: 1 }
    );
    assert_eq!(
        pie_dataset(result),
        PieDataset { matched_count: 1, missing_count: 1 }
    );
    assert_eq!(score_band(result.score), ScoreBand::Good);
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn test_fractional_scores_reach_success() {
    let mut orchestrator = AnalysisOrchestrator::new();

    let whole = ScriptedTransport::new(Reply::Payload(
        r#"{"score": 80.0, "matched_skills": ["python"]}"#,
    ));
    let state = orchestrator.run(&mut ready_selector(), &whole).await.unwrap();
    let result = state.result().expect("80.0 is a valid score");
    assert_eq!(result.score, 80.0);
    assert_eq!(result.matched_skills, vec!["python"]);
    assert_eq!(score_band(result.score), ScoreBand::Excellent);

    orchestrator.reset();
    let fraction = ScriptedTransport::new(Reply::Payload(r#"{"score": 72.5}"#));
    let state = orchestrator.run(&mut ready_selector(), &fraction).await.unwrap();
    let result = state.result().expect("72.5 is a valid score");
    assert_eq!(result.score, 72.5);
    assert_eq!(score_band(result.score), ScoreBand::Good);
}

#[tokio::test]
async fn test_end_to_end_http_failure() {
    let transport = ScriptedTransport::new(Reply::Http(500, "Internal Server Error"));
    let mut selector = ready_selector();
    let mut orchestrator = AnalysisOrchestrator::new();

    let state = orchestrator.run(&mut selector, &transport).await.unwrap();
    assert_eq!(
        state,
        &AnalysisState::Failure("Error: 500 Internal Server Error".to_string())
    );
}

#[tokio::test]
async fn test_network_and_malformed_failures_are_recoverable() {
    let mut orchestrator = AnalysisOrchestrator::new();

    let offline = ScriptedTransport::new(Reply::Network);
    let state = orchestrator.run(&mut ready_selector(), &offline).await.unwrap();
    assert!(state.failure_reason().unwrap().starts_with("Network error"));

    orchestrator.reset();
    let garbled = ScriptedTransport::new(Reply::Payload("<html>oops</html>"));
    let state = orchestrator.run(&mut ready_selector(), &garbled).await.unwrap();
    assert!(state.failure_reason().unwrap().starts_with("Malformed response"));

    orchestrator.reset();
    let healthy = ScriptedTransport::new(Reply::Payload("{}"));
    let state = orchestrator.run(&mut ready_selector(), &healthy).await.unwrap();
    assert_eq!(state.result(), Some(&AnalysisResult::default()));
}

#[tokio::test]
async fn test_invalid_file_never_reaches_transport() {
    let transport = ScriptedTransport::new(Reply::Payload(SAMPLE_PAYLOAD));
    let mut selector = DocumentSelector::new();
    let mut orchestrator = AnalysisOrchestrator::new();

    selector.assign(SlotKind::Resume, pdf("resume.pdf")).unwrap();
    let txt = DocumentFile::new("job.txt", "text/plain", b"We need SQL".to_vec());
    assert!(matches!(
        selector.assign(SlotKind::JobDescription, txt),
        Err(ResumeMatchError::InvalidFileType { .. })
    ));
    assert!(!selector.is_ready());

    assert!(orchestrator.run(&mut selector, &transport).await.is_err());
    assert!(orchestrator.state().is_idle());
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_stale_response_after_reset_stays_idle() {
    let transport = Arc::new(ScriptedTransport::new(Reply::Payload(SAMPLE_PAYLOAD)));
    let mut selector = ready_selector();
    let mut orchestrator = AnalysisOrchestrator::new();

    let submission = orchestrator.submit_from(&mut selector).unwrap();
    let in_flight = {
        let transport = Arc::clone(&transport);
        tokio::spawn(async move { submission.dispatch(transport.as_ref()).await })
    };

    orchestrator.reset();
    assert!(orchestrator.state().is_idle());

    let completion = in_flight.await.unwrap();
    assert!(!orchestrator.complete(completion));
    assert_eq!(orchestrator.state(), &AnalysisState::Idle);
}

#[tokio::test]
async fn test_hung_request_stays_loading_until_abandoned() {
    let mut selector = ready_selector();
    let mut orchestrator = AnalysisOrchestrator::new();
    let submission = orchestrator.submit_from(&mut selector).unwrap();
    let generation = submission.generation();

    let waited =
        tokio::time::timeout(Duration::from_millis(50), submission.dispatch(&HungTransport)).await;
    assert!(waited.is_err());
    assert!(orchestrator.state().is_loading());

    // A second submit while loading is turned away
    let mut again = ready_selector();
    assert!(matches!(
        orchestrator.submit_from(&mut again),
        Err(ResumeMatchError::SubmissionRejected(_))
    ));
    assert_eq!(orchestrator.generation(), generation);
    assert!(again.is_ready());

    orchestrator.reset();
    assert!(orchestrator.state().is_idle());
}

#[tokio::test]
async fn test_documents_loaded_from_disk() {
    let dir = tempdir().expect("Failed to create temp dir");
    let resume_path = dir.path().join("resume.pdf");
    let job_path = dir.path().join("job.doc");
    let notes_path = dir.path().join("notes.txt");
    std::fs::write(&resume_path, b"%PDF-1.4").unwrap();
    std::fs::write(&job_path, b"\xD0\xCF\x11\xE0").unwrap();
    std::fs::write(&notes_path, "plain text").unwrap();

    let resume = DocumentFile::from_path(&resume_path).await.unwrap();
    assert_eq!(resume.name(), "resume.pdf");
    assert_eq!(resume.media_type(), PDF_MEDIA_TYPE);
    assert_eq!(resume.bytes(), b"%PDF-1.4");

    let job = DocumentFile::from_path(&job_path).await.unwrap();
    assert_eq!(job.media_type(), WORD_LEGACY_MEDIA_TYPE);

    let notes = DocumentFile::from_path(&notes_path).await.unwrap();
    let mut selector = DocumentSelector::new();
    assert!(selector.assign(SlotKind::Resume, notes).is_err());
    selector.assign(SlotKind::Resume, resume).unwrap();
    selector.assign(SlotKind::JobDescription, job).unwrap();
    assert!(selector.is_ready());
}

#[tokio::test]
async fn test_nonexistent_file() {
    let result = DocumentFile::from_path(std::path::Path::new("tests/fixtures/nonexistent.pdf")).await;
    assert!(matches!(result, Err(ResumeMatchError::InvalidInput(_))));
}
