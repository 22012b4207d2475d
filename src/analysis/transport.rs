//! Transport to the remote analysis service

use crate::analysis::payload::RawPayload;
use crate::error::{Result, ResumeMatchError};
use crate::input::document::DocumentFile;
use crate::input::selector::SlotKind;
use log::{debug, info};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Url};
use std::future::Future;

/// Sends one resume/job description pair for analysis.
pub trait AnalysisTransport {
    fn analyze(
        &self,
        resume: &DocumentFile,
        job_description: &DocumentFile,
    ) -> impl Future<Output = Result<RawPayload>> + Send;
}

pub fn analyze_endpoint(base_url: &str) -> String {
    format!("{}/analyze", base_url.trim_end_matches('/'))
}

/// Multipart POST to `<base>/analyze`. No request timeout is set; a hung
/// request stays pending until the connection resolves.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: Url,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self> {
        let endpoint = Url::parse(&analyze_endpoint(base_url)).map_err(|e| {
            ResumeMatchError::Configuration(format!("Invalid backend URL '{}': {}", base_url, e))
        })?;

        let client = Client::builder().build().map_err(|e| {
            ResumeMatchError::Configuration(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn file_part(file: &DocumentFile) -> Result<Part> {
        Part::bytes(file.bytes().to_vec())
            .file_name(file.name().to_string())
            .mime_str(file.media_type())
            .map_err(|e| {
                ResumeMatchError::InvalidInput(format!(
                    "Invalid media type '{}' for {}: {}",
                    file.media_type(),
                    file.name(),
                    e
                ))
            })
    }
}

impl AnalysisTransport for HttpTransport {
    async fn analyze(
        &self,
        resume: &DocumentFile,
        job_description: &DocumentFile,
    ) -> Result<RawPayload> {
        let form = Form::new()
            .part(SlotKind::Resume.form_field(), Self::file_part(resume)?)
            .part(
                SlotKind::JobDescription.form_field(),
                Self::file_part(job_description)?,
            );

        info!("Posting documents to {}", self.endpoint);
        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|e| ResumeMatchError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Analysis service responded with {}", status);

        if !status.is_success() {
            // The service usually explains itself in an {"error": ...} body; keep it for the logs.
            let body = response.text().await.unwrap_or_default();
            if !body.is_empty() {
                debug!("Error body: {}", body);
            }
            return Err(ResumeMatchError::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ResumeMatchError::Network(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| ResumeMatchError::MalformedResponse(e.to_string()))
    }
}
