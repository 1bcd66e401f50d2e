// src/client.rs
//! Thin HTTP client for the two OptiResume backend endpoints.

use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use tracing::{error, info, trace};

use crate::config::BackendConfig;
use crate::error::ApiError;
use crate::types::request::AnalysisRequest;
use crate::types::response::{AnalyzeResponse, ExportedReport};

const ANALYZE_ENDPOINT: &str = "/analyze-resume";
const EXPORT_ENDPOINT: &str = "/export-pdf";

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// File name the backend attaches to the exported report.
const EXPORT_FILE_NAME: &str = "ResumeReport(OptiResume).pdf";

pub struct ApiClient {
    client: reqwest::Client,
    config: BackendConfig,
}

impl ApiClient {
    pub fn new(config: BackendConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    /// Submit a resume for analysis as multipart form data.
    ///
    /// The `job_description` part is included only when non-empty after
    /// trimming; the backend falls back to its own per-role description.
    pub async fn submit_analysis(
        &self,
        request: &AnalysisRequest,
    ) -> Result<AnalyzeResponse, ApiError> {
        let url = self.config.endpoint(ANALYZE_ENDPOINT);

        let file_part = Part::bytes(request.file_bytes.clone())
            .file_name(request.file_name.clone())
            .mime_str("application/pdf")
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;

        let mut form = Form::new()
            .part("file", file_part)
            .text("job_role", request.job_role.trim().to_string());

        if let Some(description) = request.description_for_upload() {
            form = form.text("job_description", description.to_string());
        }

        info!("Submitting resume analysis to {}", url);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!("Analysis request transport failure: {}", e);
                ApiError::BackendUnreachable { url: url.clone() }
            })?;

        let status = response.status();
        trace!("Response status: {}", status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            error!("Backend error response {}: {}", status, body);
            return Err(ApiError::AnalysisRequestFailed {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<AnalyzeResponse>()
            .await
            .map_err(ApiError::MalformedResponse)
    }

    /// Download the PDF report for the last analysis as an opaque artifact.
    /// The caller is responsible for writing it to disk.
    pub async fn fetch_exported_report(&self) -> Result<ExportedReport, ApiError> {
        let url = self.config.endpoint(EXPORT_ENDPOINT);

        info!("Fetching exported report from {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            error!("Export request transport failure: {}", e);
            ApiError::BackendUnreachable { url: url.clone() }
        })?;

        let status = response.status();
        trace!("Response status: {}", status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            error!("Export error response {}: {}", status, body);
            return Err(ApiError::ExportRequestFailed {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(ApiError::MalformedResponse)?;

        Ok(ExportedReport {
            bytes: bytes.to_vec(),
            file_name: EXPORT_FILE_NAME.to_string(),
        })
    }
}
