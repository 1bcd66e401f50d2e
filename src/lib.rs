//! Client-side core for the OptiResume resume-optimization product:
//! the backend API client, the result-normalization pipeline, and the
//! results-page flow consumed by the presentation layer.

pub mod client;
pub mod config;
pub mod courses;
pub mod error;
pub mod normalize;
pub mod results_flow;
pub mod types;

pub use client::ApiClient;
pub use config::BackendConfig;
pub use error::ApiError;
pub use normalize::{normalize, normalize_with, PlaceholderMetrics};
pub use results_flow::{ResultsFlow, ResultsState};
pub use types::request::AnalysisRequest;
pub use types::response::{
    AnalyzeResponse, AtsScore, ExportedReport, NormalizedAnalysisResult, OverallScore,
    RawAnalysisResult,
};
