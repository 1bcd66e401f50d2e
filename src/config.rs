// src/config.rs
use tracing::info;

const PRODUCTION_URL: &str =
    "https://optiresume-aidrivenresumeoptimizationandcare-production.up.railway.app";
const DEV_URL: &str = "http://localhost:8000";

/// Resolved backend base URL. Resolution order, first defined wins:
/// explicit `OPTIRESUME_BACKEND_URL` override, development-mode loopback
/// default, hardcoded production fallback.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    base_url: String,
}

impl BackendConfig {
    /// Resolve the backend base URL from the environment.
    pub fn resolve() -> Self {
        let override_url = std::env::var("OPTIRESUME_BACKEND_URL").ok();
        let environment = Self::get_environment();
        let config = Self::from_parts(override_url.as_deref(), environment.as_deref());
        info!("Resolved backend base URL: {}", config.base_url);
        config
    }

    /// Use a fixed base URL, bypassing environment resolution.
    pub fn with_base_url(url: &str) -> Self {
        Self {
            base_url: url.trim_end_matches('/').to_string(),
        }
    }

    fn get_environment() -> Option<String> {
        std::env::var("OPTIRESUME_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .or_else(|_| std::env::var("ENV"))
            .ok()
    }

    fn from_parts(override_url: Option<&str>, environment: Option<&str>) -> Self {
        let base = match (override_url, environment) {
            (Some(url), _) => url,
            (None, Some("local") | Some("dev") | Some("development")) => DEV_URL,
            (None, _) => PRODUCTION_URL,
        };
        Self {
            base_url: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint path starting with '/'.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
