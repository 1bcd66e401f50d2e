// src/results_flow.rs
//! Page-level state for the results dashboard.

use std::time::Duration;

use crate::normalize;
use crate::types::response::{NormalizedAnalysisResult, RawAnalysisResult};

/// How long the "no data" notice stays up before redirecting back to the
/// upload flow. Not cancellable once scheduled.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsState {
    /// Navigation arrived without an analysis payload.
    NoData { redirect_after: Duration },
    /// Normalized result held in page-local state until navigation away.
    Ready(NormalizedAnalysisResult),
}

pub struct ResultsFlow {
    state: ResultsState,
    is_exporting: bool,
}

impl ResultsFlow {
    /// Build page state from the navigation-carried payload. Normalization
    /// is synchronous, so there is no observable loading state.
    pub fn from_payload(payload: Option<RawAnalysisResult>) -> Self {
        let state = match payload {
            Some(raw) => ResultsState::Ready(normalize::normalize(Some(raw))),
            None => ResultsState::NoData {
                redirect_after: REDIRECT_DELAY,
            },
        };

        Self {
            state,
            is_exporting: false,
        }
    }

    pub fn state(&self) -> &ResultsState {
        &self.state
    }

    /// Mark an export as in flight. Returns false while one is already
    /// outstanding; at most one export request per page instance.
    pub fn begin_export(&mut self) -> bool {
        if self.is_exporting {
            return false;
        }
        self.is_exporting = true;
        true
    }

    pub fn finish_export(&mut self) {
        self.is_exporting = false;
    }

    pub fn is_exporting(&self) -> bool {
        self.is_exporting
    }
}
