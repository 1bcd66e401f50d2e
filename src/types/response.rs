use serde::{Deserialize, Serialize};

// ===== Backend Response Types =====

/// Envelope returned by `POST /analyze-resume`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub result: RawAnalysisResult,
}

/// Analysis payload as the backend sends it. Every field is optional;
/// the normalizer fills in whatever is missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAnalysisResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time_saved_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_score: Option<OverallScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ats_score: Option<AtsScore>,
}

/// Per-category assessment scores, 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverallScore {
    pub experience: u8,
    pub skills: u8,
    pub certifications: u8,
    pub education: u8,
}

/// ATS compatibility sub-scores, independent of skill matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsScore {
    pub overall_ats_score: f64,
    pub structure_score: f64,
    pub formatting_score: f64,
    pub keyword_density_score: f64,
    pub contact_score: f64,
    pub ats_grade: String,
    pub ats_recommendations: Vec<String>,
}

/// Display-complete analysis record. The only shape the presentation
/// layer may assume is fully populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedAnalysisResult {
    pub match_percentage: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<String>,
    pub estimated_time_saved_minutes: u32,
    pub overall_score: OverallScore,
    pub ats_score: AtsScore,
}

impl From<NormalizedAnalysisResult> for RawAnalysisResult {
    fn from(normalized: NormalizedAnalysisResult) -> Self {
        Self {
            match_percentage: Some(normalized.match_percentage),
            matched_skills: Some(normalized.matched_skills),
            missing_skills: Some(normalized.missing_skills),
            recommendations: Some(normalized.recommendations),
            estimated_time_saved_minutes: Some(normalized.estimated_time_saved_minutes),
            overall_score: Some(normalized.overall_score),
            ats_score: Some(normalized.ats_score),
        }
    }
}

/// Binary report artifact from `GET /export-pdf`.
#[derive(Debug, Clone)]
pub struct ExportedReport {
    pub bytes: Vec<u8>,
    pub file_name: String,
}
