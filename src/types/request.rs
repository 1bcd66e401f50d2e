use anyhow::Result;

/// A resume analysis submission. The upload flow validates the request
/// before any network call is made.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub file_name: String,
    pub file_bytes: Vec<u8>,
    pub job_role: String,
    pub job_description: Option<String>,
}

impl AnalysisRequest {
    pub fn new(
        file_name: String,
        file_bytes: Vec<u8>,
        job_role: String,
        job_description: Option<String>,
    ) -> Self {
        Self {
            file_name,
            file_bytes,
            job_role,
            job_description,
        }
    }

    /// Enforce the upload-form contract: the resume must be a PDF and the
    /// job role must be non-empty.
    pub fn validate(&self) -> Result<()> {
        if !self.file_name.to_lowercase().ends_with(".pdf") {
            anyhow::bail!(
                "Unsupported file format: {}. Only PDF resumes are accepted",
                self.file_name
            );
        }
        if self.job_role.trim().is_empty() {
            anyhow::bail!("Job role must not be empty");
        }
        Ok(())
    }

    /// Trimmed job description, or None when blank. Blank descriptions are
    /// omitted from the upload so the backend falls back to its own
    /// per-role description.
    pub fn description_for_upload(&self) -> Option<&str> {
        self.job_description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(file_name: &str, job_role: &str, description: Option<&str>) -> AnalysisRequest {
        AnalysisRequest::new(
            file_name.to_string(),
            vec![0x25, 0x50, 0x44, 0x46],
            job_role.to_string(),
            description.map(str::to_string),
        )
    }

    #[test]
    fn test_validate_accepts_pdf() {
        assert!(request("resume.pdf", "Data Scientist", None).validate().is_ok());
        assert!(request("Resume.PDF", "Data Scientist", None).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_pdf() {
        assert!(request("resume.docx", "Data Scientist", None).validate().is_err());
        assert!(request("resume", "Data Scientist", None).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_role() {
        assert!(request("resume.pdf", "", None).validate().is_err());
        assert!(request("resume.pdf", "   ", None).validate().is_err());
    }

    #[test]
    fn test_description_trimmed_and_blank_dropped() {
        let req = request("resume.pdf", "DevOps Engineer", Some("  Docker required  "));
        assert_eq!(req.description_for_upload(), Some("Docker required"));
        assert_eq!(request("resume.pdf", "DevOps Engineer", Some("   ")).description_for_upload(), None);
        assert_eq!(request("resume.pdf", "DevOps Engineer", None).description_for_upload(), None);
    }
}
