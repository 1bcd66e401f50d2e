// src/normalize.rs
//! Defaulting pipeline that turns a possibly-partial backend payload into a
//! display-complete record. Total: any input, including `None`, yields a
//! fully-populated result, and fields already present are preserved
//! verbatim so re-normalizing is the identity.

use crate::types::response::{AtsScore, NormalizedAnalysisResult, OverallScore, RawAnalysisResult};

/// Stand-in values for metrics the backend does not send yet. Injected
/// constants rather than literal randomness so repeated normalization of
/// the same payload stays stable.
// TODO: drop once the backend sends estimated_time_saved_minutes and ats_score.
#[derive(Debug, Clone)]
pub struct PlaceholderMetrics {
    pub time_saved_minutes: u32,
    pub ats_structure_score: f64,
    pub ats_formatting_score: f64,
    pub ats_keyword_density_score: f64,
    pub ats_contact_score: f64,
}

impl Default for PlaceholderMetrics {
    fn default() -> Self {
        Self {
            time_saved_minutes: 150,
            ats_structure_score: 85.0,
            ats_formatting_score: 75.0,
            ats_keyword_density_score: 80.0,
            ats_contact_score: 70.0,
        }
    }
}

/// Shown when the backend sends no recommendations at all.
const DEFAULT_RECOMMENDATIONS: [&str; 4] = [
    "Tailor your resume summary to mirror the language of the job description",
    "Quantify your achievements with metrics and impact numbers",
    "List the job's key technologies in a dedicated skills section",
    "Take an online course covering the highest-priority missing skills",
];

const DEFAULT_ATS_RECOMMENDATIONS: [&str; 4] = [
    "Add missing essential sections like Summary or Objective",
    "Use bullet points to organize your experience and achievements",
    "Include more keywords from the job description throughout your resume",
    "Add complete contact information including email and phone",
];

// Weights of the backend's ATS scorer.
const ATS_STRUCTURE_WEIGHT: f64 = 0.35;
const ATS_FORMATTING_WEIGHT: f64 = 0.25;
const ATS_KEYWORD_WEIGHT: f64 = 0.25;
const ATS_CONTACT_WEIGHT: f64 = 0.15;

/// Normalize with the default placeholder metrics.
pub fn normalize(raw: Option<RawAnalysisResult>) -> NormalizedAnalysisResult {
    normalize_with(raw, &PlaceholderMetrics::default())
}

/// Fill every optional field of the raw payload, in order: skill lists,
/// match percentage, time saved, overall score, recommendations, ATS score.
pub fn normalize_with(
    raw: Option<RawAnalysisResult>,
    placeholders: &PlaceholderMetrics,
) -> NormalizedAnalysisResult {
    let raw = raw.unwrap_or_default();

    let matched_skills = raw.matched_skills.unwrap_or_default();
    let missing_skills = raw.missing_skills.unwrap_or_default();

    let match_percentage = raw
        .match_percentage
        .unwrap_or_else(|| derive_match_percentage(&matched_skills, &missing_skills));

    let overall_score = raw
        .overall_score
        .unwrap_or_else(|| derive_overall_score(match_percentage));

    let recommendations = match raw.recommendations {
        Some(recs) if !recs.is_empty() => recs,
        _ => DEFAULT_RECOMMENDATIONS.iter().map(|s| s.to_string()).collect(),
    };

    let ats_score = raw
        .ats_score
        .unwrap_or_else(|| synthesize_ats_score(placeholders));

    NormalizedAnalysisResult {
        match_percentage,
        matched_skills,
        missing_skills,
        recommendations,
        estimated_time_saved_minutes: raw
            .estimated_time_saved_minutes
            .unwrap_or(placeholders.time_saved_minutes),
        overall_score,
        ats_score,
    }
}

/// Fraction of required skills present in the resume, 0-100. Both lists
/// empty means the backend matched nothing at all; report 0 rather than
/// dividing by zero.
fn derive_match_percentage(matched: &[String], missing: &[String]) -> f64 {
    let total = matched.len() + missing.len();
    if total == 0 {
        return 0.0;
    }
    (100.0 * matched.len() as f64 / total as f64).round()
}

/// Per-category scores derived from the match percentage with fixed
/// offsets, each clamped to 0-100.
fn derive_overall_score(match_percentage: f64) -> OverallScore {
    let base = match_percentage.round() as i32;
    let category = |offset: i32| (base + offset).clamp(0, 100) as u8;

    OverallScore {
        experience: category(10),
        skills: category(0),
        certifications: category(-5),
        education: category(5),
    }
}

fn synthesize_ats_score(placeholders: &PlaceholderMetrics) -> AtsScore {
    let overall = placeholders.ats_structure_score * ATS_STRUCTURE_WEIGHT
        + placeholders.ats_formatting_score * ATS_FORMATTING_WEIGHT
        + placeholders.ats_keyword_density_score * ATS_KEYWORD_WEIGHT
        + placeholders.ats_contact_score * ATS_CONTACT_WEIGHT;
    let overall = (overall * 10.0).round() / 10.0;

    AtsScore {
        overall_ats_score: overall,
        structure_score: placeholders.ats_structure_score,
        formatting_score: placeholders.ats_formatting_score,
        keyword_density_score: placeholders.ats_keyword_density_score,
        contact_score: placeholders.ats_contact_score,
        ats_grade: grade_for_score(overall).to_string(),
        ats_recommendations: DEFAULT_ATS_RECOMMENDATIONS
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}

/// Letter grade ladder used by the backend's ATS scorer.
pub fn grade_for_score(score: f64) -> &'static str {
    if score >= 90.0 {
        "A+"
    } else if score >= 85.0 {
        "A"
    } else if score >= 80.0 {
        "A-"
    } else if score >= 75.0 {
        "B+"
    } else if score >= 70.0 {
        "B"
    } else if score >= 65.0 {
        "B-"
    } else if score >= 60.0 {
        "C+"
    } else if score >= 55.0 {
        "C"
    } else if score >= 50.0 {
        "C-"
    } else {
        "D"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Option<Vec<String>> {
        Some(names.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_empty_payload_is_fully_populated() {
        let result = normalize(None);
        assert_eq!(result.match_percentage, 0.0);
        assert!(result.matched_skills.is_empty());
        assert!(result.missing_skills.is_empty());
        assert_eq!(result.recommendations.len(), 4);
        assert_eq!(result.estimated_time_saved_minutes, 150);
        assert_eq!(result.ats_score.ats_recommendations.len(), 4);
    }

    #[test]
    fn test_both_skill_lists_empty_gives_zero_percent() {
        // No division-by-zero: empty lists must yield 0, not NaN.
        let result = normalize(Some(RawAnalysisResult {
            matched_skills: skills(&[]),
            missing_skills: skills(&[]),
            ..Default::default()
        }));
        assert_eq!(result.match_percentage, 0.0);
    }

    #[test]
    fn test_match_percentage_derived_from_skill_counts() {
        let result = normalize(Some(RawAnalysisResult {
            matched_skills: skills(&["React"]),
            missing_skills: skills(&["Docker", "GraphQL"]),
            ..Default::default()
        }));
        assert_eq!(result.match_percentage, 33.0);
    }

    #[test]
    fn test_present_match_percentage_preserved() {
        let result = normalize(Some(RawAnalysisResult {
            match_percentage: Some(66.67),
            matched_skills: skills(&["React"]),
            missing_skills: skills(&["Docker", "GraphQL"]),
            ..Default::default()
        }));
        assert_eq!(result.match_percentage, 66.67);
    }

    #[test]
    fn test_overall_score_offsets() {
        let result = normalize(Some(RawAnalysisResult {
            match_percentage: Some(60.0),
            ..Default::default()
        }));
        assert_eq!(
            result.overall_score,
            OverallScore {
                experience: 70,
                skills: 60,
                certifications: 55,
                education: 65,
            }
        );
    }

    #[test]
    fn test_overall_score_clamped() {
        let high = normalize(Some(RawAnalysisResult {
            match_percentage: Some(98.0),
            ..Default::default()
        }));
        assert_eq!(high.overall_score.experience, 100);
        assert_eq!(high.overall_score.education, 100);

        let low = normalize(Some(RawAnalysisResult {
            match_percentage: Some(2.0),
            ..Default::default()
        }));
        assert_eq!(low.overall_score.certifications, 0);
    }

    #[test]
    fn test_empty_recommendations_replaced_with_defaults() {
        let result = normalize(Some(RawAnalysisResult {
            recommendations: Some(vec![]),
            ..Default::default()
        }));
        assert_eq!(result.recommendations.len(), 4);

        let kept = normalize(Some(RawAnalysisResult {
            recommendations: Some(vec!["Learn Docker".to_string()]),
            ..Default::default()
        }));
        assert_eq!(kept.recommendations, vec!["Learn Docker".to_string()]);
    }

    #[test]
    fn test_synthesized_ats_score_weighting_and_grade() {
        let result = normalize(None);
        // 85*0.35 + 75*0.25 + 80*0.25 + 70*0.15 = 79.0
        assert_eq!(result.ats_score.overall_ats_score, 79.0);
        assert_eq!(result.ats_score.ats_grade, "B+");
    }

    #[test]
    fn test_present_ats_score_preserved() {
        let ats = AtsScore {
            overall_ats_score: 91.5,
            structure_score: 95.0,
            formatting_score: 90.0,
            keyword_density_score: 92.0,
            contact_score: 85.0,
            ats_grade: "A+".to_string(),
            ats_recommendations: vec!["Looks good".to_string()],
        };
        let result = normalize(Some(RawAnalysisResult {
            ats_score: Some(ats.clone()),
            ..Default::default()
        }));
        assert_eq!(result.ats_score, ats);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let first = normalize(Some(RawAnalysisResult {
            matched_skills: skills(&["Python", "Docker"]),
            missing_skills: skills(&["Kubernetes"]),
            ..Default::default()
        }));
        let second = normalize(Some(first.clone().into()));
        assert_eq!(first, second);
    }

    #[test]
    fn test_grade_ladder() {
        assert_eq!(grade_for_score(95.0), "A+");
        assert_eq!(grade_for_score(90.0), "A+");
        assert_eq!(grade_for_score(85.0), "A");
        assert_eq!(grade_for_score(80.0), "A-");
        assert_eq!(grade_for_score(79.0), "B+");
        assert_eq!(grade_for_score(70.0), "B");
        assert_eq!(grade_for_score(65.0), "B-");
        assert_eq!(grade_for_score(60.0), "C+");
        assert_eq!(grade_for_score(55.0), "C");
        assert_eq!(grade_for_score(50.0), "C-");
        assert_eq!(grade_for_score(49.9), "D");
    }
}
