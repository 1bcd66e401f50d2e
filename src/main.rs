use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use optiresume::client::ApiClient;
use optiresume::config::BackendConfig;
use optiresume::courses;
use optiresume::normalize;
use optiresume::types::request::AnalysisRequest;
use optiresume::types::response::NormalizedAnalysisResult;

#[derive(Parser)]
#[command(name = "optiresume")]
#[command(about = "Analyze a resume against a job role via the OptiResume backend")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Submit a resume for analysis and print the normalized report
    Analyze {
        /// Path to the resume PDF
        #[arg(long)]
        file: PathBuf,
        /// Target job role, e.g. "DevOps Engineer"
        #[arg(long)]
        role: String,
        /// Job description text; omitted, the backend uses its own per-role description
        #[arg(long)]
        description: Option<String>,
        /// Print the normalized result as JSON instead of a text report
        #[arg(long)]
        json: bool,
    },
    /// Download the PDF report for the last analysis
    Export {
        /// Output path for the report
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let client = ApiClient::new(BackendConfig::resolve())?;

    match cli.command {
        Command::Analyze {
            file,
            role,
            description,
            json,
        } => {
            let file_name = file
                .file_name()
                .and_then(|n| n.to_str())
                .map(str::to_string)
                .ok_or_else(|| anyhow::anyhow!("Invalid resume path: {}", file.display()))?;

            let file_bytes = tokio::fs::read(&file)
                .await
                .with_context(|| format!("Failed to read resume: {}", file.display()))?;

            let request = AnalysisRequest::new(file_name, file_bytes, role, description);
            request.validate()?;

            let response = client.submit_analysis(&request).await?;
            let result = normalize::normalize(Some(response.result));

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_report(&result);
            }
        }

        Command::Export { out } => {
            let report = client.fetch_exported_report().await?;
            let out = out.unwrap_or_else(default_export_path);

            tokio::fs::write(&out, &report.bytes)
                .await
                .with_context(|| format!("Failed to write report: {}", out.display()))?;

            println!("✓ Report saved to {}", out.display());
        }
    }

    Ok(())
}

fn default_export_path() -> PathBuf {
    PathBuf::from(format!(
        "ResumeReport(OptiResume)_{}.pdf",
        chrono::Local::now().format("%Y-%m-%d")
    ))
}

fn print_report(result: &NormalizedAnalysisResult) {
    println!("Match score: {}%", result.match_percentage);
    println!(
        "Estimated time saved: {} minutes",
        result.estimated_time_saved_minutes
    );

    println!("\nMatched skills ({}):", result.matched_skills.len());
    for skill in &result.matched_skills {
        println!("  ✓ {}", skill);
    }

    println!("\nSkills to develop ({}):", result.missing_skills.len());
    for skill in &result.missing_skills {
        match courses::course_for_skill(skill) {
            Some(course) => println!("  ✗ {} ({:?} course: {})", skill, course.level, course.url),
            None => println!("  ✗ {}", skill),
        }
    }

    println!("\nOverall assessment:");
    println!("  Experience:     {}%", result.overall_score.experience);
    println!("  Skills:         {}%", result.overall_score.skills);
    println!("  Certifications: {}%", result.overall_score.certifications);
    println!("  Education:      {}%", result.overall_score.education);

    println!(
        "\nATS compatibility: {} ({})",
        result.ats_score.overall_ats_score, result.ats_score.ats_grade
    );

    println!("\nRecommendations:");
    for (index, recommendation) in result.recommendations.iter().enumerate() {
        println!("  {}. {}", index + 1, recommendation);
    }
}
