pub mod contact;
pub mod experience;
pub mod read;
pub mod recommend;
pub mod score;
pub mod skills;
pub mod spec;

use std::path::Path;

use chrono::Utc;

use self::spec::AnalysisResult;
use crate::prelude::Result;

/// Runs the pipeline over already-extracted text: contact, skills and
/// experience first, then the score and recommendations derived from them.
pub fn analyze_text(raw_text: String) -> AnalysisResult {
    let contact = contact::extract_contact(&raw_text);
    let skills = skills::extract_skills(&raw_text);
    let experience = experience::extract_experience(&raw_text);
    let score = score::calculate_score(&contact, &skills, &experience, &raw_text);
    let recommendations =
        recommend::generate_recommendations(&contact, &skills, &experience, &raw_text);
    AnalysisResult {
        raw_text,
        contact,
        skills,
        experience,
        score,
        recommendations,
        timestamp: Utc::now(),
    }
}

async fn extract_text(path: &Path) -> Result<String> {
    let data = tokio::fs::read(path).await?;
    read::extract_text_from_pdf(&data)
}

/// Analyzes one pdf. Never fails: an extraction error becomes sentinel text
/// that flows through the pipeline like any other document content, yielding
/// a low-scoring but structurally valid result.
pub async fn analyze(path: &Path) -> AnalysisResult {
    let text = match extract_text(path).await {
        Ok(text) => text,
        Err(e) => format!("Error extracting text: {e}"),
    };
    analyze_text(text)
}
