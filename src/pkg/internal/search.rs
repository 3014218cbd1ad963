use serde::Serialize;

use super::analyzer::spec::AnalysisResult;

const RESULT_LIMIT: usize = 20;

#[derive(Debug, Default)]
pub struct SearchQuery {
    pub query: Option<String>,
    pub skills: Vec<String>,
    pub min_score: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub filename: String,
    pub score: u32,
    pub skills: Vec<String>,
}

/// Filters analyzed resumes by minimum score, skill overlap and free-text
/// substring, best scores first, at most [`RESULT_LIMIT`] hits.
pub fn search(records: &[(String, AnalysisResult)], query: &SearchQuery) -> Vec<SearchHit> {
    let needle = query.query.as_ref().map(|q| q.to_lowercase());
    let wanted: Vec<String> = query.skills.iter().map(|s| s.to_lowercase()).collect();

    let mut hits: Vec<SearchHit> = records
        .iter()
        .filter(|(_, r)| r.score >= query.min_score)
        .filter(|(_, r)| {
            if wanted.is_empty() {
                return true;
            }
            r.skills
                .iter()
                .any(|s| wanted.contains(&s.to_lowercase()))
        })
        .filter(|(_, r)| match needle.as_deref() {
            None | Some("") => true,
            Some(n) => {
                let searchable =
                    format!("{} {}", r.raw_text, r.skills.join(" ")).to_lowercase();
                searchable.contains(n)
            }
        })
        .map(|(filename, r)| SearchHit {
            filename: filename.clone(),
            score: r.score,
            skills: r.skills.clone(),
        })
        .collect();

    hits.sort_by(|a, b| b.score.cmp(&a.score));
    hits.truncate(RESULT_LIMIT);
    hits
}

#[derive(Debug, Serialize)]
pub struct Stats {
    pub total: usize,
    pub average_score: f64,
}

/// Corpus size and average score, rounded to one decimal.
pub fn stats(records: &[(String, AnalysisResult)]) -> Stats {
    let total = records.len();
    let average_score = if total == 0 {
        0.0
    } else {
        let sum: u32 = records.iter().map(|(_, r)| r.score).sum();
        (sum as f64 / total as f64 * 10.0).round() / 10.0
    };
    Stats {
        total,
        average_score,
    }
}
