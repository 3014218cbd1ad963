/// Words that open the experience capture window.
const EXPERIENCE_KEYWORDS: &[&str] = &[
    "experience",
    "work",
    "employment",
    "career",
    "position",
    "job",
    "role",
];

const MAX_ENTRIES: usize = 5;
const MIN_ENTRY_LEN: usize = 10;

/// Collects up to five lines following a keyword line. Keyword lines open the
/// capture window but are never captured themselves, and the window stays
/// open once triggered.
pub fn extract_experience(text: &str) -> Vec<String> {
    let mut entries = Vec::new();
    let mut capture = false;
    for line in text.split('\n') {
        let line_lower = line.to_lowercase();
        if EXPERIENCE_KEYWORDS.iter().any(|kw| line_lower.contains(kw)) {
            capture = true;
        } else if capture && !line.trim().is_empty() {
            let trimmed = line.trim();
            if trimmed.chars().count() > MIN_ENTRY_LEN {
                entries.push(trimmed.to_string());
                if entries.len() >= MAX_ENTRIES {
                    break;
                }
            }
        }
    }
    entries
}
