/// Known skill terms, matched as case-insensitive substrings. Deliberately no
/// word-boundary check: "java" also matches inside "javascript".
pub const SKILL_VOCABULARY: &[&str] = &[
    "python",
    "java",
    "javascript",
    "html",
    "css",
    "react",
    "node.js",
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "git",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "machine learning",
    "data science",
    "artificial intelligence",
    "project management",
    "leadership",
    "communication",
    "teamwork",
    "angular",
    "vue.js",
    "php",
    "c++",
    "c#",
    ".net",
    "spring",
    "django",
    "flask",
    "tensorflow",
    "pytorch",
    "pandas",
    "numpy",
    "scikit-learn",
    "tableau",
    "power bi",
    "excel",
    "photoshop",
    "illustrator",
    "figma",
    "sketch",
];

/// Vocabulary terms present in the text, in vocabulary order.
pub fn extract_skills(text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();
    SKILL_VOCABULARY
        .iter()
        .filter(|skill| text_lower.contains(*skill))
        .map(|skill| skill.to_string())
        .collect()
}
