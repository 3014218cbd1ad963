use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// One analyzed resume. Built once by [`super::analyze`], never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub raw_text: String,
    pub contact: ContactInfo,
    pub skills: Vec<String>,
    pub experience: Vec<String>,
    pub score: u32,
    pub recommendations: Vec<String>,
    pub timestamp: DateTime<Utc>,
}
