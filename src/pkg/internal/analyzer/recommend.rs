use super::spec::ContactInfo;

/// Improvement suggestions. Rules fire independently; the closing remark is
/// only used when nothing else fired.
pub fn generate_recommendations(
    contact: &ContactInfo,
    skills: &[String],
    experience: &[String],
    raw_text: &str,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if contact.email.is_none() {
        recommendations.push("Add a professional email address".to_string());
    }
    if contact.phone.is_none() {
        recommendations.push("Include your phone number".to_string());
    }
    if skills.len() < 5 {
        recommendations.push("Add more relevant technical skills".to_string());
    }
    if experience.len() < 2 {
        recommendations.push("Include more detailed professional experience".to_string());
    }
    if raw_text.chars().count() < 500 {
        recommendations.push("Expand your CV with more detailed information".to_string());
    }
    if skills.len() > 10 {
        recommendations.push("Excellent! Your CV shows great skill diversity".to_string());
    }
    if recommendations.is_empty() {
        recommendations.push("Excellent CV! Consider adding quantified achievements".to_string());
    }

    recommendations
}
