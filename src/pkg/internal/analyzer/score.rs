use super::spec::ContactInfo;

/// Additive quality score capped at 100: contact info up to 20, skills up to
/// 40, experience up to 25, text length bucket up to 15.
pub fn calculate_score(
    contact: &ContactInfo,
    skills: &[String],
    experience: &[String],
    raw_text: &str,
) -> u32 {
    let mut score = 0;

    if contact.email.is_some() {
        score += 10;
    }
    if contact.phone.is_some() {
        score += 10;
    }

    score += (skills.len() as u32 * 4).min(40);
    score += (experience.len() as u32 * 5).min(25);

    let text_length = raw_text.chars().count();
    score += match text_length {
        l if l > 1000 => 15,
        l if l > 500 => 12,
        l if l > 200 => 8,
        l if l > 100 => 5,
        _ => 0,
    };

    score.min(100)
}
