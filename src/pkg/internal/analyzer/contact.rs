use lazy_static::lazy_static;
use regex::Regex;

use super::spec::ContactInfo;

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("invalid regex");
    static ref PHONE_RE: Regex = Regex::new(r"\+?[1-9]?[0-9]{7,15}").expect("invalid regex");
}

/// First email and first phone-looking digit run found in the text.
pub fn extract_contact(text: &str) -> ContactInfo {
    ContactInfo {
        email: EMAIL_RE.find(text).map(|m| m.as_str().to_string()),
        phone: PHONE_RE.find(text).map(|m| m.as_str().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_email_wins() {
        let text = "reach me at jane.doe@example.com or backup jd@other.org";
        let contact = extract_contact(text);
        assert_eq!(contact.email.as_deref(), Some("jane.doe@example.com"));
    }

    #[test]
    fn phone_allows_optional_plus() {
        let contact = extract_contact("call +4915112345678 anytime");
        assert_eq!(contact.phone.as_deref(), Some("+4915112345678"));

        let contact = extract_contact("landline 0214765432");
        assert_eq!(contact.phone.as_deref(), Some("0214765432"));
    }

    #[test]
    fn absent_when_no_match() {
        let contact = extract_contact("no way to get in touch");
        assert_eq!(contact.email, None);
        assert_eq!(contact.phone, None);
    }

    #[test]
    fn short_digit_runs_ignored() {
        let contact = extract_contact("room 42, floor 3");
        assert_eq!(contact.phone, None);
    }
}
