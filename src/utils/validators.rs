use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]{10,15}$").expect("phone pattern"));

/// Trimmed name must be at least two characters.
pub fn validate_name(name: &str) -> bool {
    name.trim().chars().count() >= 2
}

/// Optional leading `+`, then 10-15 digits, nothing else.
pub fn validate_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Department is a required selection.
pub fn validate_department(department: &str) -> bool {
    !department.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_accepts_digit_runs_with_optional_plus() {
        assert!(validate_phone("+923001112223"));
        assert!(validate_phone("03001112223"));
        assert!(validate_phone("123456789012345"));
    }

    #[test]
    fn phone_rejects_short_inputs_and_stray_characters() {
        assert!(!validate_phone("123"));
        assert!(!validate_phone("abc123"));
        assert!(!validate_phone("+92 300 1112223"));
        assert!(!validate_phone("1234567890123456"));
        assert!(!validate_phone(""));
    }

    #[test]
    fn name_requires_two_non_space_characters() {
        assert!(validate_name("John Doe"));
        assert!(validate_name("Jo"));
        assert!(!validate_name("A"));
        assert!(!validate_name(""));
        assert!(!validate_name("  "));
        assert!(!validate_name(" A "));
    }

    #[test]
    fn department_must_be_non_empty() {
        assert!(validate_department("Engineering"));
        assert!(!validate_department(""));
    }
}
