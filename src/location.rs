pub fn normalize_country_code(code: &str) -> Option<String> {
    let trimmed = code.trim();
    if trimmed.len() == 2 && trimmed.chars().all(|ch| ch.is_ascii_alphabetic()) {
        Some(trimmed.to_uppercase())
    } else {
        None
    }
}

/// Two ASCII uppercase letters, nothing else.
pub fn is_country_code_shape(code: &str) -> bool {
    code.len() == 2 && code.chars().all(|ch| ch.is_ascii_uppercase())
}

pub fn is_check_digit_shape(digits: &str) -> bool {
    digits.len() == 2 && digits.chars().all(|ch| ch.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_loose_country_input() {
        assert_eq!(normalize_country_code(" de "), Some("DE".to_string()));
        assert_eq!(normalize_country_code("D1"), None);
        assert_eq!(normalize_country_code("DEU"), None);
        assert_eq!(normalize_country_code(""), None);
    }

    #[test]
    fn shapes_are_strict() {
        assert!(is_country_code_shape("GB"));
        assert!(!is_country_code_shape("gb"));
        assert!(!is_country_code_shape("G1"));
        assert!(!is_country_code_shape("ÄB"));
        assert!(is_check_digit_shape("07"));
        assert!(!is_check_digit_shape("7A"));
        assert!(!is_check_digit_shape("٣٣"));
    }
}
