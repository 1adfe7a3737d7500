/// Form validation collecting transient tips for the user instead of failing
/// on the first bad field. The command layer runs its checks, then prints
/// `tips()` and aborts the submission if anything failed.
#[derive(Debug, Default)]
pub struct FormValidator {
    tips: Vec<String>,
    invalid_fields: Vec<String>,
}

impl FormValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false and records a tip when the character count of `value`
    /// is outside `[min, max]`. No side effect on success.
    pub fn check_length(&mut self, value: &str, field: &str, min: usize, max: usize) -> bool {
        let len = value.chars().count();
        if len > max || len < min {
            self.invalid_fields.push(field.to_string());
            self.tips.push(format!(
                "Length of {} must be between {} and {}.",
                field, min, max
            ));
            false
        } else {
            true
        }
    }

    pub fn is_valid(&self) -> bool {
        self.tips.is_empty()
    }

    pub fn tips(&self) -> &[String] {
        &self.tips
    }

    pub fn invalid_fields(&self) -> &[String] {
        &self.invalid_fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_within_bounds() {
        let mut validator = FormValidator::new();
        assert!(validator.check_length("Bruce", "firstname", 1, 50));
        assert!(validator.is_valid());
        assert!(validator.tips().is_empty());
    }

    #[test]
    fn test_length_at_exact_bounds() {
        let mut validator = FormValidator::new();
        assert!(validator.check_length("a", "firstname", 1, 50));
        assert!(validator.check_length(&"x".repeat(50), "surname", 1, 50));
        assert!(validator.check_length("abc", "username", 3, 16));
        assert!(validator.is_valid());
    }

    #[test]
    fn test_empty_value_fails_min_one() {
        let mut validator = FormValidator::new();
        assert!(!validator.check_length("", "firstname", 1, 50));
        assert!(!validator.is_valid());
        assert_eq!(validator.invalid_fields(), ["firstname"]);
        assert_eq!(
            validator.tips(),
            ["Length of firstname must be between 1 and 50."]
        );
    }

    #[test]
    fn test_too_long_fails() {
        let mut validator = FormValidator::new();
        assert!(!validator.check_length(&"d".repeat(17), "department", 1, 16));
        assert_eq!(
            validator.tips(),
            ["Length of department must be between 1 and 16."]
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let mut validator = FormValidator::new();
        // Five characters, more than five bytes
        assert!(validator.check_length("Müller", "surname", 1, 6));
        assert!(validator.check_length("日本語", "department", 3, 3));
        assert!(validator.is_valid());
    }

    #[test]
    fn test_multiple_failures_accumulate_tips() {
        let mut validator = FormValidator::new();
        assert!(!validator.check_length("", "firstname", 1, 50));
        assert!(!validator.check_length("ab", "username", 3, 16));
        assert_eq!(validator.tips().len(), 2);
        assert_eq!(validator.invalid_fields(), ["firstname", "username"]);
    }
}
