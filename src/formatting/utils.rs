pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_strings_pass_through() {
        assert_eq!(truncate("Bosses", 10), "Bosses");
        assert_eq!(truncate("Bosses", 6), "Bosses");
    }

    #[test]
    fn test_long_strings_get_ellipsis() {
        assert_eq!(truncate("Pharmaceuticals", 10), "Pharmac...");
    }
}
