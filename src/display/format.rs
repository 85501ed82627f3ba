//! Small text formatting helpers for terminal output

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Format a label/value line with the label padded to `width`
pub fn labeled(label: &str, value: impl std::fmt::Display, width: usize) -> String {
    format!("{:<width$} {}", format!("{}:", label), value, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Test", 4), "Test");
        assert_eq!(truncate("Épargne vacances", 6), "Épa...");
    }

    #[test]
    fn test_separator() {
        assert_eq!(separator(3).chars().count(), 3);
    }

    #[test]
    fn test_labeled() {
        assert_eq!(labeled("Currency", "USD", 12), "Currency:    USD");
    }
}
