/// Normalize a title or query for matching: trimmed and lowercased.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Case-insensitive substring match of a query against a title.
/// `query` must already be normalized with [`normalize`].
pub fn title_matches(title_lower: &str, query: &str) -> bool {
    title_lower.contains(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  The Matrix  "), "the matrix");
        assert_eq!(normalize("ALIEN"), "alien");
    }

    #[test]
    fn test_title_matches() {
        let title = normalize("Toy Story (1995)");
        assert!(title_matches(&title, "toy story"));
        assert!(title_matches(&title, "story"));
        assert!(title_matches(&title, "toy story (1995)"));
        assert!(!title_matches(&title, "toy story 2"));
    }
}
