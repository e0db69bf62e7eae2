//! Small text helpers shared by the stores and the CLI.

/// Trim optional text, treating blank values as absent.
pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Check if a string starts with `http://` or `https://`.
pub fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Trim and cap remote error bodies at 180 characters.
pub fn compact_text(value: &str) -> String {
    value.trim().chars().take(180).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_text_option_rejects_blank() {
        assert_eq!(normalize_text_option(None), None);
        assert_eq!(normalize_text_option(Some(" \t ".to_string())), None);
        assert_eq!(
            normalize_text_option(Some(" token ".to_string())),
            Some("token".to_string())
        );
    }

    #[test]
    fn is_http_url_accepts_only_http_schemes() {
        assert!(is_http_url("http://localhost:8080"));
        assert!(is_http_url("https://notes.example.com"));
        assert!(!is_http_url("file:///tmp/notes.json"));
    }

    #[test]
    fn compact_text_caps_length() {
        let long = "x".repeat(500);
        assert_eq!(compact_text(&long).len(), 180);
        assert_eq!(compact_text("  short \n"), "short");
    }
}
