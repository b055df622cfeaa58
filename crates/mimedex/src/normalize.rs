pub(crate) fn normalize_token(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// `type/subtype` shape: at least one `/` with at least one character on
/// each side. Case and surrounding whitespace are tolerated here; storage
/// normalizes them away.
pub(crate) fn is_valid_mime_type(value: &str) -> bool {
    value
        .char_indices()
        .any(|(at, c)| c == '/' && at > 0 && at + 1 < value.len())
}

/// Extension token charset. Whitespace and path separators are outside the
/// set, so an extension can never smuggle either into the registry.
pub(crate) fn is_valid_extension(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+' | '.' | '~' | '%'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_shape_requires_a_slash_with_both_sides() {
        assert!(is_valid_mime_type("text/html"));
        assert!(is_valid_mime_type("application/vnd.api+json"));
        assert!(is_valid_mime_type(" TEXT/HTML "));
        assert!(is_valid_mime_type("a/b/c"));

        assert!(!is_valid_mime_type("not-a-mimetype"));
        assert!(!is_valid_mime_type("/html"));
        assert!(!is_valid_mime_type("text/"));
        assert!(!is_valid_mime_type(""));
    }

    #[test]
    fn extension_charset_rejects_whitespace_and_separators() {
        assert!(is_valid_extension("htm"));
        assert!(is_valid_extension("HTM"));
        assert!(is_valid_extension("tar.gz"));
        assert!(is_valid_extension("c++"));
        assert!(is_valid_extension("7z~%"));

        assert!(!is_valid_extension(""));
        assert!(!is_valid_extension(" htm"));
        assert!(!is_valid_extension("a b"));
        assert!(!is_valid_extension("a/b"));
        assert!(!is_valid_extension("a\\b"));
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_token("  TEXT/HTML "), "text/html");
        assert_eq!(normalize_token("HTM"), "htm");
        assert_eq!(normalize_token("   "), "");
    }
}
