use regex::Regex;

fn absolute_reference_patterns() -> &'static [Regex] {
    use std::sync::OnceLock;

    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            vec![
                Regex::new(r"(?i)^https?://").expect("invalid http(s) regex"),
                Regex::new(r"(?i)^data:").expect("invalid data URI regex"),
                Regex::new(r"(?i)^blob:").expect("invalid blob URI regex"),
                Regex::new(r"^/").expect("invalid root-relative regex"),
            ]
        })
        .as_slice()
}

/// Determine whether a reference already points somewhere loadable on its own.
///
/// Such references are returned as-is by the base-url resolver instead of being
/// prefixed a second time.
pub fn is_absolute_reference(value: &str) -> bool {
    absolute_reference_patterns()
        .iter()
        .any(|pattern| pattern.is_match(value))
}
