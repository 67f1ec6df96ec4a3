use regex::Regex;
use std::sync::LazyLock;

static DANGEROUS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)<script",
        r"(?i)(?:javascript|data|vbscript):",
        r"(?i)\bon\w+\s*=",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("dangerous pattern literal should compile"))
    .collect()
});

static STRIPPED_SCHEMES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [r"(?i)javascript:", r"(?i)data:"]
        .iter()
        .map(|pattern| Regex::new(pattern).expect("scheme pattern literal should compile"))
        .collect()
});

pub fn contains_dangerous_markup(value: &str) -> bool {
    DANGEROUS_PATTERNS
        .iter()
        .any(|pattern| pattern.is_match(value))
}

pub fn sanitize_text(value: &str) -> String {
    let mut cleaned: String = value
        .trim()
        .chars()
        .filter(|c| !matches!(c, '<' | '>'))
        .collect();
    for scheme in STRIPPED_SCHEMES.iter() {
        cleaned = scheme.replace_all(&cleaned, "").into_owned();
    }
    cleaned
}
