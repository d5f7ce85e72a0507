use std::sync::LazyLock;

use regex::Regex;
use url::Url;

// Input validators
//------------------------------------------------------------------------------

// Advisory checks for form input. Encoding never consults them.

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email pattern"));

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{0,15}$").expect("Invalid phone pattern"));

static HEX_COLOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^#([0-9A-F]{3}){1,2}$").expect("Invalid hex color pattern")
});

pub fn is_valid_email(text: &str) -> bool {
    EMAIL_PATTERN.is_match(text)
}

/// Accepts anything that parses as a URL once an `https://` scheme is
/// assumed for bare hosts. Inputs already starting with `http` are tried
/// as-is.
pub fn is_valid_url(text: &str) -> bool {
    let candidate =
        if text.starts_with("http") { text.to_string() } else { format!("https://{text}") };
    Url::parse(&candidate).is_ok()
}

/// Strips grouping characters (spaces, dashes, parentheses) before matching
/// E.164-style digits.
pub fn is_valid_phone(text: &str) -> bool {
    let digits: String =
        text.chars().filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')')).collect();
    PHONE_PATTERN.is_match(&digits)
}

/// Accepts `#RGB` and `#RRGGBB`, case insensitive.
pub fn is_valid_hex_color(text: &str) -> bool {
    HEX_COLOR_PATTERN.is_match(text)
}
