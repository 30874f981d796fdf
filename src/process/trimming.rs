use once_cell::sync::Lazy;
use regex::Regex;

const QUOTE_CHARS: [char; 2] = ['\'', '"'];

static DOUBLE_QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r#""[^"]+""#).unwrap());
static SINGLE_QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r"'[^']+'").unwrap());

/// Trim whitespace and byte-order marks from both ends.
pub fn trim_blank(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Trim whitespace, then any run of leading/trailing quote characters.
///
/// Applied to every field regardless of how the tokenizer treated its quotes.
pub fn clean_field(raw: &str) -> String {
    trim_blank(raw).trim_matches(&QUOTE_CHARS[..]).to_string()
}

/// Remove every `"..."` span, then every `'...'` span, quotes included.
pub fn strip_quoted_spans(line: &str) -> String {
    let without_double = DOUBLE_QUOTED.replace_all(line, "");
    SINGLE_QUOTED.replace_all(&without_double, "").into_owned()
}

pub fn is_quote(c: char) -> bool {
    QUOTE_CHARS.contains(&c)
}
