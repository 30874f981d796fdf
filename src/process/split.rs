// src/process/split.rs
use crate::process::trimming::{clean_field, is_quote, trim_blank};

/// Split on `\n` / `\r\n`, trim each line (BOM included) and drop the ones left empty.
pub fn split_lines(data: &str) -> Vec<String> {
    data.split('\n')
        .map(trim_blank)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScanState {
    Unquoted,
    InQuotes(char),
}

/// Quote-aware split of one line on `sep`.
///
/// A quote only opens a span when nothing but spaces precedes it in the
/// current field, so an apostrophe inside free text stays literal. Inside a
/// span only the same quote character closes it.
pub fn split_fields(line: &str, sep: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut state = ScanState::Unquoted;
    let mut field_start = 0;
    let mut only_space_since_sep = true;

    for (i, c) in line.char_indices() {
        if is_quote(c) {
            state = match state {
                ScanState::InQuotes(open) if open == c => ScanState::Unquoted,
                ScanState::Unquoted if only_space_since_sep => ScanState::InQuotes(c),
                other => other,
            };
        }

        if c != ' ' {
            only_space_since_sep = false;
        }

        if c == sep && state == ScanState::Unquoted {
            parts.push(&line[field_start..i]);
            field_start = i + c.len_utf8();
            only_space_since_sep = true;
        }
    }
    parts.push(&line[field_start..]);

    parts.into_iter().map(clean_field).collect()
}

/// Tokenize every line into a record. Field counts are not reconciled here.
pub fn tokenize(lines: &[String], sep: char) -> Vec<Vec<String>> {
    lines.iter().map(|line| split_fields(line, sep)).collect()
}
