use crate::process::date_parser::DateParser;
use crate::process::trimming::trim_blank;
use crate::process::types::TypedValue;

/// Plain decimal notation (`-12.5`, `1e3`, `.5`). Non-finite results are rejected.
fn parse_decimal(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Locale-tolerant parse for grouped numbers such as `1,234.56`, `1.234,56`
/// or `1 234,56`.
///
/// Spaces are dropped, then the third character from the end decides the
/// decimal separator: with `.` every `,` is grouping; with `,` every `.` is
/// grouping and the `,` becomes the decimal point. Anything else is parsed as-is.
pub fn parse_grouped_number(raw: &str) -> Option<f64> {
    let mut s: String = raw.chars().filter(|&c| c != ' ').collect();

    match s.chars().rev().nth(2) {
        Some('.') => s.retain(|c| c != ','),
        Some(',') => {
            s.retain(|c| c != '.');
            s = s.replace(',', ".");
        }
        _ => {}
    }

    parse_decimal(&s)
}

/// Direct decimal parse first, then the grouped-number fallback.
pub fn parse_number(s: &str) -> Option<f64> {
    parse_decimal(s).or_else(|| parse_grouped_number(s))
}

/// Coerce a single field. Never fails.
///
/// Numbers are tried before dates: permissive date layouts read strings like
/// `4.05` as day/month.
pub fn coerce_field<D: DateParser + ?Sized>(raw: &str, dates: &D) -> TypedValue {
    let field = trim_blank(raw);
    if field.is_empty() {
        return TypedValue::Empty;
    }
    if let Some(n) = parse_number(field) {
        return TypedValue::Number(n);
    }
    if let Some(d) = dates.parse(field) {
        return TypedValue::Date(d);
    }
    TypedValue::Text(field.to_string())
}

pub fn coerce<D: DateParser + ?Sized>(records: &[Vec<String>], dates: &D) -> Vec<Vec<TypedValue>> {
    records
        .iter()
        .map(|record| record.iter().map(|f| coerce_field(f, dates)).collect())
        .collect()
}
