use tracing::trace;

use crate::process::types::TypedValue;

fn alpha_count(value: &TypedValue) -> usize {
    match value {
        TypedValue::Text(s) => s.chars().filter(char::is_ascii_alphabetic).count(),
        TypedValue::Empty | TypedValue::Number(_) | TypedValue::Date(_) => 0,
    }
}

/// Column with the most ASCII letters across its text cells. Ties go to the
/// lowest index; `None` only when there are no columns.
pub fn guess_description_column(rows: &[Vec<TypedValue>], num_columns: usize) -> Option<usize> {
    let mut counts: Vec<(usize, usize)> = (0..num_columns)
        .map(|i| {
            let count = rows
                .iter()
                .filter_map(|row| row.get(i))
                .map(alpha_count)
                .sum();
            (i, count)
        })
        .collect();
    trace!(?counts, "alphabetic character counts");

    // stable: equal counts keep ascending index order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.first().map(|&(i, _)| i)
}
