use tracing::{debug, trace};

use crate::process::types::{TypeTag, TypedValue};

/// Decide whether row 0 is a header by comparing it with row 1.
///
/// Row 0 is a header if some column is typed (date or number) in row 1 but
/// not the same type in row 0. A single row is always data.
pub fn has_header(typed_rows: &[Vec<TypedValue>]) -> bool {
    let (first, second) = match typed_rows {
        [first, second, ..] => (first, second),
        _ => return false,
    };

    let found = first.iter().zip(second).enumerate().find(|(_, (head, data))| {
        (!head.is_date() && data.is_date()) || (!head.is_number() && data.is_number())
    });

    match found {
        Some((col, (head, data))) => {
            debug!(column = col, header = ?head.tag(), data = ?data.tag(), "first row is a header");
            true
        }
        None => {
            trace!("first row looks like data");
            false
        }
    }
}

/// Per column, the tag shared by every row, or `None` if the rows disagree
/// (or there are no rows). Empty cells in a text column do not break agreement.
pub fn column_types(typed_rows: &[Vec<TypedValue>], num_columns: usize) -> Vec<Option<TypeTag>> {
    (0..num_columns)
        .map(|i| {
            let mut tags = typed_rows.iter().map(|row| row.get(i).map(TypedValue::tag));
            let first = tags.next()??;
            tags.try_fold(first, |acc, tag| acc.merge(tag?))
        })
        .collect()
}
