use crate::process::types::TypedValue;

/// First column whose every value is a date.
pub fn guess_date_column(rows: &[Vec<TypedValue>], num_columns: usize) -> Option<usize> {
    (0..num_columns).find(|&i| {
        rows.iter()
            .all(|row| row.get(i).is_some_and(TypedValue::is_date))
    })
}
