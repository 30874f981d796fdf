use tracing::{debug, warn};

use crate::config::FieldCountPolicy;
use crate::error::{ImportError, Result};

/// Reconcile records of unequal width.
///
/// - `Strict`: every record must match its predecessor's field count.
/// - `Lenient`: drop zero-field records and right-pad the rest with empty
///   fields up to the widest record.
pub fn normalize(records: Vec<Vec<String>>, policy: FieldCountPolicy) -> Result<Vec<Vec<String>>> {
    if records.is_empty() {
        return Err(ImportError::NoRecords);
    }

    match policy {
        FieldCountPolicy::Strict => normalize_strict(records),
        FieldCountPolicy::Lenient => normalize_lenient(records),
    }
}

fn normalize_strict(records: Vec<Vec<String>>) -> Result<Vec<Vec<String>>> {
    for (i, pair) in records.windows(2).enumerate() {
        if pair[0].len() != pair[1].len() {
            warn!(
                record = i + 1,
                expected = pair[0].len(),
                found = pair[1].len(),
                "field count mismatch"
            );
            return Err(ImportError::FieldCountMismatch {
                index: i + 1,
                previous: pair[0].join(","),
                current: pair[1].join(","),
            });
        }
    }

    if records[0].is_empty() {
        return Err(ImportError::NoFields);
    }
    Ok(records)
}

fn normalize_lenient(records: Vec<Vec<String>>) -> Result<Vec<Vec<String>>> {
    let widest = records.iter().map(Vec::len).max().unwrap_or(0);

    let mut kept: Vec<Vec<String>> = records.into_iter().filter(|r| !r.is_empty()).collect();
    if widest == 0 || kept.is_empty() {
        return Err(ImportError::NoFields);
    }

    let mut padded = 0;
    for record in kept.iter_mut() {
        if record.len() < widest {
            record.resize(widest, String::new());
            padded += 1;
        }
    }
    if padded > 0 {
        debug!(padded, width = widest, "padded short records");
    }

    Ok(kept)
}
