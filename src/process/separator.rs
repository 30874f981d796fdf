use tracing::{debug, trace};

use crate::process::trimming::strip_quoted_spans;

/// Vote on the field separator.
///
/// Only the first `sample_lines` lines are inspected, with quoted spans
/// removed so separators embedded in quoted text don't count. The candidate
/// with the strictly highest count wins; ties (including all-zero) go to the
/// earlier candidate. An empty candidate list falls back to comma.
pub fn detect_separator(lines: &[String], candidates: &[char], sample_lines: usize) -> char {
    let sample: Vec<String> = lines
        .iter()
        .take(sample_lines)
        .map(|line| strip_quoted_spans(line))
        .collect();

    let mut best: Option<(char, usize)> = None;
    for &sep in candidates {
        let count: usize = sample
            .iter()
            .map(|line| line.chars().filter(|&c| c == sep).count())
            .sum();
        trace!(separator = ?sep, count, "separator vote");

        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((sep, count)),
        }
    }

    let sep = best.map(|(sep, _)| sep).unwrap_or(',');
    debug!(separator = ?sep, sampled = sample.len(), "detected separator");
    sep
}
