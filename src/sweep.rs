use itertools::Itertools;

use crate::library::IterExt;

/// Count how many three-measurement window sums are strictly greater than the
/// window sum immediately before them.
///
/// Every starting index gets a window, so the final two windows are partial:
/// positions past the end of the sequence contribute 0 to the sum. The first
/// window has nothing to compare against and is never counted. Sequences
/// shorter than 2 produce 0.
pub fn count_window_increases(measurements: &[i64]) -> usize {
    measurements
        .iter()
        .copied()
        .padded_windows()
        .map(|[a, b, c]| a + b + c)
        .tuple_windows()
        .filter(|&(previous, current)| current > previous)
        .count()
}
