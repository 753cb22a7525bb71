use std::cmp::Ordering;

/// Most frequent value in `values`.
///
/// Values are compared exactly. When several values share the highest
/// frequency the smallest of them is returned, so the result does not depend
/// on input order. Returns `None` for an empty slice.
pub fn modal_value(values: &[f64]) -> Option<f64> {
    let mut sorted: Vec<f64> = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mut best: Option<(f64, usize)> = None;
    let mut i = 0;
    while i < sorted.len() {
        let value = sorted[i];
        let mut run = 1;
        while i + run < sorted.len() && sorted[i + run].total_cmp(&value) == Ordering::Equal {
            run += 1;
        }
        // strict '>' keeps the smallest value on ties, since runs come in ascending order
        if best.map_or(true, |(_, count)| run > count) {
            best = Some((value, run));
        }
        i += run;
    }
    best.map(|(value, _)| value)
}
