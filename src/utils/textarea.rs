/// Row count needed to show `content` in a textarea `cols` characters wide
/// without scrolling: reset to the intrinsic `min_rows`, then grow to fit
/// the wrapped content exactly.
///
/// Purely presentational; recomputed on every draft edit.
pub fn rows_for(content: &str, cols: usize, min_rows: usize) -> usize {
    let cols = cols.max(1);
    let mut rows = 0;
    for line in content.split('\n') {
        let width = line.chars().count();
        rows += 1 + width.saturating_sub(1) / cols;
    }
    rows.max(min_rows)
}
