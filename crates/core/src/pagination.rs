//! Offset/limit slicing over a fixed-size catalog.

/// Resolve `offset`/`limit` into a half-open `[start, end)` range over a
/// catalog of `total` items.
///
/// Both bounds are clamped to `0..=total`; negative inputs behave like `0`
/// and oversized inputs stop at the end of the catalog. Never fails.
pub fn page_bounds(offset: i64, limit: i64, total: usize) -> (usize, usize) {
    let total_i = i64::try_from(total).unwrap_or(i64::MAX);
    let offset = offset.clamp(0, total_i);
    let limit = limit.max(0);
    let end = offset.saturating_add(limit).min(total_i);
    // Both values are within 0..=total here.
    (offset as usize, end as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page() {
        assert_eq!(page_bounds(0, 20, 999), (0, 20));
    }

    #[test]
    fn partial_last_page() {
        assert_eq!(page_bounds(995, 20, 999), (995, 999));
    }

    #[test]
    fn offset_past_end_is_empty() {
        assert_eq!(page_bounds(999, 20, 999), (999, 999));
        assert_eq!(page_bounds(5000, 20, 999), (999, 999));
    }

    #[test]
    fn zero_limit_is_empty() {
        let (start, end) = page_bounds(10, 0, 999);
        assert_eq!(start, end);
    }

    #[test]
    fn negative_inputs_clamp_to_zero() {
        assert_eq!(page_bounds(-5, 10, 999), (0, 10));
        assert_eq!(page_bounds(10, -3, 999), (10, 10));
    }

    #[test]
    fn huge_limit_does_not_overflow() {
        assert_eq!(page_bounds(1, i64::MAX, 999), (1, 999));
    }
}
