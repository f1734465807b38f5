// fusion/interval.rs
//
// Overlap math over half-open time intervals.

/// Overlap duration between `[a_start, a_end)` and `[b_start, b_end)`.
///
/// Returns 0.0 for disjoint, touching, or degenerate intervals. Zero-length
/// inputs yield zero overlap by construction, so callers must reject
/// zero-duration segments before dividing by their duration.
pub fn overlap(a_start: f64, a_end: f64, b_start: f64, b_end: f64) -> f64 {
    (a_end.min(b_end) - a_start.max(b_start)).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_overlap() {
        assert!((overlap(0.0, 2.0, 1.0, 3.0) - 1.0).abs() < 1e-9);
        assert!((overlap(1.0, 3.0, 0.0, 2.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_containment() {
        // b contains a: overlap is all of a
        assert!((overlap(1.0, 2.0, 0.0, 10.0) - 1.0).abs() < 1e-9);
        // a contains b: overlap is all of b
        assert!((overlap(0.0, 10.0, 4.0, 4.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_is_zero() {
        assert_eq!(overlap(0.0, 1.0, 2.0, 3.0), 0.0);
        assert_eq!(overlap(2.0, 3.0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_touching_endpoints_do_not_overlap() {
        // Half-open intervals: [0,1) and [1,2) share no time
        assert_eq!(overlap(0.0, 1.0, 1.0, 2.0), 0.0);
    }

    #[test]
    fn test_degenerate_interval_is_zero() {
        assert_eq!(overlap(1.0, 1.0, 0.0, 2.0), 0.0);
        assert_eq!(overlap(0.0, 2.0, 1.5, 1.5), 0.0);
    }
}
