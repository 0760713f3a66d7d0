//! Infinite line intersection.

use vecbox_math::Point2;

/// Intersect the infinite lines through `(p1, p2)` and `(p3, p4)`.
///
/// Uses the 2x2 determinant form. The degeneracy test is exact: only a
/// determinant of exactly `0.0` (parallel or coincident lines, or a line
/// given by two equal points) yields `None`. Nearly parallel lines
/// produce a distant but finite point.
pub fn intersect_lines(p1: &Point2, p2: &Point2, p3: &Point2, p4: &Point2) -> Option<Point2> {
    let d = (p1.x - p2.x) * (p3.y - p4.y) - (p1.y - p2.y) * (p3.x - p4.x);
    if d == 0.0 {
        return None;
    }

    let t = ((p1.x - p3.x) * (p3.y - p4.y) - (p1.y - p3.y) * (p3.x - p4.x)) / d;
    Some(Point2::new(
        p1.x + t * (p2.x - p1.x),
        p1.y + t * (p2.y - p1.y),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn test_perpendicular_lines() {
        let hit = intersect_lines(&p(0.0, 0.0), &p(10.0, 0.0), &p(5.0, -5.0), &p(5.0, 5.0));
        assert_eq!(hit, Some(p(5.0, 0.0)));
    }

    #[test]
    fn test_parallel_lines() {
        let hit = intersect_lines(&p(0.0, 0.0), &p(1.0, 1.0), &p(0.0, 1.0), &p(1.0, 2.0));
        assert_eq!(hit, None);
    }

    #[test]
    fn test_coincident_lines() {
        let hit = intersect_lines(&p(0.0, 0.0), &p(1.0, 1.0), &p(2.0, 2.0), &p(3.0, 3.0));
        assert_eq!(hit, None);
    }

    #[test]
    fn test_degenerate_line() {
        let hit = intersect_lines(&p(1.0, 1.0), &p(1.0, 1.0), &p(0.0, 5.0), &p(5.0, 0.0));
        assert_eq!(hit, None);
    }

    #[test]
    fn test_lines_not_segments() {
        // segments do not overlap but the lines cross at (20, 20)
        let hit = intersect_lines(&p(0.0, 0.0), &p(1.0, 1.0), &p(20.0, 0.0), &p(20.0, 1.0)).unwrap();
        assert!((hit.x - 20.0).abs() < 1e-10);
        assert!((hit.y - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_nearly_parallel_is_not_rejected() {
        let hit = intersect_lines(&p(0.0, 0.0), &p(1.0, 0.0), &p(0.0, 1.0), &p(1.0, 1.0 + 1e-12));
        let hit = hit.expect("exact test only rejects a zero determinant");
        assert!(hit.x.abs() > 1e9);
    }

    #[test]
    fn test_argument_order_within_line_is_irrelevant() {
        let a = intersect_lines(&p(0.0, 0.0), &p(4.0, 2.0), &p(0.0, 3.0), &p(3.0, 0.0)).unwrap();
        let b = intersect_lines(&p(4.0, 2.0), &p(0.0, 0.0), &p(3.0, 0.0), &p(0.0, 3.0)).unwrap();
        assert!((a - b).norm() < 1e-10);
        assert!((a.x - 2.0).abs() < 1e-10);
        assert!((a.y - 1.0).abs() < 1e-10);
    }
}
