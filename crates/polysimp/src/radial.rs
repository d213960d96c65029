//! Radial-distance prefilter.
//!
//! A single O(n) forward pass that drops every point lying within the
//! tolerance of the previously *kept* point. It looks at no segment
//! geometry, so it is coarser than Douglas-Peucker and is only used as a
//! cheap thinning step before it (see [`Quality::Fast`](crate::Quality::Fast)).

use crate::distance::squared_distance;
use crate::types::Vertex;

/// Indices of the points kept by the radial-distance filter.
///
/// `sq_tolerance` is the squared tolerance. A point is kept only if its
/// squared distance to the previously kept point is strictly greater.
/// The first and last points are always kept; inputs with fewer than 3
/// points are returned whole.
///
/// The returned indices are strictly ascending.
#[must_use = "returns the indices of kept points"]
pub fn radial_distance_indices<P: Vertex>(points: &[P], sq_tolerance: P::Scalar) -> Vec<usize> {
    let n = points.len();
    if n <= 2 {
        return (0..n).collect();
    }

    let mut kept = Vec::with_capacity(n);
    kept.push(0);
    let mut anchor = &points[0];

    for (i, point) in points.iter().enumerate().take(n - 1).skip(1) {
        if squared_distance(point, anchor) > sq_tolerance {
            kept.push(i);
            anchor = point;
        }
    }

    // The last point survives even when it sits within tolerance.
    kept.push(n - 1);
    kept
}

/// Thin a polyline with the radial-distance filter.
///
/// See [`radial_distance_indices`] for the retention rule.
#[must_use = "returns the filtered points"]
pub fn radial_distance<P: Vertex + Clone>(points: &[P], sq_tolerance: P::Scalar) -> Vec<P> {
    radial_distance_indices(points, sq_tolerance)
        .into_iter()
        .map(|i| points[i].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    #[test]
    fn empty_input_unchanged() {
        let points: Vec<Point> = vec![];
        assert!(radial_distance(&points, 1.0).is_empty());
    }

    #[test]
    fn one_and_two_points_unchanged() {
        let one = vec![Point::new(0.0, 0.0)];
        assert_eq!(radial_distance(&one, 100.0), one);

        // Both points survive even though they are within tolerance.
        let two = vec![Point::new(0.0, 0.0), Point::new(0.1, 0.0)];
        assert_eq!(radial_distance(&two, 100.0), two);
    }

    #[test]
    fn drops_points_near_previous_kept() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(0.1, 0.0),
            Point::new(0.2, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.05, 0.0),
            Point::new(2.0, 0.0),
        ];
        // Tolerance 0.5, squared.
        assert_eq!(radial_distance_indices(&points, 0.25), vec![0, 3, 5]);
    }

    #[test]
    fn last_point_kept_even_within_tolerance() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(5.01, 0.0),
        ];
        let result = radial_distance(&points, 1.0);
        assert_eq!(result, points);
        assert_eq!(result.last(), Some(&Point::new(5.01, 0.0)));
    }

    #[test]
    fn compares_against_kept_point_not_previous_input() {
        // Each step is 0.6, below tolerance 1, but the distance to the
        // last kept point accumulates past it every second step.
        let points: Vec<Point> = (0..6)
            .map(|i| Point::new(f64::from(i) * 0.6, 0.0))
            .collect();
        assert_eq!(radial_distance_indices(&points, 1.0), vec![0, 2, 4, 5]);
    }

    #[test]
    fn zero_tolerance_drops_consecutive_duplicates() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
        ];
        assert_eq!(radial_distance_indices(&points, 0.0), vec![0, 2, 4]);
    }

    #[test]
    fn integer_points() {
        let points = vec![(0_i64, 0_i64), (1, 0), (3, 0), (4, 1), (9, 9)];
        // Tolerance 2. (1,0) is too close to the start, (4,1) too close to (3,0).
        assert_eq!(radial_distance(&points, 4), vec![(0, 0), (3, 0), (9, 9)]);
    }

    #[test]
    fn output_never_longer_than_input() {
        let points: Vec<Point> = (0..50)
            .map(|i| {
                let t = f64::from(i) * 0.3;
                Point::new(t.cos() * t, t.sin() * t)
            })
            .collect();
        for sq_tolerance in [0.0, 0.01, 1.0, 25.0, 1e6] {
            let indices = radial_distance_indices(&points, sq_tolerance);
            assert!(indices.len() <= points.len());
            assert_eq!(indices.first(), Some(&0));
            assert_eq!(indices.last(), Some(&49));
            assert!(indices.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
