//! Ramer-Douglas-Peucker refinement.
//!
//! For an index range `[first, last]`, the interior point farthest from
//! the segment `points[first]..points[last]` is kept if its distance
//! exceeds the tolerance, and both halves are refined the same way.
//! Otherwise the whole range collapses to its two endpoints.
//!
//! The split is driven by an explicit work stack instead of recursion, so
//! call-stack usage does not depend on the input's shape. Stack entries
//! are pushed right-half first, then the anchor, then the left half, so
//! popping them emits kept indices in ascending order.

use crate::distance::squared_segment_distance;
use crate::types::Vertex;

/// Counters describing one refinement run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Traversal {
    /// Number of `[first, last]` ranges scanned for a farthest point.
    pub ranges_visited: usize,
    /// Peak length of the work stack.
    pub max_stack_depth: usize,
}

/// One unit of pending work.
enum Task {
    /// Refine the interior of `[first, last]`.
    Range { first: usize, last: usize },
    /// Append an anchor index to the output.
    Emit(usize),
}

/// Indices of the points kept by Douglas-Peucker refinement.
///
/// `sq_tolerance` is the squared tolerance. Inputs with fewer than 3
/// points are returned whole. The returned indices are strictly
/// ascending and always include the first and last index.
///
/// When several interior points share the greatest deviation, the one
/// with the lowest index becomes the anchor.
#[must_use = "returns the indices of kept points"]
pub fn douglas_peucker_indices<P: Vertex>(points: &[P], sq_tolerance: P::Scalar) -> Vec<usize> {
    douglas_peucker_traced(points, sq_tolerance).0
}

/// Simplify a polyline with Douglas-Peucker refinement.
///
/// See [`douglas_peucker_indices`] for the retention rule.
#[must_use = "returns the simplified points"]
pub fn douglas_peucker<P: Vertex + Clone>(points: &[P], sq_tolerance: P::Scalar) -> Vec<P> {
    douglas_peucker_indices(points, sq_tolerance)
        .into_iter()
        .map(|i| points[i].clone())
        .collect()
}

/// Like [`douglas_peucker_indices`], also returning traversal counters.
#[must_use = "returns the indices of kept points"]
pub fn douglas_peucker_traced<P: Vertex>(
    points: &[P],
    sq_tolerance: P::Scalar,
) -> (Vec<usize>, Traversal) {
    let n = points.len();
    if n <= 2 {
        return ((0..n).collect(), Traversal::default());
    }

    let last = n - 1;
    let mut kept = vec![0];
    let mut stack = vec![Task::Range { first: 0, last }];
    let mut traversal = Traversal {
        ranges_visited: 0,
        max_stack_depth: stack.len(),
    };

    while let Some(task) = stack.pop() {
        match task {
            Task::Emit(index) => kept.push(index),
            Task::Range { first, last } => {
                traversal.ranges_visited += 1;

                let Some(index) = farthest_beyond(points, first, last, sq_tolerance) else {
                    continue;
                };

                if last - index > 1 {
                    stack.push(Task::Range { first: index, last });
                }
                stack.push(Task::Emit(index));
                if index - first > 1 {
                    stack.push(Task::Range { first, last: index });
                }
                traversal.max_stack_depth = traversal.max_stack_depth.max(stack.len());
            }
        }
    }

    kept.push(last);

    tracing::trace!(
        input = n,
        kept = kept.len(),
        ranges_visited = traversal.ranges_visited,
        max_stack_depth = traversal.max_stack_depth,
        "douglas-peucker refinement finished"
    );

    (kept, traversal)
}

/// Index of the interior point of `[first, last]` farthest from the
/// segment between its endpoints, if that distance exceeds the tolerance.
///
/// Strict comparison keeps the first index on ties.
fn farthest_beyond<P: Vertex>(
    points: &[P],
    first: usize,
    last: usize,
    sq_tolerance: P::Scalar,
) -> Option<usize> {
    let start = &points[first];
    let end = &points[last];

    let mut max_sq_dist = sq_tolerance;
    let mut farthest = None;

    for (i, point) in points.iter().enumerate().take(last).skip(first + 1) {
        let sq_dist = squared_segment_distance(point, start, end);
        if sq_dist > max_sq_dist {
            max_sq_dist = sq_dist;
            farthest = Some(i);
        }
    }

    farthest
}
