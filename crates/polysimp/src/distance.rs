//! Squared-distance primitives.
//!
//! Both functions return squared distances so callers can compare
//! magnitudes without a square root, which also keeps them usable with
//! integer scalars.

use num_traits::{One, Zero};

use crate::types::Vertex;

/// Squared Euclidean distance between two points (`dx² + dy²`).
#[must_use]
pub fn squared_distance<P: Vertex>(a: &P, b: &P) -> P::Scalar {
    squared_distance_to(a, b.x(), b.y())
}

/// Squared distance from `p` to the segment `[p1, p2]`.
///
/// Projects `p` onto the segment and clamps the projection to the
/// endpoints, so this is the distance to the segment and not to the
/// infinite line through it. A zero-length segment degenerates to the
/// distance to `p1`.
#[must_use]
pub fn squared_segment_distance<P: Vertex>(p: &P, p1: &P, p2: &P) -> P::Scalar {
    let mut x = p1.x();
    let mut y = p1.y();
    let dx = p2.x() - x;
    let dy = p2.y() - y;

    let zero = <P::Scalar as Zero>::zero();
    if dx != zero || dy != zero {
        let t = ((p.x() - x) * dx + (p.y() - y) * dy) / (dx * dx + dy * dy);

        if t > <P::Scalar as One>::one() {
            x = p2.x();
            y = p2.y();
        } else if t > zero {
            x = x + dx * t;
            y = y + dy * t;
        }
    }

    squared_distance_to(p, x, y)
}

/// Squared distance from `p` to the coordinates `(x, y)`.
fn squared_distance_to<P: Vertex>(p: &P, x: P::Scalar, y: P::Scalar) -> P::Scalar {
    let dx = p.x() - x;
    let dy = p.y() - y;
    dx * dx + dy * dy
}
