//! Simplification entry points.
//!
//! Composes the [radial-distance prefilter](crate::radial) and the
//! [Douglas-Peucker refiner](crate::douglas_peucker) into one pipeline.
//! The tolerance is squared once here and the squared value is handed
//! to both stages.

use crate::douglas_peucker::{Traversal, douglas_peucker_traced};
use crate::radial::radial_distance_indices;
use crate::types::{Polyline, Quality, SimplifyConfig, Vertex};

/// Simplify a polyline.
///
/// Points within `tolerance` of the simplified path are removed. With
/// `highest_quality` set, Douglas-Peucker runs on the full input;
/// otherwise a radial-distance prefilter thins the input first, which is
/// faster on dense input but may drop points Douglas-Peucker would keep.
///
/// Polylines with fewer than 3 points are returned unchanged. For longer
/// input the first and last points are always kept, surviving points keep
/// their relative order, and no point is synthesized. A negative
/// tolerance behaves like its absolute value.
#[must_use = "returns the simplified polyline"]
pub fn simplify<P: Vertex + Clone>(
    points: &[P],
    tolerance: P::Scalar,
    highest_quality: bool,
) -> Vec<P> {
    simplify_with_config(
        points,
        &SimplifyConfig::new(tolerance, Quality::from(highest_quality)),
    )
}

/// Simplify a polyline using a [`SimplifyConfig`].
///
/// The configuration is not validated; see [`SimplifyConfig::validate`].
#[must_use = "returns the simplified polyline"]
pub fn simplify_with_config<P: Vertex + Clone>(
    points: &[P],
    config: &SimplifyConfig<P::Scalar>,
) -> Vec<P> {
    gather(points, &simplify_indices_with_config(points, config))
}

/// Indices of the points [`simplify`] would keep, in ascending order.
#[must_use = "returns the indices of kept points"]
pub fn simplify_indices<P: Vertex>(
    points: &[P],
    tolerance: P::Scalar,
    highest_quality: bool,
) -> Vec<usize> {
    simplify_indices_with_config(
        points,
        &SimplifyConfig::new(tolerance, Quality::from(highest_quality)),
    )
}

/// Indices of the points [`simplify_with_config`] would keep, in
/// ascending order.
#[must_use = "returns the indices of kept points"]
pub fn simplify_indices_with_config<P: Vertex>(
    points: &[P],
    config: &SimplifyConfig<P::Scalar>,
) -> Vec<usize> {
    let n = points.len();
    if n <= 2 {
        return (0..n).collect();
    }

    let sq_tolerance = config.sq_tolerance();
    let (kept, _) = match config.quality {
        Quality::Highest => douglas_peucker_traced(points, sq_tolerance),
        Quality::Fast => {
            let survivors = radial_distance_indices(points, sq_tolerance);
            refine_survivors(points, &survivors, sq_tolerance)
        }
    };

    tracing::debug!(
        quality = ?config.quality,
        input = n,
        output = kept.len(),
        "simplified polyline"
    );

    kept
}

/// Simplify multiple polylines, each independently.
#[must_use = "returns the simplified polylines"]
pub fn simplify_paths<P: Vertex + Clone>(
    polylines: &[Polyline<P>],
    config: &SimplifyConfig<P::Scalar>,
) -> Vec<Polyline<P>> {
    polylines
        .iter()
        .map(|pl| Polyline::new(simplify_with_config(pl.points(), config)))
        .collect()
}

/// Run Douglas-Peucker over the prefilter survivors and map the result
/// back to indices into the original `points`.
pub(crate) fn refine_survivors<P: Vertex>(
    points: &[P],
    survivors: &[usize],
    sq_tolerance: P::Scalar,
) -> (Vec<usize>, Traversal) {
    let subset: Vec<&P> = survivors.iter().map(|&i| &points[i]).collect();
    let (kept, traversal) = douglas_peucker_traced(&subset, sq_tolerance);
    (kept.into_iter().map(|j| survivors[j]).collect(), traversal)
}

/// Clone the points at `indices`.
pub(crate) fn gather<P: Clone>(points: &[P], indices: &[usize]) -> Vec<P> {
    indices.iter().map(|&i| points[i].clone()).collect()
}
