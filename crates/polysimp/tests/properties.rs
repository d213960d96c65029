//! Integration tests: behavioral guarantees of the public simplification API.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use polysimp::{
    Point, Polyline, Quality, SimplifyConfig, simplify, simplify_indices, simplify_paths,
    simplify_with_config,
};

fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

/// Dense noisy sine wave.
fn sine(n: u32) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let x = f64::from(i) * 0.1;
            Point::new(x, 4.0 * (x * 0.5).sin() + 0.2 * (x * 7.3).sin())
        })
        .collect()
}

/// Diverging spiral.
fn spiral(n: u32) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let t = f64::from(i) * 0.07;
            Point::new(t * t.cos(), t * t.sin())
        })
        .collect()
}

fn inputs() -> Vec<Vec<Point>> {
    vec![
        vec![],
        pts(&[(3.0, 4.0)]),
        pts(&[(0.0, 0.0), (9.0, 9.0)]),
        pts(&[(0.0, 0.0), (0.0, 0.0), (0.0, 0.0), (0.0, 0.0)]),
        pts(&[(0.0, 0.0), (5.0, 5.0), (0.0, 0.0)]),
        sine(300),
        spiral(400),
    ]
}

const TOLERANCES: [f64; 5] = [0.0, 0.05, 0.5, 2.0, 50.0];

#[test]
fn endpoints_are_preserved() {
    for points in inputs() {
        for tolerance in TOLERANCES {
            for highest_quality in [true, false] {
                let result = simplify(&points, tolerance, highest_quality);
                assert_eq!(result.first(), points.first());
                assert_eq!(result.last(), points.last());
            }
        }
    }
}

#[test]
fn output_is_never_longer_than_input() {
    for points in inputs() {
        for tolerance in TOLERANCES {
            for highest_quality in [true, false] {
                assert!(simplify(&points, tolerance, highest_quality).len() <= points.len());
            }
        }
    }
}

#[test]
fn output_is_an_ordered_subsequence_of_input() {
    for points in inputs() {
        for tolerance in TOLERANCES {
            for highest_quality in [true, false] {
                let indices = simplify_indices(&points, tolerance, highest_quality);
                assert!(indices.windows(2).all(|w| w[0] < w[1]), "{indices:?}");

                let result = simplify(&points, tolerance, highest_quality);
                let gathered: Vec<Point> = indices.iter().map(|&i| points[i]).collect();
                assert_eq!(result, gathered);
            }
        }
    }
}

#[test]
fn short_inputs_are_returned_exactly() {
    let cases = [
        vec![],
        pts(&[(1.0, 1.0)]),
        pts(&[(0.0, 0.0), (0.0, 0.0)]),
        pts(&[(0.0, 0.0), (0.1, 0.1)]),
    ];
    for points in cases {
        for tolerance in [0.0, 1.0, 1e12, -3.0] {
            assert_eq!(simplify(&points, tolerance, true), points);
            assert_eq!(simplify(&points, tolerance, false), points);
        }
    }
}

#[test]
fn collinear_interior_points_are_removed() {
    let points = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
    let expected = pts(&[(0.0, 0.0), (3.0, 0.0)]);
    assert_eq!(simplify(&points, 1.0, true), expected);
    assert_eq!(simplify(&points, 0.0, true), expected);
}

#[test]
fn point_displaced_beyond_tolerance_survives() {
    let points = pts(&[(0.0, 0.0), (1.0, 5.0), (2.0, 0.0)]);
    assert_eq!(simplify(&points, 1.0, true), points);
}

#[test]
fn point_displaced_within_tolerance_is_dropped() {
    let points = pts(&[(0.0, 0.0), (1.0, 0.1), (2.0, 0.0)]);
    assert_eq!(simplify(&points, 1.0, true), pts(&[(0.0, 0.0), (2.0, 0.0)]));
}

#[test]
fn fast_pipeline_diverges_on_shallow_zigzag() {
    // Each interior step is within tolerance of the point kept before it,
    // so the prefilter discards the peaks. The full refiner sees that the
    // peaks deviate from the chord by more than the tolerance.
    let points = pts(&[
        (0.0, 0.0),
        (10.0, 0.6),
        (10.0, 1.4),
        (20.0, 0.0),
        (30.0, -0.6),
        (30.0, -1.4),
        (40.0, 0.0),
    ]);

    let highest = simplify(&points, 1.0, true);
    let fast = simplify(&points, 1.0, false);

    assert!(
        fast.len() < highest.len(),
        "fast {fast:?} should be shorter than highest {highest:?}",
    );
    assert!(highest.contains(&Point::new(10.0, 1.4)));
    assert!(highest.contains(&Point::new(30.0, -1.4)));
    assert_eq!(fast, pts(&[(0.0, 0.0), (40.0, 0.0)]));
}

#[test]
fn fast_pipeline_matches_on_well_spaced_input() {
    // Every step exceeds the tolerance, so the prefilter drops nothing.
    let points = pts(&[(0.0, 0.0), (5.0, 3.0), (10.0, -2.0), (15.0, 4.0), (20.0, 0.0)]);
    assert_eq!(simplify(&points, 1.0, false), simplify(&points, 1.0, true));
}

#[test]
fn idempotent_on_monotone_input() {
    let points: Vec<Point> = (0..=40)
        .map(|i| {
            let x = f64::from(i) * 0.25;
            Point::new(x, x * x)
        })
        .collect();
    for highest_quality in [true, false] {
        let once = simplify(&points, 0.5, highest_quality);
        let twice = simplify(&once, 0.5, highest_quality);
        assert_eq!(once, twice);
    }
}

#[test]
fn generic_scalars_and_point_shapes() {
    let ints: Vec<[i64; 2]> = vec![[0, 0], [10, 1], [20, 0], [30, 40], [40, 0]];
    let kept = simplify(&ints, 2, true);
    assert_eq!(kept.first(), Some(&[0, 0]));
    assert_eq!(kept.last(), Some(&[40, 0]));
    assert!(kept.contains(&[30, 40]));

    let floats: Vec<(f32, f32)> = vec![(0.0, 0.0), (1.0, 0.01), (2.0, 0.0)];
    assert_eq!(simplify(&floats, 0.5_f32, true), vec![(0.0, 0.0), (2.0, 0.0)]);
}

#[test]
fn config_and_batch_entry_points_agree() {
    let points = sine(500);
    let config = SimplifyConfig::new(0.25, Quality::Fast);
    let single = simplify_with_config(&points, &config);
    assert_eq!(single, simplify(&points, 0.25, false));

    let batch = simplify_paths(
        &[Polyline::new(points.clone()), Polyline::new(spiral(50))],
        &config,
    );
    assert_eq!(batch.len(), 2);
    assert_eq!(batch[0].points(), single.as_slice());
}

#[test]
fn large_input_completes_without_recursion_limits() {
    let points = sine(200_000);
    for highest_quality in [true, false] {
        let result = simplify(&points, 0.5, highest_quality);
        assert_eq!(result.first(), points.first());
        assert_eq!(result.last(), points.last());
        assert!(result.len() < points.len());
    }
}

#[test]
fn validated_config_rejects_negative_tolerance() {
    let config = SimplifyConfig::new(-1.0, Quality::Highest);
    assert!(config.validate().is_err());
    // The unvalidated entry point still produces a result.
    let points = sine(20);
    assert_eq!(
        simplify_with_config(&points, &config),
        simplify(&points, 1.0, true)
    );
}
