//! polysimp: Pure polyline simplification (sans-IO).
//!
//! Reduces the number of vertices in an ordered sequence of 2D points
//! while keeping its shape within a caller-specified tolerance:
//!
//! 1. Optional radial-distance prefilter ([`radial`]), a single O(n) pass
//!    that drops points close to the previously kept point.
//! 2. Ramer-Douglas-Peucker refinement ([`douglas_peucker`]), which keeps
//!    the points deviating most from the simplified path.
//!
//! [`simplify`] composes the two. Both stages work on squared distances
//! ([`distance`]) and are generic over the caller's point type through
//! the [`Vertex`] trait, so `f64`, `f32` and signed integer coordinates
//! are all supported.
//!
//! ```
//! use polysimp::{Point, simplify};
//!
//! let track = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.1),
//!     Point::new(2.0, -0.1),
//!     Point::new(3.0, 5.0),
//!     Point::new(4.0, 6.0),
//! ];
//! let simplified = simplify(&track, 1.0, true);
//! assert_eq!(simplified.first(), track.first());
//! assert_eq!(simplified.last(), track.last());
//! assert!(simplified.len() < track.len());
//! ```
//!
//! This crate has **no I/O dependencies**. It neither parses nor
//! serializes point data; the bench CLI lives in `polysimp-bench`.

pub mod diagnostics;
pub mod distance;
pub mod douglas_peucker;
pub mod radial;
pub mod simplify;
pub mod types;

pub use diagnostics::{Clock, SimplifyDiagnostics, SystemClock, simplify_with_diagnostics};
pub use simplify::{
    simplify, simplify_indices, simplify_indices_with_config, simplify_paths, simplify_with_config,
};
pub use types::{Point, Polyline, Quality, Scalar, SimplifyConfig, SimplifyError, Vertex};
