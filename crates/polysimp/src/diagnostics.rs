//! Simplification diagnostics: timing and counts for each stage.
//!
//! [`simplify_with_diagnostics`] produces exactly the same output as
//! [`simplify_with_config`](crate::simplify_with_config) and additionally
//! records per-stage durations, point counts, and Douglas-Peucker
//! traversal counters. Intended for tolerance tuning and for comparing
//! the two [`Quality`] pipelines.
//!
//! Timestamps come from a caller-supplied [`Clock`] so this module stays
//! sans-IO. [`SystemClock`] uses the `web-time` crate, which is backed by
//! `performance.now()` on WASM and `std::time::Instant` on native.
//!
//! Durations are serialized as fractional seconds (`f64`) for JSON
//! compatibility, since `std::time::Duration` does not implement serde
//! traits.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::douglas_peucker::{Traversal, douglas_peucker_traced};
use crate::radial::radial_distance_indices;
use crate::simplify::{gather, refine_survivors};
use crate::types::{Quality, SimplifyConfig, Vertex};

/// Serde support for `std::time::Duration` as fractional seconds.
mod duration_serde {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Serialize a `Duration` as fractional seconds (`f64`).
    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs_f64().serialize(serializer)
    }

    /// Deserialize a `Duration` from fractional seconds (`f64`).
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(|_| {
            serde::de::Error::custom(
                "duration seconds must be finite, non-negative, and representable as a Duration",
            )
        })
    }
}

/// Source of timestamps for stage timing.
pub trait Clock {
    /// Opaque point in time.
    type Instant;

    /// Current time.
    fn now(&self) -> Self::Instant;

    /// Time elapsed since `since`.
    fn elapsed(&self, since: &Self::Instant) -> Duration;
}

/// [`Clock`] backed by [`web_time::Instant`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    type Instant = web_time::Instant;

    fn now(&self) -> web_time::Instant {
        web_time::Instant::now()
    }

    fn elapsed(&self, since: &web_time::Instant) -> Duration {
        since.elapsed()
    }
}

/// Diagnostics collected from a single simplification run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimplifyDiagnostics {
    /// Radial-distance prefilter (only for [`Quality::Fast`] on input
    /// with at least 3 points).
    pub radial: Option<StageDiagnostics>,
    /// Douglas-Peucker refinement.
    pub douglas_peucker: StageDiagnostics,
    /// Total wall-clock duration of the run (seconds).
    #[serde(with = "duration_serde")]
    pub total_duration: Duration,
    /// Summary counts for the whole run.
    pub summary: SimplifySummary,
}

/// Diagnostics for a single stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageDiagnostics {
    /// Wall-clock duration of this stage (seconds).
    #[serde(with = "duration_serde")]
    pub duration: Duration,
    /// Stage-specific metrics.
    pub metrics: StageMetrics,
}

/// Stage-specific metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StageMetrics {
    /// Radial-distance prefilter metrics.
    RadialDistance {
        /// Points entering the filter.
        points_before: usize,
        /// Points surviving the filter.
        points_after: usize,
    },
    /// Douglas-Peucker refinement metrics.
    DouglasPeucker {
        /// Points entering the refiner.
        points_before: usize,
        /// Points kept by the refiner.
        points_after: usize,
        /// Index ranges scanned for a farthest point.
        ranges_visited: usize,
        /// Peak length of the work stack.
        max_stack_depth: usize,
    },
}

/// High-level summary counts for a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimplifySummary {
    /// Which pipeline ran.
    pub quality: Quality,
    /// Points in the input polyline.
    pub input_points: usize,
    /// Points in the simplified polyline.
    pub output_points: usize,
    /// Reduction ratio: `1.0 - (output / input)`, `0.0` for empty input.
    pub reduction_ratio: f64,
}

/// Simplify a polyline and collect per-stage diagnostics.
///
/// Returns the same points as
/// [`simplify_with_config`](crate::simplify_with_config).
#[must_use = "returns the simplified points and their diagnostics"]
pub fn simplify_with_diagnostics<P, C>(
    points: &[P],
    config: &SimplifyConfig<P::Scalar>,
    clock: &C,
) -> (Vec<P>, SimplifyDiagnostics)
where
    P: Vertex + Clone,
    C: Clock,
{
    let total_start = clock.now();
    let n = points.len();
    let sq_tolerance = config.sq_tolerance();

    let (survivors, radial) = if config.quality.uses_radial_prefilter() && n > 2 {
        let start = clock.now();
        let survivors = radial_distance_indices(points, sq_tolerance);
        let stage = StageDiagnostics {
            duration: clock.elapsed(&start),
            metrics: StageMetrics::RadialDistance {
                points_before: n,
                points_after: survivors.len(),
            },
        };
        (Some(survivors), Some(stage))
    } else {
        (None, None)
    };

    let start = clock.now();
    let (kept, traversal, points_before) = match survivors {
        Some(survivors) => {
            let (kept, traversal) = refine_survivors(points, &survivors, sq_tolerance);
            (kept, traversal, survivors.len())
        }
        None if n > 2 => {
            let (kept, traversal) = douglas_peucker_traced(points, sq_tolerance);
            (kept, traversal, n)
        }
        None => ((0..n).collect(), Traversal::default(), n),
    };
    let douglas_peucker = StageDiagnostics {
        duration: clock.elapsed(&start),
        metrics: StageMetrics::DouglasPeucker {
            points_before,
            points_after: kept.len(),
            ranges_visited: traversal.ranges_visited,
            max_stack_depth: traversal.max_stack_depth,
        },
    };

    let simplified = gather(points, &kept);
    let total_duration = clock.elapsed(&total_start);

    #[allow(clippy::cast_precision_loss)]
    let reduction_ratio = if n == 0 {
        0.0
    } else {
        1.0 - simplified.len() as f64 / n as f64
    };

    let diagnostics = SimplifyDiagnostics {
        radial,
        douglas_peucker,
        total_duration,
        summary: SimplifySummary {
            quality: config.quality,
            input_points: n,
            output_points: simplified.len(),
            reduction_ratio,
        },
    };

    (simplified, diagnostics)
}

impl SimplifyDiagnostics {
    /// Iterate over the stages that ran, with display names.
    pub fn stages(&self) -> impl Iterator<Item = (&'static str, &StageDiagnostics)> {
        self.radial
            .iter()
            .map(|s| ("Radial Distance", s))
            .chain(std::iter::once(("Douglas-Peucker", &self.douglas_peucker)))
    }

    /// Format diagnostics as a human-readable report.
    #[must_use]
    pub fn report(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Simplify Diagnostics Report\n{}", "=".repeat(60)));
        lines.push(format!("Quality: {:?}", self.summary.quality));
        lines.push(format!(
            "Total duration: {:.3}ms",
            duration_ms(self.total_duration),
        ));
        lines.push(String::new());

        lines.push(format!(
            "{:<24} {:>10} {:>10}  {}",
            "Stage", "Duration", "% Total", "Details"
        ));
        lines.push("-".repeat(80));

        let total_ms = duration_ms(self.total_duration);

        for (name, diag) in self.stages() {
            let ms = duration_ms(diag.duration);
            let pct = if total_ms > 0.0 {
                ms / total_ms * 100.0
            } else {
                0.0
            };
            let details = format_metrics(&diag.metrics);
            lines.push(format!("{name:<24} {ms:>8.3}ms {pct:>9.1}%  {details}"));
        }

        lines.push(String::new());
        lines.push(format!(
            "Points: {} -> {}  ({:.1}% reduction)",
            self.summary.input_points,
            self.summary.output_points,
            self.summary.reduction_ratio * 100.0,
        ));

        lines.join("\n")
    }
}

/// Convert a `Duration` to milliseconds as `f64`.
fn duration_ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

/// Format stage metrics into a compact detail string.
fn format_metrics(metrics: &StageMetrics) -> String {
    match metrics {
        StageMetrics::RadialDistance {
            points_before,
            points_after,
        } => format!("{points_before}->{points_after} pts"),
        StageMetrics::DouglasPeucker {
            points_before,
            points_after,
            ranges_visited,
            max_stack_depth,
        } => format!(
            "{points_before}->{points_after} pts, {ranges_visited} ranges, stack<={max_stack_depth}",
        ),
    }
}
