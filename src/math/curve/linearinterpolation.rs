use crate::math::curve::point2d::Point2D;
use crate::math::rangeclip::range_clip;

// ─────────────────────────────────────────────
// Segment
// ─────────────────────────────────────────────

/// Straight line between two bracketing samples, evaluated as
/// `slope * (x - lhs_x) + lhs_y`.
struct Segment {
    slope: f64,
    lhs: Point2D,
}

impl Segment {
    fn new(lhs: Point2D, rhs: Point2D) -> Segment {
        Segment { slope: Point2D::slope(&lhs, &rhs), lhs }
    }

    fn value(&self, x: f64) -> f64 {
        self.slope * (x - self.lhs.x()) + self.lhs.y()
    }
}

/// Index `i` of the segment `[xs[i], xs[i + 1])` holding `x`.
///
/// `x` must already be clipped to `[xs[0], xs[n - 1])` and `xs` must hold at
/// least two samples.
fn find_segment(xs: &[f64], x: f64) -> usize {
    xs.partition_point(|&v| v <= x)
        .saturating_sub(1)
        .min(xs.len() - 2)
}

// ─────────────────────────────────────────────
// Interpolation
// ─────────────────────────────────────────────

/// Linearly interpolates `ys` at `x` over the ascending `xs`.
///
/// `x` is clipped to `[xs[0], xs[n - 1]]` first, so the boundary ordinates
/// are returned outside the sampled range and no extrapolation happens.
/// An empty sample set or a `NaN` query yields `NaN`.
pub fn interpolate(x: f64, xs: &[f64], ys: &[f64]) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());

    let n = xs.len().min(ys.len());
    if n == 0 {
        return f64::NAN;
    }

    let x = range_clip(x, &xs[..n]);
    if x.is_nan() {
        return f64::NAN;
    }
    if x >= xs[n - 1] {
        return ys[n - 1];
    }

    let i = find_segment(&xs[..n], x);
    Segment::new(
        Point2D::new(xs[i], ys[i]),
        Point2D::new(xs[i + 1], ys[i + 1]),
    ).value(x)
}

/// Batch form of [`interpolate`].
pub fn interpolate_all(values: &[f64], xs: &[f64], ys: &[f64]) -> Vec<f64> {
    values
        .iter()
        .map(|&x| interpolate(x, xs, ys))
        .collect()
}
