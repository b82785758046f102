use serde::{
    Deserialize,
    Serialize
};

use crate::math::curve::linearinterpolation::{
    interpolate,
    interpolate_all
};
use crate::math::curve::point2d::Point2D;
use crate::shapeerror::{
    check_strictly_ascending,
    Field,
    ShapeError
};

/// Piecewise-linear curve over a set of `(x, y)` samples.
///
/// The samples are kept in the order they were given. Callers are expected
/// to supply ascending, duplicate-free abscissae; this is only verified by
/// [`Curve::abscissa_for`], where a wrong answer would otherwise be silent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<(f64, f64)>", into = "Vec<(f64, f64)>")]
pub struct Curve {
    x_values: Vec<f64>,
    y_values: Vec<f64>,
}

impl Curve {
    pub fn new<I>(values: I) -> Curve
    where
        I: IntoIterator,
        I::Item: Into<Point2D>,
    {
        let (x_values, y_values): (Vec<f64>, Vec<f64>) = values
            .into_iter()
            .map(|pt| {
                let pt: Point2D = pt.into();
                (pt.x(), pt.y())
            })
            .unzip();
        Curve { x_values, y_values }
    }

    pub fn x_values(&self) -> &[f64] {
        &self.x_values
    }

    pub fn y_values(&self) -> &[f64] {
        &self.y_values
    }

    pub fn len(&self) -> usize {
        self.x_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x_values.is_empty()
    }

    pub fn min_x(&self) -> Option<f64> {
        self.x_values.first().copied()
    }

    pub fn max_x(&self) -> Option<f64> {
        self.x_values.last().copied()
    }

    pub fn points(&self) -> impl Iterator<Item = Point2D> + '_ {
        self.iter().map(Point2D::from)
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x_values
            .iter()
            .copied()
            .zip(self.y_values.iter().copied())
    }

    /// y at `x`, with `x` clipped to the sampled range. `NaN` for an empty
    /// curve.
    pub fn ordinate_for(&self, x: f64) -> f64 {
        interpolate(x, &self.x_values, &self.y_values)
    }

    pub fn ordinates_for(&self, xs: &[f64]) -> Vec<f64> {
        interpolate_all(xs, &self.x_values, &self.y_values)
    }

    /// Inverse lookup: the x whose interpolated y equals `y`.
    ///
    /// The abscissae must be strictly ascending and the ordinates monotonic
    /// (either direction); `y` is clipped to the ordinate range.
    pub fn abscissa_for(&self, y: f64) -> Result<f64, ShapeError> {
        let (ys, xs) = self.inverse_samples()?;
        Ok(interpolate(y, &ys, &xs))
    }

    pub fn abscissae_for(&self, ys: &[f64]) -> Result<Vec<f64>, ShapeError> {
        let (inv_xs, inv_ys) = self.inverse_samples()?;
        Ok(interpolate_all(ys, &inv_xs, &inv_ys))
    }

    /// Samples with the axes swapped, sorted by ascending y.
    fn inverse_samples(&self) -> Result<(Vec<f64>, Vec<f64>), ShapeError> {
        check_strictly_ascending(&self.x_values, Field::Abscissae).inspect_err(|err| {
            tracing::debug!(error = %err, "rejecting inverse lookup");
        })?;
        if self.is_empty() {
            return Err(ShapeError::EmptyCurve);
        }

        let ys = &self.y_values;
        if ys.windows(2).all(|w| w[0] <= w[1]) {
            Ok((ys.clone(), self.x_values.clone()))
        } else if ys.windows(2).all(|w| w[0] >= w[1]) {
            Ok((
                ys.iter().rev().copied().collect(),
                self.x_values.iter().rev().copied().collect(),
            ))
        } else {
            Err(ShapeError::NotMonotonic { field: Field::Ordinates })
        }
    }

    pub fn to_json(&self) -> Result<String, ShapeError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Curve, ShapeError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<Vec<(f64, f64)>> for Curve {
    fn from(values: Vec<(f64, f64)>) -> Curve {
        Curve::new(values)
    }
}

impl From<Curve> for Vec<(f64, f64)> {
    fn from(curve: Curve) -> Vec<(f64, f64)> {
        curve.x_values
            .into_iter()
            .zip(curve.y_values)
            .collect()
    }
}
