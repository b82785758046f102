use std::fmt;

use thiserror::Error;

/// The sequence a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Abscissae,
    Ordinates,
    Imls,
    LossRatios,
    Covs,
    Vertices,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Abscissae  => "abscissae",
            Field::Ordinates  => "ordinates",
            Field::Imls       => "IMLs",
            Field::LossRatios => "loss ratios",
            Field::Covs       => "CoVs",
            Field::Vertices   => "vertices",
        };
        write!(f, "{}", name)
    }
}

/// Validation failures raised while building or querying shapes.
///
/// Every variant names the offending [`Field`] so callers can branch on
/// which sequence broke which rule.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("{field} must be in ascending order: {previous} is followed by {value} at index {index}")]
    NotAscending {
        field: Field,
        index: usize,
        previous: f64,
        value: f64,
    },

    #[error("{field} must not contain duplicates: {value} repeats at index {index}")]
    Duplicate {
        field: Field,
        index: usize,
        value: f64,
    },

    #[error("{field} must be monotonic")]
    NotMonotonic { field: Field },

    #[error("{field} value {value} at index {index} is outside {domain}")]
    OutOfDomain {
        field: Field,
        index: usize,
        value: f64,
        domain: &'static str,
    },

    #[error("{field} has {actual} values, expected {expected}")]
    LengthMismatch {
        field: Field,
        expected: usize,
        actual: usize,
    },

    #[error("malformed IML '{0}'")]
    MalformedIml(String),

    #[error("a polygon ring needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("curve has no samples")]
    EmptyCurve,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ShapeError {
    pub fn field(&self) -> Option<Field> {
        match self {
            ShapeError::NotAscending { field, .. }
            | ShapeError::Duplicate { field, .. }
            | ShapeError::NotMonotonic { field }
            | ShapeError::OutOfDomain { field, .. }
            | ShapeError::LengthMismatch { field, .. } => Some(*field),
            ShapeError::MalformedIml(_) => Some(Field::Imls),
            ShapeError::TooFewVertices(_) => Some(Field::Vertices),
            ShapeError::EmptyCurve | ShapeError::Json(_) => None,
        }
    }
}

/// Checks that `values` are strictly ascending, reporting equal neighbours
/// as duplicates and decreasing neighbours as ordering violations.
pub fn check_strictly_ascending(values: &[f64], field: Field) -> Result<(), ShapeError> {
    for (i, pair) in values.windows(2).enumerate() {
        let (previous, value) = (pair[0], pair[1]);
        if previous == value {
            return Err(ShapeError::Duplicate { field, index: i + 1, value });
        }
        if !(previous < value) {
            return Err(ShapeError::NotAscending { field, index: i + 1, previous, value });
        }
    }
    Ok(())
}

/// Checks that `values` and a reference sequence share the same length.
pub fn check_length(values: &[f64], expected: usize, field: Field) -> Result<(), ShapeError> {
    if values.len() != expected {
        return Err(ShapeError::LengthMismatch { field, expected, actual: values.len() });
    }
    Ok(())
}

/// Checks every value against `accept`; `domain` describes the accepted range
/// in the error message.
pub fn check_domain(
    values: &[f64],
    field: Field,
    domain: &'static str,
    accept: impl Fn(f64) -> bool,
) -> Result<(), ShapeError> {
    match values.iter().position(|&v| !accept(v)) {
        Some(index) => Err(ShapeError::OutOfDomain { field, index, value: values[index], domain }),
        None => Ok(()),
    }
}
