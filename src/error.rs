use crate::crossing::Axis;
use nalgebra::Point2;

/// Boxed error raised by a user field callback.
pub type FieldError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Reasons why an isoline query may fail.
///
/// Every variant aborts the whole query; there is no partial-result mode.
/// An empty vertex list is a valid result and never reported here.
#[derive(Debug)]
pub enum IsolineError {
    /// Grid parameters describe fewer than two nodes along an axis.
    InvalidGrid { nx: usize, ny: usize },
    /// Both bracket endpoints carry the same value, so the final linear
    /// correction would divide by zero.
    DegenerateBracket {
        axis: Axis,
        node: (usize, usize),
        value: f64,
    },
    /// The field callback failed at `point`.
    FieldEvaluation {
        point: Point2<f64>,
        source: FieldError,
    },
}

impl IsolineError {
    pub(crate) fn field(point: Point2<f64>, source: impl Into<FieldError>) -> Self {
        IsolineError::FieldEvaluation {
            point,
            source: source.into(),
        }
    }
}

impl std::fmt::Display for IsolineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IsolineError::InvalidGrid { nx, ny } => {
                write!(f, "invalid grid ({nx}x{ny} nodes, need at least 2x2)")
            }
            IsolineError::DegenerateBracket { axis, node, value } => write!(
                f,
                "degenerate {axis} bracket at node ({}, {}): both endpoints equal {value}",
                node.0, node.1
            ),
            IsolineError::FieldEvaluation { point, source } => write!(
                f,
                "field evaluation failed at ({}, {}): {source}",
                point.x, point.y
            ),
        }
    }
}

impl std::error::Error for IsolineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IsolineError::FieldEvaluation { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
