use thiserror::Error;

use crate::core::{AxisOrientation, Dimension, ViewportId};

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("axis `{name}` is already registered")]
    DuplicateAxis { name: String },

    #[error("chart `{name}` is already registered")]
    DuplicateChart { name: String },

    #[error("axis `{name}` is oriented {orientation} and cannot serve as the {role} axis")]
    AxisOrientationMismatch {
        name: String,
        role: Dimension,
        orientation: AxisOrientation,
    },

    #[error("unknown axis `{name}`")]
    UnknownAxis { name: String },

    #[error("unknown chart `{name}`")]
    UnknownChart { name: String },

    #[error("unknown viewport {id}")]
    UnknownViewport { id: ViewportId },

    #[error("invalid range: {0}")]
    InvalidRange(String),

    #[error("invalid scene geometry: width={width}, height={height}")]
    InvalidGeometry { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
