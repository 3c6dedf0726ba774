use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{decimal_coordinate, time_coordinate};
use crate::error::{ChartError, ChartResult};

/// One of the two plot dimensions a viewport carries a range for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    X,
    Y,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Side of the composite plot an axis is drawn on. Fixed at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisOrientation {
    Top,
    Bottom,
    Left,
    Right,
}

impl AxisOrientation {
    /// Dimension driven by an axis with this orientation.
    #[must_use]
    pub fn dimension(self) -> Dimension {
        match self {
            Self::Top | Self::Bottom => Dimension::X,
            Self::Left | Self::Right => Dimension::Y,
        }
    }

    /// Orientation used when an axis is auto-created for the given role.
    #[must_use]
    pub fn default_for(role: Dimension) -> Self {
        match role {
            Dimension::X => Self::Bottom,
            Dimension::Y => Self::Left,
        }
    }

    #[must_use]
    pub fn serves(self, role: Dimension) -> bool {
        self.dimension() == role
    }
}

impl fmt::Display for AxisOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

/// Closed numeric interval `[lo, hi]` with `lo <= hi`.
///
/// Zero-width ranges are allowed: a series holding a single distinct value
/// still produces a valid envelope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    lo: f64,
    hi: f64,
}

impl AxisRange {
    pub const UNIT: Self = Self { lo: 0.0, hi: 1.0 };

    /// Builds a range from two finite endpoints in either order.
    pub fn new(a: f64, b: f64) -> ChartResult<Self> {
        if !a.is_finite() || !b.is_finite() {
            return Err(ChartError::InvalidRange(format!(
                "range endpoints must be finite, got ({a}, {b})"
            )));
        }
        Ok(Self {
            lo: a.min(b),
            hi: a.max(b),
        })
    }

    #[must_use]
    pub fn lo(self) -> f64 {
        self.lo
    }

    #[must_use]
    pub fn hi(self) -> f64 {
        self.hi
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.hi - self.lo
    }

    #[must_use]
    pub fn as_tuple(self) -> (f64, f64) {
        (self.lo, self.hi)
    }

    /// Smallest range containing both `self` and `other`.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            lo: self.lo.min(other.lo),
            hi: self.hi.max(other.hi),
        }
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.lo && value <= self.hi
    }

    /// Re-checks a range that did not come through `new` (e.g. deserialized).
    pub(crate) fn validate(self) -> ChartResult<Self> {
        let checked = Self::new(self.lo, self.hi)?;
        if checked != self {
            return Err(ChartError::InvalidRange(format!(
                "range lower bound {} exceeds upper bound {}",
                self.lo, self.hi
            )));
        }
        Ok(self)
    }
}

/// Scene-space rectangle used for surface geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl SceneRect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Pixel extent along a dimension.
    #[must_use]
    pub fn extent(self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::X => self.width,
            Dimension::Y => self.height,
        }
    }

    pub(crate) fn validate(self) -> ChartResult<Self> {
        if !self.is_valid() {
            return Err(ChartError::InvalidGeometry {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn from_decimal_time(time: DateTime<Utc>, value: Decimal) -> ChartResult<Self> {
        Ok(Self {
            x: time_coordinate(time),
            y: decimal_coordinate(value, "sample value")?,
        })
    }

    #[must_use]
    pub fn coordinate(self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::X => self.x,
            Dimension::Y => self.y,
        }
    }
}
