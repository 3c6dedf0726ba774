use serde::{Deserialize, Serialize};

use crate::core::axis::validate_grid_intensity;
use crate::core::{AxisRange, SceneRect};
use crate::error::{ChartError, ChartResult};

use super::LegendPlacement;

pub const DEFAULT_GRID_INTENSITY: f64 = 0.3;
pub const DEFAULT_MAX_DISPATCH_DEPTH: usize = 64;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load the
/// composite plot setup as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiAxisEngineConfig {
    pub master_geometry: SceneRect,
    #[serde(default = "default_unit_range")]
    pub master_x_range: AxisRange,
    #[serde(default = "default_unit_range")]
    pub master_y_range: AxisRange,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub legend: Option<LegendPlacement>,
    /// Intensity used by [`GridOverride::Uniform`].
    #[serde(default = "default_grid_intensity")]
    pub default_grid_intensity: f64,
    /// Nesting limit for signal propagation; deeper signals are dropped.
    #[serde(default = "default_max_dispatch_depth")]
    pub max_dispatch_depth: usize,
}

impl MultiAxisEngineConfig {
    /// Creates a config with unit master ranges and default tuning.
    #[must_use]
    pub fn new(master_geometry: SceneRect) -> Self {
        Self {
            master_geometry,
            master_x_range: default_unit_range(),
            master_y_range: default_unit_range(),
            title: None,
            legend: None,
            default_grid_intensity: default_grid_intensity(),
            max_dispatch_depth: default_max_dispatch_depth(),
        }
    }

    #[must_use]
    pub fn with_master_ranges(mut self, x_range: AxisRange, y_range: AxisRange) -> Self {
        self.master_x_range = x_range;
        self.master_y_range = y_range;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: LegendPlacement) -> Self {
        self.legend = Some(legend);
        self
    }

    #[must_use]
    pub fn with_default_grid_intensity(mut self, intensity: f64) -> Self {
        self.default_grid_intensity = intensity;
        self
    }

    #[must_use]
    pub fn with_max_dispatch_depth(mut self, depth: usize) -> Self {
        self.max_dispatch_depth = depth;
        self
    }

    pub(crate) fn validate(&self) -> ChartResult<()> {
        self.master_geometry.validate()?;
        self.master_x_range.validate()?;
        self.master_y_range.validate()?;
        validate_grid_intensity(self.default_grid_intensity)?;
        if self.max_dispatch_depth == 0 {
            return Err(ChartError::InvalidData(
                "max dispatch depth must be > 0".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

/// Grid overlay requested for a chart's X/Y axes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum GridOverride {
    #[default]
    None,
    /// Both axes at the engine's default intensity.
    Uniform,
    PerDimension {
        x: Option<f64>,
        y: Option<f64>,
    },
}

impl GridOverride {
    /// Resolves `(x, y)` intensities, validating explicit values.
    pub(crate) fn resolve(self, default_intensity: f64) -> ChartResult<(Option<f64>, Option<f64>)> {
        match self {
            Self::None => Ok((None, None)),
            Self::Uniform => Ok((Some(default_intensity), Some(default_intensity))),
            Self::PerDimension { x, y } => {
                for intensity in [x, y].into_iter().flatten() {
                    validate_grid_intensity(intensity)?;
                }
                Ok((x, y))
            }
        }
    }
}

/// Per-chart registration options.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartOptions {
    #[serde(default)]
    pub grid: GridOverride,
}

impl ChartOptions {
    #[must_use]
    pub fn with_grid(mut self, grid: GridOverride) -> Self {
        self.grid = grid;
        self
    }
}

fn default_unit_range() -> AxisRange {
    AxisRange::UNIT
}

fn default_grid_intensity() -> f64 {
    DEFAULT_GRID_INTENSITY
}

fn default_max_dispatch_depth() -> usize {
    DEFAULT_MAX_DISPATCH_DEPTH
}
