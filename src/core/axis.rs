use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::scale::LinearScale;
use crate::core::types::{AxisOrientation, AxisRange, Dimension, SceneRect};
use crate::core::viewport::ViewportId;
use crate::error::{ChartError, ChartResult};

pub(crate) const AXIS_X_TARGET_SPACING_PX: f64 = 72.0;
pub(crate) const AXIS_Y_TARGET_SPACING_PX: f64 = 26.0;
pub(crate) const AXIS_MIN_TICKS: usize = 2;
pub(crate) const AXIS_MAX_TICKS: usize = 12;

/// Per-axis registration options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisOptions {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub units: Option<String>,
    #[serde(default = "default_auto_range")]
    pub auto_range: bool,
    /// Grid line intensity in `[0, 1]`, consumed by the renderer.
    #[serde(default)]
    pub grid_intensity: Option<f64>,
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self {
            label: None,
            units: None,
            auto_range: default_auto_range(),
            grid_intensity: None,
        }
    }
}

impl AxisOptions {
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    #[must_use]
    pub fn with_auto_range(mut self, auto_range: bool) -> Self {
        self.auto_range = auto_range;
        self
    }

    #[must_use]
    pub fn with_grid_intensity(mut self, intensity: f64) -> Self {
        self.grid_intensity = Some(intensity);
        self
    }

    pub(crate) fn validate(&self) -> ChartResult<()> {
        if let Some(intensity) = self.grid_intensity {
            validate_grid_intensity(intensity)?;
        }
        Ok(())
    }
}

fn default_auto_range() -> bool {
    true
}

pub(crate) fn validate_grid_intensity(intensity: f64) -> ChartResult<()> {
    if !intensity.is_finite() || !(0.0..=1.0).contains(&intensity) {
        return Err(ChartError::InvalidData(format!(
            "grid intensity must be within [0, 1], got {intensity}"
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub pixel: f64,
}

/// Tick layout derived from the last linked-view refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisGeometry {
    pub range: AxisRange,
    pub span_px: f64,
    pub ticks: Vec<AxisTick>,
}

/// Named, oriented scale shared by every chart bound to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    name: String,
    orientation: AxisOrientation,
    linked_viewport: Option<ViewportId>,
    auto_range: bool,
    label: Option<String>,
    units: Option<String>,
    grid_intensity: Option<f64>,
    visible: bool,
    pending_range: Option<AxisRange>,
    geometry: Option<AxisGeometry>,
}

impl Axis {
    #[must_use]
    pub fn new(name: impl Into<String>, orientation: AxisOrientation, options: AxisOptions) -> Self {
        Self {
            name: name.into(),
            orientation,
            linked_viewport: None,
            auto_range: options.auto_range,
            label: options.label,
            units: options.units,
            grid_intensity: options.grid_intensity,
            visible: true,
            pending_range: None,
            geometry: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn orientation(&self) -> AxisOrientation {
        self.orientation
    }

    #[must_use]
    pub fn dimension(&self) -> Dimension {
        self.orientation.dimension()
    }

    /// Canonical viewport this axis mirrors. Set by the first binding.
    #[must_use]
    pub fn linked_viewport(&self) -> Option<ViewportId> {
        self.linked_viewport
    }

    #[must_use]
    pub fn auto_range(&self) -> bool {
        self.auto_range
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[must_use]
    pub fn units(&self) -> Option<&str> {
        self.units.as_deref()
    }

    #[must_use]
    pub fn grid_intensity(&self) -> Option<f64> {
        self.grid_intensity
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn geometry(&self) -> Option<&AxisGeometry> {
        self.geometry.as_ref()
    }

    /// Range seen by the last linked-view refresh.
    #[must_use]
    pub fn current_range(&self) -> Option<AxisRange> {
        self.geometry.as_ref().map(|geometry| geometry.range)
    }

    /// Maps a data coordinate to a pixel offset along the axis.
    pub fn value_to_pixel(&self, value: f64) -> ChartResult<f64> {
        let Some(geometry) = &self.geometry else {
            return Err(ChartError::InvalidData(format!(
                "axis `{}` is not bound to a viewport yet",
                self.name
            )));
        };
        self.scale_for(geometry.range)?
            .domain_to_pixel(value, geometry.span_px)
    }

    pub(crate) fn set_auto_range(&mut self, enabled: bool) {
        self.auto_range = enabled;
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub(crate) fn set_grid_intensity(&mut self, intensity: f64) {
        self.grid_intensity = Some(intensity);
    }

    /// First binding wins; later calls keep the canonical viewport.
    pub(crate) fn bind_viewport(&mut self, viewport: ViewportId) -> ViewportId {
        *self.linked_viewport.get_or_insert(viewport)
    }

    pub(crate) fn set_pending_range(&mut self, range: AxisRange) {
        self.pending_range = Some(range);
    }

    pub(crate) fn take_pending_range(&mut self) -> Option<AxisRange> {
        self.pending_range.take()
    }

    pub(crate) fn clear_pending_range(&mut self) {
        self.pending_range = None;
    }

    /// Recomputes tick geometry from a linked viewport's range and geometry.
    pub(crate) fn linked_view_changed(&mut self, range: AxisRange, view_geometry: SceneRect) {
        let dimension = self.dimension();
        let span_px = view_geometry.extent(dimension);
        let ticks = if range.span() > 0.0 && span_px.is_finite() && span_px > 0.0 {
            self.layout_ticks(range, span_px)
        } else {
            vec![AxisTick {
                value: range.lo(),
                pixel: 0.0,
            }]
        };
        trace!(
            axis = %self.name,
            lo = range.lo(),
            hi = range.hi(),
            span_px,
            ticks = ticks.len(),
            "axis linked view changed"
        );
        self.geometry = Some(AxisGeometry {
            range,
            span_px,
            ticks,
        });
    }

    fn layout_ticks(&self, range: AxisRange, span_px: f64) -> Vec<AxisTick> {
        let Ok(scale) = self.scale_for(range) else {
            return Vec::new();
        };
        let spacing = match self.dimension() {
            Dimension::X => AXIS_X_TARGET_SPACING_PX,
            Dimension::Y => AXIS_Y_TARGET_SPACING_PX,
        };
        let tick_count = tick_target_count(span_px, spacing);
        scale
            .ticks(tick_count)
            .into_iter()
            .filter_map(|value| {
                scale
                    .domain_to_pixel(value, span_px)
                    .ok()
                    .map(|pixel| AxisTick { value, pixel })
            })
            .collect()
    }

    fn scale_for(&self, range: AxisRange) -> ChartResult<LinearScale> {
        Ok(LinearScale::from_range(range)?.flipped(self.dimension() == Dimension::Y))
    }
}

fn tick_target_count(span_px: f64, target_spacing_px: f64) -> usize {
    let raw = (span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(AXIS_MIN_TICKS, AXIS_MAX_TICKS)
}
