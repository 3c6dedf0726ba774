use serde::{Deserialize, Serialize};

use crate::core::{ChartSeries, ViewportId};

/// Drawing surface a chart is rendered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartSurface {
    /// The shared master surface, used by charts registered without axis names.
    Master,
    /// A surface owned by the chart; it tracks the master geometry.
    Dedicated(ViewportId),
}

impl ChartSurface {
    #[must_use]
    pub fn viewport(self) -> ViewportId {
        match self {
            Self::Master => ViewportId::MASTER,
            Self::Dedicated(id) => id,
        }
    }

    #[must_use]
    pub fn is_dedicated(self) -> bool {
        matches!(self, Self::Dedicated(_))
    }
}

/// One data series bound to an X axis, a Y axis and a surface.
#[derive(Debug)]
pub struct Chart {
    name: String,
    x_axis: String,
    y_axis: String,
    surface: ChartSurface,
    series: Box<dyn ChartSeries>,
    visible: bool,
}

impl Chart {
    pub(crate) fn new(
        name: String,
        x_axis: String,
        y_axis: String,
        surface: ChartSurface,
        series: Box<dyn ChartSeries>,
    ) -> Self {
        Self {
            name,
            x_axis,
            y_axis,
            surface,
            series,
            visible: true,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn x_axis(&self) -> &str {
        &self.x_axis
    }

    #[must_use]
    pub fn y_axis(&self) -> &str {
        &self.y_axis
    }

    #[must_use]
    pub fn surface(&self) -> ChartSurface {
        self.surface
    }

    #[must_use]
    pub fn series(&self) -> &dyn ChartSeries {
        self.series.as_ref()
    }

    pub fn series_mut(&mut self) -> &mut dyn ChartSeries {
        self.series.as_mut()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn replace_series(&mut self, series: Box<dyn ChartSeries>) {
        self.series = series;
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
