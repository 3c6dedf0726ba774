use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Axis, AxisOrientation};
use crate::error::{ChartError, ChartResult};
use crate::host::SurfaceHost;

use super::MultiAxisEngine;

/// Legend offset relative to the composite root, not to any chart surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendPlacement {
    pub offset_x: f64,
    pub offset_y: f64,
}

impl LegendPlacement {
    #[must_use]
    pub fn new(offset_x: f64, offset_y: f64) -> Self {
        Self { offset_x, offset_y }
    }

    pub(crate) fn validate(self) -> ChartResult<()> {
        if !self.offset_x.is_finite() || !self.offset_y.is_finite() {
            return Err(ChartError::InvalidData(
                "legend offset must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutItem {
    Title,
    MasterSurface,
    Axis(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutCell {
    pub item: LayoutItem,
    pub row: usize,
    pub column: usize,
}

/// Grid placement produced by [`MultiAxisEngine::make_layout`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutGrid {
    pub cells: Vec<LayoutCell>,
    pub hidden_axes: Vec<String>,
    pub visible_charts: Vec<String>,
    pub hidden_charts: Vec<String>,
    /// Legend anchored on the composite root.
    pub legend: Option<LegendPlacement>,
}

impl LayoutGrid {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn cell(&self, item: &LayoutItem) -> Option<&LayoutCell> {
        self.cells.iter().find(|cell| &cell.item == item)
    }

    #[must_use]
    pub fn axis_cell(&self, axis: &str) -> Option<&LayoutCell> {
        self.cells
            .iter()
            .find(|cell| matches!(&cell.item, LayoutItem::Axis(name) if name == axis))
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.cells.iter().map(|cell| cell.row + 1).max().unwrap_or(0)
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.cells.iter().map(|cell| cell.column + 1).max().unwrap_or(0)
    }
}

impl<H: SurfaceHost> MultiAxisEngine<H> {
    /// Places the title, the master surface and the selected axes on a grid.
    ///
    /// `axes`/`charts` select what is shown (default: everything). Left and
    /// right axes become columns flanking the master surface, top and bottom
    /// axes become rows above/below it, each group in registration order.
    /// The layout is rebuilt from scratch on every call.
    pub fn make_layout(
        &mut self,
        axes: Option<&[&str]>,
        charts: Option<&[&str]>,
    ) -> ChartResult<&LayoutGrid> {
        for name in axes.unwrap_or_default() {
            self.registry.require_axis(name)?;
        }
        for name in charts.unwrap_or_default() {
            self.registry.require_chart(name)?;
        }

        let mut left = Vec::new();
        let mut right = Vec::new();
        let mut top = Vec::new();
        let mut bottom = Vec::new();
        let mut hidden_axes = Vec::new();
        for axis in self.registry.axes() {
            if !axes.is_none_or(|selected| selected.contains(&axis.name())) {
                hidden_axes.push(axis.name().to_owned());
                continue;
            }
            let column = match axis.orientation() {
                AxisOrientation::Left => &mut left,
                AxisOrientation::Right => &mut right,
                AxisOrientation::Top => &mut top,
                AxisOrientation::Bottom => &mut bottom,
            };
            column.push(axis.name().to_owned());
        }

        let plot_column = left.len();
        let plot_row = 1 + top.len();
        let mut cells = vec![
            LayoutCell {
                item: LayoutItem::Title,
                row: 0,
                column: plot_column,
            },
            LayoutCell {
                item: LayoutItem::MasterSurface,
                row: plot_row,
                column: plot_column,
            },
        ];
        let axis_cell = |name: &String, row, column| LayoutCell {
            item: LayoutItem::Axis(name.clone()),
            row,
            column,
        };
        cells.extend(
            left.iter()
                .enumerate()
                .map(|(index, name)| axis_cell(name, plot_row, index)),
        );
        cells.extend(
            right
                .iter()
                .enumerate()
                .map(|(index, name)| axis_cell(name, plot_row, plot_column + 1 + index)),
        );
        cells.extend(
            top.iter()
                .enumerate()
                .map(|(index, name)| axis_cell(name, index + 1, plot_column)),
        );
        cells.extend(
            bottom
                .iter()
                .enumerate()
                .map(|(index, name)| axis_cell(name, plot_row + 1 + index, plot_column)),
        );

        for axis in self.registry.axes_mut() {
            let visible = !hidden_axes.iter().any(|hidden| hidden == axis.name());
            axis.set_visible(visible);
        }
        let mut visible_charts = Vec::new();
        let mut hidden_charts = Vec::new();
        for chart in self.registry.charts_mut() {
            let visible = charts.is_none_or(|selected| selected.contains(&chart.name()));
            chart.set_visible(visible);
            if visible {
                visible_charts.push(chart.name().to_owned());
            } else {
                hidden_charts.push(chart.name().to_owned());
            }
        }

        debug!(
            cells = cells.len(),
            hidden_axes = hidden_axes.len(),
            hidden_charts = hidden_charts.len(),
            "layout rebuilt"
        );
        self.layout = LayoutGrid {
            cells,
            hidden_axes,
            visible_charts,
            hidden_charts,
            legend: self.legend,
        };
        Ok(&self.layout)
    }

    #[must_use]
    pub fn layout(&self) -> &LayoutGrid {
        &self.layout
    }

    /// Empties the grid. Visibility flags are left as the last layout set them.
    pub fn clear_layout(&mut self) {
        self.layout = LayoutGrid::default();
    }

    /// Axes currently shown, in registration order.
    pub fn visible_axes(&self) -> impl Iterator<Item = &Axis> {
        self.registry.axes().filter(|axis| axis.is_visible())
    }
}
