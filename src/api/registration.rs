use tracing::debug;

use crate::core::{AxisOptions, AxisOrientation, ChartSeries, LineSeries, ViewportId};
use crate::error::ChartResult;
use crate::host::SurfaceHost;

use super::registry::SurfaceKind;
use super::subscriptions::{LinkAction, Signal};
use super::{ChartOptions, ChartSurface, MultiAxisEngine};

impl<H: SurfaceHost> MultiAxisEngine<H> {
    /// Registers a named axis. New axes start unbound and, by default, auto-ranged.
    pub fn register_axis(
        &mut self,
        name: &str,
        orientation: AxisOrientation,
        options: AxisOptions,
    ) -> ChartResult<()> {
        self.registry.register_axis(name, orientation, options)?;
        debug!(axis = name, %orientation, "registered axis");
        Ok(())
    }

    /// Registers a chart with an empty line series.
    ///
    /// Without axis names the chart draws on the master surface through the
    /// `bottom`/`left` axes. Naming at least one axis gives the chart its own
    /// surface; the missing role falls back to the default name. Unknown axis
    /// names are created with the orientation implied by their role.
    ///
    /// Returns the surface the chart was bound to.
    pub fn register_chart(
        &mut self,
        name: &str,
        x_axis: Option<&str>,
        y_axis: Option<&str>,
        options: ChartOptions,
    ) -> ChartResult<ViewportId> {
        self.register_chart_with_series(
            name,
            x_axis,
            y_axis,
            options,
            Box::new(LineSeries::default()),
        )
    }

    pub fn register_chart_with_series(
        &mut self,
        name: &str,
        x_axis: Option<&str>,
        y_axis: Option<&str>,
        options: ChartOptions,
        series: Box<dyn ChartSeries>,
    ) -> ChartResult<ViewportId> {
        let plan = self.registry.plan_chart(name, x_axis, y_axis)?;
        let (x_grid, y_grid) = options.grid.resolve(self.config.default_grid_intensity)?;

        // Nothing below can fail on user input: all checks happened above.
        let surface = match plan.surface_kind {
            SurfaceKind::Master => ChartSurface::Master,
            SurfaceKind::Dedicated => {
                let template = *self.viewports.master();
                ChartSurface::Dedicated(self.viewports.create(template))
            }
        };
        let viewport = surface.viewport();
        let x_name = plan.x_axis.clone();
        let y_name = plan.y_axis.clone();
        self.registry.commit_chart(plan, surface, series);

        for (axis, grid) in [(&x_name, x_grid), (&y_name, y_grid)] {
            if let Some(intensity) = grid {
                self.registry.require_axis_mut(axis)?.set_grid_intensity(intensity);
            }
        }

        self.link_axis_to_view(&x_name, viewport)?;
        self.link_axis_to_view(&y_name, viewport)?;
        if surface.is_dedicated() {
            self.subscriptions.subscribe(
                ViewportId::MASTER,
                Signal::Resized,
                LinkAction::TrackGeometry(viewport),
            );
        }

        debug!(
            chart = name,
            x_axis = %x_name,
            y_axis = %y_name,
            %viewport,
            dedicated = surface.is_dedicated(),
            "registered chart"
        );
        Ok(viewport)
    }
}
