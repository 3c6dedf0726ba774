use tracing::{trace, warn};

use crate::core::{AxisRange, Dimension, RangeOrigin, SceneRect, ViewportId};
use crate::error::{ChartError, ChartResult};
use crate::host::SurfaceHost;

use super::MultiAxisEngine;
use super::subscriptions::{LinkAction, Signal};

impl<H: SurfaceHost> MultiAxisEngine<H> {
    pub fn view_range(&self, viewport: ViewportId, dimension: Dimension) -> ChartResult<AxisRange> {
        Ok(self.require_viewport(viewport)?.range(dimension))
    }

    pub fn view_geometry(&self, viewport: ViewportId) -> ChartResult<SceneRect> {
        Ok(self.require_viewport(viewport)?.geometry())
    }

    /// Writes a viewport range and delivers the resulting notifications.
    ///
    /// Hosts report user pan/zoom with [`RangeOrigin::Manual`], which also
    /// switches every axis bound to the viewport along `dimension` out of
    /// auto-range. Programmatic writes that leave the range unchanged raise
    /// nothing.
    pub fn set_view_range(
        &mut self,
        viewport: ViewportId,
        dimension: Dimension,
        range: AxisRange,
        origin: RangeOrigin,
    ) -> ChartResult<()> {
        self.apply_view_range(viewport, dimension, range, origin, 0)
    }

    /// Writes a viewport geometry and notifies resize subscribers.
    pub fn set_view_geometry(&mut self, viewport: ViewportId, geometry: SceneRect) -> ChartResult<()> {
        geometry.validate()?;
        self.apply_view_geometry(viewport, geometry, 0)
    }

    /// Resizes the master surface; dedicated surfaces follow it.
    pub fn resize_master(&mut self, geometry: SceneRect) -> ChartResult<()> {
        self.set_view_geometry(ViewportId::MASTER, geometry)
    }

    pub(super) fn apply_view_range(
        &mut self,
        viewport: ViewportId,
        dimension: Dimension,
        range: AxisRange,
        origin: RangeOrigin,
        depth: usize,
    ) -> ChartResult<()> {
        let view = self
            .viewports
            .get_mut(viewport)
            .ok_or(ChartError::UnknownViewport { id: viewport })?;
        let changed = view.set_range(dimension, range);
        if changed {
            self.host.range_applied(viewport, dimension, range);
        }

        let manual = origin == RangeOrigin::Manual;
        if changed || manual {
            self.dispatch(viewport, Signal::RangeChanged(dimension), depth)?;
        }
        if manual {
            self.dispatch(viewport, Signal::RangeChangedManually(dimension), depth)?;
        }
        Ok(())
    }

    fn apply_view_geometry(
        &mut self,
        viewport: ViewportId,
        geometry: SceneRect,
        depth: usize,
    ) -> ChartResult<()> {
        let view = self
            .viewports
            .get_mut(viewport)
            .ok_or(ChartError::UnknownViewport { id: viewport })?;
        if !view.set_geometry(geometry) {
            return Ok(());
        }
        self.host.geometry_applied(viewport, geometry);
        self.dispatch(viewport, Signal::Resized, depth)
    }

    /// Depth-first delivery: each handler, and everything it re-emits,
    /// completes before the next handler of the same signal runs.
    fn dispatch(&mut self, source: ViewportId, signal: Signal, depth: usize) -> ChartResult<()> {
        if depth >= self.config.max_dispatch_depth {
            warn!(
                viewport = %source,
                ?signal,
                depth,
                "dispatch depth limit reached; dropping signal"
            );
            return Ok(());
        }

        for action in self.subscriptions.actions(source, signal) {
            trace!(viewport = %source, ?signal, ?action, depth, "deliver signal");
            self.run_link_action(source, action, depth + 1)?;
        }
        Ok(())
    }

    fn run_link_action(
        &mut self,
        source: ViewportId,
        action: LinkAction,
        depth: usize,
    ) -> ChartResult<()> {
        match action {
            LinkAction::RefreshAxis(axis) => self.refresh_axis_from(&axis, source),
            LinkAction::ForwardRange { target, dimension } => {
                let range = self.view_range(source, dimension)?;
                self.apply_view_range(target, dimension, range, RangeOrigin::Programmatic, depth)
            }
            LinkAction::DisableAutoRange(axis) => self.disable_axis_auto_range(&axis),
            LinkAction::TrackGeometry(target) => {
                let geometry = self.view_geometry(source)?;
                self.apply_view_geometry(target, geometry, depth)
            }
        }
    }

    /// The axis' "linked view changed" handler.
    pub(super) fn refresh_axis_from(&mut self, axis: &str, source: ViewportId) -> ChartResult<()> {
        let view = self.require_viewport(source)?;
        let axis = self.registry.require_axis_mut(axis)?;
        axis.linked_view_changed(view.range(axis.dimension()), view.geometry());
        Ok(())
    }
}
