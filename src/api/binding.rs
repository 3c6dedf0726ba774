use tracing::debug;

use crate::core::{RangeOrigin, ViewportId};
use crate::error::{ChartError, ChartResult};
use crate::host::SurfaceHost;

use super::MultiAxisEngine;
use super::subscriptions::{LinkAction, Signal};

impl<H: SurfaceHost> MultiAxisEngine<H> {
    /// Wires `viewport` into the notification graph of `axis_name`.
    ///
    /// - the axis refreshes its geometry whenever `viewport` changes range
    ///   along the axis dimension or is resized;
    /// - the first viewport bound becomes the axis' canonical viewport;
    /// - any other viewport receives the canonical range (now and on every
    ///   later change or resize of the canonical viewport);
    /// - manual range changes on a bound viewport switch the axis to a fixed
    ///   range.
    pub fn link_axis_to_view(&mut self, axis_name: &str, viewport: ViewportId) -> ChartResult<()> {
        if !self.viewports.contains(viewport) {
            return Err(ChartError::UnknownViewport { id: viewport });
        }
        let axis = self.registry.require_axis_mut(axis_name)?;
        let dimension = axis.dimension();
        let canonical = axis.bind_viewport(viewport);
        let pending = axis.take_pending_range();

        let refresh = LinkAction::RefreshAxis(axis_name.to_owned());
        self.subscriptions
            .subscribe(viewport, Signal::RangeChanged(dimension), refresh.clone());
        self.subscriptions
            .subscribe(viewport, Signal::Resized, refresh);
        self.subscriptions.subscribe(
            viewport,
            Signal::RangeChangedManually(dimension),
            LinkAction::DisableAutoRange(axis_name.to_owned()),
        );

        if canonical != viewport {
            // The canonical viewport already carries the manual-override hook
            // from its own binding.
            let forward = LinkAction::ForwardRange {
                target: viewport,
                dimension,
            };
            self.subscriptions
                .subscribe(canonical, Signal::RangeChanged(dimension), forward.clone());
            self.subscriptions
                .subscribe(canonical, Signal::Resized, forward);
            debug!(
                axis = axis_name,
                %canonical,
                secondary = %viewport,
                %dimension,
                "forwarding canonical view range"
            );

            let range = self.require_viewport(canonical)?.range(dimension);
            self.apply_view_range(viewport, dimension, range, RangeOrigin::Programmatic, 0)?;
        }

        if let Some(range) = pending {
            self.apply_view_range(canonical, dimension, range, RangeOrigin::Programmatic, 0)?;
        }
        self.refresh_axis_from(axis_name, canonical)
    }
}
