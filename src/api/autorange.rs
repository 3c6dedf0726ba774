use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{AxisRange, Dimension, RangeOrigin, ViewportId};
use crate::error::{ChartError, ChartResult};
use crate::host::SurfaceHost;

use super::MultiAxisEngine;

/// Envelope computed for one auto-ranged axis, applied after all are known.
struct EnvelopePlan {
    axis: String,
    dimension: Dimension,
    envelope: AxisRange,
    targets: SmallVec<[ViewportId; 4]>,
}

impl<H: SurfaceHost> MultiAxisEngine<H> {
    pub fn enable_axis_auto_range(&mut self, axis: &str) -> ChartResult<()> {
        self.set_auto_range_flag(axis, true)
    }

    pub fn disable_axis_auto_range(&mut self, axis: &str) -> ChartResult<()> {
        self.set_auto_range_flag(axis, false)
    }

    /// Sets an axis range from zero, one or two values.
    ///
    /// - `[]` switches the axis back to auto-range;
    /// - `[r]` fixes the range to `[min(0, r), max(0, r)]`;
    /// - `[a, b]` fixes the range to `[min(a, b), max(a, b)]`.
    ///
    /// A fixed range is written to the axis' canonical viewport and reaches
    /// the other viewports sharing the axis through forwarding. An axis with
    /// no viewport yet keeps the range until its first binding.
    pub fn set_axis_range(&mut self, axis: &str, values: &[f64]) -> ChartResult<()> {
        let request = resolve_range_request(values)?;
        let (dimension, linked) = {
            let axis = self.registry.require_axis(axis)?;
            (axis.dimension(), axis.linked_viewport())
        };

        let Some(range) = request else {
            // A range waiting for the first binding is cancelled too.
            self.registry.require_axis_mut(axis)?.clear_pending_range();
            return self.enable_axis_auto_range(axis);
        };
        self.disable_axis_auto_range(axis)?;
        match linked {
            Some(viewport) => {
                self.apply_view_range(viewport, dimension, range, RangeOrigin::Programmatic, 0)
            }
            None => {
                self.registry.require_axis_mut(axis)?.set_pending_range(range);
                Ok(())
            }
        }
    }

    /// Fits every auto-ranged axis to the envelope of its charts' data.
    ///
    /// The envelope is written to the surface of every chart attached to the
    /// axis. Charts without data are skipped; an axis whose charts have no data
    /// at all keeps its current range.
    pub fn recompute_auto_ranges(&mut self) -> ChartResult<()> {
        let mut plans = Vec::new();
        for axis in self.registry.axes().filter(|axis| axis.auto_range()) {
            let dimension = axis.dimension();
            let members = self.registry.members_of(axis.name());
            let charts = members
                .iter()
                .filter_map(|member| self.registry.chart(member));

            let mut envelope: Option<AxisRange> = None;
            let mut targets = SmallVec::<[ViewportId; 4]>::new();
            for chart in charts {
                if let Some(bounds) = chart.series().data_bounds(dimension) {
                    envelope = Some(envelope.map_or(bounds, |acc| acc.union(bounds)));
                }
                let viewport = chart.surface().viewport();
                if !targets.contains(&viewport) {
                    targets.push(viewport);
                }
            }

            match envelope {
                Some(envelope) => plans.push(EnvelopePlan {
                    axis: axis.name().to_owned(),
                    dimension,
                    envelope,
                    targets,
                }),
                None => trace!(axis = axis.name(), "no data bounds; range left untouched"),
            }
        }

        for plan in plans {
            debug!(
                axis = %plan.axis,
                lo = plan.envelope.lo(),
                hi = plan.envelope.hi(),
                surfaces = plan.targets.len(),
                "apply auto-range envelope"
            );
            for viewport in plan.targets {
                self.apply_view_range(
                    viewport,
                    plan.dimension,
                    plan.envelope,
                    RangeOrigin::Programmatic,
                    0,
                )?;
            }
        }
        Ok(())
    }

    fn set_auto_range_flag(&mut self, axis: &str, enabled: bool) -> ChartResult<()> {
        let axis = self.registry.require_axis_mut(axis)?;
        if axis.auto_range() != enabled {
            debug!(axis = axis.name(), enabled, "axis auto-range changed");
            axis.set_auto_range(enabled);
        }
        Ok(())
    }
}

/// Interprets the values passed to `set_axis_range`; `None` means auto-range.
pub fn resolve_range_request(values: &[f64]) -> ChartResult<Option<AxisRange>> {
    match values {
        [] => Ok(None),
        [extent] => AxisRange::new(0.0, *extent).map(Some),
        [a, b] => AxisRange::new(*a, *b).map(Some),
        _ => Err(ChartError::InvalidRange(format!(
            "expected zero, one or two values, got {}",
            values.len()
        ))),
    }
}
