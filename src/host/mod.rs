mod null_host;

pub use null_host::NullSurfaceHost;

use crate::core::{AxisRange, Dimension, SceneRect, ViewportId};

/// Contract implemented by the graphics toolkit embedding the engine.
///
/// The engine owns the range/geometry model of every surface; the host is
/// told about each effective change so it can mirror it into its widgets.
/// Calls arrive synchronously, in dispatch order, and only when the stored
/// value actually changed.
pub trait SurfaceHost {
    fn range_applied(&mut self, viewport: ViewportId, dimension: Dimension, range: AxisRange);

    fn geometry_applied(&mut self, viewport: ViewportId, geometry: SceneRect);
}
