use crate::core::{AxisRange, Dimension, SceneRect, ViewportId};
use crate::host::SurfaceHost;

/// Headless host used by tests and benches.
///
/// It only counts the updates it receives so callers can assert that a
/// dispatch pass reached the toolkit side.
#[derive(Debug, Default)]
pub struct NullSurfaceHost {
    pub range_updates: usize,
    pub geometry_updates: usize,
}

impl SurfaceHost for NullSurfaceHost {
    fn range_applied(&mut self, _viewport: ViewportId, _dimension: Dimension, _range: AxisRange) {
        self.range_updates += 1;
    }

    fn geometry_applied(&mut self, _viewport: ViewportId, _geometry: SceneRect) {
        self.geometry_updates += 1;
    }
}
