pub mod axis;
pub mod primitives;
pub mod scale;
pub mod series;
pub mod types;
pub mod viewport;

pub use axis::{Axis, AxisGeometry, AxisOptions, AxisTick};
pub use scale::LinearScale;
pub use series::{ChartSeries, LineSeries};
pub use types::{AxisOrientation, AxisRange, DataPoint, Dimension, SceneRect};
pub use viewport::{RangeOrigin, ViewBox, ViewportId, ViewportTable};
