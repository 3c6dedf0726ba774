mod autorange;
mod binding;
mod chart;
mod dispatch;
mod engine;
mod engine_config;
mod engine_snapshot;
mod layout;
mod registration;
mod registry;
mod subscriptions;

pub use autorange::resolve_range_request;
pub use chart::{Chart, ChartSurface};
pub use engine::MultiAxisEngine;
pub use engine_config::{
    ChartOptions, DEFAULT_GRID_INTENSITY, DEFAULT_MAX_DISPATCH_DEPTH, GridOverride,
    MultiAxisEngineConfig,
};
pub use engine_snapshot::{
    AxisSnapshot, ChartSnapshot, ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshot,
    EngineSnapshotJsonContractV1,
};
pub use layout::{LayoutCell, LayoutGrid, LayoutItem, LegendPlacement};
pub use registry::{AxisBindingRegistry, DEFAULT_X_AXIS, DEFAULT_Y_AXIS};
