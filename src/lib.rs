//! multi-axis-rs: composition engine for plots that share named axes.
//!
//! Several independently scaled charts draw on one composite surface while a
//! pool of named axes keeps their viewports consistent: shared axes forward
//! the canonical range to every chart using them, auto-ranged axes fit the
//! envelope of all attached data, and manual pan/zoom pins an axis range.
//! Rendering and event-loop integration stay with the host toolkit, which
//! plugs in through [`host::SurfaceHost`].

pub mod api;
pub mod core;
pub mod error;
pub mod host;
pub mod telemetry;

pub use api::{MultiAxisEngine, MultiAxisEngineConfig};
pub use error::{ChartError, ChartResult};
