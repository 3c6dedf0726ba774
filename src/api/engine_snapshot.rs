use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{AxisOrientation, AxisRange, Dimension, ViewBox, ViewportId};
use crate::error::{ChartError, ChartResult};
use crate::host::SurfaceHost;

use super::MultiAxisEngine;

pub const ENGINE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSnapshot {
    pub orientation: AxisOrientation,
    pub auto_range: bool,
    pub linked_viewport: Option<ViewportId>,
    pub label: Option<String>,
    pub units: Option<String>,
    pub grid_intensity: Option<f64>,
    pub visible: bool,
    pub range: Option<AxisRange>,
    pub members: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub x_axis: String,
    pub y_axis: String,
    pub viewport: ViewportId,
    pub dedicated: bool,
    pub visible: bool,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    pub point_count: usize,
}

/// Serializable state used by regression tests and debugging tooling.
///
/// Maps keep registration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub master: ViewBox,
    pub title: Option<String>,
    pub axes: IndexMap<String, AxisSnapshot>,
    pub charts: IndexMap<String, ChartSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: EngineSnapshot,
}

impl EngineSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = EngineSnapshotJsonContractV1 {
            schema_version: ENGINE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    ///
    /// Ranges and the master geometry are re-checked after parsing.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<EngineSnapshot>(input) {
            snapshot.validate()?;
            return Ok(snapshot);
        }
        let payload: EngineSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != ENGINE_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        payload.snapshot.validate()?;
        Ok(payload.snapshot)
    }

    fn validate(&self) -> ChartResult<()> {
        self.master.geometry().validate()?;
        self.master.range(Dimension::X).validate()?;
        self.master.range(Dimension::Y).validate()?;
        for axis in self.axes.values() {
            if let Some(range) = axis.range {
                range.validate()?;
            }
        }
        for chart in self.charts.values() {
            chart.x_range.validate()?;
            chart.y_range.validate()?;
        }
        Ok(())
    }
}

impl<H: SurfaceHost> MultiAxisEngine<H> {
    pub fn snapshot(&self) -> ChartResult<EngineSnapshot> {
        let axes = self
            .registry
            .axes()
            .map(|axis| {
                let snapshot = AxisSnapshot {
                    orientation: axis.orientation(),
                    auto_range: axis.auto_range(),
                    linked_viewport: axis.linked_viewport(),
                    label: axis.label().map(str::to_owned),
                    units: axis.units().map(str::to_owned),
                    grid_intensity: axis.grid_intensity(),
                    visible: axis.is_visible(),
                    range: axis.current_range(),
                    members: self.registry.members_of(axis.name()).to_vec(),
                };
                (axis.name().to_owned(), snapshot)
            })
            .collect();

        let mut charts = IndexMap::new();
        for chart in self.registry.charts() {
            let surface = chart.surface();
            let view = self.require_viewport(surface.viewport())?;
            charts.insert(
                chart.name().to_owned(),
                ChartSnapshot {
                    x_axis: chart.x_axis().to_owned(),
                    y_axis: chart.y_axis().to_owned(),
                    viewport: surface.viewport(),
                    dedicated: surface.is_dedicated(),
                    visible: chart.is_visible(),
                    x_range: view.range(Dimension::X),
                    y_range: view.range(Dimension::Y),
                    point_count: chart.series().len(),
                },
            );
        }

        Ok(EngineSnapshot {
            master: *self.viewports.master(),
            title: self.title.clone(),
            axes,
            charts,
        })
    }
}
