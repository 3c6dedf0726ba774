use tracing::debug;

use crate::core::{Axis, ChartSeries, DataPoint, LineSeries, ViewBox, ViewportId, ViewportTable};
use crate::error::{ChartError, ChartResult};
use crate::host::SurfaceHost;

use super::subscriptions::SubscriptionTable;
use super::{AxisBindingRegistry, Chart, LayoutGrid, LegendPlacement, MultiAxisEngineConfig};

/// Main orchestration facade consumed by host applications.
///
/// `MultiAxisEngine` owns the axis/chart registry, the viewport models of the
/// master and dedicated surfaces, and the subscription graph that keeps them
/// consistent. Every operation runs to completion synchronously.
pub struct MultiAxisEngine<H: SurfaceHost> {
    pub(super) host: H,
    pub(super) config: MultiAxisEngineConfig,
    pub(super) registry: AxisBindingRegistry,
    pub(super) viewports: ViewportTable,
    pub(super) subscriptions: SubscriptionTable,
    pub(super) layout: LayoutGrid,
    pub(super) title: Option<String>,
    pub(super) legend: Option<LegendPlacement>,
}

impl<H: SurfaceHost> MultiAxisEngine<H> {
    pub fn new(host: H, config: MultiAxisEngineConfig) -> ChartResult<Self> {
        config.validate()?;
        let master = ViewBox::new(
            config.master_x_range,
            config.master_y_range,
            config.master_geometry,
        );
        debug!(
            width = config.master_geometry.width,
            height = config.master_geometry.height,
            "multi-axis engine created"
        );

        Ok(Self {
            host,
            title: config.title.clone(),
            legend: config.legend,
            config,
            registry: AxisBindingRegistry::new(),
            viewports: ViewportTable::new(master),
            subscriptions: SubscriptionTable::default(),
            layout: LayoutGrid::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &MultiAxisEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &AxisBindingRegistry {
        &self.registry
    }

    /// Charts attached to `axis`; empty for unknown axes.
    #[must_use]
    pub fn members_of(&self, axis: &str) -> &[String] {
        self.registry.members_of(axis)
    }

    #[must_use]
    pub fn axis(&self, name: &str) -> Option<&Axis> {
        self.registry.axis(name)
    }

    #[must_use]
    pub fn chart(&self, name: &str) -> Option<&Chart> {
        self.registry.chart(name)
    }

    #[must_use]
    pub fn viewport(&self, id: ViewportId) -> Option<&ViewBox> {
        self.viewports.get(id)
    }

    #[must_use]
    pub fn viewport_count(&self) -> usize {
        self.viewports.len()
    }

    /// Number of live `(viewport, signal) -> handler` links.
    #[must_use]
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Surface backing `chart`, or the master surface when `chart` is `None`.
    pub fn chart_surface(&self, chart: Option<&str>) -> ChartResult<ViewportId> {
        match chart {
            None => Ok(ViewportId::MASTER),
            Some(name) => Ok(self.registry.require_chart(name)?.surface().viewport()),
        }
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    #[must_use]
    pub fn legend(&self) -> Option<LegendPlacement> {
        self.legend
    }

    pub fn set_legend(&mut self, legend: Option<LegendPlacement>) -> ChartResult<()> {
        if let Some(placement) = legend {
            placement.validate()?;
        }
        self.legend = legend;
        Ok(())
    }

    /// Replaces a chart's samples with a plain line series.
    pub fn set_chart_data(&mut self, chart: &str, points: Vec<DataPoint>) -> ChartResult<()> {
        self.replace_series(chart, Box::new(LineSeries::new(points)))
    }

    pub fn replace_series(&mut self, chart: &str, series: Box<dyn ChartSeries>) -> ChartResult<()> {
        let chart = self.registry.require_chart_mut(chart)?;
        debug!(chart = chart.name(), samples = series.len(), "replace chart series");
        chart.replace_series(series);
        Ok(())
    }

    pub fn series(&self, chart: &str) -> ChartResult<&dyn ChartSeries> {
        Ok(self.registry.require_chart(chart)?.series())
    }

    pub fn series_mut(&mut self, chart: &str) -> ChartResult<&mut dyn ChartSeries> {
        Ok(self.registry.require_chart_mut(chart)?.series_mut())
    }

    /// Clears the data of every chart; bindings and ranges are kept.
    pub fn clean(&mut self) {
        for chart in self.registry.charts_mut() {
            chart.series_mut().clear();
        }
    }

    /// Drops every axis, chart, dedicated surface and subscription.
    ///
    /// The master surface keeps its current range and geometry.
    pub fn reset(&mut self) {
        debug!(
            axes = self.registry.axis_count(),
            charts = self.registry.chart_count(),
            subscriptions = self.subscriptions.len(),
            "reset multi-axis engine"
        );
        self.registry.clear();
        self.subscriptions.clear();
        self.viewports.retain_master();
        self.layout = LayoutGrid::default();
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }

    pub(super) fn require_viewport(&self, id: ViewportId) -> ChartResult<ViewBox> {
        self.viewports
            .get(id)
            .copied()
            .ok_or(ChartError::UnknownViewport { id })
    }
}
