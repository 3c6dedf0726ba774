use indexmap::IndexMap;

use crate::core::{Axis, AxisOptions, AxisOrientation, ChartSeries, Dimension};
use crate::error::{ChartError, ChartResult};

use super::{Chart, ChartSurface};

/// Axis name used for the X role when a chart does not name one.
pub const DEFAULT_X_AXIS: &str = "bottom";
/// Axis name used for the Y role when a chart does not name one.
pub const DEFAULT_Y_AXIS: &str = "left";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SurfaceKind {
    Master,
    Dedicated,
}

/// Fully validated chart registration, ready to be committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ChartBindingPlan {
    pub(crate) name: String,
    pub(crate) x_axis: String,
    pub(crate) y_axis: String,
    pub(crate) create_x: bool,
    pub(crate) create_y: bool,
    pub(crate) surface_kind: SurfaceKind,
}

/// Relational backbone: axes, charts, and which charts hang off each axis.
///
/// Invariant: a chart bound to axes `x`/`y` appears in the member lists of
/// exactly those two axes. Every mutation validates before it writes, so a
/// failed call leaves the registry untouched.
#[derive(Debug, Default)]
pub struct AxisBindingRegistry {
    axes: IndexMap<String, Axis>,
    charts: IndexMap<String, Chart>,
    axis_members: IndexMap<String, Vec<String>>,
}

impl AxisBindingRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_axis(
        &mut self,
        name: &str,
        orientation: AxisOrientation,
        options: AxisOptions,
    ) -> ChartResult<()> {
        if self.axes.contains_key(name) {
            return Err(ChartError::DuplicateAxis {
                name: name.to_owned(),
            });
        }
        options.validate()?;
        self.insert_axis(Axis::new(name, orientation, options));
        Ok(())
    }

    /// Charts attached to `axis`, in registration order.
    #[must_use]
    pub fn members_of(&self, axis: &str) -> &[String] {
        self.axis_members
            .get(axis)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn axis(&self, name: &str) -> Option<&Axis> {
        self.axes.get(name)
    }

    #[must_use]
    pub fn chart(&self, name: &str) -> Option<&Chart> {
        self.charts.get(name)
    }

    /// Axes in registration order.
    pub fn axes(&self) -> impl Iterator<Item = &Axis> {
        self.axes.values()
    }

    /// Charts in registration order.
    pub fn charts(&self) -> impl Iterator<Item = &Chart> {
        self.charts.values()
    }

    #[must_use]
    pub fn contains_axis(&self, name: &str) -> bool {
        self.axes.contains_key(name)
    }

    #[must_use]
    pub fn contains_chart(&self, name: &str) -> bool {
        self.charts.contains_key(name)
    }

    #[must_use]
    pub fn axis_count(&self) -> usize {
        self.axes.len()
    }

    #[must_use]
    pub fn chart_count(&self) -> usize {
        self.charts.len()
    }

    pub fn clear(&mut self) {
        self.axes.clear();
        self.charts.clear();
        self.axis_members.clear();
    }

    pub(crate) fn require_axis(&self, name: &str) -> ChartResult<&Axis> {
        self.axes.get(name).ok_or_else(|| ChartError::UnknownAxis {
            name: name.to_owned(),
        })
    }

    pub(crate) fn require_axis_mut(&mut self, name: &str) -> ChartResult<&mut Axis> {
        self.axes.get_mut(name).ok_or_else(|| ChartError::UnknownAxis {
            name: name.to_owned(),
        })
    }

    pub(crate) fn require_chart(&self, name: &str) -> ChartResult<&Chart> {
        self.charts.get(name).ok_or_else(|| ChartError::UnknownChart {
            name: name.to_owned(),
        })
    }

    pub(crate) fn require_chart_mut(&mut self, name: &str) -> ChartResult<&mut Chart> {
        self.charts
            .get_mut(name)
            .ok_or_else(|| ChartError::UnknownChart {
                name: name.to_owned(),
            })
    }

    pub(crate) fn axes_mut(&mut self) -> impl Iterator<Item = &mut Axis> {
        self.axes.values_mut()
    }

    pub(crate) fn charts_mut(&mut self) -> impl Iterator<Item = &mut Chart> {
        self.charts.values_mut()
    }

    /// Resolves axis names and checks every constraint without writing.
    pub(crate) fn plan_chart(
        &self,
        name: &str,
        x_axis: Option<&str>,
        y_axis: Option<&str>,
    ) -> ChartResult<ChartBindingPlan> {
        if self.charts.contains_key(name) {
            return Err(ChartError::DuplicateChart {
                name: name.to_owned(),
            });
        }

        let surface_kind = if x_axis.is_none() && y_axis.is_none() {
            SurfaceKind::Master
        } else {
            SurfaceKind::Dedicated
        };
        let x_axis = x_axis.unwrap_or(DEFAULT_X_AXIS);
        let y_axis = y_axis.unwrap_or(DEFAULT_Y_AXIS);

        let create_x = self.check_role(x_axis, Dimension::X)?;
        if x_axis == y_axis {
            // The X role claims (or would create) this axis first.
            let orientation = self
                .axes
                .get(x_axis)
                .map(Axis::orientation)
                .unwrap_or(AxisOrientation::default_for(Dimension::X));
            return Err(ChartError::AxisOrientationMismatch {
                name: y_axis.to_owned(),
                role: Dimension::Y,
                orientation,
            });
        }
        let create_y = self.check_role(y_axis, Dimension::Y)?;

        Ok(ChartBindingPlan {
            name: name.to_owned(),
            x_axis: x_axis.to_owned(),
            y_axis: y_axis.to_owned(),
            create_x,
            create_y,
            surface_kind,
        })
    }

    /// Applies a plan produced by [`Self::plan_chart`].
    pub(crate) fn commit_chart(
        &mut self,
        plan: ChartBindingPlan,
        surface: ChartSurface,
        series: Box<dyn ChartSeries>,
    ) {
        if plan.create_x {
            self.insert_axis(Axis::new(
                plan.x_axis.as_str(),
                AxisOrientation::default_for(Dimension::X),
                AxisOptions::default(),
            ));
        }
        if plan.create_y {
            self.insert_axis(Axis::new(
                plan.y_axis.as_str(),
                AxisOrientation::default_for(Dimension::Y),
                AxisOptions::default(),
            ));
        }

        for axis in [&plan.x_axis, &plan.y_axis] {
            self.axis_members
                .entry(axis.clone())
                .or_default()
                .push(plan.name.clone());
        }
        self.charts.insert(
            plan.name.clone(),
            Chart::new(plan.name, plan.x_axis, plan.y_axis, surface, series),
        );
    }

    /// `Ok(true)` when the axis is missing and must be auto-created.
    fn check_role(&self, axis: &str, role: Dimension) -> ChartResult<bool> {
        match self.axes.get(axis) {
            None => Ok(true),
            Some(existing) if existing.orientation().serves(role) => Ok(false),
            Some(existing) => Err(ChartError::AxisOrientationMismatch {
                name: axis.to_owned(),
                role,
                orientation: existing.orientation(),
            }),
        }
    }

    fn insert_axis(&mut self, axis: Axis) {
        self.axis_members
            .entry(axis.name().to_owned())
            .or_default();
        self.axes.insert(axis.name().to_owned(), axis);
    }
}
