use std::fmt;

use crate::core::types::{AxisRange, DataPoint, Dimension};

/// Data capability the engine needs from a chart.
///
/// `data_bounds` returns `None` for a series without usable samples; an empty
/// series contributes nothing to an axis envelope.
pub trait ChartSeries: fmt::Debug {
    fn data_bounds(&self, dimension: Dimension) -> Option<AxisRange>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);
}

/// Plain XY sample series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineSeries {
    points: Vec<DataPoint>,
}

impl LineSeries {
    #[must_use]
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self { points }
    }

    /// Series with `x = index` for every sample, like a bare `setData(y)` call.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Self {
        let points = values
            .iter()
            .enumerate()
            .map(|(index, value)| DataPoint::new(index as f64, *value))
            .collect();
        Self { points }
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn set_points(&mut self, points: Vec<DataPoint>) {
        self.points = points;
    }

    pub fn push(&mut self, point: DataPoint) {
        self.points.push(point);
    }
}

impl ChartSeries for LineSeries {
    fn data_bounds(&self, dimension: Dimension) -> Option<AxisRange> {
        let (lo, hi) = self
            .points
            .iter()
            .map(|point| point.coordinate(dimension))
            .filter(|value| value.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, value| match acc {
                None => Some((value, value)),
                Some((lo, hi)) => Some((lo.min(value), hi.max(value))),
            })?;
        AxisRange::new(lo, hi).ok()
    }

    fn len(&self) -> usize {
        self.points.len()
    }

    fn clear(&mut self) {
        self.points.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartSeries, LineSeries};
    use crate::core::{DataPoint, Dimension};

    #[test]
    fn empty_series_has_no_bounds() {
        let series = LineSeries::default();
        assert_eq!(series.data_bounds(Dimension::X), None);
        assert_eq!(series.data_bounds(Dimension::Y), None);
    }

    #[test]
    fn bounds_skip_non_finite_samples() {
        let series = LineSeries::new(vec![
            DataPoint::new(0.0, 3.0),
            DataPoint::new(1.0, f64::NAN),
            DataPoint::new(2.0, -1.0),
            DataPoint::new(f64::INFINITY, 8.0),
        ]);
        let y = series.data_bounds(Dimension::Y).expect("y bounds");
        assert_eq!(y.as_tuple(), (-1.0, 8.0));
        let x = series.data_bounds(Dimension::X).expect("x bounds");
        assert_eq!(x.as_tuple(), (0.0, 2.0));
    }

    #[test]
    fn from_values_uses_sample_index_as_x() {
        let series = LineSeries::from_values(&[4.0, 5.0, 6.0]);
        assert_eq!(series.len(), 3);
        let x = series.data_bounds(Dimension::X).expect("x bounds");
        assert_eq!(x.as_tuple(), (0.0, 2.0));
    }
}
