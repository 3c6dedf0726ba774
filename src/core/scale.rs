use crate::core::types::AxisRange;
use crate::error::{ChartError, ChartResult};

/// Linear mapping between an axis range and a pixel extent.
///
/// Pixel `0` maps to `domain_start` unless the scale is flipped, in which case
/// it maps to `domain_end` (screen Y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    flipped: bool,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            flipped: false,
        })
    }

    pub fn from_range(range: AxisRange) -> ChartResult<Self> {
        Self::new(range.lo(), range.hi())
    }

    #[must_use]
    pub fn flipped(mut self, flipped: bool) -> Self {
        self.flipped = flipped;
        self
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn domain_to_pixel(self, value: f64, extent_px: f64) -> ChartResult<f64> {
        validate_extent(extent_px)?;
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        let normalized = if self.flipped {
            1.0 - normalized
        } else {
            normalized
        };
        Ok(normalized * extent_px)
    }

    pub fn pixel_to_domain(self, pixel: f64, extent_px: f64) -> ChartResult<f64> {
        validate_extent(extent_px)?;
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let normalized = pixel / extent_px;
        let normalized = if self.flipped {
            1.0 - normalized
        } else {
            normalized
        };
        let span = self.domain_end - self.domain_start;
        Ok(self.domain_start + normalized * span)
    }

    /// Evenly spaced values across the domain, endpoints included.
    #[must_use]
    pub fn ticks(self, tick_count: usize) -> Vec<f64> {
        match tick_count {
            0 => Vec::new(),
            1 => vec![self.domain_start],
            _ => {
                let span = self.domain_end - self.domain_start;
                let denominator = (tick_count - 1) as f64;
                (0..tick_count)
                    .map(|index| self.domain_start + span * (index as f64) / denominator)
                    .collect()
            }
        }
    }
}

fn validate_extent(extent_px: f64) -> ChartResult<()> {
    if !extent_px.is_finite() || extent_px <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "pixel extent must be finite and > 0, got {extent_px}"
        )));
    }
    Ok(())
}
