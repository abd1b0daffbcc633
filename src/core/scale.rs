#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::TimeRange;
use crate::error::{TimelineError, TimelineResult};

/// Affine map from a data domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> TimelineResult<Self> {
        let (domain_start, domain_end) = domain;
        let (range_start, range_end) = range;
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(TimelineError::InvalidGeometry {
                width: range_end - range_start,
                span: domain_end - domain_start,
            });
        }
        if !range_start.is_finite() || !range_end.is_finite() || range_start == range_end {
            return Err(TimelineError::InvalidGeometry {
                width: range_end - range_start,
                span: domain_end - domain_start,
            });
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Pixels per domain unit (negative for inverted ranges).
    #[must_use]
    pub fn slope(self) -> f64 {
        (self.range_end - self.range_start) / (self.domain_end - self.domain_start)
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        self.range_start + (value - self.domain_start) * self.slope()
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        self.domain_start + (pixel - self.range_start) / self.slope()
    }
}

/// Batches at or above this size are projected with rayon when the
/// `parallel-projection` feature is enabled.
pub const PARALLEL_PROJECTION_MIN_LEN: usize = 16_384;

/// Time → pixel transform for one panel.
///
/// Built from the visible window, the panel width and the left margin. A
/// degenerate input (no window, zero span, empty panel) yields a transform
/// that maps everything to `0.0`; callers check `is_renderable` and draw
/// nothing in that case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeTransform {
    scale: Option<LinearScale>,
    panel_width_px: f64,
    offset_px: f64,
}

impl TimeTransform {
    #[must_use]
    pub fn new(panel_width_px: f64, visible: Option<TimeRange>, offset_px: f64) -> Self {
        let scale = match visible {
            Some(visible) if panel_width_px.is_finite() && panel_width_px > 0.0 => {
                LinearScale::new(
                    (visible.start, visible.end),
                    (offset_px, offset_px + panel_width_px),
                )
                .ok()
            }
            _ => None,
        };
        if scale.is_none() {
            warn!(
                panel_width_px,
                ?visible,
                offset_px,
                "degenerate time transform; mapping every time to 0"
            );
        }
        Self {
            scale,
            panel_width_px,
            offset_px,
        }
    }

    #[must_use]
    pub fn is_renderable(self) -> bool {
        self.scale.is_some()
    }

    #[must_use]
    pub fn panel_width_px(self) -> f64 {
        self.panel_width_px
    }

    #[must_use]
    pub fn offset_px(self) -> f64 {
        self.offset_px
    }

    #[must_use]
    pub fn visible(self) -> Option<TimeRange> {
        self.scale.map(|scale| {
            let (start, end) = scale.domain();
            TimeRange { start, end }
        })
    }

    #[must_use]
    pub fn pixels_per_second(self) -> f64 {
        self.scale.map_or(0.0, LinearScale::slope)
    }

    #[must_use]
    pub fn to_pixel(self, time: f64) -> f64 {
        self.scale.map_or(0.0, |scale| scale.map(time))
    }

    /// Projects an ordered batch of times in one pass, preserving order.
    #[must_use]
    pub fn to_pixels(self, times: &[f64]) -> Vec<f64> {
        let Some(scale) = self.scale else {
            return vec![0.0; times.len()];
        };

        #[cfg(feature = "parallel-projection")]
        {
            if times.len() >= PARALLEL_PROJECTION_MIN_LEN {
                return times.par_iter().map(|time| scale.map(*time)).collect();
            }
        }

        times.iter().map(|time| scale.map(*time)).collect()
    }

    /// Position of `time` across the panel as a 0..1 fraction (unclamped).
    #[must_use]
    pub fn to_pixel_fraction(self, time: f64) -> f64 {
        match self.scale {
            Some(scale) => (scale.map(time) - self.offset_px) / self.panel_width_px,
            None => 0.0,
        }
    }

    /// Inverse of `to_pixel_fraction`; used to interpret clicks.
    #[must_use]
    pub fn fraction_to_time(self, fraction: f64) -> f64 {
        self.scale.map_or(0.0, |scale| {
            scale.invert(self.offset_px + fraction * self.panel_width_px)
        })
    }

    /// Time under an absolute pixel x (margin included).
    #[must_use]
    pub fn pixel_to_time(self, pixel: f64) -> f64 {
        self.scale.map_or(0.0, |scale| scale.invert(pixel))
    }

    /// Fraction of the panel under panel-relative `x`, clamped to 0..1.
    #[must_use]
    pub fn clamped_fraction(self, panel_x: f64) -> f64 {
        if self.panel_width_px > 0.0 && self.panel_width_px.is_finite() {
            (panel_x / self.panel_width_px).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// Vertical placement of a value axis inside a panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueAxis {
    pub value_min: f64,
    pub value_max: f64,
    pub top_px: f64,
    pub height_px: f64,
    /// Screen Y grows downwards; `true` puts `value_max` at the top.
    pub invert: bool,
}

/// Combined time/value → pixel transform for scatter and line plots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotTransform2d {
    time: TimeTransform,
    value: Option<LinearScale>,
}

impl PlotTransform2d {
    #[must_use]
    pub fn new(time: TimeTransform, axis: ValueAxis) -> Self {
        let (range_start, range_end) = if axis.invert {
            (axis.top_px + axis.height_px, axis.top_px)
        } else {
            (axis.top_px, axis.top_px + axis.height_px)
        };
        let value = LinearScale::new((axis.value_min, axis.value_max), (range_start, range_end)).ok();
        if value.is_none() {
            warn!(
                value_min = axis.value_min,
                value_max = axis.value_max,
                height_px = axis.height_px,
                "degenerate value axis; mapping every value to 0"
            );
        }
        Self { time, value }
    }

    #[must_use]
    pub fn time(self) -> TimeTransform {
        self.time
    }

    #[must_use]
    pub fn is_renderable(self) -> bool {
        self.time.is_renderable() && self.value.is_some()
    }

    #[must_use]
    pub fn value_to_pixel(self, value: f64) -> f64 {
        self.value.map_or(0.0, |scale| scale.map(value))
    }

    #[must_use]
    pub fn pixel_to_value(self, pixel: f64) -> f64 {
        self.value.map_or(0.0, |scale| scale.invert(pixel))
    }

    #[must_use]
    pub fn project(self, time: f64, value: f64) -> (f64, f64) {
        (self.time.to_pixel(time), self.value_to_pixel(value))
    }

    /// Projects `(time, value)` samples in one pass, preserving order.
    #[must_use]
    pub fn project_points(self, points: &[(f64, f64)]) -> Vec<(f64, f64)> {
        #[cfg(feature = "parallel-projection")]
        {
            if points.len() >= PARALLEL_PROJECTION_MIN_LEN {
                return points
                    .par_iter()
                    .map(|(time, value)| self.project(*time, *value))
                    .collect();
            }
        }

        points
            .iter()
            .map(|(time, value)| self.project(*time, *value))
            .collect()
    }
}
