use crate::core::{DEFAULT_ZOOM_FACTOR, ZoomDirection};

/// Wheel delta (in `deltaY` units) that counts as one zoom step.
pub const DEFAULT_WHEEL_UNITS_PER_STEP: f64 = 100.0;

/// Accumulates wheel steps between throttled zoom resolves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelZoom {
    steps: f64,
    base: f64,
    units_per_step: f64,
}

impl Default for WheelZoom {
    fn default() -> Self {
        Self::new(DEFAULT_ZOOM_FACTOR, DEFAULT_WHEEL_UNITS_PER_STEP)
    }
}

impl WheelZoom {
    #[must_use]
    pub fn new(base: f64, units_per_step: f64) -> Self {
        Self {
            steps: 0.0,
            base,
            units_per_step,
        }
    }

    #[must_use]
    pub fn steps(self) -> f64 {
        self.steps
    }

    /// Adds a wheel event; scrolling up (negative `delta_y`) zooms in.
    /// Returns `true` when the accumulated steps changed.
    pub fn accumulate(&mut self, delta_y: f64) -> bool {
        if delta_y == 0.0 || !delta_y.is_finite() {
            return false;
        }
        self.steps += -delta_y / self.units_per_step;
        true
    }

    /// Drains the accumulated steps into a zoom direction and factor.
    pub fn take_zoom(&mut self) -> Option<(ZoomDirection, f64)> {
        let steps = std::mem::take(&mut self.steps);
        if steps == 0.0 {
            return None;
        }
        let direction = if steps > 0.0 {
            ZoomDirection::In
        } else {
            ZoomDirection::Out
        };
        // Huge bursts overflow to infinity; the reducer clamps at its limits.
        let factor = self.base.powf(steps.abs()).min(f64::MAX);
        Some((direction, factor))
    }

    pub fn reset(&mut self) {
        self.steps = 0.0;
    }
}
