use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{DEFAULT_ZOOM_FACTOR, FocusOptions, TimeTransform, TimeWindowCommand};
use crate::error::{TimelineError, TimelineResult};
use crate::interaction::{
    CommandSink, DEFAULT_DRAG_THRESHOLD_PX, DEFAULT_WHEEL_UNITS_PER_STEP, PanGesture, Throttle,
    WheelZoom,
};

/// Tuning for pointer and wheel handling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Horizontal travel beyond which a press becomes a drag.
    pub drag_threshold_px: f64,
    pub throttle_interval_ms: u64,
    pub wheel_zoom_base: f64,
    pub wheel_units_per_step: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            drag_threshold_px: DEFAULT_DRAG_THRESHOLD_PX,
            throttle_interval_ms: 50,
            wheel_zoom_base: DEFAULT_ZOOM_FACTOR,
            wheel_units_per_step: DEFAULT_WHEEL_UNITS_PER_STEP,
        }
    }
}

impl GestureConfig {
    pub fn validate(self) -> TimelineResult<Self> {
        if !self.drag_threshold_px.is_finite() || self.drag_threshold_px < 0.0 {
            return Err(TimelineError::InvalidConfig(
                "gesture `drag_threshold_px` must be finite and >= 0".to_owned(),
            ));
        }
        if !self.wheel_zoom_base.is_finite() || self.wheel_zoom_base < 1.0 {
            return Err(TimelineError::InvalidConfig(
                "gesture `wheel_zoom_base` must be finite and >= 1".to_owned(),
            ));
        }
        if !self.wheel_units_per_step.is_finite() || self.wheel_units_per_step <= 0.0 {
            return Err(TimelineError::InvalidConfig(
                "gesture `wheel_units_per_step` must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }

    #[must_use]
    pub fn throttle_interval(self) -> Duration {
        Duration::from_millis(self.throttle_interval_ms)
    }
}

/// Turns raw pointer and wheel input on one view into navigation commands.
///
/// Coordinates are panel-relative (left margin already subtracted). The clock
/// is explicit: handlers take the event time and the host calls `poll` on its
/// timer or frame cadence to flush throttled pan and zoom work.
#[derive(Debug)]
pub struct GestureInteractionLayer<S> {
    sink: S,
    config: GestureConfig,
    pan: Option<PanGesture>,
    pan_throttle: Throttle,
    wheel: WheelZoom,
    zoom_throttle: Throttle,
    has_focus: bool,
}

impl<S: CommandSink> GestureInteractionLayer<S> {
    #[must_use]
    pub fn new(sink: S, config: GestureConfig) -> Self {
        Self {
            sink,
            config,
            pan: None,
            pan_throttle: Throttle::new(config.throttle_interval()),
            wheel: WheelZoom::new(config.wheel_zoom_base, config.wheel_units_per_step),
            zoom_throttle: Throttle::new(config.throttle_interval()),
            has_focus: false,
        }
    }

    #[must_use]
    pub fn config(&self) -> GestureConfig {
        self.config
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Whether this view owns wheel input (set by a click, cleared on leave).
    #[must_use]
    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan.is_some_and(PanGesture::is_panning)
    }

    /// Earliest instant at which `poll` has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.pan_throttle.due_at(), self.zoom_throttle.due_at()) {
            (Some(pan), Some(zoom)) => Some(pan.min(zoom)),
            (pan, zoom) => pan.or(zoom),
        }
    }

    pub fn pointer_down(&mut self, panel_x: f64, transform: TimeTransform) {
        self.pan_throttle.cancel();
        self.pan = pointer_time(panel_x, transform).map(|time| PanGesture::start(panel_x, time));
        trace!(panel_x, anchor = ?self.pan.map(PanGesture::anchor_time), "pointer down");
    }

    pub fn pointer_move(&mut self, panel_x: f64, transform: TimeTransform, now: Instant) {
        let Some(time) = pointer_time(panel_x, transform) else {
            return;
        };
        let threshold = self.config.drag_threshold_px;
        if let Some(pan) = self.pan.as_mut() {
            if pan.update(panel_x, time, threshold) {
                self.pan_throttle.arm(now);
            }
        }
    }

    /// Finishes a press: a drag flushes its pending pan, anything else is a
    /// click that moves the focus cursor and gives this view wheel focus.
    pub fn pointer_up(
        &mut self,
        panel_x: f64,
        transform: TimeTransform,
        shift_extend: bool,
    ) -> TimelineResult<()> {
        self.pan_throttle.cancel();
        let gesture = self.pan.take();

        if let Some(mut pan) = gesture.filter(|pan| pan.is_panning()) {
            if let Some(delta) = pan.take_delta() {
                trace!(delta, "flushing pan on release");
                self.sink.send_command(TimeWindowCommand::pan_seconds(delta))?;
            }
            return Ok(());
        }

        let Some(time) = pointer_time(panel_x, transform) else {
            return Ok(());
        };
        self.has_focus = true;
        trace!(time, shift_extend, "click sets focus time");
        self.sink.send_command(TimeWindowCommand::SetFocusTime {
            time,
            options: FocusOptions {
                shift_extend,
                auto_scroll: false,
            },
        })
    }

    /// Pointer left the view: drop the gesture, pending work and wheel focus.
    pub fn pointer_leave(&mut self) {
        self.pan = None;
        self.pan_throttle.cancel();
        self.wheel.reset();
        self.zoom_throttle.cancel();
        self.has_focus = false;
        trace!("pointer left view");
    }

    /// Accumulates a wheel event; ignored unless this view has focus.
    pub fn wheel(&mut self, delta_y: f64, now: Instant) -> bool {
        if !self.has_focus || !self.wheel.accumulate(delta_y) {
            return false;
        }
        self.zoom_throttle.arm(now);
        true
    }

    /// Resolves throttled work that is due, returning how many commands were sent.
    pub fn poll(&mut self, now: Instant) -> TimelineResult<usize> {
        let mut sent = 0;
        if self.pan_throttle.poll(now) {
            if let Some(delta) = self.pan.as_mut().and_then(PanGesture::take_delta) {
                trace!(delta, "resolving throttled pan");
                self.sink.send_command(TimeWindowCommand::pan_seconds(delta))?;
                sent += 1;
            }
        }
        if self.zoom_throttle.poll(now) {
            if let Some((direction, factor)) = self.wheel.take_zoom() {
                trace!(?direction, factor, "resolving throttled zoom");
                self.sink
                    .send_command(TimeWindowCommand::zoom(direction, Some(factor)))?;
                sent += 1;
            }
        }
        Ok(sent)
    }
}

fn pointer_time(panel_x: f64, transform: TimeTransform) -> Option<f64> {
    if !transform.is_renderable() || !panel_x.is_finite() {
        return None;
    }
    Some(transform.fraction_to_time(transform.clamped_fraction(panel_x)))
}
