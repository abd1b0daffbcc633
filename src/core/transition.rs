//! Pure navigation reducer.
//!
//! `transition` never mutates its input: it returns either the same `Arc`
//! (nothing changed, or the candidate broke an invariant) or a fresh snapshot.
//! Only malformed commands produce an error.

use std::sync::Arc;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{ElectrodeId, TimeRange, TimeWindowState};
use crate::error::{TimelineError, TimelineResult};

pub const DEFAULT_ZOOM_FACTOR: f64 = 1.4;
pub const DEFAULT_PAN_PERCENT: f64 = 10.0;
pub const DEFAULT_MIN_WINDOW_SECONDS: f64 = 1e-3;

/// What to do when a second source reports different recording bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReinitializePolicy {
    /// Keep the first bounds and log the mismatch.
    Reject,
    /// Grow the bounds to the union of every reported range.
    #[default]
    Widen,
}

/// Tunables shared by every navigation transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationPolicy {
    pub reinitialize: ReinitializePolicy,
    pub default_zoom_factor: f64,
    pub default_pan_percent: f64,
    pub min_window_seconds: f64,
}

impl Default for NavigationPolicy {
    fn default() -> Self {
        Self {
            reinitialize: ReinitializePolicy::default(),
            default_zoom_factor: DEFAULT_ZOOM_FACTOR,
            default_pan_percent: DEFAULT_PAN_PERCENT,
            min_window_seconds: DEFAULT_MIN_WINDOW_SECONDS,
        }
    }
}

impl NavigationPolicy {
    pub fn validate(self) -> TimelineResult<Self> {
        if !self.default_zoom_factor.is_finite() || self.default_zoom_factor < 1.0 {
            return Err(TimelineError::InvalidConfig(
                "default zoom factor must be finite and >= 1".to_owned(),
            ));
        }
        if !self.default_pan_percent.is_finite() || self.default_pan_percent < 0.0 {
            return Err(TimelineError::InvalidConfig(
                "default pan percent must be finite and >= 0".to_owned(),
            ));
        }
        if !self.min_window_seconds.is_finite() || self.min_window_seconds <= 0.0 {
            return Err(TimelineError::InvalidConfig(
                "min window must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanDirection {
    Forward,
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomDirection {
    In,
    Out,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanAmount {
    /// Fraction of the current window, in percent. `None` uses the policy default.
    Percent {
        direction: PanDirection,
        percent: Option<f64>,
    },
    /// Signed displacement in seconds.
    Seconds(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusOptions {
    /// Turn the previous and new focus times into a focus interval.
    pub shift_extend: bool,
    /// Re-centre the window when the focus lands off screen.
    pub auto_scroll: bool,
}

/// Navigation command delivered to the reducer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TimeWindowCommand {
    Initialize {
        start: f64,
        end: f64,
    },
    Pan {
        amount: PanAmount,
    },
    Zoom {
        direction: ZoomDirection,
        factor: Option<f64>,
    },
    SetFocusTime {
        time: f64,
        #[serde(default)]
        options: FocusOptions,
    },
    SetFocusInterval {
        interval: TimeRange,
        #[serde(default)]
        auto_scroll: bool,
    },
    SetSelectedElectrodeIds {
        ids: IndexSet<ElectrodeId>,
    },
    SetVisibleWindow {
        start: f64,
        end: f64,
    },
    ResetVisibleWindow,
    ClearFocus,
}

impl TimeWindowCommand {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Initialize { .. } => "initialize",
            Self::Pan { .. } => "pan",
            Self::Zoom { .. } => "zoom",
            Self::SetFocusTime { .. } => "set_focus_time",
            Self::SetFocusInterval { .. } => "set_focus_interval",
            Self::SetSelectedElectrodeIds { .. } => "set_selected_electrode_ids",
            Self::SetVisibleWindow { .. } => "set_visible_window",
            Self::ResetVisibleWindow => "reset_visible_window",
            Self::ClearFocus => "clear_focus",
        }
    }

    #[must_use]
    pub fn pan_seconds(delta: f64) -> Self {
        Self::Pan {
            amount: PanAmount::Seconds(delta),
        }
    }

    #[must_use]
    pub fn pan_percent(direction: PanDirection, percent: Option<f64>) -> Self {
        Self::Pan {
            amount: PanAmount::Percent { direction, percent },
        }
    }

    #[must_use]
    pub fn zoom(direction: ZoomDirection, factor: Option<f64>) -> Self {
        Self::Zoom { direction, factor }
    }

    #[must_use]
    pub fn focus(time: f64) -> Self {
        Self::SetFocusTime {
            time,
            options: FocusOptions::default(),
        }
    }

    /// Rejects commands whose arguments break the caller contract.
    pub fn validate(&self) -> TimelineResult<()> {
        match *self {
            Self::Initialize { start, end } | Self::SetVisibleWindow { start, end } => {
                TimeRange::new(start, end).map(|_| ())
            }
            Self::Pan {
                amount: PanAmount::Seconds(delta),
            } => require_finite(delta, "pan delta"),
            Self::Pan {
                amount: PanAmount::Percent { percent, .. },
            } => match percent {
                Some(percent) if !percent.is_finite() || percent < 0.0 => {
                    Err(TimelineError::InvalidCommand(format!(
                        "pan percent must be finite and >= 0, got {percent}"
                    )))
                }
                _ => Ok(()),
            },
            Self::Zoom { factor, .. } => match factor {
                Some(factor) if !factor.is_finite() || factor < 1.0 => {
                    Err(TimelineError::InvalidCommand(format!(
                        "zoom factor must be finite and >= 1, got {factor}"
                    )))
                }
                _ => Ok(()),
            },
            Self::SetFocusTime { time, .. } => require_finite(time, "focus time"),
            Self::SetFocusInterval { interval, .. } => {
                TimeRange::new(interval.start, interval.end).map(|_| ())
            }
            Self::SetSelectedElectrodeIds { .. } | Self::ResetVisibleWindow | Self::ClearFocus => {
                Ok(())
            }
        }
    }
}

fn require_finite(value: f64, what: &str) -> TimelineResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TimelineError::InvalidCommand(format!(
            "{what} must be finite, got {value}"
        )))
    }
}

/// Applies `command` to `state`.
///
/// Returns the input `Arc` unchanged when the command is a no-op, targets an
/// uninitialized state, or would produce an invalid snapshot.
pub fn transition(
    state: &Arc<TimeWindowState>,
    command: &TimeWindowCommand,
    policy: &NavigationPolicy,
) -> TimelineResult<Arc<TimeWindowState>> {
    command.validate()?;

    let candidate = match command {
        TimeWindowCommand::Initialize { start, end } => {
            initialize(state, TimeRange::ordered(*start, *end), policy)
        }
        TimeWindowCommand::Pan { amount } => pan(state, *amount, policy),
        TimeWindowCommand::Zoom { direction, factor } => zoom(
            state,
            *direction,
            factor.unwrap_or(policy.default_zoom_factor),
            policy,
        ),
        TimeWindowCommand::SetFocusTime { time, options } => {
            set_focus_time(state, *time, *options)
        }
        TimeWindowCommand::SetFocusInterval {
            interval,
            auto_scroll,
        } => set_focus_interval(state, *interval, *auto_scroll),
        TimeWindowCommand::SetSelectedElectrodeIds { ids } => {
            set_selected_electrode_ids(state, ids)
        }
        TimeWindowCommand::SetVisibleWindow { start, end } => {
            set_visible_window(state, TimeRange::ordered(*start, *end), policy)
        }
        TimeWindowCommand::ResetVisibleWindow => reset_visible_window(state),
        TimeWindowCommand::ClearFocus => clear_focus(state),
    };

    let Some(candidate) = candidate else {
        return Ok(Arc::clone(state));
    };
    if candidate == **state {
        return Ok(Arc::clone(state));
    }
    if let Err(violation) = candidate.validate() {
        warn!(
            command = command.name(),
            %violation,
            "discarding navigation command that would violate state invariants"
        );
        return Ok(Arc::clone(state));
    }

    debug!(
        command = command.name(),
        visible = ?candidate.visible(),
        focus = ?candidate.focus_time(),
        "applied navigation command"
    );
    Ok(Arc::new(candidate))
}

fn initialized_bounds(state: &TimeWindowState, operation: &str) -> Option<(TimeRange, TimeRange)> {
    match (state.recording(), state.visible()) {
        (Some(recording), Some(visible)) => Some((recording, visible)),
        _ => {
            warn!(operation, "navigation command on uninitialized time window state");
            None
        }
    }
}

/// Places a window of `length` starting near `start` inside `recording`.
///
/// The end is clamped first and the start recomputed from it, so the window
/// keeps its length whenever it fits in the recording.
fn fit_window(start: f64, length: f64, recording: TimeRange) -> TimeRange {
    let length = length.min(recording.span());
    let start = start.max(recording.start);
    let end = (start + length).min(recording.end);
    let start = (end - length).max(recording.start);
    TimeRange { start, end }
}

/// Slides `window` the minimum distance needed to contain `time`.
fn shift_to_contain(window: TimeRange, time: f64) -> TimeRange {
    if time > window.end {
        TimeRange {
            start: window.start + (time - window.end),
            end: time,
        }
    } else if time < window.start {
        TimeRange {
            start: time,
            end: window.end - (window.start - time),
        }
    } else {
        window
    }
}

fn initialize(
    state: &TimeWindowState,
    reported: TimeRange,
    policy: &NavigationPolicy,
) -> Option<TimeWindowState> {
    let Some(recording) = state.recording() else {
        let mut next = state.clone();
        next.set_bounds(reported, reported);
        return Some(next);
    };

    if recording == reported {
        return None;
    }

    match policy.reinitialize {
        ReinitializePolicy::Reject => {
            warn!(
                existing_start = recording.start,
                existing_end = recording.end,
                reported_start = reported.start,
                reported_end = reported.end,
                "ignoring re-initialization with mismatched recording bounds"
            );
            None
        }
        ReinitializePolicy::Widen => {
            let widened = recording.union(reported);
            if widened == recording {
                return None;
            }
            warn!(
                existing_start = recording.start,
                existing_end = recording.end,
                reported_start = reported.start,
                reported_end = reported.end,
                "widening recording bounds to cover every reporting source"
            );
            let mut next = state.clone();
            next.set_bounds(widened, widened);
            Some(next)
        }
    }
}

fn pan(
    state: &TimeWindowState,
    amount: PanAmount,
    policy: &NavigationPolicy,
) -> Option<TimeWindowState> {
    let (recording, visible) = initialized_bounds(state, "pan")?;
    let length = visible.span();
    let displacement = match amount {
        PanAmount::Seconds(delta) => delta,
        PanAmount::Percent { direction, percent } => {
            let magnitude = percent.unwrap_or(policy.default_pan_percent) / 100.0 * length;
            match direction {
                PanDirection::Forward => magnitude,
                PanDirection::Back => -magnitude,
            }
        }
    };

    let at_edge = (displacement > 0.0 && visible.end >= recording.end)
        || (displacement < 0.0 && visible.start <= recording.start);
    if at_edge {
        return None;
    }

    let moved = if displacement > 0.0 {
        let end = (visible.end + displacement).min(recording.end);
        let start = (end - length).max(recording.start);
        TimeRange { start, end }
    } else if displacement < 0.0 {
        let start = (visible.start + displacement).max(recording.start);
        let end = (start + length).min(recording.end);
        TimeRange { start, end }
    } else {
        return None;
    };

    if moved == visible {
        return None;
    }

    let mut next = state.clone();
    next.set_visible(moved);
    if let Some(focus) = state.focus_time() {
        if !moved.contains(focus) {
            next.set_focus_time(None);
        }
    }
    Some(next)
}

fn zoom(
    state: &TimeWindowState,
    direction: ZoomDirection,
    factor: f64,
    policy: &NavigationPolicy,
) -> Option<TimeWindowState> {
    let (recording, visible) = initialized_bounds(state, "zoom")?;
    let total = recording.span();
    let current = visible.span();

    if direction == ZoomDirection::Out && current >= total {
        return None;
    }

    let scale = match direction {
        ZoomDirection::In => 1.0 / factor,
        ZoomDirection::Out => factor,
    };
    let base = match direction {
        ZoomDirection::In => current,
        ZoomDirection::Out => current.max(policy.min_window_seconds.min(total)),
    };
    let mut target = (base * scale).min(total);
    if direction == ZoomDirection::In {
        target = target.max(policy.min_window_seconds.min(current));
        if target >= current {
            return None;
        }
    } else if target <= current {
        return None;
    }

    let mut next = state.clone();
    if target >= total {
        next.set_visible(recording);
        return Some(next);
    }

    let (anchor, anchor_fraction) = match state.focus_time() {
        Some(focus) if current > 0.0 => (focus, (focus - visible.start) / current),
        _ => (visible.midpoint(), 0.5),
    };
    let mut zoomed = fit_window(anchor - anchor_fraction * target, target, recording);
    if state.focus_time().is_some() {
        zoomed = shift_to_contain(zoomed, anchor);
    }
    next.set_visible(zoomed);
    Some(next)
}

fn scroll_to(state: &TimeWindowState, time: f64) -> Option<TimeRange> {
    let (recording, visible) = (state.recording()?, state.visible()?);
    if visible.contains(time) {
        return None;
    }
    let length = visible.span();
    Some(fit_window(time - length / 2.0, length, recording))
}

fn set_focus_time(
    state: &TimeWindowState,
    time: f64,
    options: FocusOptions,
) -> Option<TimeWindowState> {
    initialized_bounds(state, "set_focus_time")?;
    let mut next = state.clone();
    next.set_focus_time(Some(time));
    next.set_focus_interval(None);

    if options.auto_scroll {
        if let Some(window) = scroll_to(state, time) {
            next.set_visible(window);
        }
    }

    if options.shift_extend {
        if let Some(anchor) = state.focus_time() {
            next.set_focus_time(Some(anchor));
            next.set_focus_interval(Some(TimeRange::ordered(anchor, time)));
        }
    }
    Some(next)
}

fn set_focus_interval(
    state: &TimeWindowState,
    interval: TimeRange,
    auto_scroll: bool,
) -> Option<TimeWindowState> {
    initialized_bounds(state, "set_focus_interval")?;
    let mut next = state.clone();
    next.set_focus_interval(Some(interval));
    if auto_scroll {
        if let Some(window) = scroll_to(state, interval.midpoint()) {
            next.set_visible(window);
        }
    }
    Some(next)
}

fn set_selected_electrode_ids(
    state: &TimeWindowState,
    ids: &IndexSet<ElectrodeId>,
) -> Option<TimeWindowState> {
    if state.selected_electrode_ids() == ids {
        return None;
    }
    let mut next = state.clone();
    next.set_selected_electrode_ids(ids.clone());
    Some(next)
}

fn set_visible_window(
    state: &TimeWindowState,
    requested: TimeRange,
    policy: &NavigationPolicy,
) -> Option<TimeWindowState> {
    let (recording, _) = initialized_bounds(state, "set_visible_window")?;
    let min_length = policy.min_window_seconds.min(recording.span());
    let window = if requested.span() < min_length {
        // Shorter requests grow to the minimum around their centre.
        fit_window(requested.midpoint() - min_length / 2.0, min_length, recording)
    } else {
        fit_window(requested.start, requested.span(), recording)
    };
    let mut next = state.clone();
    next.set_visible(window);
    if let Some(focus) = state.focus_time() {
        if !window.contains(focus) {
            next.set_focus_time(None);
        }
    }
    Some(next)
}

fn reset_visible_window(state: &TimeWindowState) -> Option<TimeWindowState> {
    let (recording, visible) = initialized_bounds(state, "reset_visible_window")?;
    if recording == visible {
        return None;
    }
    let mut next = state.clone();
    next.set_visible(recording);
    Some(next)
}

fn clear_focus(state: &TimeWindowState) -> Option<TimeWindowState> {
    if state.focus_time().is_none() && state.focus_interval().is_none() {
        return None;
    }
    let mut next = state.clone();
    next.set_focus_time(None);
    next.set_focus_interval(None);
    Some(next)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use approx::assert_relative_eq;

    use super::{
        FocusOptions, NavigationPolicy, PanDirection, ReinitializePolicy, TimeWindowCommand,
        ZoomDirection, fit_window, transition,
    };
    use crate::core::{TimeRange, TimeWindowState};
    use crate::error::TimelineError;

    fn apply(
        state: &Arc<TimeWindowState>,
        command: TimeWindowCommand,
    ) -> Arc<TimeWindowState> {
        transition(state, &command, &NavigationPolicy::default()).expect("well-formed command")
    }

    fn initialized(start: f64, end: f64) -> Arc<TimeWindowState> {
        apply(
            &Arc::new(TimeWindowState::uninitialized()),
            TimeWindowCommand::Initialize { start, end },
        )
    }

    fn visible(state: &TimeWindowState) -> (f64, f64) {
        state.visible().expect("visible").into()
    }

    #[test]
    fn fit_window_keeps_length_against_either_bound() {
        let recording = TimeRange::new(0.0, 10.0).expect("range");
        assert_eq!(
            fit_window(8.0, 4.0, recording),
            TimeRange { start: 6.0, end: 10.0 }
        );
        assert_eq!(
            fit_window(-3.0, 4.0, recording),
            TimeRange { start: 0.0, end: 4.0 }
        );
        assert_eq!(
            fit_window(2.0, 40.0, recording),
            TimeRange { start: 0.0, end: 10.0 }
        );
    }

    #[test]
    fn worked_navigation_scenario() {
        let state = initialized(0.0, 100.0);
        assert_eq!(visible(&state), (0.0, 100.0));

        let state = apply(&state, TimeWindowCommand::zoom(ZoomDirection::In, Some(2.0)));
        assert_eq!(visible(&state), (25.0, 75.0));

        let state = apply(
            &state,
            TimeWindowCommand::pan_percent(PanDirection::Forward, Some(10.0)),
        );
        assert_eq!(visible(&state), (30.0, 80.0));

        let state = apply(&state, TimeWindowCommand::focus(78.0));
        assert_eq!(state.focus_time(), Some(78.0));

        let state = apply(&state, TimeWindowCommand::zoom(ZoomDirection::Out, Some(10.0)));
        assert_eq!(visible(&state), (0.0, 100.0));
    }

    #[test]
    fn strict_policy_rejects_mismatched_reinitialization() {
        let policy = NavigationPolicy {
            reinitialize: ReinitializePolicy::Reject,
            ..NavigationPolicy::default()
        };
        let state = initialized(0.0, 100.0);
        let next = transition(
            &state,
            &TimeWindowCommand::Initialize {
                start: -5.0,
                end: 120.0,
            },
            &policy,
        )
        .expect("well-formed");
        assert!(Arc::ptr_eq(&state, &next));
    }

    #[test]
    fn lenient_policy_widens_to_union() {
        let state = initialized(10.0, 100.0);
        let next = apply(&state, TimeWindowCommand::Initialize { start: 0.0, end: 50.0 });
        assert_eq!(next.recording(), Some(TimeRange { start: 0.0, end: 100.0 }));
        assert_eq!(visible(&next), (0.0, 100.0));

        let contained = apply(&next, TimeWindowCommand::Initialize { start: 20.0, end: 30.0 });
        assert!(Arc::ptr_eq(&next, &contained));
    }

    #[test]
    fn matching_reinitialization_is_identity() {
        let state = initialized(0.0, 100.0);
        let next = apply(&state, TimeWindowCommand::Initialize { start: 0.0, end: 100.0 });
        assert!(Arc::ptr_eq(&state, &next));
    }

    #[test]
    fn zero_pan_is_identity() {
        let state = apply(
            &initialized(0.0, 100.0),
            TimeWindowCommand::zoom(ZoomDirection::In, Some(2.0)),
        );
        let next = apply(&state, TimeWindowCommand::pan_seconds(0.0));
        assert!(Arc::ptr_eq(&state, &next));
    }

    #[test]
    fn pan_back_clamps_at_recording_start() {
        let state = apply(
            &initialized(0.0, 100.0),
            TimeWindowCommand::zoom(ZoomDirection::In, Some(4.0)),
        );
        let next = apply(&state, TimeWindowCommand::pan_seconds(-1_000.0));
        assert_eq!(visible(&next), (0.0, 25.0));
    }

    #[test]
    fn pan_drops_focus_that_leaves_the_window() {
        let state = apply(
            &initialized(0.0, 100.0),
            TimeWindowCommand::zoom(ZoomDirection::In, Some(2.0)),
        );
        let state = apply(&state, TimeWindowCommand::focus(30.0));
        let next = apply(&state, TimeWindowCommand::pan_seconds(10.0));
        assert_eq!(visible(&next), (35.0, 85.0));
        assert_eq!(next.focus_time(), None);
    }

    #[test]
    fn zoom_in_anchors_on_focus_time() {
        let state = apply(&initialized(0.0, 100.0), TimeWindowCommand::focus(80.0));
        let next = apply(&state, TimeWindowCommand::zoom(ZoomDirection::In, Some(4.0)));
        let (start, end) = visible(&next);
        assert_relative_eq!(end - start, 25.0, epsilon = 1e-9);
        assert_relative_eq!((80.0 - start) / (end - start), 0.8, epsilon = 1e-9);
    }

    #[test]
    fn zoom_out_from_full_window_is_identity() {
        let state = initialized(0.0, 100.0);
        let next = apply(&state, TimeWindowCommand::zoom(ZoomDirection::Out, None));
        assert!(Arc::ptr_eq(&state, &next));
    }

    #[test]
    fn zoom_in_stops_at_minimum_window() {
        let state = initialized(0.0, 0.004);
        let state = apply(&state, TimeWindowCommand::zoom(ZoomDirection::In, Some(100.0)));
        let (start, end) = visible(&state);
        assert_relative_eq!(end - start, 0.001, epsilon = 1e-12);

        let again = apply(&state, TimeWindowCommand::zoom(ZoomDirection::In, Some(2.0)));
        assert!(Arc::ptr_eq(&state, &again));
    }

    #[test]
    fn focus_outside_window_is_discarded_without_auto_scroll() {
        let state = apply(
            &initialized(0.0, 100.0),
            TimeWindowCommand::zoom(ZoomDirection::In, Some(2.0)),
        );
        let next = apply(&state, TimeWindowCommand::focus(90.0));
        assert!(Arc::ptr_eq(&state, &next));
    }

    #[test]
    fn auto_scroll_recenters_and_clamps_to_recording_end() {
        let state = apply(
            &initialized(0.0, 100.0),
            TimeWindowCommand::zoom(ZoomDirection::In, Some(5.0)),
        );
        let next = apply(
            &state,
            TimeWindowCommand::SetFocusTime {
                time: 95.0,
                options: FocusOptions {
                    shift_extend: false,
                    auto_scroll: true,
                },
            },
        );
        assert_eq!(visible(&next), (80.0, 100.0));
        assert_eq!(next.focus_time(), Some(95.0));
    }

    #[test]
    fn shift_extend_builds_ordered_interval_from_previous_focus() {
        let state = apply(&initialized(0.0, 100.0), TimeWindowCommand::focus(60.0));
        let next = apply(
            &state,
            TimeWindowCommand::SetFocusTime {
                time: 20.0,
                options: FocusOptions {
                    shift_extend: true,
                    auto_scroll: false,
                },
            },
        );
        assert_eq!(next.focus_time(), Some(60.0));
        assert_eq!(
            next.focus_interval(),
            Some(TimeRange { start: 20.0, end: 60.0 })
        );
    }

    #[test]
    fn focus_interval_auto_scrolls_to_its_midpoint() {
        let state = apply(
            &initialized(0.0, 100.0),
            TimeWindowCommand::zoom(ZoomDirection::In, Some(10.0)),
        );
        let next = apply(
            &state,
            TimeWindowCommand::SetFocusInterval {
                interval: TimeRange { start: 10.0, end: 20.0 },
                auto_scroll: true,
            },
        );
        assert_eq!(visible(&next), (10.0, 20.0));
    }

    #[test]
    fn malformed_commands_are_errors() {
        let state = initialized(0.0, 100.0);
        let policy = NavigationPolicy::default();
        let bad = [
            TimeWindowCommand::Initialize {
                start: 5.0,
                end: 1.0,
            },
            TimeWindowCommand::zoom(ZoomDirection::In, Some(0.5)),
            TimeWindowCommand::pan_seconds(f64::NAN),
            TimeWindowCommand::pan_percent(PanDirection::Back, Some(-1.0)),
            TimeWindowCommand::SetFocusInterval {
                interval: TimeRange { start: 9.0, end: 3.0 },
                auto_scroll: false,
            },
        ];
        for command in bad {
            let err = transition(&state, &command, &policy).expect_err("malformed");
            assert!(matches!(err, TimelineError::InvalidCommand(_)));
        }
    }

    #[test]
    fn commands_on_uninitialized_state_are_identity() {
        let state = Arc::new(TimeWindowState::uninitialized());
        for command in [
            TimeWindowCommand::pan_seconds(1.0),
            TimeWindowCommand::zoom(ZoomDirection::In, None),
            TimeWindowCommand::focus(1.0),
            TimeWindowCommand::ResetVisibleWindow,
        ] {
            let next = apply(&state, command);
            assert!(Arc::ptr_eq(&state, &next));
        }
    }

    #[test]
    fn commands_round_trip_through_json() {
        let command = TimeWindowCommand::pan_percent(PanDirection::Back, None);
        let json = serde_json::to_string(&command).expect("encode");
        let decoded: TimeWindowCommand = serde_json::from_str(&json).expect("decode");
        assert_eq!(decoded, command);
    }
}
