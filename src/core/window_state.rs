use std::sync::Arc;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{ElectrodeId, TimeRange};

/// Rule broken by a candidate navigation state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StateViolation {
    #[error("recording bounds are not initialized")]
    Uninitialized,

    #[error("non-finite time in state")]
    NonFinite,

    #[error("visible window ({visible_start}, {visible_end}) escapes recording ({recording_start}, {recording_end})")]
    WindowOutsideRecording {
        recording_start: f64,
        recording_end: f64,
        visible_start: f64,
        visible_end: f64,
    },

    #[error("focus time {focus} is outside visible window ({visible_start}, {visible_end})")]
    FocusOutsideWindow {
        focus: f64,
        visible_start: f64,
        visible_end: f64,
    },

    #[error("focus interval ({start}, {end}) is not ordered")]
    UnorderedFocusInterval { start: f64, end: f64 },

    #[error("electrode {0} is not known to the owning view")]
    UnknownElectrode(ElectrodeId),
}

/// Immutable navigation snapshot shared by every view under one root.
///
/// Views hold `Arc<TimeWindowState>` and never mutate it; transitions build a
/// new snapshot, so `Arc::ptr_eq` tells a reader whether anything changed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeWindowState {
    recording: Option<TimeRange>,
    visible: Option<TimeRange>,
    focus_time: Option<f64>,
    focus_interval: Option<TimeRange>,
    selected_electrode_ids: IndexSet<ElectrodeId>,
    #[serde(skip)]
    electrode_universe: Option<Arc<IndexSet<ElectrodeId>>>,
}

impl TimeWindowState {
    /// Empty sentinel used before any view has reported recording bounds.
    #[must_use]
    pub fn uninitialized() -> Self {
        Self::default()
    }

    /// Sentinel restricted to the electrode ids known by the owning view.
    #[must_use]
    pub fn with_electrode_universe<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = ElectrodeId>,
    {
        Self {
            electrode_universe: Some(Arc::new(ids.into_iter().collect())),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.recording.is_some() && self.visible.is_some()
    }

    #[must_use]
    pub fn recording(&self) -> Option<TimeRange> {
        self.recording
    }

    #[must_use]
    pub fn visible(&self) -> Option<TimeRange> {
        self.visible
    }

    #[must_use]
    pub fn focus_time(&self) -> Option<f64> {
        self.focus_time
    }

    #[must_use]
    pub fn focus_interval(&self) -> Option<TimeRange> {
        self.focus_interval
    }

    #[must_use]
    pub fn selected_electrode_ids(&self) -> &IndexSet<ElectrodeId> {
        &self.selected_electrode_ids
    }

    #[must_use]
    pub fn electrode_universe(&self) -> Option<&IndexSet<ElectrodeId>> {
        self.electrode_universe.as_deref()
    }

    /// Whether the focus time is set and currently on screen.
    #[must_use]
    pub fn focus_time_is_visible(&self) -> bool {
        match (self.focus_time, self.visible) {
            (Some(focus), Some(visible)) => visible.contains(focus),
            _ => false,
        }
    }

    /// Maps a 0..1 fraction of the visible window to recording time.
    #[must_use]
    pub fn time_for_fraction(&self, fraction: f64) -> Option<f64> {
        self.visible
            .map(|visible| visible.start + visible.span() * fraction)
    }

    /// Checks every state invariant, reporting the first violation.
    pub fn validate(&self) -> Result<(), StateViolation> {
        let (Some(recording), Some(visible)) = (self.recording, self.visible) else {
            return Err(StateViolation::Uninitialized);
        };
        if !recording.is_finite() || !visible.is_finite() {
            return Err(StateViolation::NonFinite);
        }
        if recording.end < recording.start
            || visible.end < visible.start
            || !recording.contains_range(visible)
        {
            return Err(StateViolation::WindowOutsideRecording {
                recording_start: recording.start,
                recording_end: recording.end,
                visible_start: visible.start,
                visible_end: visible.end,
            });
        }
        if let Some(focus) = self.focus_time {
            if !focus.is_finite() {
                return Err(StateViolation::NonFinite);
            }
            if !visible.contains(focus) {
                return Err(StateViolation::FocusOutsideWindow {
                    focus,
                    visible_start: visible.start,
                    visible_end: visible.end,
                });
            }
        }
        if let Some(interval) = self.focus_interval {
            if !interval.is_finite() {
                return Err(StateViolation::NonFinite);
            }
            if interval.end < interval.start {
                return Err(StateViolation::UnorderedFocusInterval {
                    start: interval.start,
                    end: interval.end,
                });
            }
        }
        if let Some(universe) = self.electrode_universe.as_deref() {
            if let Some(unknown) = self
                .selected_electrode_ids
                .iter()
                .find(|id| !universe.contains(*id))
            {
                return Err(StateViolation::UnknownElectrode(unknown.clone()));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub(crate) fn set_bounds(&mut self, recording: TimeRange, visible: TimeRange) {
        self.recording = Some(recording);
        self.visible = Some(visible);
    }

    pub(crate) fn set_visible(&mut self, visible: TimeRange) {
        self.visible = Some(visible);
    }

    pub(crate) fn set_focus_time(&mut self, focus: Option<f64>) {
        self.focus_time = focus;
    }

    pub(crate) fn set_focus_interval(&mut self, interval: Option<TimeRange>) {
        self.focus_interval = interval;
    }

    pub(crate) fn set_selected_electrode_ids(&mut self, ids: IndexSet<ElectrodeId>) {
        self.selected_electrode_ids = ids;
    }
}
