use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::{
    ElectrodeId, FocusOptions, PanDirection, TimeRange, TimeWindowCommand, ZoomDirection,
    transition,
};
use crate::error::TimelineResult;
use crate::extensions::diff_events;

use super::TimeNavigator;

impl TimeNavigator {
    /// Applies one command. Returns `true` when the state was replaced.
    ///
    /// Malformed commands are returned as errors; well-formed commands that
    /// would break an invariant leave the state untouched.
    pub fn dispatch(&mut self, command: TimeWindowCommand) -> TimelineResult<bool> {
        let next = transition(&self.state, &command, &self.config.navigation)?;
        if Arc::ptr_eq(&next, &self.state) {
            return Ok(false);
        }

        let previous = std::mem::replace(&mut self.state, next);
        let events = diff_events(&previous, &self.state);
        for event in events {
            for observer in &mut self.observers {
                observer.on_event(event, &self.state);
            }
        }
        Ok(true)
    }

    /// Drains the command channel, applying commands in arrival order.
    ///
    /// Malformed queued commands are logged and skipped. Returns how many
    /// commands replaced the state.
    pub fn process_pending(&mut self) -> usize {
        let mut changed = 0;
        while let Ok(command) = self.receiver.try_recv() {
            let name = command.name();
            match self.dispatch(command) {
                Ok(true) => changed += 1,
                Ok(false) => {}
                Err(err) => warn!(command = name, error = %err, "skipping queued navigation command"),
            }
        }
        if changed > 0 {
            debug!(changed, "processed queued navigation commands");
        }
        changed
    }

    pub fn initialize(&mut self, start: f64, end: f64) -> TimelineResult<bool> {
        self.dispatch(TimeWindowCommand::Initialize { start, end })
    }

    /// Pans by a percentage of the window; `None` uses the policy default.
    pub fn pan(&mut self, direction: PanDirection, percent: Option<f64>) -> TimelineResult<bool> {
        self.dispatch(TimeWindowCommand::pan_percent(direction, percent))
    }

    pub fn pan_by_seconds(&mut self, delta: f64) -> TimelineResult<bool> {
        self.dispatch(TimeWindowCommand::pan_seconds(delta))
    }

    pub fn zoom(&mut self, direction: ZoomDirection, factor: Option<f64>) -> TimelineResult<bool> {
        self.dispatch(TimeWindowCommand::zoom(direction, factor))
    }

    pub fn set_focus_time(&mut self, time: f64, options: FocusOptions) -> TimelineResult<bool> {
        self.dispatch(TimeWindowCommand::SetFocusTime { time, options })
    }

    pub fn set_focus_interval(
        &mut self,
        interval: TimeRange,
        auto_scroll: bool,
    ) -> TimelineResult<bool> {
        self.dispatch(TimeWindowCommand::SetFocusInterval {
            interval,
            auto_scroll,
        })
    }

    pub fn set_selected_electrode_ids<I, T>(&mut self, ids: I) -> TimelineResult<bool>
    where
        I: IntoIterator<Item = T>,
        T: Into<ElectrodeId>,
    {
        self.dispatch(TimeWindowCommand::SetSelectedElectrodeIds {
            ids: ids.into_iter().map(Into::into).collect(),
        })
    }

    pub fn set_visible_window(&mut self, start: f64, end: f64) -> TimelineResult<bool> {
        self.dispatch(TimeWindowCommand::SetVisibleWindow { start, end })
    }

    pub fn reset_visible_window(&mut self) -> TimelineResult<bool> {
        self.dispatch(TimeWindowCommand::ResetVisibleWindow)
    }

    pub fn clear_focus(&mut self) -> TimelineResult<bool> {
        self.dispatch(TimeWindowCommand::ClearFocus)
    }
}
