use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{TimeRange, TimeWindowState};

/// Change notification emitted after a navigation command replaced the state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NavigationEvent {
    /// Recording bounds were set for the first time or widened.
    Initialized { recording: TimeRange },
    VisibleWindowChanged { start: f64, end: f64 },
    FocusChanged {
        focus_time: Option<f64>,
        focus_interval: Option<TimeRange>,
    },
    SelectionChanged { selected_len: usize },
}

/// Observer hook for hosts that react to navigation (redraw, sync, persist).
///
/// Observers read the new snapshot but never mutate it; follow-up navigation
/// goes through the command channel.
pub trait NavigationObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: NavigationEvent, state: &TimeWindowState);
}

/// Events describing how `next` differs from `previous`, in a fixed order.
#[must_use]
pub fn diff_events(
    previous: &TimeWindowState,
    next: &TimeWindowState,
) -> SmallVec<[NavigationEvent; 4]> {
    let mut events = SmallVec::new();

    if let Some(recording) = next.recording() {
        if previous.recording() != Some(recording) {
            events.push(NavigationEvent::Initialized { recording });
        }
    }
    if let Some(visible) = next.visible() {
        if previous.visible() != Some(visible) {
            events.push(NavigationEvent::VisibleWindowChanged {
                start: visible.start,
                end: visible.end,
            });
        }
    }
    if previous.focus_time() != next.focus_time()
        || previous.focus_interval() != next.focus_interval()
    {
        events.push(NavigationEvent::FocusChanged {
            focus_time: next.focus_time(),
            focus_interval: next.focus_interval(),
        });
    }
    if previous.selected_electrode_ids() != next.selected_electrode_ids() {
        events.push(NavigationEvent::SelectionChanged {
            selected_len: next.selected_electrode_ids().len(),
        });
    }
    events
}
