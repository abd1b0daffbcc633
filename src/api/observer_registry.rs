use tracing::debug;

use crate::core::TimeWindowState;
use crate::error::{TimelineError, TimelineResult};
use crate::extensions::{NavigationObserver, diff_events};

use super::TimeNavigator;

impl TimeNavigator {
    /// Registers an observer under its unique id.
    ///
    /// An observer joining after initialization is first replayed the events
    /// that lead from an empty state to the current one.
    pub fn register_observer(
        &mut self,
        mut observer: Box<dyn NavigationObserver>,
    ) -> TimelineResult<()> {
        let observer_id = observer.id();
        if observer_id.is_empty() {
            return Err(TimelineError::InvalidConfig(
                "observer id must not be empty".to_owned(),
            ));
        }
        if self.has_observer(observer_id) {
            return Err(TimelineError::InvalidConfig(format!(
                "navigation observer `{observer_id}` is already registered"
            )));
        }

        if self.state.is_initialized() {
            let replay = diff_events(&TimeWindowState::uninitialized(), &self.state);
            debug!(
                observer = observer.id(),
                events = replay.len(),
                "replaying state to late observer"
            );
            for event in replay {
                observer.on_event(event, &self.state);
            }
        }
        self.observers.push(observer);
        Ok(())
    }

    /// Removes the observer registered under `observer_id`.
    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        let before = self.observers.len();
        self.observers.retain(|observer| observer.id() != observer_id);
        self.observers.len() != before
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn has_observer(&self, observer_id: &str) -> bool {
        self.observers
            .iter()
            .any(|observer| observer.id() == observer_id)
    }
}
