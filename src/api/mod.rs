use std::sync::Arc;
use std::sync::mpsc::Receiver;

use indexmap::IndexSet;

use crate::core::{
    ElectrodeId, NavigationPolicy, TimeRange, TimeTickGenerator, TimeWindowCommand,
    TimeWindowState,
};
use crate::error::TimelineResult;
use crate::extensions::NavigationObserver;
use crate::interaction::{CommandSender, GestureInteractionLayer, command_channel};

mod config;
mod derived_geometry;
mod navigation_controller;
mod observer_registry;

pub use config::TimeNavigatorConfig;

/// Single writer of the navigation state shared by every view under one root.
///
/// Views read cheap `Arc` snapshots through `state()`; gestures and other
/// threads enqueue commands through a `CommandSender`, applied in order by
/// `process_pending`.
pub struct TimeNavigator {
    state: Arc<TimeWindowState>,
    config: TimeNavigatorConfig,
    sender: CommandSender,
    receiver: Receiver<TimeWindowCommand>,
    ticks: TimeTickGenerator,
    observers: Vec<Box<dyn NavigationObserver>>,
}

impl TimeNavigator {
    pub fn new(config: TimeNavigatorConfig) -> TimelineResult<Self> {
        Self::with_initial_state(config, TimeWindowState::uninitialized())
    }

    /// Navigator whose electrode selection is restricted to `ids`.
    pub fn with_electrode_universe<I>(config: TimeNavigatorConfig, ids: I) -> TimelineResult<Self>
    where
        I: IntoIterator<Item = ElectrodeId>,
    {
        Self::with_initial_state(config, TimeWindowState::with_electrode_universe(ids))
    }

    fn with_initial_state(
        config: TimeNavigatorConfig,
        state: TimeWindowState,
    ) -> TimelineResult<Self> {
        let config = config.validate()?;
        let (sender, receiver) = command_channel();
        Ok(Self {
            state: Arc::new(state),
            config,
            sender,
            receiver,
            ticks: TimeTickGenerator::with_cache_capacity(config.tick_cache_capacity),
            observers: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> TimeNavigatorConfig {
        self.config
    }

    #[must_use]
    pub fn policy(&self) -> NavigationPolicy {
        self.config.navigation
    }

    /// Current snapshot; compare with `Arc::ptr_eq` to detect changes.
    #[must_use]
    pub fn state(&self) -> Arc<TimeWindowState> {
        Arc::clone(&self.state)
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.state.is_initialized()
    }

    #[must_use]
    pub fn visible_window(&self) -> Option<TimeRange> {
        self.state.visible()
    }

    #[must_use]
    pub fn recording_range(&self) -> Option<TimeRange> {
        self.state.recording()
    }

    #[must_use]
    pub fn focus_time(&self) -> Option<f64> {
        self.state.focus_time()
    }

    #[must_use]
    pub fn focus_interval(&self) -> Option<TimeRange> {
        self.state.focus_interval()
    }

    #[must_use]
    pub fn focus_time_is_visible(&self) -> bool {
        self.state.focus_time_is_visible()
    }

    #[must_use]
    pub fn selected_electrode_ids(&self) -> &IndexSet<ElectrodeId> {
        self.state.selected_electrode_ids()
    }

    /// Cloneable handle for enqueuing commands from gestures or other threads.
    #[must_use]
    pub fn command_sender(&self) -> CommandSender {
        self.sender.clone()
    }

    /// Gesture handling for one view, wired to this navigator's channel.
    #[must_use]
    pub fn gesture_layer(&self) -> GestureInteractionLayer<CommandSender> {
        GestureInteractionLayer::new(self.command_sender(), self.config.gesture)
    }
}
