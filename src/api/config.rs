use serde::{Deserialize, Serialize};

use crate::core::{NavigationPolicy, TickCache};
use crate::error::TimelineResult;
use crate::interaction::GestureConfig;

/// Bootstrap configuration for a `TimeNavigator`.
///
/// Every field has a default, so a partial JSON document only overrides the
/// keys it names.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeNavigatorConfig {
    pub navigation: NavigationPolicy,
    pub gesture: GestureConfig,
    /// Maximum memoized tick sets; `0` disables the cache.
    pub tick_cache_capacity: usize,
}

impl Default for TimeNavigatorConfig {
    fn default() -> Self {
        Self {
            navigation: NavigationPolicy::default(),
            gesture: GestureConfig::default(),
            tick_cache_capacity: TickCache::DEFAULT_MAX_ENTRIES,
        }
    }
}

impl TimeNavigatorConfig {
    #[must_use]
    pub fn with_navigation(mut self, navigation: NavigationPolicy) -> Self {
        self.navigation = navigation;
        self
    }

    #[must_use]
    pub fn with_gesture(mut self, gesture: GestureConfig) -> Self {
        self.gesture = gesture;
        self
    }

    #[must_use]
    pub fn with_tick_cache_capacity(mut self, capacity: usize) -> Self {
        self.tick_cache_capacity = capacity;
        self
    }

    pub fn validate(self) -> TimelineResult<Self> {
        self.navigation.validate()?;
        self.gesture.validate()?;
        Ok(self)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> TimelineResult<String> {
        Ok(serde_json::to_string_pretty(&self)?)
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()
    }
}
