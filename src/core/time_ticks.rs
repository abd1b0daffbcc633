use std::collections::HashMap;
use std::sync::Arc;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::TimeTransform;

/// Units whose ticks would be closer than this are skipped.
pub const MIN_TICK_SPACING_PX: f64 = 50.0;
/// Units whose ticks are at least this far apart are drawn as major.
pub const MAJOR_TICK_SPACING_PX: f64 = 200.0;
/// Units with fewer intervals than this in the window are drawn as major.
const MAJOR_TICK_MIN_INTERVALS: i64 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeTick {
    /// Tick time in recording seconds.
    pub value: f64,
    pub label: String,
    pub major: bool,
    /// Absolute x in the panel's pixel space.
    pub pixel: f64,
}

/// One rung of the tick ladder.
#[derive(Debug, Clone, Copy)]
pub struct TickUnit {
    pub name: &'static str,
    pub seconds_per_tick: f64,
    /// Every `count_per_larger_unit`-th tick belongs to the next rung.
    pub count_per_larger_unit: i64,
    label: fn(i64) -> String,
}

impl TickUnit {
    /// Human label for the tick at `index` multiples of this unit.
    #[must_use]
    pub fn label(&self, index: i64) -> String {
        (self.label)(index)
    }
}

pub const TICK_UNITS: [TickUnit; 11] = [
    TickUnit {
        name: "1ms",
        seconds_per_tick: 0.001,
        count_per_larger_unit: 10,
        label: |a| format!("{} ms", a % 1000),
    },
    TickUnit {
        name: "10ms",
        seconds_per_tick: 0.01,
        count_per_larger_unit: 10,
        label: |a| format!("{} ms", (a * 10) % 1000),
    },
    TickUnit {
        name: "100ms",
        seconds_per_tick: 0.1,
        count_per_larger_unit: 10,
        label: |a| format!("{} ms", (a * 100) % 1000),
    },
    TickUnit {
        name: "1s",
        seconds_per_tick: 1.0,
        count_per_larger_unit: 10,
        label: |a| format!("{} s", a % 60),
    },
    TickUnit {
        name: "10s",
        seconds_per_tick: 10.0,
        count_per_larger_unit: 6,
        label: |a| format!("{} s", (a * 10) % 60),
    },
    TickUnit {
        name: "1min",
        seconds_per_tick: 60.0,
        count_per_larger_unit: 10,
        label: |a| format!("{} min", a % 60),
    },
    TickUnit {
        name: "10min",
        seconds_per_tick: 600.0,
        count_per_larger_unit: 6,
        label: |a| format!("{} min", (a * 10) % 60),
    },
    TickUnit {
        name: "1hr",
        seconds_per_tick: 3_600.0,
        count_per_larger_unit: 6,
        label: |a| format!("{} hr", a % 24),
    },
    TickUnit {
        name: "6hr",
        seconds_per_tick: 21_600.0,
        count_per_larger_unit: 4,
        label: |a| format!("{} hr", (a * 6) % 24),
    },
    TickUnit {
        name: "1day",
        seconds_per_tick: 86_400.0,
        count_per_larger_unit: 10,
        label: |a| format!("{a} day"),
    },
    TickUnit {
        name: "10day",
        seconds_per_tick: 864_000.0,
        count_per_larger_unit: 10_000,
        label: |a| format!("{} day", 10 * a),
    },
];

/// Computes the time-axis ticks for the transform's visible window.
///
/// Each unit contributes only the ticks not already drawn by the next larger
/// unit, so no two ticks share a value. Ticks are grouped by unit, finest
/// first, then ascending in time.
#[must_use]
pub fn compute_time_ticks(transform: TimeTransform) -> Vec<TimeTick> {
    let Some(visible) = transform.visible() else {
        return Vec::new();
    };
    let pixels_per_second = transform.pixels_per_second();

    let mut values = Vec::new();
    let mut pending = Vec::new();
    for unit in &TICK_UNITS {
        let pixels_per_tick = pixels_per_second * unit.seconds_per_tick;
        if pixels_per_tick <= MIN_TICK_SPACING_PX {
            continue;
        }

        let first = (visible.start / unit.seconds_per_tick).ceil() as i64;
        let last = (visible.end / unit.seconds_per_tick).floor() as i64;
        let major = pixels_per_tick > MAJOR_TICK_SPACING_PX
            || last.saturating_sub(first) < MAJOR_TICK_MIN_INTERVALS;

        for index in first..=last {
            if index % unit.count_per_larger_unit == 0 {
                continue;
            }
            let value = index as f64 * unit.seconds_per_tick;
            values.push(value);
            pending.push((value, unit.label(index), major));
        }
    }

    let pixels = transform.to_pixels(&values);
    pending
        .into_iter()
        .zip(pixels)
        .map(|((value, label, major), pixel)| TimeTick {
            value,
            label,
            major,
            pixel,
        })
        .collect()
}

/// Runtime metrics exposed by the tick cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TickCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct TickCacheKey {
    start: OrderedFloat<f64>,
    end: OrderedFloat<f64>,
    panel_width_px: OrderedFloat<f64>,
    offset_px: OrderedFloat<f64>,
}

impl TickCacheKey {
    fn for_transform(transform: TimeTransform) -> Option<Self> {
        let visible = transform.visible()?;
        Some(Self {
            start: OrderedFloat(visible.start),
            end: OrderedFloat(visible.end),
            panel_width_px: OrderedFloat(transform.panel_width_px()),
            offset_px: OrderedFloat(transform.offset_px()),
        })
    }
}

/// Bounded memo of computed tick sets, cleared wholesale on overflow.
#[derive(Debug)]
pub struct TickCache {
    entries: HashMap<TickCacheKey, Arc<[TimeTick]>>,
    max_entries: usize,
    hits: u64,
    misses: u64,
}

impl TickCache {
    pub const DEFAULT_MAX_ENTRIES: usize = 256;

    /// A capacity of zero disables caching.
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(max_entries.min(Self::DEFAULT_MAX_ENTRIES)),
            max_entries,
            hits: 0,
            misses: 0,
        }
    }

    fn get(&mut self, key: &TickCacheKey) -> Option<Arc<[TimeTick]>> {
        let value = self.entries.get(key).cloned();
        if value.is_some() {
            self.hits = self.hits.saturating_add(1);
        }
        value
    }

    fn insert(&mut self, key: TickCacheKey, value: Arc<[TimeTick]>) {
        self.misses = self.misses.saturating_add(1);
        if self.max_entries == 0 {
            return;
        }
        if self.entries.len() >= self.max_entries {
            self.entries.clear();
        }
        self.entries.insert(key, value);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn stats(&self) -> TickCacheStats {
        TickCacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.entries.len(),
        }
    }
}

/// Tick generator owning an explicitly scoped memo cache.
#[derive(Debug)]
pub struct TimeTickGenerator {
    cache: TickCache,
}

impl Default for TimeTickGenerator {
    fn default() -> Self {
        Self::with_cache_capacity(TickCache::DEFAULT_MAX_ENTRIES)
    }
}

impl TimeTickGenerator {
    #[must_use]
    pub fn with_cache_capacity(max_entries: usize) -> Self {
        Self {
            cache: TickCache::with_capacity(max_entries),
        }
    }

    /// Returns the ticks for `transform`, reusing a cached set when the
    /// window and panel geometry are unchanged.
    pub fn ticks(&mut self, transform: TimeTransform) -> Arc<[TimeTick]> {
        let Some(key) = TickCacheKey::for_transform(transform) else {
            return Arc::from(Vec::new());
        };
        if let Some(cached) = self.cache.get(&key) {
            return cached;
        }

        let ticks: Arc<[TimeTick]> = Arc::from(compute_time_ticks(transform));
        trace!(count = ticks.len(), "computed time ticks");
        self.cache.insert(key, Arc::clone(&ticks));
        ticks
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    #[must_use]
    pub fn cache_stats(&self) -> TickCacheStats {
        self.cache.stats()
    }
}
