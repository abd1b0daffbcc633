use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};

/// Closed time interval in recording seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: f64,
    pub end: f64,
}

impl TimeRange {
    /// Builds a range, rejecting non-finite or reversed endpoints.
    pub fn new(start: f64, end: f64) -> TimelineResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(TimelineError::InvalidCommand(format!(
                "time range must be finite: ({start}, {end})"
            )));
        }
        if end < start {
            return Err(TimelineError::InvalidCommand(format!(
                "time range end precedes start: ({start}, {end})"
            )));
        }
        Ok(Self { start, end })
    }

    /// Builds the range spanning two instants in either order.
    #[must_use]
    pub fn ordered(a: f64, b: f64) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.end - self.start
    }

    #[must_use]
    pub fn midpoint(self) -> f64 {
        self.start + self.span() / 2.0
    }

    #[must_use]
    pub fn contains(self, time: f64) -> bool {
        time >= self.start && time <= self.end
    }

    #[must_use]
    pub fn contains_range(self, other: TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    #[must_use]
    pub fn union(self, other: TimeRange) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }
}

impl From<TimeRange> for (f64, f64) {
    fn from(range: TimeRange) -> Self {
        (range.start, range.end)
    }
}

/// Identifier of a spatial recording channel.
///
/// Sources report either numeric channel indices or string labels, so both
/// forms are accepted and compared by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ElectrodeId {
    Index(i64),
    Name(String),
}

impl fmt::Display for ElectrodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<i64> for ElectrodeId {
    fn from(value: i64) -> Self {
        Self::Index(value)
    }
}

impl From<&str> for ElectrodeId {
    fn from(value: &str) -> Self {
        Self::Name(value.to_owned())
    }
}

impl From<String> for ElectrodeId {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}

/// Pixel margins around the plotting panels of a view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: 40.0,
            right: 20.0,
            top: 20.0,
            bottom: 20.0,
        }
    }
}

/// Size of a single panel in a vertically stacked time-series view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelLayout {
    pub panel_width: f64,
    pub panel_height: f64,
    pub margins: Margins,
}

impl PanelLayout {
    /// Splits a view of `width × height` into `panel_count` stacked panels.
    ///
    /// Results are clamped at zero; a zero-width panel yields a degenerate
    /// (non-renderable) time transform downstream rather than an error.
    #[must_use]
    pub fn new(
        width: f64,
        height: f64,
        panel_count: usize,
        panel_spacing: f64,
        margins: Margins,
    ) -> Self {
        let panel_count = panel_count.max(1);
        let panel_width = (width - margins.left - margins.right).max(0.0);
        let spacing_total = panel_spacing * (panel_count - 1) as f64;
        let panel_height = ((height - margins.top - margins.bottom - spacing_total)
            / panel_count as f64)
            .max(0.0);
        Self {
            panel_width,
            panel_height,
            margins,
        }
    }

    /// Top pixel of the panel at `index`.
    #[must_use]
    pub fn panel_top(self, index: usize, panel_spacing: f64) -> f64 {
        self.margins.top + index as f64 * (self.panel_height + panel_spacing)
    }
}
