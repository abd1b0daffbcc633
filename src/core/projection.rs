use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{TimeRange, TimeTransform, TimeWindowState};

/// Pixel geometry for the focus cursor and focus interval of one panel.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FocusGeometry {
    /// X of the focus cursor; `None` when unset or scrolled off screen.
    pub focus_x: Option<f64>,
    /// `(left, right)` of the focus interval, clipped to the visible window.
    pub interval_px: Option<(f64, f64)>,
}

/// Projects the focus cursor and interval of `state` through `transform`.
#[must_use]
pub fn project_focus(state: &TimeWindowState, transform: TimeTransform) -> FocusGeometry {
    let Some(visible) = transform.visible() else {
        return FocusGeometry::default();
    };

    let focus_x = state
        .focus_time()
        .filter(|focus| visible.contains(*focus))
        .map(|focus| transform.to_pixel(focus));
    let interval_px = state
        .focus_interval()
        .and_then(|interval| clip(interval, visible))
        .map(|interval| (transform.to_pixel(interval.start), transform.to_pixel(interval.end)));

    FocusGeometry {
        focus_x,
        interval_px,
    }
}

/// Time interval to shade behind the traces, e.g. a detected event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightSpan {
    pub range: TimeRange,
    pub label: Option<String>,
}

impl HighlightSpan {
    #[must_use]
    pub fn new(range: TimeRange) -> Self {
        Self { range, label: None }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedHighlight {
    pub left_px: f64,
    pub width_px: f64,
    pub label: Option<String>,
}

/// Clips spans to the visible window and converts them to pixel extents.
///
/// Spans entirely off screen are dropped. Output is ordered by left edge.
#[must_use]
pub fn project_highlight_spans(
    spans: &[HighlightSpan],
    transform: TimeTransform,
) -> Vec<PlacedHighlight> {
    let Some(visible) = transform.visible() else {
        return Vec::new();
    };

    let mut placed: Vec<PlacedHighlight> = spans
        .iter()
        .filter_map(|span| {
            let clipped = clip(span.range, visible)?;
            let left_px = transform.to_pixel(clipped.start);
            Some(PlacedHighlight {
                left_px,
                width_px: transform.to_pixel(clipped.end) - left_px,
                label: span.label.clone(),
            })
        })
        .collect();
    placed.sort_by_key(|span| OrderedFloat(span.left_px));
    placed
}

fn clip(range: TimeRange, visible: TimeRange) -> Option<TimeRange> {
    let start = range.start.max(visible.start);
    let end = range.end.min(visible.end);
    (start <= end).then_some(TimeRange { start, end })
}
