use std::ops::Range;

use crate::core::TimeRange;

/// Index range of `sorted_times` falling inside an inclusive time window.
///
/// `sorted_times` must be ascending; the lookup is two binary searches.
#[must_use]
pub fn index_range_in_window(sorted_times: &[f64], window: TimeRange) -> Range<usize> {
    let start = sorted_times.partition_point(|time| *time < window.start);
    let end = sorted_times.partition_point(|time| *time <= window.end);
    start..end.max(start)
}

/// Returns `(time, value)` samples whose time falls inside an inclusive window.
///
/// Samples must be ordered by time.
#[must_use]
pub fn samples_in_window(samples: &[(f64, f64)], window: TimeRange) -> &[(f64, f64)] {
    let start = samples.partition_point(|(time, _)| *time < window.start);
    let end = samples.partition_point(|(time, _)| *time <= window.end);
    &samples[start..end.max(start)]
}

/// Index of the last frame at or before `time`, used to sync a frame-based
/// animation to the focus cursor.
#[must_use]
pub fn frame_at_or_before(sorted_times: &[f64], time: f64) -> Option<usize> {
    sorted_times
        .partition_point(|frame| *frame <= time)
        .checked_sub(1)
}
