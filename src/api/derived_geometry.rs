use std::sync::Arc;

use crate::core::{
    FocusGeometry, HighlightSpan, PlacedHighlight, TickCacheStats, TimeTick, TimeTransform,
    project_focus, project_highlight_spans,
};

use super::TimeNavigator;

impl TimeNavigator {
    /// Transform for a panel of `panel_width_px` starting at `offset_px`.
    #[must_use]
    pub fn time_transform(&self, panel_width_px: f64, offset_px: f64) -> TimeTransform {
        TimeTransform::new(panel_width_px, self.state.visible(), offset_px)
    }

    #[must_use]
    pub fn time_to_pixels(&self, times: &[f64], panel_width_px: f64, offset_px: f64) -> Vec<f64> {
        self.time_transform(panel_width_px, offset_px).to_pixels(times)
    }

    /// Recording time at a 0..1 fraction across the visible window.
    #[must_use]
    pub fn pixel_fraction_to_time(&self, fraction: f64) -> Option<f64> {
        self.state.time_for_fraction(fraction)
    }

    /// Time-axis ticks for the current window, memoized per panel geometry.
    pub fn compute_ticks(&mut self, panel_width_px: f64, offset_px: f64) -> Arc<[TimeTick]> {
        let transform = self.time_transform(panel_width_px, offset_px);
        self.ticks.ticks(transform)
    }

    #[must_use]
    pub fn tick_cache_stats(&self) -> TickCacheStats {
        self.ticks.cache_stats()
    }

    pub fn clear_tick_cache(&mut self) {
        self.ticks.clear_cache();
    }

    #[must_use]
    pub fn focus_geometry(&self, panel_width_px: f64, offset_px: f64) -> FocusGeometry {
        project_focus(&self.state, self.time_transform(panel_width_px, offset_px))
    }

    #[must_use]
    pub fn highlight_geometry(
        &self,
        spans: &[HighlightSpan],
        panel_width_px: f64,
        offset_px: f64,
    ) -> Vec<PlacedHighlight> {
        project_highlight_spans(spans, self.time_transform(panel_width_px, offset_px))
    }
}
