pub mod projection;
pub mod scale;
pub mod time_ticks;
pub mod transition;
pub mod types;
pub mod value_ticks;
pub mod window_state;
pub mod windowing;

pub use projection::{
    FocusGeometry, HighlightSpan, PlacedHighlight, project_focus, project_highlight_spans,
};
pub use scale::{LinearScale, PlotTransform2d, TimeTransform, ValueAxis};
pub use time_ticks::{
    TICK_UNITS, TickCache, TickCacheStats, TickUnit, TimeTick, TimeTickGenerator,
    compute_time_ticks,
};
pub use transition::{
    DEFAULT_MIN_WINDOW_SECONDS, DEFAULT_PAN_PERCENT, DEFAULT_ZOOM_FACTOR, FocusOptions,
    NavigationPolicy, PanAmount, PanDirection, ReinitializePolicy, TimeWindowCommand,
    ZoomDirection, transition,
};
pub use types::{ElectrodeId, Margins, PanelLayout, TimeRange};
pub use value_ticks::{ValueTick, compute_value_ticks};
pub use window_state::{StateViolation, TimeWindowState};
pub use windowing::{frame_at_or_before, index_range_in_window, samples_in_window};
