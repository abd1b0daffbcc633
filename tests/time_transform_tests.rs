use approx::assert_relative_eq;
use ephys_timeline::core::{
    HighlightSpan, Margins, PanelLayout, PlotTransform2d, TimeRange, TimeTransform, ValueAxis,
    index_range_in_window,
};
use ephys_timeline::{TimeNavigator, TimeNavigatorConfig};

#[test]
fn navigator_transform_tracks_visible_window() {
    let mut navigator = TimeNavigator::new(TimeNavigatorConfig::default()).expect("navigator");
    let layout = PanelLayout::new(1040.0, 600.0, 3, 8.0, Margins::default());
    assert_eq!(layout.panel_width, 980.0);

    assert!(!navigator.time_transform(layout.panel_width, 40.0).is_renderable());
    assert!(navigator.time_to_pixels(&[1.0, 2.0], 980.0, 40.0) == vec![0.0, 0.0]);

    navigator.initialize(0.0, 98.0).expect("init");
    let transform = navigator.time_transform(layout.panel_width, layout.margins.left);
    assert!(transform.is_renderable());
    assert_relative_eq!(transform.pixels_per_second(), 10.0);
    assert_eq!(
        navigator.time_to_pixels(&[0.0, 49.0, 98.0], 980.0, 40.0),
        vec![40.0, 530.0, 1020.0]
    );
    assert_eq!(navigator.pixel_fraction_to_time(0.5), Some(49.0));
}

#[test]
fn clicks_map_back_to_recording_time() {
    let transform = TimeTransform::new(500.0, Some(TimeRange { start: 10.0, end: 20.0 }), 40.0);
    assert_eq!(transform.clamped_fraction(250.0), 0.5);
    assert_eq!(transform.clamped_fraction(-30.0), 0.0);
    assert_eq!(transform.clamped_fraction(900.0), 1.0);
    assert_relative_eq!(transform.fraction_to_time(0.5), 15.0);
    assert_relative_eq!(transform.pixel_to_time(290.0), 15.0);
}

#[test]
fn plot_transform_projects_sample_batches() {
    let time = TimeTransform::new(200.0, Some(TimeRange { start: 0.0, end: 2.0 }), 0.0);
    let plot = PlotTransform2d::new(
        time,
        ValueAxis {
            value_min: 0.0,
            value_max: 100.0,
            top_px: 0.0,
            height_px: 50.0,
            invert: true,
        },
    );
    let samples = [(0.0, 0.0), (1.0, 50.0), (2.0, 100.0)];
    assert_eq!(
        plot.project_points(&samples),
        vec![(0.0, 50.0), (100.0, 25.0), (200.0, 0.0)]
    );
}

#[test]
fn highlights_follow_navigation() {
    let mut navigator = TimeNavigator::new(TimeNavigatorConfig::default()).expect("navigator");
    navigator.initialize(0.0, 100.0).expect("init");
    navigator.set_visible_window(0.0, 10.0).expect("window");

    let spans = [HighlightSpan::new(TimeRange { start: 8.0, end: 12.0 })];
    let placed = navigator.highlight_geometry(&spans, 100.0, 0.0);
    assert_eq!(placed.len(), 1);
    assert_eq!((placed[0].left_px, placed[0].width_px), (80.0, 20.0));

    navigator.pan_by_seconds(50.0).expect("pan away");
    assert!(navigator.highlight_geometry(&spans, 100.0, 0.0).is_empty());
}

#[test]
fn visible_sample_range_uses_window() {
    let times: Vec<f64> = (0..1_000).map(|i| f64::from(i) * 0.01).collect();
    let range = index_range_in_window(&times, TimeRange { start: 2.0, end: 3.0 });
    assert_eq!(range.start, 200);
    assert!(range.end >= 300 && range.end <= 301);
}
