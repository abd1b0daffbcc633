use criterion::{Criterion, criterion_group, criterion_main};
use ephys_timeline::core::{
    FocusOptions, NavigationPolicy, TimeRange, TimeTickGenerator, TimeTransform,
    TimeWindowCommand, TimeWindowState, ZoomDirection, compute_time_ticks, transition,
};
use std::hint::black_box;
use std::sync::Arc;

fn bench_transition_sequence(c: &mut Criterion) {
    let policy = NavigationPolicy::default();
    let initial = transition(
        &Arc::new(TimeWindowState::uninitialized()),
        &TimeWindowCommand::Initialize {
            start: 0.0,
            end: 3_600.0,
        },
        &policy,
    )
    .expect("initialize");
    let commands = [
        TimeWindowCommand::zoom(ZoomDirection::In, Some(4.0)),
        TimeWindowCommand::SetFocusTime {
            time: 1_800.0,
            options: FocusOptions::default(),
        },
        TimeWindowCommand::pan_seconds(12.5),
        TimeWindowCommand::zoom(ZoomDirection::In, None),
        TimeWindowCommand::pan_seconds(-40.0),
        TimeWindowCommand::zoom(ZoomDirection::Out, Some(2.0)),
    ];

    c.bench_function("transition_sequence_6", |b| {
        b.iter(|| {
            let mut state = Arc::clone(&initial);
            for command in &commands {
                state = transition(&state, black_box(command), &policy).expect("transition");
            }
            state
        })
    });
}

fn bench_time_projection_100k(c: &mut Criterion) {
    let transform = TimeTransform::new(
        1_880.0,
        Some(TimeRange::new(0.0, 10.0).expect("range")),
        40.0,
    );
    let times: Vec<f64> = (0..100_000).map(|i| f64::from(i) * 1e-4).collect();

    c.bench_function("time_projection_100k", |b| {
        b.iter(|| transform.to_pixels(black_box(&times)))
    });
}

fn bench_tick_generation(c: &mut Criterion) {
    let transform = TimeTransform::new(
        1_880.0,
        Some(TimeRange::new(12.25, 317.5).expect("range")),
        40.0,
    );

    c.bench_function("time_ticks_uncached", |b| {
        b.iter(|| compute_time_ticks(black_box(transform)))
    });

    let mut generator = TimeTickGenerator::default();
    c.bench_function("time_ticks_cached", |b| {
        b.iter(|| generator.ticks(black_box(transform)))
    });
}

criterion_group!(
    benches,
    bench_transition_sequence,
    bench_time_projection_100k,
    bench_tick_generation
);
criterion_main!(benches);
