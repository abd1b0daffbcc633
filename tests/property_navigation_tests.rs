use std::sync::Arc;

use ephys_timeline::core::{
    FocusOptions, NavigationPolicy, PanDirection, TimeRange, TimeWindowCommand, TimeWindowState,
    ZoomDirection, transition,
};
use proptest::prelude::*;

fn command_strategy() -> impl Strategy<Value = TimeWindowCommand> {
    prop_oneof![
        (-500.0f64..500.0).prop_map(TimeWindowCommand::pan_seconds),
        (prop::bool::ANY, 0.0f64..150.0).prop_map(|(forward, percent)| {
            let direction = if forward {
                PanDirection::Forward
            } else {
                PanDirection::Back
            };
            TimeWindowCommand::pan_percent(direction, Some(percent))
        }),
        (prop::bool::ANY, 1.0f64..8.0).prop_map(|(zoom_in, factor)| {
            let direction = if zoom_in {
                ZoomDirection::In
            } else {
                ZoomDirection::Out
            };
            TimeWindowCommand::zoom(direction, Some(factor))
        }),
        (-100.0f64..1_100.0, prop::bool::ANY, prop::bool::ANY).prop_map(
            |(time, shift_extend, auto_scroll)| TimeWindowCommand::SetFocusTime {
                time,
                options: FocusOptions {
                    shift_extend,
                    auto_scroll,
                },
            }
        ),
        (0.0f64..1_000.0, 0.0f64..1_000.0).prop_map(|(start, end)| {
            TimeWindowCommand::SetVisibleWindow { start, end }
        }),
        (-200.0f64..500.0, 500.0f64..1_200.0)
            .prop_map(|(start, end)| TimeWindowCommand::Initialize { start, end }),
        Just(TimeWindowCommand::ResetVisibleWindow),
        Just(TimeWindowCommand::ClearFocus),
    ]
}

fn initialized(start: f64, end: f64) -> Arc<TimeWindowState> {
    transition(
        &Arc::new(TimeWindowState::uninitialized()),
        &TimeWindowCommand::Initialize { start, end },
        &NavigationPolicy::default(),
    )
    .expect("initialize")
}

proptest! {
    #[test]
    fn random_command_sequences_keep_state_valid(
        commands in proptest::collection::vec(command_strategy(), 1..48)
    ) {
        let policy = NavigationPolicy::default();
        let mut state = initialized(0.0, 1_000.0);
        for command in &commands {
            state = transition(&state, command, &policy).expect("well-formed command");
            prop_assert!(state.validate().is_ok(), "{} broke the state", command.name());

            let recording = state.recording().expect("recording");
            let visible = state.visible().expect("visible");
            prop_assert!(recording.contains_range(visible));
            if let Some(interval) = state.focus_interval() {
                prop_assert!(interval.start <= interval.end);
            }
        }
    }

    #[test]
    fn pan_keeps_window_length_and_stays_in_bounds(
        window_start in 0.0f64..900.0,
        window_length in 1.0f64..100.0,
        delta in -2_000.0f64..2_000.0
    ) {
        let policy = NavigationPolicy::default();
        let state = initialized(0.0, 1_000.0);
        let state = transition(
            &state,
            &TimeWindowCommand::SetVisibleWindow {
                start: window_start,
                end: window_start + window_length,
            },
            &policy,
        )
        .expect("window");
        let before = state.visible().expect("visible");

        let panned = transition(&state, &TimeWindowCommand::pan_seconds(delta), &policy)
            .expect("pan");
        let after = panned.visible().expect("visible");

        prop_assert!((after.span() - before.span()).abs() <= 1e-9);
        prop_assert!(after.start >= 0.0 && after.end <= 1_000.0);
    }

    #[test]
    fn zoom_in_keeps_focus_at_same_fraction(
        window_start in 0.0f64..500.0,
        window_length in 10.0f64..400.0,
        focus_fraction in 0.0f64..1.0,
        factor in 1.01f64..6.0
    ) {
        let policy = NavigationPolicy::default();
        let state = initialized(0.0, 1_000.0);
        let state = transition(
            &state,
            &TimeWindowCommand::SetVisibleWindow {
                start: window_start,
                end: window_start + window_length,
            },
            &policy,
        )
        .expect("window");
        let window: TimeRange = state.visible().expect("visible");
        let focus = (window.start + focus_fraction * window.span()).min(window.end);
        let focus_fraction = (focus - window.start) / window.span();
        let state = transition(&state, &TimeWindowCommand::focus(focus), &policy).expect("focus");
        prop_assert_eq!(state.focus_time(), Some(focus));

        let zoomed = transition(
            &state,
            &TimeWindowCommand::zoom(ZoomDirection::In, Some(factor)),
            &policy,
        )
        .expect("zoom");
        let after = zoomed.visible().expect("visible");

        prop_assert!((after.span() - window.span() / factor).abs() <= 1e-6);
        prop_assert!(after.contains(focus));
        let fraction = (focus - after.start) / after.span();
        prop_assert!((fraction - focus_fraction).abs() <= 1e-6);
    }

    #[test]
    fn commands_at_the_limits_return_the_same_snapshot(
        start in -1_000.0f64..1_000.0,
        span in 0.01f64..1_000.0,
        factor in 1.0f64..10.0,
        percent in 0.0f64..100.0
    ) {
        let policy = NavigationPolicy::default();
        let state = initialized(start, start + span);

        let zoomed_out = transition(
            &state,
            &TimeWindowCommand::zoom(ZoomDirection::Out, Some(factor)),
            &policy,
        )
        .expect("zoom out");
        prop_assert!(Arc::ptr_eq(&state, &zoomed_out));

        for direction in [PanDirection::Back, PanDirection::Forward] {
            let panned = transition(
                &state,
                &TimeWindowCommand::pan_percent(direction, Some(percent)),
                &policy,
            )
            .expect("pan");
            prop_assert!(Arc::ptr_eq(&state, &panned));
        }

        let reinitialized = transition(
            &state,
            &TimeWindowCommand::Initialize { start, end: start + span },
            &policy,
        )
        .expect("initialize");
        prop_assert!(Arc::ptr_eq(&state, &reinitialized));
    }
}
