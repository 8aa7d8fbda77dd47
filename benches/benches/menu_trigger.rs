// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use ui_events::keyboard::{Key, Modifiers, NamedKey};
use understory_event_state::long_press::LongPressState;
use understory_event_state::pointer::PointerKind;
use understory_event_state::press::PressState;
use understory_menu_trigger::MenuTrigger;
use understory_menu_trigger::config::{ActivationMode, TriggerConfig};
use understory_menu_trigger::event::KeyInput;
use understory_menu_trigger::overlay::AriaOverlayTrigger;
use understory_menu_trigger::state::MenuTriggerState;

fn bench_props(c: &mut Criterion) {
    let mut group = c.benchmark_group("menu_trigger/props");
    let overlay = AriaOverlayTrigger::new();
    let state = MenuTriggerState::new();

    for mode in [ActivationMode::Press, ActivationMode::LongPress] {
        let trigger = MenuTrigger::new(TriggerConfig::new().with_activation(mode), Some(1_u32));
        group.bench_with_input(BenchmarkId::new("build", mode), &trigger, |b, trigger| {
            b.iter(|| black_box(trigger.props(&state, &overlay)));
        });
        group.bench_with_input(BenchmarkId::new("attrs", mode), &trigger, |b, trigger| {
            let aria = trigger.props(&state, &overlay);
            b.iter(|| black_box(aria.trigger.attributes()));
        });
    }

    group.finish();
}

fn bench_key_down(c: &mut Criterion) {
    let mut group = c.benchmark_group("menu_trigger/key_down");
    let trigger = MenuTrigger::new(TriggerConfig::new(), Some(1_u32));
    let handler = trigger.key_down_handler();

    for (name, key) in [
        ("arrow_down", Key::Named(NamedKey::ArrowDown)),
        ("enter", Key::Named(NamedKey::Enter)),
        ("space", Key::Character(" ".to_string())),
        ("ignored", Key::Named(NamedKey::Tab)),
    ] {
        group.bench_function(name, |b| {
            b.iter_batched(
                || {
                    (
                        MenuTriggerState::new(),
                        KeyInput::new(key.clone(), Modifiers::empty()),
                    )
                },
                |(mut state, mut input)| {
                    black_box(handler.on_key_down(&mut state, &mut input));
                    black_box((state, input));
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_gestures(c: &mut Criterion) {
    let mut group = c.benchmark_group("menu_trigger/gestures");

    let press_trigger = MenuTrigger::new(TriggerConfig::new(), Some(1_u32));
    let press_activation = press_trigger.activation().clone();
    group.bench_function("touch_press", |b| {
        b.iter_batched(
            || (MenuTriggerState::new(), PressState::<u32>::new()),
            |(mut state, mut press)| {
                if let Some(handlers) = press_activation.press() {
                    if let Some(start) = press.on_down(1, PointerKind::Touch) {
                        handlers.on_press_start(&mut state, start.pointer);
                    }
                    if let Some(release) = press.on_up() {
                        handlers.on_release(&mut state, &release);
                    }
                }
                black_box(state);
            },
            BatchSize::SmallInput,
        );
    });

    let long_trigger = MenuTrigger::new(
        TriggerConfig::new().with_activation(ActivationMode::LongPress),
        Some(1_u32),
    );
    let long_activation = long_trigger.activation().clone();
    group.bench_function("long_press", |b| {
        b.iter_batched(
            || (MenuTriggerState::new(), LongPressState::default()),
            |(mut state, mut recognizer)| {
                if let Some(handlers) = long_activation.long_press() {
                    let events = [
                        recognizer.on_down(Point::new(1.0, 1.0), 0, PointerKind::Touch),
                        recognizer.on_move(Point::new(2.0, 2.0)),
                        recognizer.on_tick(500),
                        recognizer.on_up(),
                    ];
                    for event in events.into_iter().flatten() {
                        handlers.on_event(&mut state, event);
                    }
                }
                black_box(state);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_props, bench_key_down, bench_gestures);
criterion_main!(benches);
