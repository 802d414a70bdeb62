//! Headless integration tests for the clock face plugin.
//!
//! Run with: `cargo test -p dialface-bevy`

use bevy::prelude::*;
use chrono::NaiveTime;

use dialface_bevy::components::{HourTickAnchor, MinuteTickAnchor};
use dialface_bevy::{
    ClockFace, ClockFaceBuilt, ClockFacePrefabs, ClockFaceSettings, ClockFaceSystems, ClockHand,
    DialfacePlugin, HourTick, MinuteTick, Prefab, WallClock,
};
use dialface_core::{ClockFaceConfig, HandKind, ManualClock, Sweep};

const EPSILON: f32 = 1e-4;

#[derive(Resource, Default)]
struct BuiltLog(Vec<ClockFaceBuilt>);

fn record_built(mut messages: MessageReader<ClockFaceBuilt>, mut log: ResMut<BuiltLog>) {
    log.0.extend(messages.read().cloned());
}

fn placeholder_prefabs() -> ClockFacePrefabs {
    let prefab = Prefab::new(Handle::default(), Handle::default());
    ClockFacePrefabs {
        hour_tick: Some(prefab.clone()),
        minute_tick: Some(prefab.clone()),
        hours_hand: Some(prefab.clone()),
        minutes_hand: Some(prefab.clone()),
        seconds_hand: Some(prefab),
    }
}

fn test_app(clock: &ManualClock, prefabs: ClockFacePrefabs) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(WallClock::new(clock.clone()))
        .insert_resource(prefabs)
        .init_resource::<BuiltLog>()
        .add_plugins(DialfacePlugin)
        .add_systems(Update, record_built.after(ClockFaceSystems::Build));
    app
}

fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, s).unwrap()
}

fn hand_rotation(app: &mut App, kind: HandKind) -> Quat {
    let mut query = app.world_mut().query::<(&ClockHand, &Transform)>();
    query
        .iter(app.world())
        .find(|(hand, _)| hand.kind == kind)
        .map(|(_, transform)| transform.rotation)
        .expect("hand not spawned")
}

fn assert_hand_angle(app: &mut App, kind: HandKind, degrees: f32) {
    let actual = hand_rotation(app, kind);
    let expected = Quat::from_rotation_z(Sweep::Clockwise.signed(degrees).to_radians());
    assert!(
        actual.abs_diff_eq(expected, EPSILON) || actual.abs_diff_eq(-expected, EPSILON),
        "{} hand: {actual:?} vs {degrees}°",
        kind.label()
    );
}

fn count<C: Component>(app: &mut App) -> usize {
    let mut query = app.world_mut().query_filtered::<Entity, With<C>>();
    query.iter(app.world()).count()
}

#[test]
fn builds_ticks_and_hands() {
    let clock = ManualClock::new(hms(3, 0, 0));
    let mut app = test_app(&clock, placeholder_prefabs());
    app.world_mut().spawn(ClockFace::default());
    app.update();

    assert_eq!(count::<HourTick>(&mut app), 12);
    assert_eq!(count::<MinuteTick>(&mut app), 48);
    assert_eq!(count::<ClockHand>(&mut app), 3);
    assert_eq!(count::<HourTickAnchor>(&mut app), 1);
    assert_eq!(count::<MinuteTickAnchor>(&mut app), 1);

    let log = &app.world().resource::<BuiltLog>().0;
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].hour_ticks, 12);
    assert_eq!(log[0].minute_ticks, 48);
}

#[test]
fn face_builds_only_once() {
    let clock = ManualClock::new(hms(3, 0, 0));
    let mut app = test_app(&clock, placeholder_prefabs());
    app.world_mut().spawn(ClockFace::default());
    app.update();
    app.update();
    app.update();

    assert_eq!(count::<HourTick>(&mut app), 12);
    assert_eq!(count::<ClockHand>(&mut app), 3);
    assert_eq!(app.world().resource::<BuiltLog>().0.len(), 1);
}

#[test]
fn reinserted_face_is_rebuilt_without_duplicates() {
    let clock = ManualClock::new(hms(3, 0, 0));
    let mut app = test_app(&clock, placeholder_prefabs());
    let face = app.world_mut().spawn(ClockFace::default()).id();
    app.update();

    app.world_mut().entity_mut(face).remove::<ClockFace>();
    app.update();
    app.world_mut().entity_mut(face).insert(ClockFace::default());
    app.update();

    assert_eq!(count::<ClockHand>(&mut app), 3);
    assert_eq!(count::<HourTick>(&mut app), 12);
    assert_eq!(count::<MinuteTick>(&mut app), 48);
    assert_eq!(count::<HourTickAnchor>(&mut app), 1);
    assert_eq!(count::<MinuteTickAnchor>(&mut app), 1);
    assert_eq!(app.world().resource::<BuiltLog>().0.len(), 2);
}

#[test]
fn three_oclock_then_half_a_minute_later() {
    let clock = ManualClock::new(hms(3, 0, 0));
    let mut app = test_app(&clock, placeholder_prefabs());
    app.world_mut().spawn(ClockFace::default());
    app.update();

    assert_hand_angle(&mut app, HandKind::Hours, 90.0);
    assert_hand_angle(&mut app, HandKind::Minutes, 0.0);
    assert_hand_angle(&mut app, HandKind::Seconds, 0.0);

    clock.set(hms(3, 0, 30));
    app.update();

    assert_hand_angle(&mut app, HandKind::Seconds, 180.0);
    assert_hand_angle(&mut app, HandKind::Minutes, 3.0);
    assert_hand_angle(&mut app, HandKind::Hours, 90.25);
}

#[test]
fn update_is_idempotent() {
    let clock = ManualClock::new(NaiveTime::from_hms_milli_opt(10, 9, 8, 250).unwrap());
    let mut app = test_app(&clock, placeholder_prefabs());
    app.world_mut().spawn(ClockFace::default());
    app.update();

    let before = HandKind::ALL.map(|kind| hand_rotation(&mut app, kind));
    app.update();
    let after = HandKind::ALL.map(|kind| hand_rotation(&mut app, kind));
    assert_eq!(before, after);
}

#[test]
fn hands_stacked_toward_viewer() {
    let clock = ManualClock::new(hms(0, 0, 0));
    let mut app = test_app(&clock, placeholder_prefabs());
    let face = app.world_mut().spawn(ClockFace::default()).id();
    app.update();

    let mut query = app.world_mut().query::<(&ClockHand, &Transform, &ChildOf)>();
    let mut depths: Vec<(HandKind, f32)> = query
        .iter(app.world())
        .map(|(hand, transform, parent)| {
            assert_eq!(parent.parent(), face);
            assert_eq!(transform.translation.truncate(), Vec2::ZERO);
            (hand.kind, transform.translation.z)
        })
        .collect();
    depths.sort_by(|a, b| a.1.total_cmp(&b.1));
    let order: Vec<HandKind> = depths.iter().map(|(kind, _)| *kind).collect();
    assert_eq!(order, HandKind::ALL.to_vec());
}

#[test]
fn hour_ticks_use_supplied_anchor() {
    let clock = ManualClock::new(hms(0, 0, 0));
    let mut app = test_app(&clock, placeholder_prefabs());
    let anchor = app.world_mut().spawn(Transform::default()).id();
    app.world_mut().spawn(ClockFace {
        hour_anchor: Some(anchor),
        minute_anchor: None,
    });
    app.update();

    assert_eq!(count::<HourTickAnchor>(&mut app), 0);
    assert_eq!(count::<MinuteTickAnchor>(&mut app), 1);

    let mut query = app.world_mut().query::<(&HourTick, &ChildOf, &Transform)>();
    let ticks: Vec<_> = query.iter(app.world()).collect();
    assert_eq!(ticks.len(), 12);
    for (tick, parent, transform) in ticks {
        assert_eq!(parent.parent(), anchor);
        assert!((transform.translation.length() - 4.0).abs() < EPSILON, "tick {}", tick.step);
    }
}

#[test]
fn counter_clockwise_sweep() {
    let clock = ManualClock::new(hms(0, 0, 15));
    let mut app = test_app(&clock, placeholder_prefabs());
    app.insert_resource(ClockFaceSettings {
        config: ClockFaceConfig {
            sweep: Sweep::CounterClockwise,
            ..Default::default()
        },
    });
    app.world_mut().spawn(ClockFace::default());
    app.update();

    let expected = Quat::from_rotation_z(90f32.to_radians());
    assert!(hand_rotation(&mut app, HandKind::Seconds).abs_diff_eq(expected, EPSILON));
}

#[test]
fn no_face_no_entities() {
    let clock = ManualClock::new(hms(12, 0, 0));
    let mut app = test_app(&clock, ClockFacePrefabs::default());
    app.update();

    assert_eq!(count::<ClockHand>(&mut app), 0);
    assert!(app.world().resource::<BuiltLog>().0.is_empty());
}

#[test]
#[should_panic(expected = "clock face prefab not assigned: seconds hand")]
fn missing_prefab_fails_fast() {
    let clock = ManualClock::new(hms(12, 0, 0));
    let prefabs = ClockFacePrefabs {
        seconds_hand: None,
        ..placeholder_prefabs()
    };
    let mut app = test_app(&clock, prefabs);
    app.world_mut().spawn(ClockFace::default());
    app.update();
}

#[test]
#[should_panic(expected = "invalid clock face config")]
fn invalid_config_fails_fast() {
    let clock = ManualClock::new(hms(12, 0, 0));
    let mut app = test_app(&clock, placeholder_prefabs());
    app.insert_resource(ClockFaceSettings {
        config: ClockFaceConfig {
            hour_tick_radius: -1.0,
            ..Default::default()
        },
    });
    app.world_mut().spawn(ClockFace::default());
    app.update();
}
