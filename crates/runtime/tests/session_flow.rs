//! End-to-end session tests on a paused tokio clock.
//!
//! Time only moves when every task is idle, so the worker sees ticks, reloads
//! and flight completions at exactly the configured instants.

use std::time::Duration;

use game_core::{
    Clock, FireOutcome, GameConfig, IgnoreReason, Outcome, Point, SessionCommand, SessionPhase,
};
use runtime::{Event, Runtime, RuntimeConfig, RuntimeHandle, SessionEvent, StageEvent, Topic};
use tokio::sync::broadcast;
use tokio::time;

/// Far outside anything that can spawn.
const NOWHERE: Point = Point {
    x: -5_000.0,
    y: -5_000.0,
};

async fn start_runtime(seed: u64) -> (Runtime, RuntimeHandle) {
    let config = RuntimeConfig {
        seed,
        ..RuntimeConfig::default()
    };
    let runtime = Runtime::start(config)
        .await
        .expect("Runtime should start successfully");
    let handle = runtime.handle();
    (runtime, handle)
}

fn drain(rx: &mut broadcast::Receiver<Event>) -> Vec<Event> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test(start_paused = true)]
async fn session_runs_for_thirty_seconds_then_ends() {
    let (_runtime, handle) = start_runtime(7).await;
    let mut session_rx = handle.subscribe(Topic::Session);
    let mut stage_rx = handle.subscribe(Topic::Stage);

    assert_eq!(handle.start_session().await.unwrap(), Outcome::Started);

    time::sleep(Duration::from_millis(29_500)).await;
    let state = handle.query_state().await.unwrap();
    assert_eq!(state.phase, SessionPhase::Playing);
    assert_eq!(state.time_remaining, 1);

    time::sleep(Duration::from_secs(1)).await;
    let state = handle.query_state().await.unwrap();
    assert_eq!(state.phase, SessionPhase::Ended);
    assert_eq!(state.time_remaining, 0);

    // No further ticks once the countdown is cancelled.
    time::sleep(Duration::from_secs(5)).await;
    let ticks = drain(&mut session_rx)
        .into_iter()
        .filter(|event| {
            matches!(
                event,
                Event::Session(SessionEvent::CommandApplied {
                    command: SessionCommand::Tick,
                    ..
                })
            )
        })
        .count();
    assert_eq!(ticks, 30);

    let stage_events = drain(&mut stage_rx);
    assert_eq!(stage_events.first(), Some(&Event::Stage(StageEvent::Cleared)));
    assert_eq!(
        stage_events.last(),
        Some(&Event::Stage(StageEvent::EndScreenShown {
            final_score: state.score
        }))
    );
}

#[tokio::test(start_paused = true)]
async fn reload_blocks_fire_until_complete() {
    let (_runtime, handle) = start_runtime(11).await;
    handle.start_session().await.unwrap();

    for _ in 0..10 {
        assert_eq!(
            handle.fire(NOWHERE).await.unwrap(),
            Outcome::Fired(FireOutcome::Miss)
        );
    }
    assert_eq!(
        handle.fire(NOWHERE).await.unwrap(),
        Outcome::Ignored(IgnoreReason::OutOfAmmo)
    );

    assert_eq!(handle.request_reload().await.unwrap(), Outcome::ReloadStarted);
    assert_eq!(
        handle.fire(NOWHERE).await.unwrap(),
        Outcome::Ignored(IgnoreReason::Reloading)
    );

    time::sleep(Duration::from_millis(900)).await;
    assert!(handle.query_state().await.unwrap().is_reloading());

    time::sleep(Duration::from_millis(200)).await;
    let state = handle.query_state().await.unwrap();
    assert!(!state.is_reloading());
    assert_eq!(state.ammo, GameConfig::DEFAULT_AMMO_CAPACITY);
}

#[tokio::test(start_paused = true)]
async fn flying_target_hit_at_its_current_position() {
    let (_runtime, handle) = start_runtime(42).await;
    handle.start_session().await.unwrap();

    // Every even second launches a flyer; by now several are in the air.
    time::sleep(Duration::from_millis(4_500)).await;
    let state = handle.query_state().await.unwrap();
    let now = handle.clock().now();

    // Pick a flyer not hidden behind an older target at its own center.
    let (flyer, aim) = state
        .targets
        .iter()
        .filter(|target| target.is_flying())
        .map(|target| (target, target.bounds_at(now).center()))
        .find(|(flyer, aim)| {
            state
                .targets
                .iter()
                .find(|target| target.bounds_at(now).contains(*aim))
                .is_some_and(|first| first.id == flyer.id)
        })
        .map(|(flyer, aim)| (flyer.clone(), aim))
        .expect("an unobstructed flying target should be in the air");

    let outcome = handle.fire(aim).await.unwrap();

    let expected = (2000.0 / flyer.size).floor() as u32 * 2;
    match outcome {
        Outcome::Fired(FireOutcome::Hit { target, points }) => {
            assert_eq!(target.id, flyer.id);
            assert_eq!(points, expected);
        }
        other => panic!("expected a hit, got {other:?}"),
    }
    let state = handle.query_state().await.unwrap();
    assert!(!state.targets.contains(flyer.id));
    assert!(state.score >= expected);
}

#[tokio::test(start_paused = true)]
async fn finished_flights_leave_the_list() {
    let (_runtime, handle) = start_runtime(3).await;
    handle.start_session().await.unwrap();

    time::sleep(Duration::from_millis(1_500)).await;
    let first = handle
        .query_state()
        .await
        .unwrap()
        .targets
        .iter()
        .find(|target| target.is_flying())
        .map(|target| target.id)
        .expect("a flying target after the first tick");

    // Launched at 1 s, lands at 8 s.
    time::sleep(Duration::from_secs(7)).await;
    let state = handle.query_state().await.unwrap();
    assert!(!state.targets.contains(first));
}

#[tokio::test(start_paused = true)]
async fn play_again_resets_the_session() {
    let (_runtime, handle) = start_runtime(5).await;
    handle.start_session().await.unwrap();
    handle.fire(NOWHERE).await.unwrap();
    assert_eq!(
        handle.start_session().await.unwrap(),
        Outcome::Ignored(IgnoreReason::AlreadyPlaying)
    );

    time::sleep(Duration::from_millis(30_500)).await;
    assert!(handle.query_state().await.unwrap().is_ended());
    assert_eq!(
        handle.fire(NOWHERE).await.unwrap(),
        Outcome::Ignored(IgnoreReason::NotPlaying)
    );

    assert_eq!(handle.start_session().await.unwrap(), Outcome::Started);
    let state = handle.query_state().await.unwrap();
    assert_eq!(state.phase, SessionPhase::Playing);
    assert_eq!(state.score, 0);
    assert_eq!(state.ammo, GameConfig::DEFAULT_AMMO_CAPACITY);
    assert_eq!(state.time_remaining, GameConfig::DEFAULT_DURATION_SECS);
    assert!(state.targets.is_empty());

    time::sleep(Duration::from_millis(1_500)).await;
    assert_eq!(handle.query_state().await.unwrap().time_remaining, 29);
}

#[tokio::test(start_paused = true)]
async fn invalid_config_is_rejected() {
    let config = RuntimeConfig {
        game_config: GameConfig::default().with_ammo_capacity(0),
        ..RuntimeConfig::default()
    };
    assert!(matches!(
        Runtime::start(config).await,
        Err(runtime::RuntimeError::InvalidConfig(_))
    ));
}

#[tokio::test(start_paused = true)]
async fn shutdown_waits_for_worker() {
    let (runtime, handle) = start_runtime(1).await;
    handle.start_session().await.unwrap();
    drop(handle);
    runtime.shutdown().await.expect("worker should stop cleanly");
}
