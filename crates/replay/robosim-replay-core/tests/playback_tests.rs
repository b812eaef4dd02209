use anyhow::Result;
use robosim_replay_core::{
    Config, DriverCall, Frame, ObjectTag, RecordingDriver, ReplayController, ReplayEvent,
    SceneObject,
};
use robosim_test_fixtures::recordings;

fn scene() -> Vec<SceneObject<u32>> {
    vec![
        SceneObject::new(ObjectTag::Ball, Some("ball1".into()), 10),
        SceneObject::new(ObjectTag::Skittle, Some("skittle3".into()), 20),
        SceneObject::new(ObjectTag::Robot, Some("robot".into()), 30),
    ]
}

fn loaded(name: &str) -> Result<ReplayController<u32>> {
    let mut c = ReplayController::new(Config::default());
    c.scan(scene());
    let frames: Vec<Frame> = recordings::load(name)?;
    for f in frames {
        c.add_frame(f);
    }
    Ok(c)
}

#[test]
fn cursor_advances_once_per_tick_then_holds() -> Result<()> {
    let mut c = loaded("robot-pushes-ball")?;
    let mut d = RecordingDriver::new();
    assert_eq!(c.frame_count(), 3);

    for expected in 1..=3 {
        c.tick(&mut d);
        assert_eq!(c.cursor(), expected);
    }
    for _ in 0..5 {
        let out = c.tick(&mut d);
        assert_eq!(c.cursor(), 3);
        assert_eq!(out.frames_dispatched(), 0);
    }

    // More frames arriving later let playback continue.
    c.add_frame(Frame::default().with_state("robot", "0.6 0.0 0.0 0"));
    c.tick(&mut d);
    assert_eq!(c.cursor(), 4);
    Ok(())
}

#[test]
fn caught_up_reported_when_last_frame_dispatched() -> Result<()> {
    let mut c = loaded("robot-pushes-ball")?;
    let mut d = RecordingDriver::new();
    c.tick(&mut d);
    c.tick(&mut d);
    let out = c.tick(&mut d);
    assert_eq!(
        out.events,
        vec![
            ReplayEvent::FrameDispatched {
                index: 2,
                dispatched: 3,
                skipped: 0
            },
            ReplayEvent::CaughtUp { cursor: 3 },
        ]
    );
    Ok(())
}

#[test]
fn restart_collapses_repeated_requests() -> Result<()> {
    let mut c = loaded("robot-pushes-ball")?;
    let mut d = RecordingDriver::new();
    c.tick(&mut d);
    c.tick(&mut d);
    d.calls.clear();

    c.request_restart();
    c.request_restart();
    c.request_restart();
    assert!(c.pending_restart());

    let out = c.tick(&mut d);
    assert_eq!(out.events, vec![ReplayEvent::Restarted { cleared_frames: 3 }]);
    assert_eq!(c.cursor(), 0);
    assert_eq!(c.frame_count(), 0);
    assert!(!c.pending_restart());

    // One reset per registered object, exactly once.
    let resets = d
        .calls
        .iter()
        .filter(|call| matches!(call, DriverCall::Reset { .. }))
        .count();
    assert_eq!(resets, 3);

    // Consumed: the next tick does not restart again.
    c.add_frame(Frame::default().with_state("robot", "x"));
    let out = c.tick(&mut d);
    assert!(!out
        .events
        .iter()
        .any(|e| matches!(e, ReplayEvent::Restarted { .. })));
    assert_eq!(c.cursor(), 1);
    Ok(())
}

#[test]
fn pause_toggle_flips_once_per_request() -> Result<()> {
    let mut c = loaded("robot-pushes-ball")?;
    let mut d = RecordingDriver::new();

    c.request_pause_toggle();
    c.request_pause_toggle();
    let out = c.tick(&mut d);
    assert!(c.is_paused());
    assert_eq!(out.events, vec![ReplayEvent::Paused { cursor: 0 }]);
    assert!(d.calls.is_empty());

    // Paused ticks keep the cursor where it is.
    for _ in 0..4 {
        assert!(c.tick(&mut d).is_empty());
    }
    assert_eq!(c.cursor(), 0);

    c.request_pause_toggle();
    let out = c.tick(&mut d);
    assert!(!c.is_paused());
    assert_eq!(out.events[0], ReplayEvent::Resumed { cursor: 0 });
    assert_eq!(c.cursor(), 1);
    Ok(())
}

#[test]
fn restart_applies_before_pause_in_same_tick() -> Result<()> {
    let mut c = loaded("robot-pushes-ball")?;
    let mut d = RecordingDriver::new();
    c.tick(&mut d);
    c.request_restart();
    c.request_pause_toggle();
    let out = c.tick(&mut d);
    assert_eq!(
        out.events,
        vec![
            ReplayEvent::Restarted { cleared_frames: 3 },
            ReplayEvent::Paused { cursor: 0 },
        ]
    );
    Ok(())
}

#[test]
fn unknown_ids_are_skipped() -> Result<()> {
    let mut c = loaded("unknown-objects")?;
    let mut d = RecordingDriver::new();

    let out = c.tick(&mut d);
    assert_eq!(
        out.events,
        vec![
            ReplayEvent::ObjectSkipped { id: "ghost".into() },
            ReplayEvent::FrameDispatched {
                index: 0,
                dispatched: 1,
                skipped: 1
            },
        ]
    );
    assert_eq!(
        d.calls,
        vec![DriverCall::ReadState {
            handle: 30,
            state: "0.0 0.0 0.0 0".into()
        }]
    );

    // A frame with nothing known still advances the cursor.
    c.tick(&mut d);
    assert_eq!(c.cursor(), 2);
    Ok(())
}

#[test]
fn scan_skips_missing_ids_and_filtered_tags() -> Result<()> {
    let cfg = Config::from_json_str(&robosim_test_fixtures::configs::json("slow-playback")?)?;
    let mut c: ReplayController<u32> = ReplayController::new(cfg);
    let registered = c.scan(vec![
        SceneObject::new(ObjectTag::Ball, Some("ball1".into()), 1),
        SceneObject::new(ObjectTag::Ball, None, 2),
        SceneObject::new(ObjectTag::Skittle, Some("skittle1".into()), 3),
        SceneObject::new(ObjectTag::Robot, Some("robot".into()), 4),
    ]);
    assert_eq!(registered, 2);
    assert!(c.registry().contains("ball1"));
    assert!(c.registry().contains("robot"));
    assert!(!c.registry().contains("skittle1"));
    Ok(())
}
