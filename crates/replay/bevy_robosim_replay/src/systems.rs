use bevy::app::AppExit;
use bevy::prelude::*;
use robosim_replay_core::{DriverCall, SceneObject};

use crate::components::{HomeTransform, LastObjectState, ReplayObject, ReplayTag};
use crate::events::{ObjectResetEvent, ObjectStateEvent, ReplayControl, ReplayNotice};
use crate::resources::{PendingDriverCalls, ReplayResource, ReplayShutdown};

/// Collect tagged entities in scan-tag order and register them with the
/// controller. Registered entities get a home transform snapshot and a
/// `LastObjectState` slot.
pub fn scan_scene_system(
    mut commands: Commands,
    mut replay: ResMut<ReplayResource>,
    tagged: Query<(Entity, &ReplayTag, Option<&ReplayObject>, Option<&Transform>)>,
) {
    let scan_tags = replay.0.config().scan_tags.clone();
    let mut candidates = Vec::new();
    for tag in scan_tags {
        for (entity, _, object, _) in tagged.iter().filter(|(_, t, _, _)| t.0 == tag) {
            candidates.push(SceneObject::new(
                tag,
                object.map(|o| o.id.clone()),
                entity,
            ));
        }
    }
    replay.0.scan(candidates);

    for (entity, _, object, transform) in tagged.iter() {
        let Some(object) = object else { continue };
        if replay.0.registry().get(&object.id) != Some(&entity) {
            continue;
        }
        let mut e = commands.entity(entity);
        e.insert(LastObjectState::default());
        if let Some(tf) = transform {
            e.insert(HomeTransform(*tf));
        }
    }
}

/// Drain control events into the controller. Rewind resets objects right away;
/// pause and restart are picked up by the next fixed tick.
pub fn apply_control_system(
    mut controls: EventReader<ReplayControl>,
    mut replay: ResMut<ReplayResource>,
    mut pending: ResMut<PendingDriverCalls>,
    mut notices: EventWriter<ReplayNotice>,
) {
    for control in controls.read() {
        match control {
            ReplayControl::TogglePause => replay.0.request_pause_toggle(),
            ReplayControl::Restart => replay.0.request_restart(),
            ReplayControl::Rewind => {
                let ev = replay.0.rewind(&mut pending.0);
                notices.send(ReplayNotice(ev));
            }
            ReplayControl::AppendFrame(frame) => replay.0.add_frame(frame.clone()),
        }
    }
}

/// One replay tick per FixedUpdate; driver calls are staged in PendingDriverCalls.
pub fn replay_tick_system(
    mut replay: ResMut<ReplayResource>,
    mut pending: ResMut<PendingDriverCalls>,
    mut notices: EventWriter<ReplayNotice>,
) {
    let out = replay.0.tick(&mut pending.0);
    notices.send_batch(out.events.into_iter().map(ReplayNotice));
}

/// Apply staged driver calls: state strings become `ObjectStateEvent`s and
/// resets restore the home transform.
pub fn apply_driver_calls_system(
    mut pending: ResMut<PendingDriverCalls>,
    objects: Query<&ReplayObject>,
    mut last: Query<&mut LastObjectState>,
    mut homes: Query<(&HomeTransform, &mut Transform)>,
    mut states: EventWriter<ObjectStateEvent>,
    mut resets: EventWriter<ObjectResetEvent>,
) {
    for call in pending.0.drain() {
        match call {
            DriverCall::ReadState { handle, state } => {
                let Ok(object) = objects.get(handle) else {
                    // Despawned since the scan.
                    continue;
                };
                if let Ok(mut slot) = last.get_mut(handle) {
                    slot.0 = Some(state.clone());
                }
                states.send(ObjectStateEvent {
                    entity: handle,
                    id: object.id.clone(),
                    state,
                });
            }
            DriverCall::Reset { handle } => {
                if let Ok((home, mut tf)) = homes.get_mut(handle) {
                    *tf = home.0;
                }
                if let Ok(mut slot) = last.get_mut(handle) {
                    slot.0 = None;
                }
                resets.send(ObjectResetEvent { entity: handle });
            }
        }
    }
}

/// Run shutdown hooks once when the app is asked to exit.
pub fn shutdown_on_exit_system(
    mut exits: EventReader<AppExit>,
    mut hooks: ResMut<ReplayShutdown>,
) {
    if exits.read().last().is_some() && hooks.0.run() {
        info!("replay shutdown hooks completed");
    }
}
