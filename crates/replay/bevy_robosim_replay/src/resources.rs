use bevy::prelude::*;
use robosim_replay_core::{Config, RecordingDriver, ReplayController, ShutdownHooks};

/// The replay controller, keyed by entity.
#[derive(Resource)]
pub struct ReplayResource(pub ReplayController<Entity>);

/// Config the plugin was built with.
#[derive(Resource, Debug, Clone)]
pub struct ReplaySettings(pub Config);

/// Driver calls staged by the controller and applied in a separate system
/// (keeps ordering explicit: Tick -> Apply).
#[derive(Resource, Default)]
pub struct PendingDriverCalls(pub RecordingDriver<Entity>);

/// Hooks run once when the app exits, e.g. stopping the simulation's
/// network servers.
#[derive(Resource, Default)]
pub struct ReplayShutdown(pub ShutdownHooks);
