use bevy::prelude::*;
use robosim_replay_core::{Config, ReplayController};

pub mod components;
pub mod events;
pub mod resources;
pub mod systems;

pub use components::{HomeTransform, LastObjectState, ReplayObject, ReplayTag};
pub use events::{ObjectResetEvent, ObjectStateEvent, ReplayControl, ReplayNotice};
pub use resources::{PendingDriverCalls, ReplayResource, ReplaySettings, ReplayShutdown};

/// Scans tagged entities at startup and replays frames onto them at the
/// configured fixed rate.
pub struct RobosimReplayPlugin {
    pub config: Config,
}

impl Default for RobosimReplayPlugin {
    fn default() -> Self {
        Self {
            config: Config::default(),
        }
    }
}

impl Plugin for RobosimReplayPlugin {
    fn build(&self, app: &mut App) {
        let config = match self.config.validate() {
            Ok(()) => self.config.clone(),
            Err(err) => {
                warn!("{err}; falling back to the default replay config");
                Config::default()
            }
        };

        app.insert_resource(Time::<Fixed>::from_seconds(config.tick_interval_secs))
            .insert_resource(ReplayResource(ReplayController::new(config.clone())))
            .insert_resource(ReplaySettings(config))
            .init_resource::<PendingDriverCalls>()
            .init_resource::<ReplayShutdown>()
            .add_event::<ReplayControl>()
            .add_event::<ReplayNotice>()
            .add_event::<ObjectStateEvent>()
            .add_event::<ObjectResetEvent>()
            .add_systems(Startup, systems::scan_scene_system)
            .add_systems(
                Update,
                (
                    systems::apply_control_system,
                    systems::apply_driver_calls_system,
                )
                    .chain(),
            )
            .add_systems(
                FixedUpdate,
                (
                    systems::replay_tick_system,
                    systems::apply_driver_calls_system,
                )
                    .chain(),
            )
            .add_systems(Last, systems::shutdown_on_exit_system);
    }
}
