use bevy::prelude::*;
use bevy_robosim_replay::{ReplayResource, ReplaySettings, RobosimReplayPlugin};
use robosim_replay_core::Config;

#[test]
fn plugin_inserts_replay_resources() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(RobosimReplayPlugin::default());

    assert!(app.world().get_resource::<ReplayResource>().is_some());
    let settings = app.world().resource::<ReplaySettings>();
    assert_eq!(settings.0.tick_interval_secs, 0.04);
}

/// it should fall back to the default config when given an invalid one
#[test]
fn invalid_config_falls_back_to_default() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(RobosimReplayPlugin {
            config: Config {
                tick_interval_secs: -1.0,
                ..Config::default()
            },
        });

    let settings = app.world().resource::<ReplaySettings>();
    assert_eq!(settings.0, Config::default());
}

/// it should fall back instead of panicking when the interval rounds to a zero timestep
#[test]
fn sub_nanosecond_interval_falls_back_to_default() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(RobosimReplayPlugin {
            config: Config {
                tick_interval_secs: 1e-12,
                ..Config::default()
            },
        });

    let settings = app.world().resource::<ReplaySettings>();
    assert_eq!(settings.0, Config::default());
    let fixed = app.world().resource::<Time<Fixed>>();
    assert_eq!(fixed.timestep(), std::time::Duration::from_secs_f64(0.04));
}

/// it should tick without panicking on an empty scene
#[test]
fn fixedupdate_ticks_empty_scene() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(RobosimReplayPlugin::default());

    app.world_mut().run_schedule(Startup);
    for _ in 0..10 {
        app.world_mut().run_schedule(FixedUpdate);
    }

    let replay = app.world().resource::<ReplayResource>();
    assert_eq!(replay.0.cursor(), 0);
    assert!(replay.0.registry().is_empty());
}
