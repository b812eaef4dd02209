use bevy::prelude::*;
use robosim_replay_core::{Frame, ReplayEvent};

/// Control surface for UI buttons and the frame deserializer. Drained into
/// the controller during `Update`; flag requests take effect on the next tick.
#[derive(Event, Debug, Clone)]
pub enum ReplayControl {
    TogglePause,
    Restart,
    /// Reset objects and replay the frames already received from the start.
    Rewind,
    AppendFrame(Frame),
}

/// Core replay events forwarded into the ECS.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct ReplayNotice(pub ReplayEvent);

/// A recorded state for one object. Application systems interpret `state`.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct ObjectStateEvent {
    pub entity: Entity,
    pub id: String,
    pub state: String,
}

/// The object was returned to its home transform.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectResetEvent {
    pub entity: Entity,
}
