use bevy::prelude::*;
use robosim_replay_core::ObjectTag;

/// Category tag picked up by the startup scan.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayTag(pub ObjectTag);

/// Identifier matching the `id` of recorded object states.
#[derive(Component, Debug, Clone)]
pub struct ReplayObject {
    pub id: String,
}

impl ReplayObject {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Transform captured at scan time; restored when the object is reset.
#[derive(Component, Debug, Clone, Copy)]
pub struct HomeTransform(pub Transform);

/// Most recent state string dispatched to this object, `None` after a reset.
#[derive(Component, Debug, Clone, Default)]
pub struct LastObjectState(pub Option<String>);
