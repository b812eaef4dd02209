//! Recorded frame data supplied by the upstream deserializer.

use serde::{Deserialize, Serialize};

/// One object's recorded state for a single timestep. The payload is opaque to
/// the replay core and is handed to the object's driver unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectState {
    pub id: String,
    pub state: String,
}

impl ObjectState {
    pub fn new(id: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: state.into(),
        }
    }
}

/// One recorded timestep: an ordered list of per-object states.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    #[serde(default)]
    pub states: Vec<ObjectState>,
}

impl Frame {
    /// Builder-style append, handy for assembling frames by hand.
    pub fn with_state(mut self, id: impl Into<String>, state: impl Into<String>) -> Self {
        self.states.push(ObjectState::new(id, state));
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ObjectState> {
        self.states.iter()
    }
}
