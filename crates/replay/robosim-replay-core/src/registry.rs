//! Identifier -> host handle lookup, built once when the scene starts.

use hashbrown::HashMap;

use crate::error::ReplayError;
use crate::ids::ObjectTag;

/// A scene object found by the host's tag scan. `id` is `None` when the object
/// lacks the component that carries its identifier.
#[derive(Clone, Debug)]
pub struct SceneObject<H> {
    pub tag: ObjectTag,
    pub id: Option<String>,
    pub handle: H,
}

impl<H> SceneObject<H> {
    pub fn new(tag: ObjectTag, id: Option<String>, handle: H) -> Self {
        Self { tag, id, handle }
    }
}

/// Maps object ids to host handles. Entries are only ever added.
#[derive(Debug)]
pub struct ObjectRegistry<H> {
    map: HashMap<String, H>,
}

impl<H> Default for ObjectRegistry<H> {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
        }
    }
}

impl<H> ObjectRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a handle. A duplicate id overwrites the previous entry, which is
    /// returned.
    pub fn register(&mut self, id: impl Into<String>, handle: H) -> Option<H> {
        let id = id.into();
        let previous = self.map.insert(id.clone(), handle);
        if previous.is_some() {
            log::warn!("object id '{id}' registered twice; keeping the latest handle");
        }
        previous
    }

    /// Register a scan result. Candidates without an id add nothing.
    pub fn register_candidate(&mut self, candidate: SceneObject<H>) -> Result<(), ReplayError> {
        let SceneObject { tag, id, handle } = candidate;
        match id {
            Some(id) => {
                self.register(id, handle);
                Ok(())
            }
            None => Err(ReplayError::MissingObjectId { tag }),
        }
    }

    #[inline]
    pub fn get(&self, id: &str) -> Option<&H> {
        self.map.get(id)
    }

    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.map.contains_key(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn handles(&self) -> impl Iterator<Item = &H> {
        self.map.values()
    }
}
