//! Error type shared by the fallible core APIs.

use thiserror::Error;

use crate::ids::ObjectTag;

/// Errors produced while configuring the replay core or scanning the scene.
///
/// Unknown object ids inside a frame are not errors; they surface as
/// [`crate::ReplayEvent::ObjectSkipped`] instead.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("scene object tagged '{tag}' carries no object id")]
    MissingObjectId { tag: ObjectTag },
    #[error("unknown object tag '{0}'")]
    UnknownTag(String),
    #[error("invalid replay config: {0}")]
    InvalidConfig(String),
    #[error("replay json: {0}")]
    Json(#[from] serde_json::Error),
}
