//! Scene object categories picked up by the startup scan.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ReplayError;

/// Category tag carried by every replayable scene object.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectTag {
    Ball,
    Skittle,
    Robot,
}

impl ObjectTag {
    /// Scan order used when collecting scene objects: balls, skittles, then robots.
    pub const ALL: [ObjectTag; 3] = [ObjectTag::Ball, ObjectTag::Skittle, ObjectTag::Robot];

    pub fn label(self) -> &'static str {
        match self {
            ObjectTag::Ball => "ball",
            ObjectTag::Skittle => "skittle",
            ObjectTag::Robot => "robot",
        }
    }
}

impl fmt::Display for ObjectTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ObjectTag {
    type Err = ReplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ball" => Ok(ObjectTag::Ball),
            "skittle" => Ok(ObjectTag::Skittle),
            "robot" => Ok(ObjectTag::Robot),
            other => Err(ReplayError::UnknownTag(other.to_string())),
        }
    }
}
