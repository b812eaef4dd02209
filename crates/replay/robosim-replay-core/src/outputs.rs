//! Output contracts from a replay tick.
//!
//! Per-object work goes through the [`crate::ObjectDriver`]; what is returned
//! here is the list of semantic events, for adapters to log or forward.

use serde::{Deserialize, Serialize};

/// Discrete signals emitted while ticking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ReplayEvent {
    /// A pending restart cleared the frame list and rewound the cursor.
    Restarted { cleared_frames: usize },
    /// Frames were kept but every object was reset and the cursor rewound.
    Rewound { frames: usize },
    Paused { cursor: usize },
    Resumed { cursor: usize },
    /// Frame `index` was forwarded to the registered objects.
    FrameDispatched {
        index: usize,
        dispatched: usize,
        skipped: usize,
    },
    /// A frame named an object id that is not registered.
    ObjectSkipped { id: String },
    /// The cursor reached the end of the frames received so far.
    CaughtUp { cursor: usize },
}

/// Events produced by one or more ticks.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TickOutputs {
    #[serde(default)]
    pub events: Vec<ReplayEvent>,
}

impl TickOutputs {
    #[inline]
    pub fn push_event(&mut self, event: ReplayEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn extend(&mut self, other: TickOutputs) {
        self.events.extend(other.events);
    }

    /// Number of frames dispatched in these outputs.
    pub fn frames_dispatched(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ReplayEvent::FrameDispatched { .. }))
            .count()
    }
}
