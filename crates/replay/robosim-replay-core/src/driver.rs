//! Host-side per-object entry points.

/// Implemented by the host for the objects it registered. The replay core calls
/// `read_state` once per known object per dispatched frame, and `reset` for
/// every registered object on restart or rewind.
pub trait ObjectDriver<H> {
    /// Hand an opaque recorded state to the object's playback routine.
    fn read_state(&mut self, handle: &H, state: &str);
    /// Return the object to its default position.
    fn reset(&mut self, handle: &H);
}

/// One recorded call made against a [`RecordingDriver`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DriverCall<H> {
    ReadState { handle: H, state: String },
    Reset { handle: H },
}

/// Driver that records calls so they can be applied later (e.g. in a separate
/// ECS stage) or inspected in tests.
#[derive(Debug)]
pub struct RecordingDriver<H> {
    pub calls: Vec<DriverCall<H>>,
}

impl<H> Default for RecordingDriver<H> {
    fn default() -> Self {
        Self { calls: Vec::new() }
    }
}

impl<H> RecordingDriver<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all recorded calls, leaving the driver empty.
    pub fn drain(&mut self) -> std::vec::Drain<'_, DriverCall<H>> {
        self.calls.drain(..)
    }
}

impl<H: Clone> ObjectDriver<H> for RecordingDriver<H> {
    fn read_state(&mut self, handle: &H, state: &str) {
        self.calls.push(DriverCall::ReadState {
            handle: handle.clone(),
            state: state.to_string(),
        });
    }

    fn reset(&mut self, handle: &H) {
        self.calls.push(DriverCall::Reset {
            handle: handle.clone(),
        });
    }
}
