//! Robosim Replay Core (engine-agnostic)
//!
//! Replays recorded robot-simulation frames onto host objects. The host owns the
//! objects and the scheduler; this crate owns the registry, the frame list, the
//! playback cursor and the pause/restart bookkeeping. Adapters (Bevy, tests)
//! implement [`ObjectDriver`] and call [`ReplayController::tick`] at a fixed rate.

pub mod config;
pub mod controller;
pub mod driver;
pub mod error;
pub mod frame;
pub mod ids;
pub mod outputs;
pub mod registry;
pub mod shutdown;
pub mod ticker;

// Re-exports for consumers (adapters)
pub use config::Config;
pub use controller::ReplayController;
pub use driver::{DriverCall, ObjectDriver, RecordingDriver};
pub use error::ReplayError;
pub use frame::{Frame, ObjectState};
pub use ids::ObjectTag;
pub use outputs::{ReplayEvent, TickOutputs};
pub use registry::{ObjectRegistry, SceneObject};
pub use shutdown::ShutdownHooks;
pub use ticker::FixedTicker;
