//! ReplayController: registry, frame list, playback cursor and the
//! pause/restart bookkeeping.
//!
//! Methods:
//! - scan/register (startup), add_frame, request_pause_toggle, request_restart,
//!   rewind (control surface), tick/update (playback loop)

use crate::config::Config;
use crate::driver::ObjectDriver;
use crate::frame::Frame;
use crate::outputs::{ReplayEvent, TickOutputs};
use crate::registry::{ObjectRegistry, SceneObject};
use crate::ticker::FixedTicker;

/// Replays frames onto host objects identified by handles of type `H`.
///
/// Control requests are plain flag writes; they are read and cleared at the
/// start of the next tick, so repeated requests between two ticks collapse
/// into one.
#[derive(Debug)]
pub struct ReplayController<H> {
    cfg: Config,
    registry: ObjectRegistry<H>,
    frames: Vec<Frame>,
    cursor: usize,
    paused: bool,
    pause_requested: bool,
    restart_requested: bool,
}

impl<H> ReplayController<H> {
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            registry: ObjectRegistry::new(),
            frames: Vec::new(),
            cursor: 0,
            paused: false,
            pause_requested: false,
            restart_requested: false,
        }
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    #[inline]
    pub fn registry(&self) -> &ObjectRegistry<H> {
        &self.registry
    }

    // ----- Startup -----

    /// Register one object directly. Duplicate ids overwrite.
    pub fn register(&mut self, id: impl Into<String>, handle: H) -> Option<H> {
        self.registry.register(id, handle)
    }

    /// Register scan results whose tag is in `Config::scan_tags`. Objects with
    /// no id are skipped with a warning. Returns the registry size afterwards.
    pub fn scan<I>(&mut self, objects: I) -> usize
    where
        I: IntoIterator<Item = SceneObject<H>>,
    {
        for candidate in objects {
            if !self.cfg.scan_tags.contains(&candidate.tag) {
                continue;
            }
            if let Err(err) = self.registry.register_candidate(candidate) {
                log::warn!("scene scan: {err}");
            }
        }
        log::info!("scene scan registered {} object(s)", self.registry.len());
        self.registry.len()
    }

    // ----- Control surface -----

    pub fn add_frame(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    pub fn request_pause_toggle(&mut self) {
        self.pause_requested = true;
    }

    pub fn request_restart(&mut self) {
        self.restart_requested = true;
    }

    /// Reset every object and replay the frames already received from the start.
    pub fn rewind(&mut self, driver: &mut impl ObjectDriver<H>) -> ReplayEvent {
        self.reset_objects(driver);
        log::info!("replay rewound over {} frame(s)", self.frames.len());
        ReplayEvent::Rewound {
            frames: self.frames.len(),
        }
    }

    // ----- Inspection -----

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn pending_restart(&self) -> bool {
        self.restart_requested
    }

    #[inline]
    pub fn pending_pause_toggle(&self) -> bool {
        self.pause_requested
    }

    // ----- Playback loop -----

    /// Run one tick: consume a pending restart, then a pending pause toggle,
    /// then dispatch the frame under the cursor unless paused.
    pub fn tick(&mut self, driver: &mut impl ObjectDriver<H>) -> TickOutputs {
        let mut out = TickOutputs::default();

        if self.restart_requested {
            self.restart_requested = false;
            let cleared_frames = self.frames.len();
            self.reset_objects(driver);
            self.frames.clear();
            log::info!("replay restarted; cleared {cleared_frames} frame(s)");
            out.push_event(ReplayEvent::Restarted { cleared_frames });
        }

        if self.pause_requested {
            self.pause_requested = false;
            self.paused = !self.paused;
            let cursor = self.cursor;
            if self.paused {
                log::info!("replay paused at frame {cursor}");
                out.push_event(ReplayEvent::Paused { cursor });
            } else {
                log::info!("replay resumed at frame {cursor}");
                out.push_event(ReplayEvent::Resumed { cursor });
            }
        }

        if !self.paused && self.cursor < self.frames.len() {
            self.dispatch_current(driver, &mut out);
        }

        out
    }

    /// Advance `ticker` by `dt` seconds and run every tick that became due.
    pub fn update(
        &mut self,
        dt: f64,
        ticker: &mut FixedTicker,
        driver: &mut impl ObjectDriver<H>,
    ) -> TickOutputs {
        let mut out = TickOutputs::default();
        for _ in 0..ticker.advance(dt) {
            out.extend(self.tick(driver));
        }
        out
    }

    fn dispatch_current(&mut self, driver: &mut impl ObjectDriver<H>, out: &mut TickOutputs) {
        let index = self.cursor;
        let frame = &self.frames[index];
        let mut dispatched = 0;
        let mut skipped = 0;
        for object in frame.iter() {
            if self.cfg.log_dispatch {
                log::debug!("{} started {}", object.id, object.state);
            }
            match self.registry.get(&object.id) {
                Some(handle) => {
                    driver.read_state(handle, &object.state);
                    dispatched += 1;
                }
                None => {
                    skipped += 1;
                    out.push_event(ReplayEvent::ObjectSkipped {
                        id: object.id.clone(),
                    });
                }
            }
        }
        self.cursor += 1;
        out.push_event(ReplayEvent::FrameDispatched {
            index,
            dispatched,
            skipped,
        });
        if self.cursor == self.frames.len() {
            out.push_event(ReplayEvent::CaughtUp {
                cursor: self.cursor,
            });
        }
    }

    fn reset_objects(&mut self, driver: &mut impl ObjectDriver<H>) {
        for handle in self.registry.handles() {
            driver.reset(handle);
        }
        self.cursor = 0;
    }
}

impl<H> Default for ReplayController<H> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
