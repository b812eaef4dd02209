//! Callbacks run once when the host application quits.

/// Boxed shutdown callback (e.g. the connection manager stopping its servers).
pub type ShutdownFn = dyn FnMut() + Send + Sync + 'static;

/// Registry of quit callbacks. `run` fires each hook at most once.
#[derive(Default)]
pub struct ShutdownHooks {
    hooks: Vec<Box<ShutdownFn>>,
    fired: bool,
}

impl std::fmt::Debug for ShutdownHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShutdownHooks")
            .field("hooks", &self.hooks.len())
            .field("fired", &self.fired)
            .finish()
    }
}

impl ShutdownHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, f: F)
    where
        F: FnMut() + Send + Sync + 'static,
    {
        self.hooks.push(Box::new(f));
    }

    #[inline]
    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Run every registered hook. Returns false if they already ran.
    pub fn run(&mut self) -> bool {
        if self.fired {
            return false;
        }
        self.fired = true;
        log::info!("running {} shutdown hook(s)", self.hooks.len());
        for hook in self.hooks.iter_mut() {
            hook();
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn hooks_fire_once() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut hooks = ShutdownHooks::new();
        let c = count.clone();
        hooks.register(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
        assert!(hooks.run());
        assert!(!hooks.run());
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(hooks.has_fired());
    }
}
