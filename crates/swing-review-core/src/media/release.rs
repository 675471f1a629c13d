use std::fmt;

/// One-shot release action that runs when the guard is released or dropped.
///
/// Backs both live camera streams and clip resource identifiers, so the
/// underlying resource is freed on every exit path and never twice.
pub struct ReleaseGuard {
    action: Option<Box<dyn FnOnce() + Send>>,
}

impl ReleaseGuard {
    /// Wraps `action` so it runs exactly once.
    pub fn new(action: impl FnOnce() + Send + 'static) -> Self {
        Self {
            action: Some(Box::new(action)),
        }
    }

    /// A guard with nothing to release.
    pub fn noop() -> Self {
        Self { action: None }
    }

    /// Runs the release action now.
    pub fn release(mut self) {
        self.run();
    }

    fn run(&mut self) {
        if let Some(action) = self.action.take() {
            action();
        }
    }
}

impl Drop for ReleaseGuard {
    fn drop(&mut self) {
        self.run();
    }
}

impl fmt::Debug for ReleaseGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReleaseGuard")
            .field("armed", &self.action.is_some())
            .finish()
    }
}
