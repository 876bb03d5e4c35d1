use leptos::on_cleanup;
use std::{cell::Cell, rc::Rc};

/// Tracks whether the owning component is still mounted. Futures spawned with
/// `spawn_local` check it before writing to signals.
#[derive(Clone, Debug)]
pub struct MountGuard(Rc<Cell<bool>>);

impl MountGuard {
    /// Creates a guard that flips to unmounted when the current reactive
    /// owner is cleaned up.
    pub fn new() -> Self {
        let guard = Self::detached();
        let flag = guard.0.clone();
        on_cleanup(move || flag.set(false));
        guard
    }

    pub fn detached() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_mounted(&self) -> bool {
        self.0.get()
    }

    pub fn unmount(&self) {
        self.0.set(false);
    }

    /// Runs `f` only while mounted.
    pub fn run<T>(&self, f: impl FnOnce() -> T) -> Option<T> {
        self.is_mounted().then(f)
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}
