//! Teardown gate for async effect completions.

use std::{cell::Cell, rc::Rc};

#[derive(Debug, Clone)]
/// Shared liveness flag tied to a widget's mount lifetime.
///
/// Every async store operation clones the gate before suspending and consults it again when
/// its response lands. Once the owning component retires the gate on cleanup, late completions
/// observe `is_live() == false` and drop their state writes instead of touching a torn-down
/// reactive graph.
pub struct SyncGate {
    live: Rc<Cell<bool>>,
}

impl SyncGate {
    /// Creates a live gate.
    pub fn new() -> Self {
        Self {
            live: Rc::new(Cell::new(true)),
        }
    }

    /// Returns `true` until [`SyncGate::retire`] is called on any clone.
    pub fn is_live(&self) -> bool {
        self.live.get()
    }

    /// Permanently marks the gate as retired.
    pub fn retire(&self) {
        self.live.set(false);
    }
}

impl Default for SyncGate {
    fn default() -> Self {
        Self::new()
    }
}
