//! Presentation-theme host-service contracts.

use std::{cell::RefCell, rc::Rc};

/// Host service applying the dark/light presentation mode to the document surface.
///
/// The service is the single owner of the document-level theme mutation: the runtime applies
/// the restored flag once at init and re-applies it on every toggle. There is no teardown
/// semantic; the last applied value simply remains in effect.
pub trait ThemeService {
    /// Applies `dark` to the presentation surface.
    fn apply(&self, dark: bool);
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op theme service for unsupported targets.
pub struct NoopThemeService;

impl ThemeService for NoopThemeService {
    fn apply(&self, _dark: bool) {}
}

#[derive(Debug, Clone, Default)]
/// Theme service recording every applied value, for runtime tests.
pub struct RecordingThemeService {
    applied: Rc<RefCell<Vec<bool>>>,
}

impl RecordingThemeService {
    /// Returns every value applied so far, oldest first.
    pub fn applied(&self) -> Vec<bool> {
        self.applied.borrow().clone()
    }

    /// Returns the most recently applied value.
    pub fn last(&self) -> Option<bool> {
        self.applied.borrow().last().copied()
    }
}

impl ThemeService for RecordingThemeService {
    fn apply(&self, dark: bool) {
        self.applied.borrow_mut().push(dark);
    }
}
