//! Keyboard state.
//!
//! Key events arrive whenever the windowing system delivers them; the
//! controller only looks at the [`Input`] snapshot once per tick. A key is
//! "held" from its press event until its release event.

use std::collections::HashSet;
use std::hash::Hash;

pub use winit::keyboard::{Key, KeyCode};

/// Set of currently held inputs (keys or buttons).
#[derive(Debug, Clone)]
pub struct Input<T: Eq + Hash + Copy> {
    pressed: HashSet<T>,
}

impl<T: Eq + Hash + Copy> Input<T> {
    pub fn new() -> Self {
        Self {
            pressed: HashSet::new(),
        }
    }

    /// Returns `true` if the input is currently held down.
    pub fn pressed(&self, input: T) -> bool {
        self.pressed.contains(&input)
    }

    /// Record a press event. Repeats of an already held key are no-ops.
    pub fn press(&mut self, input: T) {
        self.pressed.insert(input);
    }

    /// Record a release event.
    pub fn release(&mut self, input: T) {
        self.pressed.remove(&input);
    }

    /// Forget every held input, e.g. when the window loses focus and release
    /// events will never arrive.
    pub fn release_all(&mut self) {
        self.pressed.clear();
    }

    /// Number of inputs currently held.
    pub fn held_count(&self) -> usize {
        self.pressed.len()
    }
}

impl<T: Eq + Hash + Copy> Default for Input<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_then_release() {
        let mut keys = Input::new();
        keys.press(KeyCode::KeyW);
        assert!(keys.pressed(KeyCode::KeyW));
        assert!(!keys.pressed(KeyCode::KeyS));
        keys.release(KeyCode::KeyW);
        assert!(!keys.pressed(KeyCode::KeyW));
    }

    #[test]
    fn repeated_press_is_held_once() {
        let mut keys = Input::new();
        keys.press(KeyCode::ArrowUp);
        keys.press(KeyCode::ArrowUp);
        assert_eq!(keys.held_count(), 1);
        keys.release(KeyCode::ArrowUp);
        assert_eq!(keys.held_count(), 0);
    }

    #[test]
    fn release_of_unheld_key_is_ignored() {
        let mut keys: Input<KeyCode> = Input::new();
        keys.release(KeyCode::Digit1);
        assert_eq!(keys.held_count(), 0);
    }

    #[test]
    fn release_all_clears_everything() {
        let mut keys = Input::new();
        keys.press(KeyCode::KeyA);
        keys.press(KeyCode::ArrowLeft);
        keys.release_all();
        assert!(!keys.pressed(KeyCode::KeyA));
        assert!(!keys.pressed(KeyCode::ArrowLeft));
    }
}
