//! Keyboard and window boundary
//!
//! Folds winit key transitions into a held-key snapshot so the simulation
//! only ever sees [`TickInput`]. Nothing below this module imports winit;
//! swapping the windowing layer means reimplementing this translation and
//! nothing else.

use winit::event::KeyEvent;
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::sim::TickInput;

/// Currently-held control keys, updated from window events
///
/// Key map: A / ArrowLeft move left, D / ArrowRight move right, Space
/// jumps, R restarts after a game over.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyState {
    left: bool,
    right: bool,
    jump: bool,
    restart: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track one key transition. Unmapped keys are ignored; OS key repeat
    /// re-asserts the held flag, which is harmless.
    pub fn handle_key(&mut self, code: KeyCode, held: bool) {
        match code {
            KeyCode::KeyA | KeyCode::ArrowLeft => self.left = held,
            KeyCode::KeyD | KeyCode::ArrowRight => self.right = held,
            KeyCode::Space => self.jump = held,
            KeyCode::KeyR => self.restart = held,
            _ => {}
        }
    }

    /// Feed a raw winit keyboard event through [`Self::handle_key`]
    pub fn handle_key_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(code) = event.physical_key {
            self.handle_key(code, event.state.is_pressed());
        }
    }

    /// The "is key held" snapshot consumed by the simulation each tick
    pub fn snapshot(&self) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
            jump: self.jump,
            restart: self.restart,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release_toggle_the_snapshot() {
        let mut keys = KeyState::new();
        keys.handle_key(KeyCode::KeyA, true);
        assert!(keys.snapshot().left);

        keys.handle_key(KeyCode::KeyA, false);
        assert!(!keys.snapshot().left);
    }

    #[test]
    fn arrows_alias_the_letter_keys() {
        let mut keys = KeyState::new();
        keys.handle_key(KeyCode::ArrowLeft, true);
        keys.handle_key(KeyCode::ArrowRight, true);
        let snapshot = keys.snapshot();
        assert!(snapshot.left);
        assert!(snapshot.right);
    }

    #[test]
    fn jump_and_restart_map_to_space_and_r() {
        let mut keys = KeyState::new();
        keys.handle_key(KeyCode::Space, true);
        keys.handle_key(KeyCode::KeyR, true);
        let snapshot = keys.snapshot();
        assert!(snapshot.jump);
        assert!(snapshot.restart);
        assert!(!snapshot.left);
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        let mut keys = KeyState::new();
        keys.handle_key(KeyCode::KeyQ, true);
        let snapshot = keys.snapshot();
        assert!(!snapshot.left && !snapshot.right && !snapshot.jump && !snapshot.restart);
    }
}
