//! Keyboard state
//!
//! Key codes follow the GLFW numbering. Querying a code outside
//! `0..KEY_COUNT` is a programming error and panics.

/// Number of addressable key codes
pub const KEY_COUNT: usize = 1024;

/// Key codes used by the game
pub mod keys {
    pub const SPACE: usize = 32;
    pub const ESCAPE: usize = 256;
    pub const RIGHT: usize = 262;
    pub const LEFT: usize = 263;
    pub const DOWN: usize = 264;
    pub const UP: usize = 265;
}

/// Level-triggered key state, polled once per frame
pub trait Input {
    fn is_key_pressed(&self, key: usize) -> bool;
}

/// Pressed/released state for every key code
#[derive(Debug, Clone)]
pub struct KeyboardState {
    pressed: Box<[bool; KEY_COUNT]>,
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardState {
    pub fn new() -> Self {
        Self {
            pressed: Box::new([false; KEY_COUNT]),
        }
    }

    /// Record a key press or release (from a window event callback)
    pub fn set_key(&mut self, key: usize, pressed: bool) {
        assert!(key < KEY_COUNT, "invalid key code {key}");
        self.pressed[key] = pressed;
    }

    /// Release every key
    pub fn reset(&mut self) {
        self.pressed.fill(false);
    }
}

impl Input for KeyboardState {
    fn is_key_pressed(&self, key: usize) -> bool {
        assert!(key < KEY_COUNT, "invalid key code {key}");
        self.pressed[key]
    }
}
