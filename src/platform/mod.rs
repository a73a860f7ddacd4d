//! Platform abstraction layer
//!
//! The outer loop's collaborators, as traits with in-process implementations:
//! - Time (monotonic wall clock, or a manual clock for headless runs)
//! - Keyboard input
//! - Window lifecycle (close requests, buffer swaps)

pub mod input;
pub mod time;
pub mod window;

pub use input::{Input, KEY_COUNT, KeyboardState, keys};
pub use time::{Clock, ManualClock, SystemClock};
pub use window::{HeadlessWindow, Window};
