//! Window lifecycle seen by the frame loop

/// The parts of a window the outer loop drives once per frame
pub trait Window {
    fn should_close(&self) -> bool;
    fn set_to_close(&mut self);
    /// Present the frame that was just drawn
    fn swap_buffers(&mut self);
}

/// A window with no surface; counts presented frames
#[derive(Debug, Clone, Default)]
pub struct HeadlessWindow {
    close_requested: bool,
    frames_presented: u64,
    /// Close automatically after this many frames
    frame_limit: Option<u64>,
}

impl HeadlessWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_frame_limit(limit: u64) -> Self {
        Self {
            frame_limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl Window for HeadlessWindow {
    fn should_close(&self) -> bool {
        self.close_requested
            || self
                .frame_limit
                .is_some_and(|limit| self.frames_presented >= limit)
    }

    fn set_to_close(&mut self) {
        self.close_requested = true;
    }

    fn swap_buffers(&mut self) {
        self.frames_presented += 1;
    }
}
