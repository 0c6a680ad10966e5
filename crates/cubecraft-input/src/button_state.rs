//! Per-frame state of a key or mouse button.

/// State of a button (key or mouse button) within the current frame.
///
/// Holds whether the button is down and how many press/release transitions
/// happened since the last [`end_frame`](Self::end_frame). Counting
/// transitions keeps a click that is pressed and released inside a single
/// frame from being lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    down: bool,
    presses: u32,
    releases: u32,
}

impl ButtonState {
    /// Returns `true` if the button is currently held.
    #[inline]
    #[must_use]
    pub const fn is_down(self) -> bool {
        self.down
    }

    /// Returns `true` if the button went down at least once this frame.
    #[inline]
    #[must_use]
    pub const fn is_just_pressed(self) -> bool {
        self.presses > 0
    }

    /// Returns `true` if the button went up at least once this frame.
    #[inline]
    #[must_use]
    pub const fn is_just_released(self) -> bool {
        self.releases > 0
    }

    /// Number of down transitions this frame.
    #[inline]
    #[must_use]
    pub const fn presses(self) -> u32 {
        self.presses
    }

    /// Record a press. Repeated presses while held are ignored.
    #[inline]
    pub fn press(&mut self) {
        if !self.down {
            self.down = true;
            self.presses += 1;
        }
    }

    /// Record a release. Releasing an idle button is ignored.
    #[inline]
    pub fn release(&mut self) {
        if self.down {
            self.down = false;
            self.releases += 1;
        }
    }

    /// Forget this frame's transitions, keeping the held state.
    #[inline]
    pub fn end_frame(&mut self) {
        self.presses = 0;
        self.releases = 0;
    }
}
