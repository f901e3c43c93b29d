//! Poll-based debouncer for the card-advance button.
//!
//! The button line is sampled once per control cycle. A transition is
//! accepted only when the line level differs from the last sample *and*
//! the debounce window has elapsed since the last accepted transition;
//! only an accepted transition to the pressed level emits an event, so a
//! single mechanical press yields exactly one advance even while the raw
//! level chatters for milliseconds. The last sampled level is always
//! updated, window or not — releases are silently absorbed.

/// Line level that counts as "pressed" (active-high wiring).
pub const PRESSED_LEVEL: bool = true;

/// Event emitted after a debounced press edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    Activated,
}

/// Debounce state — created once at startup, polled every cycle, lives for
/// the process duration.
pub struct InputDebouncer {
    debounce_window_ms: u64,
    last_raw_level: bool,
    last_transition_ms: u64,
}

impl InputDebouncer {
    pub fn new(debounce_window_ms: u32) -> Self {
        Self {
            debounce_window_ms: u64::from(debounce_window_ms),
            last_raw_level: false,
            last_transition_ms: 0,
        }
    }

    /// Feed one raw sample taken at `now_ms`.
    ///
    /// Returns `Some(Activated)` for a debounced press edge, `None`
    /// otherwise (no change, gated by the window, or a release edge).
    pub fn poll(&mut self, raw_level: bool, now_ms: u64) -> Option<ButtonEvent> {
        let mut event = None;

        if raw_level != self.last_raw_level
            && now_ms.saturating_sub(self.last_transition_ms) > self.debounce_window_ms
        {
            self.last_transition_ms = now_ms;
            if raw_level == PRESSED_LEVEL {
                event = Some(ButtonEvent::Activated);
            }
        }

        // Always track the freshly read level, accepted or not.
        self.last_raw_level = raw_level;
        event
    }
}
