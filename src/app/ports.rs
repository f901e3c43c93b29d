//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ StationService (domain)
//! ```
//!
//! Driven adapters (sensors, actuators, the display panel, the clock, event
//! sinks) implement these traits. The
//! [`StationService`](super::service::StationService) consumes them via
//! generics, so the domain core never touches hardware directly.

use crate::frame::SensorFrame;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this once per cycle to refresh the
/// frame in place.
pub trait SensorPort {
    /// Read every sensor into `frame` and advance its running extrema.
    ///
    /// Never fails: a degraded bus read leaves the affected fields stale.
    fn acquire(&mut self, frame: &mut SensorFrame);
}

// ───────────────────────────────────────────────────────────────
// Input port (driven adapter: button line → domain)
// ───────────────────────────────────────────────────────────────

/// Raw digital input port for the card-advance button.
pub trait InputPort {
    /// Current raw button level; `true` = pressed (active-high). Noisy —
    /// the domain debounces it.
    fn button_level(&mut self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command actuators.
pub trait ActuatorPort {
    /// Drive the pump output (active-high).
    fn set_pump(&mut self, on: bool);

    /// Drive the status indicator output (active-high).
    fn set_indicator(&mut self, on: bool);

    /// Kill both outputs — safe shutdown.
    fn all_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → panel)
// ───────────────────────────────────────────────────────────────

/// Drawing surface for the 128x32 monochrome status panel.
///
/// Mutations accumulate in a back buffer; nothing reaches the panel until
/// [`present`](DisplayPort::present).
pub trait DisplayPort {
    /// Blank the back buffer.
    fn clear(&mut self);

    /// Move the text cursor (pixel coordinates, top-left origin).
    fn set_cursor(&mut self, x: i32, y: i32);

    /// Draw `text` at the current cursor.
    fn draw_text(&mut self, text: &str);

    /// Draw a 1 px rectangle outline.
    fn draw_rect(&mut self, x: i32, y: i32, w: u32, h: u32);

    /// Draw a filled rectangle.
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32);

    /// Push the back buffer to the panel.
    fn present(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Clock port (driven adapter: monotonic time → domain)
// ───────────────────────────────────────────────────────────────

/// Monotonic time source. The domain's timed waits (slide steps, the pump
/// pulse) check elapsed time against this port rather than sleeping for the
/// whole duration, so the control flow ports unchanged to an event-loop
/// runtime.
pub trait ClockPort {
    /// Milliseconds since boot (monotonic).
    fn now_ms(&self) -> u64;

    /// Yield for approximately `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`StationEvent`](super::events::StationEvent)s
/// through this port. Adapters decide where they go (serial log in
/// production, a capture buffer in tests).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::StationEvent);
}
