//! Water pump driver (low-side MOSFET switch, active-high gate).
//!
//! ## Safety contract
//!
//! The pump must never run with the reservoir low or the battery below its
//! minimum. Enforced by the irrigation policy; this driver is a dumb
//! actuator.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the real GPIO via hw_init helpers.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;
use crate::pins;

pub struct PumpDriver {
    running: bool,
}

impl PumpDriver {
    /// Starts in the stopped state; `hw_init` already drove the line low.
    pub fn new() -> Self {
        Self { running: false }
    }

    pub fn set(&mut self, on: bool) {
        hw_init::gpio_write(pins::PUMP_GPIO, on);
        self.running = on;
    }

    pub fn stop(&mut self) {
        self.set(false);
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Default for PumpDriver {
    fn default() -> Self {
        Self::new()
    }
}
