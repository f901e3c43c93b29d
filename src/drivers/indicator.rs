//! Status indicator LED driver.
//!
//! A single discrete LED that mirrors the pump pulse so a watering event
//! is visible from across the room.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the real GPIO via hw_init helpers.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;
use crate::pins;

pub struct IndicatorLed {
    lit: bool,
}

impl IndicatorLed {
    pub fn new() -> Self {
        Self { lit: false }
    }

    pub fn set(&mut self, on: bool) {
        hw_init::gpio_write(pins::INDICATOR_GPIO, on);
        self.lit = on;
    }

    pub fn off(&mut self) {
        self.set(false);
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }
}

impl Default for IndicatorLed {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_on_off_state() {
        let mut led = IndicatorLed::new();
        assert!(!led.is_lit());
        led.set(true);
        assert!(led.is_lit());
        led.off();
        assert!(!led.is_lit());
    }
}
