//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the [`SensorHub`] and the actuator drivers, exposing them through
//! [`SensorPort`], [`InputPort`] and [`ActuatorPort`]. This is the only
//! module besides the display adapter that touches actual hardware. On
//! non-espidf targets, the underlying drivers use cfg-gated simulation
//! stubs.

use crate::app::ports::{ActuatorPort, InputPort, SensorPort};
use crate::drivers::hw_init;
use crate::drivers::indicator::IndicatorLed;
use crate::drivers::pump::PumpDriver;
use crate::frame::SensorFrame;
use crate::pins;
use crate::sensors::SensorHub;

/// Concrete adapter that combines all board hardware behind port traits.
pub struct HardwareAdapter {
    sensor_hub: SensorHub,
    pump: PumpDriver,
    indicator: IndicatorLed,
}

impl HardwareAdapter {
    pub fn new(sensor_hub: SensorHub, pump: PumpDriver, indicator: IndicatorLed) -> Self {
        Self {
            sensor_hub,
            pump,
            indicator,
        }
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for HardwareAdapter {
    fn acquire(&mut self, frame: &mut SensorFrame) {
        self.sensor_hub.acquire(frame);
    }
}

// ── InputPort implementation ──────────────────────────────────

impl InputPort for HardwareAdapter {
    fn button_level(&mut self) -> bool {
        hw_init::gpio_read(pins::BUTTON_GPIO)
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl ActuatorPort for HardwareAdapter {
    fn set_pump(&mut self, on: bool) {
        self.pump.set(on);
    }

    fn set_indicator(&mut self, on: bool) {
        self.indicator.set(on);
    }

    fn all_off(&mut self) {
        self.pump.stop();
        self.indicator.off();
    }
}
