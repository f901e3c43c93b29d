//! Reservoir water level probe.
//!
//! An analog float/conductivity probe in the watering reservoir: the raw
//! reading collapses when the water surface drops below the probe. One
//! fixed threshold turns it into a refill flag — no percentage is derived.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC1_CH6 via the oneshot API (initialised by hw_init).
//! On host/test: reads from a static `AtomicU16` for injection.

use core::sync::atomic::AtomicU16;
#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::Ordering;

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

static SIM_WATER_ADC: AtomicU16 = AtomicU16::new(2000);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_water_adc(raw: u16) {
    SIM_WATER_ADC.store(raw, Ordering::Relaxed);
}

/// Raw reading below which the reservoir counts as low.
pub const REFILL_THRESHOLD_RAW: u16 = 1000;

#[derive(Debug, Clone, Copy)]
pub struct WaterLevelReading {
    pub raw: u16,
    pub low: bool,
}

pub struct WaterLevelSensor {
    _adc_gpio: i32,
}

impl WaterLevelSensor {
    pub fn new(adc_gpio: i32) -> Self {
        Self {
            _adc_gpio: adc_gpio,
        }
    }

    pub fn read(&mut self) -> WaterLevelReading {
        let raw = self.read_adc();
        WaterLevelReading {
            raw,
            low: is_low(raw),
        }
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> u16 {
        hw_init::adc1_read(hw_init::ADC1_CH_WATER)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> u16 {
        SIM_WATER_ADC.load(Ordering::Relaxed)
    }
}

/// Low iff the raw reading falls strictly below the threshold.
pub fn is_low(raw: u16) -> bool {
    raw < REFILL_THRESHOLD_RAW
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_boundary_is_exclusive() {
        assert!(is_low(0));
        assert!(is_low(999));
        assert!(!is_low(1000));
        assert!(!is_low(4095));
    }
}
