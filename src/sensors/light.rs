//! BH1750 ambient light sensor driver (I2C, address 0x23).
//!
//! Put into continuous high-resolution mode at probe time; each read then
//! just fetches the latest two-byte measurement. Counts convert to lux
//! with the datasheet's fixed 1.2 counts/lx factor.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: talks to the bus through the hw_init I2C helpers.
//! On host/test: reads from static atomics for injection.

use core::sync::atomic::{AtomicBool, AtomicU32};
#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::Ordering;

use crate::error::SensorError;
#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

static SIM_LUX: AtomicU32 = AtomicU32::new(0);
static SIM_LIGHT_PRESENT: AtomicBool = AtomicBool::new(true);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_lux(lux: f32) {
    SIM_LUX.store(lux.to_bits(), Ordering::Relaxed);
}

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_light_present(present: bool) {
    SIM_LIGHT_PRESENT.store(present, Ordering::Relaxed);
}

#[cfg(target_os = "espidf")]
const BH1750_ADDR: u8 = 0x23;
#[cfg(target_os = "espidf")]
const CMD_POWER_ON: u8 = 0x01;
#[cfg(target_os = "espidf")]
const CMD_CONTINUOUS_HIGH_RES: u8 = 0x10;

/// Datasheet conversion factor: raw counts per lux.
const COUNTS_PER_LUX: f32 = 1.2;

pub struct LightSensor {
    present: bool,
}

impl LightSensor {
    /// Assumed absent until [`probe`](Self::probe) succeeds.
    pub fn new() -> Self {
        Self { present: false }
    }

    /// One-time startup probe: power the device on and start continuous
    /// high-resolution sampling. Returns whether the device answered.
    #[cfg(target_os = "espidf")]
    pub fn probe(&mut self) -> bool {
        self.present = hw_init::i2c_write(BH1750_ADDR, &[CMD_POWER_ON]).is_ok()
            && hw_init::i2c_write(BH1750_ADDR, &[CMD_CONTINUOUS_HIGH_RES]).is_ok();
        self.present
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn probe(&mut self) -> bool {
        self.present = SIM_LIGHT_PRESENT.load(Ordering::Relaxed);
        self.present
    }

    /// Fetch the latest continuous-mode measurement.
    #[cfg(target_os = "espidf")]
    pub fn read(&mut self) -> Result<f32, SensorError> {
        if !self.present {
            return Err(SensorError::NotPresent);
        }
        let mut buf = [0u8; 2];
        hw_init::i2c_read(BH1750_ADDR, &mut buf)?;
        Ok(raw_to_lux(u16::from_be_bytes(buf)))
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn read(&mut self) -> Result<f32, SensorError> {
        if !self.present {
            return Err(SensorError::NotPresent);
        }
        Ok(f32::from_bits(SIM_LUX.load(Ordering::Relaxed)))
    }
}

impl Default for LightSensor {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw counts → lux, never negative.
pub fn raw_to_lux(raw: u16) -> f32 {
    f32::from(raw) / COUNTS_PER_LUX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_convert_at_datasheet_factor() {
        assert!((raw_to_lux(1200) - 1000.0).abs() < 0.01);
        assert_eq!(raw_to_lux(0), 0.0);
    }

    #[test]
    fn full_scale_is_finite_and_positive() {
        let lux = raw_to_lux(u16::MAX);
        assert!(lux > 0.0);
        assert!(lux.is_finite());
    }

    #[test]
    fn reads_before_a_successful_probe_degrade_to_not_present() {
        let mut sensor = LightSensor::new();
        assert!(matches!(sensor.read(), Err(SensorError::NotPresent)));
    }
}
