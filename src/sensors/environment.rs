//! AHT20 temperature/humidity sensor driver (I2C, address 0x38).
//!
//! Trigger-measure-read cycle per the datasheet: send the measurement
//! command, wait for the conversion, read seven bytes, unpack two packed
//! 20-bit values. A device that fails its startup probe is remembered as
//! absent and every subsequent read degrades to `NotPresent` — the frame
//! keeps its stale values and the loop carries on.
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

static SIM_TEMPERATURE_C: AtomicU32 = AtomicU32::new(0);
static SIM_HUMIDITY: AtomicU32 = AtomicU32::new(0);
static SIM_ENV_PRESENT: AtomicBool = AtomicBool::new(true);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_environment(temperature_c: f32, humidity_percent: f32) {
    SIM_TEMPERATURE_C.store(temperature_c.to_bits(), Ordering::Relaxed);
    SIM_HUMIDITY.store(humidity_percent.to_bits(), Ordering::Relaxed);
}

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_env_present(present: bool) {
    SIM_ENV_PRESENT.store(present, Ordering::Relaxed);
}

#[cfg(target_os = "espidf")]
const AHT20_ADDR: u8 = 0x38;
#[cfg(target_os = "espidf")]
const CMD_STATUS: u8 = 0x71;
#[cfg(target_os = "espidf")]
const CMD_INIT: [u8; 3] = [0xBE, 0x08, 0x00];
#[cfg(target_os = "espidf")]
const CMD_MEASURE: [u8; 3] = [0xAC, 0x33, 0x00];
#[cfg(target_os = "espidf")]
const STATUS_BUSY: u8 = 0x80;
#[cfg(target_os = "espidf")]
const STATUS_CALIBRATED: u8 = 0x08;
/// Conversion time per datasheet is 75 ms; leave margin.
#[cfg(target_os = "espidf")]
const MEASUREMENT_WAIT_MS: u32 = 80;

/// Both raw values are 20-bit fractions of full scale.
const RAW_FULL_SCALE: f32 = 1_048_576.0; // 2^20

#[derive(Debug, Clone, Copy)]
pub struct EnvReading {
    pub temperature_c: f32,
    pub humidity_percent: f32,
}

pub struct EnvironmentSensor {
    present: bool,
}

impl EnvironmentSensor {
    /// Assumed absent until [`probe`](Self::probe) succeeds.
    pub fn new() -> Self {
        Self { present: false }
    }

    /// One-time startup probe; calibrates the sensor if it needs it.
    /// Returns whether the device answered.
    #[cfg(target_os = "espidf")]
    pub fn probe(&mut self) -> bool {
        let mut status = [0u8; 1];
        let answered = hw_init::i2c_write(AHT20_ADDR, &[CMD_STATUS]).is_ok()
            && hw_init::i2c_read(AHT20_ADDR, &mut status).is_ok();
        if !answered {
            self.present = false;
            return false;
        }

        if status[0] & STATUS_CALIBRATED == 0 {
            let _ = hw_init::i2c_write(AHT20_ADDR, &CMD_INIT);
            esp_idf_hal::delay::FreeRtos::delay_ms(10);
        }

        self.present = true;
        true
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn probe(&mut self) -> bool {
        self.present = SIM_ENV_PRESENT.load(Ordering::Relaxed);
        self.present
    }

    /// Trigger one measurement and read it back.
    #[cfg(target_os = "espidf")]
    pub fn read(&mut self) -> Result<EnvReading, SensorError> {
        if !self.present {
            return Err(SensorError::NotPresent);
        }

        hw_init::i2c_write(AHT20_ADDR, &CMD_MEASURE)?;
        esp_idf_hal::delay::FreeRtos::delay_ms(MEASUREMENT_WAIT_MS);

        let mut buf = [0u8; 7];
        hw_init::i2c_read(AHT20_ADDR, &mut buf)?;
        if buf[0] & STATUS_BUSY != 0 {
            return Err(SensorError::Busy);
        }

        Ok(parse_measurement(&buf))
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn read(&mut self) -> Result<EnvReading, SensorError> {
        if !self.present {
            return Err(SensorError::NotPresent);
        }
        Ok(EnvReading {
            temperature_c: f32::from_bits(SIM_TEMPERATURE_C.load(Ordering::Relaxed)),
            humidity_percent: f32::from_bits(SIM_HUMIDITY.load(Ordering::Relaxed)),
        })
    }
}

impl Default for EnvironmentSensor {
    fn default() -> Self {
        Self::new()
    }
}

/// Unpack a 7-byte AHT20 measurement: status, 20-bit humidity, 20-bit
/// temperature (split across the shared middle byte), CRC (ignored).
fn parse_measurement(buf: &[u8; 7]) -> EnvReading {
    let hum_raw =
        (u32::from(buf[1]) << 12) | (u32::from(buf[2]) << 4) | (u32::from(buf[3]) >> 4);
    let temp_raw =
        (u32::from(buf[3] & 0x0F) << 16) | (u32::from(buf[4]) << 8) | u32::from(buf[5]);

    EnvReading {
        humidity_percent: hum_raw as f32 / RAW_FULL_SCALE * 100.0,
        temperature_c: temp_raw as f32 / RAW_FULL_SCALE * 200.0 - 50.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_half_scale_values() {
        // Humidity raw = 0x80000 (half scale → 50%); temperature raw =
        // 0x80000 (half scale → 50 °C).
        let buf = [0x1C, 0x80, 0x00, 0x08, 0x00, 0x00, 0x00];
        let r = parse_measurement(&buf);
        assert!((r.humidity_percent - 50.0).abs() < 0.01);
        assert!((r.temperature_c - 50.0).abs() < 0.01);
    }

    #[test]
    fn parse_zero_raw_is_minus_fifty() {
        let buf = [0x1C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
        let r = parse_measurement(&buf);
        assert_eq!(r.humidity_percent, 0.0);
        assert!((r.temperature_c - -50.0).abs() < 0.01);
    }

    #[test]
    fn reads_before_a_successful_probe_degrade_to_not_present() {
        let mut sensor = EnvironmentSensor::new();
        assert!(matches!(sensor.read(), Err(SensorError::NotPresent)));
    }
}
