//! Battery voltage and charge estimation.
//!
//! A single-cell Li-ion battery sensed through a 1:2 resistive divider:
//! the ADC sees half the cell voltage, so the conversion multiplies the
//! divider ratio back in. Charge is a fixed linear map of voltage over the
//! usable discharge band [3.30 V, 4.20 V], clamped — crude, but monotonic
//! and good enough to gate the pump and fill a glyph.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC1_CH4 via the oneshot API (initialised by hw_init).
//! On host/test: reads from a static `AtomicU16` for injection.

use core::sync::atomic::AtomicU16;
#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::Ordering;

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

static SIM_BATTERY_ADC: AtomicU16 = AtomicU16::new(0);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_battery_adc(raw: u16) {
    SIM_BATTERY_ADC.store(raw, Ordering::Relaxed);
}

const ADC_MAX: f32 = 4095.0;
const V_REF: f32 = 3.3;
/// Divider compensation: the ADC sees the cell through a 1:2 divider.
const DIVIDER_RATIO: f32 = 2.0;

/// Voltage mapped to 0% charge.
pub const EMPTY_VOLTAGE: f32 = 3.30;
/// Voltage mapped to 100% charge.
pub const FULL_VOLTAGE: f32 = 4.20;

#[derive(Debug, Clone, Copy)]
pub struct BatteryReading {
    pub raw: u16,
    pub voltage: f32,
    pub charge_percent: f32,
}

pub struct BatterySensor {
    _adc_gpio: i32,
}

impl BatterySensor {
    pub fn new(adc_gpio: i32) -> Self {
        Self {
            _adc_gpio: adc_gpio,
        }
    }

    pub fn read(&mut self) -> BatteryReading {
        let raw = self.read_adc();
        let voltage = raw_to_voltage(raw);
        BatteryReading {
            raw,
            voltage,
            charge_percent: voltage_to_percent(voltage),
        }
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> u16 {
        hw_init::adc1_read(hw_init::ADC1_CH_BATTERY)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> u16 {
        SIM_BATTERY_ADC.load(Ordering::Relaxed)
    }
}

/// Divider-compensated cell voltage.
pub fn raw_to_voltage(raw: u16) -> f32 {
    f32::from(raw) / ADC_MAX * V_REF * DIVIDER_RATIO
}

/// Linear charge estimate over [`EMPTY_VOLTAGE`, `FULL_VOLTAGE`], clamped
/// to [0, 100].
pub fn voltage_to_percent(voltage: f32) -> f32 {
    ((voltage - EMPTY_VOLTAGE) / (FULL_VOLTAGE - EMPTY_VOLTAGE) * 100.0).clamp(0.0, 100.0)
}
