//! One-shot hardware peripheral initialization.
//!
//! Configures ADC channels, GPIO directions, and the sensor-bus I2C master
//! using raw ESP-IDF sys calls. Called once from `main()` before the
//! control loop starts. Also drives the sensor power rail high so the
//! probes are energised before the first acquisition.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use crate::error::SensorError;
#[cfg(target_os = "espidf")]
use crate::pins;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    AdcInitFailed(i32),
    GpioConfigFailed(i32),
    I2cInitFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AdcInitFailed(rc) => write!(f, "ADC1 init failed (rc={})", rc),
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
            Self::I2cInitFailed(rc) => write!(f, "sensor I2C init failed (rc={})", rc),
        }
    }
}

// ── ADC channel map (ESP32, ADC unit 1) ───────────────────────

/// Soil moisture probe — GPIO 35.
pub const ADC1_CH_SOIL: u32 = 7;
/// Reservoir level probe — GPIO 34.
pub const ADC1_CH_WATER: u32 = 6;
/// Battery divider — GPIO 32.
pub const ADC1_CH_BATTERY: u32 = 4;

/// Sensor bus controller (AHT20 + BH1750).
#[cfg(target_os = "espidf")]
const SENSOR_I2C_PORT: i32 = 1;
#[cfg(target_os = "espidf")]
const SENSOR_I2C_FREQ_HZ: u32 = 100_000;
#[cfg(target_os = "espidf")]
const I2C_TIMEOUT_TICKS: u32 = 100;

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before the control loop; single-threaded.
    unsafe {
        init_adc()?;
        init_gpio()?;
        init_sensor_i2c()?;
    }
    info!("hw_init: all peripherals configured, sensor rail powered");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals() -> Result<(), HwInitError> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

// ── ADC (oneshot) ─────────────────────────────────────────────

#[cfg(target_os = "espidf")]
static mut ADC1_HANDLE: adc_oneshot_unit_handle_t = core::ptr::null_mut();

/// SAFETY: Must be called only from the single-threaded init path or the
/// main-loop ADC read path. No concurrent access is possible because
/// `init_adc()` completes before the control loop starts.
#[cfg(target_os = "espidf")]
unsafe fn adc1_handle() -> adc_oneshot_unit_handle_t {
    unsafe { ADC1_HANDLE }
}

#[cfg(target_os = "espidf")]
unsafe fn init_adc() -> Result<(), HwInitError> {
    let init_cfg = adc_oneshot_unit_init_cfg_t {
        unit_id: adc_unit_t_ADC_UNIT_1,
        ulp_mode: adc_ulp_mode_t_ADC_ULP_MODE_DISABLE,
        ..Default::default()
    };
    // SAFETY: ADC1_HANDLE is only written here, once at boot.
    let ret = unsafe { adc_oneshot_new_unit(&init_cfg, &raw mut ADC1_HANDLE) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::AdcInitFailed(ret));
    }

    let chan_cfg = adc_oneshot_chan_cfg_t {
        atten: adc_atten_t_ADC_ATTEN_DB_12,
        bitwidth: adc_bitwidth_t_ADC_BITWIDTH_12,
    };

    for channel in [ADC1_CH_SOIL, ADC1_CH_WATER, ADC1_CH_BATTERY] {
        let ret = unsafe { adc_oneshot_config_channel(adc1_handle(), channel, &chan_cfg) };
        if ret != ESP_OK as i32 {
            return Err(HwInitError::AdcInitFailed(ret));
        }
    }

    info!("hw_init: ADC1 configured (CH7=soil, CH6=water, CH4=battery)");
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn adc1_read(channel: u32) -> u16 {
    let mut raw: i32 = 0;
    // SAFETY: adc1_handle() contract — single-threaded main-loop access only.
    let ret = unsafe { adc_oneshot_read(adc1_handle(), channel, &mut raw) };
    if ret != ESP_OK as i32 {
        return 0;
    }
    raw.max(0) as u16
}

#[cfg(not(target_os = "espidf"))]
pub fn adc1_read(_channel: u32) -> u16 {
    0
}

// ── GPIO ──────────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_gpio() -> Result<(), HwInitError> {
    let output_mask = (1u64 << pins::PUMP_GPIO)
        | (1u64 << pins::INDICATOR_GPIO)
        | (1u64 << pins::SENSOR_POWER_GPIO);
    let out_cfg = gpio_config_t {
        pin_bit_mask: output_mask,
        mode: gpio_mode_t_GPIO_MODE_OUTPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    let ret = unsafe { gpio_config(&out_cfg) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::GpioConfigFailed(ret));
    }

    // Button is active-high with an external pull-down.
    let in_cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pins::BUTTON_GPIO,
        mode: gpio_mode_t_GPIO_MODE_INPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_ENABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    let ret = unsafe { gpio_config(&in_cfg) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::GpioConfigFailed(ret));
    }

    // Known-safe output state before the first cycle: pump off, indicator
    // off, sensor rail energised.
    gpio_write(pins::PUMP_GPIO, false);
    gpio_write(pins::INDICATOR_GPIO, false);
    gpio_write(pins::SENSOR_POWER_GPIO, true);

    info!("hw_init: GPIO configured (pump/indicator low, sensor rail high)");
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) {
    // SAFETY: pin was configured as an output in init_gpio().
    unsafe {
        gpio_set_level(pin, u32::from(high));
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(_pin: i32, _high: bool) {}

#[cfg(target_os = "espidf")]
pub fn gpio_read(pin: i32) -> bool {
    // SAFETY: pin was configured as an input in init_gpio().
    unsafe { gpio_get_level(pin) != 0 }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_read(_pin: i32) -> bool {
    false
}

// ── Sensor I2C bus ────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_sensor_i2c() -> Result<(), HwInitError> {
    let mut cfg: i2c_config_t = Default::default();
    cfg.mode = i2c_mode_t_I2C_MODE_MASTER;
    cfg.sda_io_num = pins::SENSOR_I2C_SDA_GPIO;
    cfg.scl_io_num = pins::SENSOR_I2C_SCL_GPIO;
    cfg.sda_pullup_en = true;
    cfg.scl_pullup_en = true;
    cfg.__bindgen_anon_1.master.clk_speed = SENSOR_I2C_FREQ_HZ;

    let ret = unsafe { i2c_param_config(SENSOR_I2C_PORT, &cfg) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::I2cInitFailed(ret));
    }

    let ret = unsafe { i2c_driver_install(SENSOR_I2C_PORT, i2c_mode_t_I2C_MODE_MASTER, 0, 0, 0) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::I2cInitFailed(ret));
    }

    info!("hw_init: sensor I2C master up (port 1, 100 kHz)");
    Ok(())
}

/// Write `data` to the sensor-bus device at `addr`.
#[cfg(target_os = "espidf")]
pub fn i2c_write(addr: u8, data: &[u8]) -> Result<(), SensorError> {
    // SAFETY: the I2C driver was installed in init_sensor_i2c(); the
    // sensor bus is only touched from the single-threaded control loop.
    let ret = unsafe {
        i2c_master_write_to_device(
            SENSOR_I2C_PORT,
            addr,
            data.as_ptr(),
            data.len(),
            I2C_TIMEOUT_TICKS,
        )
    };
    if ret != ESP_OK as i32 {
        return Err(SensorError::BusWriteFailed);
    }
    Ok(())
}

/// Read `buf.len()` bytes from the sensor-bus device at `addr`.
#[cfg(target_os = "espidf")]
pub fn i2c_read(addr: u8, buf: &mut [u8]) -> Result<(), SensorError> {
    // SAFETY: see i2c_write().
    let ret = unsafe {
        i2c_master_read_from_device(
            SENSOR_I2C_PORT,
            addr,
            buf.as_mut_ptr(),
            buf.len(),
            I2C_TIMEOUT_TICKS,
        )
    };
    if ret != ESP_OK as i32 {
        return Err(SensorError::BusReadFailed);
    }
    Ok(())
}

// Host builds never reach the bus helpers — the sensor drivers read from
// their sim atomics instead — but the signatures stay available so the
// shared code paths typecheck.
#[cfg(not(target_os = "espidf"))]
pub fn i2c_write(_addr: u8, _data: &[u8]) -> Result<(), SensorError> {
    Err(SensorError::NotPresent)
}

#[cfg(not(target_os = "espidf"))]
pub fn i2c_read(_addr: u8, _buf: &mut [u8]) -> Result<(), SensorError> {
    Err(SensorError::NotPresent)
}
