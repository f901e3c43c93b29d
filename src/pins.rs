//! GPIO / peripheral pin assignments for the PlantStation main board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers. Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Actuators
// ---------------------------------------------------------------------------

/// Digital output: water pump driver (active HIGH).
pub const PUMP_GPIO: i32 = 19;
/// Digital output: status indicator LED, mirrors the pump pulse (active HIGH).
pub const INDICATOR_GPIO: i32 = 2;
/// Digital output: sensor rail power control, driven HIGH at bring-up.
pub const SENSOR_POWER_GPIO: i32 = 16;

// ---------------------------------------------------------------------------
// Sensors — Analog (ADC1)
// ---------------------------------------------------------------------------

/// Capacitive soil moisture probe — analog voltage.
/// ADC1 channel 7 (GPIO 35 on ESP32).
pub const SOIL_ADC_GPIO: i32 = 35;

/// Reservoir water level probe — analog voltage.
/// ADC1 channel 6 (GPIO 34 on ESP32).
pub const WATER_LEVEL_ADC_GPIO: i32 = 34;

/// Battery voltage through a 1:2 resistive divider.
/// ADC1 channel 4 (GPIO 32 on ESP32).
pub const BATTERY_ADC_GPIO: i32 = 32;

// ---------------------------------------------------------------------------
// Sensors — I2C bus (AHT20 + BH1750)
// ---------------------------------------------------------------------------

pub const SENSOR_I2C_SDA_GPIO: i32 = 25;
pub const SENSOR_I2C_SCL_GPIO: i32 = 26;

// ---------------------------------------------------------------------------
// Display — I2C bus (SSD1306 128x32)
// ---------------------------------------------------------------------------

pub const DISPLAY_I2C_SDA_GPIO: i32 = 21;
pub const DISPLAY_I2C_SCL_GPIO: i32 = 22;

// ---------------------------------------------------------------------------
// User button (active-high, external pull-down)
// ---------------------------------------------------------------------------

/// Momentary push-button cycling the display cards.
pub const BUTTON_GPIO: i32 = 27;
