//! System configuration parameters.
//!
//! All tunable parameters for the irrigation station. The struct is built
//! once in `main` and passed down explicitly — there is no persistence and
//! no runtime calibration interface; sensor calibration constants live with
//! the individual sensor drivers.

use serde::{Deserialize, Serialize};

/// Core station configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationConfig {
    // --- Irrigation policy ---
    /// Soil moisture (%) below which the pump activates.
    pub soil_activate_threshold_percent: f32,
    /// Minimum battery voltage (V) required to run the pump.
    pub min_battery_voltage: f32,
    /// Duration of one pump activation pulse (milliseconds).
    pub pump_pulse_ms: u32,

    // --- Input ---
    /// Minimum time between accepted button level transitions (milliseconds).
    pub debounce_window_ms: u32,

    // --- Display transition ---
    /// Horizontal distance each slide animation step moves (pixels).
    pub slide_step_px: u32,
    /// Dwell time per slide animation step (milliseconds).
    pub slide_step_ms: u32,

    // --- Timing ---
    /// Control loop interval (milliseconds).
    pub loop_interval_ms: u32,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            // Irrigation policy
            soil_activate_threshold_percent: 30.0,
            min_battery_voltage: 3.4,
            pump_pulse_ms: 3000,

            // Input
            debounce_window_ms: 200,

            // Display transition: 8 px per step across a 128 px panel is
            // 16 steps, ~160 ms per full slide.
            slide_step_px: 8,
            slide_step_ms: 10,

            // Timing
            loop_interval_ms: 200,
        }
    }
}
