//! The sensor frame — the single mutable snapshot of world state.
//!
//! `SensorFrame` is owned by the control loop and overwritten once per
//! cycle by acquisition. The running extrema persist across cycles and are
//! never reset; a process restart re-initialises them from their sentinel
//! values.

/// Running minimum/maximum of one metric since startup.
///
/// Starts from sentinel opposite extremes so the first observation becomes
/// both bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extrema {
    pub min: f32,
    pub max: f32,
}

impl Extrema {
    /// Sentinel state before any value has been observed.
    pub const fn unobserved() -> Self {
        Self {
            min: f32::INFINITY,
            max: f32::NEG_INFINITY,
        }
    }

    /// Fold one observation into the running bounds. Monotonic: `min` only
    /// ever decreases, `max` only ever increases.
    pub fn observe(&mut self, value: f32) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// True once both bounds bracket `value`.
    pub fn brackets(&self, value: f32) -> bool {
        self.min <= value && value <= self.max
    }
}

impl Default for Extrema {
    fn default() -> Self {
        Self::unobserved()
    }
}

/// A point-in-time snapshot of every sensor in the system, plus the
/// running extrema of the displayed metrics.
#[derive(Debug, Clone, Copy)]
pub struct SensorFrame {
    /// Soil moisture after linear calibration, clamped to [0, 100].
    pub soil_moisture_percent: f32,
    /// Ambient temperature from the environmental sensor (°C).
    pub temperature_c: f32,
    /// Relative humidity from the environmental sensor (%).
    pub relative_humidity_percent: f32,
    /// Ambient illuminance (lux), never negative.
    pub illuminance_lux: f32,
    /// True when the raw reservoir reading falls below the refill threshold.
    pub water_level_low: bool,
    /// Battery voltage after divider compensation (V).
    pub battery_voltage: f32,
    /// Battery charge estimate, linear in voltage, clamped to [0, 100].
    pub battery_charge_percent: f32,

    pub soil_extrema: Extrema,
    pub temperature_extrema: Extrema,
    pub humidity_extrema: Extrema,
    pub lux_extrema: Extrema,
}

impl SensorFrame {
    pub fn new() -> Self {
        Self {
            soil_moisture_percent: 0.0,
            temperature_c: 0.0,
            relative_humidity_percent: 0.0,
            illuminance_lux: 0.0,
            water_level_low: false,
            battery_voltage: 0.0,
            battery_charge_percent: 0.0,
            soil_extrema: Extrema::unobserved(),
            temperature_extrema: Extrema::unobserved(),
            humidity_extrema: Extrema::unobserved(),
            lux_extrema: Extrema::unobserved(),
        }
    }

    /// Fold the current readings into the running extrema. Called once per
    /// acquisition, after all value fields have been written.
    pub fn track_extrema(&mut self) {
        self.soil_extrema.observe(self.soil_moisture_percent);
        self.temperature_extrema.observe(self.temperature_c);
        self.humidity_extrema.observe(self.relative_humidity_percent);
        self.lux_extrema.observe(self.illuminance_lux);
    }
}

impl Default for SensorFrame {
    fn default() -> Self {
        Self::new()
    }
}
