//! Irrigation decision policy.
//!
//! A pure, memoryless threshold rule evaluated against the latest
//! [`SensorFrame`] once per cycle. There is no hysteresis and no cool-down:
//! while the soil stays below the activation threshold, the pump re-fires
//! every cycle after the preceding pulse and inter-cycle delay complete.
//! The only damping is the moisture rise the watering itself causes.

use crate::config::StationConfig;
use crate::frame::SensorFrame;

/// Outcome of one policy evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Run one pump pulse this cycle.
    Activate,
    /// Leave the pump off this cycle.
    Skip,
}

/// Threshold rule gating the pump.
pub struct IrrigationPolicy {
    soil_activate_threshold_percent: f32,
    min_battery_voltage: f32,
}

impl IrrigationPolicy {
    pub fn new(config: &StationConfig) -> Self {
        Self {
            soil_activate_threshold_percent: config.soil_activate_threshold_percent,
            min_battery_voltage: config.min_battery_voltage,
        }
    }

    /// `Activate` iff the soil is strictly below the threshold, the
    /// reservoir is not low, and the battery can drive the pump.
    ///
    /// Boundary semantics: soil exactly at the threshold skips; battery
    /// exactly at the minimum is eligible.
    pub fn decide(&self, frame: &SensorFrame) -> Decision {
        let dry = frame.soil_moisture_percent < self.soil_activate_threshold_percent;
        let reservoir_ok = !frame.water_level_low;
        let battery_ok = frame.battery_voltage >= self.min_battery_voltage;

        if dry && reservoir_ok && battery_ok {
            Decision::Activate
        } else {
            Decision::Skip
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> IrrigationPolicy {
        IrrigationPolicy::new(&StationConfig::default())
    }

    fn frame(soil: f32, water_low: bool, voltage: f32) -> SensorFrame {
        let mut f = SensorFrame::new();
        f.soil_moisture_percent = soil;
        f.water_level_low = water_low;
        f.battery_voltage = voltage;
        f
    }

    #[test]
    fn activates_when_dry_with_water_and_charge() {
        assert_eq!(policy().decide(&frame(20.0, false, 3.8)), Decision::Activate);
    }

    #[test]
    fn boundary_soil_just_below_threshold_activates() {
        assert_eq!(policy().decide(&frame(29.9, false, 3.4)), Decision::Activate);
    }

    #[test]
    fn boundary_soil_at_threshold_skips() {
        assert_eq!(policy().decide(&frame(30.0, false, 3.4)), Decision::Skip);
    }

    #[test]
    fn boundary_battery_at_minimum_is_eligible() {
        assert_eq!(policy().decide(&frame(29.9, false, 3.4)), Decision::Activate);
        assert_eq!(policy().decide(&frame(29.9, false, 3.39)), Decision::Skip);
    }

    #[test]
    fn empty_reservoir_always_skips() {
        assert_eq!(policy().decide(&frame(29.9, true, 3.4)), Decision::Skip);
        assert_eq!(policy().decide(&frame(0.0, true, 4.2)), Decision::Skip);
    }

    #[test]
    fn wet_soil_skips_regardless_of_resources() {
        assert_eq!(policy().decide(&frame(80.0, false, 4.2)), Decision::Skip);
    }

    #[test]
    fn decision_is_memoryless_across_evaluations() {
        let p = policy();
        let dry = frame(10.0, false, 3.9);
        assert_eq!(p.decide(&dry), Decision::Activate);
        // Same frame, same answer — no internal state, no cool-down.
        assert_eq!(p.decide(&dry), Decision::Activate);
    }
}
