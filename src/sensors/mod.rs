//! Sensor subsystem — individual drivers and the aggregating [`SensorHub`].
//!
//! The hub owns every sensor driver and refreshes the control loop's
//! [`SensorFrame`] in place once per cycle.

pub mod battery;
pub mod environment;
pub mod light;
pub mod soil;
pub mod water_level;

use log::{debug, warn};

use crate::frame::SensorFrame;
use battery::BatterySensor;
use environment::EnvironmentSensor;
use light::LightSensor;
use soil::SoilSensor;
use water_level::WaterLevelSensor;

/// Aggregates all sensor drivers behind one acquisition call.
pub struct SensorHub {
    soil: SoilSensor,
    water_level: WaterLevelSensor,
    battery: BatterySensor,
    environment: EnvironmentSensor,
    light: LightSensor,
}

impl SensorHub {
    /// Construct a new hub. Pass in pre-built drivers (built in main where
    /// peripheral ownership is established).
    pub fn new(
        soil: SoilSensor,
        water_level: WaterLevelSensor,
        battery: BatterySensor,
        environment: EnvironmentSensor,
        light: LightSensor,
    ) -> Self {
        Self {
            soil,
            water_level,
            battery,
            environment,
            light,
        }
    }

    /// One-time startup probe of the bus devices. Absence is logged here
    /// once and never again — subsequent cycles just run degraded.
    pub fn probe(&mut self) {
        if !self.environment.probe() {
            warn!("AHT20 not found — temperature/humidity readings degraded");
        }
        if !self.light.probe() {
            warn!("BH1750 not found — illuminance readings degraded");
        }
    }

    /// Read every input into `frame` and advance the running extrema.
    ///
    /// No caching, no retries. The analog channels always yield a value;
    /// a failed bus read keeps the affected fields stale rather than
    /// aborting the cycle — a flaky sensor must not stop the controller.
    pub fn acquire(&mut self, frame: &mut SensorFrame) {
        frame.soil_moisture_percent = self.soil.read().percent;
        frame.water_level_low = self.water_level.read().low;

        let battery = self.battery.read();
        frame.battery_voltage = battery.voltage;
        frame.battery_charge_percent = battery.charge_percent;

        match self.environment.read() {
            Ok(env) => {
                frame.temperature_c = env.temperature_c;
                frame.relative_humidity_percent = env.humidity_percent;
            }
            Err(e) => debug!("environment read skipped: {e}"),
        }

        match self.light.read() {
            Ok(lux) => frame.illuminance_lux = lux,
            Err(e) => debug!("light read skipped: {e}"),
        }

        frame.track_extrema();
    }
}
