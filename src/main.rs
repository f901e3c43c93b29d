//! PlantStation Firmware — Main Entry Point
//!
//! Hexagonal architecture around one cooperative control loop.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Adapters (outer ring)                    │
//! │                                                              │
//! │  HardwareAdapter        OledDisplay      LogEventSink        │
//! │  (Sensor+Input+Actuator)(DisplayPort)    (EventSink)         │
//! │  Esp32Clock                                                  │
//! │  (ClockPort)                                                 │
//! │                                                              │
//! │  ──────────────── Port Trait Boundary ─────────────────      │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────┐      │
//! │  │            StationService (pure logic)             │      │
//! │  │  frame · debouncer · cards · presenter · policy    │      │
//! │  └────────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
pub mod config;
pub mod error;
mod pins;

pub mod adapters;
pub mod app;
pub mod drivers;
pub mod frame;
pub mod policy;
pub mod sensors;
pub mod ui;

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use log::{error, info};

use esp_idf_hal::units::FromValueType;

use adapters::display::OledDisplay;
use adapters::hardware::HardwareAdapter;
use adapters::log_sink::LogEventSink;
use adapters::time::Esp32Clock;
use app::ports::{ActuatorPort, ClockPort};
use app::service::StationService;
use config::StationConfig;
use drivers::indicator::IndicatorLed;
use drivers::pump::PumpDriver;
use sensors::SensorHub;
use sensors::battery::BatterySensor;
use sensors::environment::EnvironmentSensor;
use sensors::light::LightSensor;
use sensors::soil::SoilSensor;
use sensors::water_level::WaterLevelSensor;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("PlantStation v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Peripheral bring-up ────────────────────────────────
    // ADC, GPIO directions, sensor rail power, sensor I2C bus.
    if let Err(e) = drivers::hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        // In production this triggers the watchdog reset after timeout.
        error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }
    let watchdog = drivers::watchdog::Watchdog::new();

    let config = StationConfig::default();

    // ── 3. Display panel (fatal if absent) ────────────────────
    // Without a panel the card UI has no purpose: halt forever.
    let peripherals = esp_idf_hal::peripherals::Peripherals::take()?;
    let i2c_config = esp_idf_hal::i2c::config::Config::new().baudrate(400.kHz().into());
    let i2c = esp_idf_hal::i2c::I2cDriver::new(
        peripherals.i2c0,
        peripherals.pins.gpio21,
        peripherals.pins.gpio22,
        &i2c_config,
    )?;
    let mut display = match OledDisplay::new(i2c) {
        Ok(d) => d,
        Err(e) => {
            error!("display init failed: {} — halting", e);
            loop {
                esp_idf_hal::delay::FreeRtos::delay_ms(1_000);
            }
        }
    };

    // ── 4. Sensors (bus devices degrade, never halt) ──────────
    let mut sensor_hub = SensorHub::new(
        SoilSensor::new(pins::SOIL_ADC_GPIO),
        WaterLevelSensor::new(pins::WATER_LEVEL_ADC_GPIO),
        BatterySensor::new(pins::BATTERY_ADC_GPIO),
        EnvironmentSensor::new(),
        LightSensor::new(),
    );
    sensor_hub.probe();

    // ── 5. Adapters + service ─────────────────────────────────
    let mut hw = HardwareAdapter::new(sensor_hub, PumpDriver::new(), IndicatorLed::new());
    hw.all_off();
    let mut clock = Esp32Clock::new();
    let mut sink = LogEventSink::new();

    let mut station = StationService::new(config.clone());
    station.start(&mut sink);

    info!("System ready. Entering control loop.");

    // ── 6. Control loop ───────────────────────────────────────
    loop {
        station.tick(&mut hw, &mut display, &mut clock, &mut sink);
        watchdog.feed();
        clock.delay_ms(config.loop_interval_ms);
    }
}
