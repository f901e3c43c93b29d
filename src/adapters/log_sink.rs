//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the logger (which goes to UART / USB-CDC in production). The telemetry
//! line is the station's diagnostic text stream: one human-readable line
//! per cycle, no schema guarantees.

use log::info;

use crate::app::events::StationEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`StationEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &StationEvent) {
        match event {
            StationEvent::Telemetry(t) => {
                info!(
                    "Soil: {:.1}% | Temp: {:.1}C | Hum: {:.1}% | Lux: {:.1} lx | \
                     Water Low: {} | Batt: {:.2}V ({:.0}%) | Card: {:?}",
                    t.soil_moisture_percent,
                    t.temperature_c,
                    t.relative_humidity_percent,
                    t.illuminance_lux,
                    if t.water_level_low { "YES" } else { "NO" },
                    t.battery_voltage,
                    t.battery_charge_percent,
                    t.card,
                );
            }
            StationEvent::CardChanged { from, to } => {
                info!("CARD | {:?} -> {:?}", from, to);
            }
            StationEvent::PumpPulse {
                duration_ms,
                soil_moisture_percent,
            } => {
                info!(
                    "PUMP | pulsed {} ms at soil {:.1}%",
                    duration_ms, soil_moisture_percent
                );
            }
            StationEvent::Started(card) => {
                info!("START | initial_card={:?}", card);
            }
        }
    }
}
