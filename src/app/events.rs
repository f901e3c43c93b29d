//! Outbound application events.
//!
//! The [`StationService`](super::service::StationService) emits these
//! through the [`EventSink`](super::ports::EventSink) port. The production
//! adapter writes them to the serial log; tests capture them directly.

use crate::ui::cards::CardView;

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum StationEvent {
    /// The service has started (carries the initial card).
    Started(CardView),

    /// Per-cycle status snapshot — the diagnostic text stream.
    Telemetry(TelemetryData),

    /// The card selector advanced.
    CardChanged { from: CardView, to: CardView },

    /// One pump pulse completed.
    PumpPulse {
        duration_ms: u32,
        soil_moisture_percent: f32,
    },
}

/// A point-in-time status snapshot suitable for the one-line-per-cycle log.
#[derive(Debug, Clone)]
pub struct TelemetryData {
    pub card: CardView,
    pub soil_moisture_percent: f32,
    pub temperature_c: f32,
    pub relative_humidity_percent: f32,
    pub illuminance_lux: f32,
    pub water_level_low: bool,
    pub battery_voltage: f32,
    pub battery_charge_percent: f32,
}
