//! Application service — the hexagonal core.
//!
//! [`StationService`] owns the sensor frame, the card selector, the input
//! debouncer, and the irrigation policy. It exposes a clean,
//! hardware-agnostic API. All I/O flows through port traits injected at
//! call sites, making the entire control cycle testable with mock adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────────┐ ──▶ DisplayPort
//!  InputPort  ──▶ │       StationService       │ ──▶ EventSink
//!                 │  frame · cards · policy    │
//! ActuatorPort ◀──│                            │
//!                 └────────────────────────────┘
//! ```

use log::{info, warn};

use crate::config::StationConfig;
use crate::drivers::button::InputDebouncer;
use crate::frame::SensorFrame;
use crate::policy::{Decision, IrrigationPolicy};
use crate::ui::cards::{CardSelector, CardView};
use crate::ui::presenter;

use super::events::{StationEvent, TelemetryData};
use super::ports::{ActuatorPort, ClockPort, DisplayPort, EventSink, InputPort, SensorPort};

// ───────────────────────────────────────────────────────────────
// StationService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates one monitor-and-control cycle.
pub struct StationService {
    frame: SensorFrame,
    selector: CardSelector,
    debouncer: InputDebouncer,
    policy: IrrigationPolicy,
    config: StationConfig,
    cycle_count: u64,
    reservoir_was_low: bool,
}

impl StationService {
    /// Construct the service from configuration.
    ///
    /// Does **not** emit anything — call [`start`](Self::start) next.
    pub fn new(config: StationConfig) -> Self {
        let policy = IrrigationPolicy::new(&config);
        let debouncer = InputDebouncer::new(config.debounce_window_ms);
        Self {
            frame: SensorFrame::new(),
            selector: CardSelector::new(),
            debouncer,
            policy,
            config,
            cycle_count: 0,
            reservoir_was_low: false,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Announce startup on the event sink.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&StationEvent::Started(self.selector.current()));
        info!("StationService started on {:?} card", self.selector.current());
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one full control cycle:
    /// acquire → debounce input → select card → render → irrigate → telemetry.
    ///
    /// The `hw` parameter satisfies [`SensorPort`], [`InputPort`] **and**
    /// [`ActuatorPort`] — this avoids a double mutable borrow while keeping
    /// the port boundary explicit. Acquisition always runs first, so the
    /// policy and the presenter observe the same consistent snapshot.
    pub fn tick(
        &mut self,
        hw: &mut (impl SensorPort + InputPort + ActuatorPort),
        display: &mut impl DisplayPort,
        clock: &mut impl ClockPort,
        sink: &mut impl EventSink,
    ) {
        self.cycle_count += 1;

        // 1. Refresh the frame via SensorPort (advances extrema).
        hw.acquire(&mut self.frame);
        self.log_reservoir_edges();

        // 2. Debounced button edge → advance the card and slide it in.
        //    Presses landing inside the slide window are not observed; the
        //    debounce window is longer than the whole transition.
        let raw = hw.button_level();
        if self.debouncer.poll(raw, clock.now_ms()).is_some() {
            let from = self.selector.current();
            let to = self.selector.advance();
            sink.emit(&StationEvent::CardChanged { from, to });
            presenter::slide(display, clock, from, to, &self.frame, &self.config);
        }

        // 3. Render the selected card.
        presenter::render(display, self.selector.current(), &self.frame);

        // 4. Policy evaluation and pump actuation.
        if self.policy.decide(&self.frame) == Decision::Activate {
            self.run_pump_pulse(hw, clock, sink);
        }

        // 5. One status line per cycle.
        sink.emit(&StationEvent::Telemetry(self.build_telemetry()));
    }

    // ── Queries ───────────────────────────────────────────────

    /// Build a telemetry snapshot from the current frame.
    pub fn build_telemetry(&self) -> TelemetryData {
        TelemetryData {
            card: self.selector.current(),
            soil_moisture_percent: self.frame.soil_moisture_percent,
            temperature_c: self.frame.temperature_c,
            relative_humidity_percent: self.frame.relative_humidity_percent,
            illuminance_lux: self.frame.illuminance_lux,
            water_level_low: self.frame.water_level_low,
            battery_voltage: self.frame.battery_voltage,
            battery_charge_percent: self.frame.battery_charge_percent,
        }
    }

    /// The latest acquired frame.
    pub fn frame(&self) -> &SensorFrame {
        &self.frame
    }

    /// The card currently shown.
    pub fn current_card(&self) -> CardView {
        self.selector.current()
    }

    /// Total control cycles executed since startup.
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    // ── Internal ──────────────────────────────────────────────

    /// One bounded watering pulse: pump and indicator high, held for the
    /// configured duration, then both low. The hold is an elapsed-time
    /// check against the clock port, not one long sleep; nothing else is
    /// pending during it, so the stall is accepted. No cancellation — a
    /// started pulse runs to completion.
    fn run_pump_pulse(
        &mut self,
        hw: &mut impl ActuatorPort,
        clock: &mut impl ClockPort,
        sink: &mut impl EventSink,
    ) {
        info!(
            "watering: soil at {:.1}%, pulsing pump for {} ms",
            self.frame.soil_moisture_percent, self.config.pump_pulse_ms
        );

        hw.set_pump(true);
        hw.set_indicator(true);

        let started = clock.now_ms();
        let hold = u64::from(self.config.pump_pulse_ms);
        while clock.now_ms().saturating_sub(started) < hold {
            clock.delay_ms(10);
        }

        hw.set_pump(false);
        hw.set_indicator(false);

        sink.emit(&StationEvent::PumpPulse {
            duration_ms: self.config.pump_pulse_ms,
            soil_moisture_percent: self.frame.soil_moisture_percent,
        });
    }

    /// Log reservoir level edges once per transition, not once per cycle.
    fn log_reservoir_edges(&mut self) {
        if self.frame.water_level_low != self.reservoir_was_low {
            if self.frame.water_level_low {
                warn!("reservoir low — watering suspended until refill");
            } else {
                info!("reservoir refilled — watering re-enabled");
            }
            self.reservoir_was_low = self.frame.water_level_low;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn telemetry_mirrors_the_frame() {
        let mut app = StationService::new(StationConfig::default());
        app.frame.soil_moisture_percent = 23.0;
        app.frame.battery_voltage = 3.91;
        app.frame.water_level_low = true;

        let t = app.build_telemetry();
        assert_eq!(t.card, CardView::Soil);
        assert!((t.soil_moisture_percent - 23.0).abs() < f32::EPSILON);
        assert!((t.battery_voltage - 3.91).abs() < f32::EPSILON);
        assert!(t.water_level_low);
    }

    #[test]
    fn cycle_count_starts_at_zero() {
        let app = StationService::new(StationConfig::default());
        assert_eq!(app.cycle_count(), 0);
        assert_eq!(app.current_card(), CardView::Soil);
    }
}
