//! Mock adapters for integration tests.
//!
//! Records every actuator call with its virtual timestamp so tests can
//! assert on the full command history — including pulse hold times —
//! without touching real GPIO or a panel.

use std::cell::Cell;
use std::rc::Rc;

use plantstation::app::events::StationEvent;
use plantstation::app::ports::{
    ActuatorPort, ClockPort, DisplayPort, EventSink, InputPort, SensorPort,
};
use plantstation::frame::SensorFrame;

// ── Shared virtual time ───────────────────────────────────────

/// One virtual millisecond counter shared between the clock and the
/// actuator recorder, so every recorded call carries the time it happened.
#[derive(Clone)]
pub struct SharedTime(Rc<Cell<u64>>);

impl SharedTime {
    pub fn new(start_ms: u64) -> Self {
        Self(Rc::new(Cell::new(start_ms)))
    }

    pub fn now(&self) -> u64 {
        self.0.get()
    }

    pub fn advance(&self, ms: u64) {
        self.0.set(self.0.get() + ms);
    }
}

/// [`ClockPort`] over the shared counter: delays simply advance time.
pub struct FakeClock {
    time: SharedTime,
}

impl FakeClock {
    pub fn new(time: SharedTime) -> Self {
        Self { time }
    }
}

impl ClockPort for FakeClock {
    fn now_ms(&self) -> u64 {
        self.time.now()
    }

    fn delay_ms(&mut self, ms: u32) {
        self.time.advance(u64::from(ms));
    }
}

// ── Sensor preset + actuator recording ────────────────────────

/// Values the next acquisition writes into the frame.
#[derive(Debug, Clone, Copy)]
pub struct SensorPreset {
    pub soil_percent: f32,
    pub temperature_c: f32,
    pub humidity_percent: f32,
    pub lux: f32,
    pub water_low: bool,
    pub battery_voltage: f32,
    pub battery_percent: f32,
}

impl Default for SensorPreset {
    /// A healthy, well-watered station: nothing to do.
    fn default() -> Self {
        Self {
            soil_percent: 55.0,
            temperature_c: 22.0,
            humidity_percent: 40.0,
            lux: 300.0,
            water_low: false,
            battery_voltage: 3.9,
            battery_percent: 66.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorCall {
    Pump(bool),
    Indicator(bool),
    AllOff,
}

pub struct MockHardware {
    time: SharedTime,
    pub preset: SensorPreset,
    pub button_level: bool,
    /// Every actuator call with the virtual time it was issued.
    pub calls: Vec<(u64, ActuatorCall)>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new(time: SharedTime) -> Self {
        Self {
            time,
            preset: SensorPreset::default(),
            button_level: false,
            calls: Vec::new(),
        }
    }

    /// Timestamped pump level changes, in order.
    pub fn pump_transitions(&self) -> Vec<(u64, bool)> {
        self.calls
            .iter()
            .filter_map(|(t, c)| match c {
                ActuatorCall::Pump(on) => Some((*t, *on)),
                _ => None,
            })
            .collect()
    }

    pub fn pump_ever_ran(&self) -> bool {
        self.calls
            .iter()
            .any(|(_, c)| matches!(c, ActuatorCall::Pump(true)))
    }
}

impl SensorPort for MockHardware {
    fn acquire(&mut self, frame: &mut SensorFrame) {
        let p = &self.preset;
        frame.soil_moisture_percent = p.soil_percent;
        frame.temperature_c = p.temperature_c;
        frame.relative_humidity_percent = p.humidity_percent;
        frame.illuminance_lux = p.lux;
        frame.water_level_low = p.water_low;
        frame.battery_voltage = p.battery_voltage;
        frame.battery_charge_percent = p.battery_percent;
        frame.track_extrema();
    }
}

impl InputPort for MockHardware {
    fn button_level(&mut self) -> bool {
        self.button_level
    }
}

impl ActuatorPort for MockHardware {
    fn set_pump(&mut self, on: bool) {
        self.calls.push((self.time.now(), ActuatorCall::Pump(on)));
    }

    fn set_indicator(&mut self, on: bool) {
        self.calls
            .push((self.time.now(), ActuatorCall::Indicator(on)));
    }

    fn all_off(&mut self) {
        self.calls.push((self.time.now(), ActuatorCall::AllOff));
    }
}

// ── Display recorder ──────────────────────────────────────────

/// Counts panel operations; pixel content is covered by the presenter's
/// own unit tests.
#[derive(Default)]
pub struct CountingDisplay {
    pub clears: usize,
    pub presents: usize,
}

impl DisplayPort for CountingDisplay {
    fn clear(&mut self) {
        self.clears += 1;
    }
    fn set_cursor(&mut self, _x: i32, _y: i32) {}
    fn draw_text(&mut self, _text: &str) {}
    fn draw_rect(&mut self, _x: i32, _y: i32, _w: u32, _h: u32) {}
    fn fill_rect(&mut self, _x: i32, _y: i32, _w: u32, _h: u32) {}
    fn present(&mut self) {
        self.presents += 1;
    }
}

// ── Event capture ─────────────────────────────────────────────

pub struct CollectSink {
    pub events: Vec<StationEvent>,
}

#[allow(dead_code)]
impl CollectSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn telemetry_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, StationEvent::Telemetry(_)))
            .count()
    }

    pub fn card_changes(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, StationEvent::CardChanged { .. }))
            .count()
    }

    pub fn pulses(&self) -> Vec<f32> {
        self.events
            .iter()
            .filter_map(|e| match e {
                StationEvent::PumpPulse {
                    soil_moisture_percent,
                    ..
                } => Some(*soil_moisture_percent),
                _ => None,
            })
            .collect()
    }
}

impl EventSink for CollectSink {
    fn emit(&mut self, event: &StationEvent) {
        self.events.push(event.clone());
    }
}
