//! Card renderer for the 128x32 status panel.
//!
//! Pure read of the [`SensorFrame`]; every pixel goes through the
//! [`DisplayPort`] collaborator. Layout positions are pre-computed
//! constants so the render path does no per-frame arithmetic beyond the
//! proportional bar fill.

use core::fmt::Write as _;

use heapless::String;

use crate::app::ports::{ClockPort, DisplayPort};
use crate::config::StationConfig;
use crate::frame::{Extrema, SensorFrame};
use crate::ui::cards::CardView;

// ---------------------------------------------------------------------------
// Layout constants
// ---------------------------------------------------------------------------

/// Panel width in pixels (SSD1306, 128x32).
pub const DISPLAY_WIDTH: u32 = 128;
/// Panel height in pixels.
pub const DISPLAY_HEIGHT: u32 = 32;

/// Three text rows fit the 32 px panel with an 8 px font.
const TITLE_Y: i32 = 0;
const VALUE_Y: i32 = 12;
const SPAN_Y: i32 = 24;

/// Proportional bar, top-right corner next to the title.
const BAR_X: i32 = 68;
const BAR_Y: i32 = 2;
const BAR_WIDTH: u32 = 58;
const BAR_HEIGHT: u32 = 8;

/// Battery glyph geometry (body + terminal nub).
const BATT_X: i32 = 68;
const BATT_Y: i32 = 2;
const BATT_BODY_W: u32 = 24;
const BATT_BODY_H: u32 = 8;

/// Marker thresholds on the battery card.
const BATTERY_WARN_VOLTAGE: f32 = 3.4;
const BATTERY_CHARGE_VOLTAGE: f32 = 4.15;

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Render `card` and push it to the panel.
pub fn render(display: &mut impl DisplayPort, card: CardView, frame: &SensorFrame) {
    display.clear();
    draw_card(display, card, frame, 0);
    display.present();
}

/// Slide `from` out to the left while `to` comes in from the right.
///
/// Time-boxed: one step per `slide_step_ms`, `slide_step_px` pixels each,
/// ~160 ms for the whole transition at the default configuration. Each
/// step waits on an elapsed-time check against the clock port rather than
/// one unconditional sleep. Button presses landing inside this window are
/// not observed; the debounce window already exceeds it.
pub fn slide(
    display: &mut impl DisplayPort,
    clock: &mut impl ClockPort,
    from: CardView,
    to: CardView,
    frame: &SensorFrame,
    config: &StationConfig,
) {
    let step_px = config.slide_step_px.max(1);
    let steps = DISPLAY_WIDTH / step_px;
    let mut deadline = clock.now_ms();

    for step in 1..=steps {
        let offset = (step * step_px) as i32;
        display.clear();
        draw_card(display, from, frame, -offset);
        draw_card(display, to, frame, DISPLAY_WIDTH as i32 - offset);
        display.present();

        deadline += u64::from(config.slide_step_ms);
        while clock.now_ms() < deadline {
            clock.delay_ms(1);
        }
    }
}

// ---------------------------------------------------------------------------
// Card bodies
// ---------------------------------------------------------------------------

/// Draw one card with its left edge at `x0` (negative or past the right
/// edge during a slide; the panel clips).
fn draw_card(display: &mut impl DisplayPort, card: CardView, frame: &SensorFrame, x0: i32) {
    display.set_cursor(x0, TITLE_Y);
    display.draw_text(card.title());

    match card {
        CardView::Soil => {
            draw_value(display, x0, format_percent(frame.soil_moisture_percent));
            draw_bar(display, x0, frame.soil_moisture_percent);
            draw_span(display, x0, &frame.soil_extrema);
        }
        CardView::Temperature => {
            let mut line: String<24> = String::new();
            let _ = write!(line, "{:.1} C", frame.temperature_c);
            draw_value(display, x0, line);
            draw_span(display, x0, &frame.temperature_extrema);
        }
        CardView::Humidity => {
            draw_value(display, x0, format_percent(frame.relative_humidity_percent));
            draw_bar(display, x0, frame.relative_humidity_percent);
            draw_span(display, x0, &frame.humidity_extrema);
        }
        CardView::Light => {
            let mut line: String<24> = String::new();
            let _ = write!(line, "{:.0} lx", frame.illuminance_lux);
            draw_value(display, x0, line);
            draw_span(display, x0, &frame.lux_extrema);
        }
        CardView::WaterLevel => {
            let status = if frame.water_level_low {
                "RESERVOIR LOW"
            } else {
                "RESERVOIR OK"
            };
            display.set_cursor(x0, VALUE_Y);
            display.draw_text(status);
            if frame.water_level_low {
                display.set_cursor(x0, SPAN_Y);
                display.draw_text("refill now");
            }
        }
        CardView::Battery => {
            let mut line: String<24> = String::new();
            let _ = write!(
                line,
                "{:.2} V  {:.0}%",
                frame.battery_voltage, frame.battery_charge_percent
            );
            draw_value(display, x0, line);
            draw_battery_glyph(display, x0, frame);
        }
    }
}

// ---------------------------------------------------------------------------
// Shared drawing helpers
// ---------------------------------------------------------------------------

fn draw_value(display: &mut impl DisplayPort, x0: i32, line: String<24>) {
    display.set_cursor(x0, VALUE_Y);
    display.draw_text(&line);
}

/// `lo .. hi` line from the running extrema.
fn draw_span(display: &mut impl DisplayPort, x0: i32, extrema: &Extrema) {
    let mut line: String<24> = String::new();
    let _ = write!(line, "lo {:.0}  hi {:.0}", extrema.min, extrema.max);
    display.set_cursor(x0, SPAN_Y);
    display.draw_text(&line);
}

/// Horizontal proportional bar: outline plus a fill whose width maps the
/// percentage linearly onto the fixed interior width.
fn draw_bar(display: &mut impl DisplayPort, x0: i32, percent: f32) {
    display.draw_rect(x0 + BAR_X, BAR_Y, BAR_WIDTH, BAR_HEIGHT);
    let fill = bar_fill_width(percent);
    if fill > 0 {
        display.fill_rect(x0 + BAR_X + 1, BAR_Y + 1, fill, BAR_HEIGHT - 2);
    }
}

/// Interior fill width for a percentage in [0, 100].
pub fn bar_fill_width(percent: f32) -> u32 {
    let interior = (BAR_WIDTH - 2) as f32;
    (interior * percent.clamp(0.0, 100.0) / 100.0) as u32
}

/// Battery outline, terminal nub, proportional charge fill, and a warning
/// (`!`) or charging (`+`) marker at the voltage extremes.
fn draw_battery_glyph(display: &mut impl DisplayPort, x0: i32, frame: &SensorFrame) {
    display.draw_rect(x0 + BATT_X, BATT_Y, BATT_BODY_W, BATT_BODY_H);
    display.fill_rect(
        x0 + BATT_X + BATT_BODY_W as i32,
        BATT_Y + 2,
        2,
        BATT_BODY_H - 4,
    );

    let interior = (BATT_BODY_W - 2) as f32;
    let fill = (interior * frame.battery_charge_percent.clamp(0.0, 100.0) / 100.0) as u32;
    if fill > 0 {
        display.fill_rect(x0 + BATT_X + 1, BATT_Y + 1, fill, BATT_BODY_H - 2);
    }

    let marker = if frame.battery_voltage < BATTERY_WARN_VOLTAGE {
        Some("!")
    } else if frame.battery_voltage > BATTERY_CHARGE_VOLTAGE {
        Some("+")
    } else {
        None
    };
    if let Some(m) = marker {
        display.set_cursor(x0 + BATT_X + BATT_BODY_W as i32 + 6, TITLE_Y);
        display.draw_text(m);
    }
}

fn format_percent(value: f32) -> String<24> {
    let mut line: String<24> = String::new();
    let _ = write!(line, "{:.1} %", value);
    line
}
