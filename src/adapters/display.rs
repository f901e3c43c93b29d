//! SSD1306 OLED adapter — implements [`DisplayPort`] for the 128x32 panel.
//!
//! Generic over any `embedded-hal` I2C bus; `main` hands it the ESP32's
//! I2C0 controller. Drawing goes through `embedded-graphics` primitives
//! into the driver's back buffer; [`present`](DisplayPort::present) flushes
//! the buffer to the panel in one transfer.
//!
//! Display initialisation failure is **fatal** for the station — the card
//! UI has no purpose without a panel — so `new` returns an error the
//! caller turns into a halt.

use embedded_graphics::{
    mono_font::{MonoTextStyle, ascii::FONT_5X8},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};
use embedded_hal::i2c::I2c;
use log::warn;
use ssd1306::{I2CDisplayInterface, Ssd1306, mode::BufferedGraphicsMode, prelude::*};

use crate::app::ports::DisplayPort;
use crate::error::{Error, Result};

type Panel<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x32, BufferedGraphicsMode<DisplaySize128x32>>;

/// Buffered SSD1306 panel behind the [`DisplayPort`] trait.
pub struct OledDisplay<I2C> {
    panel: Panel<I2C>,
    cursor: Point,
}

impl<I2C: I2c> OledDisplay<I2C> {
    /// Bring up the panel at its default address (0x3C).
    pub fn new(i2c: I2C) -> Result<Self> {
        let interface = I2CDisplayInterface::new(i2c);
        let mut panel = Ssd1306::new(interface, DisplaySize128x32, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        panel
            .init()
            .map_err(|_| Error::Init("SSD1306 init failed"))?;
        Ok(Self {
            panel,
            cursor: Point::zero(),
        })
    }
}

impl<I2C: I2c> DisplayPort for OledDisplay<I2C> {
    fn clear(&mut self) {
        // Buffered mode draws are infallible; UFCS avoids the inherent
        // clear method's differing signature.
        let _ = DrawTarget::clear(&mut self.panel, BinaryColor::Off);
    }

    fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor = Point::new(x, y);
    }

    fn draw_text(&mut self, text: &str) {
        let style = MonoTextStyle::new(&FONT_5X8, BinaryColor::On);
        let _ = Text::with_baseline(text, self.cursor, style, Baseline::Top)
            .draw(&mut self.panel);
    }

    fn draw_rect(&mut self, x: i32, y: i32, w: u32, h: u32) {
        let _ = Rectangle::new(Point::new(x, y), Size::new(w, h))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut self.panel);
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32) {
        let _ = Rectangle::new(Point::new(x, y), Size::new(w, h))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut self.panel);
    }

    fn present(&mut self) {
        if let Err(e) = self.panel.flush() {
            warn!("display flush failed: {e:?}");
        }
    }
}
