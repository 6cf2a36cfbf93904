//! SSD1306 OLED display wrapper.
//!
//! Layout (128×64, one 16 px row per field):
//!
//! ```text
//! ┌──────────────────────────────┐
//! │      $20.00   [Bill Amt]     │  value left, caption right
//! │         15%   [Tip %]        │
//! │ Tip Amt:          $3.00      │  caption left, value right
//! │ Total:           $23.00      │
//! └──────────────────────────────┘
//! ```
//!
//! A caption in brackets is drawn inverted while its field has edit focus.

use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_7X13_BOLD};
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

use crate::config::{DISPLAY_ROW_HEIGHT, DISPLAY_WIDTH};
use crate::error::Error;
use crate::ui::{Field, Screen};

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Width of the value column for the two editable rows.
const VALUE_WIDTH: i32 = (DISPLAY_WIDTH as i32 * 60) / 100;

/// Panel that renders a [`Screen`] model.
pub struct Panel<I2C> {
    display: Display<I2C>,
}

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Result<Panel<I2C>, Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().map_err(|_| Error::Display)?;
    display.clear_buffer();
    display.flush().map_err(|_| Error::Display)?;
    Ok(Panel { display })
}

fn caption_style(inverted: bool) -> MonoTextStyle<'static, BinaryColor> {
    let (fg, bg) = if inverted {
        (BinaryColor::Off, BinaryColor::On)
    } else {
        (BinaryColor::On, BinaryColor::Off)
    };
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(fg)
        .background_color(bg)
        .build()
}

fn value_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_7X13_BOLD)
        .text_color(BinaryColor::On)
        .build()
}

impl<I2C> Panel<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Redraw every field from `screen` and push the frame over I²C.
    pub fn draw(&mut self, screen: &Screen) -> Result<(), Error> {
        self.display.clear_buffer();

        for (row, field) in Field::ALL.into_iter().enumerate() {
            self.draw_row(row as i32, field, screen);
        }

        self.display.flush().map_err(|_| Error::Display)
    }

    fn draw_row(&mut self, row: i32, field: Field, screen: &Screen) {
        let top = row * DISPLAY_ROW_HEIGHT as i32;
        let middle = top + DISPLAY_ROW_HEIGHT as i32 / 2;
        let right = DISPLAY_WIDTH as i32 - 1;

        let left_aligned = TextStyleBuilder::new()
            .alignment(Alignment::Left)
            .baseline(Baseline::Middle)
            .build();
        let right_aligned = TextStyleBuilder::new()
            .alignment(Alignment::Right)
            .baseline(Baseline::Middle)
            .build();

        match field {
            Field::Bill | Field::TipPercent => {
                let inverted = screen.is_emphasized(field);
                if inverted {
                    let _ = Rectangle::new(
                        Point::new(VALUE_WIDTH, top),
                        Size::new((right - VALUE_WIDTH + 1) as u32, DISPLAY_ROW_HEIGHT),
                    )
                    .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
                    .draw(&mut self.display);
                }
                let _ = Text::with_text_style(
                    screen.text(field),
                    Point::new(VALUE_WIDTH - 4, middle),
                    value_style(),
                    right_aligned,
                )
                .draw(&mut self.display);
                let _ = Text::with_text_style(
                    field.label(),
                    Point::new(right, middle),
                    caption_style(inverted),
                    right_aligned,
                )
                .draw(&mut self.display);
            }
            Field::TipAmount | Field::Total => {
                let _ = Text::with_text_style(
                    field.label(),
                    Point::new(0, middle),
                    caption_style(false),
                    left_aligned,
                )
                .draw(&mut self.display);
                let _ = Text::with_text_style(
                    screen.text(field),
                    Point::new(right, middle),
                    value_style(),
                    right_aligned,
                )
                .draw(&mut self.display);
            }
        }
    }
}
