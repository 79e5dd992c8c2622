//! [embedded-graphics](https://crates.io/crates/embedded-graphics) support
//!
//! Implements [`DrawTarget`] over [`BinaryColor`] so the whole
//! embedded-graphics primitive and text ecosystem can render to the panel.
//! `BinaryColor::On` lights an LED. Drawing goes straight to the frame
//! buffer; the scan engine picks it up on the next phase.
//!
//! Enabled by the default `graphics` feature.
//!
//! ## Example
//!
//! ```rust,ignore
//! use embedded_graphics::{
//!     prelude::*,
//!     pixelcolor::BinaryColor,
//!     primitives::{Circle, PrimitiveStyle},
//! };
//!
//! Circle::new(Point::new(8, 0), 16)
//!     .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
//!     .draw(&mut display)?;
//! ```

use embedded_graphics_core::Pixel;
use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::{OriginDimensions, Size};
use embedded_graphics_core::pixelcolor::BinaryColor;

use crate::display::Display;
use crate::interface::ScanInterface;
use crate::mode::GraphicsMode;

impl<I, B> OriginDimensions for Display<I, B>
where
    I: ScanInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn size(&self) -> Size {
        Size::new(u32::from(self.width()), u32::from(self.height()))
    }
}

impl<I, B> DrawTarget for Display<I, B>
where
    I: ScanInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Color = BinaryColor;
    // Out-of-bounds pixels clip in the buffer layer
    type Error = core::convert::Infallible;

    fn draw_iter<P>(&mut self, pixels: P) -> Result<(), Self::Error>
    where
        P: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.y >= 0 {
                self.write_pixel(
                    point.x as u16,
                    point.y as u16,
                    GraphicsMode::Normal,
                    color.is_on(),
                );
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        if color.is_on() {
            self.fill();
        } else {
            Display::clear(self);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::tests::single_panel;
    use embedded_graphics::prelude::*;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    #[test]
    fn test_size_matches_layout() {
        let display = single_panel();
        assert_eq!(display.size(), Size::new(32, 16));
    }

    #[test]
    fn test_rectangle_draws_into_buffer() {
        let mut display = single_panel();
        Rectangle::new(Point::new(1, 1), Size::new(4, 3))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut display)
            .unwrap();
        assert_eq!(display.pixel(1, 1), Some(true));
        assert_eq!(display.pixel(4, 3), Some(true));
        assert_eq!(display.pixel(5, 1), Some(false));
    }

    #[test]
    fn test_offscreen_pixels_clip() {
        let mut display = single_panel();
        Rectangle::new(Point::new(-2, -2), Size::new(3, 3))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut display)
            .unwrap();
        assert_eq!(display.pixel(0, 0), Some(true));
    }

    #[test]
    fn test_clear_to_on_fills() {
        let mut display = single_panel();
        DrawTarget::clear(&mut display, BinaryColor::On).unwrap();
        assert!(display.buffer().iter().all(|&b| b == 0xFF));
        DrawTarget::clear(&mut display, BinaryColor::Off).unwrap();
        assert!(display.buffer().iter().all(|&b| b == 0x00));
    }
}
