//! VMA419 / DMD LED Dot Matrix Panel Driver
//!
//! A driver for chains of multiplexed monochrome 32x16 LED dot matrix panels
//! (Velleman VMA419, Freetronics DMD and compatibles).
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Arbitrary panel tiling, side by side and stacked
//! - Pixels, lines, boxes, circles and text with pluggable combine modes
//! - Scrolling marquee with an in-place fast path
//! - Bit-banged GPIO or hardware SPI data path
//!
//! ## Usage
//!
//! The panel has no frame memory; the driver keeps a frame buffer you draw
//! into and multiplexes it out one quarter at a time. Call
//! [`Display::scan_one_phase`] at 400 Hz or faster for a steady image.
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use vma419::{Builder, Display, GpioInterface, GraphicsMode, PanelLayout};
//!
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let mut delay = MockDelay;
//! # let (data, clk, a, b, lat, oe) = (MockPin, MockPin, MockPin, MockPin, MockPin, MockPin);
//! let interface = GpioInterface::new(data, clk, a, b, lat, oe);
//! let layout = match PanelLayout::new(1, 1) {
//!     Ok(layout) => layout,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().layout(layout).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = match Display::new(interface, [0u8; 64], config) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//! display.draw_string_centered(4, "Hi!", GraphicsMode::Normal);
//!
//! loop {
//!     let _ = display.scan_one_phase(&mut delay);
//!     delay.delay_us(2500);
//! }
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Display configuration types and builder
pub mod config;
/// Core display operations and the scan engine
pub mod display;
/// Error types for the driver
pub mod error;
/// Font table parsing and glyph access
pub mod font;
/// Built-in font tables
pub mod fonts;
/// Bit-packed frame buffer over caller-provided storage
pub mod framebuffer;
/// Hardware interface abstraction
pub mod interface;
/// Logical-to-physical pixel address mapping
pub mod mapping;
/// Scrolling marquee text
pub mod marquee;
/// Pixel combine modes
pub mod mode;
/// Shape rasterization primitives
pub mod raster;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use config::{
    Builder, Config, PANEL_RAM_BYTES, PIXELS_ACROSS_PER_PANEL, PIXELS_DOWN_PER_PANEL, PanelLayout,
};
pub use display::{Display, DrawResult, SCAN_PHASES};
pub use error::{BuilderError, Error};
pub use font::Font;
pub use fonts::FONT_5X7;
pub use framebuffer::FrameBuffer;
pub use interface::{
    DEFAULT_CLOCK_HALF_PERIOD_US, DEFAULT_LATCH_HOLD_US, GpioInterface, InterfaceError,
    ScanInterface, SpiInterface,
};
pub use marquee::MARQUEE_MAX_CHARS;
pub use mode::GraphicsMode;
