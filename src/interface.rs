//! Hardware interface abstraction
//!
//! This module provides the [`ScanInterface`] trait and two implementations
//! for driving the panel's shift-register chain.
//!
//! ## Hardware Requirements
//!
//! A DMD-style panel exposes six logic-level lines:
//! - **DATA**: serial pixel data into the column shift registers
//! - **CLK**: serial clock for DATA
//! - **A**, **B**: binary-encoded row-group select (4 multiplex phases)
//! - **LAT**: latch clock, transfers shifted data to the output drivers
//! - **nOE**: output enable, active low on the stock panel
//!
//! All six are plain push-pull outputs; the panel never talks back. The two
//! provided implementations differ only in how DATA/CLK are driven:
//! [`GpioInterface`] bit-bangs them through `OutputPin`s, [`SpiInterface`]
//! hands them to a hardware SPI peripheral (MODE 0, MSB first). Pins are
//! assumed to already be configured as outputs by the HAL.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use vma419::{GpioInterface, ScanInterface};
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
//! // data, clk, a, b, latch, oe
//! let mut interface =
//!     GpioInterface::new(MockPin, MockPin, MockPin, MockPin, MockPin, MockPin);
//!
//! // Shift one byte, then latch it into the drivers
//! let _ = interface.shift_byte(0xA5, &mut delay);
//! let _ = interface.latch(&mut delay);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Default latch pulse hold time in microseconds
pub const DEFAULT_LATCH_HOLD_US: u32 = 10;

/// Default bit-bang clock half-period in microseconds
pub const DEFAULT_CLOCK_HALF_PERIOD_US: u32 = 2;

/// Trait for the hardware interface to a shift-register LED panel chain
///
/// This trait abstracts over different transports, allowing the
/// [`Display`](crate::display::Display) to stream scan data through any
/// combination of GPIO and SPI that satisfies embedded-hal traits.
///
/// ## Implementing
///
/// For most cases, use [`GpioInterface`] or [`SpiInterface`]. Implement this
/// trait yourself for unusual wiring (inverted row select, shared buses).
pub trait ScanInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Shift one byte into the column drivers, MSB first
    ///
    /// # Errors
    ///
    /// Returns an error if the transport or a GPIO write fails.
    fn shift_byte<D: DelayNs>(&mut self, byte: u8, delay: &mut D)
    -> InterfaceResult<(), Self::Error>;

    /// Drive the two binary-encoded row-select lines
    ///
    /// `a` is the low address bit, `b` the high one. The phase-to-level
    /// encoding is owned by the scan engine; implementations only set levels.
    ///
    /// # Errors
    ///
    /// Returns an error if a GPIO write fails.
    fn select_row_group(&mut self, a: bool, b: bool) -> InterfaceResult<(), Self::Error>;

    /// Gate the latched row data onto the LEDs
    ///
    /// `enabled = false` blanks the panel; `enabled = true` lights the
    /// currently latched rows. Implementations translate to the physical
    /// output-enable polarity.
    ///
    /// # Errors
    ///
    /// Returns an error if a GPIO write fails.
    fn set_display_enabled(&mut self, enabled: bool) -> InterfaceResult<(), Self::Error>;

    /// Pulse the latch line, transferring shifted data to the output stage
    ///
    /// The pulse must be held at least 10 microseconds; the provided
    /// implementations use [`DEFAULT_LATCH_HOLD_US`].
    ///
    /// # Errors
    ///
    /// Returns an error if a GPIO write fails.
    fn latch<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Bit-banged interface driving all six lines through GPIO
///
/// Works on any six output pins; no SPI peripheral needed. Clock pacing is
/// configurable because long panel chains with unbuffered cabling need a
/// slower edge rate.
///
/// ## Type Parameters
///
/// All six parameters implement [`OutputPin`] with a shared error type:
/// `DATA`, `CLK`, `A`, `B`, `LAT`, `OE`.
pub struct GpioInterface<DATA, CLK, A, B, LAT, OE> {
    /// Serial data line
    data: DATA,
    /// Serial clock line
    clk: CLK,
    /// Row select, low address bit
    a: A,
    /// Row select, high address bit
    b: B,
    /// Latch clock line
    lat: LAT,
    /// Output enable line
    oe: OE,
    /// Clock half-period in microseconds
    clock_half_period_us: u32,
    /// Latch pulse hold in microseconds
    latch_hold_us: u32,
    /// Output-enable polarity (true = line low lights the panel)
    oe_active_low: bool,
}

impl<DATA, CLK, A, B, LAT, OE, PinErr> GpioInterface<DATA, CLK, A, B, LAT, OE>
where
    DATA: OutputPin<Error = PinErr>,
    CLK: OutputPin<Error = PinErr>,
    A: OutputPin<Error = PinErr>,
    B: OutputPin<Error = PinErr>,
    LAT: OutputPin<Error = PinErr>,
    OE: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    /// Create a new bit-banged interface
    ///
    /// Pin order: serial data, serial clock, row select A, row select B,
    /// latch clock, output enable.
    pub fn new(data: DATA, clk: CLK, a: A, b: B, lat: LAT, oe: OE) -> Self {
        Self {
            data,
            clk,
            a,
            b,
            lat,
            oe,
            clock_half_period_us: DEFAULT_CLOCK_HALF_PERIOD_US,
            latch_hold_us: DEFAULT_LATCH_HOLD_US,
            oe_active_low: true,
        }
    }

    /// Set the serial clock half-period in microseconds
    ///
    /// Default is 2. Set to 0 to clock as fast as the GPIO allows.
    pub fn set_clock_half_period(&mut self, us: u32) -> &mut Self {
        self.clock_half_period_us = us;
        self
    }

    /// Set the latch pulse hold time in microseconds
    ///
    /// Default is 10; the output latches need at least that.
    pub fn set_latch_hold(&mut self, us: u32) -> &mut Self {
        self.latch_hold_us = us;
        self
    }

    /// Set output-enable polarity
    ///
    /// Default is active-low (the stock panel's nOE line).
    pub fn set_oe_active_low(&mut self, active_low: bool) -> &mut Self {
        self.oe_active_low = active_low;
        self
    }
}

impl<DATA, CLK, A, B, LAT, OE, PinErr> ScanInterface for GpioInterface<DATA, CLK, A, B, LAT, OE>
where
    DATA: OutputPin<Error = PinErr>,
    CLK: OutputPin<Error = PinErr>,
    A: OutputPin<Error = PinErr>,
    B: OutputPin<Error = PinErr>,
    LAT: OutputPin<Error = PinErr>,
    OE: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = PinErr;

    fn shift_byte<D: DelayNs>(
        &mut self,
        byte: u8,
        delay: &mut D,
    ) -> InterfaceResult<(), Self::Error> {
        let mut data = byte;
        for _ in 0..8 {
            if data & 0x80 != 0 {
                self.data.set_high()?;
            } else {
                self.data.set_low()?;
            }
            self.clk.set_high()?;
            if self.clock_half_period_us > 0 {
                delay.delay_us(self.clock_half_period_us);
            }
            self.clk.set_low()?;
            if self.clock_half_period_us > 0 {
                delay.delay_us(self.clock_half_period_us);
            }
            data <<= 1;
        }
        Ok(())
    }

    fn select_row_group(&mut self, a: bool, b: bool) -> InterfaceResult<(), Self::Error> {
        if a { self.a.set_high()? } else { self.a.set_low()? }
        if b { self.b.set_high()? } else { self.b.set_low()? }
        Ok(())
    }

    fn set_display_enabled(&mut self, enabled: bool) -> InterfaceResult<(), Self::Error> {
        // Level on the wire depends on polarity; "enabled" is the logical view.
        if enabled == self.oe_active_low {
            self.oe.set_low()
        } else {
            self.oe.set_high()
        }
    }

    fn latch<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        self.lat.set_high()?;
        delay.delay_us(self.latch_hold_us);
        self.lat.set_low()
    }
}

/// Hardware-assisted interface using an SPI peripheral for DATA/CLK
///
/// The SPI device must be configured for MODE 0 (CPOL = 0, CPHA = 0), MSB
/// first. The four remaining lines stay on GPIO. Byte-for-byte this produces
/// the same waveform as [`GpioInterface`], only faster.
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`]
/// * `A`, `B`, `LAT`, `OE` - pins implementing [`OutputPin`]
pub struct SpiInterface<SPI, A, B, LAT, OE> {
    /// SPI device carrying DATA/CLK
    spi: SPI,
    /// Row select, low address bit
    a: A,
    /// Row select, high address bit
    b: B,
    /// Latch clock line
    lat: LAT,
    /// Output enable line
    oe: OE,
    /// Latch pulse hold in microseconds
    latch_hold_us: u32,
    /// Output-enable polarity (true = line low lights the panel)
    oe_active_low: bool,
}

impl<SPI, A, B, LAT, OE, PinErr> SpiInterface<SPI, A, B, LAT, OE>
where
    SPI: SpiDevice,
    A: OutputPin<Error = PinErr>,
    B: OutputPin<Error = PinErr>,
    LAT: OutputPin<Error = PinErr>,
    OE: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    /// Create a new SPI-backed interface
    ///
    /// Pin order after the SPI device: row select A, row select B, latch
    /// clock, output enable.
    pub fn new(spi: SPI, a: A, b: B, lat: LAT, oe: OE) -> Self {
        Self {
            spi,
            a,
            b,
            lat,
            oe,
            latch_hold_us: DEFAULT_LATCH_HOLD_US,
            oe_active_low: true,
        }
    }

    /// Set the latch pulse hold time in microseconds
    pub fn set_latch_hold(&mut self, us: u32) -> &mut Self {
        self.latch_hold_us = us;
        self
    }

    /// Set output-enable polarity
    ///
    /// Default is active-low (the stock panel's nOE line).
    pub fn set_oe_active_low(&mut self, active_low: bool) -> &mut Self {
        self.oe_active_low = active_low;
        self
    }
}

impl<SPI, A, B, LAT, OE, PinErr> ScanInterface for SpiInterface<SPI, A, B, LAT, OE>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    A: OutputPin<Error = PinErr>,
    B: OutputPin<Error = PinErr>,
    LAT: OutputPin<Error = PinErr>,
    OE: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn shift_byte<D: DelayNs>(
        &mut self,
        byte: u8,
        _delay: &mut D,
    ) -> InterfaceResult<(), Self::Error> {
        self.spi.write(&[byte]).map_err(InterfaceError::Spi)
    }

    fn select_row_group(&mut self, a: bool, b: bool) -> InterfaceResult<(), Self::Error> {
        let set = |r: Result<(), PinErr>| r.map_err(InterfaceError::Pin);
        if a {
            set(self.a.set_high())?;
        } else {
            set(self.a.set_low())?;
        }
        if b {
            set(self.b.set_high())?;
        } else {
            set(self.b.set_low())?;
        }
        Ok(())
    }

    fn set_display_enabled(&mut self, enabled: bool) -> InterfaceResult<(), Self::Error> {
        let result = if enabled == self.oe_active_low {
            self.oe.set_low()
        } else {
            self.oe.set_high()
        };
        result.map_err(InterfaceError::Pin)
    }

    fn latch<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        self.lat.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_us(self.latch_hold_us);
        self.lat.set_low().map_err(InterfaceError::Pin)
    }
}
