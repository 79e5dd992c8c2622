//! Display driver
//!
//! [`Display`] owns the frame buffer and the hardware interface and exposes
//! the drawing and scanning operations. Drawing only touches the buffer;
//! nothing reaches the LEDs until the scan engine streams a phase out.
//!
//! ## Multiplexing
//!
//! The panel lights one quarter of its rows at a time. Each call to
//! [`Display::scan_one_phase`] streams the buffer bytes for the current
//! phase, latches them, enables the row group, then advances to the next
//! phase. Calling it at 400 Hz or faster (4 phases x 100 Hz refresh) gives a
//! flicker-free image; the caller owns the timing, typically from a timer
//! interrupt or a dedicated task.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use vma419::{Builder, Display, GpioInterface, GraphicsMode, PanelLayout};
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
//! let mut delay = MockDelay;
//! let interface =
//!     GpioInterface::new(MockPin, MockPin, MockPin, MockPin, MockPin, MockPin);
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
//! display.draw_string(0, 4, "Hi!", GraphicsMode::Normal);
//!
//! loop {
//!     let _ = display.scan_one_phase(&mut delay);
//!     delay.delay_us(2500);
//! }
//! ```

use embedded_hal::delay::DelayNs;
use log::debug;

use crate::config::Config;
use crate::error::Error;
use crate::font::Font;
use crate::framebuffer::FrameBuffer;
use crate::interface::ScanInterface;
use crate::marquee::Marquee;
use crate::mode::GraphicsMode;

/// Number of multiplex phases
pub const SCAN_PHASES: u8 = 4;

/// Outcome of drawing one character
///
/// Mirrors the width/zero/negative convention of classic dot-matrix
/// libraries as an explicit enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawResult {
    /// The glyph was drawn (or sits wholly left of / above the canvas);
    /// carries its advance width in pixels
    Drawn(u8),
    /// The font does not encode the character; nothing was drawn
    Unsupported,
    /// The position is past the right or bottom canvas edge; nothing was
    /// drawn and no later character on the same baseline can be visible
    OffScreen,
}

/// Byte transmission order for one panel within one phase
///
/// Each entry is `(row_group, column_byte)`: `row_group` counts 4-row strides
/// below the phase's first row, `column_byte` indexes the panel's 4 bytes in
/// that row. The zig-zag order matches how the panel's shift registers are
/// chained.
const SCAN_INTERLEAVE: [(usize, usize); 16] = [
    (3, 0), (2, 0), (3, 1), (2, 1),
    (1, 0), (0, 0), (1, 1), (0, 1),
    (3, 2), (2, 2), (3, 3), (2, 3),
    (1, 2), (0, 2), (1, 3), (0, 3),
];

/// Driver for a chain of multiplexed 32x16 LED matrix panels
///
/// Generic over the hardware interface `I` and the frame buffer storage `B`.
/// See the [module docs](self) for an example.
pub struct Display<I, B> {
    /// Hardware interface
    pub(crate) interface: I,
    /// Frame buffer
    pub(crate) frame: FrameBuffer<B>,
    /// Panel topology and current font
    pub(crate) config: Config,
    /// Next multiplex phase to stream (0..4)
    scan_phase: u8,
    /// Active marquee state, if any
    pub(crate) marquee: Option<Marquee>,
}

impl<I, B> Display<I, B>
where
    I: ScanInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Create a new display over the given interface and buffer storage
    ///
    /// The buffer starts blanked.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooSmall`] when the storage holds fewer than
    /// `config.layout.buffer_size()` bytes.
    pub fn new(interface: I, buffer: B, config: Config) -> Result<Self, Error<I>> {
        let mut frame = FrameBuffer::new(buffer, config.layout)
            .map_err(|(required, provided)| Error::BufferTooSmall { required, provided })?;
        frame.clear();

        debug!(
            "display: {}x{} pixels, {} panel(s), {} byte buffer",
            config.layout.width_pixels(),
            config.layout.height_pixels(),
            config.layout.panels_total(),
            config.layout.buffer_size()
        );

        Ok(Self {
            interface,
            frame,
            config,
            scan_phase: 0,
            marquee: None,
        })
    }

    /// Canvas width in pixels
    pub fn width(&self) -> u16 {
        self.config.layout.width_pixels()
    }

    /// Canvas height in pixels
    pub fn height(&self) -> u16 {
        self.config.layout.height_pixels()
    }

    /// Blank the whole canvas
    pub fn clear(&mut self) {
        self.frame.clear();
    }

    /// Light the whole canvas
    pub fn fill(&mut self) {
        self.frame.fill();
    }

    /// Switch the font used by text and marquee operations
    pub fn select_font(&mut self, font: Font) {
        debug!("select_font: height {}", font.height());
        self.config.font = font;
    }

    /// Currently selected font
    pub fn font(&self) -> Font {
        self.config.font
    }

    /// Set one pixel; `true` lights it
    ///
    /// Out-of-range coordinates are silently ignored.
    pub fn set_pixel(&mut self, x: u16, y: u16, lit: bool) {
        self.frame.write_pixel(x, y, GraphicsMode::Normal, lit);
    }

    /// Write one pixel through a combine mode
    pub fn write_pixel(&mut self, x: u16, y: u16, mode: GraphicsMode, value: bool) {
        self.frame.write_pixel(x, y, mode, value);
    }

    /// Signed-coordinate pixel write; negative coordinates clip
    pub(crate) fn write_pixel_at(&mut self, x: i16, y: i16, mode: GraphicsMode, value: bool) {
        if x >= 0 && y >= 0 {
            self.frame.write_pixel(x as u16, y as u16, mode, value);
        }
    }

    /// Read one pixel back; `None` outside the canvas
    pub fn pixel(&self, x: u16, y: u16) -> Option<bool> {
        self.frame.pixel(x, y)
    }

    /// Direct access to the frame buffer bytes, in scan order
    pub fn buffer(&self) -> &[u8] {
        self.frame.as_slice()
    }

    /// Release the interface and buffer storage
    pub fn release(self) -> (I, B) {
        (self.interface, self.frame.into_inner())
    }

    // --- Text ---

    /// Draw one character
    ///
    /// Every pixel of the glyph box is written through `mode`, so in
    /// [`GraphicsMode::Normal`] the glyph background is blanked too. Space
    /// is not decoded: it blanks a box the width of `'n'`. Coordinates are
    /// signed; parts outside the canvas clip.
    pub fn draw_char(&mut self, x: i16, y: i16, c: u8, mode: GraphicsMode) -> DrawResult {
        let font = self.config.font;
        let height = i16::from(font.height());
        if x >= self.width() as i16 || y >= self.height() as i16 {
            return DrawResult::OffScreen;
        }

        let Some(width) = font.char_width(c) else {
            return DrawResult::Unsupported;
        };
        if x + i16::from(width) < 0 || y + height < 0 {
            // Wholly left of or above the canvas; advance without drawing
            return DrawResult::Drawn(width);
        }
        if c == b' ' {
            let w = i16::from(width);
            self.draw_filled_box(x, y, x + w - 1, y + height - 1, GraphicsMode::Inverse);
            return DrawResult::Drawn(width);
        }
        let Some(glyph) = font.glyph(c) else {
            return DrawResult::Unsupported;
        };
        let planes = usize::from(font.bytes_per_column());

        for col in 0..usize::from(width) {
            let px = x + col as i16;
            for i in 0..planes {
                // Byte plane i holds rows i*8.. of every column; the last
                // plane of a tall glyph is right-aligned
                let data = glyph[i * usize::from(width) + col];
                let offset = if planes > 1 && i == planes - 1 {
                    height - 8
                } else {
                    (i as i16) * 8
                };
                for k in 0..8i16 {
                    let row = offset + k;
                    if row >= (i as i16) * 8 && row < height {
                        self.write_pixel_at(px, y + row, mode, data & (1 << k) != 0);
                    }
                }
            }
        }
        DrawResult::Drawn(width)
    }

    /// Draw a string with one separator column between glyphs
    ///
    /// Separator columns are written as unlit pixels through `mode`, so
    /// [`GraphicsMode::Inverse`] produces solid text on a lit background.
    pub fn draw_string(&mut self, x: i16, y: i16, text: &str, mode: GraphicsMode) {
        let height = i16::from(self.config.font.height());
        let mut cursor = x;
        for c in text.bytes() {
            let advance = match self.draw_char(cursor, y, c, mode) {
                DrawResult::Drawn(width) => width,
                DrawResult::Unsupported => continue,
                DrawResult::OffScreen => break,
            };
            let sep_x = cursor + i16::from(advance);
            for row in 0..height {
                self.write_pixel_at(sep_x, y + row, mode, false);
            }
            cursor = sep_x + 1;
        }
    }

    /// Draw a string horizontally centered on the canvas
    pub fn draw_string_centered(&mut self, y: i16, text: &str, mode: GraphicsMode) {
        // Drop the trailing separator when centering
        let text_width = i32::from(self.config.font.string_width(text)).saturating_sub(1);
        let start = (i32::from(self.width()) - text_width) / 2;
        self.draw_string(start.max(0) as i16, y, text, mode);
    }

    // --- Scanning ---

    /// Stream one multiplex phase to the hardware and advance to the next
    ///
    /// Sequence: blank the output, select the phase's row group, shift all
    /// of its bytes, latch, re-enable the output. Four calls refresh the
    /// whole image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] when the hardware interface fails;
    /// the phase does not advance in that case.
    pub fn scan_one_phase<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<I>> {
        let phase = self.scan_phase;
        self.scan_phase_out(phase, delay)?;
        self.scan_phase = (phase + 1) % SCAN_PHASES;
        Ok(())
    }

    /// Phase the next [`scan_one_phase`](Self::scan_one_phase) call streams
    pub fn scan_phase(&self) -> u8 {
        self.scan_phase
    }

    /// Force the next phase to stream; wraps modulo 4
    pub fn set_scan_phase(&mut self, phase: u8) {
        self.scan_phase = phase % SCAN_PHASES;
    }

    /// Stream one specific phase without touching the phase counter
    fn scan_phase_out<D: DelayNs>(&mut self, phase: u8, delay: &mut D) -> Result<(), Error<I>> {
        let layout = self.config.layout;
        let bytes_per_row = layout.bytes_per_row();
        let row_stride = bytes_per_row * 4;
        let phase_offset = bytes_per_row * usize::from(phase);

        self.interface
            .set_display_enabled(false)
            .map_err(Error::Interface)?;

        // Binary row-select encoding the row driver expects
        let code = (4 - phase) & 3;
        self.interface
            .select_row_group(code & 1 != 0, code & 2 != 0)
            .map_err(Error::Interface)?;

        let frame = self.frame.as_slice();
        for panel in 0..usize::from(layout.panels_total()) {
            let base = phase_offset + panel * 4;
            for &(row_group, column) in &SCAN_INTERLEAVE {
                let byte = frame[base + row_group * row_stride + column];
                self.interface
                    .shift_byte(byte, delay)
                    .map_err(Error::Interface)?;
            }
        }

        self.interface.latch(delay).map_err(Error::Interface)?;
        self.interface
            .set_display_enabled(true)
            .map_err(Error::Interface)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::{Builder, PanelLayout};
    use alloc::vec::Vec;
    use core::convert::Infallible;

    /// Everything a scan pushes at the hardware, in order
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) enum Op {
        Shift(u8),
        SelectRows(bool, bool),
        Enable(bool),
        Latch,
    }

    #[derive(Debug, Default)]
    pub(crate) struct MockInterface {
        pub ops: Vec<Op>,
    }

    impl ScanInterface for MockInterface {
        type Error = Infallible;

        fn shift_byte<D: DelayNs>(&mut self, byte: u8, _delay: &mut D) -> Result<(), Infallible> {
            self.ops.push(Op::Shift(byte));
            Ok(())
        }

        fn select_row_group(&mut self, a: bool, b: bool) -> Result<(), Infallible> {
            self.ops.push(Op::SelectRows(a, b));
            Ok(())
        }

        fn set_display_enabled(&mut self, enabled: bool) -> Result<(), Infallible> {
            self.ops.push(Op::Enable(enabled));
            Ok(())
        }

        fn latch<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Infallible> {
            self.ops.push(Op::Latch);
            Ok(())
        }
    }

    pub(crate) struct MockDelay;
    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    pub(crate) fn single_panel() -> Display<MockInterface, [u8; 64]> {
        let config = Builder::new()
            .layout(PanelLayout::new(1, 1).unwrap())
            .build()
            .unwrap();
        Display::new(MockInterface::default(), [0u8; 64], config).unwrap()
    }

    #[test]
    fn test_new_rejects_undersized_buffer() {
        let config = Builder::new()
            .layout(PanelLayout::new(2, 1).unwrap())
            .build()
            .unwrap();
        let result = Display::new(MockInterface::default(), [0u8; 64], config);
        assert!(matches!(
            result,
            Err(Error::BufferTooSmall {
                required: 128,
                provided: 64
            })
        ));
    }

    #[test]
    fn test_new_blanks_dirty_storage() {
        let config = Builder::new()
            .layout(PanelLayout::new(1, 1).unwrap())
            .build()
            .unwrap();
        let display = Display::new(MockInterface::default(), [0xFFu8; 64], config).unwrap();
        assert!(display.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_scan_sequence_order() {
        let mut display = single_panel();
        display.scan_one_phase(&mut MockDelay).unwrap();

        let ops = &display.interface.ops;
        // disable, row select, 16 bytes, latch, enable
        assert_eq!(ops.len(), 20);
        assert_eq!(ops[0], Op::Enable(false));
        assert_eq!(ops[1], Op::SelectRows(false, false));
        assert!(ops[2..18].iter().all(|op| matches!(op, Op::Shift(_))));
        assert_eq!(ops[18], Op::Latch);
        assert_eq!(ops[19], Op::Enable(true));
    }

    #[test]
    fn test_scan_phase_advances_and_wraps() {
        let mut display = single_panel();
        assert_eq!(display.scan_phase(), 0);
        for expected in [1, 2, 3, 0, 1] {
            display.scan_one_phase(&mut MockDelay).unwrap();
            assert_eq!(display.scan_phase(), expected);
        }
    }

    #[test]
    fn test_row_select_encoding_per_phase() {
        let mut display = single_panel();
        for _ in 0..4 {
            display.scan_one_phase(&mut MockDelay).unwrap();
        }
        let selects: Vec<Op> = display
            .interface
            .ops
            .iter()
            .copied()
            .filter(|op| matches!(op, Op::SelectRows(..)))
            .collect();
        assert_eq!(
            selects,
            alloc::vec![
                Op::SelectRows(false, false),
                Op::SelectRows(true, true),
                Op::SelectRows(false, true),
                Op::SelectRows(true, false),
            ]
        );
    }

    #[test]
    fn test_corner_pixel_streams_in_phase_two() {
        // (31, 15) lands on physical row 14, which phase 2 drives
        let mut display = single_panel();
        display.set_pixel(31, 15, true);
        display.set_scan_phase(2);
        display.scan_one_phase(&mut MockDelay).unwrap();

        let bytes: Vec<u8> = display
            .interface
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Shift(b) => Some(*b),
                _ => None,
            })
            .collect();
        assert_eq!(bytes.len(), 16);
        // Row group 3, column 3 sits at interleave slot 10
        assert_eq!(bytes[10], 0x01);
        assert_eq!(bytes.iter().filter(|&&b| b != 0).count(), 1);
    }

    #[test]
    fn test_corner_pixel_absent_from_other_phases() {
        let mut display = single_panel();
        display.set_pixel(31, 15, true);
        for phase in [0u8, 1, 3] {
            display.interface.ops.clear();
            display.set_scan_phase(phase);
            display.scan_one_phase(&mut MockDelay).unwrap();
            assert!(
                display
                    .interface
                    .ops
                    .iter()
                    .all(|op| !matches!(op, Op::Shift(b) if *b != 0)),
                "phase {phase} leaked the pixel"
            );
        }
    }

    #[test]
    fn test_multi_panel_scan_streams_all_panels() {
        let config = Builder::new()
            .layout(PanelLayout::new(2, 1).unwrap())
            .build()
            .unwrap();
        let mut display =
            Display::new(MockInterface::default(), [0u8; 128], config).unwrap();
        // Same logical pixel in each panel
        display.set_pixel(0, 0, true);
        display.set_pixel(32, 0, true);
        display.scan_one_phase(&mut MockDelay).unwrap();
        display.scan_one_phase(&mut MockDelay).unwrap();
        display.scan_one_phase(&mut MockDelay).unwrap();
        display.scan_one_phase(&mut MockDelay).unwrap();

        let lit: Vec<u8> = display
            .interface
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Shift(b) if *b != 0 => Some(*b),
                _ => None,
            })
            .collect();
        assert_eq!(lit, alloc::vec![0x80, 0x80]);
    }

    #[test]
    fn test_set_pixel_round_trips_everywhere() {
        let mut display = single_panel();
        for y in 0..16 {
            for x in 0..32 {
                display.set_pixel(x, y, true);
                assert_eq!(display.pixel(x, y), Some(true), "({x}, {y}) set");
                display.set_pixel(x, y, false);
                assert_eq!(display.pixel(x, y), Some(false), "({x}, {y}) cleared");
            }
        }
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut display = single_panel();
        display.draw_string(0, 0, "abc", GraphicsMode::Normal);
        display.clear();
        let once: Vec<u8> = display.buffer().to_vec();
        display.clear();
        assert_eq!(display.buffer(), &once[..]);
        assert!(once.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_draw_char_renders_exclamation() {
        let mut display = single_panel();
        let result = display.draw_char(0, 0, b'!', GraphicsMode::Normal);
        assert_eq!(result, DrawResult::Drawn(5));
        // '!' is a bar in column 2 with a gap above the dot
        for row in 0..5 {
            assert_eq!(display.pixel(2, row), Some(true), "row {row}");
        }
        assert_eq!(display.pixel(2, 5), Some(false));
        assert_eq!(display.pixel(2, 6), Some(true));
        assert_eq!(display.pixel(0, 0), Some(false));
    }

    #[test]
    fn test_draw_char_unencoded_is_unsupported() {
        let mut display = single_panel();
        assert_eq!(
            display.draw_char(0, 0, 0x01, GraphicsMode::Normal),
            DrawResult::Unsupported
        );
        assert_eq!(
            display.draw_char(0, 0, 200, GraphicsMode::Normal),
            DrawResult::Unsupported
        );
        assert!(display.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_draw_char_past_edges_is_off_screen() {
        let mut display = single_panel();
        assert_eq!(
            display.draw_char(32, 0, b'A', GraphicsMode::Normal),
            DrawResult::OffScreen
        );
        assert_eq!(
            display.draw_char(0, 16, b'A', GraphicsMode::Normal),
            DrawResult::OffScreen
        );
        assert!(display.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_draw_char_left_of_canvas_still_advances() {
        let mut display = single_panel();
        assert_eq!(
            display.draw_char(-7, 0, b'A', GraphicsMode::Normal),
            DrawResult::Drawn(5)
        );
        assert!(display.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_draw_char_space_blanks_its_box() {
        let mut display = single_panel();
        display.fill();
        assert_eq!(
            display.draw_char(4, 2, b' ', GraphicsMode::Normal),
            DrawResult::Drawn(5)
        );
        for x in 4..=8 {
            for y in 2..=8 {
                assert_eq!(display.pixel(x, y), Some(false), "({x}, {y})");
            }
        }
        // Neighbors outside the box keep their state
        assert_eq!(display.pixel(3, 2), Some(true));
        assert_eq!(display.pixel(9, 2), Some(true));
        assert_eq!(display.pixel(4, 9), Some(true));
    }

    #[test]
    fn test_space_borrows_n_width_in_variable_font() {
        // 'm' is 3 wide, 'n' is 2; no space glyph encoded
        static VAR: [u8; 13] = [0, 13, 1, 7, b'm', 2, 3, 2, 1, 2, 3, 4, 5];
        let mut display = single_panel();
        display.select_font(Font::new(&VAR).unwrap());
        assert_eq!(
            display.draw_char(0, 0, b' ', GraphicsMode::Normal),
            DrawResult::Drawn(2)
        );
    }

    #[test]
    fn test_tall_glyph_decodes_by_byte_plane() {
        // Height 12, width 2: the first two bytes are rows 0..8 of both
        // columns, the last two are the right-aligned bottom plane
        static TALL: [u8; 10] = [0, 0, 2, 12, b'A', 1, 0x01, 0x02, 0x10, 0x20];
        let mut display = single_panel();
        display.select_font(Font::new(&TALL).unwrap());
        assert_eq!(
            display.draw_char(0, 0, b'A', GraphicsMode::Normal),
            DrawResult::Drawn(2)
        );
        let lit = [(0, 0), (1, 1), (0, 8), (1, 9)];
        for x in 0..2u16 {
            for y in 0..12u16 {
                let expected = lit.contains(&(x, y));
                assert_eq!(display.pixel(x, y), Some(expected), "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_draw_char_clips_at_negative_coordinates() {
        let mut display = single_panel();
        display.draw_char(-2, -3, b'#', GraphicsMode::Normal);
        // Screen (0, 1) sees glyph column 2, row 4, which is lit in '#'
        assert_eq!(display.pixel(0, 1), Some(true));
        assert_eq!(display.pixel(0, 0), Some(false));
    }

    #[test]
    fn test_draw_string_advances_with_separator() {
        let mut display = single_panel();
        display.draw_string(0, 0, "II", GraphicsMode::Normal);
        // 'I' has its stem in glyph column 2; second char starts at x = 6
        assert_eq!(display.pixel(2, 1), Some(true));
        assert_eq!(display.pixel(8, 1), Some(true));
        // Separator column stays blank
        assert_eq!(display.pixel(5, 1), Some(false));
    }

    #[test]
    fn test_draw_string_inverse_lights_background() {
        let mut display = single_panel();
        display.draw_string(0, 0, "!", GraphicsMode::Inverse);
        // Glyph column 0 is empty, so Inverse lights it
        assert_eq!(display.pixel(0, 0), Some(true));
        // The bar itself goes dark
        assert_eq!(display.pixel(2, 0), Some(false));
        // Separator column after the glyph is lit too
        assert_eq!(display.pixel(5, 0), Some(true));
    }

    #[test]
    fn test_draw_string_centered_single_char() {
        let mut display = single_panel();
        display.draw_string_centered(0, "!", GraphicsMode::Normal);
        // 5 wide on a 32 canvas starts at x = 13; bar is column 2
        assert_eq!(display.pixel(15, 1), Some(true));
    }

    #[test]
    fn test_select_font_changes_metrics() {
        static TINY: [u8; 11] = [0, 12, 1, 7, b'A', 2, 1, 2, 0x7F, 0x41, 0x41];
        let mut display = single_panel();
        let font = Font::new(&TINY).unwrap();
        display.select_font(font);
        assert_eq!(
            display.draw_char(0, 0, b'A', GraphicsMode::Normal),
            DrawResult::Drawn(1)
        );
        assert_eq!(
            display.draw_char(2, 0, b'B', GraphicsMode::Normal),
            DrawResult::Drawn(2)
        );
    }

    #[test]
    fn test_draw_string_below_canvas_draws_nothing() {
        let mut display = single_panel();
        display.draw_string(0, 16, "HELLO", GraphicsMode::Normal);
        assert!(display.buffer().iter().all(|&b| b == 0));
    }
}
