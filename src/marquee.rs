//! Scrolling marquee text
//!
//! A marquee is a string plus a scroll offset the display keeps between
//! frames. [`Display::draw_marquee`] seeds it; [`Display::step_marquee`]
//! nudges it by a pixel delta and reports when the text has scrolled off and
//! wrapped around to re-enter from the other side.
//!
//! Horizontal single-pixel steps take a fast path: the whole frame buffer is
//! bit-shifted in place and only the glyph crossing the leading edge is
//! redrawn. Any other delta redraws the string from scratch.

use log::{debug, warn};

use crate::display::Display;
use crate::interface::ScanInterface;
use crate::mode::GraphicsMode;

/// Longest marquee text kept, in bytes
pub const MARQUEE_MAX_CHARS: usize = 31;

/// Scroll state the display carries between steps
pub(crate) struct Marquee {
    /// The scrolling text
    text: heapless::String<MARQUEE_MAX_CHARS>,
    /// Rendered width in pixels, trailing separator included
    width: i16,
    /// Current left edge of the text, canvas coordinates
    offset_x: i16,
    /// Current top edge of the text, canvas coordinates
    offset_y: i16,
}

impl<I, B> Display<I, B>
where
    I: ScanInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Start a marquee at `(x, y)` and draw its first frame
    ///
    /// Replaces any previous marquee. Text beyond [`MARQUEE_MAX_CHARS`]
    /// bytes is dropped.
    pub fn draw_marquee(&mut self, text: &str, x: i16, y: i16) {
        let mut stored = heapless::String::new();
        for c in text.chars() {
            if stored.push(c).is_err() {
                warn!("marquee text truncated to {MARQUEE_MAX_CHARS} bytes");
                break;
            }
        }

        let width = self.config.font.string_width(&stored) as i16;
        debug!("marquee: {width} px wide at ({x}, {y})");
        self.draw_string(x, y, &stored, GraphicsMode::Normal);
        self.marquee = Some(Marquee {
            text: stored,
            width,
            offset_x: x,
            offset_y: y,
        });
    }

    /// Stop the marquee without touching the canvas
    pub fn clear_marquee(&mut self) {
        self.marquee = None;
    }

    /// Text of the active marquee, if any
    pub fn marquee_text(&self) -> Option<&str> {
        self.marquee.as_ref().map(|m| m.text.as_str())
    }

    /// Move the marquee by `(dx, dy)` pixels
    ///
    /// Returns `true` when the text wrapped around an edge this step; the
    /// canvas is cleared and the text re-enters from the opposite side.
    /// Without an active marquee this is a no-op returning `false`.
    ///
    /// Steps of `(-1, 0)` and `(1, 0)` shift the frame buffer in place
    /// instead of redrawing, so everything else on the canvas scrolls along.
    pub fn step_marquee(&mut self, dx: i16, dy: i16) -> bool {
        let Some(mut marquee) = self.marquee.take() else {
            return false;
        };

        marquee.offset_x += dx;
        marquee.offset_y += dy;

        let canvas_w = self.width() as i16;
        let canvas_h = self.height() as i16;
        let font_h = i16::from(self.config.font.height());
        let mut wrapped = false;

        if marquee.offset_x < -marquee.width {
            marquee.offset_x = canvas_w;
            wrapped = true;
        } else if marquee.offset_x > canvas_w {
            marquee.offset_x = -marquee.width;
            wrapped = true;
        }
        if marquee.offset_y < -font_h {
            marquee.offset_y = canvas_h;
            wrapped = true;
        } else if marquee.offset_y > canvas_h {
            marquee.offset_y = -font_h;
            wrapped = true;
        }

        if wrapped || dy != 0 || dx.abs() > 1 {
            self.clear();
            self.draw_string(
                marquee.offset_x,
                marquee.offset_y,
                &marquee.text,
                GraphicsMode::Normal,
            );
        } else if dx == -1 {
            self.frame.shift_horizontal(true);
            self.redraw_marquee_edge(&marquee, canvas_w - 1);
        } else if dx == 1 {
            self.frame.shift_horizontal(false);
            self.redraw_marquee_edge(&marquee, 0);
        }

        self.marquee = Some(marquee);
        wrapped
    }

    /// Redraw the glyph whose box covers the leading-edge column
    ///
    /// After a one-pixel shift the vacated edge column is blank; only the
    /// character crossing it needs repainting.
    fn redraw_marquee_edge(&mut self, marquee: &Marquee, edge: i16) {
        let font = self.config.font;
        let mut cursor = marquee.offset_x;
        for c in marquee.text.bytes() {
            if cursor > edge {
                break;
            }
            let Some(width) = font.char_width(c) else {
                continue;
            };
            let advance = i16::from(width) + 1;
            if edge < cursor + advance {
                self.draw_char(cursor, marquee.offset_y, c, GraphicsMode::Normal);
            }
            cursor += advance;
        }
    }
}
