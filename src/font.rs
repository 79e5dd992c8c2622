//! Font table parsing and glyph access
//!
//! Fonts are flat byte tables with a 6-byte header:
//!
//! | offset | meaning                                          |
//! |--------|--------------------------------------------------|
//! | 0..2   | table length, big-endian; `0` marks fixed width  |
//! | 2      | glyph width for fixed-width fonts                |
//! | 3      | glyph height in pixels                           |
//! | 4      | first encoded character                          |
//! | 5      | character count                                  |
//!
//! Variable-width fonts follow the header with one width byte per character.
//! Each glyph takes `width * ceil(height / 8)` bytes, stored plane by plane:
//! the first `width` bytes hold rows 0..8 of every column (bit 0 on top),
//! the next `width` bytes the rows below, and so on. The *last* plane of a
//! glyph taller than 8 pixels is right-aligned, so its top bit sits at row
//! `height - 8`.
//!
//! The format matches the tables shipped with classic Arduino dot-matrix
//! libraries, so existing font assets convert by pasting the bytes.

use crate::error::BuilderError;

const HEADER_LEN: usize = 6;
const OFFSET_FIXED_WIDTH: usize = 2;
const OFFSET_HEIGHT: usize = 3;
const OFFSET_FIRST_CHAR: usize = 4;
const OFFSET_CHAR_COUNT: usize = 5;

/// A parsed font table
///
/// Cheap to copy; holds only a reference to the static table. Obtain one
/// through [`Font::new`] (validated) or use the built-in
/// [`FONT_5X7`](crate::fonts::FONT_5X7).
#[derive(Clone, Copy, Debug)]
pub struct Font {
    /// Raw table, header included
    data: &'static [u8],
}

impl Font {
    /// Parse and validate a font table
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidFont` when the table is shorter than
    /// its header, its width table, or the glyph data those promise.
    pub fn new(data: &'static [u8]) -> Result<Self, BuilderError> {
        let invalid = BuilderError::InvalidFont { len: data.len() };
        if data.len() < HEADER_LEN {
            return Err(invalid);
        }
        let font = Self { data };
        let count = usize::from(font.char_count());
        let bytes_per_column = usize::from(font.bytes_per_column());

        let glyph_bytes = if font.is_fixed_width() {
            count * usize::from(data[OFFSET_FIXED_WIDTH]) * bytes_per_column
        } else {
            if data.len() < HEADER_LEN + count {
                return Err(invalid);
            }
            data[HEADER_LEN..HEADER_LEN + count]
                .iter()
                .map(|&w| usize::from(w) * bytes_per_column)
                .sum()
        };

        if data.len() < font.glyph_base() + glyph_bytes {
            return Err(invalid);
        }
        Ok(font)
    }

    /// Wrap a table known to be well formed (built-in fonts)
    pub(crate) const fn new_unchecked(data: &'static [u8]) -> Self {
        Self { data }
    }

    /// Glyph height in pixels
    pub fn height(&self) -> u8 {
        self.data[OFFSET_HEIGHT]
    }

    /// First encoded character
    pub fn first_char(&self) -> u8 {
        self.data[OFFSET_FIRST_CHAR]
    }

    /// Number of encoded characters
    pub fn char_count(&self) -> u8 {
        self.data[OFFSET_CHAR_COUNT]
    }

    /// Whether every glyph shares the header width
    pub fn is_fixed_width(&self) -> bool {
        self.data[0] == 0 && self.data[1] == 0
    }

    /// Bytes per glyph column (`ceil(height / 8)`)
    pub fn bytes_per_column(&self) -> u8 {
        self.height().div_ceil(8)
    }

    /// Index of `c` within the table, `None` when not encoded
    fn char_index(&self, c: u8) -> Option<usize> {
        let index = c.checked_sub(self.first_char())?;
        (index < self.char_count()).then_some(usize::from(index))
    }

    /// Width of one character in pixels, `None` when not encoded
    ///
    /// Space borrows the width of `'n'`, so fonts that omit a space glyph
    /// still space words sensibly.
    pub fn char_width(&self, c: u8) -> Option<u8> {
        let c = if c == b' ' { b'n' } else { c };
        Some(self.encoded_width(self.char_index(c)?))
    }

    /// Stored width of the glyph at `index`, substitution-free
    fn encoded_width(&self, index: usize) -> u8 {
        if self.is_fixed_width() {
            self.data[OFFSET_FIXED_WIDTH]
        } else {
            self.data[HEADER_LEN + index]
        }
    }

    /// Where glyph data begins (past the header and any width table)
    fn glyph_base(&self) -> usize {
        if self.is_fixed_width() {
            HEADER_LEN
        } else {
            HEADER_LEN + usize::from(self.char_count())
        }
    }

    /// Bitmap bytes of one glyph, `None` when not encoded
    ///
    /// The slice holds `char_width * bytes_per_column` bytes, plane by
    /// plane: byte `i * char_width + col` covers rows `i * 8..` of column
    /// `col` (see the [module docs](self)).
    pub fn glyph(&self, c: u8) -> Option<&'static [u8]> {
        let index = self.char_index(c)?;
        let bytes_per_column = usize::from(self.bytes_per_column());
        let width = usize::from(self.encoded_width(index));

        let offset = if self.is_fixed_width() {
            index * width * bytes_per_column
        } else {
            // Sum the widths of every preceding glyph
            self.data[HEADER_LEN..HEADER_LEN + index]
                .iter()
                .map(|&w| usize::from(w) * bytes_per_column)
                .sum()
        };

        let start = self.glyph_base() + offset;
        self.data.get(start..start + width * bytes_per_column)
    }

    /// Pixel width of a whole string, one blank column between glyphs
    ///
    /// Unencoded characters contribute nothing. Matches the advance used by
    /// the string drawing and marquee operations.
    pub fn string_width(&self, text: &str) -> u16 {
        text.bytes()
            .filter_map(|c| self.char_width(c))
            .map(|w| u16::from(w) + 1)
            .sum()
    }
}
