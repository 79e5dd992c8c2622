//! Bit-packed frame buffer over caller-provided storage
//!
//! The driver never allocates: callers hand in any `AsMut<[u8]>` storage
//! (a stack array, a `static mut` slice, a heap buffer) and the frame buffer
//! uses the first `layout.buffer_size()` bytes of it. One byte holds 8
//! horizontal pixels, MSB leftmost; a set bit means the LED is lit.
//!
//! Byte order inside the storage follows the scan hardware, not logical
//! row-major order; see [`crate::mapping`] for the transform.

use crate::config::PanelLayout;
use crate::mapping::{self, PixelAddress};
use crate::mode::GraphicsMode;

/// Frame buffer wrapping caller-provided byte storage
///
/// Generic over the storage type so `no_std` targets can use plain arrays:
///
/// ```
/// use vma419::{FrameBuffer, PanelLayout};
///
/// let layout = PanelLayout::new(1, 1).unwrap();
/// let mut frame = FrameBuffer::new([0u8; 64], layout).unwrap();
/// frame.write_pixel(0, 0, vma419::GraphicsMode::Normal, true);
/// assert_eq!(frame.pixel(0, 0), Some(true));
/// ```
pub struct FrameBuffer<B> {
    /// Backing storage, at least `layout.buffer_size()` bytes
    buffer: B,
    /// Panel topology the buffer is sized for
    layout: PanelLayout,
}

impl<B> FrameBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Wrap storage for the given layout
    ///
    /// # Errors
    ///
    /// Fails when the storage is shorter than `layout.buffer_size()`,
    /// reported as the `(required, provided)` pair.
    pub fn new(buffer: B, layout: PanelLayout) -> Result<Self, (usize, usize)> {
        let required = layout.buffer_size();
        let provided = buffer.as_ref().len();
        if provided < required {
            return Err((required, provided));
        }
        Ok(Self { buffer, layout })
    }

    /// Panel topology this buffer serves
    pub fn layout(&self) -> PanelLayout {
        self.layout
    }

    /// Active bytes of the buffer, in scan order
    pub fn as_slice(&self) -> &[u8] {
        &self.buffer.as_ref()[..self.layout.buffer_size()]
    }

    /// Mutable view of the active bytes
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        let size = self.layout.buffer_size();
        &mut self.buffer.as_mut()[..size]
    }

    /// Blank every pixel
    pub fn clear(&mut self) {
        self.as_mut_slice().fill(0x00);
    }

    /// Light every pixel
    pub fn fill(&mut self) {
        self.as_mut_slice().fill(0xFF);
    }

    /// Read one pixel; `None` outside the canvas
    pub fn pixel(&self, x: u16, y: u16) -> Option<bool> {
        let PixelAddress { index, mask } = mapping::pixel_address(self.layout, x, y)?;
        Some(self.as_slice()[index] & mask != 0)
    }

    /// Write one pixel through a combine mode
    ///
    /// Out-of-range coordinates are a silent no-op, so shapes may overhang
    /// the canvas freely.
    pub fn write_pixel(&mut self, x: u16, y: u16, mode: GraphicsMode, value: bool) {
        let Some(PixelAddress { index, mask }) = mapping::pixel_address(self.layout, x, y) else {
            return;
        };
        let byte = &mut self.as_mut_slice()[index];
        let lit = *byte & mask != 0;
        match mode.apply(lit, value) {
            Some(true) => *byte |= mask,
            Some(false) => *byte &= !mask,
            None => {}
        }
    }

    /// Shift the whole buffer one pixel horizontally
    ///
    /// `left = true` moves content toward lower x. Bits never carry across a
    /// logical-row segment (`panels_wide * 4` bytes): within one physical
    /// scan row, each row of stacked panels has its own segment, and
    /// adjacent segments belong to different logical rows. Vacated pixels
    /// come up blank.
    pub fn shift_horizontal(&mut self, left: bool) {
        let stride = usize::from(self.layout.panels_wide) * 4;
        for row in self.as_mut_slice().chunks_mut(stride) {
            if left {
                for i in 0..row.len() {
                    let carry_in = if i + 1 < row.len() {
                        (row[i + 1] & 0x80) >> 7
                    } else {
                        0
                    };
                    row[i] = (row[i] << 1) | carry_in;
                }
            } else {
                for i in (0..row.len()).rev() {
                    let carry_in = if i > 0 { (row[i - 1] & 0x01) << 7 } else { 0 };
                    row[i] = (row[i] >> 1) | carry_in;
                }
            }
        }
    }

    /// Consume the wrapper and return the storage
    pub fn into_inner(self) -> B {
        self.buffer
    }
}
