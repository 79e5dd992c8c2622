//! Logical-to-physical pixel address mapping
//!
//! The panel stores pixels in a bit-packed format where each byte holds 8
//! horizontal pixels, but the byte layout is dictated by the multiplex
//! wiring rather than being simple row-major. Two transforms compose here:
//!
//! 1. **Row remap** — the row drivers light rows in groups of four (phase 0
//!    drives rows 0, 4, 8, 12 and so on), and within each group of four
//!    consecutive logical rows the wiring needs a cyclic permutation: the
//!    stored row order rotates left by one relative to the logical order.
//! 2. **Panel tiling** — tiled panels are folded into one long byte row per
//!    scan line, so a pixel's byte column depends on which panel it falls in.
//!
//! The remap is a bijection on `0..16` per panel; getting it wrong shows up
//! on hardware as every row shifted by one scan phase.
//!
//! ## Example
//!
//! ```
//! use vma419::mapping::{pixel_address, PanelLayout};
//!
//! let layout = PanelLayout::new(1, 1).unwrap();
//! // Logical (0, 1) lands on physical row 0, byte 0, MSB
//! let addr = pixel_address(layout, 0, 1).unwrap();
//! assert_eq!(addr.index, 0);
//! assert_eq!(addr.mask, 0x80);
//! ```

pub use crate::config::PanelLayout;
use crate::config::{PIXELS_ACROSS_PER_PANEL, PIXELS_DOWN_PER_PANEL};

/// MSB-first bit masks, indexed by `x % 8`
pub const PIXEL_MASKS: [u8; 8] = [0x80, 0x40, 0x20, 0x10, 0x08, 0x04, 0x02, 0x01];

/// Cyclic permutation applied within each group of four logical rows
const ROW_GROUP_ORDER: [u16; 4] = [3, 0, 1, 2];

/// Physical location of one pixel in the frame buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelAddress {
    /// Byte index into the frame buffer
    pub index: usize,
    /// Bit mask selecting the pixel within that byte
    pub mask: u8,
}

/// Map a logical row to the physical row the scan hardware stores it at
///
/// Rotates left by one within each 4-row group: logical offsets 0, 1, 2, 3
/// become physical offsets 3, 0, 1, 2.
pub fn remap_row(y: u16) -> u16 {
    (y & !3) + ROW_GROUP_ORDER[(y & 3) as usize]
}

/// Resolve a logical pixel coordinate to its buffer byte and bit mask
///
/// Returns `None` for coordinates outside the tiled canvas; callers treat
/// that as a silent no-op.
pub fn pixel_address(layout: PanelLayout, x: u16, y: u16) -> Option<PixelAddress> {
    if x >= layout.width_pixels() || y >= layout.height_pixels() {
        return None;
    }

    let y_phys = remap_row(y);
    let panel = x / PIXELS_ACROSS_PER_PANEL
        + u16::from(layout.panels_wide) * (y_phys / PIXELS_DOWN_PER_PANEL);

    // Fold the panel chain into one long byte row per physical scan line.
    let bx = usize::from(x % PIXELS_ACROSS_PER_PANEL) + (usize::from(panel) << 5);
    let by = usize::from(y_phys % PIXELS_DOWN_PER_PANEL);

    let index = bx / 8 + by * layout.bytes_per_row();
    if index >= layout.buffer_size() {
        return None;
    }

    Some(PixelAddress {
        index,
        mask: PIXEL_MASKS[bx & 7],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remap_is_bijection_on_one_panel() {
        let mut seen = [false; 16];
        for y in 0..16 {
            let phys = remap_row(y);
            assert!(phys < 16);
            assert!(!seen[phys as usize], "row {y} collides at {phys}");
            seen[phys as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_remap_rotates_left_within_each_group() {
        assert_eq!(remap_row(0), 3);
        assert_eq!(remap_row(1), 0);
        assert_eq!(remap_row(2), 1);
        assert_eq!(remap_row(3), 2);
        assert_eq!(remap_row(12), 15);
        assert_eq!(remap_row(15), 14);
    }

    #[test]
    fn test_remap_keeps_rows_in_their_group() {
        for y in 0..16 {
            assert_eq!(remap_row(y) & !3, y & !3);
        }
    }

    #[test]
    fn test_pixel_address_origin() {
        let layout = PanelLayout::new(1, 1).unwrap();
        // Logical row 0 stores at physical row 3
        let addr = pixel_address(layout, 0, 0).unwrap();
        assert_eq!(addr.index, 3 * 4);
        assert_eq!(addr.mask, 0x80);
    }

    #[test]
    fn test_pixel_address_bottom_right() {
        let layout = PanelLayout::new(1, 1).unwrap();
        // (31, 15): logical row 15 stores at physical row 14, x 31 is bit 0
        let addr = pixel_address(layout, 31, 15).unwrap();
        assert_eq!(addr.index, 3 + 14 * 4);
        assert_eq!(addr.mask, 0x01);
    }

    #[test]
    fn test_pixel_address_out_of_range_is_none() {
        let layout = PanelLayout::new(1, 1).unwrap();
        assert_eq!(pixel_address(layout, 32, 0), None);
        assert_eq!(pixel_address(layout, 0, 16), None);
    }

    #[test]
    fn test_pixel_address_second_panel_across() {
        let layout = PanelLayout::new(2, 1).unwrap();
        // x 32 falls in panel 1; its bytes sit 4 past panel 0's in each row
        let addr = pixel_address(layout, 32, 1).unwrap();
        assert_eq!(addr.index, 4);
        assert_eq!(addr.mask, 0x80);
    }

    #[test]
    fn test_pixel_address_stacked_panel_folds_into_chain() {
        let layout = PanelLayout::new(1, 2).unwrap();
        // (0, 17) is row 1 of the lower panel: physical row 0, panel 1
        let addr = pixel_address(layout, 0, 17).unwrap();
        assert_eq!(addr.index, 4);
        assert_eq!(addr.mask, 0x80);
    }

    #[test]
    fn test_every_pixel_maps_to_unique_address() {
        let layout = PanelLayout::new(2, 1).unwrap();
        let mut hits = [0u8; 128];
        for y in 0..16 {
            for x in 0..64 {
                let addr = pixel_address(layout, x, y).unwrap();
                let bit = addr.mask.trailing_zeros() as usize;
                assert_eq!(hits[addr.index] & (1 << bit), 0);
                hits[addr.index] |= 1 << bit;
            }
        }
        assert!(hits.iter().all(|&b| b == 0xFF));
    }
}
