//! Display configuration types and builder

use crate::error::BuilderError;
use crate::font::Font;
use crate::fonts::FONT_5X7;

/// Pixels across one panel (columns)
pub const PIXELS_ACROSS_PER_PANEL: u16 = 32;
/// Pixels down one panel (rows)
pub const PIXELS_DOWN_PER_PANEL: u16 = 16;
/// Bytes of frame buffer storage one panel needs (32/8 * 16)
pub const PANEL_RAM_BYTES: usize =
    (PIXELS_ACROSS_PER_PANEL as usize / 8) * PIXELS_DOWN_PER_PANEL as usize;

/// Panel tiling topology
///
/// Describes how many 32x16 panels are chained side by side and stacked
/// vertically. The electrical chain folds stacked panels into one long
/// shift-register run, so the frame buffer size depends only on the total
/// panel count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelLayout {
    /// Panels side by side
    pub panels_wide: u8,
    /// Panels stacked vertically
    pub panels_high: u8,
}

impl PanelLayout {
    /// Create a new layout with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidLayout` if either count is zero.
    pub fn new(panels_wide: u8, panels_high: u8) -> Result<Self, BuilderError> {
        if panels_wide == 0 || panels_high == 0 {
            return Err(BuilderError::InvalidLayout {
                panels_wide,
                panels_high,
            });
        }
        Ok(Self {
            panels_wide,
            panels_high,
        })
    }

    /// Total panels in the chain
    pub fn panels_total(&self) -> u16 {
        u16::from(self.panels_wide) * u16::from(self.panels_high)
    }

    /// Width of the logical canvas in pixels
    pub fn width_pixels(&self) -> u16 {
        u16::from(self.panels_wide) * PIXELS_ACROSS_PER_PANEL
    }

    /// Height of the logical canvas in pixels
    pub fn height_pixels(&self) -> u16 {
        u16::from(self.panels_high) * PIXELS_DOWN_PER_PANEL
    }

    /// Bytes per physical scan row across the whole chain
    pub fn bytes_per_row(&self) -> usize {
        usize::from(self.panels_total()) * 4
    }

    /// Required frame buffer size in bytes
    pub fn buffer_size(&self) -> usize {
        usize::from(self.panels_total()) * PANEL_RAM_BYTES
    }
}

/// Display configuration
///
/// Holds the panel topology and the currently selected font. Use [`Builder`]
/// to create a `Config`.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Panel tiling topology
    pub layout: PanelLayout,
    /// Font used by the text and marquee operations
    pub font: Font,
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use vma419::{Builder, PanelLayout};
///
/// let layout = match PanelLayout::new(2, 1) {
///     Ok(layout) => layout,
///     Err(_) => return,
/// };
/// let config = match Builder::new().layout(layout).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    /// Panel tiling topology (required)
    layout: Option<PanelLayout>,
    /// Font used by the text and marquee operations
    font: Font,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            layout: None,
            // Built-in 5x7 ASCII font; override with Builder::font as needed
            font: FONT_5X7,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the panel layout (required)
    pub fn layout(mut self, layout: PanelLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Set the initial font
    pub fn font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingLayout` if the layout was not set.
    pub fn build(self) -> Result<Config, BuilderError> {
        Ok(Config {
            layout: self.layout.ok_or(BuilderError::MissingLayout)?,
            font: self.font,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_rejects_zero_panels() {
        assert!(matches!(
            PanelLayout::new(0, 1),
            Err(BuilderError::InvalidLayout {
                panels_wide: 0,
                panels_high: 1
            })
        ));
        assert!(PanelLayout::new(1, 0).is_err());
    }

    #[test]
    fn test_single_panel_sizes() {
        let layout = PanelLayout::new(1, 1).unwrap();
        assert_eq!(layout.width_pixels(), 32);
        assert_eq!(layout.height_pixels(), 16);
        assert_eq!(layout.bytes_per_row(), 4);
        assert_eq!(layout.buffer_size(), 64);
    }

    #[test]
    fn test_tiled_sizes() {
        let layout = PanelLayout::new(3, 2).unwrap();
        assert_eq!(layout.panels_total(), 6);
        assert_eq!(layout.width_pixels(), 96);
        assert_eq!(layout.height_pixels(), 32);
        assert_eq!(layout.bytes_per_row(), 24);
        assert_eq!(layout.buffer_size(), 384);
    }

    #[test]
    fn test_build_without_layout_fails() {
        assert!(matches!(
            Builder::new().build(),
            Err(BuilderError::MissingLayout)
        ));
    }

    #[test]
    fn test_build_with_layout_uses_builtin_font() {
        let config = Builder::new()
            .layout(PanelLayout::new(1, 1).unwrap())
            .build()
            .unwrap();
        assert_eq!(config.font.height(), 7);
    }
}
