//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! Out-of-range drawing coordinates are deliberately *not* errors: every
//! pixel write clips silently at the canvas edge, so rasterizing shapes that
//! overhang the display just works. Errors are reserved for configuration
//! mistakes and hardware-interface failures.
//!
//! ## Example
//!
//! ```
//! use vma419::{Builder, BuilderError, PanelLayout};
//!
//! // Missing layout
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingLayout)));
//!
//! // Invalid layout
//! let result = PanelLayout::new(0, 1);
//! assert!(result.is_err());
//! ```

use crate::interface::ScanInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
#[derive(Debug)]
pub enum Error<I: ScanInterface> {
    /// Interface error (GPIO/SPI)
    ///
    /// Wraps the underlying hardware error from the [`ScanInterface`]
    /// implementation.
    Interface(I::Error),
    /// Frame buffer storage is too small for the configured panel layout
    ///
    /// The provided storage must be at least `layout.buffer_size()` bytes.
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
}

impl<I: ScanInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Buffer too small: required {required} bytes, provided {provided}"
                )
            }
        }
    }
}

impl<I: ScanInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Panel layout was not specified
    ///
    /// [`Builder::layout()`](crate::config::Builder::layout) must be called before building.
    MissingLayout,
    /// Invalid panel layout
    ///
    /// Both panel counts must be at least 1.
    InvalidLayout {
        /// Panels side by side requested
        panels_wide: u8,
        /// Panels stacked vertically requested
        panels_high: u8,
    },
    /// Font data is malformed
    ///
    /// The table is shorter than its header, or shorter than the per-glyph
    /// width table a variable-width header promises.
    InvalidFont {
        /// Length of the rejected table in bytes
        len: usize,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingLayout => write!(f, "Panel layout must be specified"),
            Self::InvalidLayout {
                panels_wide,
                panels_high,
            } => write!(
                f,
                "Invalid panel layout {panels_wide}x{panels_high} (both counts must be >= 1)"
            ),
            Self::InvalidFont { len } => {
                write!(f, "Invalid font table ({len} bytes is shorter than its header)")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
