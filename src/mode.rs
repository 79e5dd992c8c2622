//! Pixel combine modes
//!
//! Every drawing operation takes a [`GraphicsMode`] describing how the
//! requested pixel value combines with the bit already stored in the frame
//! buffer. The buffer polarity is fixed: a set bit means the LED is lit.
//!
//! | mode    | value = 1        | value = 0        |
//! |---------|------------------|------------------|
//! | Normal  | light the pixel  | blank the pixel  |
//! | Inverse | blank the pixel  | light the pixel  |
//! | Toggle  | flip the pixel   | no change        |
//! | Or      | light the pixel  | no change        |
//! | Nor     | blank if lit     | no change        |
//!
//! ## Example
//!
//! ```
//! use vma419::GraphicsMode;
//!
//! // Toggling twice with value = 1 restores the original state
//! let lit = false;
//! let once = GraphicsMode::Toggle.apply(lit, true);
//! let twice = GraphicsMode::Toggle.apply(once.unwrap_or(lit), true);
//! assert_eq!(twice, Some(lit));
//! ```

/// How a written pixel value combines with the stored bit
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GraphicsMode {
    /// Store the value as given (1 lights, 0 blanks)
    #[default]
    Normal,
    /// Store the complement of the value (1 blanks, 0 lights)
    Inverse,
    /// Flip the stored bit when the value is 1; leave it alone otherwise
    Toggle,
    /// Only light pixels: 1 lights, 0 leaves the bit alone
    Or,
    /// Only blank lit pixels: 1 blanks a lit pixel, everything else is a no-op
    Nor,
}

impl GraphicsMode {
    /// Resolve the new bit state for a pixel currently in state `lit`
    ///
    /// Returns `None` when the mode leaves the pixel untouched, letting
    /// callers skip the read-modify-write entirely.
    pub fn apply(self, lit: bool, value: bool) -> Option<bool> {
        match self {
            Self::Normal => Some(value),
            Self::Inverse => Some(!value),
            Self::Toggle => value.then_some(!lit),
            Self::Or => value.then_some(true),
            Self::Nor => (value && lit).then_some(false),
        }
    }
}
