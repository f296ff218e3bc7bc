//! Error types of the codec and of the drawing entry point.

use thiserror::Error;

/// Errors raised while encoding text or laying out a symbol.
///
/// All of them are detected before the first rectangle reaches a surface.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The text contains a character outside code set B (code points 32 to 127).
    #[error("CODE128-B only supports ASCII 32-127, found {ch:?} at index {index}")]
    UnsupportedChar { index: usize, ch: char },

    /// A symbol value outside the 107 entries of the pattern table.
    #[error("invalid CODE128 symbol value: {0}")]
    InvalidSymbol(u8),

    /// The target box cannot hold any module.
    #[error("degenerate barcode geometry (width: {width}, total modules: {total_modules})")]
    DegenerateGeometry { width: f64, total_modules: u64 },

    /// Neither an explicit color nor a color factory was supplied.
    #[error("a bar color or an rgb color factory is required")]
    MissingColor,

    /// The caller provided buffer cannot hold the encoded sequence.
    #[error("symbol storage too small (needed: {needed}, available: {available})")]
    StorageTooSmall { needed: usize, available: usize },
}

/// Error returned by [crate::draw]: either the codec refused the input or
/// the surface refused a rectangle.
#[derive(Debug, Error)]
pub enum DrawError<E> {
    #[error(transparent)]
    Codec(#[from] Error),

    #[error("surface error: {0:?}")]
    Surface(E),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_char_message() {
        let err = Error::UnsupportedChar { index: 3, ch: '\u{1F}' };
        assert_eq!(err.to_string(), "CODE128-B only supports ASCII 32-127, found '\\u{1f}' at index 3");
    }

    #[test]
    fn test_draw_error_from_codec() {
        let err: DrawError<()> = Error::MissingColor.into();
        assert!(matches!(err, DrawError::Codec(Error::MissingColor)));
        assert_eq!(err.to_string(), "a bar color or an rgb color factory is required");
    }
}
