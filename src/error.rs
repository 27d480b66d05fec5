use thiserror::Error;

/// Errors raised while validating a palette before anything is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// The scheme carries fewer than 16 colors.
    #[error("invalid palette: expected at least 16 colors, found {found}")]
    InvalidPalette { found: usize },
    /// A color string is not of the form `#rrggbb`.
    #[error("invalid color format {value:?}: {reason}")]
    InvalidColorFormat { value: String, reason: &'static str },
}
