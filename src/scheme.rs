use std::path::Path;

use serde::Deserialize;

use crate::color::Color;
use crate::error::PaletteError;

/// Number of palette colors both renderers index into.
pub const PALETTE_SIZE: usize = 16;

/// A base16 scheme as exported by terminal.sexy.
///
/// Keys are accepted in lowercase (`color`) and PascalCase (`Color`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Base16Scheme {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Author")]
    pub author: String,
    #[serde(alias = "Color")]
    pub color: Vec<String>,
    #[serde(alias = "Foreground")]
    pub foreground: String,
    #[serde(alias = "Background")]
    pub background: String,
}

impl Base16Scheme {
    /// Decode a scheme from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// A validated palette: exactly the 16 colors the renderers read plus the
/// default foreground and background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub name: String,
    pub author: String,
    pub colors: [Color; PALETTE_SIZE],
    pub foreground: Color,
    pub background: Color,
}

impl TryFrom<&Base16Scheme> for Palette {
    type Error = PaletteError;

    fn try_from(scheme: &Base16Scheme) -> Result<Self, Self::Error> {
        if scheme.color.len() < PALETTE_SIZE {
            return Err(PaletteError::InvalidPalette {
                found: scheme.color.len(),
            });
        }

        let mut colors = [Color::new(0, 0, 0); PALETTE_SIZE];
        for (slot, hex) in colors.iter_mut().zip(&scheme.color) {
            *slot = Color::from_hex(hex)?;
        }

        Ok(Self {
            name: scheme.name.clone(),
            author: scheme.author.clone(),
            colors,
            foreground: Color::from_hex(&scheme.foreground)?,
            background: Color::from_hex(&scheme.background)?,
        })
    }
}

/// Derive the scheme slug from the input file name: the last path
/// component up to the first `.json`.
///
/// `themes/monokai.json` becomes `monokai`.
pub fn scheme_slug(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    match file_name.split_once(".json") {
        Some((stem, _)) => stem.to_string(),
        None => file_name,
    }
}
