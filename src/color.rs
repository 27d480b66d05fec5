use palette::{IntoColor, Oklch, Srgb};

use crate::error::PaletteError;

/// Core color type used by both renderers.
///
/// Holds the sRGB components together with the six hex digits it was parsed
/// from, so rendered output keeps the input's letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    digits: [u8; 6],
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        const HEX: &[u8; 16] = b"0123456789abcdef";
        let mut digits = [0u8; 6];
        for (i, channel) in [r, g, b].into_iter().enumerate() {
            digits[2 * i] = HEX[usize::from(channel >> 4)];
            digits[2 * i + 1] = HEX[usize::from(channel & 0x0f)];
        }
        Self { r, g, b, digits }
    }

    /// Parse a hex color string like `#ff8800` or `#FF8800`.
    ///
    /// The leading `#` marker is required and exactly six hex digits must
    /// follow it. The digits are kept as written.
    pub fn from_hex(hex: &str) -> Result<Self, PaletteError> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| invalid(hex, "missing leading '#'"))?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid(hex, "contains a non-hex character"));
        }
        let digits: [u8; 6] = digits
            .as_bytes()
            .try_into()
            .map_err(|_| invalid(hex, "expected 6 hex digits"))?;
        let channel = |i: usize| {
            let pair = [digits[i], digits[i + 1]];
            std::str::from_utf8(&pair)
                .ok()
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| invalid(hex, "contains a non-hex character"))
        };
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            digits,
        })
    }

    /// Serialize to `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{}", self.to_bare_hex())
    }

    /// Hex digits without the marker, `rrggbb`.
    pub fn to_bare_hex(self) -> String {
        self.digits.iter().copied().map(char::from).collect()
    }

    /// Slash-delimited byte triplet `rr/gg/bb`, as consumed by the
    /// `rgb:` form of OSC 4 escape sequences.
    pub fn to_slash(self) -> String {
        self.digits
            .chunks(2)
            .map(|pair| pair.iter().copied().map(char::from).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Convert to `palette::Srgb<u8>`.
    pub fn to_srgb_u8(self) -> Srgb<u8> {
        Srgb::new(self.r, self.g, self.b)
    }

    /// Convert to Oklch (used to pick a readable label color in previews).
    pub fn to_oklch(self) -> Oklch {
        let srgb_f32: Srgb<f32> = self.to_srgb_u8().into_format();
        srgb_f32.into_color()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Reformat `#rrggbb` into `rr/gg/bb`.
///
/// Input without the leading marker is rejected rather than re-paired, so
/// `"272822"` is an error even though it holds six valid digits.
pub fn slash_triplet(hex: &str) -> Result<String, PaletteError> {
    Color::from_hex(hex).map(Color::to_slash)
}

/// Strip the leading marker from `#rrggbb`, yielding `rrggbb`.
pub fn strip_marker(hex: &str) -> Result<String, PaletteError> {
    Color::from_hex(hex).map(Color::to_bare_hex)
}

fn invalid(value: &str, reason: &'static str) -> PaletteError {
    PaletteError::InvalidColorFormat {
        value: value.to_string(),
        reason,
    }
}
