use std::io::{self, Write};

use crossterm::style::{Color as TermColor, Stylize};

use crate::color::Color;
use crate::scheme::Palette;

const SLOT_NAMES: [&str; 8] = ["Blk", "Red", "Grn", "Yel", "Blu", "Mag", "Cyn", "Wht"];

fn to_term(c: Color) -> TermColor {
    TermColor::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// Choose black or white label text for the given swatch.
pub fn label_color(c: Color) -> TermColor {
    if c.to_oklch().l > 0.6 {
        TermColor::Black
    } else {
        TermColor::White
    }
}

fn swatch(out: &mut impl Write, label: &str, c: Color) -> io::Result<()> {
    let cell = format!("{label:^6}").with(label_color(c)).on(to_term(c));
    write!(out, "{cell} ")
}

fn swatch_row(out: &mut impl Write, colors: &[Color]) -> io::Result<()> {
    write!(out, "  ")?;
    for (i, c) in colors.iter().enumerate() {
        swatch(out, SLOT_NAMES[i % 8], *c)?;
    }
    writeln!(out)
}

/// Print the palette as rows of colored swatches: normal (0-7), bright
/// (8-15), then foreground and background.
pub fn print_preview(palette: &Palette, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "  {} by {}", palette.name, palette.author)?;
    writeln!(out, "  Normal")?;
    swatch_row(out, &palette.colors[..8])?;
    writeln!(out, "  Bright")?;
    swatch_row(out, &palette.colors[8..])?;
    writeln!(out, "  Special")?;
    write!(out, "  ")?;
    swatch(out, "fg", palette.foreground)?;
    swatch(out, "bg", palette.background)?;
    writeln!(out)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_swatches_get_dark_labels() {
        assert_eq!(label_color(Color::new(255, 255, 255)), TermColor::Black);
        assert_eq!(label_color(Color::new(0xf8, 0xf8, 0xf2)), TermColor::Black);
    }

    #[test]
    fn dark_swatches_get_light_labels() {
        assert_eq!(label_color(Color::new(0, 0, 0)), TermColor::White);
        assert_eq!(label_color(Color::new(0x27, 0x28, 0x22)), TermColor::White);
    }

    #[test]
    fn preview_lists_every_row() {
        let palette = Palette {
            name: "Demo".to_string(),
            author: "Me".to_string(),
            colors: [Color::new(10, 20, 30); 16],
            foreground: Color::new(250, 250, 250),
            background: Color::new(5, 5, 5),
        };
        let mut buf = Vec::new();
        print_preview(&palette, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("  Demo by Me\n"));
        for heading in ["Normal", "Bright", "Special"] {
            assert!(text.contains(heading), "missing {heading}");
        }
        assert_eq!(text.matches("Blk").count(), 2);
        assert!(text.contains(" fg ") && text.contains(" bg "));
    }
}
