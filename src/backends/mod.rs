pub mod highlights;
pub mod shell;
pub mod vim;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::error::PaletteError;
use crate::scheme::{Base16Scheme, Palette};

pub use shell::ShellBackend;
pub use vim::VimBackend;

/// A generated color scheme target.
///
/// Implementations only format; validation happens when the [`Palette`]
/// is built, so `serialize` cannot fail.
pub trait ThemeBackend {
    /// Human-readable target name, used in log output.
    fn name(&self) -> &str;

    /// File extension of the generated script, without the dot.
    fn extension(&self) -> &str;

    /// Render the full script for a palette.
    fn serialize(&self, palette: &Palette) -> String;

    /// File name for a scheme slug, e.g. `base16-monokai.vim`.
    fn file_name(&self, slug: &str) -> String {
        format!("base16-{slug}.{}", self.extension())
    }

    /// Write the script into `dir`, creating the directory if needed, and
    /// return the path written.
    fn install(&self, palette: &Palette, slug: &str, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory: {}", dir.display()))?;

        let path = dir.join(self.file_name(slug));
        self.write_to(palette, &path)?;
        Ok(path)
    }

    /// Write the script to an arbitrary path.
    fn write_to(&self, palette: &Palette, path: &Path) -> Result<()> {
        let content = self.serialize(palette);
        std::fs::write(path, content)
            .with_context(|| format!("failed to write theme to {}", path.display()))?;
        Ok(())
    }
}

/// Render the terminal color script for a decoded scheme.
///
/// Fails with [`PaletteError`] before producing any bytes when the scheme
/// has fewer than 16 colors or a malformed color.
pub fn render_terminal_scheme(scheme: &Base16Scheme) -> Result<Vec<u8>, PaletteError> {
    let palette = Palette::try_from(scheme)?;
    Ok(ShellBackend.serialize(&palette).into_bytes())
}

/// Render the editor color scheme for a decoded scheme.
///
/// Same failure modes as [`render_terminal_scheme`].
pub fn render_editor_scheme(scheme: &Base16Scheme) -> Result<Vec<u8>, PaletteError> {
    let palette = Palette::try_from(scheme)?;
    Ok(VimBackend.serialize(&palette).into_bytes())
}
