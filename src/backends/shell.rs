use std::path::Path;

use anyhow::{Context, Result};

use crate::color::Color;
use crate::scheme::Palette;

use super::ThemeBackend;

/// Where a terminal slot takes its color from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Background,
    Foreground,
    /// Index into the 16 palette colors.
    Palette(usize),
}

impl Source {
    fn resolve(self, palette: &Palette) -> Color {
        match self {
            Source::Background => palette.background,
            Source::Foreground => palette.foreground,
            Source::Palette(index) => palette.colors[index],
        }
    }
}

/// Value assigned to one `colorNN` shell variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotValue {
    /// A literal `rr/gg/bb` color.
    Color(Source),
    /// A reference to an earlier `colorNN` variable.
    Alias(usize),
}

/// One of the 22 terminal color slots and its trailing comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermSlot {
    pub value: SlotValue,
    pub comment: &'static str,
}

const fn color(source: Source, comment: &'static str) -> TermSlot {
    TermSlot {
        value: SlotValue::Color(source),
        comment,
    }
}

const fn alias(slot: usize, comment: &'static str) -> TermSlot {
    TermSlot {
        value: SlotValue::Alias(slot),
        comment,
    }
}

/// The base16-shell slot layout: 0-15 are the ANSI colors, 16-21 the
/// extended 256-color entries. Bright colors 9-14 alias 1-6.
pub const TERMINAL_SLOTS: [TermSlot; 22] = [
    color(Source::Background, "Base 00 - Black"),
    color(Source::Palette(1), "Base 08 - Red"),
    color(Source::Palette(2), "Base 0B - Green"),
    color(Source::Palette(3), "Base 0A - Yellow"),
    color(Source::Palette(4), "Base 0D - Blue"),
    color(Source::Palette(5), "Base 0E - Magenta"),
    color(Source::Palette(6), "Base 0C - Cyan"),
    color(Source::Palette(7), "Base 05 - White"),
    color(Source::Palette(8), "Base 03 - Bright Black"),
    alias(1, "Base 08 - Bright Red"),
    alias(2, "Base 0B - Bright Green"),
    alias(3, "Base 0A - Bright Yellow"),
    alias(4, "Base 0D - Bright Blue"),
    alias(5, "Base 0E - Bright Magenta"),
    alias(6, "Base 0C - Bright Cyan"),
    color(Source::Foreground, "Base 07 - Bright White"),
    color(Source::Palette(4), "Base 09"),
    color(Source::Palette(2), "Base 0F"),
    color(Source::Palette(5), "Base 01"),
    color(Source::Background, "Base 02"),
    color(Source::Palette(7), "Base 04"),
    color(Source::Foreground, "Base 06"),
];

/// Slots written by the `# 16 color space` block; the rest go to the
/// `# 256 color space` block.
const ANSI_SLOTS: usize = 16;

const ESCAPE_DIALECTS: &str = "\
if [ -n \"$TMUX\" ]; then
\t# Tell tmux to pass the escape sequences through
\t# (Source: http://permalink.gmane.org/gmane.comp.terminal-emulators.tmux.user/1324)
\tput_template() { printf '\\033Ptmux;\\033\\033]4;%d;rgb:%s\\033\\033\\\\\\033\\\\' $@; }
\tput_template_var() { printf '\\033Ptmux;\\033\\033]%d;rgb:%s\\033\\033\\\\\\033\\\\' $@; }
\tput_template_custom() { printf '\\033Ptmux;\\033\\033]%s%s\\033\\033\\\\\\033\\\\' $@; }
elif [ \"${TERM%%[-.]*}\" = 'screen' ]; then
\t# GNU screen (screen, screen-256color, screen-256color-bce)
\tput_template() { printf '\\033P\\033]4;%d;rgb:%s\\007\\033\\\\' $@; }
\tput_template_var() { printf '\\033P\\033]%d;rgb:%s\\007\\033\\\\' $@; }
\tput_template_custom() { printf '\\033P\\033]%s%s\\007\\033\\\\' $@; }
elif [ \"${TERM%%-*}\" = 'linux' ]; then
\tput_template() { [ $1 -lt 16 ] && printf '\\e]P%x%s' $1 $(echo $2 | sed 's/\\///g'); }
\tput_template_var() { true; }
\tput_template_custom() { true; }
else
\tput_template() { printf '\\033]4;%d;rgb:%s\\033\\\\' $@; }
\tput_template_var() { printf '\\033]%d;rgb:%s\\033\\\\' $@; }
\tput_template_custom() { printf '\\033]%s%s\\033\\\\' $@; }
fi
";

const SPECIAL_COLORS: &str = "\
# foreground / background / cursor color
if [ -n \"$ITERM_SESSION_ID\" ]; then
\t# iTerm2 proprietary escape codes
\tput_template_custom Pg f8f8f2 # foreground
\tput_template_custom Ph 272822 # background
\tput_template_custom Pi f8f8f2 # bold color
\tput_template_custom Pj 49483e # selection color
\tput_template_custom Pk f8f8f2 # selected text color
\tput_template_custom Pl f8f8f2 # cursor
\tput_template_custom Pm 272822 # cursor text
else
\tput_template_var 10 $color_foreground
\tif [ \"$BASE16_SHELL_SET_BACKGROUND\" != false ]; then
\t\tput_template_var 11 $color_background
\t\tif [ \"${TERM%%-*}\" = \"rxvt\" ]; then
\t\t\tput_template_var 708 $color_background # internal border (rxvt)
\t\tfi
\tfi
\tput_template_custom 12 \";7\" # cursor (reverse video)
fi
";

/// POSIX shell script that reprograms the terminal palette (base16-shell).
pub struct ShellBackend;

impl ThemeBackend for ShellBackend {
    fn name(&self) -> &str {
        "Shell"
    }

    fn extension(&self) -> &str {
        "sh"
    }

    fn serialize(&self, palette: &Palette) -> String {
        let mut out = String::with_capacity(4 * 1024);
        out.push_str("#!/bin/sh\n");
        for (slot, entry) in TERMINAL_SLOTS.iter().enumerate() {
            let line = match entry.value {
                SlotValue::Color(source) => {
                    format!("color{slot:02}=\"{}\"", source.resolve(palette).to_slash())
                }
                SlotValue::Alias(target) => format!("color{slot:02}=$color{target:02}"),
            };
            out.push_str(&format!("{line} # {}\n", entry.comment));
        }
        out.push_str(&format!(
            "color_foreground=\"{}\" # Base 05\n",
            palette.foreground.to_slash()
        ));
        out.push_str(&format!(
            "color_background=\"{}\" # Base 00\n",
            palette.background.to_slash()
        ));

        out.push_str(ESCAPE_DIALECTS);
        out.push_str("# 16 color space\n");
        for slot in 0..TERMINAL_SLOTS.len() {
            if slot == ANSI_SLOTS {
                out.push_str("# 256 color space\n");
            }
            out.push_str(&format!("put_template {slot:<2} $color{slot:02}\n"));
        }
        out.push_str(SPECIAL_COLORS);

        out.push_str("# clean up\n");
        for function in ["put_template", "put_template_var", "put_template_custom"] {
            out.push_str(&format!("unset -f {function}\n"));
        }
        for slot in 0..TERMINAL_SLOTS.len() {
            out.push_str(&format!("unset color{slot:02}\n"));
        }
        out.push_str("unset color_foreground\nunset color_background\n");

        out
    }

    fn write_to(&self, palette: &Palette, path: &Path) -> Result<()> {
        let content = self.serialize(palette);
        std::fs::write(path, content)
            .with_context(|| format!("failed to write theme to {}", path.display()))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
                .with_context(|| format!("failed to mark {} executable", path.display()))?;
        }
        Ok(())
    }
}
