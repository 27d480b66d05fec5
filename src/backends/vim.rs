use crate::scheme::Palette;

use super::highlights::{Base, Highlight, Section, SECTIONS};
use super::ThemeBackend;

/// Palette index behind each `s:guiXX` role, indexed by role.
///
/// The order is not the identity: role `01` reads palette index 12 and
/// role `07` reads index 9.
pub const GUI_ROLES: [usize; 16] = [0, 12, 13, 8, 14, 7, 15, 9, 1, 10, 3, 2, 6, 4, 5, 11];

/// Palette index behind each `g:terminal_color_N`, indexed by N.
/// Slots 9-14 repeat 1-6.
pub const TERMINAL_ANSI: [usize; 16] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 1, 2, 3, 4, 5, 6, 15];

/// cterm indices that do not depend on the color space.
const CTERM_FIXED: [(Base, &str); 10] = [
    (Base(0x00), "00"),
    (Base(0x03), "08"),
    (Base(0x05), "07"),
    (Base(0x07), "15"),
    (Base(0x08), "01"),
    (Base(0x0A), "03"),
    (Base(0x0B), "02"),
    (Base(0x0C), "06"),
    (Base(0x0D), "04"),
    (Base(0x0E), "05"),
];

/// cterm indices when `base16colorspace == "256"` (extended slots 16-21).
const CTERM_256: [(Base, &str); 6] = [
    (Base(0x01), "18"),
    (Base(0x02), "19"),
    (Base(0x04), "20"),
    (Base(0x06), "21"),
    (Base(0x09), "16"),
    (Base(0x0F), "17"),
];

/// cterm indices for plain 16-color terminals (bright slots).
const CTERM_16: [(Base, &str); 6] = [
    (Base(0x01), "10"),
    (Base(0x02), "11"),
    (Base(0x04), "12"),
    (Base(0x06), "13"),
    (Base(0x09), "09"),
    (Base(0x0F), "14"),
];

const PREAMBLE: &str = r#"" vi:syntax=vim
if !has("gui_running")
  if exists("g:base16_shell_path")
    execute "silent !/bin/sh ".g:base16_shell_path."/base16-polybar.sh"
  endif
endif

" GUI color definitions
"#;

const NVIM_TERMINAL_TAIL: &str = r#"  let g:terminal_color_background = g:terminal_color_0
  let g:terminal_color_foreground = g:terminal_color_5
  if &background == "light"
    let g:terminal_color_background = g:terminal_color_7
    let g:terminal_color_foreground = g:terminal_color_2
  endif
elseif has("terminal")
  let g:terminal_ansi_colors = [
"#;

const THEME_SETUP: &str = r#"" Theme setup
hi clear
syntax reset
let g:colors_name = "base16-polybar"

" Highlighting function
" Optional variables are attributes and guisp
function! g:Base16hi(group, guifg, guibg, ctermfg, ctermbg, ...)
  let l:attr = get(a:, 1, "")
  let l:guisp = get(a:, 2, "")

  if a:guifg != ""
    exec "hi " . a:group . " guifg=#" . a:guifg
  endif
  if a:guibg != ""
    exec "hi " . a:group . " guibg=#" . a:guibg
  endif
  if a:ctermfg != ""
    exec "hi " . a:group . " ctermfg=" . a:ctermfg
  endif
  if a:ctermbg != ""
    exec "hi " . a:group . " ctermbg=" . a:ctermbg
  endif
  if l:attr != ""
    exec "hi " . a:group . " gui=" . l:attr . " cterm=" . l:attr
  endif
  if l:guisp != ""
    exec "hi " . a:group . " guisp=#" . l:guisp
  endif
endfunction


fun <sid>hi(group, guifg, guibg, ctermfg, ctermbg, attr, guisp)
  call g:Base16hi(a:group, a:guifg, a:guibg, a:ctermfg, a:ctermbg, a:attr, a:guisp)
endfun
"#;

/// Vim / Neovim color scheme backend (base16-vim layout).
pub struct VimBackend;

impl ThemeBackend for VimBackend {
    fn name(&self) -> &str {
        "Vim"
    }

    fn extension(&self) -> &str {
        "vim"
    }

    fn serialize(&self, palette: &Palette) -> String {
        let mut out = String::with_capacity(20 * 1024);
        out.push_str(PREAMBLE);
        for (role, &index) in GUI_ROLES.iter().enumerate() {
            let hex = palette.colors[index].to_bare_hex();
            push_pair(&mut out, "", "gui", Base(role as u8), &hex);
        }

        out.push_str("\n\" Terminal color definitions\n");
        for (base, index) in CTERM_FIXED {
            push_pair(&mut out, "", "cterm", base, index);
        }
        out.push_str("if exists(\"base16colorspace\") && base16colorspace == \"256\"\n");
        for (base, index) in CTERM_256 {
            push_pair(&mut out, "  ", "cterm", base, index);
        }
        out.push_str("else\n");
        for (base, index) in CTERM_16 {
            push_pair(&mut out, "  ", "cterm", base, index);
        }
        out.push_str("endif\n");

        out.push_str("\n\" Neovim terminal colours\nif has(\"nvim\")\n");
        for (slot, &index) in TERMINAL_ANSI.iter().enumerate() {
            let pad = if slot < 10 { " " } else { "" };
            out.push_str(&format!(
                "  let g:terminal_color_{slot} = {pad}\"{}\"\n",
                palette.colors[index].to_hex()
            ));
        }
        out.push_str(NVIM_TERMINAL_TAIL);
        for &index in &TERMINAL_ANSI {
            out.push_str(&format!(
                "        \\ \"{}\",\n",
                palette.colors[index].to_hex()
            ));
        }
        out.push_str("        \\ ]\nendif\n\n");

        out.push_str(THEME_SETUP);
        for section in SECTIONS {
            push_section(&mut out, section);
        }

        out.push_str("\n\" Remove functions\ndelf <sid>hi\n");
        out.push_str("\n\" Remove color variables\n");
        out.push_str(&format!("unlet {}\n", role_list("s:gui")));
        out.push_str(&format!("unlet {}\n", role_list("s:cterm")));

        out
    }
}

/// Emit the script-local variable and its `g:base16_` twin.
fn push_pair(out: &mut String, indent: &str, kind: &str, base: Base, value: &str) {
    out.push_str(&format!("{indent}let s:{kind}{base}        = \"{value}\"\n"));
    out.push_str(&format!("{indent}let g:base16_{kind}{base} = \"{value}\"\n"));
}

/// Emit a commented section with the group names padded to a shared column.
fn push_section(out: &mut String, section: &Section) {
    out.push_str(&format!("\n\" {}\n", section.title));
    let width = section
        .groups
        .iter()
        .map(|group| group.group.len() + 3)
        .max()
        .unwrap_or(0)
        + 1;
    for group in section.groups {
        let name = format!("\"{}\",", group.group);
        out.push_str(&format!(
            "call <sid>hi({name:<width$}{})\n",
            call_args(group)
        ));
    }
}

/// The six positional arguments after the group name:
/// guifg, guibg, ctermfg, ctermbg, attr, guisp.
fn call_args(group: &Highlight) -> String {
    fn var(prefix: &str, base: Option<Base>) -> String {
        match base {
            Some(base) => format!("{prefix}{base}"),
            None => "\"\"".to_string(),
        }
    }

    let cterm_bg = if group.cterm_bg { group.bg } else { None };
    [
        var("s:gui", group.fg),
        var("s:gui", group.bg),
        var("s:cterm", group.fg),
        var("s:cterm", cterm_bg),
        format!("\"{}\"", group.attr),
        var("s:gui", group.sp),
    ]
    .join(", ")
}

fn role_list(prefix: &str) -> String {
    (0..16u8)
        .map(|role| format!("{prefix}{}", Base(role)))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    /// Every slot gets a distinct color so index mix-ups are visible.
    fn test_palette() -> Palette {
        let mut colors = [Color::new(0, 0, 0); 16];
        for (i, color) in colors.iter_mut().enumerate() {
            *color = Color::new(0x10, 0x20, i as u8);
        }
        Palette {
            name: "test".to_string(),
            author: String::new(),
            colors,
            foreground: Color::new(0xf0, 0xf0, 0xf0),
            background: Color::new(0x0f, 0x0f, 0x0f),
        }
    }

    fn render() -> String {
        VimBackend.serialize(&test_palette())
    }

    #[test]
    fn sixteen_gui_pairs_in_role_order() {
        let output = render();
        let scoped: Vec<&str> = output
            .lines()
            .filter(|l| l.starts_with("let s:gui"))
            .collect();
        let global: Vec<&str> = output
            .lines()
            .filter(|l| l.starts_with("let g:base16_gui"))
            .collect();
        assert_eq!(scoped.len(), 16);
        assert_eq!(global.len(), 16);
        for role in 0..16u8 {
            let base = Base(role);
            assert!(scoped[role as usize].starts_with(&format!("let s:gui{base} ")));
            assert!(global[role as usize].starts_with(&format!("let g:base16_gui{base} ")));
        }
    }

    #[test]
    fn gui_roles_follow_base16_remapping() {
        let output = render();
        // role 01 -> palette index 12, role 07 -> palette index 9
        assert!(output.contains("let s:gui01        = \"10200c\"\n"));
        assert!(output.contains("let g:base16_gui01 = \"10200c\"\n"));
        assert!(output.contains("let s:gui07        = \"102009\"\n"));
        assert!(output.contains("let s:gui0F        = \"10200b\"\n"));
    }

    #[test]
    fn uppercase_palette_entries_keep_their_case() {
        let mut palette = test_palette();
        palette.colors[1] = Color::from_hex("#F92672").unwrap();

        let output = VimBackend.serialize(&palette);
        assert!(output.contains("let s:gui08        = \"F92672\"\n"));
        assert!(output.contains("let g:base16_gui08 = \"F92672\"\n"));
        assert!(output.contains("  let g:terminal_color_1 =  \"#F92672\"\n"));
        assert!(output.contains("  let g:terminal_color_9 =  \"#F92672\"\n"));
        assert_eq!(output.matches("        \\ \"#F92672\",\n").count(), 2);
        assert!(!output.contains("f92672"));
    }

    #[test]
    fn gui_role_table_is_a_permutation() {
        let mut sorted = GUI_ROLES;
        sorted.sort_unstable();
        assert_eq!(sorted, std::array::from_fn::<usize, 16, _>(|i| i));
        assert_eq!(GUI_ROLES[1], 12);
        assert_eq!(GUI_ROLES[7], 9);
    }

    #[test]
    fn terminal_ansi_repeats_base_colors_for_bright_slots() {
        assert_eq!(TERMINAL_ANSI[9..15], TERMINAL_ANSI[1..7]);
        assert_eq!(TERMINAL_ANSI[15], 15);

        let output = render();
        assert!(output.contains("  let g:terminal_color_0 =  \"#102000\"\n"));
        assert!(output.contains("  let g:terminal_color_9 =  \"#102001\"\n"));
        assert!(output.contains("  let g:terminal_color_15 = \"#10200f\"\n"));
        let list_entries = output
            .lines()
            .filter(|l| l.starts_with("        \\ \"#"))
            .count();
        assert_eq!(list_entries, 16);
    }

    #[test]
    fn cterm_literals_switch_on_color_space() {
        let output = render();
        let branch = output
            .split("if exists(\"base16colorspace\")")
            .nth(1)
            .unwrap();
        let (wide, narrow) = branch.split_once("else\n").unwrap();
        assert!(wide.contains("  let s:cterm01        = \"18\"\n"));
        assert!(narrow.contains("  let s:cterm01        = \"10\"\n"));
        assert!(output.contains("let s:cterm00        = \"00\"\n"));
    }

    #[test]
    fn highlight_calls_use_role_variables() {
        let output = render();
        assert!(output.contains(
            "call <sid>hi(\"Normal\",       s:gui05, s:gui00, s:cterm05, s:cterm00, \"\", \"\")\n"
        ));
        assert!(output.contains(
            "call <sid>hi(\"WildMenu\",     s:gui08, s:gui0A, s:cterm08, \"\", \"\", \"\")\n"
        ));
        assert!(output.contains(
            "call <sid>hi(\"SpellBad\",   \"\", \"\", \"\", \"\", \"undercurl\", s:gui08)\n"
        ));
        let calls = output
            .lines()
            .filter(|l| l.starts_with("call <sid>hi("))
            .count();
        assert_eq!(calls, 184);
    }

    #[test]
    fn highlight_calls_never_embed_raw_colors() {
        let output = render();
        for line in output.lines().filter(|l| l.starts_with("call <sid>hi(")) {
            assert!(!line.contains("1020"), "raw color in {line}");
        }
    }

    #[test]
    fn cleanup_unlets_every_role() {
        let output = render();
        assert!(output.ends_with(
            "unlet s:cterm00 s:cterm01 s:cterm02 s:cterm03 s:cterm04 s:cterm05 s:cterm06 \
             s:cterm07 s:cterm08 s:cterm09 s:cterm0A s:cterm0B s:cterm0C s:cterm0D s:cterm0E \
             s:cterm0F\n"
        ));
        assert!(output.contains("\ndelf <sid>hi\n"));
    }

    #[test]
    fn output_is_deterministic() {
        assert_eq!(render(), render());
    }
}
