//! Static highlight-group table for the editor scheme.
//!
//! Every group refers to base16 roles (`B00`..`B0F`), never to palette
//! indices directly. Sections keep groups of one language or plugin
//! together and are emitted in table order.

use std::fmt;

/// A base16 role, rendered as two uppercase hex digits (`0A`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Base(pub u8);

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}", self.0)
    }
}

pub const B00: Base = Base(0x00);
pub const B01: Base = Base(0x01);
pub const B02: Base = Base(0x02);
pub const B03: Base = Base(0x03);
pub const B04: Base = Base(0x04);
pub const B05: Base = Base(0x05);
pub const B06: Base = Base(0x06);
pub const B07: Base = Base(0x07);
pub const B08: Base = Base(0x08);
pub const B09: Base = Base(0x09);
pub const B0A: Base = Base(0x0A);
pub const B0B: Base = Base(0x0B);
pub const B0C: Base = Base(0x0C);
pub const B0D: Base = Base(0x0D);
pub const B0E: Base = Base(0x0E);
pub const B0F: Base = Base(0x0F);

/// One `<sid>hi` invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub group: &'static str,
    pub fg: Option<Base>,
    pub bg: Option<Base>,
    /// Text attribute applied to both `gui=` and `cterm=`; empty for none.
    pub attr: &'static str,
    /// Special (undercurl) color.
    pub sp: Option<Base>,
    /// Whether `bg` is also passed as the cterm background.
    pub cterm_bg: bool,
}

impl Highlight {
    /// Keep the GUI background but leave the cterm background unset.
    pub const fn gui_bg_only(self) -> Self {
        Self {
            cterm_bg: false,
            ..self
        }
    }
}

/// A commented block of related highlight groups.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub title: &'static str,
    pub groups: &'static [Highlight],
}

const fn hi(
    group: &'static str,
    fg: Option<Base>,
    bg: Option<Base>,
    attr: &'static str,
    sp: Option<Base>,
) -> Highlight {
    Highlight {
        group,
        fg,
        bg,
        attr,
        sp,
        cterm_bg: true,
    }
}

const fn fg(group: &'static str, fg: Base) -> Highlight {
    hi(group, Some(fg), None, "", None)
}

const fn fg_attr(group: &'static str, fg: Base, attr: &'static str) -> Highlight {
    hi(group, Some(fg), None, attr, None)
}

const fn fg_bg(group: &'static str, fg: Base, bg: Base) -> Highlight {
    hi(group, Some(fg), Some(bg), "", None)
}

const fn fg_bg_attr(group: &'static str, fg: Base, bg: Base, attr: &'static str) -> Highlight {
    hi(group, Some(fg), Some(bg), attr, None)
}

const fn bg(group: &'static str, bg: Base) -> Highlight {
    hi(group, None, Some(bg), "", None)
}

const fn bg_attr(group: &'static str, bg: Base, attr: &'static str) -> Highlight {
    hi(group, None, Some(bg), attr, None)
}

const fn attr(group: &'static str, attr: &'static str) -> Highlight {
    hi(group, None, None, attr, None)
}

const fn undercurl(group: &'static str, sp: Base) -> Highlight {
    hi(group, None, None, "undercurl", Some(sp))
}

pub const SECTIONS: &[Section] = &[
    Section {
        title: "Vim editor colors",
        groups: &[
            fg_bg("Normal", B05, B00),
            attr("Bold", "bold"),
            fg("Debug", B08),
            fg("Directory", B0D),
            fg_bg("Error", B00, B08),
            fg_bg("ErrorMsg", B08, B00),
            fg("Exception", B08),
            fg_bg("FoldColumn", B0C, B01),
            fg_bg("Folded", B03, B01),
            fg_bg_attr("IncSearch", B01, B09, "none"),
            attr("Italic", "none"),
            fg("Macro", B08),
            bg("MatchParen", B03),
            fg("ModeMsg", B0B),
            fg("MoreMsg", B0B),
            fg("Question", B0D),
            fg_bg("Search", B01, B0A),
            fg_bg_attr("Substitute", B01, B0A, "none"),
            fg("SpecialKey", B03),
            fg("TooLong", B08),
            fg("Underlined", B08),
            bg("Visual", B02),
            fg("VisualNOS", B08),
            fg("WarningMsg", B08),
            fg_bg("WildMenu", B08, B0A).gui_bg_only(),
            fg_attr("Title", B0D, "none"),
            fg_bg("Conceal", B0D, B00),
            fg_bg("Cursor", B00, B05),
            fg("NonText", B03),
            fg_bg("LineNr", B03, B01),
            fg_bg("SignColumn", B03, B01),
            fg_bg_attr("StatusLine", B04, B02, "none"),
            fg_bg_attr("StatusLineNC", B03, B01, "none"),
            fg_bg_attr("VertSplit", B02, B02, "none"),
            bg_attr("ColorColumn", B01, "none"),
            bg_attr("CursorColumn", B01, "none"),
            bg_attr("CursorLine", B01, "none"),
            fg_bg("CursorLineNr", B04, B01),
            bg_attr("QuickFixLine", B01, "none"),
            fg_bg_attr("PMenu", B05, B01, "none"),
            fg_bg("PMenuSel", B01, B05),
            fg_bg_attr("TabLine", B03, B01, "none"),
            fg_bg_attr("TabLineFill", B03, B01, "none"),
            fg_bg_attr("TabLineSel", B0B, B01, "none"),
        ],
    },
    Section {
        title: "Standard syntax highlighting",
        groups: &[
            fg("Boolean", B09),
            fg("Character", B08),
            fg("Comment", B03),
            fg("Conditional", B0E),
            fg("Constant", B09),
            fg_attr("Define", B0E, "none"),
            fg("Delimiter", B0F),
            fg("Float", B09),
            fg("Function", B0D),
            fg_attr("Identifier", B08, "none"),
            fg("Include", B0D),
            fg("Keyword", B0E),
            fg("Label", B0A),
            fg("Number", B09),
            fg_attr("Operator", B05, "none"),
            fg("PreProc", B0A),
            fg("Repeat", B0A),
            fg("Special", B0C),
            fg("SpecialChar", B0F),
            fg("Statement", B08),
            fg("StorageClass", B0A),
            fg("String", B0B),
            fg("Structure", B0E),
            fg("Tag", B0A),
            fg_bg("Todo", B0A, B01),
            fg_attr("Type", B0A, "none"),
            fg("Typedef", B0A),
        ],
    },
    Section {
        title: "C highlighting",
        groups: &[
            fg("cOperator", B0C),
            fg("cPreCondit", B0E),
        ],
    },
    Section {
        title: "C# highlighting",
        groups: &[
            fg("csClass", B0A),
            fg("csAttribute", B0A),
            fg("csModifier", B0E),
            fg("csType", B08),
            fg("csUnspecifiedStatement", B0D),
            fg("csContextualStatement", B0E),
            fg("csNewDecleration", B08),
        ],
    },
    Section {
        title: "CSS highlighting",
        groups: &[
            fg("cssBraces", B05),
            fg("cssClassName", B0E),
            fg("cssColor", B0C),
        ],
    },
    Section {
        title: "Diff highlighting",
        groups: &[
            fg_bg("DiffAdd", B0B, B01),
            fg_bg("DiffChange", B03, B01),
            fg_bg("DiffDelete", B08, B01),
            fg_bg("DiffText", B0D, B01),
            fg_bg("DiffAdded", B0B, B00),
            fg_bg("DiffFile", B08, B00),
            fg_bg("DiffNewFile", B0B, B00),
            fg_bg("DiffLine", B0D, B00),
            fg_bg("DiffRemoved", B08, B00),
        ],
    },
    Section {
        title: "Git highlighting",
        groups: &[
            fg("gitcommitOverflow", B08),
            fg("gitcommitSummary", B0B),
            fg("gitcommitComment", B03),
            fg("gitcommitUntracked", B03),
            fg("gitcommitDiscarded", B03),
            fg("gitcommitSelected", B03),
            fg("gitcommitHeader", B0E),
            fg("gitcommitSelectedType", B0D),
            fg("gitcommitUnmergedType", B0D),
            fg("gitcommitDiscardedType", B0D),
            fg_attr("gitcommitBranch", B09, "bold"),
            fg("gitcommitUntrackedFile", B0A),
            fg_attr("gitcommitUnmergedFile", B08, "bold"),
            fg_attr("gitcommitDiscardedFile", B08, "bold"),
            fg_attr("gitcommitSelectedFile", B0B, "bold"),
        ],
    },
    Section {
        title: "GitGutter highlighting",
        groups: &[
            fg_bg("GitGutterAdd", B0B, B01),
            fg_bg("GitGutterChange", B0D, B01),
            fg_bg("GitGutterDelete", B08, B01),
            fg_bg("GitGutterChangeDelete", B0E, B01),
        ],
    },
    Section {
        title: "HTML highlighting",
        groups: &[
            fg("htmlBold", B0A),
            fg("htmlItalic", B0E),
            fg("htmlEndTag", B05),
            fg("htmlTag", B05),
        ],
    },
    Section {
        title: "JavaScript highlighting",
        groups: &[
            fg("javaScript", B05),
            fg("javaScriptBraces", B05),
            fg("javaScriptNumber", B09),
        ],
    },
    Section {
        title: "pangloss/vim-javascript highlighting",
        groups: &[
            fg("jsOperator", B0D),
            fg("jsStatement", B0E),
            fg("jsReturn", B0E),
            fg("jsThis", B08),
            fg("jsClassDefinition", B0A),
            fg("jsFunction", B0E),
            fg("jsFuncName", B0D),
            fg("jsFuncCall", B0D),
            fg("jsClassFuncName", B0D),
            fg("jsClassMethodType", B0E),
            fg("jsRegexpString", B0C),
            fg("jsGlobalObjects", B0A),
            fg("jsGlobalNodeObjects", B0A),
            fg("jsExceptions", B0A),
            fg("jsBuiltins", B0A),
        ],
    },
    Section {
        title: "Mail highlighting",
        groups: &[
            fg("mailQuoted1", B0A),
            fg("mailQuoted2", B0B),
            fg("mailQuoted3", B0E),
            fg("mailQuoted4", B0C),
            fg("mailQuoted5", B0D),
            fg("mailQuoted6", B0A),
            fg("mailURL", B0D),
            fg("mailEmail", B0D),
        ],
    },
    Section {
        title: "Markdown highlighting",
        groups: &[
            fg("markdownCode", B0B),
            fg_bg("markdownError", B05, B00),
            fg("markdownCodeBlock", B0B),
            fg("markdownHeadingDelimiter", B0D),
        ],
    },
    Section {
        title: "NERDTree highlighting",
        groups: &[
            fg("NERDTreeDirSlash", B0D),
            fg("NERDTreeExecFile", B05),
        ],
    },
    Section {
        title: "PHP highlighting",
        groups: &[
            fg("phpMemberSelector", B05),
            fg("phpComparison", B05),
            fg("phpParent", B05),
            fg("phpMethodsVar", B0C),
        ],
    },
    Section {
        title: "Python highlighting",
        groups: &[
            fg("pythonOperator", B0E),
            fg("pythonRepeat", B0E),
            fg("pythonInclude", B0E),
            fg("pythonStatement", B0E),
        ],
    },
    Section {
        title: "Ruby highlighting",
        groups: &[
            fg("rubyAttribute", B0D),
            fg("rubyConstant", B0A),
            fg("rubyInterpolationDelimiter", B0F),
            fg("rubyRegexp", B0C),
            fg("rubySymbol", B0B),
            fg("rubyStringDelimiter", B0B),
        ],
    },
    Section {
        title: "SASS highlighting",
        groups: &[
            fg("sassidChar", B08),
            fg("sassClassChar", B09),
            fg("sassInclude", B0E),
            fg("sassMixing", B0E),
            fg("sassMixinName", B0D),
        ],
    },
    Section {
        title: "Signify highlighting",
        groups: &[
            fg_bg("SignifySignAdd", B0B, B01),
            fg_bg("SignifySignChange", B0D, B01),
            fg_bg("SignifySignDelete", B08, B01),
        ],
    },
    Section {
        title: "Spelling highlighting",
        groups: &[
            undercurl("SpellBad", B08),
            undercurl("SpellLocal", B0C),
            undercurl("SpellCap", B0D),
            undercurl("SpellRare", B0E),
        ],
    },
    Section {
        title: "Startify highlighting",
        groups: &[
            fg("StartifyBracket", B03),
            fg("StartifyFile", B07),
            fg("StartifyFooter", B03),
            fg("StartifyHeader", B0B),
            fg("StartifyNumber", B09),
            fg("StartifyPath", B03),
            fg("StartifySection", B0E),
            fg("StartifySelect", B0C),
            fg("StartifySlash", B03),
            fg("StartifySpecial", B03),
        ],
    },
    Section {
        title: "Java highlighting",
        groups: &[
            fg("javaOperator", B0D),
        ],
    },
];

/// Iterate every highlight group in emission order.
pub fn all_groups() -> impl Iterator<Item = &'static Highlight> {
    SECTIONS.iter().flat_map(|section| section.groups.iter())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn base_renders_as_uppercase_pair() {
        assert_eq!(B00.to_string(), "00");
        assert_eq!(B0A.to_string(), "0A");
        assert_eq!(B0F.to_string(), "0F");
    }

    #[test]
    fn table_covers_all_groups() {
        assert_eq!(SECTIONS.len(), 22);
        assert_eq!(all_groups().count(), 184);
    }

    #[test]
    fn group_names_are_unique() {
        let mut seen = HashSet::new();
        for group in all_groups() {
            assert!(seen.insert(group.group), "duplicate group {}", group.group);
        }
    }

    #[test]
    fn roles_stay_within_base16() {
        for group in all_groups() {
            for base in [group.fg, group.bg, group.sp].into_iter().flatten() {
                assert!(base.0 <= 0x0F, "{} uses {base}", group.group);
            }
        }
    }

    #[test]
    fn only_wild_menu_drops_cterm_background() {
        let gui_only: Vec<_> = all_groups()
            .filter(|g| g.bg.is_some() && !g.cterm_bg)
            .map(|g| g.group)
            .collect();
        assert_eq!(gui_only, vec!["WildMenu"]);
    }

    #[test]
    fn spelling_groups_use_undercurl_with_special_color() {
        let spell = SECTIONS
            .iter()
            .find(|s| s.title == "Spelling highlighting")
            .unwrap();
        for group in spell.groups {
            assert_eq!(group.attr, "undercurl");
            assert!(group.sp.is_some());
            assert!(group.fg.is_none() && group.bg.is_none());
        }
    }
}
