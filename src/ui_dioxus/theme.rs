use crate::config::Theme;

/// Inline-style colors for the current theme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
}

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => Palette {
            background: "#f3e8ff",
            surface: "#ffffff",
            text: "#18181b",
            muted: "#71717a",
            border: "#e4e4e7",
            accent: "#3b82f6",
        },
        Theme::Dark => Palette {
            background: "#09090b",
            surface: "#18181b",
            text: "#f4f4f5",
            muted: "#a1a1aa",
            border: "rgba(255,255,255,0.1)",
            accent: "#60a5fa",
        },
    }
}

pub fn card_style(p: Palette) -> String {
    format!(
        "background: {}; color: {}; border: 1px solid {}; border-radius: 16px; padding: 16px; box-shadow: 0 2px 8px rgba(0,0,0,0.08);",
        p.surface, p.text, p.border
    )
}
