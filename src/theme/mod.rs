//! Tab strip colors
//!
//! The tab strip widget owns a fixed set of style colors. They are pulled
//! from a [`ColorResolver`] by name once per theme change and copied into
//! the widget's [`TabStripStyle`]; no other logic lives here.
//!
//! # Usage
//!
//! ```ignore
//! use tabkeeper::theme::{update_tabs_colors, TabPalette};
//!
//! let palette = TabPalette::for_theme(settings.theme, system_prefers_dark);
//! update_tabs_colors(&mut strip.style, &palette);
//! ```

use egui::Color32;

use crate::config::Theme;

// ─────────────────────────────────────────────────────────────────────────────
// Named Colors
// ─────────────────────────────────────────────────────────────────────────────

/// Every color the tab strip asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppColor {
    TabBackgroundBg,
    TabBackgroundText,
    TabBackgroundCloseX,
    TabBackgroundCloseCircle,
    TabSelectedBg,
    TabSelectedText,
    TabSelectedCloseX,
    TabSelectedCloseCircle,
    TabHighlightedBg,
    TabHighlightedText,
    TabHighlightedCloseX,
    TabHighlightedCloseCircle,
    TabHoveredCloseX,
    TabHoveredCloseCircle,
    TabClickedCloseX,
    TabClickedCloseCircle,
}

/// Source of named colors, usually the active theme.
pub trait ColorResolver {
    fn app_color(&self, color: AppColor) -> Color32;
}

// ─────────────────────────────────────────────────────────────────────────────
// Palettes
// ─────────────────────────────────────────────────────────────────────────────

/// Colors for one interaction state of a tab.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabStateColors {
    pub bg: Color32,
    pub text: Color32,
    pub close_x: Color32,
    pub close_circle: Color32,
}

/// Built-in light and dark tab palettes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabPalette {
    pub background: TabStateColors,
    pub selected: TabStateColors,
    pub highlighted: TabStateColors,
    /// Only the close glyph colors are used while hovering or pressing it
    pub hovered: TabStateColors,
    pub clicked: TabStateColors,
}

impl TabPalette {
    /// Light theme palette.
    pub fn light() -> Self {
        Self {
            background: TabStateColors {
                bg: Color32::from_rgb(250, 250, 250),
                text: Color32::from_rgb(80, 80, 80),
                close_x: Color32::from_rgb(120, 120, 120),
                close_circle: Color32::from_rgb(250, 250, 250),
            },
            selected: TabStateColors {
                bg: Color32::from_rgb(255, 255, 255),
                text: Color32::from_rgb(30, 30, 30),
                close_x: Color32::from_rgb(80, 80, 80),
                close_circle: Color32::from_rgb(255, 255, 255),
            },
            highlighted: TabStateColors {
                bg: Color32::from_rgb(240, 240, 240),
                text: Color32::from_rgb(30, 30, 30),
                close_x: Color32::from_rgb(80, 80, 80),
                close_circle: Color32::from_rgb(240, 240, 240),
            },
            hovered: TabStateColors {
                bg: Color32::from_rgb(240, 240, 240),
                text: Color32::from_rgb(30, 30, 30),
                close_x: Color32::WHITE,
                close_circle: Color32::from_rgb(232, 17, 35),
            },
            clicked: TabStateColors {
                bg: Color32::from_rgb(230, 240, 255),
                text: Color32::from_rgb(30, 30, 30),
                close_x: Color32::WHITE,
                close_circle: Color32::from_rgb(160, 0, 20),
            },
        }
    }

    /// Dark theme palette.
    pub fn dark() -> Self {
        Self {
            background: TabStateColors {
                bg: Color32::from_rgb(37, 37, 37),
                text: Color32::from_rgb(180, 180, 180),
                close_x: Color32::from_rgb(140, 140, 140),
                close_circle: Color32::from_rgb(37, 37, 37),
            },
            selected: TabStateColors {
                bg: Color32::from_rgb(30, 30, 30),
                text: Color32::from_rgb(220, 220, 220),
                close_x: Color32::from_rgb(180, 180, 180),
                close_circle: Color32::from_rgb(30, 30, 30),
            },
            highlighted: TabStateColors {
                bg: Color32::from_rgb(50, 50, 50),
                text: Color32::from_rgb(220, 220, 220),
                close_x: Color32::from_rgb(180, 180, 180),
                close_circle: Color32::from_rgb(50, 50, 50),
            },
            hovered: TabStateColors {
                bg: Color32::from_rgb(50, 50, 50),
                text: Color32::from_rgb(220, 220, 220),
                close_x: Color32::WHITE,
                close_circle: Color32::from_rgb(196, 43, 28),
            },
            clicked: TabStateColors {
                bg: Color32::from_rgb(40, 60, 80),
                text: Color32::from_rgb(220, 220, 220),
                close_x: Color32::WHITE,
                close_circle: Color32::from_rgb(130, 20, 10),
            },
        }
    }

    /// Pick the palette for a configured theme.
    pub fn for_theme(theme: Theme, system_prefers_dark: bool) -> Self {
        if theme.is_dark(system_prefers_dark) {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

impl ColorResolver for TabPalette {
    fn app_color(&self, color: AppColor) -> Color32 {
        match color {
            AppColor::TabBackgroundBg => self.background.bg,
            AppColor::TabBackgroundText => self.background.text,
            AppColor::TabBackgroundCloseX => self.background.close_x,
            AppColor::TabBackgroundCloseCircle => self.background.close_circle,
            AppColor::TabSelectedBg => self.selected.bg,
            AppColor::TabSelectedText => self.selected.text,
            AppColor::TabSelectedCloseX => self.selected.close_x,
            AppColor::TabSelectedCloseCircle => self.selected.close_circle,
            AppColor::TabHighlightedBg => self.highlighted.bg,
            AppColor::TabHighlightedText => self.highlighted.text,
            AppColor::TabHighlightedCloseX => self.highlighted.close_x,
            AppColor::TabHighlightedCloseCircle => self.highlighted.close_circle,
            AppColor::TabHoveredCloseX => self.hovered.close_x,
            AppColor::TabHoveredCloseCircle => self.hovered.close_circle,
            AppColor::TabClickedCloseX => self.clicked.close_x,
            AppColor::TabClickedCloseCircle => self.clicked.close_circle,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Strip Style
// ─────────────────────────────────────────────────────────────────────────────

/// Style fields of the tab strip widget.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TabStripStyle {
    pub current_bg: Color32,
    pub background_bg: Color32,
    pub background_text: Color32,
    pub background_close_x: Color32,
    pub background_close_circle: Color32,
    pub selected_bg: Color32,
    pub selected_text: Color32,
    pub selected_close_x: Color32,
    pub selected_close_circle: Color32,
    pub highlighted_bg: Color32,
    pub highlighted_text: Color32,
    pub highlighted_close_x: Color32,
    pub highlighted_close_circle: Color32,
    pub hovered_close_x: Color32,
    pub hovered_close_circle: Color32,
    pub clicked_close_x: Color32,
    pub clicked_close_circle: Color32,
}

/// Fill color behind the tabs themselves.
pub const TAB_DEFAULT_BG: Color32 = Color32::from_rgb(0xcc, 0xcc, 0xcc);

/// Copy the named tab colors from `resolver` into `style`.
pub fn update_tabs_colors(style: &mut TabStripStyle, resolver: &impl ColorResolver) {
    style.current_bg = TAB_DEFAULT_BG;
    style.background_bg = resolver.app_color(AppColor::TabBackgroundBg);
    style.background_text = resolver.app_color(AppColor::TabBackgroundText);
    style.background_close_x = resolver.app_color(AppColor::TabBackgroundCloseX);
    style.background_close_circle = resolver.app_color(AppColor::TabBackgroundCloseCircle);
    style.selected_bg = resolver.app_color(AppColor::TabSelectedBg);
    style.selected_text = resolver.app_color(AppColor::TabSelectedText);
    style.selected_close_x = resolver.app_color(AppColor::TabSelectedCloseX);
    style.selected_close_circle = resolver.app_color(AppColor::TabSelectedCloseCircle);
    style.highlighted_bg = resolver.app_color(AppColor::TabHighlightedBg);
    style.highlighted_text = resolver.app_color(AppColor::TabHighlightedText);
    style.highlighted_close_x = resolver.app_color(AppColor::TabHighlightedCloseX);
    style.highlighted_close_circle = resolver.app_color(AppColor::TabHighlightedCloseCircle);
    style.hovered_close_x = resolver.app_color(AppColor::TabHoveredCloseX);
    style.hovered_close_circle = resolver.app_color(AppColor::TabHoveredCloseCircle);
    style.clicked_close_x = resolver.app_color(AppColor::TabClickedCloseX);
    style.clicked_close_circle = resolver.app_color(AppColor::TabClickedCloseCircle);
}
