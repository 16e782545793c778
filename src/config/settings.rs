//! User preferences consumed by the tab core
//!
//! This module defines the `Settings` struct that holds the tab-related
//! options, with serde support for JSON persistence.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Theme Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Available color themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

impl Theme {
    /// Resolve `System` against the platform's dark-mode preference.
    pub fn is_dark(&self, system_prefers_dark: bool) -> bool {
        match self {
            Theme::Light => false,
            Theme::Dark => true,
            Theme::System => system_prefers_dark,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Main Settings Struct
// ─────────────────────────────────────────────────────────────────────────────

/// Tab preferences.
///
/// Serialized to JSON and persisted to the user's config directory.
/// All fields have defaults via `Default` and `#[serde(default)]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Multi-tab mode. Also keeps the tab bar visible with a single document
    /// and creates the pinned home tab on first use.
    pub use_tabs: bool,

    /// Configured tab width in logical pixels
    pub tab_width: u32,

    /// Whether tabs start out integrated into the window title bar
    pub tabs_in_titlebar: bool,

    /// Show the full file path as the tab title instead of the file name
    pub full_path_in_title: bool,

    /// Outline visibility given to newly created tabs
    pub show_toc: bool,

    /// Color theme used for the tab strip
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            use_tabs: true,
            tab_width: 300,
            tabs_in_titlebar: false,
            full_path_in_title: false,
            show_toc: true,
            theme: Theme::default(),
        }
    }
}

impl Settings {
    /// Minimum tab width; narrower configured widths are raised to this.
    pub const MIN_TAB_WIDTH: u32 = 100;
    /// Maximum accepted tab width.
    pub const MAX_TAB_WIDTH: u32 = 1000;

    /// Clamp values to valid ranges.
    ///
    /// Useful after loading a config file that was edited by hand.
    pub fn sanitize(&mut self) {
        self.tab_width = self
            .tab_width
            .clamp(Self::MIN_TAB_WIDTH, Self::MAX_TAB_WIDTH);
    }

    /// Deserialize and sanitize in one step.
    pub fn from_json_sanitized(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    /// Effective tab width, never below `MIN_TAB_WIDTH`.
    pub fn effective_tab_width(&self) -> u32 {
        self.tab_width.max(Self::MIN_TAB_WIDTH)
    }
}
