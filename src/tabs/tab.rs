//! Per-tab state
//!
//! A `Tab` is the domain side of one entry in the tab strip: the document
//! it shows plus the view state saved while it is not the active tab.

use egui::Rect;
use std::fmt;
use std::path::{Path, PathBuf};

use super::controller::ControllerRef;
use super::outline::TocState;

/// Title of the pinned placeholder tab.
pub const HOME_TAB_TITLE: &str = "Home";

/// Title of a tab that has no file.
pub const UNTITLED_TAB_TITLE: &str = "Untitled";

/// Stable identity of a tab within its window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(u64);

impl TabId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Runtime state of one tab.
#[derive(Debug, Clone)]
pub struct Tab {
    id: TabId,
    /// File the tab was opened for (None for the home tab)
    pub path: Option<PathBuf>,
    /// Whether this is the pinned home placeholder
    is_home: bool,
    /// Loaded document, if any
    pub controller: Option<ControllerRef>,
    /// Outline visibility outside presentation mode
    pub show_toc: bool,
    /// Outline visibility while presenting
    pub show_toc_presentation: bool,
    /// Saved outline expansion state
    pub toc_state: TocState,
    /// Last known canvas rectangle
    pub canvas_rect: Rect,
}

impl Tab {
    /// Create a tab for `path` (or an untitled one).
    pub fn new(id: TabId, path: Option<PathBuf>, canvas_rect: Rect, show_toc: bool) -> Self {
        Self {
            id,
            path,
            is_home: false,
            controller: None,
            show_toc,
            show_toc_presentation: false,
            toc_state: TocState::default(),
            canvas_rect,
        }
    }

    /// Create the pinned home placeholder.
    pub fn home(id: TabId, canvas_rect: Rect) -> Self {
        Self {
            is_home: true,
            ..Self::new(id, None, canvas_rect, false)
        }
    }

    pub fn id(&self) -> TabId {
        self.id
    }

    pub fn is_home(&self) -> bool {
        self.is_home
    }

    /// Path of the loaded document, falling back to the path it was opened with.
    pub fn file_path(&self) -> Option<&Path> {
        self.controller
            .as_deref()
            .map(|c| c.file_path())
            .or(self.path.as_deref())
    }

    /// Text shown in the tab strip.
    pub fn title(&self, full_path: bool) -> String {
        if self.is_home {
            return HOME_TAB_TITLE.to_string();
        }
        let Some(path) = self.file_path() else {
            return UNTITLED_TAB_TITLE.to_string();
        };
        if full_path {
            return path.display().to_string();
        }
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    }

    /// Tooltip shown in the tab strip: the full path.
    pub fn tooltip(&self) -> Option<String> {
        self.file_path().map(|p| p.display().to_string())
    }
}
