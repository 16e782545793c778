//! Window/tab consistency check
//!
//! Run after saving or refreshing the current tab. Any finding is a
//! programming error: it is logged and reported back, never repaired.

use egui::Rect;
use log::error;
use std::fmt;

use super::controller::same_controller;
use super::mirror::WindowMirror;
use super::tab::{Tab, TabId};

/// A window field that disagrees with the current tab.
#[derive(Debug, Clone, PartialEq)]
pub enum Inconsistency {
    /// The window mirrors a different document controller
    Controller { tab: TabId },
    TocVisibility { expected: bool, actual: bool },
    CanvasRect { tab: Rect, window: Rect },
}

impl fmt::Display for Inconsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inconsistency::Controller { tab } => {
                write!(f, "window controller differs from tab {}", tab)
            }
            Inconsistency::TocVisibility { expected, actual } => {
                write!(f, "outline visible: expected {}, window has {}", expected, actual)
            }
            Inconsistency::CanvasRect { tab, window } => {
                write!(f, "canvas rect: tab {:?}, window {:?}", tab, window)
            }
        }
    }
}

/// Compare the window mirror against `tab`.
///
/// Returns every mismatch found; an empty list means consistent.
pub fn verify_window_tab(mirror: &WindowMirror, tab: &Tab) -> Vec<Inconsistency> {
    let mut found = Vec::new();

    if !same_controller(tab.controller.as_ref(), mirror.controller()) {
        found.push(Inconsistency::Controller { tab: tab.id() });
    }

    let expected = mirror.presentation().expected_toc_visibility(tab);
    if mirror.toc_visible() != expected {
        found.push(Inconsistency::TocVisibility {
            expected,
            actual: mirror.toc_visible(),
        });
    }

    if tab.canvas_rect != mirror.canvas_rect() {
        found.push(Inconsistency::CanvasRect {
            tab: tab.canvas_rect,
            window: mirror.canvas_rect(),
        });
    }

    for inconsistency in &found {
        error!("Tab {} out of sync with window: {}", tab.id(), inconsistency);
    }
    found
}
