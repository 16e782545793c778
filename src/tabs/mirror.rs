//! Window-level mirror of the current tab
//!
//! The window caches the active tab's controller and view flags so the
//! renderer never has to look the tab up. The mirror is only ever written
//! from a tab through [`WindowMirror::sync_from`] or cleared as a whole;
//! the coordinator owns both calls.

use egui::Rect;
use std::collections::BTreeSet;

use super::controller::ControllerRef;
use super::outline::OutlineId;
use super::tab::{Tab, TabId};

/// Window-wide presentation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresentationMode {
    #[default]
    Disabled,
    Enabled,
    BlackScreen,
    WhiteScreen,
}

impl PresentationMode {
    /// Outline visibility a tab should have in this mode.
    pub fn expected_toc_visibility(&self, tab: &Tab) -> bool {
        match self {
            PresentationMode::Disabled => tab.show_toc,
            PresentationMode::Enabled => tab.show_toc_presentation,
            PresentationMode::BlackScreen | PresentationMode::WhiteScreen => false,
        }
    }

    pub fn is_blank_screen(&self) -> bool {
        matches!(self, PresentationMode::BlackScreen | PresentationMode::WhiteScreen)
    }
}

/// Cached view of the current tab.
#[derive(Debug, Clone)]
pub struct WindowMirror {
    pub(crate) current_tab: Option<TabId>,
    pub(crate) controller: Option<ControllerRef>,
    pub(crate) presentation: PresentationMode,
    pub(crate) toc_visible: bool,
    /// Outline is visible and the current document has one
    pub(crate) toc_loaded: bool,
    /// Live expanded items of the outline view
    pub(crate) toc_expanded: BTreeSet<OutlineId>,
    pub(crate) canvas_rect: Rect,
}

impl Default for WindowMirror {
    fn default() -> Self {
        Self::new(Rect::ZERO)
    }
}

impl WindowMirror {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            current_tab: None,
            controller: None,
            presentation: PresentationMode::default(),
            toc_visible: false,
            toc_loaded: false,
            toc_expanded: BTreeSet::new(),
            canvas_rect,
        }
    }

    pub fn current_tab(&self) -> Option<TabId> {
        self.current_tab
    }

    pub fn controller(&self) -> Option<&ControllerRef> {
        self.controller.as_ref()
    }

    pub fn presentation(&self) -> PresentationMode {
        self.presentation
    }

    pub fn toc_visible(&self) -> bool {
        self.toc_visible
    }

    pub fn toc_loaded(&self) -> bool {
        self.toc_loaded
    }

    pub fn toc_expanded(&self) -> &BTreeSet<OutlineId> {
        &self.toc_expanded
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    pub fn is_current(&self, id: TabId) -> bool {
        self.current_tab == Some(id)
    }

    /// Drop every reference to the current tab. Window geometry and the
    /// presentation mode survive.
    pub(crate) fn clear(&mut self) {
        self.current_tab = None;
        self.controller = None;
        self.toc_visible = false;
        self.toc_loaded = false;
        self.toc_expanded.clear();
    }

    /// Copy `tab`'s view state into the window.
    pub(crate) fn sync_from(&mut self, tab: &Tab) {
        let controller = tab.controller.clone();
        let toc_visible = self.presentation.expected_toc_visibility(tab);
        let expanded = controller
            .as_deref()
            .and_then(|c| c.outline())
            .filter(|_| toc_visible)
            .map(|tree| tab.toc_state.expanded_in(tree));

        self.current_tab = Some(tab.id());
        self.controller = controller;
        self.canvas_rect = tab.canvas_rect;
        self.toc_visible = toc_visible;
        self.toc_loaded = expanded.is_some();
        self.toc_expanded = expanded.unwrap_or_default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabs::outline::{OutlineItem, OutlineTree};
    use crate::tabs::test_support::FakeDocument;
    use egui::pos2;
    use std::rc::Rc;

    fn tab_with_outline() -> Tab {
        let tree = OutlineTree::new(vec![OutlineItem::new(1, "Chapter")
            .open(true)
            .with_children(vec![OutlineItem::new(2, "Section")])]);
        let mut tab = Tab::new(TabId::new(3), None, Rect::ZERO, true);
        tab.controller = Some(Rc::new(FakeDocument::new("/a.pdf").with_outline(tree)));
        tab
    }

    #[test]
    fn test_expected_toc_visibility_by_mode() {
        let mut tab = Tab::new(TabId::new(1), None, Rect::ZERO, true);
        tab.show_toc_presentation = false;
        assert!(PresentationMode::Disabled.expected_toc_visibility(&tab));
        assert!(!PresentationMode::Enabled.expected_toc_visibility(&tab));

        tab.show_toc_presentation = true;
        assert!(PresentationMode::Enabled.expected_toc_visibility(&tab));
        assert!(!PresentationMode::BlackScreen.expected_toc_visibility(&tab));
        assert!(!PresentationMode::WhiteScreen.expected_toc_visibility(&tab));
    }

    #[test]
    fn test_sync_from_loads_outline() {
        let tab = tab_with_outline();
        let mut mirror = WindowMirror::default();
        mirror.sync_from(&tab);

        assert!(mirror.is_current(tab.id()));
        assert!(mirror.toc_visible());
        assert!(mirror.toc_loaded());
        assert_eq!(mirror.toc_expanded().iter().copied().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_sync_from_hidden_outline_is_not_loaded() {
        let mut tab = tab_with_outline();
        tab.show_toc = false;
        let mut mirror = WindowMirror::default();
        mirror.sync_from(&tab);

        assert!(!mirror.toc_visible());
        assert!(!mirror.toc_loaded());
        assert!(mirror.toc_expanded().is_empty());
    }

    #[test]
    fn test_clear_keeps_geometry_and_mode() {
        let rect = Rect::from_min_max(pos2(0.0, 0.0), pos2(800.0, 600.0));
        let mut mirror = WindowMirror::new(rect);
        mirror.presentation = PresentationMode::Enabled;
        let mut tab = tab_with_outline();
        tab.canvas_rect = rect;
        mirror.sync_from(&tab);

        mirror.clear();
        assert!(mirror.current_tab().is_none());
        assert!(mirror.controller().is_none());
        assert!(!mirror.toc_loaded());
        assert_eq!(mirror.canvas_rect(), rect);
        assert_eq!(mirror.presentation(), PresentationMode::Enabled);
    }
}
