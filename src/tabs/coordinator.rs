//! Per-window tab coordinator
//!
//! `WindowTabs` owns the tab strip, the selection history and the window
//! mirror of one window and is the only code that mutates them. Every
//! public operation runs to completion on the UI thread, so each one is a
//! transaction with respect to the others:
//!
//! - the outgoing tab is saved before it loses the selection
//!   ([`WindowTabs::save_current_tab`]),
//! - tab to window state only flows through
//!   [`WindowTabs::load_tab_into_window`], after the strip selection moved,
//! - removing a tab clears every cached reference to it in the same call.

use egui::Rect;
use log::{debug, info, warn};
use std::path::PathBuf;

use super::consistency::{verify_window_tab, Inconsistency};
use super::controller::{same_controller, ControllerRef};
use super::history::SelectionHistory;
use super::host::WindowHost;
use super::layout::tab_bar_visible;
use super::mirror::{PresentationMode, WindowMirror};
use super::outline::{OutlineId, TocState};
use super::strip::{TabRecord, TabStrip};
use super::tab::{Tab, TabId, HOME_TAB_TITLE};
use crate::config::Settings;
use crate::theme::{update_tabs_colors, ColorResolver};

/// Preferences and window chrome handed to every coordinator operation.
pub struct TabContext<'a> {
    pub settings: &'a Settings,
    pub host: &'a mut dyn WindowHost,
}

impl<'a> TabContext<'a> {
    pub fn new(settings: &'a Settings, host: &'a mut dyn WindowHost) -> Self {
        Self { settings, host }
    }
}

/// Coarse window state, derived from the tab count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowTabsState {
    NoTabs,
    SingleTab,
    MultiTab,
}

/// Tab state of one window.
#[derive(Debug)]
pub struct WindowTabs {
    strip: TabStrip,
    history: SelectionHistory,
    mirror: WindowMirror,
    tabs_in_titlebar: bool,
    next_tab_id: u64,
}

impl WindowTabs {
    pub fn new(settings: &Settings, canvas_rect: Rect) -> Self {
        let mut strip = TabStrip::new();
        strip.in_title_bar = settings.tabs_in_titlebar;
        Self {
            strip,
            history: SelectionHistory::new(),
            mirror: WindowMirror::new(canvas_rect),
            tabs_in_titlebar: settings.tabs_in_titlebar,
            next_tab_id: 0,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn strip(&self) -> &TabStrip {
        &self.strip
    }

    pub fn history(&self) -> &SelectionHistory {
        &self.history
    }

    pub fn mirror(&self) -> &WindowMirror {
        &self.mirror
    }

    pub fn tab_count(&self) -> usize {
        self.strip.len()
    }

    pub fn tabs_in_titlebar(&self) -> bool {
        self.tabs_in_titlebar
    }

    pub fn state(&self) -> WindowTabsState {
        match self.strip.len() {
            0 => WindowTabsState::NoTabs,
            1 => WindowTabsState::SingleTab,
            _ => WindowTabsState::MultiTab,
        }
    }

    /// The selected tab.
    pub fn current_tab(&self) -> Option<&Tab> {
        self.strip.selected_record().map(|record| &record.tab)
    }

    pub fn tab(&self, id: TabId) -> Option<&Tab> {
        self.strip.find(id).and_then(|index| self.strip.get(index)).map(|r| &r.tab)
    }

    /// Validate a caller-supplied index against the current tab count.
    pub fn check_index(&self, index: usize) -> crate::error::Result<usize> {
        if index < self.strip.len() {
            Ok(index)
        } else {
            Err(crate::error::Error::InvalidTabIndex {
                index,
                count: self.strip.len(),
            })
        }
    }

    fn allocate_id(&mut self) -> TabId {
        let id = TabId::new(self.next_tab_id);
        self.next_tab_id += 1;
        id
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Creation
    // ─────────────────────────────────────────────────────────────────────────

    /// Open a new tab for `path` at the end of the strip and select it.
    ///
    /// In multi-tab mode the very first call on a window also inserts the
    /// pinned home tab at index 0.
    pub fn create_tab(&mut self, ctx: &mut TabContext<'_>, path: Option<PathBuf>) -> TabId {
        self.save_current_tab();

        let canvas_rect = self.mirror.canvas_rect();
        if ctx.settings.use_tabs && self.next_tab_id == 0 {
            let home = Tab::home(self.allocate_id(), canvas_rect);
            let record = TabRecord::new(HOME_TAB_TITLE, None, home).pinned();
            let inserted = self.strip.insert_tab(0, record);
            debug_assert_eq!(inserted, Some(0));
            debug!("Created home tab");
        }

        let tab = Tab::new(self.allocate_id(), path, canvas_rect, ctx.settings.show_toc);
        let id = tab.id();
        let record = TabRecord::new(
            tab.title(ctx.settings.full_path_in_title),
            tab.tooltip(),
            tab,
        );
        let index = self.strip.push_tab(record);
        self.strip.set_selected(index);
        self.load_tab_into_window(ctx, index);
        self.update_tab_bar_visibility(ctx);

        debug!("Created tab {} at index {} (total: {})", id, index, self.strip.len());
        id
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Save / Load
    // ─────────────────────────────────────────────────────────────────────────

    /// Save the active tab's view state before it loses the selection.
    ///
    /// Records the tab as most recently used. Returns `false` when there was
    /// nothing to save or the window does not mirror the selected tab.
    pub fn save_current_tab(&mut self) -> bool {
        let Some(index) = self.strip.selected() else {
            return false;
        };
        let Some(record) = self.strip.get_mut(index) else {
            return false;
        };
        let tab = &mut record.tab;
        if !self.mirror.is_current(tab.id())
            || !same_controller(tab.controller.as_ref(), self.mirror.controller())
        {
            warn!(
                "Not saving tab {}: window mirrors {:?}",
                tab.id(),
                self.mirror.current_tab()
            );
            return false;
        }

        capture_toc_state(&self.mirror, tab);
        verify_window_tab(&self.mirror, tab);

        self.history.append(tab.id());
        true
    }

    /// Make the window show the tab at `index`.
    ///
    /// Called exactly once per selection change, after the strip selection
    /// was updated. Also refreshes the tab's title in the strip, which may
    /// have changed since creation (save-as).
    pub fn load_tab_into_window(&mut self, ctx: &mut TabContext<'_>, index: usize) {
        let Some(record) = self.strip.get(index) else {
            warn!("Cannot load tab {} (tab count: {})", index, self.strip.len());
            return;
        };
        let tab = &record.tab;
        self.mirror.sync_from(tab);
        let text = tab.title(ctx.settings.full_path_in_title);
        let tooltip = tab.tooltip();
        self.strip.set_text_and_tooltip(index, text, tooltip);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────────────────────

    /// Select the tab at `index`.
    ///
    /// No-op with fewer than two tabs, an invalid index, or when `index` is
    /// already selected.
    pub fn select_tab(&mut self, ctx: &mut TabContext<'_>, index: usize) {
        let count = self.strip.len();
        if count < 2 || index >= count || self.strip.selected() == Some(index) {
            return;
        }

        self.save_current_tab();
        let previous = self.strip.set_selected(index);
        if previous.is_none() {
            warn!("Selected tab {} without a previous selection", index);
            return;
        }
        self.load_tab_into_window(ctx, index);
        debug!("Switched to tab {}", index);
    }

    /// The strip widget already moved its selection to `index` after a
    /// selection-changing notification saved the outgoing tab.
    pub fn on_selection_changed(&mut self, ctx: &mut TabContext<'_>, index: usize) {
        if index >= self.strip.len() {
            warn!("Selection changed to {} (tab count: {})", index, self.strip.len());
            return;
        }
        let already_loaded = self
            .strip
            .get(index)
            .is_some_and(|record| self.mirror.is_current(record.id()));
        if self.strip.selected() == Some(index) && already_loaded {
            return;
        }
        self.strip.set_selected(index);
        self.load_tab_into_window(ctx, index);
    }

    /// Select the next tab, or the previous one when `reverse`, wrapping
    /// around both ends.
    pub fn cycle_tab(&mut self, ctx: &mut TabContext<'_>, reverse: bool) {
        let count = self.strip.len();
        if count < 2 {
            return;
        }
        let count = count as isize;
        let current = self.strip.selected().map_or(-1, |index| index as isize);
        let step = if reverse { -1 } else { 1 };
        let next = (current + step + count).rem_euclid(count) as usize;
        self.select_tab(ctx, next);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Closing
    // ─────────────────────────────────────────────────────────────────────────

    /// The UI closed the tab at `index`.
    pub fn close_tab(&mut self, ctx: &mut TabContext<'_>, index: usize) {
        if index >= self.strip.len() {
            warn!("Ignoring close of tab {} (tab count: {})", index, self.strip.len());
            return;
        }
        if self.strip.selected() == Some(index) {
            self.close_current_tab(ctx);
        } else {
            self.close_other_tab(ctx, index);
        }
    }

    /// Close the selected tab and select the most recently used survivor.
    ///
    /// Falls back to the first tab when the history has nothing left.
    pub fn close_current_tab(&mut self, ctx: &mut TabContext<'_>) {
        let Some(current) = self.strip.selected() else {
            if !self.strip.is_empty() {
                warn!("Close requested with {} tabs but none selected", self.strip.len());
            }
            return;
        };
        self.remove_tab_at(ctx, current);

        if self.strip.is_empty() {
            info!("Closed last tab");
            return;
        }

        let mut next = None;
        while let Some(id) = self.history.pop() {
            next = self.strip.find(id);
            if next.is_some() {
                break;
            }
        }
        let next = next.unwrap_or(0);
        self.strip.set_selected(next);
        self.load_tab_into_window(ctx, next);
        debug!("Closed current tab, now showing tab {}", next);
    }

    /// Close a tab that is not the selected one. The active tab and the
    /// window mirror stay as they are.
    pub fn close_other_tab(&mut self, ctx: &mut TabContext<'_>, index: usize) {
        if self.strip.selected() == Some(index) {
            self.close_current_tab(ctx);
            return;
        }
        self.remove_tab_at(ctx, index);
    }

    /// Tear down every tab; the window is going away.
    pub fn close_window(&mut self, ctx: &mut TabContext<'_>) {
        let removed = self.strip.remove_all();
        self.history.reset();
        self.mirror.clear();
        self.update_tab_bar_visibility(ctx);
        if !removed.is_empty() {
            info!("Closed window with {} tab(s)", removed.len());
        }
    }

    fn remove_tab_at(&mut self, ctx: &mut TabContext<'_>, index: usize) {
        let Some(record) = self.strip.remove_tab(index) else {
            return;
        };
        let id = record.id();
        self.history.remove(id);
        if self.mirror.is_current(id) {
            self.mirror.clear();
        }
        drop(record);
        debug!("Destroyed tab {} (remaining: {})", id, self.strip.len());
        self.update_tab_bar_visibility(ctx);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Documents
    // ─────────────────────────────────────────────────────────────────────────

    /// Bind a loaded document to tab `id`.
    ///
    /// If that tab is the current one the window mirror follows in the same
    /// call. Returns `false` if the tab does not exist.
    pub fn attach_controller(
        &mut self,
        ctx: &mut TabContext<'_>,
        id: TabId,
        controller: Option<ControllerRef>,
    ) -> bool {
        let Some(index) = self.strip.find(id) else {
            warn!("Cannot attach document to unknown tab {}", id);
            return false;
        };
        if let Some(record) = self.strip.get_mut(index) {
            record.tab.controller = controller;
            record.tab.toc_state = TocState::default();
        }
        if self.mirror.is_current(id) {
            self.load_tab_into_window(ctx, index);
        } else {
            let full_path = ctx.settings.full_path_in_title;
            if let Some(record) = self.strip.get_mut(index) {
                record.text = record.tab.title(full_path);
                record.tooltip = record.tab.tooltip();
            }
        }
        true
    }

    /// The current document changed (reload, save-as): re-check the window
    /// and refresh the tab title.
    pub fn on_document_changed(&mut self, ctx: &mut TabContext<'_>) -> Vec<Inconsistency> {
        let Some(index) = self.strip.selected() else {
            return Vec::new();
        };
        let Some(record) = self.strip.get(index) else {
            return Vec::new();
        };
        if !self.mirror.is_current(record.id()) {
            warn!(
                "Document changed but window mirrors {:?}, not tab {}",
                self.mirror.current_tab(),
                record.id()
            );
        }
        let found = verify_window_tab(&self.mirror, &record.tab);
        let text = record.tab.title(ctx.settings.full_path_in_title);
        let tooltip = record.tab.tooltip();
        self.strip.set_text_and_tooltip(index, text, tooltip);
        found
    }

    // ─────────────────────────────────────────────────────────────────────────
    // View state (tab and mirror written together)
    // ─────────────────────────────────────────────────────────────────────────

    /// Show or hide the outline for the current tab.
    ///
    /// Writes the flag that belongs to the current presentation mode; blank
    /// screens keep the outline hidden.
    pub fn set_toc_visible(&mut self, visible: bool) {
        let presentation = self.mirror.presentation();
        if presentation.is_blank_screen() {
            return;
        }
        let Some(tab) = self.current_tab_mut() else {
            return;
        };
        match presentation {
            PresentationMode::Enabled => tab.show_toc_presentation = visible,
            _ => tab.show_toc = visible,
        }
        self.refresh_mirror();
    }

    /// Expand or collapse an outline item in the live view.
    ///
    /// Only the mirror changes; the tab's toggle list is captured from it by
    /// the next [`WindowTabs::save_current_tab`]. Returns `false` if the outline is not loaded or the item cannot be
    /// expanded.
    pub fn toggle_outline_item(&mut self, item: OutlineId) -> bool {
        if !self.mirror.toc_loaded() {
            return false;
        }
        let expandable = self
            .mirror
            .controller()
            .and_then(|c| c.outline())
            .and_then(|tree| tree.find(item))
            .is_some_and(|found| found.is_expandable());
        if !expandable {
            return false;
        }
        if !self.mirror.toc_expanded.remove(&item) {
            self.mirror.toc_expanded.insert(item);
        }
        true
    }

    /// The window's canvas was resized. Every tab shares the window geometry.
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.mirror.canvas_rect = rect;
        for tab in self.strip.tabs_mut() {
            tab.canvas_rect = rect;
        }
    }

    pub fn set_presentation(&mut self, mode: PresentationMode) {
        if self.mirror.presentation() == mode {
            return;
        }
        self.mirror.presentation = mode;
        self.refresh_mirror();
        debug!("Presentation mode: {:?}", mode);
    }

    fn current_tab_mut(&mut self) -> Option<&mut Tab> {
        let index = self.strip.selected()?;
        let record = self.strip.get_mut(index)?;
        if !self.mirror.is_current(record.id()) {
            return None;
        }
        Some(&mut record.tab)
    }

    /// Keep the live outline state, then resync the mirror from the current tab.
    fn refresh_mirror(&mut self) {
        let Some(index) = self.strip.selected() else {
            return;
        };
        let Some(record) = self.strip.get_mut(index) else {
            return;
        };
        if !self.mirror.is_current(record.id()) {
            return;
        }
        capture_toc_state(&self.mirror, &mut record.tab);
        self.mirror.sync_from(&record.tab);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Chrome
    // ─────────────────────────────────────────────────────────────────────────

    /// Recompute tab bar visibility from the tab count.
    pub fn update_tab_bar_visibility(&mut self, ctx: &mut TabContext<'_>) {
        let show = tab_bar_visible(
            self.strip.len(),
            ctx.settings.use_tabs,
            self.tabs_in_titlebar,
        );
        if self.strip.set_is_visible(show) {
            ctx.host.relayout_window();
        }
    }

    /// Move the tabs into (or out of) the window title bar.
    pub fn set_tabs_in_titlebar(&mut self, ctx: &mut TabContext<'_>, in_titlebar: bool) {
        if in_titlebar == self.tabs_in_titlebar {
            return;
        }
        self.tabs_in_titlebar = in_titlebar;
        self.strip.in_title_bar = in_titlebar;
        ctx.host.reparent_tab_strip(in_titlebar);
        if in_titlebar {
            ctx.host.relayout_caption();
        }
        self.update_tab_bar_visibility(ctx);
    }

    /// Pull the tab colors from `resolver` into the strip style.
    pub fn update_tabs_colors(&mut self, resolver: &impl ColorResolver) {
        update_tabs_colors(&mut self.strip.style, resolver);
    }
}

/// Store the live outline expansion into `tab` if the outline is loaded.
fn capture_toc_state(mirror: &WindowMirror, tab: &mut Tab) {
    if !mirror.toc_loaded() {
        return;
    }
    let captured = tab
        .controller
        .as_deref()
        .and_then(|c| c.outline())
        .map(|tree| TocState::capture(tree, mirror.toc_expanded()));
    if let Some(state) = captured {
        tab.toc_state = state;
    }
}
