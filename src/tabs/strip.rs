//! Tab strip model
//!
//! Ordered, index-addressable records backing the visual tab bar, plus the
//! single selected index. The strip owns its tabs: removing a record hands
//! ownership back to the caller, which is then responsible for it.

use log::warn;

use super::tab::{Tab, TabId};
use crate::theme::TabStripStyle;

/// One entry in the tab strip.
#[derive(Debug, Clone)]
pub struct TabRecord {
    /// Visible title
    pub text: String,
    pub tooltip: Option<String>,
    pub is_pinned: bool,
    pub tab: Tab,
}

impl TabRecord {
    pub fn new(text: impl Into<String>, tooltip: Option<String>, tab: Tab) -> Self {
        Self {
            text: text.into(),
            tooltip,
            is_pinned: false,
            tab,
        }
    }

    pub fn pinned(mut self) -> Self {
        self.is_pinned = true;
        self
    }

    pub fn id(&self) -> TabId {
        self.tab.id()
    }
}

/// Ordered tab records with a single selection.
///
/// Invariant: `selected`, when set, is a valid index into `records`.
#[derive(Debug, Default)]
pub struct TabStrip {
    records: Vec<TabRecord>,
    selected: Option<usize>,
    visible: bool,
    /// Whether the strip is drawn inside the window caption
    pub in_title_bar: bool,
    pub style: TabStripStyle,
}

impl TabStrip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Insert `record` at `index` (`0..=len`).
    ///
    /// Returns the inserted index, or `None` when `index` is out of range.
    /// The selection keeps pointing at the same record.
    pub fn insert_tab(&mut self, index: usize, record: TabRecord) -> Option<usize> {
        if index > self.records.len() {
            warn!(
                "Refusing to insert tab at {} (tab count: {})",
                index,
                self.records.len()
            );
            return None;
        }
        self.records.insert(index, record);
        if let Some(selected) = self.selected.as_mut() {
            if *selected >= index {
                *selected += 1;
            }
        }
        Some(index)
    }

    /// Append `record` and return its index.
    pub fn push_tab(&mut self, record: TabRecord) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    /// Remove and return the record at `index`.
    ///
    /// Never picks a new selection: removing the selected record leaves the
    /// strip with no selection; removing one before it shifts the index.
    pub fn remove_tab(&mut self, index: usize) -> Option<TabRecord> {
        debug_assert!(
            index < self.records.len(),
            "remove_tab({}) with {} tabs",
            index,
            self.records.len()
        );
        if index >= self.records.len() {
            warn!("Ignoring removal of tab {} (tab count: {})", index, self.records.len());
            return None;
        }
        let record = self.records.remove(index);
        self.selected = match self.selected {
            Some(selected) if selected == index => None,
            Some(selected) if selected > index => Some(selected - 1),
            other => other,
        };
        Some(record)
    }

    /// Remove every record, clearing the selection.
    pub fn remove_all(&mut self) -> Vec<TabRecord> {
        self.selected = None;
        std::mem::take(&mut self.records)
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Select `index` and return the previous selection.
    ///
    /// `index` must be valid; callers check it against `len()` first.
    pub fn set_selected(&mut self, index: usize) -> Option<usize> {
        debug_assert!(
            index < self.records.len(),
            "set_selected({}) with {} tabs",
            index,
            self.records.len()
        );
        if index >= self.records.len() {
            warn!("Ignoring selection of tab {} (tab count: {})", index, self.records.len());
            return self.selected;
        }
        self.selected.replace(index)
    }

    pub fn get(&self, index: usize) -> Option<&TabRecord> {
        self.records.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut TabRecord> {
        self.records.get_mut(index)
    }

    pub fn selected_record(&self) -> Option<&TabRecord> {
        self.selected.and_then(|index| self.records.get(index))
    }

    /// Index of the record holding tab `id`.
    pub fn find(&self, id: TabId) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TabRecord> {
        self.records.iter()
    }

    pub fn tabs_mut(&mut self) -> impl Iterator<Item = &mut Tab> {
        self.records.iter_mut().map(|record| &mut record.tab)
    }

    pub fn set_text_and_tooltip(&mut self, index: usize, text: String, tooltip: Option<String>) {
        if let Some(record) = self.records.get_mut(index) {
            record.text = text;
            record.tooltip = tooltip;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns `true` if the visibility changed.
    pub fn set_is_visible(&mut self, visible: bool) -> bool {
        let changed = self.visible != visible;
        self.visible = visible;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Rect;

    fn record(id: u64) -> TabRecord {
        let tab = Tab::new(TabId::new(id), None, Rect::ZERO, false);
        TabRecord::new(format!("tab {}", id), None, tab)
    }

    fn strip_with(count: u64) -> TabStrip {
        let mut strip = TabStrip::new();
        for id in 0..count {
            strip.push_tab(record(id));
        }
        strip
    }

    fn assert_selection_valid(strip: &TabStrip) {
        if let Some(selected) = strip.selected() {
            assert!(selected < strip.len(), "{} >= {}", selected, strip.len());
        }
    }

    #[test]
    fn test_insert_range() {
        let mut strip = strip_with(2);
        assert_eq!(strip.insert_tab(3, record(9)), None);
        assert_eq!(strip.len(), 2);
        assert_eq!(strip.insert_tab(2, record(9)), Some(2));
        assert_eq!(strip.insert_tab(0, record(10)), Some(0));
        assert_eq!(strip.get(0).map(|r| r.id()), Some(TabId::new(10)));
    }

    #[test]
    fn test_insert_before_selection_keeps_selected_record() {
        let mut strip = strip_with(2);
        strip.set_selected(1);
        strip.insert_tab(0, record(9));
        assert_eq!(strip.selected(), Some(2));
        assert_eq!(strip.selected_record().map(|r| r.id()), Some(TabId::new(1)));
    }

    #[test]
    fn test_set_selected_returns_previous() {
        let mut strip = strip_with(3);
        assert_eq!(strip.set_selected(2), None);
        assert_eq!(strip.set_selected(0), Some(2));
        assert_eq!(strip.set_selected(0), Some(0));
    }

    #[test]
    fn test_remove_selected_clears_selection() {
        let mut strip = strip_with(3);
        strip.set_selected(1);
        let removed = strip.remove_tab(1).map(|r| r.id());
        assert_eq!(removed, Some(TabId::new(1)));
        assert_eq!(strip.selected(), None);
    }

    #[test]
    fn test_remove_before_selection_shifts() {
        let mut strip = strip_with(3);
        strip.set_selected(2);
        strip.remove_tab(0);
        assert_eq!(strip.selected(), Some(1));
        assert_eq!(strip.selected_record().map(|r| r.id()), Some(TabId::new(2)));
    }

    #[test]
    fn test_selection_stays_valid_through_mutations() {
        let mut strip = TabStrip::new();
        let mut next = 0;
        for step in 0..40u64 {
            if step % 3 == 2 && !strip.is_empty() {
                let index = (step as usize * 7) % strip.len();
                strip.remove_tab(index);
            } else {
                let index = (step as usize * 5) % (strip.len() + 1);
                strip.insert_tab(index, record(next));
                next += 1;
                if step % 4 == 0 {
                    strip.set_selected(index);
                }
            }
            assert_selection_valid(&strip);
        }
    }

    #[test]
    fn test_find_and_remove_all() {
        let mut strip = strip_with(4);
        strip.set_selected(3);
        assert_eq!(strip.find(TabId::new(2)), Some(2));
        assert_eq!(strip.find(TabId::new(99)), None);

        let removed = strip.remove_all();
        assert_eq!(removed.len(), 4);
        assert!(strip.is_empty());
        assert_eq!(strip.selected(), None);
    }

    #[test]
    fn test_set_text_and_tooltip() {
        let mut strip = strip_with(1);
        strip.set_text_and_tooltip(0, "report.pdf".to_string(), Some("/report.pdf".to_string()));
        let record = strip.get(0).unwrap();
        assert_eq!(record.text, "report.pdf");
        assert_eq!(record.tooltip.as_deref(), Some("/report.pdf"));
    }

    #[test]
    fn test_visibility_change_detection() {
        let mut strip = TabStrip::new();
        assert!(!strip.set_is_visible(false));
        assert!(strip.set_is_visible(true));
        assert!(!strip.set_is_visible(true));
        assert!(strip.is_visible());
    }
}
