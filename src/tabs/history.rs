//! Most-recently-used selection history
//!
//! Only a hint for picking the next tab after a close; the tab strip stays
//! the authority on which tabs exist.

use super::tab::TabId;

/// MRU stack of tab ids, most recent last. Each id appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionHistory {
    entries: Vec<TabId>,
}

impl SelectionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `id` as the most recent entry, moving it if already present.
    pub fn append(&mut self, id: TabId) {
        self.remove(id);
        self.entries.push(id);
    }

    /// Forget `id`. No-op if absent.
    pub fn remove(&mut self, id: TabId) {
        self.entries.retain(|entry| *entry != id);
    }

    /// Remove and return the most recent entry.
    pub fn pop(&mut self) -> Option<TabId> {
        self.entries.pop()
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: TabId) -> bool {
        self.entries.contains(&id)
    }

    /// Entries from oldest to most recent.
    pub fn entries(&self) -> &[TabId] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u64) -> TabId {
        TabId::new(raw)
    }

    #[test]
    fn test_pop_order() {
        let mut history = SelectionHistory::new();
        history.append(id(1));
        history.append(id(2));
        assert_eq!(history.pop(), Some(id(2)));
        assert_eq!(history.pop(), Some(id(1)));
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn test_append_moves_existing_to_end() {
        let mut history = SelectionHistory::new();
        history.append(id(1));
        history.append(id(2));
        history.append(id(3));
        history.append(id(1));
        assert_eq!(history.entries(), &[id(2), id(3), id(1)]);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_remove_anywhere() {
        let mut history = SelectionHistory::new();
        history.append(id(1));
        history.append(id(2));
        history.append(id(3));
        history.remove(id(2));
        history.remove(id(42));
        assert_eq!(history.entries(), &[id(1), id(3)]);
        assert!(!history.contains(id(2)));
    }

    #[test]
    fn test_reset() {
        let mut history = SelectionHistory::new();
        history.append(id(1));
        history.append(id(2));
        history.reset();
        assert!(history.is_empty());
        assert_eq!(history.pop(), None);
    }
}
