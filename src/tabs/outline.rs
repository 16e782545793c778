//! Document outline (table of contents) and per-tab expansion state
//!
//! The outline tree belongs to the document controller. A tab only keeps
//! the ids of items whose open/closed state differs from the item's
//! default, so a state captured against one tree can be replayed against
//! a freshly loaded copy of the same document.

use std::collections::BTreeSet;

/// Stable identifier of an outline item within one document.
pub type OutlineId = u32;

// ─────────────────────────────────────────────────────────────────────────────
// OutlineItem / OutlineTree
// ─────────────────────────────────────────────────────────────────────────────

/// A single entry in the document outline.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineItem {
    pub id: OutlineId,
    pub title: String,
    /// Whether the item starts out expanded
    pub open_by_default: bool,
    pub children: Vec<OutlineItem>,
}

impl OutlineItem {
    /// Create a leaf item.
    pub fn new(id: OutlineId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            open_by_default: false,
            children: Vec::new(),
        }
    }

    /// Builder: set the default expansion.
    pub fn open(mut self, open: bool) -> Self {
        self.open_by_default = open;
        self
    }

    /// Builder: attach children.
    pub fn with_children(mut self, children: Vec<OutlineItem>) -> Self {
        self.children = children;
        self
    }

    /// Only items with children can be expanded or collapsed.
    pub fn is_expandable(&self) -> bool {
        !self.children.is_empty()
    }
}

/// The outline of one document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutlineTree {
    pub items: Vec<OutlineItem>,
}

impl OutlineTree {
    pub fn new(items: Vec<OutlineItem>) -> Self {
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Depth-first walk over every item.
    pub fn walk(&self) -> impl Iterator<Item = &OutlineItem> {
        let mut stack: Vec<&OutlineItem> = self.items.iter().rev().collect();
        std::iter::from_fn(move || {
            let item = stack.pop()?;
            stack.extend(item.children.iter().rev());
            Some(item)
        })
    }

    /// Find an item by id.
    pub fn find(&self, id: OutlineId) -> Option<&OutlineItem> {
        self.walk().find(|item| item.id == id)
    }

    /// Ids expanded when the document is shown for the first time.
    pub fn default_expanded(&self) -> BTreeSet<OutlineId> {
        self.walk()
            .filter(|item| item.is_expandable() && item.open_by_default)
            .map(|item| item.id)
            .collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TocState
// ─────────────────────────────────────────────────────────────────────────────

/// Expansion state saved with a tab: ids toggled away from their default.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TocState {
    toggled: Vec<OutlineId>,
}

impl TocState {
    /// Capture the state of a live outline view.
    pub fn capture(tree: &OutlineTree, expanded: &BTreeSet<OutlineId>) -> Self {
        let toggled = tree
            .walk()
            .filter(|item| item.is_expandable())
            .filter(|item| expanded.contains(&item.id) != item.open_by_default)
            .map(|item| item.id)
            .collect();
        Self { toggled }
    }

    /// Rebuild the expanded set for `tree`.
    ///
    /// Ids that no longer exist in the tree are ignored.
    pub fn expanded_in(&self, tree: &OutlineTree) -> BTreeSet<OutlineId> {
        tree.walk()
            .filter(|item| item.is_expandable())
            .filter(|item| item.open_by_default != self.toggled.contains(&item.id))
            .map(|item| item.id)
            .collect()
    }

    pub fn toggled(&self) -> &[OutlineId] {
        &self.toggled
    }

    pub fn is_empty(&self) -> bool {
        self.toggled.is_empty()
    }
}
