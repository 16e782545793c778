//! Tab lifecycle and selection
//!
//! This module contains the per-window tab core:
//! - `strip` - ordered tab records with a single selection
//! - `history` - most-recently-used selection stack
//! - `tab` - per-tab document reference and saved view state
//! - `mirror` - the window's cached copy of the current tab's view state
//! - `coordinator` - the state machine tying the above together
//! - `events` - strip widget events and menu/keyboard commands
//! - `consistency` - window/tab agreement check

mod consistency;
mod controller;
mod coordinator;
mod events;
mod history;
mod host;
mod layout;
mod mirror;
mod outline;
mod strip;
mod tab;

#[cfg(test)]
pub(crate) mod test_support;

pub use consistency::{verify_window_tab, Inconsistency};
pub use controller::{same_controller, ControllerRef, DocumentController};
pub use coordinator::{TabContext, WindowTabs, WindowTabsState};
pub use events::{SelectionVeto, TabCommand, TabEvent};
pub use history::SelectionHistory;
pub use host::{LoggingHost, WindowHost};
pub use layout::{tab_bar_height, tab_bar_visible, tab_size, TAB_BAR_DY};
pub use mirror::{PresentationMode, WindowMirror};
pub use outline::{OutlineId, OutlineItem, OutlineTree, TocState};
pub use strip::{TabRecord, TabStrip};
pub use tab::{Tab, TabId, HOME_TAB_TITLE, UNTITLED_TAB_TITLE};
