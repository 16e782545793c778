//! Fakes shared by the tab tests.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::controller::{ControllerRef, DocumentController};
use super::host::WindowHost;
use super::outline::OutlineTree;
use crate::config::Settings;

#[derive(Debug)]
pub struct FakeDocument {
    path: PathBuf,
    outline: Option<OutlineTree>,
}

impl FakeDocument {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            outline: None,
        }
    }

    pub fn with_outline(mut self, outline: OutlineTree) -> Self {
        self.outline = Some(outline);
        self
    }

    pub fn shared(self) -> ControllerRef {
        Rc::new(self)
    }
}

impl DocumentController for FakeDocument {
    fn file_path(&self) -> &Path {
        &self.path
    }

    fn outline(&self) -> Option<&OutlineTree> {
        self.outline.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    RelayoutWindow,
    RelayoutCaption,
    Reparent(bool),
}

/// Host that records every notification.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub calls: Vec<HostCall>,
}

impl RecordingHost {
    pub fn count(&self, call: &HostCall) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }
}

impl WindowHost for RecordingHost {
    fn relayout_window(&mut self) {
        self.calls.push(HostCall::RelayoutWindow);
    }

    fn relayout_caption(&mut self) {
        self.calls.push(HostCall::RelayoutCaption);
    }

    fn reparent_tab_strip(&mut self, in_titlebar: bool) {
        self.calls.push(HostCall::Reparent(in_titlebar));
    }
}

/// Settings with multi-tab mode switched off: no home tab, bar hidden for
/// a single tab.
pub fn single_mode() -> Settings {
    Settings {
        use_tabs: false,
        ..Settings::default()
    }
}
