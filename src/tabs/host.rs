//! Window chrome collaborator
//!
//! Layout, caption and reparenting live outside the tab core; the
//! coordinator only notifies the host after it changed something that
//! affects them.

use log::debug;

/// Notifications the coordinator sends to the owning window.
pub trait WindowHost {
    /// Tab bar visibility changed; the window must lay itself out again.
    fn relayout_window(&mut self);

    /// The caption area needs a new layout (tabs moved into the title bar).
    fn relayout_caption(&mut self);

    /// Move the tab strip into the caption (`true`) or back into the frame.
    fn reparent_tab_strip(&mut self, in_titlebar: bool);
}

/// Host that only logs, for headless use.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHost;

impl WindowHost for LoggingHost {
    fn relayout_window(&mut self) {
        debug!("relayout window");
    }

    fn relayout_caption(&mut self) {
        debug!("relayout caption");
    }

    fn reparent_tab_strip(&mut self, in_titlebar: bool) {
        debug!("tab strip moved to {}", if in_titlebar { "caption" } else { "frame" });
    }
}
