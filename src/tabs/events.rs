//! Tab strip events and tab commands
//!
//! `TabEvent` is what the strip widget reports; `TabCommand` is what menus,
//! keyboard shortcuts and the replay script ask for. Both are dispatched
//! onto the coordinator by a single `match`.

use log::debug;
use std::path::PathBuf;
use std::str::FromStr;

use super::coordinator::{TabContext, WindowTabs};
use super::tab::TabId;
use crate::error::Result;

/// Answer to a selection-changing notification.
///
/// The outgoing tab is saved before answering; a switch is never blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionVeto {
    Proceed,
    Cancel,
}

/// Notifications from the tab strip widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabEvent {
    /// The close button of the tab at `index` was clicked
    Closed { index: usize },
    /// The user is about to switch tabs
    SelectionChanging,
    /// The widget now shows `index` as selected
    SelectionChanged { index: usize },
}

/// Menu and keyboard commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabCommand {
    Open(Option<PathBuf>),
    Select(usize),
    Next,
    Previous,
    CloseCurrent,
    Close(usize),
    CloseWindow,
}

impl FromStr for TabCommand {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        let (verb, rest) = match s.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (s, ""),
        };
        let index = |what: &str| -> std::result::Result<usize, String> {
            rest.parse::<usize>()
                .map_err(|_| format!("{} expects a tab index, got {:?}", what, rest))
        };

        match verb.to_lowercase().as_str() {
            "open" if rest.is_empty() => Ok(Self::Open(None)),
            "open" => Ok(Self::Open(Some(PathBuf::from(rest)))),
            "select" => index("select").map(Self::Select),
            "next" => Ok(Self::Next),
            "prev" | "previous" => Ok(Self::Previous),
            "close" if rest.is_empty() => Ok(Self::CloseCurrent),
            "close" => index("close").map(Self::Close),
            "quit" | "close-window" => Ok(Self::CloseWindow),
            "" => Err("empty command".to_string()),
            other => Err(format!(
                "unknown command: {}. Expected one of: open, select, next, prev, close, quit",
                other
            )),
        }
    }
}

impl WindowTabs {
    /// Dispatch a strip widget notification.
    pub fn handle_event(&mut self, ctx: &mut TabContext<'_>, event: TabEvent) -> SelectionVeto {
        debug!("Tab event: {:?}", event);
        match event {
            TabEvent::Closed { index } => self.close_tab(ctx, index),
            TabEvent::SelectionChanging => {
                self.save_current_tab();
            }
            TabEvent::SelectionChanged { index } => self.on_selection_changed(ctx, index),
        }
        SelectionVeto::Proceed
    }

    /// Run a command. Returns the id of a newly opened tab.
    ///
    /// Indices coming from outside are validated here; the coordinator
    /// operations below assume valid input.
    pub fn execute(&mut self, ctx: &mut TabContext<'_>, command: TabCommand) -> Result<Option<TabId>> {
        debug!("Tab command: {:?}", command);
        match command {
            TabCommand::Open(path) => return Ok(Some(self.create_tab(ctx, path))),
            TabCommand::Select(index) => {
                let index = self.check_index(index)?;
                self.select_tab(ctx, index);
            }
            TabCommand::Next => self.cycle_tab(ctx, false),
            TabCommand::Previous => self.cycle_tab(ctx, true),
            TabCommand::CloseCurrent => self.close_current_tab(ctx),
            TabCommand::Close(index) => {
                let index = self.check_index(index)?;
                self.close_tab(ctx, index);
            }
            TabCommand::CloseWindow => self.close_window(ctx),
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::tabs::test_support::{single_mode, RecordingHost};
    use egui::Rect;

    #[test]
    fn test_parse_commands() {
        assert_eq!("open".parse::<TabCommand>(), Ok(TabCommand::Open(None)));
        assert_eq!(
            "open /tmp/My File.pdf".parse::<TabCommand>(),
            Ok(TabCommand::Open(Some(PathBuf::from("/tmp/My File.pdf"))))
        );
        assert_eq!("select 2".parse::<TabCommand>(), Ok(TabCommand::Select(2)));
        assert_eq!("  NEXT ".parse::<TabCommand>(), Ok(TabCommand::Next));
        assert_eq!("prev".parse::<TabCommand>(), Ok(TabCommand::Previous));
        assert_eq!("previous".parse::<TabCommand>(), Ok(TabCommand::Previous));
        assert_eq!("close".parse::<TabCommand>(), Ok(TabCommand::CloseCurrent));
        assert_eq!("close 0".parse::<TabCommand>(), Ok(TabCommand::Close(0)));
        assert_eq!("quit".parse::<TabCommand>(), Ok(TabCommand::CloseWindow));
    }

    #[test]
    fn test_parse_errors() {
        assert!("select".parse::<TabCommand>().is_err());
        assert!("select two".parse::<TabCommand>().is_err());
        assert!("close -1".parse::<TabCommand>().is_err());
        assert!("".parse::<TabCommand>().is_err());
        let err = "zoom 2".parse::<TabCommand>().unwrap_err();
        assert!(err.contains("zoom"));
    }

    #[test]
    fn test_execute_rejects_bad_index() {
        let settings = single_mode();
        let mut host = RecordingHost::default();
        let mut ctx = TabContext::new(&settings, &mut host);
        let mut window = WindowTabs::new(&settings, Rect::ZERO);

        let result = window.execute(&mut ctx, TabCommand::Select(0));
        assert!(matches!(result, Err(Error::InvalidTabIndex { index: 0, count: 0 })));

        window.execute(&mut ctx, TabCommand::Open(None)).unwrap();
        let result = window.execute(&mut ctx, TabCommand::Close(4));
        assert!(matches!(result, Err(Error::InvalidTabIndex { index: 4, count: 1 })));
        assert_eq!(window.tab_count(), 1);
    }

    #[test]
    fn test_execute_sequence() {
        let settings = single_mode();
        let mut host = RecordingHost::default();
        let mut ctx = TabContext::new(&settings, &mut host);
        let mut window = WindowTabs::new(&settings, Rect::ZERO);

        let a = window
            .execute(&mut ctx, TabCommand::Open(Some(PathBuf::from("/a.pdf"))))
            .unwrap();
        let b = window
            .execute(&mut ctx, TabCommand::Open(Some(PathBuf::from("/b.pdf"))))
            .unwrap();
        assert!(a.is_some() && b.is_some());

        window.execute(&mut ctx, TabCommand::Next).unwrap();
        assert_eq!(window.current_tab().map(|t| t.id()), a);
        window.execute(&mut ctx, TabCommand::Previous).unwrap();
        assert_eq!(window.current_tab().map(|t| t.id()), b);

        window.execute(&mut ctx, TabCommand::CloseCurrent).unwrap();
        assert_eq!(window.current_tab().map(|t| t.id()), a);

        window.execute(&mut ctx, TabCommand::CloseWindow).unwrap();
        assert_eq!(window.tab_count(), 0);
    }

    #[test]
    fn test_strip_events() {
        let settings = single_mode();
        let mut host = RecordingHost::default();
        let mut ctx = TabContext::new(&settings, &mut host);
        let mut window = WindowTabs::new(&settings, Rect::ZERO);
        let a = window.create_tab(&mut ctx, Some(PathBuf::from("/a.pdf")));
        let b = window.create_tab(&mut ctx, Some(PathBuf::from("/b.pdf")));

        let veto = window.handle_event(&mut ctx, TabEvent::SelectionChanging);
        assert_eq!(veto, SelectionVeto::Proceed);
        window.handle_event(&mut ctx, TabEvent::SelectionChanged { index: 0 });
        assert_eq!(window.current_tab().map(|t| t.id()), Some(a));
        assert!(window.history().contains(b));

        window.handle_event(&mut ctx, TabEvent::Closed { index: 1 });
        assert_eq!(window.tab_count(), 1);
        assert_eq!(window.current_tab().map(|t| t.id()), Some(a));
        assert!(!window.history().contains(b));
    }
}
