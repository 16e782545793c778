//! Tabkeeper - tab lifecycle and most-recently-used selection for
//! multi-document windows.
//!
//! A [`tabs::WindowTabs`] owns one window's tab strip, selection history and
//! the window's mirror of the current tab, and keeps the three consistent
//! across opening, switching, cycling and closing tabs.

pub mod config;
pub mod error;
pub mod tabs;
pub mod theme;
