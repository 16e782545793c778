//! Tabkeeper - Main Entry Point
//!
//! Replays a script of tab commands against a headless window and logs the
//! tab strip after every step.
//!
//! ```text
//! tabkeeper session.txt
//! RUST_LOG=debug tabkeeper session.txt
//! ```

use log::{error, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::rc::Rc;

use egui::{pos2, Rect};
use tabkeeper::config::load_config;
use tabkeeper::error::{Error, Result};
use tabkeeper::tabs::{
    tab_size, ControllerRef, DocumentController, LoggingHost, TabCommand, TabContext, WindowTabs,
};
use tabkeeper::theme::TabPalette;

/// Application name constant.
const APP_NAME: &str = "tabkeeper";

/// A document known only by its path.
#[derive(Debug)]
struct FileDocument {
    path: PathBuf,
}

impl DocumentController for FileDocument {
    fn file_path(&self) -> &Path {
        &self.path
    }
}

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Some(script) = std::env::args_os().nth(1).map(PathBuf::from) else {
        error!("Usage: {} <script>", APP_NAME);
        return ExitCode::FAILURE;
    };

    match run(&script) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(script: &Path) -> Result<()> {
    info!("Starting {}", APP_NAME);

    let settings = load_config();
    let size = tab_size(&settings, 1.0);
    info!(
        "Tab configuration: tabs {}, width {}x{}, in title bar: {}",
        if settings.use_tabs { "on" } else { "off" },
        size.x,
        size.y,
        settings.tabs_in_titlebar
    );

    let source = fs::read_to_string(script).map_err(|e| {
        Error::Application(format!("Failed to read script '{}': {}", script.display(), e))
    })?;

    let mut host = LoggingHost;
    let mut ctx = TabContext::new(&settings, &mut host);
    let mut window = WindowTabs::new(&settings, Rect::from_min_max(pos2(0.0, 0.0), pos2(1280.0, 800.0)));
    // No platform dark-mode probe when headless: `System` resolves to light.
    window.update_tabs_colors(&TabPalette::for_theme(settings.theme, false));

    for (number, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let command = match line.parse::<TabCommand>() {
            Ok(command) => command,
            Err(message) => {
                warn!(
                    "line {}: {}",
                    number + 1,
                    Error::InvalidCommand {
                        line: line.to_string(),
                        message,
                    }
                );
                continue;
            }
        };

        let path = match &command {
            TabCommand::Open(path) => path.clone(),
            _ => None,
        };
        match window.execute(&mut ctx, command) {
            Ok(Some(id)) => {
                if let Some(path) = path {
                    let document: ControllerRef = Rc::new(FileDocument { path });
                    window.attach_controller(&mut ctx, id, Some(document));
                }
            }
            Ok(None) => {}
            Err(e) => {
                warn!("line {}: {}", number + 1, e);
                continue;
            }
        }

        log_strip(&window);
    }

    window.close_window(&mut ctx);
    info!("Replay finished");
    Ok(())
}

fn log_strip(window: &WindowTabs) {
    let titles: Vec<String> = window
        .strip()
        .iter()
        .enumerate()
        .map(|(index, record)| {
            if window.strip().selected() == Some(index) {
                format!("[{}]", record.text)
            } else {
                record.text.clone()
            }
        })
        .collect();
    info!(
        "{:?} tabs: {} | history: {:?}",
        window.state(),
        titles.join(" "),
        window
            .history()
            .entries()
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
    );
}
