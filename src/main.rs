// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Time Calculator TUI.
//!
//! A terminal keypad calculator for adding, subtracting and scaling times of
//! day and durations in hours and minutes.
//!
//! The calculator logic lives in [`engine::TimeCalcEngine`]; everything else
//! is the terminal shell around it:
//!
//! * The **Main Thread** manages the terminal lifecycle, forwards keypad
//!   presses to the engine and renders its display.
//! * An **Input Thread** captures terminal events and forwards them to the
//!   main thread as [`AppEvent`]s over a `std::sync::mpsc` channel.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is restored even when the event loop fails.

mod config;
mod engine;
mod events;
mod model;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use log::{info, warn};
use std::{
    sync::mpsc::{self, Receiver, Sender},
    thread,
};

use crate::{
    config::AppConfig,
    engine::TimeCalcEngine,
    events::{AppEvent, process_events},
    theme::Theme,
    util::term::{self, Tui},
};

/// Application state.
struct App {
    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub engine: TimeCalcEngine,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig) -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        let engine = TimeCalcEngine::new(config.variant, config.start_in_24h);

        Self {
            theme: Theme::default(),
            event_tx,
            event_rx,
            engine,
        }
    }
}

/// The entry point of the application.
///
/// Loads the configuration, starts logging, manages the terminal lifecycle,
/// and returns an error if any part of the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    // Logging is optional, the calculator works without a writable config
    // directory
    if let Some(dir) = config::config_dir() {
        if let Err(e) = util::logging::init_logging(dir) {
            eprintln!("Logging disabled: {e:#}");
        }
    }

    info!(
        "Starting {} calculator (version {} config)",
        config.variant.name(),
        config.version
    );

    let mut app = App::new(config);

    let mut terminal = term::setup_terminal(&app.theme)?;
    let res = run(&mut terminal, &mut app);
    term::restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Starts the input thread and enters the main event loop.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Tui, app: &mut App) -> Result<()> {
    // Translate raw terminal events to application events. The thread stops
    // once the main loop drops the receiver.
    let tx_events = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let app_event = match event::read() {
                Ok(Event::Key(key)) => AppEvent::Key(key),
                Ok(Event::Resize(_, _)) => AppEvent::Resize,
                Ok(_) => continue,
                Err(e) => {
                    warn!("Failed to read terminal event: {e}");
                    tx_events.send(AppEvent::ExitApplication).ok();
                    break;
                }
            };

            if tx_events.send(app_event).is_err() {
                break;
            }
        }
    });

    process_events(terminal, app)
}
