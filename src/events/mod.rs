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

//! Application event distribution.
//!
//! This module bridges user input and the UI rendering pipeline:
//!
//! 1. **Capture**: Events arrive as [`AppEvent`]s over an `mpsc` channel,
//!    fed by the input thread.
//! 2. **Process**: Key events are mapped to keypad buttons and pressed on the
//!    calculator engine.
//! 3. **Render**: After each event is processed, the UI is re-drawn.

mod key_handlers;

use anyhow::Result;
use crossterm::event::KeyEvent;
use log::info;

use crate::{App, render::draw, util::term::Tui};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Resize,
    ExitApplication,
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
pub(crate) fn process_events(terminal: &mut Tui, app: &mut App) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        match event {
            AppEvent::ExitApplication => {
                info!("Exit requested");
                break;
            }
            AppEvent::Key(key) => key_handlers::process_key_event(app, key)?,
            AppEvent::Resize => {}
        }

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}
