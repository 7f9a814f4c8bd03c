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

//! Keyboard input routing.
//!
//! Keys are either application control (quit) or stand in for a keypad
//! button, in which case the button is pressed on the engine.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;

use crate::{App, events::AppEvent, model::CalcButton};

/// Maps a key to the keypad button it stands for.
///
/// Several keys can map to the same button, for example both `=` and Enter
/// evaluate.
pub(crate) fn key_to_button(key: KeyEvent) -> Option<CalcButton> {
    match key.code {
        KeyCode::Char(c @ '0'..='9') => CalcButton::digit(c as u8 - b'0'),
        KeyCode::Char(':') => Some(CalcButton::Colon),
        KeyCode::Char('h') | KeyCode::Char('H') => Some(CalcButton::Hour),
        KeyCode::Char('n') => Some(CalcButton::Now),
        KeyCode::Char('m') => Some(CalcButton::Mode),
        KeyCode::Char('+') => Some(CalcButton::Add),
        KeyCode::Char('-') => Some(CalcButton::Subtract),
        KeyCode::Char('*') | KeyCode::Char('x') => Some(CalcButton::Multiply),
        KeyCode::Char('/') => Some(CalcButton::Divide),
        KeyCode::Char('=') | KeyCode::Enter => Some(CalcButton::Equal),
        KeyCode::Char('c') | KeyCode::Esc | KeyCode::Backspace | KeyCode::Delete => {
            Some(CalcButton::Clear)
        }
        _ => None,
    }
}

/// Handles a single key event.
///
/// # Errors
///
/// Returns an error if the exit event cannot be sent to the event loop.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Some platforms report releases and repeats as well
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) => app.event_tx.send(AppEvent::ExitApplication)?,
        (KeyCode::Char('c'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?
        }

        _ => {
            if let Some(button) = key_to_button(key) {
                app.engine.press(button);
                debug!("Key {:?} -> {}, accumulator {}", key.code, button.label(), app.engine.accumulator());
            }
        }
    }

    Ok(())
}
