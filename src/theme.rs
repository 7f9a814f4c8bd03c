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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the calculator palette: one face colour per button
//! role, and the inverted colours used for a highlighted button.

use ratatui::style::Color;

use crate::model::ButtonRole;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) display_fg: Color,
    pub(crate) status_fg: Color,
    pub(crate) error_fg: Color,

    pub(crate) operator_bg: Color,
    pub(crate) function_bg: Color,
    pub(crate) digit_bg: Color,

    pub(crate) button_fg: Color,
    pub(crate) function_fg: Color,

    pub(crate) highlight_bg: Color,
    pub(crate) highlight_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(0, 0, 0),
            display_fg: Color::Rgb(255, 255, 255),
            status_fg: Color::Rgb(162, 161, 166),
            error_fg: Color::Rgb(255, 99, 71),

            operator_bg: Color::Rgb(255, 149, 0),
            function_bg: Color::Rgb(170, 170, 170),
            digit_bg: Color::Rgb(55, 55, 55),

            button_fg: Color::Rgb(255, 255, 255),
            function_fg: Color::Rgb(255, 255, 255),

            highlight_bg: Color::Rgb(255, 255, 255),
            highlight_fg: Color::Rgb(255, 149, 0),
        }
    }

    /// The `(foreground, background)` pair for a button face.
    pub(crate) fn button_colours(&self, role: ButtonRole, highlighted: bool) -> (Color, Color) {
        if highlighted {
            return (self.highlight_fg, self.highlight_bg);
        }

        match role {
            ButtonRole::Operator => (self.button_fg, self.operator_bg),
            ButtonRole::Function => (self.function_fg, self.function_bg),
            ButtonRole::Digit => (self.button_fg, self.digit_bg),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string, for setting the terminal emulator's background.
    ///
    /// Non-RGB colours have no fixed value and yield `None`.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}
