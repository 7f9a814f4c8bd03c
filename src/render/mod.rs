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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. The calculator is drawn as a
//! centred column: the display on top, the keypad below it and a one-line
//! status bar at the bottom.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event.

mod display;
mod keypad;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::Style,
    widgets::Block,
};

use crate::{
    App,
    render::{display::draw_display, display::draw_status, keypad::draw_keypad},
};

const MAX_WIDTH: u16 = 44;

/// Renders the user interface to the terminal frame.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - The application state; rendering only reads it.
pub(crate) fn draw(f: &mut Frame, app: &App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    let column = centred_column(area);

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(column);

    draw_display(f, outer[0], app);
    draw_keypad(f, outer[1], &app.engine, &app.theme);
    draw_status(f, outer[2], app);
}

fn centred_column(area: Rect) -> Rect {
    let [column] = Layout::horizontal([Constraint::Max(MAX_WIDTH)])
        .flex(Flex::Center)
        .areas(area);
    column
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    use super::*;
    use crate::{
        config::AppConfig,
        model::{CalcButton, Variant},
    };

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(44, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buffer: &Buffer) -> String {
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn draws_display_and_keypad() {
        let mut app = App::new(AppConfig::default());
        app.engine.press(CalcButton::Digit(9));
        app.engine.press(CalcButton::Digit(0));

        let screen = render(&app);
        assert!(screen.contains("01:30"), "{screen}");
        assert!(screen.contains("AC"));
        assert!(screen.contains("24H"));
        assert!(screen.contains("\u{00F7}"));
    }

    #[test]
    fn raw_variant_draws_the_integer() {
        let config = AppConfig {
            variant: Variant::Basic,
            ..AppConfig::default()
        };
        let mut app = App::new(config);
        for n in [1, 2, 5] {
            app.engine.press(CalcButton::Digit(n));
        }

        let screen = render(&app);
        assert!(screen.contains("125"), "{screen}");
        assert!(!screen.contains("24H"));
    }

    #[test]
    fn status_bar_shows_calculation_errors() {
        let config = AppConfig {
            variant: Variant::Basic,
            ..AppConfig::default()
        };
        let mut app = App::new(config);
        for button in [CalcButton::Digit(5), CalcButton::Divide, CalcButton::Equal] {
            app.engine.press(button);
        }

        let screen = render(&app);
        assert!(screen.contains("Error"), "{screen}");
        assert!(screen.contains("cannot divide by zero"), "{screen}");
    }

    #[test]
    fn pending_operator_is_shown_in_the_display_title() {
        let config = AppConfig {
            variant: Variant::Basic,
            ..AppConfig::default()
        };
        let mut app = App::new(config);
        for button in [CalcButton::Digit(1), CalcButton::Digit(2), CalcButton::Multiply] {
            app.engine.press(button);
        }

        let screen = render(&app);
        assert!(screen.contains("12 \u{00D7}"), "{screen}");
    }

    #[test]
    fn survives_a_tiny_terminal() {
        let app = App::new(AppConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(3, 2)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();
    }
}
