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

//! Render the calculator display and the status bar.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{App, model::Variant};

pub(crate) fn draw_display(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(app.theme.status_fg))
        .padding(Padding::horizontal(1))
        .title(Line::from(display_title(app)).left_aligned())
        .title(Line::from(pending_operation(app)).right_aligned())
        .title_style(Style::default().fg(app.theme.status_fg));

    let text = Paragraph::new(app.engine.display_text())
        .alignment(Alignment::Right)
        .style(
            Style::default()
                .fg(app.theme.display_fg)
                .add_modifier(Modifier::BOLD),
        )
        .block(block);

    f.render_widget(text, area);
}

/// Renders the last calculation error, or a key reminder when there is none.
pub(crate) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let status = match app.engine.last_error() {
        Some(error) => Paragraph::new(error.to_string()).style(Style::default().fg(app.theme.error_fg)),
        None => Paragraph::new(key_help(app.engine.variant())).style(Style::default().fg(app.theme.status_fg)),
    };

    f.render_widget(status, area);
}

fn display_title(app: &App) -> String {
    let variant = app.engine.variant();
    if !variant.formats_time() {
        return variant.name().to_string();
    }

    let mode = if app.engine.is_mode_active() { "24h" } else { "elapsed" };
    format!("{} / {}", variant.name(), mode)
}

// The left operand and operator while waiting for the right operand.
fn pending_operation(app: &App) -> String {
    match app.engine.active_button() {
        Some(button) if button.operation().is_some() => {
            format!("{} {}", app.engine.running_number(), button.label())
        }
        _ => String::new(),
    }
}

fn key_help(variant: Variant) -> &'static str {
    match variant {
        Variant::Basic => "h hour  c clear  q quit",
        Variant::Hours => ": colon  h hour  c clear  q quit",
        Variant::TwentyFour => ": colon  h hour  m 24H  c clear  q quit",
        Variant::Live => "n now  h hour  c clear  q quit",
    }
}
