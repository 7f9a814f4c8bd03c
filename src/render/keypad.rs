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

//! Render the keypad.
//!
//! Each row of the variant's layout is split into columns by weight, the `0`
//! button taking two columns. Button colours come from the button role and
//! the engine's highlight state.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Paragraph},
};

use crate::{engine::TimeCalcEngine, model::CalcButton, theme::Theme};

const BUTTON_GAP: u16 = 1;

pub(crate) fn draw_keypad(f: &mut Frame, area: Rect, engine: &TimeCalcEngine, theme: &Theme) {
    let rows = engine.variant().layout();
    if rows.is_empty() {
        return;
    }

    let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows.len() as u32); rows.len()])
        .spacing(BUTTON_GAP)
        .split(area);

    for (row, row_area) in rows.iter().zip(row_areas.iter()) {
        let total: u32 = row.iter().map(|b| column_span(*b)).sum();
        let constraints: Vec<Constraint> = row
            .iter()
            .map(|b| Constraint::Ratio(column_span(*b), total))
            .collect();

        let button_areas = Layout::horizontal(constraints)
            .spacing(BUTTON_GAP)
            .split(*row_area);

        for (button, button_area) in row.iter().zip(button_areas.iter()) {
            draw_button(f, *button_area, *button, engine, theme);
        }
    }
}

fn draw_button(f: &mut Frame, area: Rect, button: CalcButton, engine: &TimeCalcEngine, theme: &Theme) {
    let (fg, bg) = theme.button_colours(button.role(), engine.is_highlighted(button));

    f.render_widget(Block::default().style(Style::default().bg(bg)), area);

    if area.height == 0 {
        return;
    }

    let label_area = Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..area
    };

    let label = Paragraph::new(button.label())
        .alignment(Alignment::Center)
        .style(Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD));

    f.render_widget(label, label_area);
}

fn column_span(button: CalcButton) -> u32 {
    match button {
        CalcButton::Digit(0) => 2,
        _ => 1,
    }
}
