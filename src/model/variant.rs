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

//! Calculator variants.
//!
//! The calculator went through four iterations, each with a slightly
//! different button set and display. A [`Variant`] names one of them and
//! answers what it supports; the keypad layout is the single source of truth
//! for which buttons exist.

use serde::{Deserialize, Serialize};

use crate::model::CalcButton::{self, *};

const BASIC_LAYOUT: &[&[CalcButton]] = &[
    &[Clear, Hour, Divide],
    &[Digit(7), Digit(8), Digit(9), Multiply],
    &[Digit(4), Digit(5), Digit(6), Subtract],
    &[Digit(1), Digit(2), Digit(3), Add],
    &[Digit(0), Equal],
];

const HOURS_LAYOUT: &[&[CalcButton]] = &[
    &[Clear, Hour, Divide],
    &[Digit(7), Digit(8), Digit(9), Multiply],
    &[Digit(4), Digit(5), Digit(6), Subtract],
    &[Digit(1), Digit(2), Digit(3), Add],
    &[Digit(0), Colon, Equal],
];

const TWENTY_FOUR_LAYOUT: &[&[CalcButton]] = &[
    &[Clear, Hour, Mode, Divide],
    &[Digit(7), Digit(8), Digit(9), Multiply],
    &[Digit(4), Digit(5), Digit(6), Subtract],
    &[Digit(1), Digit(2), Digit(3), Add],
    &[Digit(0), Colon, Equal],
];

const LIVE_LAYOUT: &[&[CalcButton]] = &[
    &[Clear, Hour, Divide],
    &[Digit(7), Digit(8), Digit(9), Multiply],
    &[Digit(4), Digit(5), Digit(6), Subtract],
    &[Digit(1), Digit(2), Digit(3), Add],
    &[Digit(0), Now, Equal],
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum Variant {
    /// Raw minute arithmetic with an hour button.
    Basic,
    /// Adds colon entry for typing `hours:minutes`.
    Hours,
    /// Adds `HH:MM` display with a 24-hour wrap toggle.
    #[default]
    TwentyFour,
    /// `HH:MM` display with a button that reads the wall clock.
    Live,
}

impl Variant {
    /// Rows of keypad buttons, top to bottom.
    pub(crate) fn layout(self) -> &'static [&'static [CalcButton]] {
        match self {
            Variant::Basic => BASIC_LAYOUT,
            Variant::Hours => HOURS_LAYOUT,
            Variant::TwentyFour => TWENTY_FOUR_LAYOUT,
            Variant::Live => LIVE_LAYOUT,
        }
    }

    pub(crate) fn has_button(self, button: CalcButton) -> bool {
        self.layout().iter().any(|row| row.contains(&button))
    }

    /// Whether the display renders the accumulator as `HH:MM`.
    pub(crate) fn formats_time(self) -> bool {
        matches!(self, Variant::TwentyFour | Variant::Live)
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Variant::Basic => "basic",
            Variant::Hours => "hours",
            Variant::TwentyFour => "twenty-four",
            Variant::Live => "live",
        }
    }
}
