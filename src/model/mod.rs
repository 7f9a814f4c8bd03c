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

//! Calculator domain types.
//!
//! This module defines the closed set of keypad buttons, the binary
//! operations they select and the visual role of each button. The engine and
//! the terminal shell both speak in terms of these types; neither of them
//! deals in raw key codes or labels.

pub(crate) mod variant;

pub(crate) use variant::Variant;

/// A keypad button.
///
/// The set is fixed, the calculator variant decides which of these buttons
/// actually appear on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum CalcButton {
    Digit(u8),
    Clear,
    Colon,
    Subtract,
    Add,
    Divide,
    Multiply,
    Equal,
    Hour,
    Mode,
    Now,
}

/// A pending binary operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    #[default]
    None,
}

/// The visual class of a button, used by the shell to pick colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ButtonRole {
    Digit,
    Operator,
    Function,
}

impl CalcButton {
    /// Returns the digit button for `value`, or `None` if it is not a single
    /// decimal digit.
    pub(crate) fn digit(value: u8) -> Option<Self> {
        (value <= 9).then_some(CalcButton::Digit(value))
    }

    /// The text printed on the button face.
    pub(crate) fn label(self) -> &'static str {
        match self {
            CalcButton::Digit(n) => DIGIT_LABELS.get(n as usize).copied().unwrap_or("?"),
            CalcButton::Clear => "AC",
            CalcButton::Colon => ":",
            CalcButton::Subtract => "\u{2013}",
            CalcButton::Add => "+",
            CalcButton::Divide => "\u{00F7}",
            CalcButton::Multiply => "\u{00D7}",
            CalcButton::Equal => "=",
            CalcButton::Hour => "H",
            CalcButton::Mode => "24H",
            CalcButton::Now => "\u{2939}",
        }
    }

    pub(crate) fn role(self) -> ButtonRole {
        match self {
            CalcButton::Add
            | CalcButton::Subtract
            | CalcButton::Multiply
            | CalcButton::Divide
            | CalcButton::Equal => ButtonRole::Operator,
            CalcButton::Clear | CalcButton::Hour | CalcButton::Mode => ButtonRole::Function,
            CalcButton::Digit(_) | CalcButton::Colon | CalcButton::Now => ButtonRole::Digit,
        }
    }

    /// The operation selected by an arithmetic operator button.
    ///
    /// `=` is an operator by role but selects nothing, so it maps to `None`
    /// here along with every non-operator button.
    pub(crate) fn operation(self) -> Option<Operation> {
        match self {
            CalcButton::Add => Some(Operation::Add),
            CalcButton::Subtract => Some(Operation::Subtract),
            CalcButton::Multiply => Some(Operation::Multiply),
            CalcButton::Divide => Some(Operation::Divide),
            _ => None,
        }
    }
}

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

impl Operation {
    /// Applies the operation to `lhs` and `rhs` with checked arithmetic.
    ///
    /// Division truncates toward zero. Returns `None` when the result does not
    /// fit in an `i64` or when dividing by zero; callers tell these apart by
    /// looking at `rhs`.
    pub(crate) fn checked_apply(self, lhs: i64, rhs: i64) -> Option<i64> {
        match self {
            Operation::Add => lhs.checked_add(rhs),
            Operation::Subtract => lhs.checked_sub(rhs),
            Operation::Multiply => lhs.checked_mul(rhs),
            Operation::Divide => lhs.checked_div(rhs),
            Operation::None => Some(rhs),
        }
    }

    /// The value a failed [`Operation::checked_apply`] saturates to.
    pub(crate) fn saturate(self, lhs: i64, rhs: i64) -> i64 {
        let negative = match self {
            Operation::Add => lhs < 0 && rhs < 0,
            Operation::Subtract => lhs < 0 && rhs >= 0,
            Operation::Multiply | Operation::Divide => (lhs < 0) != (rhs < 0),
            Operation::None => rhs < 0,
        };

        if negative { i64::MIN } else { i64::MAX }
    }
}
