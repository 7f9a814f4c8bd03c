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

use thiserror::Error;

/// A calculation that could not produce an exact result.
///
/// These never escape [`super::TimeCalcEngine::press`]; the engine records
/// the most recent one so the shell can report it.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub(crate) enum CalcError {
    #[error("cannot divide by zero")]
    DivideByZero,

    #[error("value out of range")]
    Overflow,
}
