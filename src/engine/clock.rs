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

//! Wall-clock access for the "now" button.

use chrono::{Local, Timelike};

pub(crate) trait Clock {
    /// Minutes since local midnight.
    fn minutes_since_midnight(&self) -> i64;
}

/// Reads the local time of the host.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct SystemClock;

impl Clock for SystemClock {
    fn minutes_since_midnight(&self) -> i64 {
        let now = Local::now();
        i64::from(now.hour()) * 60 + i64::from(now.minute())
    }
}

#[cfg(test)]
pub(crate) struct FixedClock(pub(crate) i64);

#[cfg(test)]
impl Clock for FixedClock {
    fn minutes_since_midnight(&self) -> i64 {
        self.0
    }
}
