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

//! Time display formatting.
//!
//! The calculator stores every value as a signed count of minutes. These
//! functions render such a count as `HH:MM`, either as a time of day on a
//! 24-hour dial or as a signed elapsed duration.

/// Formats a count of minutes as a time of day on a 24-hour dial.
///
/// Values outside a single day wrap around, and negative values count back
/// from midnight, so 1500 minutes is `01:00` and -65 is `22:55`.
pub(crate) fn format_clock(total_minutes: i64) -> String {
    let mut hours = (total_minutes / 60).rem_euclid(24);
    let mut minutes = total_minutes % 60;

    if minutes < 0 {
        minutes += 60;
        hours -= 1;
    }

    if hours < 0 {
        hours += 24;
    }

    format!("{:02}:{:02}", hours, minutes)
}

/// Formats a count of minutes as a signed duration.
///
/// Hours are not wrapped, so long durations print more than two hour digits.
/// A negative count such as -65 prints as `-01:05`.
pub(crate) fn format_elapsed(total_minutes: i64) -> String {
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    let sign = if hours < 0 || minutes < 0 { "-" } else { "" };

    format!("{}{:02}:{:02}", sign, hours.unsigned_abs(), minutes.unsigned_abs())
}
