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

//! Time calculator state machine.
//!
//! [`TimeCalcEngine`] interprets keypad presses and maintains the value being
//! typed, the pending operation and its left operand. Every value is a signed
//! count of minutes once an hour or colon step has promoted it; the engine
//! itself does not care and simply does integer arithmetic.
//!
//! # Entry modes
//!
//! * **Idle**: digits append to the accumulator.
//! * **Operator pending**: an operator captured the left operand and the
//!   accumulator restarted from zero.
//! * **Colon entry**: after `:`, digits append to the minutes field only,
//!   keeping the whole hours intact.
//!
//! The modes are not stored separately, they follow from the active button.
//!
//! # Errors
//!
//! All arithmetic is checked. Overflow saturates and division by zero leaves
//! the value alone; either way the press completes and the error is kept in
//! [`TimeCalcEngine::last_error`] until the next press.

mod clock;
mod error;

pub(crate) use clock::{Clock, SystemClock};
pub(crate) use error::CalcError;

use log::{debug, warn};

use crate::{
    model::{CalcButton, Operation, Variant},
    util::format::{format_clock, format_elapsed},
};

const ERROR_MARKER: &str = "Error";

pub(crate) struct TimeCalcEngine {
    variant: Variant,
    clock: Box<dyn Clock>,

    value: i64,
    display: i64,
    running_number: i64,
    operation: Operation,
    active_button: Option<CalcButton>,
    mode_active: bool,
    last_error: Option<CalcError>,
}

impl TimeCalcEngine {
    /// Creates an engine for `variant` that reads the host's local time.
    ///
    /// # Arguments
    ///
    /// * `variant` - Which button set and display the engine supports.
    /// * `mode_active` - Whether `HH:MM` displays start on the 24-hour dial
    ///   rather than as a signed duration.
    pub(crate) fn new(variant: Variant, mode_active: bool) -> Self {
        Self::with_clock(variant, mode_active, Box::new(SystemClock))
    }

    pub(crate) fn with_clock(variant: Variant, mode_active: bool, clock: Box<dyn Clock>) -> Self {
        Self {
            variant,
            clock,
            value: 0,
            display: 0,
            running_number: 0,
            operation: Operation::None,
            active_button: None,
            mode_active,
            last_error: None,
        }
    }

    /// Applies a single button press.
    ///
    /// Buttons the variant does not have are ignored.
    pub(crate) fn press(&mut self, button: CalcButton) {
        if !self.variant.has_button(button) {
            debug!("Ignoring {:?}, not part of the {} keypad", button, self.variant.name());
            return;
        }

        self.last_error = None;

        match button {
            CalcButton::Digit(n) => {
                self.value = if self.active_button == Some(CalcButton::Colon) {
                    self.append_minute_digit(n)
                } else {
                    self.append_digit(self.value, n)
                };
                self.display = self.value;
            }

            CalcButton::Colon => {
                self.active_button = Some(CalcButton::Colon);
                self.value = self.hours_to_minutes(self.value);
                self.display = self.value;
            }

            CalcButton::Hour => {
                self.value = self.hours_to_minutes(self.value);
                self.display = self.value;
            }

            CalcButton::Now => {
                self.value = self.clock.minutes_since_midnight();
                self.display = self.value;
            }

            CalcButton::Add | CalcButton::Subtract | CalcButton::Multiply | CalcButton::Divide => {
                self.operation = button.operation().unwrap_or_default();
                self.running_number = self.value;
                self.display = self.value;
                self.active_button = Some(button);
                self.value = 0;
            }

            CalcButton::Equal => self.evaluate(),

            CalcButton::Clear => {
                self.value = 0;
                self.display = 0;
                self.running_number = 0;
                self.operation = Operation::None;
                self.active_button = None;
            }

            CalcButton::Mode => self.mode_active = !self.mode_active,
        }

        if let Some(error) = self.last_error {
            warn!("{:?} failed: {}", button, error);
        }

        debug!(
            "Pressed {:?}: value={} running={} operation={:?}",
            button, self.value, self.running_number, self.operation
        );
    }

    /// The text the display shows.
    pub(crate) fn display_text(&self) -> String {
        if self.last_error == Some(CalcError::DivideByZero) {
            return ERROR_MARKER.to_string();
        }

        if !self.variant.formats_time() {
            self.display.to_string()
        } else if self.mode_active {
            format_clock(self.display)
        } else {
            format_elapsed(self.display)
        }
    }

    pub(crate) fn is_highlighted(&self, button: CalcButton) -> bool {
        self.active_button == Some(button) || (button == CalcButton::Mode && self.mode_active)
    }

    pub(crate) fn is_mode_active(&self) -> bool {
        self.mode_active
    }

    pub(crate) fn variant(&self) -> Variant {
        self.variant
    }

    /// The value being typed, as a decimal string.
    pub(crate) fn accumulator(&self) -> String {
        self.value.to_string()
    }

    /// The unformatted display value, as a decimal string.
    #[cfg(test)]
    pub(crate) fn display_value(&self) -> String {
        self.display.to_string()
    }

    pub(crate) fn running_number(&self) -> i64 {
        self.running_number
    }

    #[cfg(test)]
    pub(crate) fn current_operation(&self) -> Operation {
        self.operation
    }

    pub(crate) fn active_button(&self) -> Option<CalcButton> {
        self.active_button
    }

    pub(crate) fn last_error(&self) -> Option<CalcError> {
        self.last_error
    }

    // The operation stays selected after evaluating, so pressing `=` again
    // repeats it against the new result.
    fn evaluate(&mut self) {
        self.active_button = None;

        let lhs = self.running_number;
        let rhs = self.value;

        if self.operation == Operation::Divide && rhs == 0 {
            self.last_error = Some(CalcError::DivideByZero);
            return;
        }

        self.value = match self.operation.checked_apply(lhs, rhs) {
            Some(result) => result,
            None => self.overflowed(self.operation.saturate(lhs, rhs)),
        };
        self.display = self.value;
    }

    // Appending to a negative value extends it away from zero, the same as
    // appending to its decimal string would.
    fn append_digit(&mut self, value: i64, n: u8) -> i64 {
        let digit = i64::from(n);
        let shifted = value.checked_mul(10).and_then(|v| {
            if value < 0 {
                v.checked_sub(digit)
            } else {
                v.checked_add(digit)
            }
        });

        match shifted {
            Some(v) => v,
            None => self.overflowed(if value < 0 { i64::MIN } else { i64::MAX }),
        }
    }

    fn append_minute_digit(&mut self, n: u8) -> i64 {
        let hours = self.value / 60;
        let minutes = self.append_digit(self.value % 60, n);

        match hours.checked_mul(60).and_then(|h| h.checked_add(minutes)) {
            Some(v) => v,
            None => self.overflowed(if self.value < 0 { i64::MIN } else { i64::MAX }),
        }
    }

    fn hours_to_minutes(&mut self, hours: i64) -> i64 {
        match hours.checked_mul(60) {
            Some(v) => v,
            None => self.overflowed(if hours < 0 { i64::MIN } else { i64::MAX }),
        }
    }

    fn overflowed(&mut self, saturated: i64) -> i64 {
        self.last_error = Some(CalcError::Overflow);
        saturated
    }
}

#[cfg(test)]
mod tests {
    use super::{clock::FixedClock, *};

    use crate::model::CalcButton::*;

    fn engine(variant: Variant) -> TimeCalcEngine {
        TimeCalcEngine::with_clock(variant, true, Box::new(FixedClock(8 * 60 + 15)))
    }

    fn press_all(engine: &mut TimeCalcEngine, buttons: &[CalcButton]) {
        for button in buttons {
            engine.press(*button);
        }
    }

    #[test]
    fn digits_concatenate_with_leading_zero_collapsed() {
        let mut e = engine(Variant::Basic);
        press_all(&mut e, &[Digit(0), Digit(5), Digit(3)]);
        assert_eq!(e.accumulator(), "53");
        assert_eq!(e.display_text(), "53");

        let mut e = engine(Variant::Basic);
        press_all(&mut e, &[Digit(0), Digit(0), Digit(7)]);
        assert_eq!(e.accumulator(), "7");
    }

    #[test]
    fn clear_resets_from_any_state() {
        let sequences: [&[CalcButton]; 4] = [
            &[Digit(4), Digit(2)],
            &[Digit(4), Add],
            &[Digit(2), Colon, Digit(3)],
            &[Digit(5), Divide, Digit(0), Equal],
        ];

        for sequence in sequences {
            let mut e = engine(Variant::TwentyFour);
            press_all(&mut e, sequence);
            e.press(Clear);

            assert_eq!(e.accumulator(), "0");
            assert_eq!(e.display_value(), "0");
            assert_eq!(e.active_button(), None);
            assert_eq!(e.current_operation(), Operation::None);
            assert_eq!(e.last_error(), None);
        }
    }

    #[test]
    fn operator_then_equal_uses_zero_operand() {
        let cases = [(Add, "9"), (Subtract, "9"), (Multiply, "0")];

        for (op, expected) in cases {
            let mut e = engine(Variant::Basic);
            press_all(&mut e, &[Digit(9), op, Equal]);
            assert_eq!(e.accumulator(), expected, "{op:?}");
        }
    }

    #[test]
    fn hour_then_colon_multiplies_by_sixty_each_time() {
        let mut e = engine(Variant::TwentyFour);
        press_all(&mut e, &[Digit(2), Hour]);
        assert_eq!(e.accumulator(), "120");

        e.press(Colon);
        assert_eq!(e.accumulator(), "7200");
    }

    #[test]
    fn hour_does_not_change_the_active_button() {
        let mut e = engine(Variant::Basic);
        press_all(&mut e, &[Digit(5), Add, Digit(2), Hour]);
        assert_eq!(e.active_button(), Some(Add));
        assert_eq!(e.accumulator(), "120");
    }

    #[test]
    fn colon_entry_edits_only_the_minutes() {
        let mut e = engine(Variant::TwentyFour);
        press_all(&mut e, &[Digit(2), Colon, Digit(3), Digit(0)]);
        assert_eq!(e.accumulator(), "150");
        assert_eq!(e.display_text(), "02:30");
        assert!(e.is_highlighted(Colon));
    }

    #[test]
    fn colon_entry_shows_raw_minutes_without_time_format() {
        let mut e = engine(Variant::Hours);
        press_all(&mut e, &[Digit(2), Colon, Digit(4), Digit(5)]);
        assert_eq!(e.display_text(), "165");
    }

    #[test]
    fn equal_without_operation_keeps_the_value() {
        let mut e = engine(Variant::Basic);
        press_all(&mut e, &[Digit(5), Equal]);
        assert_eq!(e.accumulator(), "5");
        assert_eq!(e.last_error(), None);
    }

    #[test]
    fn operator_ends_colon_entry() {
        let mut e = engine(Variant::TwentyFour);
        press_all(&mut e, &[Digit(1), Colon, Digit(3), Digit(0), Add, Digit(4), Digit(5), Equal]);
        assert_eq!(e.accumulator(), "135");
        assert_eq!(e.display_text(), "02:15");
    }

    #[test]
    fn addition_resolves_on_equal() {
        let mut e = engine(Variant::Basic);
        press_all(&mut e, &[Digit(7), Add, Digit(3), Equal]);
        assert_eq!(e.accumulator(), "10");
        assert_eq!(e.display_value(), "10");
        assert_eq!(e.active_button(), None);
    }

    #[test]
    fn repeated_equal_reapplies_the_last_operation() {
        let mut e = engine(Variant::Basic);
        press_all(&mut e, &[Digit(7), Add, Digit(3), Equal, Equal]);
        assert_eq!(e.accumulator(), "17");
        assert_eq!(e.current_operation(), Operation::Add);
    }

    #[test]
    fn pending_operator_shows_left_operand() {
        let mut e = engine(Variant::Basic);
        press_all(&mut e, &[Digit(1), Digit(2), Multiply]);
        assert_eq!(e.display_text(), "12");
        assert_eq!(e.accumulator(), "0");
        assert_eq!(e.running_number(), 12);
        assert!(e.is_highlighted(Multiply));
        assert!(!e.is_highlighted(Add));
    }

    #[test]
    fn divide_by_zero_reports_an_error() {
        let mut e = engine(Variant::Basic);
        press_all(&mut e, &[Digit(5), Divide, Digit(0), Equal]);
        assert_eq!(e.last_error(), Some(CalcError::DivideByZero));
        assert_eq!(e.display_text(), "Error");
        assert_eq!(e.accumulator(), "0");
        assert_eq!(e.running_number(), 5);
        assert_eq!(e.active_button(), None);

        e.press(Digit(1));
        assert_eq!(e.last_error(), None);
        assert_eq!(e.display_text(), "1");
    }

    #[test]
    fn division_truncates_toward_zero() {
        let mut e = engine(Variant::Basic);
        press_all(&mut e, &[Digit(7), Divide, Digit(2), Equal]);
        assert_eq!(e.accumulator(), "3");

        let mut e = engine(Variant::Basic);
        press_all(&mut e, &[Subtract, Digit(7), Equal, Divide, Digit(2), Equal]);
        assert_eq!(e.accumulator(), "-3");
    }

    #[test]
    fn digits_extend_a_negative_result() {
        let mut e = engine(Variant::Basic);
        press_all(&mut e, &[Subtract, Digit(5), Equal, Digit(3)]);
        assert_eq!(e.accumulator(), "-53");
    }

    #[test]
    fn digit_overflow_saturates() {
        let mut e = engine(Variant::Basic);
        press_all(&mut e, &[Digit(9); 19]);
        assert_eq!(e.accumulator(), i64::MAX.to_string());
        assert_eq!(e.last_error(), Some(CalcError::Overflow));
    }

    #[test]
    fn product_overflow_saturates() {
        let mut e = engine(Variant::Basic);
        press_all(&mut e, &[Digit(9); 18]);
        press_all(&mut e, &[Multiply, Digit(1), Digit(0), Digit(0), Equal]);
        assert_eq!(e.accumulator(), i64::MAX.to_string());
        assert_eq!(e.last_error(), Some(CalcError::Overflow));

        press_all(&mut e, &[Subtract, Digit(1), Equal]);
        assert_eq!(e.last_error(), None);
        assert_eq!(e.accumulator(), (i64::MAX - 1).to_string());
    }

    #[test]
    fn twenty_four_hour_mode_wraps_the_day() {
        let mut e = engine(Variant::TwentyFour);
        press_all(&mut e, &[Digit(1), Digit(5), Digit(0), Digit(0)]);
        assert_eq!(e.display_text(), "01:00");
    }

    #[test]
    fn mode_toggle_switches_to_signed_durations() {
        let mut e = engine(Variant::TwentyFour);
        press_all(&mut e, &[Subtract, Digit(6), Digit(5), Equal]);
        assert!(e.is_mode_active());
        assert!(e.is_highlighted(Mode));
        assert_eq!(e.display_text(), "22:55");

        e.press(Mode);
        assert!(!e.is_mode_active());
        assert!(!e.is_highlighted(Mode));
        assert_eq!(e.display_text(), "-01:05");
        assert_eq!(e.accumulator(), "-65");
    }

    #[test]
    fn now_reads_the_clock_at_the_tap() {
        let mut e = engine(Variant::Live);
        e.press(Now);
        assert_eq!(e.accumulator(), "495");
        assert_eq!(e.display_text(), "08:15");

        press_all(&mut e, &[Add, Digit(3), Digit(0), Equal]);
        assert_eq!(e.display_text(), "08:45");
    }

    #[test]
    fn buttons_missing_from_the_variant_are_ignored() {
        let mut e = engine(Variant::Basic);
        press_all(&mut e, &[Digit(4), Colon, Now, Mode]);
        assert_eq!(e.accumulator(), "4");
        assert_eq!(e.active_button(), None);
        assert!(e.is_mode_active());
    }

    #[test]
    fn ignored_buttons_keep_the_last_error() {
        let mut e = engine(Variant::Basic);
        press_all(&mut e, &[Digit(5), Divide, Digit(0), Equal, Now, Colon, Mode]);
        assert_eq!(e.last_error(), Some(CalcError::DivideByZero));
        assert_eq!(e.display_text(), "Error");
    }

    #[test]
    fn hour_overflow_saturates_toward_the_sign() {
        let mut e = engine(Variant::Basic);
        press_all(&mut e, &[Digit(9); 18]);
        e.press(Hour);
        assert_eq!(e.accumulator(), i64::MAX.to_string());
        assert_eq!(e.last_error(), Some(CalcError::Overflow));

        let mut e = engine(Variant::Basic);
        e.press(Subtract);
        press_all(&mut e, &[Digit(9); 18]);
        press_all(&mut e, &[Equal, Hour]);
        assert_eq!(e.accumulator(), i64::MIN.to_string());
        assert_eq!(e.last_error(), Some(CalcError::Overflow));
    }

    #[test]
    fn colon_overflow_saturates() {
        let mut e = engine(Variant::TwentyFour);
        press_all(&mut e, &[Digit(9); 17]);
        e.press(Hour);
        assert_eq!(e.last_error(), None);

        e.press(Colon);
        assert_eq!(e.accumulator(), i64::MAX.to_string());
        assert_eq!(e.last_error(), Some(CalcError::Overflow));
    }

    #[test]
    fn minute_digit_overflow_saturates() {
        let mut e = engine(Variant::TwentyFour);
        press_all(&mut e, &[Digit(9); 18]);
        press_all(&mut e, &[Colon, Digit(5)]);
        assert_eq!(e.accumulator(), i64::MAX.to_string());
        assert_eq!(e.last_error(), Some(CalcError::Overflow));
    }

    #[test]
    fn colon_entry_on_a_negative_value_extends_the_minutes() {
        let mut e = engine(Variant::TwentyFour);
        press_all(&mut e, &[Subtract, Digit(1), Equal, Colon]);
        assert_eq!(e.accumulator(), "-60");

        e.press(Digit(5));
        assert_eq!(e.accumulator(), "-55");

        e.press(Digit(3));
        assert_eq!(e.accumulator(), "-553");
        assert_eq!(e.last_error(), None);
    }

    #[test]
    fn clear_discards_the_pending_operation() {
        let mut e = engine(Variant::Basic);
        press_all(&mut e, &[Digit(5), Add, Clear, Digit(3), Equal]);
        assert_eq!(e.accumulator(), "3");
    }
}
