//! Calculator interaction state machine
//!
//! Operators chain left to right with no precedence: `2 + 3 + 4` evaluates
//! `2 + 3` as soon as the second `+` arrives. The entry is kept as text so
//! that partial numbers like `"0."` survive between keystrokes.

use serde::Serialize;
use tracing::{debug, trace};

use crate::config::DisplayConfig;
use crate::core::display::format_display;
use crate::core::event::{Action, Command, Digit, Dispatch, Effect, InputEvent};
use crate::core::keymap::key_binding;
use crate::core::number::{number_to_string, parse_numeric};
use crate::core::operations::{perform_calculation, Operator};

const INITIAL_INPUT: &str = "0";

/// Observable state of a [`Calculator`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Entry as typed or computed
    pub current_input: String,
    /// Operand captured before the pending operator
    pub previous_input: Option<f64>,
    /// Operator awaiting its second operand
    pub pending_operator: Option<Operator>,
    /// Next digit starts a fresh entry
    pub waiting_for_operand: bool,
    /// Operator currently marked active
    pub highlight: Option<Operator>,
}

impl Snapshot {
    /// The state right after construction or clear
    #[must_use]
    pub fn initial() -> Self {
        Self {
            current_input: INITIAL_INPUT.to_string(),
            previous_input: None,
            pending_operator: None,
            waiting_for_operand: false,
            highlight: None,
        }
    }
}

/// Keypad calculator session
#[derive(Debug, Clone)]
pub struct Calculator {
    current_input: String,
    previous_input: Option<f64>,
    pending_operator: Option<Operator>,
    waiting_for_operand: bool,
    /// Diagnostic only; survives clear
    last_operator: Option<Operator>,
    highlight: Option<Operator>,
    display_config: DisplayConfig,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator showing `0`
    #[must_use]
    pub fn new() -> Self {
        Self::with_display_config(DisplayConfig::default())
    }

    /// Creates a calculator with custom display formatting
    #[must_use]
    pub fn with_display_config(display_config: DisplayConfig) -> Self {
        Self {
            current_input: INITIAL_INPUT.to_string(),
            previous_input: None,
            pending_operator: None,
            waiting_for_operand: false,
            last_operator: None,
            highlight: None,
            display_config,
        }
    }

    // ----- accessors -----

    /// Entry text, unformatted
    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    /// Captured first operand, if any
    #[must_use]
    pub fn previous_input(&self) -> Option<f64> {
        self.previous_input
    }

    /// Operator awaiting its second operand
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// Whether the next digit starts a fresh entry
    #[must_use]
    pub fn is_waiting_for_operand(&self) -> bool {
        self.waiting_for_operand
    }

    /// Most recently chosen operator
    #[must_use]
    pub fn last_operator(&self) -> Option<Operator> {
        self.last_operator
    }

    /// Operator currently marked active
    #[must_use]
    pub fn highlight(&self) -> Option<Operator> {
        self.highlight
    }

    /// Display formatting in use
    #[must_use]
    pub fn display_config(&self) -> &DisplayConfig {
        &self.display_config
    }

    /// Formatted display text
    #[must_use]
    pub fn display(&self) -> String {
        format_display(&self.current_input, &self.display_config)
    }

    /// Captures the observable state
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            current_input: self.current_input.clone(),
            previous_input: self.previous_input,
            pending_operator: self.pending_operator,
            waiting_for_operand: self.waiting_for_operand,
            highlight: self.highlight,
        }
    }

    fn current_value(&self) -> f64 {
        parse_numeric(&self.current_input)
    }

    // ----- transitions -----

    /// Enters a digit
    pub fn input_number(&mut self, digit: Digit) {
        let c = digit.as_char();
        if self.waiting_for_operand {
            self.current_input = c.to_string();
            self.waiting_for_operand = false;
        } else if self.current_input == INITIAL_INPUT {
            self.current_input = c.to_string();
        } else {
            self.current_input.push(c);
        }
    }

    /// Enters a decimal point; at most one per entry
    pub fn input_decimal(&mut self) {
        if self.waiting_for_operand {
            self.current_input = "0.".to_string();
            self.waiting_for_operand = false;
        } else if !self.current_input.contains('.') {
            self.current_input.push('.');
        }
    }

    /// Drops the last character; a single remaining character becomes `0`
    pub fn backspace(&mut self) {
        if self.current_input.chars().count() > 1 {
            self.current_input.pop();
        } else {
            self.current_input = INITIAL_INPUT.to_string();
        }
    }

    /// Negates the entry
    pub fn toggle_sign(&mut self) {
        self.current_input = number_to_string(-self.current_value());
    }

    /// Divides the entry by 100
    pub fn percent(&mut self) {
        self.current_input = number_to_string(self.current_value() / 100.0);
    }

    /// Chooses an operator, first finishing any pending one
    pub fn input_operator(&mut self, op: Operator) {
        let input_value = self.current_value();

        match self.previous_input {
            None => self.previous_input = Some(input_value),
            Some(previous) => {
                if let Some(pending) = self.pending_operator {
                    // A NaN operand chains as 0
                    let previous = if previous.is_nan() { 0.0 } else { previous };
                    let result = perform_calculation(Some(pending), previous, input_value);
                    trace!(%pending, previous, input_value, result, "chained evaluation");
                    self.current_input = number_to_string(result);
                    self.previous_input = Some(result);
                }
            }
        }

        self.waiting_for_operand = true;
        self.pending_operator = Some(op);
        self.last_operator = Some(op);
        self.highlight = Some(op);
    }

    /// Finishes the pending operation; a no-op without operand and operator
    pub fn calculate(&mut self) {
        let (Some(previous), Some(op)) = (self.previous_input, self.pending_operator) else {
            trace!("equals without pending operation ignored");
            return;
        };

        let input_value = self.current_value();
        let result = perform_calculation(Some(op), previous, input_value);
        trace!(%op, previous, input_value, result, "equals");

        self.current_input = number_to_string(result);
        self.previous_input = None;
        self.pending_operator = None;
        self.waiting_for_operand = true;
        self.highlight = None;
    }

    /// Resets to the initial state
    pub fn clear(&mut self) {
        self.current_input = INITIAL_INPUT.to_string();
        self.previous_input = None;
        self.pending_operator = None;
        self.waiting_for_operand = false;
        self.highlight = None;
    }

    /// Performs a named action
    pub fn perform_action(&mut self, action: Action) {
        if let Some(op) = action.as_operator() {
            self.input_operator(op);
            return;
        }
        match action {
            Action::Clear => self.clear(),
            Action::Backspace => self.backspace(),
            Action::Percent => self.percent(),
            Action::PlusMinus => self.toggle_sign(),
            Action::Decimal => self.input_decimal(),
            Action::Equals => self.calculate(),
            Action::Add | Action::Subtract | Action::Multiply | Action::Divide => {}
        }
    }

    /// Executes a resolved command
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::Digit(d) => self.input_number(d),
            Command::Action(a) => self.perform_action(a),
        }
    }

    // ----- dispatch -----

    /// Runs one input event to completion and reports the resulting effects
    ///
    /// The display text is always reported for a handled event. The
    /// highlight is reported when an operator was chosen, on clear, and
    /// whenever it changed. Unbound keys yield an empty dispatch.
    pub fn dispatch(&mut self, event: &InputEvent) -> Dispatch {
        let (command, prevent_default) = match event {
            InputEvent::Digit(d) => (Command::Digit(*d), false),
            InputEvent::Action(a) => (Command::Action(*a), false),
            InputEvent::Key(key) => match key_binding(key) {
                Some(binding) => (binding.command, binding.prevent_default),
                None => {
                    trace!(key = %key, "unbound key ignored");
                    return Dispatch::default();
                }
            },
        };

        let highlight_before = self.highlight;
        self.execute(command);

        let shown = self.display();
        debug!(?command, display = %shown, "dispatched");

        let mut effects = vec![Effect::DisplayUpdate(shown)];
        let touches_highlight = matches!(
            command,
            Command::Action(
                Action::Add | Action::Subtract | Action::Multiply | Action::Divide | Action::Clear
            )
        );
        if touches_highlight || highlight_before != self.highlight {
            effects.push(Effect::HighlightUpdate(self.highlight));
        }

        Dispatch {
            effects,
            prevent_default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(d: u8) -> Digit {
        Digit::new(d).unwrap()
    }

    fn type_digits(calc: &mut Calculator, digits: &str) {
        for c in digits.chars() {
            calc.input_number(Digit::try_from(c).unwrap());
        }
    }

    fn press(calc: &mut Calculator, keys: &[&str]) -> Dispatch {
        let mut last = Dispatch::default();
        for key in keys {
            last = calc.dispatch(&InputEvent::key(key));
        }
        last
    }

    // ===== Construction =====

    #[test]
    fn test_new_is_initial_state() {
        let calc = Calculator::new();
        assert_eq!(calc.snapshot(), Snapshot::initial());
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.last_operator(), None);
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(Calculator::default().snapshot(), Calculator::new().snapshot());
    }

    // ===== Digit input =====

    #[test]
    fn test_first_digit_replaces_zero() {
        let mut calc = Calculator::new();
        calc.input_number(digit(7));
        assert_eq!(calc.current_input(), "7");
    }

    #[test]
    fn test_digits_append() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "123");
        assert_eq!(calc.current_input(), "123");
    }

    #[test]
    fn test_repeated_zero_stays_single() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "000");
        assert_eq!(calc.current_input(), "0");
    }

    #[test]
    fn test_digit_after_operator_starts_fresh() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "12");
        calc.input_operator(Operator::Add);
        calc.input_number(digit(5));
        assert_eq!(calc.current_input(), "5");
        assert!(!calc.is_waiting_for_operand());
    }

    // ===== Decimal input =====

    #[test]
    fn test_decimal_appends_once() {
        let mut calc = Calculator::new();
        calc.input_decimal();
        calc.input_decimal();
        assert_eq!(calc.current_input(), "0.");
        type_digits(&mut calc, "5");
        calc.input_decimal();
        assert_eq!(calc.current_input(), "0.5");
    }

    #[test]
    fn test_decimal_while_waiting_starts_zero_point() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "3");
        calc.input_operator(Operator::Multiply);
        calc.input_decimal();
        assert_eq!(calc.current_input(), "0.");
        assert!(!calc.is_waiting_for_operand());
    }

    #[test]
    fn test_zero_point_digits_keep_leading_zero() {
        let mut calc = Calculator::new();
        calc.input_decimal();
        type_digits(&mut calc, "05");
        assert_eq!(calc.current_input(), "0.05");
    }

    // ===== Backspace =====

    #[test]
    fn test_backspace_removes_last_char() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "123");
        calc.backspace();
        assert_eq!(calc.current_input(), "12");
    }

    #[test]
    fn test_backspace_single_char_resets_to_zero() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "8");
        calc.backspace();
        assert_eq!(calc.current_input(), "0");
        calc.backspace();
        assert_eq!(calc.current_input(), "0");
    }

    #[test]
    fn test_backspace_negative_leaves_sign_then_nan_display() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "5");
        calc.toggle_sign();
        calc.backspace();
        assert_eq!(calc.current_input(), "-");
        calc.toggle_sign();
        assert_eq!(calc.current_input(), "NaN");
    }

    // ===== Sign toggle / percent =====

    #[test]
    fn test_toggle_sign() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "42");
        calc.toggle_sign();
        assert_eq!(calc.current_input(), "-42");
        calc.toggle_sign();
        assert_eq!(calc.current_input(), "42");
    }

    #[test]
    fn test_toggle_sign_of_zero_stays_zero() {
        let mut calc = Calculator::new();
        calc.toggle_sign();
        assert_eq!(calc.current_input(), "0");
    }

    #[test]
    fn test_toggle_sign_drops_trailing_point() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "7");
        calc.input_decimal();
        calc.toggle_sign();
        assert_eq!(calc.current_input(), "-7");
    }

    #[test]
    fn test_toggle_sign_ignores_waiting_flag() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "9");
        calc.input_operator(Operator::Add);
        calc.toggle_sign();
        assert_eq!(calc.current_input(), "-9");
        assert!(calc.is_waiting_for_operand());
    }

    #[test]
    fn test_percent() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "50");
        calc.percent();
        assert_eq!(calc.current_input(), "0.5");
        calc.percent();
        assert_eq!(calc.current_input(), "0.005");
    }

    // ===== Operators and equals =====

    #[test]
    fn test_operator_captures_first_operand() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "7");
        calc.input_operator(Operator::Add);
        assert_eq!(calc.previous_input(), Some(7.0));
        assert_eq!(calc.pending_operator(), Some(Operator::Add));
        assert_eq!(calc.highlight(), Some(Operator::Add));
        assert!(calc.is_waiting_for_operand());
    }

    #[test]
    fn test_seven_plus_three_equals_ten() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "7");
        calc.input_operator(Operator::Add);
        type_digits(&mut calc, "3");
        calc.calculate();
        assert_eq!(calc.display(), "10");
        assert_eq!(calc.previous_input(), None);
        assert_eq!(calc.pending_operator(), None);
        assert_eq!(calc.highlight(), None);
        assert!(calc.is_waiting_for_operand());
    }

    #[test]
    fn test_chained_operators_evaluate_left_to_right() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "2");
        calc.input_operator(Operator::Add);
        type_digits(&mut calc, "3");
        calc.input_operator(Operator::Multiply);
        assert_eq!(calc.current_input(), "5");
        assert_eq!(calc.previous_input(), Some(5.0));
        type_digits(&mut calc, "4");
        calc.calculate();
        assert_eq!(calc.current_input(), "20");
    }

    #[test]
    fn test_switching_operator_reevaluates_with_current_entry() {
        // Pressing a second operator immediately reuses the shown value as operand
        let mut calc = Calculator::new();
        type_digits(&mut calc, "6");
        calc.input_operator(Operator::Add);
        calc.input_operator(Operator::Subtract);
        assert_eq!(calc.current_input(), "12");
        assert_eq!(calc.pending_operator(), Some(Operator::Subtract));
        assert_eq!(calc.highlight(), Some(Operator::Subtract));
    }

    #[test]
    fn test_nan_operand_chains_as_zero() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "5");
        calc.toggle_sign();
        calc.backspace();
        calc.input_operator(Operator::Add);
        assert!(calc.previous_input().is_some_and(f64::is_nan));
        type_digits(&mut calc, "3");
        calc.input_operator(Operator::Add);
        assert_eq!(calc.current_input(), "3");
    }

    #[test]
    fn test_divide_by_zero_shows_zero() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "5");
        calc.input_operator(Operator::Divide);
        type_digits(&mut calc, "0");
        calc.calculate();
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_equals_without_operator_is_noop() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "42");
        let before = calc.snapshot();
        calc.calculate();
        assert_eq!(calc.snapshot(), before);
    }

    #[test]
    fn test_repeated_equals_is_noop() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "2");
        calc.input_operator(Operator::Multiply);
        type_digits(&mut calc, "8");
        calc.calculate();
        calc.calculate();
        assert_eq!(calc.current_input(), "16");
    }

    #[test]
    fn test_result_then_operator_continues_from_result() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "9");
        calc.input_operator(Operator::Subtract);
        type_digits(&mut calc, "4");
        calc.calculate();
        calc.input_operator(Operator::Multiply);
        assert_eq!(calc.previous_input(), Some(5.0));
        type_digits(&mut calc, "3");
        calc.calculate();
        assert_eq!(calc.current_input(), "15");
    }

    #[test]
    fn test_fractional_result_keeps_binary_artifacts() {
        let mut calc = Calculator::new();
        calc.input_decimal();
        type_digits(&mut calc, "1");
        calc.input_operator(Operator::Add);
        calc.input_decimal();
        type_digits(&mut calc, "2");
        calc.calculate();
        assert_eq!(calc.current_input(), "0.30000000000000004");
        assert_eq!(calc.display(), "0.3000000");
    }

    // ===== Clear =====

    #[test]
    fn test_clear_restores_initial_state() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "12");
        calc.input_operator(Operator::Divide);
        type_digits(&mut calc, "4");
        calc.clear();
        assert_eq!(calc.snapshot(), Snapshot::initial());
    }

    #[test]
    fn test_clear_keeps_last_operator() {
        let mut calc = Calculator::new();
        calc.input_operator(Operator::Multiply);
        calc.clear();
        assert_eq!(calc.last_operator(), Some(Operator::Multiply));
    }

    // ===== Display =====

    #[test]
    fn test_ten_nines_display_exponent() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "9999999999");
        assert_eq!(calc.current_input(), "9999999999");
        assert_eq!(calc.display(), "1.00e+10");
    }

    #[test]
    fn test_custom_display_config() {
        let mut calc = Calculator::with_display_config(DisplayConfig::new().with_max_chars(3));
        type_digits(&mut calc, "1234");
        assert_eq!(calc.display(), "123");
    }

    // ===== Dispatch =====

    #[test]
    fn test_dispatch_digit_emits_display_only() {
        let mut calc = Calculator::new();
        let dispatch = calc.dispatch(&InputEvent::Digit(digit(4)));
        assert_eq!(dispatch.effects, vec![Effect::DisplayUpdate("4".into())]);
        assert!(!dispatch.prevent_default);
    }

    #[test]
    fn test_dispatch_reports_formatted_display() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "999999999");
        let dispatch = calc.dispatch(&InputEvent::Digit(digit(9)));
        assert_eq!(dispatch.display(), Some("1.00e+10"));
        assert_eq!(calc.current_input(), "9999999999");
    }

    #[test]
    fn test_dispatch_operator_emits_highlight() {
        let mut calc = Calculator::new();
        calc.dispatch(&InputEvent::Digit(digit(4)));
        let dispatch = calc.dispatch(&InputEvent::Action(Action::Multiply));
        assert_eq!(dispatch.display(), Some("4"));
        assert_eq!(dispatch.highlight(), Some(Some(Operator::Multiply)));
    }

    #[test]
    fn test_dispatch_equals_clears_highlight() {
        let mut calc = Calculator::new();
        let dispatch = press(&mut calc, &["7", "+", "3", "Enter"]);
        assert_eq!(dispatch.display(), Some("10"));
        assert_eq!(dispatch.highlight(), Some(None));
    }

    #[test]
    fn test_dispatch_noop_equals_has_no_highlight_effect() {
        let mut calc = Calculator::new();
        let dispatch = press(&mut calc, &["7", "="]);
        assert_eq!(dispatch.display(), Some("7"));
        assert_eq!(dispatch.highlight(), None);
    }

    #[test]
    fn test_dispatch_clear_always_reports_highlight() {
        let mut calc = Calculator::new();
        let dispatch = calc.dispatch(&InputEvent::Action(Action::Clear));
        assert_eq!(dispatch.highlight(), Some(None));
    }

    #[test]
    fn test_dispatch_slash_prevents_default() {
        let mut calc = Calculator::new();
        let dispatch = press(&mut calc, &["8", "/"]);
        assert!(dispatch.prevent_default);
        assert_eq!(calc.pending_operator(), Some(Operator::Divide));
    }

    #[test]
    fn test_dispatch_unbound_key_is_ignored() {
        let mut calc = Calculator::new();
        let before = calc.snapshot();
        let dispatch = calc.dispatch(&InputEvent::key("q"));
        assert!(dispatch.is_ignored());
        assert_eq!(calc.snapshot(), before);
    }

    #[test]
    fn test_dispatch_percent_key() {
        let mut calc = Calculator::new();
        let dispatch = press(&mut calc, &["2", "5", "%"]);
        assert_eq!(dispatch.display(), Some("0.25"));
    }

    #[test]
    fn test_snapshot_serializes() {
        let json = serde_json::to_value(Snapshot::initial()).unwrap();
        assert_eq!(json["current_input"], "0");
        assert!(json["previous_input"].is_null());
        assert_eq!(json["waiting_for_operand"], false);
    }
}
