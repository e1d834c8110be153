//! Property-based tests for the calculator state machine

use proptest::prelude::*;
use pocket_calculator::config::DisplayConfig;
use pocket_calculator::core::display::format_display;
use pocket_calculator::core::keymap::{bound_keys, key_binding};
use pocket_calculator::core::number::number_to_string;
use pocket_calculator::prelude::*;
use pocket_calculator::wasm::{ACTIVE_CLASS, OPERATOR_CLASS};

// ===== Strategy definitions =====

/// Generate any valid digit (0-9)
fn digit_strategy() -> impl Strategy<Value = Digit> {
    (0u8..=9u8).prop_map(|d| Digit::new(d).unwrap())
}

/// Generate any operator
fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop::sample::select(Operator::ALL.to_vec())
}

/// Generate any command a button can send
fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        3 => digit_strategy().prop_map(Command::Digit),
        2 => prop::sample::select(Action::ALL.to_vec()).prop_map(Command::Action),
    ]
}

/// Generate a run of button presses
fn command_sequence() -> impl Strategy<Value = Vec<Command>> {
    prop::collection::vec(command_strategy(), 0..40)
}

/// Generate a small whole-number operand as its key sequence
fn operand_strategy() -> impl Strategy<Value = u32> {
    0u32..10_000u32
}

fn run(calc: &mut Calculator, commands: &[Command]) {
    for &command in commands {
        calc.execute(command);
    }
}

fn type_number(calc: &mut Calculator, n: u32) {
    for c in n.to_string().chars() {
        calc.execute(Command::Digit(Digit::try_from(c).unwrap()));
    }
}

// ===== Entry properties =====

proptest! {
    /// A digit run without a leading zero is shown verbatim while it fits
    #[test]
    fn prop_digit_run_is_entry(first in 1u8..=9u8, rest in prop::collection::vec(digit_strategy(), 0..8)) {
        let mut calc = Calculator::new();
        let first = Digit::new(first).unwrap();
        calc.input_number(first);
        let mut expected = first.to_string();
        for d in rest {
            calc.input_number(d);
            expected.push(d.as_char());
        }
        prop_assert_eq!(calc.current_input(), expected.as_str());
        prop_assert_eq!(calc.display(), expected);
    }

    /// Leading zeros never accumulate
    #[test]
    fn prop_zeros_collapse(count in 1usize..20) {
        let mut calc = Calculator::new();
        for _ in 0..count {
            calc.input_number(Digit::new(0).unwrap());
        }
        prop_assert_eq!(calc.current_input(), "0");
    }

    /// A second decimal point changes nothing
    #[test]
    fn prop_decimal_is_idempotent(commands in command_sequence()) {
        let mut calc = Calculator::new();
        run(&mut calc, &commands);
        calc.input_decimal();
        let once = calc.current_input().to_string();
        calc.input_decimal();
        prop_assert_eq!(calc.current_input(), once.as_str());
        prop_assert!(!calc.is_waiting_for_operand());
    }

    /// The entry never holds more than one decimal point
    #[test]
    fn prop_single_decimal_point(commands in command_sequence()) {
        let mut calc = Calculator::new();
        run(&mut calc, &commands);
        prop_assert!(calc.current_input().matches('.').count() <= 1);
    }
}

// ===== Arithmetic properties =====

proptest! {
    /// a op1 b op2 c = evaluates strictly left to right
    #[test]
    fn prop_chaining_is_left_to_right(
        a in operand_strategy(),
        op1 in operator_strategy(),
        b in operand_strategy(),
        op2 in operator_strategy(),
        c in operand_strategy(),
    ) {
        let mut calc = Calculator::new();
        type_number(&mut calc, a);
        calc.input_operator(op1);
        type_number(&mut calc, b);
        calc.input_operator(op2);
        type_number(&mut calc, c);
        calc.calculate();

        let first = perform_calculation(Some(op1), f64::from(a), f64::from(b));
        let second = perform_calculation(Some(op2), first, f64::from(c));
        let expected = format_display(&number_to_string(second), &DisplayConfig::default());
        prop_assert_eq!(calc.display(), expected);
        prop_assert_eq!(calc.pending_operator(), None);
        prop_assert!(calc.is_waiting_for_operand());
    }

    /// Dividing by zero always leaves 0 on the display
    #[test]
    fn prop_divide_by_zero_is_zero(a in operand_strategy()) {
        let mut calc = Calculator::new();
        type_number(&mut calc, a);
        calc.input_operator(Operator::Divide);
        calc.input_number(Digit::new(0).unwrap());
        calc.calculate();
        prop_assert_eq!(calc.display(), "0");
    }

    /// Toggling the sign twice restores any whole-number entry
    #[test]
    fn prop_toggle_sign_involution(a in 1u32..1_000_000u32) {
        let mut calc = Calculator::new();
        type_number(&mut calc, a);
        calc.toggle_sign();
        calc.toggle_sign();
        prop_assert_eq!(calc.current_input(), a.to_string());
    }
}

// ===== Whole-machine properties =====

proptest! {
    /// Clear returns to the initial state from anywhere
    #[test]
    fn prop_clear_resets(commands in command_sequence()) {
        let mut calc = Calculator::new();
        run(&mut calc, &commands);
        calc.clear();
        prop_assert_eq!(calc.snapshot(), Snapshot::initial());
        prop_assert_eq!(calc.display(), "0");
    }

    /// Short displays are never exponent form; long ones only are
    #[test]
    fn prop_display_fits_or_is_exponent(commands in command_sequence()) {
        let mut calc = Calculator::new();
        run(&mut calc, &commands);
        let display = calc.display();
        prop_assert!(display.chars().count() <= 9 || display.contains('e'), "display {}", display);
    }

    /// The highlight always tracks the pending operator
    #[test]
    fn prop_highlight_matches_pending(commands in command_sequence()) {
        let mut calc = Calculator::new();
        run(&mut calc, &commands);
        prop_assert_eq!(calc.highlight(), calc.pending_operator());
    }

    /// The mock DOM marks at most one operator, the calculator's
    #[test]
    fn prop_dom_single_active_operator(commands in command_sequence()) {
        let mut driver = DomDriver::new();
        for command in commands {
            driver.dispatch(&InputEvent::from(command));
        }
        let active = driver.dom().ids_with_classes(&[OPERATOR_CLASS, ACTIVE_CLASS]);
        prop_assert!(active.len() <= 1);
        prop_assert_eq!(driver.active_operator(), driver.calculator().highlight());
        prop_assert_eq!(driver.display(), driver.calculator().display());
    }

    /// Every handled event reports the display
    #[test]
    fn prop_dispatch_reports_display(commands in command_sequence()) {
        let mut calc = Calculator::new();
        for command in commands {
            let dispatch = calc.dispatch(&InputEvent::from(command));
            let display = calc.display();
            prop_assert_eq!(dispatch.display(), Some(display.as_str()));
        }
    }
}

// ===== Keymap properties =====

proptest! {
    /// Keys outside the table are ignored and leave the state alone
    #[test]
    fn prop_unbound_keys_ignored(key in "[a-zA-Z]{2,10}") {
        prop_assume!(!bound_keys().contains(&key.as_str()));
        prop_assert!(key_binding(&key).is_none());

        let mut calc = Calculator::new();
        calc.input_number(Digit::new(4).unwrap());
        let before = calc.snapshot();
        prop_assert!(calc.dispatch(&InputEvent::key(&key)).is_ignored());
        prop_assert_eq!(calc.snapshot(), before);
    }

    /// Digit keys and digit buttons do the same thing
    #[test]
    fn prop_digit_key_matches_button(digits in prop::collection::vec(digit_strategy(), 1..12)) {
        let mut by_key = Calculator::new();
        let mut by_button = Calculator::new();
        for d in digits {
            by_key.dispatch(&InputEvent::key(&d.to_string()));
            by_button.dispatch(&InputEvent::Digit(d));
        }
        prop_assert_eq!(by_key.snapshot(), by_button.snapshot());
    }
}

// ===== Keypad properties =====

proptest! {
    /// Every grid cell holds a button whose id resolves back to it
    #[test]
    fn prop_keypad_cells_resolve(row in 0usize..5, col in 0usize..4) {
        let keypad = Keypad::new();
        let btn = keypad.get_button_at(row, col).unwrap();
        prop_assert_eq!((btn.row, btn.col), (row, col));
        prop_assert_eq!(keypad.handle_click(&btn.id).unwrap(), InputEvent::from(btn.command));
    }
}

#[test]
fn test_keypad_ids_unique() {
    let keypad = Keypad::new();
    let mut ids: Vec<&str> = keypad.buttons().iter().map(|b| b.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), keypad.button_count());
}
