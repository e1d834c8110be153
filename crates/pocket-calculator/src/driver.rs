//! Display surfaces and unified drivers
//!
//! **Write the scenario once, run it against every front end.**
//!
//! A [`DisplaySurface`] is wherever effects land (a DOM, a terminal line, a
//! test double). A [`CalculatorDriver`] is a front end seen from the
//! outside: press buttons and keys, read the display back. The `verify_*`
//! functions are shared scenarios any driver must pass.

use tracing::debug;

use crate::config::DisplayConfig;
use crate::core::{CalcResult, Calculator, Dispatch, Effect, InputEvent, Operator};
use crate::wasm::Keypad;

/// Receives the calculator's output effects
pub trait DisplaySurface {
    /// Replaces the display text
    fn set_display_text(&mut self, text: &str);

    /// Marks `op` active, clearing any previous mark; `None` clears only
    fn set_active_operator(&mut self, op: Option<Operator>);

    /// Applies a batch of effects in order
    fn apply_effects(&mut self, effects: &[Effect]) {
        for effect in effects {
            match effect {
                Effect::DisplayUpdate(text) => self.set_display_text(text),
                Effect::HighlightUpdate(op) => self.set_active_operator(*op),
            }
        }
    }
}

/// In-memory surface that keeps only the latest state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSurface {
    /// Current display text
    pub text: String,
    /// Operator currently marked active
    pub active: Option<Operator>,
    /// Number of effects applied so far
    pub updates: usize,
}

impl DisplaySurface for TextSurface {
    fn set_display_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.updates += 1;
    }

    fn set_active_operator(&mut self, op: Option<Operator>) {
        self.active = op;
        self.updates += 1;
    }
}

/// A calculator bound to a display surface
///
/// Every dispatched event's effects are applied to the surface before the
/// call returns, so the surface always reflects the calculator.
#[derive(Debug)]
pub struct SessionDriver<S> {
    calculator: Calculator,
    surface: S,
    keypad: Keypad,
}

impl<S: DisplaySurface + Default> Default for SessionDriver<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: DisplaySurface> SessionDriver<S> {
    /// Binds a fresh calculator to `surface` and paints the initial state
    pub fn new(surface: S) -> Self {
        Self::with_calculator(Calculator::new(), surface)
    }

    /// Binds a calculator using `config` for its display
    pub fn with_display_config(config: DisplayConfig, surface: S) -> Self {
        Self::with_calculator(Calculator::with_display_config(config), surface)
    }

    /// Binds an existing calculator to `surface`
    pub fn with_calculator(calculator: Calculator, mut surface: S) -> Self {
        surface.set_display_text(&calculator.display());
        surface.set_active_operator(calculator.highlight());
        Self {
            calculator,
            surface,
            keypad: Keypad::new(),
        }
    }

    /// Dispatches an event and applies its effects
    pub fn dispatch(&mut self, event: &InputEvent) -> Dispatch {
        let dispatch = self.calculator.dispatch(event);
        debug!(effects = dispatch.effects.len(), "applying effects");
        self.surface.apply_effects(&dispatch.effects);
        dispatch
    }

    /// Activates a keypad button by element id
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::UnknownButton`](crate::core::CalcError::UnknownButton)
    /// when no keypad button has this id.
    pub fn click(&mut self, id: &str) -> CalcResult<Dispatch> {
        let event = self.keypad.handle_click(id)?;
        Ok(self.dispatch(&event))
    }

    /// Presses a key; unbound keys leave the surface untouched
    pub fn key_down(&mut self, key: &str) -> Dispatch {
        self.dispatch(&InputEvent::key(key))
    }

    /// The calculator
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// The keypad used to resolve button ids
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// The surface effects are applied to
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Unbinds the surface
    pub fn into_surface(self) -> S {
        self.surface
    }
}

impl SessionDriver<TextSurface> {
    /// Text shown on the surface
    #[must_use]
    pub fn display_text(&self) -> &str {
        &self.surface.text
    }
}

impl CalculatorDriver for SessionDriver<TextSurface> {
    fn press_button(&mut self, id: &str) -> CalcResult<()> {
        self.click(id).map(|_| ())
    }

    fn press_key(&mut self, key: &str) {
        self.key_down(key);
    }

    fn display(&self) -> String {
        self.surface.text.clone()
    }

    fn active_operator(&self) -> Option<Operator> {
        self.surface.active
    }
}

/// Abstract front end for scenario tests
///
/// # Example
///
/// ```rust
/// use pocket_calculator::driver::{verify_basic_arithmetic, CalculatorDriver};
/// use pocket_calculator::wasm::DomDriver;
///
/// let mut driver = DomDriver::new();
/// verify_basic_arithmetic(&mut driver);
/// ```
pub trait CalculatorDriver {
    /// Activates the keypad button with this element id
    fn press_button(&mut self, id: &str) -> CalcResult<()>;

    /// Presses a key (browser `KeyboardEvent.key` identifier)
    fn press_key(&mut self, key: &str);

    /// Text currently shown
    fn display(&self) -> String;

    /// Operator currently marked active
    fn active_operator(&self) -> Option<Operator>;

    /// Types each character of `keys` as a key press
    fn type_keys(&mut self, keys: &str) {
        for c in keys.chars() {
            self.press_key(&c.to_string());
        }
    }
}

// ===== Unified Scenarios =====
// These work with ANY CalculatorDriver implementation

/// Verifies the four operations through the keyboard
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    let cases = [("7+3=", "10"), ("9-12=", "-3"), ("6*7=", "42"), ("7/2=", "3.5")];
    for (keys, expected) in cases {
        driver.press_key("Escape");
        driver.type_keys(keys);
        assert_eq!(driver.display(), expected, "keys {keys}");
    }
    driver.press_key("Escape");
}

/// Verifies left-to-right chaining without precedence
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.press_key("Escape");
    driver.type_keys("2+3*4");
    assert_eq!(driver.active_operator(), Some(Operator::Multiply));
    driver.press_key("Enter");
    assert_eq!(driver.display(), "20");
    assert_eq!(driver.active_operator(), None);
    driver.press_key("Escape");
}

/// Verifies division by zero shows 0
pub fn verify_divide_by_zero<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.press_key("Escape");
    for id in ["btn-5", "btn-divide", "btn-0", "btn-equals"] {
        driver.press_button(id)?;
    }
    assert_eq!(driver.display(), "0");
    driver.press_key("Escape");
    Ok(())
}

/// Verifies the 9-character display rule
pub fn verify_display_width<D: CalculatorDriver>(driver: &mut D) {
    driver.press_key("Escape");
    driver.type_keys("9999999999");
    assert_eq!(driver.display(), "1.00e+10");
    driver.press_key("Escape");
    driver.type_keys("1.234567891");
    assert_eq!(driver.display(), "1.2345678");
    driver.press_key("Escape");
}

/// Verifies clear resets display and highlight
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.type_keys("12+");
    assert_eq!(driver.active_operator(), Some(Operator::Add));
    driver.press_button("btn-clear")?;
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.active_operator(), None);
    Ok(())
}

/// Complete verification suite - runs all scenarios
///
/// # Errors
///
/// Returns an error if the driver cannot resolve a keypad button id.
pub fn run_full_specification<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    verify_basic_arithmetic(driver);
    verify_chaining(driver);
    verify_divide_by_zero(driver)?;
    verify_display_width(driver);
    verify_clear(driver)
}
