//! Browser WASM bindings for the calculator
//!
//! The page owns the DOM; this side owns the state. Event listeners pass
//! the clicked button's `data-number`/`data-action` payload or the key
//! identifier in, then read `display` and `activeOperator` back out.

use std::time::Duration;

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::config::CalculatorConfig;
use crate::core::{Action, CalcError, Digit, InputEvent};
use crate::driver::{SessionDriver, TextSurface};
use crate::typing::Typewriter;

fn to_js(err: CalcError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Browser Calculator - the main WASM entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    session: SessionDriver<TextSurface>,
    config: CalculatorConfig,
    typewriter: Typewriter,
    tooltip: String,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Create a new browser calculator
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Create a calculator from a JSON configuration
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: &str) -> Result<BrowserCalculator, JsValue> {
        CalculatorConfig::from_json_str(json)
            .map(Self::with_config)
            .map_err(to_js)
    }

    /// Handle a click on a keypad button by element id
    #[wasm_bindgen(js_name = handleButton)]
    pub fn handle_button(&mut self, button_id: &str) -> Result<(), JsValue> {
        self.session.click(button_id).map(|_| ()).map_err(to_js)
    }

    /// Handle a `data-number` payload
    #[wasm_bindgen(js_name = handleNumber)]
    pub fn handle_number(&mut self, number: &str) -> Result<(), JsValue> {
        let digit: Digit = number.parse().map_err(to_js)?;
        self.session.dispatch(&InputEvent::Digit(digit));
        Ok(())
    }

    /// Handle a `data-action` payload
    #[wasm_bindgen(js_name = handleAction)]
    pub fn handle_action(&mut self, action: &str) -> Result<(), JsValue> {
        let action: Action = action.parse().map_err(to_js)?;
        self.session.dispatch(&InputEvent::Action(action));
        Ok(())
    }

    /// Handle a key press; returns true when the page must call `preventDefault`
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, key: &str) -> bool {
        self.session.key_down(key).prevent_default
    }

    /// Text for the `.result` element
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.session.display_text().to_string()
    }

    /// `data-action` of the operator button to mark active, if any
    #[wasm_bindgen(getter, js_name = activeOperator)]
    pub fn active_operator(&self) -> Option<String> {
        self.session
            .surface()
            .active
            .map(|op| op.name().to_string())
    }

    /// Start typing the greeting into the tooltip, cancelling any animation in flight
    #[wasm_bindgen(js_name = startGreeting)]
    pub fn start_greeting(&mut self) {
        let typing = &self.config.typing;
        self.typewriter
            .start(&mut self.tooltip, &typing.greeting, typing.greeting_interval());
    }

    /// Start typing arbitrary text into the tooltip at the default interval
    #[wasm_bindgen(js_name = startTyping)]
    pub fn start_typing(&mut self, text: &str) {
        let interval = self.config.typing.interval();
        self.typewriter.start(&mut self.tooltip, text, interval);
    }

    /// Stop the tooltip animation
    #[wasm_bindgen(js_name = cancelTyping)]
    pub fn cancel_typing(&mut self) {
        self.typewriter.cancel();
    }

    /// Advance the tooltip animation by `elapsed_ms`; returns characters written
    #[wasm_bindgen(js_name = advanceTyping)]
    pub fn advance_typing(&mut self, elapsed_ms: u32) -> usize {
        self.typewriter.advance(
            &mut self.tooltip,
            Duration::from_millis(u64::from(elapsed_ms)),
        )
    }

    /// True while the tooltip animation still has characters to write
    #[wasm_bindgen(getter, js_name = isTyping)]
    pub fn is_typing(&self) -> bool {
        self.typewriter.is_active()
    }

    /// Current tooltip text
    #[wasm_bindgen(getter, js_name = tooltipText)]
    pub fn tooltip_text(&self) -> String {
        self.tooltip.clone()
    }
}

impl BrowserCalculator {
    fn with_config(config: CalculatorConfig) -> Self {
        console_error_panic_hook::set_once();
        Self {
            session: SessionDriver::with_display_config(
                config.display.clone(),
                TextSurface::default(),
            ),
            config,
            typewriter: Typewriter::new(),
            tooltip: String::new(),
        }
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize the calculator in the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"Pocket calculator WASM initialized".into());
}
