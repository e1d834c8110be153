//! Mock-DOM driver
//!
//! Runs the browser event path end to end: a click or key-down is recorded
//! on the [`MockDom`], resolved through the keypad or keymap, dispatched to
//! the [`Calculator`], and the resulting effects are applied back to the DOM.

use super::dom::{DomEvent, MockDom, ACTIVE_CLASS, DISPLAY_ID, OPERATOR_CLASS};
use super::keypad::{Keypad, MockDomKeypadExt};
use crate::config::DisplayConfig;
use crate::core::{CalcError, CalcResult, Calculator, Dispatch, InputEvent, Operator};
use crate::driver::{CalculatorDriver, SessionDriver};

/// Calculator bound to a mock DOM
#[derive(Debug)]
pub struct DomDriver {
    session: SessionDriver<MockDom>,
}

impl Default for DomDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl DomDriver {
    /// Creates a driver over the standard calculator markup
    #[must_use]
    pub fn new() -> Self {
        Self::with_calculator(Calculator::new())
    }

    /// Creates a driver with custom display formatting
    #[must_use]
    pub fn with_display_config(config: DisplayConfig) -> Self {
        Self::with_calculator(Calculator::with_display_config(config))
    }

    /// Creates a driver around an existing calculator
    #[must_use]
    pub fn with_calculator(calculator: Calculator) -> Self {
        let mut dom = MockDom::calculator();
        dom.add_keypad(&Keypad::new());
        Self {
            session: SessionDriver::with_calculator(calculator, dom),
        }
    }

    /// Returns a reference to the calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        self.session.calculator()
    }

    /// Returns a reference to the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        self.session.surface()
    }

    /// Returns a mutable reference to the DOM
    pub fn dom_mut(&mut self) -> &mut MockDom {
        self.session.surface_mut()
    }

    /// Simulates a click on an element
    ///
    /// The element is resolved from its `data-number`/`data-action`
    /// attributes, like a delegated click handler on the button container.
    /// Clicks on elements that carry neither are ignored.
    ///
    /// # Errors
    ///
    /// Fails for an unknown element id or malformed data attributes.
    pub fn click(&mut self, element_id: &str) -> CalcResult<Dispatch> {
        self.dom_mut().dispatch_event(DomEvent::click(element_id));

        let element = self
            .dom()
            .get_element(element_id)
            .ok_or_else(|| CalcError::UnknownButton(element_id.to_string()))?;

        match Keypad::event_for_element(element)? {
            Some(event) => Ok(self.session.dispatch(&event)),
            None => Ok(Dispatch::default()),
        }
    }

    /// Simulates a key-down on the document
    pub fn key_down(&mut self, key: &str) -> Dispatch {
        let dispatch = self.session.key_down(key);
        self.dom_mut()
            .dispatch_event(DomEvent::key_down(key, dispatch.prevent_default));
        dispatch
    }

    /// Dispatches an event and applies its effects to the DOM
    pub fn dispatch(&mut self, event: &InputEvent) -> Dispatch {
        self.session.dispatch(event)
    }

    /// Gets the display element's text
    #[must_use]
    pub fn display_element_text(&self) -> Option<&str> {
        self.dom().get_element_text(DISPLAY_ID)
    }

    /// Ids of operator buttons currently marked active
    #[must_use]
    pub fn active_operator_ids(&self) -> Vec<String> {
        self.dom().ids_with_classes(&[OPERATOR_CLASS, ACTIVE_CLASS])
    }

    /// The keypad layout in use
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        self.session.keypad()
    }
}

impl CalculatorDriver for DomDriver {
    fn press_button(&mut self, id: &str) -> CalcResult<()> {
        self.click(id).map(|_| ())
    }

    fn press_key(&mut self, key: &str) {
        self.key_down(key);
    }

    fn display(&self) -> String {
        self.display_element_text().unwrap_or_default().to_string()
    }

    fn active_operator(&self) -> Option<Operator> {
        let ids = self.active_operator_ids();
        let id = ids.first()?;
        self.dom()
            .get_element(id)
            .and_then(|e| e.get_attr("data-action"))
            .and_then(Operator::from_name)
    }
}
