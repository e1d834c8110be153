//! Mock DOM for testing the browser front end
//!
//! Mirrors the markup the browser build binds to (a `.result` display and
//! `.operator` buttons carrying `data-action`) so the whole click and
//! keyboard path can be exercised without a browser.

use std::collections::HashMap;

use crate::core::Operator;
use crate::driver::DisplaySurface;
use crate::typing::TextTarget;

/// Element id of the calculator display
pub const DISPLAY_ID: &str = "calc-display";
/// Element id of the keypad container
pub const BUTTONS_ID: &str = "calc-buttons";
/// Class marking the highlighted operator button
pub const ACTIVE_CLASS: &str = "active";
/// Class shared by operator buttons
pub const OPERATOR_CLASS: &str = "operator";

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Adds a child element
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Adds a class
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Removes a class
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

impl TextTarget for DomElement {
    fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    fn push_char(&mut self, c: char) {
        self.text_content.push(c);
    }
}

/// DOM events that can be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Key pressed on the document
    KeyDown {
        /// `KeyboardEvent.key`
        key: String,
        /// Whether a handler called `preventDefault`
        default_prevented: bool,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a key-down event
    #[must_use]
    pub fn key_down(key: &str, default_prevented: bool) -> Self {
        Self::KeyDown {
            key: key.to_string(),
            default_prevented,
        }
    }
}

/// Mock DOM for testing the calculator without a browser
#[derive(Debug)]
pub struct MockDom {
    /// Root element
    pub root: DomElement,
    /// Elements by ID for quick lookup
    elements: HashMap<String, DomElement>,
    /// Event history for verification
    event_history: Vec<DomEvent>,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: DomElement::new("div").with_id("root"),
            elements: HashMap::new(),
            event_history: Vec::new(),
        }
    }

    /// Creates the calculator shell: display plus empty button container
    #[must_use]
    pub fn calculator() -> Self {
        let mut dom = Self::new();

        let display = DomElement::new("div")
            .with_id(DISPLAY_ID)
            .with_class("result")
            .with_text("0");

        let buttons = DomElement::new("div")
            .with_id(BUTTONS_ID)
            .with_class("buttons");

        dom.root = DomElement::new("div")
            .with_id("calculator")
            .with_class("calculator")
            .with_child(display.clone())
            .with_child(buttons.clone());

        dom.register_element(display);
        dom.register_element(buttons);
        dom
    }

    /// Registers an element for ID lookup
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Gets a mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Records an event
    pub fn dispatch_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Adds a child element to a parent
    pub fn append_child(&mut self, parent_id: &str, child: DomElement) {
        if let Some(parent) = self.elements.get_mut(parent_id) {
            parent.children.push(child.clone());
        }
        self.register_element(child);
    }

    /// Ids of all registered elements carrying every one of `classes`, sorted
    #[must_use]
    pub fn ids_with_classes(&self, classes: &[&str]) -> Vec<String> {
        let mut ids: Vec<String> = self
            .elements
            .values()
            .filter(|e| classes.iter().all(|c| e.has_class(c)))
            .map(|e| e.id.clone())
            .collect();
        ids.sort();
        ids
    }

    fn clear_active_operators(&mut self) {
        for elem in self.elements.values_mut() {
            if elem.has_class(OPERATOR_CLASS) {
                elem.remove_class(ACTIVE_CLASS);
            }
        }
    }
}

impl DisplaySurface for MockDom {
    fn set_display_text(&mut self, text: &str) {
        self.set_element_text(DISPLAY_ID, text);
    }

    fn set_active_operator(&mut self, op: Option<Operator>) {
        self.clear_active_operators();
        let Some(op) = op else { return };
        let target = self
            .elements
            .values_mut()
            .find(|e| e.get_attr("data-action") == Some(op.name()));
        if let Some(elem) = target {
            elem.add_class(ACTIVE_CLASS);
        }
    }
}
