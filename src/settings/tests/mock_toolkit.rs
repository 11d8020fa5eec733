//! In-memory toolkit for exercising widgets without a display server.

use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use std::rc::Rc;

use crate::ui::{BrowseHandler, PathPicker, PickRequest, TextControl, ToggleControl, Toolkit};

/// Check box state shared between the widget and its node
#[derive(Clone, Debug, Default)]
pub struct MockToggle(Rc<Cell<bool>>);

impl MockToggle {
    /// Simulates the user clicking the check box into `active`
    pub fn set(&self, active: bool) {
        self.0.set(active);
    }
}

impl ToggleControl for MockToggle {
    fn is_active(&self) -> bool {
        self.0.get()
    }
}

/// Text field contents shared between the widget and its node
#[derive(Clone, Debug, Default)]
pub struct MockText(Rc<RefCell<String>>);

impl TextControl for MockText {
    fn text(&self) -> String {
        self.0.borrow().clone()
    }

    fn set_text(&self, text: &str) {
        *self.0.borrow_mut() = text.to_string();
    }
}

/// What the toolkit rendered, plus handles to drive it
pub struct MockWidget {
    pub kind: &'static str,
    pub label: String,
    pub tip: Option<String>,
    toggle: Option<MockToggle>,
    text: Option<MockText>,
    browse: Option<BrowseHandler<MockText>>,
}

impl MockWidget {
    pub fn toggle(&self) -> &MockToggle {
        self.toggle.as_ref().expect("widget has no check box")
    }

    pub fn text(&self) -> &MockText {
        self.text.as_ref().expect("widget has no text field")
    }

    /// Simulates pressing "Browse" with `picker` standing in for the dialog
    pub fn click_browse(&self, picker: &dyn PathPicker) {
        let handler = self.browse.as_ref().expect("widget has no browse button");
        handler(self.text(), picker);
    }
}

#[derive(Default)]
pub struct MockToolkit;

impl Toolkit for MockToolkit {
    type Widget = MockWidget;
    type Toggle = MockToggle;
    type Text = MockText;

    fn check_box(&self, label: &str, active: bool, tip: Option<&str>) -> (MockWidget, MockToggle) {
        let toggle = MockToggle::default();
        toggle.set(active);

        let widget = MockWidget {
            kind: "check_box",
            label: label.to_string(),
            tip: tip.map(str::to_string),
            toggle: Some(toggle.clone()),
            text: None,
            browse: None,
        };
        (widget, toggle)
    }

    fn text_row(&self, label: &str, text: &str, tip: Option<&str>) -> (MockWidget, MockText) {
        let field = MockText::default();
        field.set_text(text);

        let widget = MockWidget {
            kind: "text_row",
            label: label.to_string(),
            tip: tip.map(str::to_string),
            toggle: None,
            text: Some(field.clone()),
            browse: None,
        };
        (widget, field)
    }

    fn browse_row(
        &self,
        label: &str,
        text: &str,
        tip: Option<&str>,
        on_browse: BrowseHandler<MockText>,
    ) -> (MockWidget, MockText) {
        let (mut widget, field) = self.text_row(label, text, tip);
        widget.kind = "browse_row";
        widget.browse = Some(on_browse);
        (widget, field)
    }
}

/// Picker returning a fixed answer and recording what it was asked
pub struct ScriptedPicker {
    answer: Option<PathBuf>,
    pub requests: RefCell<Vec<PickRequest>>,
}

impl ScriptedPicker {
    pub fn selecting(path: impl Into<PathBuf>) -> Self {
        Self {
            answer: Some(path.into()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn cancelling() -> Self {
        Self {
            answer: None,
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn last_request(&self) -> PickRequest {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("picker was never opened")
    }
}

impl PathPicker for ScriptedPicker {
    fn pick_path(&self, request: &PickRequest) -> Option<PathBuf> {
        self.requests.borrow_mut().push(request.clone());
        self.answer.clone()
    }
}
