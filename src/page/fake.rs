//! In-memory page for component tests.

use std::cell::RefCell;
use std::collections::HashMap;

use super::Page;
use crate::components::HourRow;
use crate::dialog::Dialog;

#[derive(Debug, Clone, Default)]
pub struct FakeElement {
    pub text: String,
    pub value: String,
    pub checked: bool,
    pub placeholder: String,
    pub revealed: bool,
    /// `(selector, attribute, value)` this element answers to
    pub attribute: Option<(String, String, String)>,
}

/// Records every write so tests can assert on what a handler touched.
///
/// `set_text` creates missing elements; everything else leaves absent
/// elements absent.
#[derive(Default)]
pub struct FakePage {
    path: String,
    csrf: String,
    elements: RefCell<HashMap<String, FakeElement>>,
    pub text_writes: RefCell<Vec<(String, String)>>,
    pub dialogs: RefCell<Vec<Dialog>>,
    pub navigations: RefCell<Vec<String>>,
    pub hour_rows: RefCell<Vec<HourRow>>,
    pub form_resets: RefCell<Vec<String>>,
}

impl FakePage {
    pub fn at(path: &str) -> Self {
        Self { path: path.to_string(), ..Default::default() }
    }

    pub fn with_text(self, id: &str, text: &str) -> Self {
        self.elements.borrow_mut().entry(id.to_string()).or_default().text = text.to_string();
        self
    }

    pub fn with_value(self, id: &str, value: &str) -> Self {
        self.elements.borrow_mut().entry(id.to_string()).or_default().value = value.to_string();
        self
    }

    pub fn with_checked(self, id: &str, checked: bool) -> Self {
        self.elements.borrow_mut().entry(id.to_string()).or_default().checked = checked;
        self
    }

    pub fn with_attribute(self, id: &str, selector: &str, attribute: &str, value: &str) -> Self {
        self.elements.borrow_mut().entry(id.to_string()).or_default().attribute =
            Some((selector.to_string(), attribute.to_string(), value.to_string()));
        self
    }

    pub fn with_csrf(mut self, token: &str) -> Self {
        self.csrf = token.to_string();
        self
    }

    pub fn exists(&self, id: &str) -> bool {
        self.elements.borrow().contains_key(id)
    }

    pub fn element(&self, id: &str) -> Option<FakeElement> {
        self.elements.borrow().get(id).cloned()
    }

    pub fn dialogs(&self) -> Vec<Dialog> {
        self.dialogs.borrow().clone()
    }
}

impl Page for FakePage {
    fn path(&self) -> String {
        self.path.clone()
    }

    fn text(&self, id: &str) -> Option<String> {
        self.elements.borrow().get(id).map(|el| el.text.clone())
    }

    fn set_text(&self, id: &str, text: &str) {
        self.text_writes.borrow_mut().push((id.to_string(), text.to_string()));
        self.elements.borrow_mut().entry(id.to_string()).or_default().text = text.to_string();
    }

    fn remove(&self, id: &str) -> bool {
        self.elements.borrow_mut().remove(id).is_some()
    }

    fn reveal(&self, id: &str) {
        if let Some(el) = self.elements.borrow_mut().get_mut(id) {
            el.revealed = true;
        }
    }

    fn value(&self, id: &str) -> Option<String> {
        self.elements.borrow().get(id).map(|el| el.value.clone())
    }

    fn set_value(&self, id: &str, value: &str) {
        self.elements.borrow_mut().entry(id.to_string()).or_default().value = value.to_string();
    }

    fn is_checked(&self, id: &str) -> bool {
        self.elements.borrow().get(id).map(|el| el.checked).unwrap_or(false)
    }

    fn set_placeholder(&self, id: &str, text: &str) {
        if let Some(el) = self.elements.borrow_mut().get_mut(id) {
            el.placeholder = text.to_string();
        }
    }

    fn attribute_pairs(&self, selector: &str, attribute: &str) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .elements
            .borrow()
            .iter()
            .filter_map(|(id, el)| match &el.attribute {
                Some((sel, attr, value)) if sel == selector && attr == attribute => {
                    Some((id.clone(), value.clone()))
                }
                _ => None,
            })
            .collect();
        pairs.sort();
        pairs
    }

    fn csrf_token(&self) -> String {
        self.csrf.clone()
    }

    fn append_hour_row(&self, row: HourRow) {
        self.elements.borrow_mut().insert(row.dom_id(), FakeElement::default());
        self.hour_rows.borrow_mut().push(row);
    }

    fn reset_form(&self, id: &str) {
        self.form_resets.borrow_mut().push(id.to_string());
    }

    fn notify(&self, dialog: Dialog) {
        self.dialogs.borrow_mut().push(dialog);
    }

    fn notify_then_navigate(&self, dialog: Dialog, url: &str) {
        self.dialogs.borrow_mut().push(dialog);
        self.navigations.borrow_mut().push(url.to_string());
    }
}
