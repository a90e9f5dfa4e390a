//! Selection-gated buttons on the store management pages
//!
//! Each checkbox/radio group is mirrored into a [`SelectionGroup`] kept
//! current by a delegated `change` listener. Buttons read the model, never
//! the DOM.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::commands;
use crate::dom;
use crate::error::UiResult;
use crate::selection::{ActionSpec, Choice, SelectionGroup, Target, ACTIONS, PLAIN_SUBMITS};

pub type SharedSelection = Rc<RefCell<SelectionGroup>>;

/// Lazily tracked selection groups, one per input `name`
#[derive(Default)]
pub struct SelectionRegistry {
    groups: HashMap<String, SharedSelection>,
}

impl SelectionRegistry {
    pub fn group(&mut self, name: &str) -> SharedSelection {
        self.groups
            .entry(name.to_string())
            .or_insert_with(|| track(name))
            .clone()
    }
}

fn snapshot(name: &str) -> SelectionGroup {
    let inputs = dom::inputs_named(name);
    let radio = inputs.iter().any(|i| i.type_() == "radio");
    let choices = inputs
        .iter()
        .map(|input| {
            let choice = Choice::new(input.value()).checked(input.checked());
            match input.get_attribute("data-store-id") {
                Some(store) => choice.with_store(store),
                None => choice,
            }
        })
        .collect();
    SelectionGroup::new(name, radio, choices)
}

fn track(name: &str) -> SharedSelection {
    let model = Rc::new(RefCell::new(snapshot(name)));
    let listener_model = model.clone();
    let group_name = name.to_string();

    dom::on_delegated("change", &format!("input[name=\"{}\"]", name), move |el| {
        let Ok(input) = el.dyn_into::<HtmlInputElement>() else {
            return Ok(());
        };
        let inputs = dom::inputs_named(&group_name);
        let mut model = listener_model.borrow_mut();
        match inputs.iter().position(|i| *i == input) {
            Some(index) if inputs.len() == model.choices().len() => {
                model.set_checked(index, input.checked());
            }
            // rows were added or removed since the last snapshot
            _ => *model = snapshot(&group_name),
        }
        Ok(())
    });
    model
}

fn run(action: &ActionSpec, group: &SelectionGroup) -> UiResult<()> {
    if let Some(question) = action.confirm {
        if !dom::confirm(question) {
            return Ok(());
        }
    }
    let fields = action.dispatch(group)?;
    match action.target {
        Target::Submit(form_id) => dom::submit_with_fields(form_id, &fields),
        Target::ShowModal(modal_id) => commands::show_modal(modal_id),
    }
}

pub fn bind(registry: &mut SelectionRegistry) {
    for &(button_id, form_id) in PLAIN_SUBMITS {
        dom::on_click(button_id, move || dom::submit_with_fields(form_id, &[]));
    }

    for action in ACTIONS {
        if dom::find_by_id(action.button_id).is_none() {
            continue;
        }
        let group = registry.group(action.group);
        dom::on_click(action.button_id, move || run(action, &group.borrow()));
    }
}
