//! Delivery addresses: the "add address" dialog and address card selection.
//! Shared by the cart and profile pages.

use std::cell::Cell;
use std::rc::Rc;

use web_sys::Element;

use crate::commands;
use crate::dom;
use crate::error::UiResult;
use crate::forms::AddressForm;

const CARD_SELECTOR: &str = ".address-btn";
const SELECTED: &str = "selected";

/// Index of the selected card among `.address-btn` elements
pub type AddressSelection = Rc<Cell<Option<usize>>>;

fn read_inputs() -> UiResult<AddressForm> {
    let mut values: [String; 6] = Default::default();
    for (slot, id) in values.iter_mut().zip(AddressForm::FIELDS) {
        *slot = dom::value_by_id(id)?;
    }
    Ok(AddressForm::from_values(values))
}

fn add_address() -> UiResult<()> {
    read_inputs()?.validate()?;
    dom::submit_with_fields("addMemberAddress", &[])?;
    commands::hide_modal("addDeliveryAddressModal")
}

/// Address fields shown on a card, read from its `[data-field]` children
pub fn read_card(card: &Element) -> UiResult<AddressForm> {
    let mut values: [String; 6] = Default::default();
    for (slot, name) in values.iter_mut().zip(AddressForm::FIELDS) {
        let el = dom::query_in(card, &format!("[data-field=\"{}\"]", name))?;
        *slot = dom::text_of(&el).trim().to_string();
    }
    Ok(AddressForm::from_values(values))
}

/// Card currently selected, if any
pub fn selected_card(selection: &AddressSelection) -> Option<Element> {
    selection
        .get()
        .and_then(|index| dom::query_all(CARD_SELECTOR).into_iter().nth(index))
}

fn render_selection(cards: &[Element], selected: Option<usize>) {
    for (index, card) in cards.iter().enumerate() {
        let classes = card.class_list();
        let _ = if Some(index) == selected {
            classes.add_1(SELECTED)
        } else {
            classes.remove_1(SELECTED)
        };
    }
}

pub fn bind() -> AddressSelection {
    dom::on_click("addMemberAddressBtn", add_address);

    let cards = dom::query_all(CARD_SELECTOR);
    let initial = cards.iter().position(|card| card.class_list().contains(SELECTED));
    let selection: AddressSelection = Rc::new(Cell::new(initial));

    let model = selection.clone();
    dom::on_delegated("click", CARD_SELECTOR, move |clicked| {
        let cards = dom::query_all(CARD_SELECTOR);
        let index = cards.iter().position(|card| *card == clicked);
        model.set(index);
        render_selection(&cards, index);
        Ok(())
    });
    selection
}
