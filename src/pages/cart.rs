//! Cart page: checkout validation and per-line quantity steppers.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::cart::{Proposal, QuantityStepper};
use crate::commands::{self, QUANTITY_ERROR_MSG};
use crate::config::AppConfig;
use crate::dom;
use crate::error::UiResult;
use crate::forms::{Checkout, PaymentForm};
use crate::pages::address::{self, AddressSelection};

const QUANTITY_INPUTS: &str = "#form1, input.cart-quantity";

fn read_payment() -> UiResult<PaymentForm> {
    Ok(PaymentForm {
        card_number: dom::value_by_id("cardNumber")?,
        card_holder: dom::value_by_id("cardHolderName")?,
        exp_month: dom::value_by_id("typeExpMM")?,
        exp_year: dom::value_by_id("typeExpYYYY")?,
        cvv: dom::value_by_id("cvv")?,
    })
}

fn checkout(selection: &AddressSelection) -> UiResult<()> {
    let address = address::selected_card(selection)
        .map(|card| address::read_card(&card))
        .transpose()?;
    let checkout = Checkout {
        payment: read_payment()?,
        address,
    };
    if let Err(errors) = checkout.validate() {
        for err in &errors {
            dom::report(err);
        }
        return Ok(());
    }
    dom::submit_with_fields("checkoutForm", &checkout.fields())
}

fn on_quantity_change(
    input: &HtmlInputElement,
    stepper: &Rc<RefCell<QuantityStepper>>,
    config: &AppConfig,
) {
    let proposal = stepper.borrow().propose(&input.value());
    let (change, new_quantity) = match proposal {
        Proposal::Revert(value) => {
            input.set_value(&value.to_string());
            return;
        }
        Proposal::Send { change, new_quantity } => (change, new_quantity),
    };

    let input = input.clone();
    let stepper = stepper.clone();
    let endpoint = config.edit_cart_endpoint.clone();
    let cart_page = config.cart_page.clone();
    wasm_bindgen_futures::spawn_local(async move {
        match commands::edit_cart_product(&endpoint, &change).await {
            Ok(()) => {
                stepper.borrow_mut().commit(new_quantity);
                if let Err(err) = dom::navigate(&cart_page) {
                    dom::report(&err);
                }
            }
            Err(err) => {
                log::debug!("rolling back product {}: {}", change.product_id, err);
                input.set_value(&stepper.borrow().rollback().to_string());
                dom::alert(QUANTITY_ERROR_MSG);
            }
        }
    });
}

fn bind_steppers(config: &AppConfig) {
    for el in dom::query_all(QUANTITY_INPUTS) {
        let Ok(input) = el.dyn_into::<HtmlInputElement>() else {
            continue;
        };
        let (Some(store_id), Some(product_id)) = (
            input.get_attribute("data-store-id"),
            input.get_attribute("data-product-id"),
        ) else {
            log::warn!("cart quantity input without store/product ids");
            continue;
        };
        let baseline = input.value().trim().parse().unwrap_or(0);
        let stepper = Rc::new(RefCell::new(QuantityStepper::new(store_id, product_id, baseline)));

        let target = input.clone();
        let config = config.clone();
        dom::on_element(&input, "change", move || {
            on_quantity_change(&target, &stepper, &config);
            Ok(())
        });
    }
}

pub fn bind(config: &AppConfig, selection: &AddressSelection) {
    let selection = selection.clone();
    dom::on_click("checkoutButton", move || checkout(&selection));
    bind_steppers(config);
}
