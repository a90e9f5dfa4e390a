//! Page Bindings
//!
//! Attach view-models to the server-rendered markup. Every binder looks up
//! its own anchors and does nothing on pages that lack them, so one bundle
//! serves the whole storefront.

mod address;
mod cart;
mod discounts;
mod history;
mod product;
mod profile;
mod purchase_rules;
mod register;
mod selections;

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::config::AppConfig;
use crate::dom;

fn widen_tables() {
    for table in dom::query_all(".double-width-table") {
        if let Ok(table) = table.dyn_into::<HtmlElement>() {
            let _ = table.style().set_property("width", "200%");
        }
    }
}

pub fn bind_all(config: &AppConfig) {
    widen_tables();

    let mut registry = selections::SelectionRegistry::default();
    selections::bind(&mut registry);
    discounts::bind(&mut registry);
    purchase_rules::bind();

    let addresses = address::bind();
    cart::bind(config, &addresses);
    profile::bind();
    register::bind();
    history::bind();
    product::bind();
}
