//! Bootstrap Modal Bindings
//!
//! The storefront pages load Bootstrap's bundle; dialogs are opened and
//! closed through its `Modal` class.

use wasm_bindgen::prelude::*;

use crate::dom;
use crate::error::UiResult;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Modal;

    #[wasm_bindgen(catch, static_method_of = Modal, js_namespace = bootstrap, js_name = getOrCreateInstance)]
    fn get_or_create_instance(el: &web_sys::Element) -> Result<Modal, JsValue>;

    #[wasm_bindgen(method)]
    fn show(this: &Modal);

    #[wasm_bindgen(method)]
    fn hide(this: &Modal);
}

pub fn show_modal(id: &str) -> UiResult<()> {
    let el = dom::by_id::<web_sys::Element>(id)?;
    Modal::get_or_create_instance(&el)?.show();
    Ok(())
}

pub fn hide_modal(id: &str) -> UiResult<()> {
    let el = dom::by_id::<web_sys::Element>(id)?;
    Modal::get_or_create_instance(&el)?.hide();
    Ok(())
}
