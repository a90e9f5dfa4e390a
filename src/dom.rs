//! DOM Helpers
//!
//! Thin web-sys wrappers shared by the page bindings: element lookup,
//! event binding, hidden-field submission and user alerts.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement, NodeList};

use crate::error::{UiError, UiResult};
use crate::forms::FormField;

pub fn document() -> UiResult<Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| UiError::dom("no document"))
}

/// Element by id, if the current page has it
pub fn find_by_id(id: &str) -> Option<Element> {
    document().ok()?.get_element_by_id(id)
}

pub fn by_id<T: JsCast>(id: &str) -> UiResult<T> {
    find_by_id(id)
        .ok_or_else(|| UiError::dom(format!("missing #{}", id)))?
        .dyn_into::<T>()
        .map_err(|_| UiError::dom(format!("#{} has unexpected element type", id)))
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// All matches in the document, in document order
pub fn query_all(selector: &str) -> Vec<Element> {
    document()
        .and_then(|doc| Ok(doc.query_selector_all(selector)?))
        .map(elements)
        .unwrap_or_default()
}

/// All matches below `root`, in document order
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

pub fn query_in(root: &Element, selector: &str) -> UiResult<Element> {
    root.query_selector(selector)?
        .ok_or_else(|| UiError::dom(format!("missing {} in #{}", selector, root.id())))
}

/// Every input sharing a `name`, in document order
pub fn inputs_named(name: &str) -> Vec<HtmlInputElement> {
    document()
        .map(|doc| elements(doc.get_elements_by_name(name)))
        .unwrap_or_default()
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlInputElement>().ok())
        .collect()
}

/// Current value of an `<input>` or `<select>`
pub fn value_of(el: &Element) -> UiResult<String> {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return Ok(input.value());
    }
    if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        return Ok(select.value());
    }
    Err(UiError::dom(format!("<{}> has no value", el.tag_name().to_lowercase())))
}

pub fn value_by_id(id: &str) -> UiResult<String> {
    value_of(&by_id::<Element>(id)?)
}

pub fn text_of(el: &Element) -> String {
    el.text_content().unwrap_or_default()
}

pub fn set_visible(el: &HtmlElement, visible: bool) {
    let _ = el.style().set_property("display", if visible { "" } else { "none" });
}

pub fn alert(msg: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(msg);
    }
}

pub fn confirm(msg: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(msg).ok())
        .unwrap_or(false)
}

pub fn navigate(url: &str) -> UiResult<()> {
    let win = web_sys::window().ok_or_else(|| UiError::dom("no window"))?;
    win.location().set_href(url)?;
    Ok(())
}

/// Alert user-correctable failures, log the rest
pub fn report(err: &UiError) {
    if err.is_user_facing() {
        log::debug!("{}", err);
        alert(err.message());
    } else {
        log::error!("{}", err);
    }
}

/// Append hidden inputs to a form
pub fn append_hidden(form: &HtmlFormElement, fields: &[FormField]) -> UiResult<()> {
    let doc = document()?;
    for field in fields {
        let input = doc.create_element("input")?;
        input.set_attribute("type", "hidden")?;
        input.set_attribute("name", &field.name)?;
        input.set_attribute("value", &field.value)?;
        form.append_child(&input)?;
    }
    Ok(())
}

/// Append hidden inputs and submit (full page navigation)
pub fn submit_with_fields(form_id: &str, fields: &[FormField]) -> UiResult<()> {
    let form = by_id::<HtmlFormElement>(form_id)?;
    append_hidden(&form, fields)?;
    log::debug!("submitting #{} with {} hidden fields", form_id, fields.len());
    form.submit()?;
    Ok(())
}

/// Events whose default browser action can be cancelled
pub trait CancelDefault {
    fn cancel_default(&self);
}

impl CancelDefault for Event {
    fn cancel_default(&self) {
        self.prevent_default();
    }
}

/// Cancel the default action, then run the handler. Every successful
/// handler submits or navigates itself, so a submit-type button never
/// posts its form behind the handler's back.
pub fn run_click<E, F>(ev: &E, handler: &F) -> UiResult<()>
where
    E: CancelDefault,
    F: Fn() -> UiResult<()>,
{
    ev.cancel_default();
    handler()
}

/// Run `handler` on clicks of `#id`; failures are reported.
/// Returns false when the page has no such element.
pub fn on_click<F>(id: &str, handler: F) -> bool
where
    F: Fn() -> UiResult<()> + 'static,
{
    let Some(el) = find_by_id(id) else {
        return false;
    };
    let cb = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        if let Err(err) = run_click(&ev, &handler) {
            report(&err);
        }
    });
    let bound = el
        .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        .is_ok();
    cb.forget();
    bound
}

/// Document-level listener for `event` on elements matching `selector`,
/// including ones rendered after binding. The handler gets the matched element.
pub fn on_delegated<F>(event: &str, selector: &str, handler: F)
where
    F: Fn(Element) -> UiResult<()> + 'static,
{
    let Ok(doc) = document() else {
        return;
    };
    let selector = selector.to_string();
    let cb = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        let matched = ev
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(&selector).ok().flatten());
        if let Some(el) = matched {
            if let Err(err) = handler(el) {
                report(&err);
            }
        }
    });
    let _ = doc.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
    cb.forget();
}

/// Listener on one element
pub fn on_element<F>(el: &Element, event: &str, handler: F)
where
    F: Fn() -> UiResult<()> + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(move |_ev: Event| {
        if let Err(err) = handler() {
            report(&err);
        }
    });
    let _ = el.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
    cb.forget();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct FakeClick {
        cancelled: Cell<bool>,
    }

    impl CancelDefault for FakeClick {
        fn cancel_default(&self) {
            self.cancelled.set(true);
        }
    }

    #[test]
    fn test_failed_handler_cancels_default_submit() {
        let click = FakeClick::default();
        let result = run_click(&click, &|| Err(UiError::validation("Invalid email format")));
        assert_eq!(result, Err(UiError::validation("Invalid email format")));
        assert!(click.cancelled.get());
    }

    #[test]
    fn test_successful_handler_also_cancels_default() {
        let click = FakeClick::default();
        let ran = Cell::new(false);
        let result = run_click(&click, &|| {
            ran.set(true);
            Ok(())
        });
        assert!(result.is_ok());
        assert!(ran.get());
        assert!(click.cancelled.get());
    }
}
