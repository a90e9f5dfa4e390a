//! Purchase rule builders: one [`ConditionBuilder`] per rule container.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::components::ConditionBuilder;
use crate::conditions::{ConditionGroup, GroupKind};
use crate::dom;

pub fn bind() {
    for kind in GroupKind::ALL {
        let Some(container) = dom::find_by_id(kind.container_id()) else {
            continue;
        };
        let Ok(container) = container.dyn_into::<HtmlElement>() else {
            log::warn!("#{} is not an HTML element", kind.container_id());
            continue;
        };
        leptos::mount::mount_to(container, move || mount_group(kind)).forget();
        log::debug!("condition builder mounted in #{}", kind.container_id());
    }
}

fn mount_group(kind: GroupKind) -> impl IntoView {
    let group = RwSignal::new(ConditionGroup::seeded(kind));

    dom::on_click(kind.open_button_id(), move || {
        group.update(ConditionGroup::reseed);
        Ok(())
    });
    let page_add_button = dom::on_click(kind.add_button_id(), move || {
        let mut added = Ok(0);
        group.update(|g| added = g.add());
        added.map(|_| ())
    });
    dom::on_click(kind.submit_button_id(), move || {
        let fields = group.with_untracked(|g| g.fields());
        dom::submit_with_fields(kind.form_id(), &fields)
    });

    let show_add = !page_add_button;
    view! { <ConditionBuilder group=group show_add=show_add /> }
}
