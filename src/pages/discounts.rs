//! Or / And / If-Then discount rule dialogs.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlSelectElement};

use crate::discount_rule::{field, prune_selector, RuleDraft, RuleKind};
use crate::dom;
use crate::error::UiResult;
use crate::pages::selections::SelectionRegistry;
use crate::selection::SelectionGroup;

const DISCOUNT_GROUP: &str = "selectedDiscounts";

fn trimmed(modal: &Element, name: &str) -> UiResult<String> {
    let input = dom::query_in(modal, &format!("input[name=\"{}\"]", name))?;
    Ok(dom::value_of(&input)?.trim().to_string())
}

/// `None` when the select is absent or nothing is selected
fn selected_category(modal: &Element) -> UiResult<Option<String>> {
    let select = modal
        .query_selector(&format!("select[name=\"{}\"]", field::CATEGORY))?
        .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok());
    Ok(select
        .filter(|s| s.selected_index() >= 0)
        .map(|s| s.value().trim().to_string()))
}

fn read_draft(modal: &Element) -> UiResult<RuleDraft> {
    Ok(RuleDraft {
        category: selected_category(modal)?,
        category_quantity: trimmed(modal, field::CATEGORY_QUANTITY)?,
        product_id: trimmed(modal, field::PRODUCT_ID)?,
        product_quantity: trimmed(modal, field::PRODUCT_QUANTITY)?,
        basket_price: trimmed(modal, field::BASKET_PRICE)?,
    })
}

fn submit_rule(kind: RuleKind, discounts: &SelectionGroup) -> UiResult<()> {
    let modal = dom::by_id::<Element>(kind.modal_id())?;
    let draft = read_draft(&modal)?;
    let plan = draft.plan(kind, discounts)?;

    for name in &plan.remove {
        for el in dom::query_all_in(&modal, &prune_selector(name)) {
            el.remove();
        }
    }
    dom::submit_with_fields(kind.form_id(), &plan.fields)
}

pub fn bind(registry: &mut SelectionRegistry) {
    for kind in RuleKind::ALL {
        if dom::find_by_id(kind.button_id()).is_none() {
            continue;
        }
        let discounts = registry.group(DISCOUNT_GROUP);
        dom::on_click(kind.button_id(), move || submit_rule(kind, &discounts.borrow()));
    }
}
