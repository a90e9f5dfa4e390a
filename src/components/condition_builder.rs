//! Condition Builder Component
//!
//! Editable list of purchase-rule condition rows for one rule group.
//! The rows live in a `ConditionGroup` signal; the DOM only renders it.

use leptos::prelude::*;

use crate::conditions::{ConditionGroup, ConditionKind, RowKey};
use crate::dom;

/// Rows of one rule group plus an "add" button
///
/// `show_add` is false when the page already has its own add button bound
/// to the same group.
#[component]
pub fn ConditionBuilder(group: RwSignal<ConditionGroup>, show_add: bool) -> impl IntoView {
    let add_row = move |_| {
        let mut added = Ok(0);
        group.update(|g| added = g.add());
        if let Err(err) = added {
            dom::report(&err);
        }
    };

    view! {
        <div class="condition-builder">
            <For
                each=move || group.with(|g| g.rows().iter().map(|r| r.key).collect::<Vec<_>>())
                key=|row_key| *row_key
                children=move |row_key| view! { <ConditionRowView group=group row_key=row_key /> }
            />
            <Show when=move || show_add>
                <button type="button" class="btn btn-outline-secondary btn-sm add-condition-btn" on:click=add_row>
                    "Add Condition"
                </button>
            </Show>
        </div>
    }
}

/// One row: kind select, kind-dependent parameter inputs, remove button
#[component]
fn ConditionRowView(group: RwSignal<ConditionGroup>, row_key: RowKey) -> impl IntoView {
    let class = group.with_untracked(|g| g.kind().css_class());

    // Memo so typing into a parameter does not rebuild the inputs
    let kind = Memo::new(move |_| {
        group.with(|g| {
            g.rows()
                .iter()
                .find(|r| r.key == row_key)
                .map(|r| r.kind())
                .unwrap_or_default()
        })
    });
    let is_first = Memo::new(move |_| group.with(|g| g.rows().first().map(|r| r.key) == Some(row_key)));

    let on_kind_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        match ConditionKind::from_str(&value) {
            Some(new_kind) => group.update(|g| g.set_kind(row_key, new_kind)),
            None => log::warn!("unknown condition kind {:?}", value),
        }
    };

    view! {
        <Show when=move || !is_first.get()>
            <hr />
        </Show>
        <div class=class>
            <label>"Select Condition:"</label>
            <select
                class=format!("{}-select form-select", class)
                name=format!("{}[]", class)
                prop:value=move || kind.get().as_str()
                on:change=on_kind_change
            >
                {ConditionKind::ALL.iter().map(|k| view! {
                    <option value=k.as_str()>{k.label()}</option>
                }).collect_view()}
            </select>
            <div class="parameters">
                {move || {
                    kind.get().params().iter().enumerate().map(|(index, param)| view! {
                        <input
                            type=param.input_type
                            name=param.name
                            placeholder=param.placeholder
                            class="form-control"
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                group.update(|g| g.set_value(row_key, index, value));
                            }
                        />
                    }).collect_view()
                }}
            </div>
            <button
                type="button"
                class=format!("btn btn-sm btn-outline-danger remove-{}-btn", class)
                on:click=move |_| group.update(|g| {
                    g.remove(row_key);
                })
            >
                "Remove"
            </button>
        </div>
    }
}
