//! Notification toasts, stacked right to left along the bottom edge.

use leptos::prelude::*;
use leptos_toast::{dismiss_toast, ToastSignal};

use crate::models::Notification;
use crate::notification::ToastCard;

#[component]
pub fn ToastHost(toasts: ToastSignal<Notification>) -> impl IntoView {
    view! {
        <For
            each=move || toasts.with(|stack| stack.layout())
            // offset in the key: a toast that changes slot is re-rendered in place
            key=|(toast, offset)| (toast.id, *offset)
            children=move |(toast, offset)| {
                let id = toast.id;
                let card = ToastCard::from(&toast.payload);
                view! {
                    <div
                        class="toast-container position-fixed bottom-0 end-0 p-3"
                        style=format!("margin-right: {}px", offset)
                    >
                        <div class="toast show" role="alert" aria-live="assertive" aria-atomic="true">
                            <div class="toast-header">
                                <strong class="me-auto">{card.title}</strong>
                                <small class="text-body-secondary">{card.time}</small>
                                <button
                                    type="button"
                                    class="btn-close"
                                    aria-label="Close"
                                    on:click=move |_| dismiss_toast(toasts, id)
                                ></button>
                            </div>
                            <div class="toast-body">{card.body}</div>
                        </div>
                    </div>
                }
            }
        />
    }
}
