//! Market Frontend App
//!
//! Mounts the notification toasts and binds every page handler.

use leptos::prelude::*;
use leptos_toast::{create_toast_signal, show_toast};

use crate::commands;
use crate::components::ToastHost;
use crate::config::AppConfig;
use crate::dom;
use crate::models::Notification;
use crate::pages;

fn mount_notifications(config: &AppConfig) {
    let url = config.websocket_url();
    let dismiss_ms = config.toast_dismiss_ms;

    mount_to_body(move || {
        let toasts = create_toast_signal::<Notification>();
        let connected = commands::connect(&url, move |notification| {
            log::debug!("notification from {}", notification.sender);
            show_toast(toasts, notification, dismiss_ms);
        });
        if let Err(err) = connected {
            dom::report(&err);
        }
        view! { <ToastHost toasts=toasts /> }
    });
}

pub fn start(config: AppConfig) {
    mount_notifications(&config);
    pages::bind_all(&config);
    log::info!("page bindings ready");
}
