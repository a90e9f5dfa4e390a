//! Notification Socket
//!
//! Receive-only WebSocket carrying one JSON notification per text frame.
//! No reconnect: a closed socket stays closed until the next page load.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CloseEvent, Event, MessageEvent, WebSocket};

use crate::error::UiResult;
use crate::models::Notification;

pub fn connect<F>(url: &str, on_notification: F) -> UiResult<WebSocket>
where
    F: Fn(Notification) + 'static,
{
    let socket = WebSocket::new(url)?;

    let onmessage = Closure::<dyn FnMut(MessageEvent)>::new(move |ev: MessageEvent| {
        let Some(frame) = ev.data().as_string() else {
            log::warn!("ignoring non-text frame");
            return;
        };
        match Notification::from_frame(&frame) {
            Ok(notification) => on_notification(notification),
            Err(e) => log::error!("malformed notification {:?}: {}", frame, e),
        }
    });
    socket.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
    onmessage.forget();

    let onclose = Closure::<dyn FnMut(CloseEvent)>::new(move |ev: CloseEvent| {
        log::warn!("socket closed (code {})", ev.code());
    });
    socket.set_onclose(Some(onclose.as_ref().unchecked_ref()));
    onclose.forget();

    let onerror = Closure::<dyn FnMut(Event)>::new(move |_ev: Event| {
        log::error!("socket error");
    });
    socket.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();

    log::info!("listening on {}", url);
    Ok(socket)
}
