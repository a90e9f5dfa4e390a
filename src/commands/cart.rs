//! Cart Commands
//!
//! The one asynchronous request this frontend makes.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, RequestInit, Response};

use crate::cart::QuantityChange;
use crate::error::{UiError, UiResult};

pub const QUANTITY_ERROR_MSG: &str = "Error in changing the quantity!";

/// Characters left bare in `application/x-www-form-urlencoded` values
const FORM_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'*');

pub fn encode_form(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                utf8_percent_encode(k, FORM_VALUE),
                utf8_percent_encode(v, FORM_VALUE)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn transport(detail: impl std::fmt::Display) -> UiError {
    log::warn!("cart update failed: {}", detail);
    UiError::Transport(QUANTITY_ERROR_MSG.to_string())
}

/// `POST {endpoint}` with the quantity delta. Any non-2xx answer is a failure.
pub async fn edit_cart_product(endpoint: &str, change: &QuantityChange) -> UiResult<()> {
    let window = web_sys::window().ok_or_else(|| UiError::dom("no window"))?;

    let headers = Headers::new()?;
    headers.set("Content-Type", "application/x-www-form-urlencoded")?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&encode_form(&change.form_pairs())));

    let response = JsFuture::from(window.fetch_with_str_and_init(endpoint, &init))
        .await
        .map_err(|e| transport(format!("{:?}", e)))?;
    let response: Response = response.dyn_into()?;
    if !response.ok() {
        return Err(transport(format!("HTTP {}", response.status())));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_form() {
        let pairs = [
            ("storeId", "3".to_string()),
            ("productId", "a b&c".to_string()),
            ("quantity", "-2".to_string()),
        ];
        assert_eq!(encode_form(&pairs), "storeId=3&productId=a%20b%26c&quantity=-2");
    }
}
