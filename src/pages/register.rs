use web_sys::HtmlElement;

use crate::dom;
use crate::error::UiResult;
use crate::forms::Registration;

fn register() -> UiResult<()> {
    Registration {
        username: dom::value_by_id("username-input")?,
        password: dom::value_by_id("password-input")?,
        email: dom::value_by_id("email-input")?,
        phone: dom::value_by_id("phone-input")?,
    }
    .validate()?;

    if let Ok(spinner) = dom::by_id::<HtmlElement>("spinner") {
        let _ = spinner.style().set_property("display", "block");
    }
    dom::submit_with_fields("register-form", &[])
}

pub fn bind() {
    dom::on_click("register-button", register);
}
