use crate::commands;
use crate::dom;
use crate::error::UiResult;
use crate::forms::PasswordChange;

fn change_password() -> UiResult<()> {
    let modal = dom::by_id("changePasswordModal")?;
    let read = |name: &str| -> UiResult<String> {
        dom::value_of(&dom::query_in(&modal, &format!("input[name=\"{}\"]", name))?)
    };
    PasswordChange {
        new_password: read("newPassword")?,
        confirm_password: read("confirmPassword")?,
    }
    .validate()?;

    dom::submit_with_fields("changePassword", &[])?;
    commands::hide_modal("changePasswordModal")
}

pub fn bind() {
    dom::on_click("changePasswordBtn", change_password);
}
