//! Field Validators
//!
//! Stateless predicates for the storefront's text fields.
//! Each returns the user-facing message on failure.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{UiError, UiResult};

fn pattern(re: &str) -> Regex {
    Regex::new(re).unwrap_or_else(|e| panic!("invalid built-in pattern {re}: {e}"))
}

static FULL_NAME: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[a-zA-Z]+(\s[a-zA-Z]+){1,3}$"));
static PLACE_NAME: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[a-zA-Z\s]+$"));
static STREET: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[a-zA-Z0-9\s]+$"));
static PHONE: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[0-9]{10}$"));
static ZIP: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[0-9]{7}$"));
static CARD_NUMBER: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[0-9]{16}$"));
static EXPIRATION: LazyLock<Regex> = LazyLock::new(|| pattern(r"^(0[1-9]|1[0-2])/[0-9]{4}$"));
static CVV: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[0-9]{3}$"));
static USERNAME: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[a-zA-Z0-9._-]{3,20}$"));
static PASSWORD: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[A-Za-z0-9]{8,}$"));
static EMAIL: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+$"));
static INTERNATIONAL_PHONE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^(\+[0-9]{1,3}[- ]?)?[0-9]{10}$"));

pub const FULL_NAME_MSG: &str = "Please enter a valid full name (both first name and last name separated by a space, only alphabetic characters are allowed).";
pub const CARD_HOLDER_MSG: &str = "Please enter a valid cardholder name (First Name + Last Name)";
pub const CITY_MSG: &str = "Please enter a valid city name (only alphabetic characters are allowed).";
pub const COUNTRY_MSG: &str = "Please enter a valid country name (only alphabetic characters are allowed).";
pub const STREET_MSG: &str = "Please enter a valid street address (only alphabetic characters, digits, and spaces are allowed).";
pub const PHONE_MSG: &str = "Please enter a valid phone number (10 digits).";
pub const ZIP_MSG: &str = "Please enter a valid zip code (7 digits).";
pub const CARD_NUMBER_MSG: &str = "Please enter a valid 16-digit card number";
pub const EXPIRATION_MSG: &str = "Please enter a valid expiration date (MM/YYYY)";
pub const CVV_MSG: &str = "Please enter a valid 3-digit CVV";
pub const USERNAME_MSG: &str = "Username must be alphanumeric and have 3-20 characters";
pub const PASSWORD_MSG: &str = "Password must contain at least 8 characters, including at least one letter and one digit";
pub const EMAIL_MSG: &str = "Invalid email format";
pub const INTERNATIONAL_PHONE_MSG: &str = "Invalid phone number format";

fn check(re: &Regex, value: &str, msg: &str) -> UiResult<()> {
    if re.is_match(value) {
        Ok(())
    } else {
        Err(UiError::validation(msg))
    }
}

/// 2-4 space-separated alphabetic words
pub fn full_name(value: &str) -> UiResult<()> {
    check(&FULL_NAME, value, FULL_NAME_MSG)
}

/// Same shape as [`full_name`], reported against the payment card
pub fn card_holder(value: &str) -> UiResult<()> {
    check(&FULL_NAME, value, CARD_HOLDER_MSG)
}

pub fn city(value: &str) -> UiResult<()> {
    check(&PLACE_NAME, value, CITY_MSG)
}

pub fn country(value: &str) -> UiResult<()> {
    check(&PLACE_NAME, value, COUNTRY_MSG)
}

pub fn street(value: &str) -> UiResult<()> {
    check(&STREET, value, STREET_MSG)
}

/// Exactly 10 digits, no country code
pub fn phone(value: &str) -> UiResult<()> {
    check(&PHONE, value, PHONE_MSG)
}

pub fn zip(value: &str) -> UiResult<()> {
    check(&ZIP, value, ZIP_MSG)
}

pub fn card_number(value: &str) -> UiResult<()> {
    check(&CARD_NUMBER, value, CARD_NUMBER_MSG)
}

/// `MM/YYYY` with month 01-12
pub fn expiration(value: &str) -> UiResult<()> {
    check(&EXPIRATION, value, EXPIRATION_MSG)
}

pub fn cvv(value: &str) -> UiResult<()> {
    check(&CVV, value, CVV_MSG)
}

pub fn username(value: &str) -> UiResult<()> {
    check(&USERNAME, value, USERNAME_MSG)
}

/// At least 8 letters/digits with one of each
pub fn password(value: &str) -> UiResult<()> {
    let has_letter = value.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    if PASSWORD.is_match(value) && has_letter && has_digit {
        Ok(())
    } else {
        Err(UiError::validation(PASSWORD_MSG))
    }
}

/// Local part and domain only; the TLD shape is not enforced
pub fn email(value: &str) -> UiResult<()> {
    check(&EMAIL, value, EMAIL_MSG)
}

/// 10 digits with an optional `+` country code of 1-3 digits
pub fn international_phone(value: &str) -> UiResult<()> {
    check(&INTERNATIONAL_PHONE, value, INTERNATIONAL_PHONE_MSG)
}
