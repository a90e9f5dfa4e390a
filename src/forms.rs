//! Composite Forms
//!
//! Address, payment, registration and password forms built from the
//! field validators, plus the hidden fields a submission carries.

use crate::error::{UiError, UiResult};
use crate::validate;

pub const FILL_ALL_FIELDS_MSG: &str = "Please fill in all the fields.";
pub const SELECT_ADDRESS_MSG: &str = "Please select a delivery address";
pub const PASSWORD_MISMATCH_MSG: &str = "New password and confirm password do not match.";

/// One hidden input appended to a form before it is submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

impl FormField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Delivery address, either typed into the "add address" modal or read
/// back from a selected address card
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressForm {
    pub full_name: String,
    pub street: String,
    pub city: String,
    pub country: String,
    pub zip: String,
    pub phone_number: String,
}

impl AddressForm {
    /// Field names used by the address inputs and the address card's `data-field`s
    pub const FIELDS: [&'static str; 6] = ["fullName", "street", "city", "country", "zip", "phoneNumber"];

    /// Build from values in [`Self::FIELDS`] order
    pub fn from_values(values: [String; 6]) -> Self {
        let [full_name, street, city, country, zip, phone_number] = values;
        Self {
            full_name,
            street,
            city,
            country,
            zip,
            phone_number,
        }
    }

    fn values(&self) -> [&str; 6] {
        [
            &self.full_name,
            &self.street,
            &self.city,
            &self.country,
            &self.zip,
            &self.phone_number,
        ]
    }

    /// First failing check wins
    pub fn validate(&self) -> UiResult<()> {
        if self.values().iter().any(|v| v.is_empty()) {
            return Err(UiError::validation(FILL_ALL_FIELDS_MSG));
        }
        validate::full_name(&self.full_name)?;
        validate::city(&self.city)?;
        validate::country(&self.country)?;
        validate::street(&self.street)?;
        validate::phone(&self.phone_number)?;
        validate::zip(&self.zip)?;
        Ok(())
    }

    pub fn fields(&self) -> Vec<FormField> {
        Self::FIELDS
            .iter()
            .zip(self.values())
            .map(|(name, value)| FormField::new(*name, value))
            .collect()
    }
}

/// Payment card inputs on the checkout page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentForm {
    pub card_number: String,
    pub card_holder: String,
    pub exp_month: String,
    pub exp_year: String,
    pub cvv: String,
}

impl PaymentForm {
    pub fn expiration(&self) -> String {
        format!("{}/{}", self.exp_month, self.exp_year)
    }

    /// Every failing check, in display order
    pub fn errors(&self) -> Vec<UiError> {
        [
            validate::card_number(&self.card_number),
            validate::card_holder(&self.card_holder),
            validate::expiration(&self.expiration()),
            validate::cvv(&self.cvv),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect()
    }
}

/// Checkout submission: card details plus the selected address card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkout {
    pub payment: PaymentForm,
    pub address: Option<AddressForm>,
}

impl Checkout {
    /// All problems at once, so the user can fix them in one go
    pub fn validate(&self) -> Result<(), Vec<UiError>> {
        let mut errors = self.payment.errors();
        if self.address.is_none() {
            errors.push(UiError::validation(SELECT_ADDRESS_MSG));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Hidden fields for `#checkoutForm`
    pub fn fields(&self) -> Vec<FormField> {
        let mut fields = self
            .address
            .as_ref()
            .map(AddressForm::fields)
            .unwrap_or_default();
        fields.push(FormField::new("card_owner", &self.payment.card_holder));
        fields.push(FormField::new("card_number", &self.payment.card_number));
        fields.push(FormField::new("expiry_date", self.payment.expiration()));
        fields.push(FormField::new("cvv", &self.payment.cvv));
        fields
    }
}

/// Sign-up form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub email: String,
    pub phone: String,
}

impl Registration {
    pub fn validate(&self) -> UiResult<()> {
        validate::username(&self.username)?;
        validate::password(&self.password)?;
        validate::email(&self.email)?;
        validate::international_phone(&self.phone)?;
        Ok(())
    }
}

/// Profile "change password" modal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordChange {
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordChange {
    pub fn validate(&self) -> UiResult<()> {
        if self.new_password == self.confirm_password {
            Ok(())
        } else {
            Err(UiError::validation(PASSWORD_MISMATCH_MSG))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{CARD_NUMBER_MSG, CVV_MSG, FULL_NAME_MSG, PHONE_MSG, USERNAME_MSG};

    fn address() -> AddressForm {
        AddressForm {
            full_name: "Dana Levi".into(),
            street: "Rothschild 5".into(),
            city: "Tel Aviv".into(),
            country: "Israel".into(),
            zip: "6688101".into(),
            phone_number: "0521234567".into(),
        }
    }

    fn payment() -> PaymentForm {
        PaymentForm {
            card_number: "4580123456789012".into(),
            card_holder: "Dana Levi".into(),
            exp_month: "09".into(),
            exp_year: "2029".into(),
            cvv: "321".into(),
        }
    }

    #[test]
    fn test_address_valid() {
        assert!(address().validate().is_ok());
    }

    #[test]
    fn test_address_empty_field_reported_first() {
        let mut a = address();
        a.full_name = "x".into();
        a.zip = String::new();
        assert_eq!(a.validate(), Err(UiError::validation(FILL_ALL_FIELDS_MSG)));
    }

    #[test]
    fn test_address_check_order() {
        let mut a = address();
        a.full_name = "Dana".into();
        a.phone_number = "123".into();
        assert_eq!(a.validate(), Err(UiError::validation(FULL_NAME_MSG)));

        let mut a = address();
        a.phone_number = "123".into();
        assert_eq!(a.validate(), Err(UiError::validation(PHONE_MSG)));
    }

    #[test]
    fn test_address_from_values_roundtrips_field_names() {
        let a = address();
        let values = a.fields().into_iter().map(|f| f.value).collect::<Vec<_>>();
        let rebuilt = AddressForm::from_values(values.try_into().unwrap());
        assert_eq!(rebuilt, a);
    }

    #[test]
    fn test_checkout_collects_every_error() {
        let mut p = payment();
        p.card_number = "1234".into();
        p.cvv = "1".into();
        let checkout = Checkout { payment: p, address: None };
        let errors = checkout.validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                UiError::validation(CARD_NUMBER_MSG),
                UiError::validation(CVV_MSG),
                UiError::validation(SELECT_ADDRESS_MSG),
            ]
        );
    }

    #[test]
    fn test_checkout_fields_order() {
        let checkout = Checkout { payment: payment(), address: Some(address()) };
        assert!(checkout.validate().is_ok());
        let names: Vec<_> = checkout.fields().into_iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec![
                "fullName", "street", "city", "country", "zip", "phoneNumber",
                "card_owner", "card_number", "expiry_date", "cvv",
            ]
        );
        let expiry = checkout.fields().into_iter().find(|f| f.name == "expiry_date").unwrap();
        assert_eq!(expiry.value, "09/2029");
    }

    #[test]
    fn test_registration_first_failure_wins() {
        let reg = Registration {
            username: "x".into(),
            password: "short".into(),
            email: "nope".into(),
            phone: "1".into(),
        };
        assert_eq!(reg.validate(), Err(UiError::validation(USERNAME_MSG)));

        let reg = Registration {
            username: "dana_l".into(),
            password: "secret123".into(),
            email: "dana@shop.io".into(),
            phone: "+972 0521234567".into(),
        };
        assert!(reg.validate().is_ok());
    }

    #[test]
    fn test_password_change_must_match() {
        let ok = PasswordChange { new_password: "abc12345".into(), confirm_password: "abc12345".into() };
        assert!(ok.validate().is_ok());
        let bad = PasswordChange { new_password: "abc12345".into(), confirm_password: "abc1234".into() };
        assert_eq!(bad.validate(), Err(UiError::validation(PASSWORD_MISMATCH_MSG)));
    }
}
