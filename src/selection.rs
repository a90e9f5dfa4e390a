//! Selection-Gated Actions
//!
//! A checkbox/radio group is mirrored into a [`SelectionGroup`] view-model.
//! An [`ActionSpec`] checks how many items are selected and turns the
//! selection into hidden fields for its target form.

use crate::error::{UiError, UiResult};
use crate::forms::FormField;

/// One checkbox or radio in a group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    /// `data-store-id` of the input, when present
    pub store_id: Option<String>,
    pub checked: bool,
}

impl Choice {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            store_id: None,
            checked: false,
        }
    }

    pub fn with_store(mut self, store_id: impl Into<String>) -> Self {
        self.store_id = Some(store_id.into());
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
}

/// In-memory state of all inputs sharing one `name`, in DOM order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionGroup {
    pub name: String,
    pub radio: bool,
    choices: Vec<Choice>,
}

impl SelectionGroup {
    pub fn new(name: impl Into<String>, radio: bool, choices: Vec<Choice>) -> Self {
        Self {
            name: name.into(),
            radio,
            choices,
        }
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Record a change event for the input at `index`
    pub fn set_checked(&mut self, index: usize, checked: bool) {
        if index >= self.choices.len() {
            return;
        }
        if self.radio && checked {
            for choice in &mut self.choices {
                choice.checked = false;
            }
        }
        self.choices[index].checked = checked;
    }

    /// Checked choices in DOM order
    pub fn checked(&self) -> Vec<&Choice> {
        self.choices.iter().filter(|c| c.checked).collect()
    }
}

/// Required number of selected items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    Any,
    Exactly(usize),
    AtLeast(usize),
}

impl Cardinality {
    pub fn admits(&self, count: usize) -> bool {
        match *self {
            Cardinality::Any => true,
            Cardinality::Exactly(n) => count == n,
            Cardinality::AtLeast(n) => count >= n,
        }
    }
}

/// How selected ids become hidden fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLayout {
    /// First id under one name
    Single(&'static str),
    /// First and second id under two names
    Pair(&'static str, &'static str),
    /// All ids comma-joined into one field
    Joined(&'static str),
    /// One field per id
    Each(&'static str),
    /// First id plus its `data-store-id`
    WithStore { id: &'static str, store: &'static str },
    /// No fields
    Nothing,
}

impl FieldLayout {
    pub fn fields(&self, selected: &[&Choice]) -> Vec<FormField> {
        let value = |i: usize| selected.get(i).map(|c| c.value.clone()).unwrap_or_default();
        match *self {
            FieldLayout::Single(name) => vec![FormField::new(name, value(0))],
            FieldLayout::Pair(first, second) => {
                vec![FormField::new(first, value(0)), FormField::new(second, value(1))]
            }
            FieldLayout::Joined(name) => {
                let joined = selected.iter().map(|c| c.value.as_str()).collect::<Vec<_>>().join(",");
                vec![FormField::new(name, joined)]
            }
            FieldLayout::Each(name) => selected.iter().map(|c| FormField::new(name, &c.value)).collect(),
            FieldLayout::WithStore { id, store } => {
                let store_id = selected
                    .first()
                    .and_then(|c| c.store_id.clone())
                    .unwrap_or_default();
                vec![FormField::new(id, value(0)), FormField::new(store, store_id)]
            }
            FieldLayout::Nothing => Vec::new(),
        }
    }
}

/// What happens once the gate passes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Append fields to the form and submit it
    Submit(&'static str),
    /// Open a modal dialog
    ShowModal(&'static str),
}

/// A button whose action depends on the selection in one group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionSpec {
    pub button_id: &'static str,
    pub group: &'static str,
    pub cardinality: Cardinality,
    pub message: &'static str,
    pub target: Target,
    pub layout: FieldLayout,
    /// Question the user must confirm before anything happens
    pub confirm: Option<&'static str>,
}

impl ActionSpec {
    /// Gate the selection and lay out the hidden fields
    pub fn dispatch(&self, group: &SelectionGroup) -> UiResult<Vec<FormField>> {
        let selected = group.checked();
        if !self.cardinality.admits(selected.len()) {
            return Err(UiError::selection(self.message));
        }
        Ok(self.layout.fields(&selected))
    }
}

const fn exactly_one(
    button_id: &'static str,
    group: &'static str,
    form_id: &'static str,
    field: &'static str,
    message: &'static str,
) -> ActionSpec {
    ActionSpec {
        button_id,
        group,
        cardinality: Cardinality::Exactly(1),
        message,
        target: Target::Submit(form_id),
        layout: FieldLayout::Single(field),
        confirm: None,
    }
}

const OFFER_MSG: &str = "Must select exactly one offer for accepting";

/// Every selection-gated button on the storefront pages
pub const ACTIONS: &[ActionSpec] = &[
    // Store contracts
    exactly_one(
        "acceptContractBtn",
        "selectedContracts",
        "acceptContractForm",
        "contractId",
        "Must select exactly one contract for accepting",
    ),
    exactly_one(
        "rejectContractBtn",
        "selectedContracts",
        "rejectContractForm",
        "contractId",
        "Must select exactly one contract for rejecting",
    ),
    // Store offers
    exactly_one("acceptOfferBtn", "selectedOffers", "acceptOfferForm", "offerId", OFFER_MSG),
    exactly_one("rejectOfferBtn", "selectedOffers", "rejectOfferForm", "offerId", OFFER_MSG),
    exactly_one("counterofferBtn", "selectedOffers", "counterofferForm", "offerId", OFFER_MSG),
    // Member offers
    ActionSpec {
        button_id: "purchaseOfferBtn",
        group: "selectedOffers",
        cardinality: Cardinality::Exactly(1),
        message: OFFER_MSG,
        target: Target::Submit("purchaseOfferForm"),
        layout: FieldLayout::WithStore { id: "offerId", store: "storeId" },
        confirm: None,
    },
    exactly_one(
        "memberRejectOfferBtn",
        "selectedOffers",
        "memberRejectOfferForm",
        "offerId",
        "Must select exactly one offer for rejecting",
    ),
    // Storage management
    ActionSpec {
        button_id: "editProductModalBtn",
        group: "selectedProducts",
        cardinality: Cardinality::Exactly(1),
        message: "Please select one product to edit.",
        target: Target::ShowModal("editProductModal"),
        layout: FieldLayout::Nothing,
        confirm: None,
    },
    exactly_one(
        "editProductBtn",
        "selectedProducts",
        "editProductForm",
        "productId",
        "Please select one product to edit.",
    ),
    ActionSpec {
        button_id: "removeProductBtn",
        group: "selectedProducts",
        cardinality: Cardinality::Any,
        message: "",
        target: Target::Submit("removeProduct"),
        layout: FieldLayout::Each("productsId"),
        confirm: Some("Are you sure you want to delete this product?"),
    },
    // Discount composition
    ActionSpec {
        button_id: "addXorDiscountRuleFormBtn",
        group: "selectedDiscounts",
        cardinality: Cardinality::Exactly(2),
        message: "Must select 2 discounts for adding xor discount",
        target: Target::Submit("addXorDiscountRuleForm"),
        layout: FieldLayout::Pair("discountId1", "discountId2"),
        confirm: None,
    },
    ActionSpec {
        button_id: "addMaxDiscountRuleFormBtn",
        group: "selectedDiscounts",
        cardinality: Cardinality::AtLeast(2),
        message: "Must select at least 2 discounts for adding max discount",
        target: Target::Submit("addMaxDiscountRuleForm"),
        layout: FieldLayout::Joined("discountIds"),
        confirm: None,
    },
    ActionSpec {
        button_id: "addAddDiscountRuleFormBtn",
        group: "selectedDiscounts",
        cardinality: Cardinality::AtLeast(2),
        message: "Must select at least 2 discounts for adding add discount",
        target: Target::Submit("addAddDiscountRuleForm"),
        layout: FieldLayout::Joined("discountIds"),
        confirm: None,
    },
];

/// Buttons that submit their form unconditionally: (button id, form id)
pub const PLAIN_SUBMITS: &[(&str, &str)] = &[
    ("addNewProductBtn", "addNewProductForm"),
    ("addProductDiscountBtn", "addProductDiscountForm"),
    ("addCategoryDiscountBtn", "addCategoryDiscountForm"),
    ("addStoreDiscountBtn", "addStoreDiscountForm"),
    ("removeDiscountBtn", "removeDiscountForm"),
    ("removePurchaseRuleBtn", "removePurchaseRuleForm"),
];

pub fn find_action(button_id: &str) -> Option<&'static ActionSpec> {
    ACTIONS.iter().find(|a| a.button_id == button_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn discounts(checked: &[bool]) -> SelectionGroup {
        let choices = checked
            .iter()
            .enumerate()
            .map(|(i, c)| Choice::new(format!("d{}", i + 1)).checked(*c))
            .collect();
        SelectionGroup::new("selectedDiscounts", false, choices)
    }

    fn action(id: &str) -> &'static ActionSpec {
        find_action(id).unwrap()
    }

    #[test]
    fn test_cardinality() {
        assert!(Cardinality::Any.admits(0));
        assert!(Cardinality::Exactly(2).admits(2));
        assert!(!Cardinality::Exactly(2).admits(3));
        assert!(Cardinality::AtLeast(2).admits(5));
        assert!(!Cardinality::AtLeast(2).admits(1));
    }

    #[test]
    fn test_xor_needs_exactly_two() {
        let xor = action("addXorDiscountRuleFormBtn");
        for checked in [&[false, false, false][..], &[true, false, false], &[true, true, true]] {
            assert_eq!(
                xor.dispatch(&discounts(checked)),
                Err(UiError::selection("Must select 2 discounts for adding xor discount"))
            );
        }
        let fields = xor.dispatch(&discounts(&[false, true, true])).unwrap();
        assert_eq!(
            fields,
            vec![FormField::new("discountId1", "d2"), FormField::new("discountId2", "d3")]
        );
    }

    #[test]
    fn test_max_joins_ids() {
        let max = action("addMaxDiscountRuleFormBtn");
        assert!(max.dispatch(&discounts(&[true, false])).is_err());
        let fields = max.dispatch(&discounts(&[true, true, false, true])).unwrap();
        assert_eq!(fields, vec![FormField::new("discountIds", "d1,d2,d4")]);
    }

    #[test]
    fn test_radio_group_keeps_one_checked() {
        let mut offers = SelectionGroup::new(
            "selectedOffers",
            true,
            vec![
                Choice::new("7").with_store("3"),
                Choice::new("9").with_store("4"),
            ],
        );
        offers.set_checked(0, true);
        offers.set_checked(1, true);
        assert_eq!(offers.checked().len(), 1);

        let fields = action("purchaseOfferBtn").dispatch(&offers).unwrap();
        assert_eq!(
            fields,
            vec![FormField::new("offerId", "9"), FormField::new("storeId", "4")]
        );
    }

    #[test]
    fn test_checkbox_toggle_and_out_of_range() {
        let mut contracts = SelectionGroup::new(
            "selectedContracts",
            false,
            vec![Choice::new("1"), Choice::new("2")],
        );
        contracts.set_checked(0, true);
        contracts.set_checked(1, true);
        contracts.set_checked(5, true);
        let accept = action("acceptContractBtn");
        assert_eq!(
            accept.dispatch(&contracts),
            Err(UiError::selection("Must select exactly one contract for accepting"))
        );
        contracts.set_checked(0, false);
        assert_eq!(accept.dispatch(&contracts).unwrap(), vec![FormField::new("contractId", "2")]);
    }

    #[test]
    fn test_remove_products_any_count() {
        let remove = action("removeProductBtn");
        assert!(remove.confirm.is_some());
        let products = SelectionGroup::new(
            "selectedProducts",
            false,
            vec![Choice::new("11").checked(true), Choice::new("12"), Choice::new("13").checked(true)],
        );
        assert_eq!(
            remove.dispatch(&products).unwrap(),
            vec![FormField::new("productsId", "11"), FormField::new("productsId", "13")]
        );
        let none = SelectionGroup::new("selectedProducts", false, vec![]);
        assert!(remove.dispatch(&none).unwrap().is_empty());
    }

    #[test]
    fn test_edit_modal_has_no_fields() {
        let open = action("editProductModalBtn");
        assert_eq!(open.target, Target::ShowModal("editProductModal"));
        let products = SelectionGroup::new("selectedProducts", false, vec![Choice::new("5").checked(true)]);
        assert!(open.dispatch(&products).unwrap().is_empty());
    }

    #[test]
    fn test_button_ids_unique() {
        for (i, a) in ACTIONS.iter().enumerate() {
            assert!(ACTIONS[i + 1..].iter().all(|b| b.button_id != a.button_id));
        }
    }
}
