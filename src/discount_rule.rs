//! Conditional Discount Rules
//!
//! Or / And / If-Then discount rules wrap exactly one existing discount and
//! carry optional conditions that must be filled in pairs.

use crate::error::{UiError, UiResult};
use crate::forms::FormField;
use crate::selection::{Cardinality, SelectionGroup};

pub const CATEGORY_PAIR_MSG: &str = "Must enter Category and quantity together!";
pub const PRODUCT_PAIR_MSG: &str = "Must enter product id and quantity together!";
pub const ONE_CONDITION_MSG: &str = "If then discount must have exactly one condition only!";

/// Names of the optional inputs inside a rule modal
pub mod field {
    pub const CATEGORY: &str = "category";
    pub const CATEGORY_QUANTITY: &str = "MinimumCategoryQuantity";
    pub const PRODUCT_ID: &str = "MinimumProductId";
    pub const PRODUCT_QUANTITY: &str = "MinimumProductQuantity";
    pub const BASKET_PRICE: &str = "MinimumBasketPrice";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Or,
    And,
    IfThen,
}

impl RuleKind {
    pub const ALL: [RuleKind; 3] = [RuleKind::Or, RuleKind::And, RuleKind::IfThen];

    pub fn button_id(&self) -> &'static str {
        match self {
            RuleKind::Or => "addOrDiscountRuleFormBtn",
            RuleKind::And => "addAndDiscountRuleFormBtn",
            RuleKind::IfThen => "addIfThenDiscountRuleFormBtn",
        }
    }

    pub fn modal_id(&self) -> &'static str {
        match self {
            RuleKind::Or => "addOrDiscountRuleModal",
            RuleKind::And => "addAndDiscountRuleModal",
            RuleKind::IfThen => "addIfThenDiscountRuleModal",
        }
    }

    pub fn form_id(&self) -> &'static str {
        match self {
            RuleKind::Or => "addOrDiscountRuleForm",
            RuleKind::And => "addAndDiscountRuleForm",
            RuleKind::IfThen => "addIfThenDiscountRuleForm",
        }
    }

    fn selection_message(&self) -> &'static str {
        match self {
            RuleKind::Or => "Must select exactly one discount for adding or discount",
            RuleKind::And => "Must select exactly one discount for adding and discount",
            RuleKind::IfThen => "Must select exactly one discount for adding if then discount",
        }
    }
}

/// Selector for the control a pruned name refers to: the category
/// `<select>`, every other name an `<input>`
pub fn prune_selector(name: &str) -> String {
    let tag = if name == field::CATEGORY { "select" } else { "input" };
    format!("{}[name=\"{}\"]", tag, name)
}

/// Values of a rule modal's optional inputs, trimmed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleDraft {
    /// `None` when the category select has no selection
    pub category: Option<String>,
    pub category_quantity: String,
    pub product_id: String,
    pub product_quantity: String,
    pub basket_price: String,
}

/// What to do with the form once the draft passes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulePlan {
    /// Inputs to drop so the server never sees blank parameters
    pub remove: Vec<&'static str>,
    pub fields: Vec<FormField>,
}

impl RuleDraft {
    pub fn plan(&self, kind: RuleKind, discounts: &SelectionGroup) -> UiResult<RulePlan> {
        let selected = discounts.checked();
        if !Cardinality::Exactly(1).admits(selected.len()) {
            return Err(UiError::selection(kind.selection_message()));
        }

        let has_category = self.category.as_deref().is_some_and(|c| !c.is_empty());
        let has_category_qty = !self.category_quantity.is_empty();
        let has_product = !self.product_id.is_empty();
        let has_product_qty = !self.product_quantity.is_empty();
        let has_basket = !self.basket_price.is_empty();

        if has_category != has_category_qty {
            return Err(UiError::validation(CATEGORY_PAIR_MSG));
        }
        if has_product != has_product_qty {
            return Err(UiError::validation(PRODUCT_PAIR_MSG));
        }
        if kind == RuleKind::IfThen {
            let conditions = [has_basket, has_product_qty, has_category_qty]
                .iter()
                .filter(|set| **set)
                .count();
            if conditions != 1 {
                return Err(UiError::validation(ONE_CONDITION_MSG));
            }
        }

        let mut remove = Vec::new();
        if !has_basket {
            remove.push(field::BASKET_PRICE);
        }
        if !has_product && !has_product_qty {
            remove.push(field::PRODUCT_QUANTITY);
            remove.push(field::PRODUCT_ID);
        }
        if !has_category_qty {
            remove.push(field::CATEGORY_QUANTITY);
            remove.push(field::CATEGORY);
        }

        Ok(RulePlan {
            remove,
            fields: vec![FormField::new("discountId", &selected[0].value)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Choice;

    fn one_selected() -> SelectionGroup {
        SelectionGroup::new(
            "selectedDiscounts",
            false,
            vec![Choice::new("4"), Choice::new("8").checked(true)],
        )
    }

    #[test]
    fn test_requires_exactly_one_discount() {
        let none = SelectionGroup::new("selectedDiscounts", false, vec![Choice::new("4")]);
        let draft = RuleDraft::default();
        assert_eq!(
            draft.plan(RuleKind::Or, &none),
            Err(UiError::selection("Must select exactly one discount for adding or discount"))
        );
        let two = SelectionGroup::new(
            "selectedDiscounts",
            false,
            vec![Choice::new("4").checked(true), Choice::new("8").checked(true)],
        );
        assert!(draft.plan(RuleKind::IfThen, &two).is_err());
    }

    #[test]
    fn test_category_without_quantity_blocked() {
        let draft = RuleDraft {
            category: Some("Dairy".into()),
            ..Default::default()
        };
        assert_eq!(
            draft.plan(RuleKind::And, &one_selected()),
            Err(UiError::validation(CATEGORY_PAIR_MSG))
        );

        let draft = RuleDraft {
            category_quantity: "3".into(),
            ..Default::default()
        };
        assert_eq!(
            draft.plan(RuleKind::Or, &one_selected()),
            Err(UiError::validation(CATEGORY_PAIR_MSG))
        );
    }

    #[test]
    fn test_product_pair_blocked_for_and_rules() {
        let draft = RuleDraft {
            product_id: "12".into(),
            ..Default::default()
        };
        assert_eq!(
            draft.plan(RuleKind::And, &one_selected()),
            Err(UiError::validation(PRODUCT_PAIR_MSG))
        );
    }

    #[test]
    fn test_all_empty_prunes_everything() {
        let plan = RuleDraft::default().plan(RuleKind::Or, &one_selected()).unwrap();
        assert_eq!(
            plan.remove,
            vec![
                field::BASKET_PRICE,
                field::PRODUCT_QUANTITY,
                field::PRODUCT_ID,
                field::CATEGORY_QUANTITY,
                field::CATEGORY,
            ]
        );
        assert_eq!(plan.fields, vec![FormField::new("discountId", "8")]);
    }

    #[test]
    fn test_filled_pairs_are_kept() {
        let draft = RuleDraft {
            category: Some("Dairy".into()),
            category_quantity: "2".into(),
            product_id: "5".into(),
            product_quantity: "1".into(),
            basket_price: String::new(),
        };
        let plan = draft.plan(RuleKind::And, &one_selected()).unwrap();
        assert_eq!(plan.remove, vec![field::BASKET_PRICE]);
    }

    #[test]
    fn test_if_then_needs_exactly_one_condition() {
        assert_eq!(
            RuleDraft::default().plan(RuleKind::IfThen, &one_selected()),
            Err(UiError::validation(ONE_CONDITION_MSG))
        );

        let two = RuleDraft {
            basket_price: "100".into(),
            product_id: "5".into(),
            product_quantity: "1".into(),
            ..Default::default()
        };
        assert_eq!(
            two.plan(RuleKind::IfThen, &one_selected()),
            Err(UiError::validation(ONE_CONDITION_MSG))
        );

        let basket_only = RuleDraft {
            basket_price: "100".into(),
            ..Default::default()
        };
        let plan = basket_only.plan(RuleKind::IfThen, &one_selected()).unwrap();
        assert!(!plan.remove.contains(&field::BASKET_PRICE));
        assert!(plan.remove.contains(&field::CATEGORY));
    }

    #[test]
    fn test_empty_category_string_counts_as_unset() {
        let draft = RuleDraft {
            category: Some(String::new()),
            ..Default::default()
        };
        assert!(draft.plan(RuleKind::Or, &one_selected()).is_ok());
    }

    #[test]
    fn test_prune_selector_targets_form_controls_only() {
        assert_eq!(prune_selector(field::CATEGORY), r#"select[name="category"]"#);
        assert_eq!(
            prune_selector(field::BASKET_PRICE),
            r#"input[name="MinimumBasketPrice"]"#
        );
        let plan = RuleDraft::default().plan(RuleKind::Or, &one_selected()).unwrap();
        for name in &plan.remove {
            let selector = prune_selector(name);
            assert!(selector.starts_with("input[") || selector.starts_with("select["));
        }
    }
}
