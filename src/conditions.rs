//! Purchase Rule Conditions
//!
//! View-model for the dynamic condition builder: each rule group (If-Then,
//! Or, And) holds an ordered list of condition rows, and every row's
//! parameter values always match its selected kind.

use crate::error::{UiError, UiResult};
use crate::forms::FormField;

pub const MAX_REACHED_MSG: &str = "Maximum number of conditions reached.";

/// Condition types offered in every row's select, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConditionKind {
    #[default]
    MoreThanByProduct,
    MoreThanByCategory,
    MoreThanByAllBasket,
    LessThanByProduct,
    LessThanByCategory,
    LessThanByAllBasket,
    AlcoholUnder18,
    AlcoholAtNight,
}

impl ConditionKind {
    pub const ALL: [ConditionKind; 8] = [
        ConditionKind::MoreThanByProduct,
        ConditionKind::MoreThanByCategory,
        ConditionKind::MoreThanByAllBasket,
        ConditionKind::LessThanByProduct,
        ConditionKind::LessThanByCategory,
        ConditionKind::LessThanByAllBasket,
        ConditionKind::AlcoholUnder18,
        ConditionKind::AlcoholAtNight,
    ];

    /// Wire literal sent in the `conditions` field
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionKind::MoreThanByProduct => "basketNotContainsMoreThenByProduct",
            ConditionKind::MoreThanByCategory => "basketNotContainsMoreThenByCategory",
            ConditionKind::MoreThanByAllBasket => "basketNotContainsMoreThenByAllBasket",
            ConditionKind::LessThanByProduct => "basketNotContainsLessThenByProduct",
            ConditionKind::LessThanByCategory => "basketNotContainsLessThenByCategory",
            ConditionKind::LessThanByAllBasket => "basketNotContainsLessThenByAllBasket",
            ConditionKind::AlcoholUnder18 => "notAllowedToBuyAlcoholUnder18",
            ConditionKind::AlcoholAtNight => "notAllowedToBuyAlcohol23To06",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConditionKind::MoreThanByProduct => "Basket Not Contains More Than by Product",
            ConditionKind::MoreThanByCategory => "Basket Not Contains More Than by Category",
            ConditionKind::MoreThanByAllBasket => "Basket Not Contains More Than by All Basket",
            ConditionKind::LessThanByProduct => "Basket Not Contains Less Than by Product",
            ConditionKind::LessThanByCategory => "Basket Not Contains Less Than by Category",
            ConditionKind::LessThanByAllBasket => "Basket Not Contains Less Than by All Basket",
            ConditionKind::AlcoholUnder18 => "Not Allowed to Buy Alcohol Under 18",
            ConditionKind::AlcoholAtNight => "Not Allowed to Buy Alcohol from 23:00 to 06:00",
        }
    }

    /// Parameter inputs this kind renders, in input order
    pub fn params(&self) -> &'static [ParamSpec] {
        match self {
            ConditionKind::MoreThanByProduct | ConditionKind::LessThanByProduct => {
                &[ParamSpec::PRODUCT_ID, ParamSpec::TOTAL_QUANTITY]
            }
            ConditionKind::MoreThanByCategory | ConditionKind::LessThanByCategory => {
                &[ParamSpec::CATEGORY, ParamSpec::TOTAL_QUANTITY]
            }
            ConditionKind::MoreThanByAllBasket | ConditionKind::LessThanByAllBasket => {
                &[ParamSpec::TOTAL_QUANTITY]
            }
            ConditionKind::AlcoholUnder18 | ConditionKind::AlcoholAtNight => &[],
        }
    }
}

/// One parameter input of a condition row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub input_type: &'static str,
    pub placeholder: &'static str,
}

impl ParamSpec {
    pub const PRODUCT_ID: ParamSpec = ParamSpec {
        name: "productId",
        input_type: "number",
        placeholder: "Product ID",
    };
    pub const CATEGORY: ParamSpec = ParamSpec {
        name: "category",
        input_type: "text",
        placeholder: "Category Name",
    };
    pub const TOTAL_QUANTITY: ParamSpec = ParamSpec {
        name: "totalQuantity",
        input_type: "number",
        placeholder: "Total Quantity",
    };
}

/// Purchase rule group a row belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    IfThen,
    Or,
    And,
}

impl GroupKind {
    pub const ALL: [GroupKind; 3] = [GroupKind::IfThen, GroupKind::Or, GroupKind::And];

    /// Row limit; `None` = unbounded
    pub fn capacity(&self) -> Option<usize> {
        match self {
            GroupKind::IfThen => Some(2),
            GroupKind::Or | GroupKind::And => None,
        }
    }

    /// Rows present when the builder first opens
    pub fn initial_rows(&self) -> usize {
        match self {
            GroupKind::IfThen => 2,
            GroupKind::Or | GroupKind::And => 1,
        }
    }

    /// Or/And submissions carry one trailing empty `conditionData` entry
    pub fn appends_empty_marker(&self) -> bool {
        matches!(self, GroupKind::Or | GroupKind::And)
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            GroupKind::IfThen => "IfThenCondition",
            GroupKind::Or => "OrCondition",
            GroupKind::And => "AndCondition",
        }
    }

    /// Element the builder is mounted into
    pub fn container_id(&self) -> &'static str {
        match self {
            GroupKind::IfThen => "IfThenConditions",
            GroupKind::Or => "OrConditions",
            GroupKind::And => "AndConditions",
        }
    }

    /// Button that opens the rule dialog and reseeds the group
    pub fn open_button_id(&self) -> &'static str {
        match self {
            GroupKind::IfThen => "ifThenConditionBtn",
            GroupKind::Or => "orConditionBtn",
            GroupKind::And => "andConditionBtn",
        }
    }

    pub fn add_button_id(&self) -> &'static str {
        match self {
            GroupKind::IfThen => "addIfThenConditionBtn",
            GroupKind::Or => "addOrConditionBtn",
            GroupKind::And => "addAndConditionBtn",
        }
    }

    pub fn submit_button_id(&self) -> &'static str {
        match self {
            GroupKind::IfThen => "addIfThenPurchaseRuleBtn",
            GroupKind::Or => "addOrPurchaseRuleBtn",
            GroupKind::And => "addAndPurchaseRuleBtn",
        }
    }

    pub fn form_id(&self) -> &'static str {
        match self {
            GroupKind::IfThen => "addIfThenPurchaseRuleForm",
            GroupKind::Or => "addOrPurchaseRuleForm",
            GroupKind::And => "addAndPurchaseRuleForm",
        }
    }
}

pub type RowKey = u32;

/// One configurable condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionRow {
    pub key: RowKey,
    kind: ConditionKind,
    values: Vec<String>,
}

impl ConditionRow {
    fn new(key: RowKey, kind: ConditionKind) -> Self {
        Self {
            key,
            kind,
            values: vec![String::new(); kind.params().len()],
        }
    }

    pub fn kind(&self) -> ConditionKind {
        self.kind
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Switch kind; previous parameter values are discarded
    pub fn set_kind(&mut self, kind: ConditionKind) {
        self.kind = kind;
        self.values = vec![String::new(); kind.params().len()];
    }

    /// Parameter values in input order, as the server reads them
    pub fn serialized_values(&self) -> String {
        self.values.join(",")
    }
}

/// Ordered rows of one rule group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionGroup {
    kind: GroupKind,
    rows: Vec<ConditionRow>,
    next_key: RowKey,
}

impl ConditionGroup {
    pub fn new(kind: GroupKind) -> Self {
        Self {
            kind,
            rows: Vec::new(),
            next_key: 0,
        }
    }

    /// Group seeded with its initial rows
    pub fn seeded(kind: GroupKind) -> Self {
        let mut group = Self::new(kind);
        group.reseed();
        group
    }

    /// Back to the initial rows. Keys keep counting up, so rendered rows
    /// are never mistaken for the fresh ones.
    pub fn reseed(&mut self) {
        self.rows.clear();
        for _ in 0..self.kind.initial_rows() {
            // Initial row count never exceeds capacity
            let _ = self.add();
        }
    }

    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    pub fn rows(&self) -> &[ConditionRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.kind.capacity().is_some_and(|cap| self.rows.len() >= cap)
    }

    /// Append a row with the default kind
    pub fn add(&mut self) -> UiResult<RowKey> {
        if self.is_full() {
            return Err(UiError::validation(MAX_REACHED_MSG));
        }
        let key = self.next_key;
        self.next_key += 1;
        self.rows.push(ConditionRow::new(key, ConditionKind::default()));
        Ok(key)
    }

    /// Returns false if the row was already gone
    pub fn remove(&mut self, key: RowKey) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.key != key);
        self.rows.len() != before
    }

    fn row_mut(&mut self, key: RowKey) -> Option<&mut ConditionRow> {
        self.rows.iter_mut().find(|row| row.key == key)
    }

    pub fn set_kind(&mut self, key: RowKey, kind: ConditionKind) {
        if let Some(row) = self.row_mut(key) {
            row.set_kind(kind);
        }
    }

    /// Ignored if the index is outside the row's current parameter set
    pub fn set_value(&mut self, key: RowKey, index: usize, value: String) {
        if let Some(slot) = self.row_mut(key).and_then(|row| row.values.get_mut(index)) {
            *slot = value;
        }
    }

    /// Hidden fields for the group's rule form: every `conditions` entry,
    /// then every `conditionData` entry
    pub fn fields(&self) -> Vec<FormField> {
        let mut fields: Vec<FormField> = self
            .rows
            .iter()
            .map(|row| FormField::new("conditions", row.kind.as_str()))
            .collect();
        fields.extend(
            self.rows
                .iter()
                .map(|row| FormField::new("conditionData", row.serialized_values())),
        );
        if self.kind.appends_empty_marker() {
            fields.push(FormField::new("conditionData", ""));
        }
        fields
    }
}
