//! Cart Quantity Stepper
//!
//! Per-line state for a cart quantity input. The server takes signed
//! deltas, so every accepted edit is sent relative to the last baseline.

/// Body of `POST /editCartProduct`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityChange {
    pub store_id: String,
    pub product_id: String,
    /// Signed delta from the previous quantity
    pub quantity: i64,
}

impl QuantityChange {
    /// `application/x-www-form-urlencoded` pairs in wire order
    pub fn form_pairs(&self) -> [(&'static str, String); 3] {
        [
            ("storeId", self.store_id.clone()),
            ("productId", self.product_id.clone()),
            ("quantity", self.quantity.to_string()),
        ]
    }
}

/// Outcome of a user edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Proposal {
    /// Value rejected; put this value back into the input
    Revert(i64),
    /// Send this change; call [`QuantityStepper::commit`] once it succeeds
    Send { change: QuantityChange, new_quantity: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityStepper {
    pub store_id: String,
    pub product_id: String,
    baseline: i64,
}

impl QuantityStepper {
    pub fn new(store_id: impl Into<String>, product_id: impl Into<String>, baseline: i64) -> Self {
        Self {
            store_id: store_id.into(),
            product_id: product_id.into(),
            baseline,
        }
    }

    /// Last quantity the server accepted
    pub fn baseline(&self) -> i64 {
        self.baseline
    }

    pub fn propose(&self, raw: &str) -> Proposal {
        match raw.trim().parse::<i64>() {
            Ok(new_quantity) if new_quantity > 0 => Proposal::Send {
                change: QuantityChange {
                    store_id: self.store_id.clone(),
                    product_id: self.product_id.clone(),
                    quantity: new_quantity - self.baseline,
                },
                new_quantity,
            },
            _ => Proposal::Revert(self.baseline),
        }
    }

    pub fn commit(&mut self, new_quantity: i64) {
        self.baseline = new_quantity;
    }

    /// Value to restore after a failed request
    pub fn rollback(&self) -> i64 {
        self.baseline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_positive_reverts() {
        let stepper = QuantityStepper::new("3", "17", 2);
        assert_eq!(stepper.propose("0"), Proposal::Revert(2));
        assert_eq!(stepper.propose("-4"), Proposal::Revert(2));
        assert_eq!(stepper.propose(""), Proposal::Revert(2));
        assert_eq!(stepper.propose("two"), Proposal::Revert(2));
        // whole units only
        assert_eq!(stepper.propose("2.5"), Proposal::Revert(2));
    }

    #[test]
    fn test_delta_is_signed() {
        let mut stepper = QuantityStepper::new("3", "17", 2);
        let Proposal::Send { change, new_quantity } = stepper.propose("5") else {
            panic!("expected send");
        };
        assert_eq!(change.quantity, 3);
        assert_eq!(new_quantity, 5);
        stepper.commit(new_quantity);

        let Proposal::Send { change, .. } = stepper.propose("1") else {
            panic!("expected send");
        };
        assert_eq!(change.quantity, -4);
        assert_eq!(change.store_id, "3");
        assert_eq!(change.product_id, "17");
    }

    #[test]
    fn test_failed_request_keeps_baseline() {
        let stepper = QuantityStepper::new("1", "1", 4);
        let proposal = stepper.propose("9");
        assert!(matches!(proposal, Proposal::Send { .. }));
        // no commit: the request failed
        assert_eq!(stepper.rollback(), 4);
    }

    #[test]
    fn test_form_pairs_order() {
        let change = QuantityChange {
            store_id: "2".into(),
            product_id: "8".into(),
            quantity: -1,
        };
        let pairs = change.form_pairs();
        assert_eq!(pairs[0], ("storeId", "2".to_string()));
        assert_eq!(pairs[1], ("productId", "8".to_string()));
        assert_eq!(pairs[2], ("quantity", "-1".to_string()));
    }
}
