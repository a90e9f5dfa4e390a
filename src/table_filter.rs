//! Purchase History Filter
//!
//! Substring filter over a snapshot of table rows. The two queries are
//! OR-ed: a row shows when either non-empty query matches its column.

/// Columns of one history row the filter looks at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRow {
    pub store_id: String,
    pub username: String,
}

impl FilterRow {
    pub fn new(store_id: &str, username: &str) -> Self {
        Self {
            store_id: store_id.to_lowercase(),
            username: username.to_lowercase(),
        }
    }
}

/// Active queries, lowercased
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub username: String,
    pub store_id: String,
}

impl Filter {
    pub fn new(username: &str, store_id: &str) -> Self {
        Self {
            username: username.to_lowercase(),
            store_id: store_id.to_lowercase(),
        }
    }

    pub fn matches(&self, row: &FilterRow) -> bool {
        (!self.username.is_empty() && row.username.contains(&self.username))
            || (!self.store_id.is_empty() && row.store_id.contains(&self.store_id))
    }
}

/// Rows captured on first render; filtering never loses a row
#[derive(Debug, Clone, Default)]
pub struct TableFilter {
    rows: Vec<FilterRow>,
}

impl TableFilter {
    pub fn snapshot(rows: Vec<FilterRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Visibility of each snapshot row, in order
    pub fn apply(&self, filter: &Filter) -> Vec<bool> {
        self.rows.iter().map(|row| filter.matches(row)).collect()
    }

    /// Every row visible again
    pub fn clear(&self) -> Vec<bool> {
        vec![true; self.rows.len()]
    }
}
