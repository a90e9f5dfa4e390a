//! Purchase history filter.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, HtmlTableRowElement};

use crate::dom;
use crate::error::UiResult;
use crate::table_filter::{Filter, FilterRow, TableFilter};

const ROWS: &str = "#purchaseHistoryTable tbody tr";
const STORE_CELL: u32 = 1;
const USERNAME_CELL: u32 = 2;

struct HistoryTable {
    filter: TableFilter,
    rows: Vec<HtmlElement>,
}

impl HistoryTable {
    fn snapshot() -> Self {
        let rows: Vec<HtmlTableRowElement> = dom::query_all(ROWS)
            .into_iter()
            .filter_map(|el| el.dyn_into().ok())
            .collect();
        let cell = |row: &HtmlTableRowElement, index: u32| {
            row.cells()
                .item(index)
                .map(|c| dom::text_of(&c))
                .unwrap_or_default()
        };
        let filter = TableFilter::snapshot(
            rows.iter()
                .map(|row| FilterRow::new(&cell(row, STORE_CELL), &cell(row, USERNAME_CELL)))
                .collect(),
        );
        Self {
            filter,
            rows: rows.into_iter().map(Into::into).collect(),
        }
    }

    fn show(&self, visible: &[bool]) {
        for (row, shown) in self.rows.iter().zip(visible) {
            dom::set_visible(row, *shown);
        }
    }
}

fn apply(table: &HistoryTable) -> UiResult<()> {
    let filter = Filter::new(
        &dom::value_by_id("usernameInput")?,
        &dom::value_by_id("storeIdInput")?,
    );
    table.show(&table.filter.apply(&filter));
    Ok(())
}

fn clear(table: &HistoryTable) -> UiResult<()> {
    for id in ["usernameInput", "storeIdInput"] {
        dom::by_id::<HtmlInputElement>(id)?.set_value("");
    }
    table.show(&table.filter.clear());
    Ok(())
}

pub fn bind() {
    if dom::find_by_id("purchaseHistoryTable").is_none() {
        return;
    }
    let table = Rc::new(HistoryTable::snapshot());
    log::debug!("purchase history: {} rows", table.filter.len());

    let t = table.clone();
    dom::on_click("filterBtn", move || apply(&t));
    dom::on_click("clearFilterBtn", move || clear(&table));
}
