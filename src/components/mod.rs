//! UI Components
//!
//! Leptos components mounted into server-rendered pages.

mod condition_builder;
mod toast_host;

pub use condition_builder::ConditionBuilder;
pub use toast_host::ToastHost;
