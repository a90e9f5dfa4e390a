//! UI Errors
//!
//! Every user action ends in one of these or succeeds.

use wasm_bindgen::{JsCast, JsValue};

/// Common result type for UI handlers
pub type UiResult<T> = Result<T, UiError>;

/// Failure of a single user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// A field did not match its pattern (user-correctable)
    Validation(String),
    /// The checked items do not satisfy the action's cardinality gate
    Selection(String),
    /// The async cart update failed
    Transport(String),
    /// Markup the handler depends on is missing, or a JS call threw
    Dom(String),
}

impl UiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        UiError::Validation(msg.into())
    }

    pub fn selection(msg: impl Into<String>) -> Self {
        UiError::Selection(msg.into())
    }

    pub fn dom(msg: impl Into<String>) -> Self {
        UiError::Dom(msg.into())
    }

    /// Whether the user should see this error in a blocking alert
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, UiError::Dom(_))
    }

    /// Text shown to the user
    pub fn message(&self) -> &str {
        match self {
            UiError::Validation(msg)
            | UiError::Selection(msg)
            | UiError::Transport(msg)
            | UiError::Dom(msg) => msg,
        }
    }
}

impl std::fmt::Display for UiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UiError::Validation(msg) => write!(f, "Invalid input: {}", msg),
            UiError::Selection(msg) => write!(f, "Invalid selection: {}", msg),
            UiError::Transport(msg) => write!(f, "Request failed: {}", msg),
            UiError::Dom(msg) => write!(f, "DOM error: {}", msg),
        }
    }
}

impl std::error::Error for UiError {}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        let msg = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|e| String::from(e.message()))
            })
            .unwrap_or_else(|| format!("{:?}", value));
        UiError::Dom(msg)
    }
}
