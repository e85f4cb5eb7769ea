use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while attaching behaviors to the rendered page.
#[derive(Debug, Error)]
pub enum BindError {
    #[error("no browser window is available")]
    NoWindow,
    #[error("the window has no document")]
    NoDocument,
    #[error("required element `{0}` is missing from the page")]
    MissingElement(String),
    #[error("element `{selector}` is not a {expected}")]
    UnexpectedElement {
        selector: String,
        expected: &'static str,
    },
    #[error("browser rejected {action}: {message}")]
    Js {
        action: &'static str,
        message: String,
    },
}

impl BindError {
    /// Adapter for `map_err` on web-sys calls.
    pub fn js(action: &'static str) -> impl FnOnce(JsValue) -> BindError {
        move |value| BindError::Js {
            action,
            message: value.as_string().unwrap_or_else(|| format!("{:?}", value)),
        }
    }
}
