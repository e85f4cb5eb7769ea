use web_sys::Document;

use crate::bindings::Bindings;
use crate::config;
use crate::dom;
use crate::error::BindError;
use crate::notification::{self, Severity};

/// Placeholders only announce themselves; there is no player behind them.
pub fn bind(document: &Document, bindings: &mut Bindings) -> Result<(), BindError> {
    for placeholder in dom::query_all(document, config::VIDEO_PLACEHOLDER) {
        bindings.listen(&placeholder, config::VIDEO_PLACEHOLDER, "click", |_| {
            notification::show(config::VIDEO_PLACEHOLDER_MESSAGE, Severity::Info);
        })?;
    }
    Ok(())
}
