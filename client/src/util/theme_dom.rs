//! Reflects the current theme onto the document.
//!
//! Requires a browser environment; SSR paths no-op so server rendering
//! stays deterministic.

use crate::state::theme::ThemeMode;

/// Set the `data-theme` attribute on the `<html>` element.
pub fn apply(mode: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", mode.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}
