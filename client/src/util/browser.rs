//! Browser-only side effects used by the courses page.
//!
//! SSR paths log instead of touching `window`.

#[cfg(feature = "hydrate")]
use crate::net::types::PendingFile;

/// Show a blocking `window.alert`.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        leptos::logging::warn!("alert: {message}");
    }
}

/// First file selected in a `<input type="file">` change event.
#[cfg(feature = "hydrate")]
pub fn selected_file(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    use wasm_bindgen::JsCast;

    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}

/// Copy a picked file into memory so the draft owns its bytes.
///
/// # Errors
///
/// Returns the reader error text if the browser cannot read the file.
#[cfg(feature = "hydrate")]
pub async fn read_pending_file(raw: web_sys::File) -> Result<PendingFile, String> {
    let name = raw.name();
    let content_type = raw.type_();
    let file = gloo_file::File::from(raw);
    let bytes = gloo_file::futures::read_as_bytes(&file)
        .await
        .map_err(|e| e.to_string())?;
    Ok(PendingFile { name, content_type, bytes })
}
