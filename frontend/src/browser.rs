//! Thin wrappers over browser APIs the page needs outside the VDOM.

use js_sys::{Array, Date};
use repurposer_shared::export::{draft_file_name, DRAFT_MIME_TYPE};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Write `text` to the system clipboard. Resolves to `false` when the
/// Clipboard API is missing or the write is rejected.
pub async fn write_clipboard(text: &str) -> bool {
    let Some(win) = window() else {
        return false;
    };
    let navigator = win.navigator();
    let Ok(clipboard) = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard")) else {
        return false;
    };
    if clipboard.is_undefined() || clipboard.is_null() {
        return false;
    }
    let Ok(write_text) = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText")) else {
        return false;
    };
    let Some(write_fn) = write_text.dyn_ref::<js_sys::Function>() else {
        return false;
    };
    let Ok(promise_value) = write_fn.call1(&clipboard, &JsValue::from_str(text)) else {
        return false;
    };
    match promise_value.dyn_into::<js_sys::Promise>() {
        Ok(promise) => wasm_bindgen_futures::JsFuture::from(promise).await.is_ok(),
        Err(_) => false,
    }
}

/// Save a draft as a local markdown file named after the current time.
pub fn download_draft(content: &str) -> Result<(), JsValue> {
    let file_name = draft_file_name(Date::now() as u64);

    let parts = Array::of1(&JsValue::from_str(content));
    let options = BlobPropertyBag::new();
    options.set_type(DRAFT_MIME_TYPE);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let document = window()
        .and_then(|win| win.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(&file_name);
    anchor.click();

    Url::revoke_object_url(&url)
}
