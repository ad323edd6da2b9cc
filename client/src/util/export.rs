//! Browser download of exported sleep history.

use sleeplog::{ExportFormat, SleepData};

/// Render `data` in `format` and hand it to the browser as a file download.
///
/// # Errors
///
/// Returns an error string if rendering fails or the download cannot be
/// started (no document, Blob/URL APIs unavailable).
pub fn download(data: &SleepData, format: ExportFormat) -> Result<(), String> {
    let content = data.export(format).map_err(|e| e.to_string())?;
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::{JsCast, JsValue};

        let js_err = |e: JsValue| e.as_string().unwrap_or_else(|| "browser API error".to_owned());

        let parts = js_sys::Array::of1(&JsValue::from_str(&content));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(format.mime_type());
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_err)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| "no document".to_owned())?;
        let anchor = document
            .create_element("a")
            .map_err(js_err)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| "anchor element unavailable".to_owned())?;
        anchor.set_href(&url);
        anchor.set_download(format.file_name());
        anchor.click();
        web_sys::Url::revoke_object_url(&url).map_err(js_err)?;
        log::info!("exported {} ({} bytes)", format.file_name(), content.len());
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = content;
    }
    Ok(())
}
