//! Clipboard and file download for generated documents.

use docgen_common::error::ExportError;
use docgen_common::export::DownloadSink;
use docgen_common::AppError;
use gloo_file::{Blob, ObjectUrl};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAnchorElement;

/// Downloads through a Blob object URL and a transient `<a download>`.
pub struct BrowserDownload;

impl DownloadSink for BrowserDownload {
    type Handle = ObjectUrl;

    fn create(&self, contents: &str, mime_type: &str) -> Result<ObjectUrl, ExportError> {
        let blob = Blob::new_with_options(contents, Some(mime_type));
        Ok(ObjectUrl::from(blob))
    }

    fn save(&self, url: &ObjectUrl, filename: &str) -> Result<(), ExportError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| ExportError::Save("no document".to_string()))?;
        let body = document
            .body()
            .ok_or_else(|| ExportError::Save("no document body".to_string()))?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|err| ExportError::Save(format!("{:?}", err)))?
            .dyn_into()
            .map_err(|_| ExportError::Save("not an anchor element".to_string()))?;

        anchor.set_href(url);
        anchor.set_download(filename);
        body.append_child(&anchor)
            .map_err(|err| ExportError::Save(format!("{:?}", err)))?;
        anchor.click();
        anchor.remove();
        Ok(())
    }

    fn release(&self, url: ObjectUrl) {
        // revoked on drop
        drop(url);
    }
}

/// Writes `text` to the system clipboard.
pub async fn copy_text(text: String) -> Result<(), AppError> {
    let window = web_sys::window().ok_or_else(AppError::copy_failed)?;
    let promise = window.navigator().clipboard().write_text(&text);
    JsFuture::from(promise).await.map(|_| ()).map_err(|err| {
        tracing::warn!("clipboard write rejected: {:?}", err);
        AppError::copy_failed()
    })
}
