//! Utility functions for the document generator component.
//!
//! - **Flash timers**: clearing a confirmation message after its delay.
//! - **Formatting**: rendering the artifact timestamp in the browser locale.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsValue;
use yew::html::Scope;
use yew::platform::spawn_local;

use super::messages::Msg;
use super::state::DocumentGeneratorComponent;

/// Sends `Msg::ClearFlash(flash_id)` after `delay_ms`.
///
/// The session ignores the message when a newer flash has replaced this one,
/// so overlapping timers never cut a later confirmation short.
pub fn schedule_flash_clear(link: &Scope<DocumentGeneratorComponent>, flash_id: u64, delay_ms: u32) {
    let link = link.clone();
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        link.send_message(Msg::ClearFlash(flash_id));
    });
}

/// Formats an ISO-8601 timestamp with the browser's locale.
///
/// Returns the raw value when it is empty or cannot be parsed.
pub fn format_timestamp(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }
    let date = js_sys::Date::new(&JsValue::from_str(raw));
    if date.get_time().is_nan() {
        return raw.to_string();
    }
    date.to_locale_string("default", &JsValue::UNDEFINED).into()
}
