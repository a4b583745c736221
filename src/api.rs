//! Remote Data Access
//!
//! Single fetch of the static payload resource, decoded at the JS
//! boundary the same way command results are.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::models::Payload;

/// Fixed relative path of the payload resource
const PAYLOAD_URL: &str = "/data.json";

/// Fetch and decode `/data.json`. Called once per mount of the app.
pub async fn fetch_payload() -> Result<Payload, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;

    let resp_value = JsFuture::from(window.fetch_with_str(PAYLOAD_URL))
        .await
        .map_err(|e| format!("fetch failed: {:?}", e))?;
    let resp: web_sys::Response = resp_value
        .dyn_into()
        .map_err(|_| "fetch did not yield a Response".to_string())?;

    let json = JsFuture::from(resp.json().map_err(|e| format!("{:?}", e))?)
        .await
        .map_err(|e| format!("body read failed: {:?}", e))?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}
