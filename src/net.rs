//! Read-once startup fetches for the recipe table and the lab config.
//! Every failure path returns `None`; the caller falls back to built-in
//! defaults and the session still starts.

use crate::model::LabConfig;
use std::collections::HashMap;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

async fn fetch_text(url: &str) -> Option<String> {
    let win = web_sys::window()?;
    let resp_value = JsFuture::from(win.fetch_with_str(url)).await.ok()?;
    let resp: Response = resp_value.dyn_into().ok()?;
    if !resp.ok() {
        return None;
    }
    let text = JsFuture::from(resp.text().ok()?).await.ok()?;
    text.as_string()
}

/// `/recipes`: a flat `"A+B" -> result` mapping.
pub async fn fetch_recipes() -> Option<HashMap<String, String>> {
    serde_json::from_str(&fetch_text("/recipes").await?).ok()
}

/// `/config`: meter defaults plus per-team overrides.
pub async fn fetch_config() -> Option<LabConfig> {
    serde_json::from_str(&fetch_text("/config").await?).ok()
}
