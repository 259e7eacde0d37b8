// Small browser helpers shared across components.

use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Random padded position inside the workspace, used for tap-to-add so
/// pills don't stack in a corner.
pub fn random_position(width: f64, height: f64) -> (f64, f64) {
    let padding = 50.0;
    let max_x = (width - 120.0).max(padding);
    let max_y = (height - 40.0).max(padding);
    (
        (js_sys::Math::random() * max_x).max(padding),
        (js_sys::Math::random() * max_y).max(padding),
    )
}

/// Short buzz on devices that support it.
pub fn vibrate(ms: u32) {
    if let Some(win) = web_sys::window() {
        let _ = win.navigator().vibrate_with_duration(ms);
    }
}
