use wasm_bindgen::JsValue;

/// Name of the optional window global that points the app at a backend on
/// another origin (set from the hosting page before the wasm bundle loads).
const BASE_URL_GLOBAL: &str = "comureportApiBase";

/// Backend base URL. Empty string means same-origin, so request paths like
/// `/api/colony` resolve against the page's own host.
pub fn api_base_url() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    js_sys::Reflect::get(&window, &JsValue::from_str(BASE_URL_GLOBAL))
        .ok()
        .and_then(|value| value.as_string())
        .map(|base| base.trim_end_matches('/').to_string())
        .unwrap_or_default()
}
