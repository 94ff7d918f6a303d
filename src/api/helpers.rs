//! Shared helpers for the WASM API
//!
//! Console logging macros, serde conversion at the JS boundary, the
//! page configuration store and the small DOM utilities every handler uses.

use lazy_static::lazy_static;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{Mutex, MutexGuard};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement, Window};

use crate::league::UiError;
use crate::models::PageConfig;

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

pub fn log_debug(msg: &str) {
    log(&format!("[WASM] {}", msg));
}

pub fn log_info(msg: &str) {
    info(&format!("[WASM] {}", msg));
}

pub fn log_warn(msg: &str) {
    warn(&format!("[WASM] ⚠️ {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[WASM] ❌ {}", msg));
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

/// Log a page-layer error and turn it into a JsValue
pub fn ui_error(err: UiError) -> JsValue {
    let msg = err.to_string();
    log_error(&msg);
    JsValue::from_str(&msg)
}

/// Best-effort message of a thrown JS value
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(message) = js_sys::Reflect::get(value, &"message".into())
        .ok()
        .and_then(|message| message.as_string())
    {
        return message;
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// `name` of a thrown JS value (`AbortError`, `TypeError`, ...)
pub fn js_error_name(value: &JsValue) -> Option<String> {
    js_sys::Reflect::get(value, &"name".into())
        .ok()
        .and_then(|name| name.as_string())
}

// ============================================================================
// Page Configuration Store
// ============================================================================

// Set once by initPage; handlers read it instead of window globals
lazy_static! {
    static ref PAGE: Mutex<Option<PageConfig>> = Mutex::new(None);
}

pub fn lock_page() -> Result<MutexGuard<'static, Option<PageConfig>>, JsValue> {
    PAGE.lock()
        .map_err(|_| JsValue::from_str("Page configuration lock poisoned"))
}

pub fn store_page(config: PageConfig) -> Result<(), JsValue> {
    *lock_page()? = Some(config);
    Ok(())
}

/// Current page configuration, or the empty default before `initPage`
pub fn page_config() -> PageConfig {
    match lock_page() {
        Ok(guard) => guard.clone().unwrap_or_default(),
        Err(_) => PageConfig::default(),
    }
}

// ============================================================================
// DOM Helpers
// ============================================================================

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window available"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("No document available"))
}

pub fn element_by_id(id: &str) -> Result<Element, JsValue> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| ui_error(UiError::MissingElement(id.to_string())))
}

pub fn input_by_id(id: &str) -> Result<HtmlInputElement, JsValue> {
    element_by_id(id)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| JsValue::from_str(&format!("#{} is not an input", id)))
}

/// Set the `value` of a form control, whether it is an input or a select
pub fn set_field_value(id: &str, value: &str) -> Result<(), JsValue> {
    let element = element_by_id(id)?;
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.set_value(value);
    } else {
        js_sys::Reflect::set(&element, &"value".into(), &JsValue::from_str(value))?;
    }
    Ok(())
}

/// All elements matching `selector`, in document order
pub fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = root.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn document_query_all(selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document()?.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn add_classes(element: &Element, classes: &[&str]) -> Result<(), JsValue> {
    let list = element.class_list();
    for class in classes {
        list.add_1(class)?;
    }
    Ok(())
}

pub fn remove_classes(element: &Element, classes: &[&str]) -> Result<(), JsValue> {
    let list = element.class_list();
    for class in classes {
        list.remove_1(class)?;
    }
    Ok(())
}

pub fn show(element: &Element) -> Result<(), JsValue> {
    element.class_list().remove_1("hidden")
}

pub fn hide(element: &Element) -> Result<(), JsValue> {
    element.class_list().add_1("hidden")
}

/// Modals are hidden with `hidden` and laid out with `flex` when open
pub fn open_modal(id: &str) -> Result<(), JsValue> {
    let modal = element_by_id(id)?;
    show(&modal)?;
    modal.class_list().add_1("flex")
}

pub fn close_modal(id: &str) -> Result<(), JsValue> {
    let modal = element_by_id(id)?;
    hide(&modal)?;
    modal.class_list().remove_1("flex")
}
