use crate::constants::HINT_ID;
use blob_core::SmoothingMode;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Show the current smoothing mode in the hint overlay.
pub fn update_hint(document: &web::Document, mode: SmoothingMode) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        let hint_html = format!(
            "<div style='color: #cfe7ff; font: 13px system-ui; background: rgba(10, 14, 24, 0.8); padding: 8px 12px; border-radius: 6px; border: 1px solid rgba(80, 110, 150, 0.35);'>Smoothing: {} • M to switch • Enter for fullscreen</div>",
            mode
        );
        el.set_inner_html(&hint_html);
    }
}

pub fn show_hint(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        el.class_list().remove_1("hidden").ok();
    }
}

pub fn hide_hint(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        el.class_list().add_1("hidden").ok();
    }
}

/// Show the hint, then hide it after `delay_ms`.
pub fn flash_hint(document: &web::Document, delay_ms: i32) {
    show_hint(document);
    let doc = document.clone();
    let callback = Closure::once_into_js(move || hide_hint(&doc));
    if let Some(w) = web::window() {
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms,
        );
    }
}
