use crate::constants::HINT_HIDE_MS;
use crate::dom;
use crate::frame::FrameContext;
use crate::input::{key_action, KeyAction};
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    frame_ctx: &Rc<RefCell<FrameContext>>,
    canvas: &web::HtmlCanvasElement,
) {
    let Some(action) = key_action(&ev.key()) else {
        return;
    };
    match action {
        KeyAction::ToggleSmoothing => {
            let mode = frame_ctx.borrow_mut().toggle_smoothing();
            log::info!("[keys] smoothing={}", mode);
            if let Some(doc) = dom::window_document() {
                overlay::update_hint(&doc, mode);
                overlay::flash_hint(&doc, HINT_HIDE_MS);
            }
        }
        KeyAction::ToggleFullscreen => {
            if let Some(doc) = dom::window_document() {
                if doc.fullscreen_element().is_some() {
                    doc.exit_fullscreen();
                } else {
                    _ = canvas.request_fullscreen();
                }
            }
            ev.prevent_default();
        }
        KeyAction::ExitFullscreen => {
            if let Some(doc) = dom::window_document() {
                doc.exit_fullscreen();
            }
        }
    }
}

pub fn wire_global_keydown(frame_ctx: Rc<RefCell<FrameContext>>, canvas: web::HtmlCanvasElement) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_global_keydown(&ev, &frame_ctx, &canvas);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
