use crate::input::{self, PointerState};
use blob_core::OrbitControls;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<RefCell<PointerState>>,
    pub orbit: Rc<RefCell<OrbitControls>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_pointerleave(&w);
    wire_wheel(&w);
}

#[inline]
fn canvas_ndc(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    input::client_to_ndc(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
    )
}

fn listen<E, F>(canvas: &web::HtmlCanvasElement, event: &str, handler: F)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    listen(&canvas, "pointermove", move |ev: web::PointerEvent| {
        let ndc = canvas_ndc(&ev, &w.canvas);
        let delta = w.pointer.borrow_mut().moved(ndc);
        if let Some(delta) = delta {
            w.orbit.borrow_mut().drag(delta);
        }
    });
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    listen(&canvas, "pointerdown", move |ev: web::PointerEvent| {
        let ndc = canvas_ndc(&ev, &w.canvas);
        w.pointer.borrow_mut().pressed(ndc);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
    });
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    listen(&canvas, "pointerup", move |ev: web::PointerEvent| {
        w.pointer.borrow_mut().released();
        _ = w.canvas.release_pointer_capture(ev.pointer_id());
    });
}

fn wire_pointerleave(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    listen(&canvas, "pointerleave", move |_ev: web::PointerEvent| {
        w.pointer.borrow_mut().left();
    });
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    listen(&canvas, "wheel", move |ev: web::WheelEvent| {
        let factor = input::wheel_zoom_factor(ev.delta_y() as f32, ev.delta_mode());
        w.orbit.borrow_mut().zoom(factor);
        ev.prevent_default();
    });
}
