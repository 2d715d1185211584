use crate::input::PointerState;
use crate::render::GpuState;
use blob_core::{BlobSurface, Camera, OrbitControls, SmoothingMode};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub blob: BlobSurface,
    pub camera: Camera,
    pub orbit: Rc<RefCell<OrbitControls>>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: GpuState,
    pub started: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let elapsed = self.started.elapsed().as_secs_f32();

        let w = self.canvas.width();
        let h = self.canvas.height();
        self.gpu.resize_if_needed(w, h);
        self.camera.set_viewport(w, h);
        self.orbit.borrow().apply(&mut self.camera);

        // Hover comes from picking the base mesh under the pointer
        let pointer = *self.pointer.borrow();
        let ray = pointer
            .inside
            .then(|| self.camera.ray_from_ndc(pointer.ndc));
        self.blob.track_pointer(ray.as_ref());
        self.blob.on_frame(elapsed, pointer.ndc);

        if let Err(e) = self.gpu.render(&self.blob, &self.camera) {
            log::error!("render error: {:?}", e);
        }
    }

    pub fn toggle_smoothing(&mut self) -> SmoothingMode {
        let mode = self.blob.smoothing_mode().toggled();
        if let Err(e) = self.blob.set_smoothing_mode(mode) {
            log::warn!("smoothing switch rejected: {e}");
        }
        self.blob.smoothing_mode()
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
