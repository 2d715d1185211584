#![cfg(target_arch = "wasm32")]
use blob_core::{BlobConfig, BlobSurface, Camera, OrbitControls, SmoothingMode};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn smoothing_mode_from_page() -> SmoothingMode {
    let search = dom::location_search();
    match input::smoothing_from_query(&search) {
        Ok(mode) => mode,
        Err(e) => {
            log::warn!("{e}; falling back to per-frame smoothing");
            SmoothingMode::PerFrame
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("blob-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Keep the canvas pixel size in step with CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let mode = smoothing_mode_from_page();
    let blob = BlobSurface::new(BlobConfig::default().with_smoothing_mode(mode))?;
    let gpu = render::GpuState::new(&canvas, &blob).await?;

    let pointer = Rc::new(RefCell::new(input::PointerState::default()));
    let orbit = Rc::new(RefCell::new(OrbitControls::default()));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        pointer: pointer.clone(),
        orbit: orbit.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        blob,
        camera: Camera::default(),
        orbit,
        pointer,
        canvas: canvas.clone(),
        gpu,
        started: Instant::now(),
    }));
    events::wire_global_keydown(frame_ctx.clone(), canvas);

    overlay::update_hint(&document, mode);
    overlay::flash_hint(&document, constants::HINT_HIDE_MS);

    frame::start_loop(frame_ctx);
    Ok(())
}
