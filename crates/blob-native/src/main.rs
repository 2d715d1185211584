use std::time::Instant;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

use blob_core::{BlobConfig, BlobRenderer, BlobSurface, Camera, OrbitControls, SmoothingMode};
use glam::Vec2;

// Environment variable selecting the smoothing mode ("frame" or "time")
const SMOOTHING_ENV: &str = "BLOB_SMOOTHING";

// Wheel zoom: distance is scaled by exp(-pixels * WHEEL_ZOOM_PER_PX)
const WHEEL_ZOOM_PER_PX: f32 = 0.001;
const WHEEL_LINE_PX: f32 = 16.0;

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: BlobRenderer,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window, blob: &BlobSurface) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let width = size.width.max(1);
        let height = size.height.max(1);
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let renderer = BlobRenderer::new(&device, format, width, height, blob).await?;
        log::info!("[gpu] window {}x{} format {:?}", width, height, format);

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            renderer,
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        self.renderer
            .resize(&self.device, new_size.width, new_size.height);
    }

    fn render(&mut self, blob: &BlobSurface, camera: &Camera) -> Result<(), wgpu::SurfaceError> {
        self.renderer.write_uniforms(&self.queue, blob, camera);
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("blob_encoder"),
            });
        self.renderer.encode(&mut encoder, &view);
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

/// Pointer over the window in normalized device coordinates.
#[derive(Default)]
struct Pointer {
    ndc: Vec2,
    inside: bool,
    dragging: bool,
}

fn cursor_to_ndc(
    position: winit::dpi::PhysicalPosition<f64>,
    size: winit::dpi::PhysicalSize<u32>,
) -> Vec2 {
    if size.width == 0 || size.height == 0 {
        return Vec2::ZERO;
    }
    let u = position.x as f32 / size.width as f32;
    let v = position.y as f32 / size.height as f32;
    Vec2::new(u * 2.0 - 1.0, 1.0 - v * 2.0)
}

fn wheel_zoom_factor(delta: MouseScrollDelta) -> f32 {
    // Positive y scrolls away from the user and zooms in
    let px = match delta {
        MouseScrollDelta::LineDelta(_, y) => y * WHEEL_LINE_PX,
        MouseScrollDelta::PixelDelta(p) => p.y as f32,
    };
    (-px * WHEEL_ZOOM_PER_PX).exp()
}

fn smoothing_mode_from_env() -> SmoothingMode {
    match std::env::var(SMOOTHING_ENV) {
        Ok(value) => value.parse().unwrap_or_else(|e| {
            log::warn!("{e}; falling back to per-frame smoothing");
            SmoothingMode::PerFrame
        }),
        Err(_) => SmoothingMode::PerFrame,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mode = smoothing_mode_from_env();
    let mut blob = BlobSurface::new(BlobConfig::default().with_smoothing_mode(mode))?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Torus-knot blob (native)")
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window, &blob))?;
    let mut camera = Camera::default();
    let mut orbit = OrbitControls::default();
    let mut pointer = Pointer::default();
    let start = Instant::now();
    log::info!("[native] smoothing {mode}; press M to switch");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => state.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                let ndc = cursor_to_ndc(position, state.window.inner_size());
                if pointer.dragging {
                    orbit.drag(ndc - pointer.ndc);
                }
                pointer.ndc = ndc;
                pointer.inside = true;
            }
            WindowEvent::CursorLeft { .. } => {
                pointer.inside = false;
                pointer.dragging = false;
            }
            WindowEvent::MouseInput {
                state: button_state,
                button: MouseButton::Left,
                ..
            } => pointer.dragging = button_state == ElementState::Pressed,
            WindowEvent::MouseWheel { delta, .. } => orbit.zoom(wheel_zoom_factor(delta)),
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                match event.logical_key {
                    Key::Named(NamedKey::Escape) => elwt.exit(),
                    Key::Character(ref c) if c.eq_ignore_ascii_case("m") => {
                        let next = blob.smoothing_mode().toggled();
                        if let Err(e) = blob.set_smoothing_mode(next) {
                            log::warn!("[native] smoothing switch rejected: {e}");
                        }
                    }
                    _ => {}
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            let size = state.window.inner_size();
            camera.set_viewport(size.width, size.height);
            orbit.apply(&mut camera);
            let ray = pointer.inside.then(|| camera.ray_from_ndc(pointer.ndc));
            blob.track_pointer(ray.as_ref());
            blob.on_frame(start.elapsed().as_secs_f32(), pointer.ndc);
            match state.render(&blob, &camera) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    state.resize(state.window.inner_size())
                }
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("[gpu] frame skipped: {e}"),
            }
        }
        _ => {}
    })?;
    Ok(())
}
