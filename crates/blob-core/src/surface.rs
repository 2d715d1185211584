//! The renderable blob: geometry, material, displacement state and tilt.

use crate::camera::Camera;
use crate::config::BlobConfig;
use crate::displacement::max_displacement;
use crate::error::BlobError;
use crate::frame::{FrameUpdater, SmoothingMode};
use crate::geometry::{MeshData, TorusKnotDescriptor};
use crate::material::{MaterialUniforms, PhysicalMaterial};
use crate::picking::{pick_mesh, Ray};
use crate::state::{BlobUniforms, HoverFlag, Rotation, UniformSnapshot, UniformState};
use glam::{Mat4, Vec2};

pub struct BlobSurface {
    descriptor: TorusKnotDescriptor,
    mesh: MeshData,
    material: PhysicalMaterial,
    state: UniformState,
    rotation: Rotation,
    updater: FrameUpdater,
    pick_radius: f32,
    pointer_over: bool,
}

impl BlobSurface {
    pub fn new(config: BlobConfig) -> Result<Self, BlobError> {
        config.validate()?;
        let mesh = config.geometry.build()?;
        let peak = config.hover_intensity.max(config.idle_intensity).max(config.base_intensity);
        let pick_radius = mesh.bounding_radius() + max_displacement(peak);
        log::info!(
            "[surface] knot p={} q={} triangles={} smoothing={}",
            config.geometry.p,
            config.geometry.q,
            mesh.triangle_count(),
            config.smoothing.mode
        );
        Ok(Self {
            descriptor: config.geometry,
            mesh,
            material: config.material,
            state: UniformState::new(config.base_intensity, config.speed),
            rotation: Rotation::default(),
            updater: config.frame_updater(),
            pick_radius,
            pointer_over: false,
        })
    }

    pub fn on_pointer_enter(&mut self) {
        self.state.hover.set(true);
    }

    pub fn on_pointer_leave(&mut self) {
        self.state.hover.set(false);
    }

    /// Advance one rendered frame.
    pub fn on_frame(&mut self, elapsed_sec: f32, raw_pointer: Vec2) {
        self.updater
            .update(&mut self.state, &mut self.rotation, elapsed_sec, raw_pointer);
    }

    /// Derive enter/leave from a pointer ray; `None` means the pointer left
    /// the viewport. Only transitions touch the hover flag.
    pub fn track_pointer(&mut self, ray: Option<&Ray>) -> bool {
        let over = ray
            .and_then(|r| pick_mesh(&self.mesh, self.model_matrix(), self.pick_radius, r))
            .is_some();
        if over != self.pointer_over {
            self.pointer_over = over;
            if over {
                self.on_pointer_enter();
            } else {
                self.on_pointer_leave();
            }
            log::debug!("[surface] pointer {}", if over { "enter" } else { "leave" });
        }
        over
    }

    /// Handle for input callbacks living on another thread.
    pub fn hover_flag(&self) -> HoverFlag {
        self.state.hover.clone()
    }

    pub fn state(&self) -> &UniformState {
        &self.state
    }

    pub fn snapshot(&self) -> UniformSnapshot {
        self.state.snapshot()
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn model_matrix(&self) -> Mat4 {
        self.rotation.matrix()
    }

    pub fn mesh(&self) -> &MeshData {
        &self.mesh
    }

    pub fn descriptor(&self) -> &TorusKnotDescriptor {
        &self.descriptor
    }

    pub fn material(&self) -> &PhysicalMaterial {
        &self.material
    }

    pub fn smoothing_mode(&self) -> SmoothingMode {
        self.updater.smoothing.mode
    }

    /// Switch smoothing on a live surface. An invalid mode is rejected and
    /// the current one stays in effect.
    pub fn set_smoothing_mode(&mut self, mode: SmoothingMode) -> Result<(), BlobError> {
        mode.validate()?;
        log::info!("[surface] smoothing {} -> {}", self.updater.smoothing.mode, mode);
        self.updater.smoothing.mode = mode;
        Ok(())
    }

    /// Uniform block for this frame, built from one snapshot.
    pub fn gpu_uniforms(&self, camera: &Camera) -> BlobUniforms {
        BlobUniforms::new(
            &self.snapshot(),
            self.model_matrix(),
            camera.view_proj(),
            camera.eye,
        )
    }

    pub fn material_uniforms(&self) -> MaterialUniforms {
        MaterialUniforms::from(&self.material)
    }
}
