//! Per-surface displacement state and its GPU-facing layout.
//!
//! `UniformState` is written only by [`crate::frame::FrameUpdater`]; everything
//! else reads it through getters or a [`UniformSnapshot`]. The hover flag is
//! the single exception: input callbacks set it, the frame loop reads it.

use glam::{Mat4, Vec2, Vec3};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Hover flag shared between input callbacks and the frame loop.
///
/// Cloning yields another handle to the same flag, so a host that receives
/// pointer events on a different thread can hold its own copy.
#[derive(Clone, Debug, Default)]
pub struct HoverFlag(Arc<AtomicBool>);

impl HoverFlag {
    pub fn new(hovered: bool) -> Self {
        Self(Arc::new(AtomicBool::new(hovered)))
    }

    #[inline]
    pub fn set(&self, hovered: bool) {
        self.0.store(hovered, Ordering::Release);
    }

    #[inline]
    pub fn get(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Mutable displacement parameters for one surface.
#[derive(Debug)]
pub struct UniformState {
    pub(crate) time: f32,
    pub(crate) intensity: f32,
    pub(crate) speed: f32,
    pub(crate) pointer: Vec2,
    pub(crate) hover: HoverFlag,
}

impl UniformState {
    pub fn new(base_intensity: f32, speed: f32) -> Self {
        Self {
            time: 0.0,
            intensity: base_intensity,
            speed,
            pointer: Vec2::ZERO,
            hover: HoverFlag::default(),
        }
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn hovered(&self) -> bool {
        self.hover.get()
    }

    pub fn hover_flag(&self) -> &HoverFlag {
        &self.hover
    }

    /// Copy of the values the displacement program reads.
    pub fn snapshot(&self) -> UniformSnapshot {
        UniformSnapshot {
            time: self.time,
            intensity: self.intensity,
            speed: self.speed,
            pointer: self.pointer,
        }
    }
}

/// Frame-coherent copy of the displacement inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformSnapshot {
    pub time: f32,
    pub intensity: f32,
    pub speed: f32,
    pub pointer: Vec2,
}

/// Smoothed mesh tilt in radians, driven by the raw pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub x: f32,
    pub y: f32,
}

impl Rotation {
    /// Model transform applying the tilt (X first, then Y, like an XYZ Euler).
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.x) * Mat4::from_rotation_y(self.y)
    }
}

/// Binding 0 of the displacement program. Field order and padding match
/// `FrameUniforms` in `blob.wgsl` (176 bytes).
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BlobUniforms {
    pub model: [[f32; 4]; 4],     // offset 0
    pub view_proj: [[f32; 4]; 4], // offset 64
    pub camera_pos: [f32; 4],     // offset 128 (w unused)
    pub pointer: [f32; 2],        // offset 144
    pub time: f32,                // offset 152
    pub intensity: f32,           // offset 156
    pub speed: f32,               // offset 160
    pub _pad: [f32; 3],           // offset 164 -> total 176
}

impl BlobUniforms {
    pub fn new(snapshot: &UniformSnapshot, model: Mat4, view_proj: Mat4, camera_pos: Vec3) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            view_proj: view_proj.to_cols_array_2d(),
            camera_pos: camera_pos.extend(1.0).to_array(),
            pointer: snapshot.pointer.to_array(),
            time: snapshot.time,
            intensity: snapshot.intensity,
            speed: snapshot.speed,
            _pad: [0.0; 3],
        }
    }
}
