//! Torus-knot ribbon mesh.

use crate::error::BlobError;
use glam::Vec3;
use std::f32::consts::TAU;

/// Interleaved vertex as uploaded to the GPU (24 bytes).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        Vec3::from(self.position)
    }

    #[inline]
    pub fn normal(&self) -> Vec3 {
        Vec3::from(self.normal)
    }
}

/// Indexed triangle list.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).map(move |t| {
            [
                self.vertices[t[0] as usize].position(),
                self.vertices[t[1] as usize].position(),
                self.vertices[t[2] as usize].position(),
            ]
        })
    }

    /// Radius of the origin-centred sphere that contains every vertex.
    pub fn bounding_radius(&self) -> f32 {
        self.vertices
            .iter()
            .map(|v| v.position().length())
            .fold(0.0, f32::max)
    }
}

/// Shape of a (p, q) torus knot swept by a circular tube.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TorusKnotDescriptor {
    pub radius: f32,
    pub tube: f32,
    pub tubular_segments: u32,
    pub radial_segments: u32,
    pub p: u32,
    pub q: u32,
}

impl Default for TorusKnotDescriptor {
    fn default() -> Self {
        Self {
            radius: 1.0,
            tube: 0.3,
            tubular_segments: 256,
            radial_segments: 64,
            p: 3,
            q: 5,
        }
    }
}

impl TorusKnotDescriptor {
    pub fn validate(&self) -> Result<(), BlobError> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(BlobError::InvalidGeometry(format!(
                "radius must be positive, got {}",
                self.radius
            )));
        }
        if !(self.tube.is_finite() && self.tube > 0.0) {
            return Err(BlobError::InvalidGeometry(format!(
                "tube must be positive, got {}",
                self.tube
            )));
        }
        if self.tubular_segments < 3 || self.radial_segments < 3 {
            return Err(BlobError::InvalidGeometry(format!(
                "need at least 3 segments, got tubular={} radial={}",
                self.tubular_segments, self.radial_segments
            )));
        }
        let vertices = (self.tubular_segments as u64 + 1) * (self.radial_segments as u64 + 1);
        if vertices > u32::MAX as u64 {
            return Err(BlobError::InvalidGeometry(format!(
                "{vertices} vertices do not fit 32-bit indices (tubular={} radial={})",
                self.tubular_segments, self.radial_segments
            )));
        }
        if self.p == 0 || self.q == 0 {
            return Err(BlobError::InvalidGeometry(format!(
                "winding numbers must be non-zero, got p={} q={}",
                self.p, self.q
            )));
        }
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        (self.tubular_segments as usize + 1) * (self.radial_segments as usize + 1)
    }

    pub fn index_count(&self) -> usize {
        self.tubular_segments as usize * self.radial_segments as usize * 6
    }

    /// Point on the knot's centre curve at parameter `u`.
    #[inline]
    fn curve(&self, u: f32) -> Vec3 {
        let (su, cu) = u.sin_cos();
        let qu_over_p = self.q as f32 / self.p as f32 * u;
        let cs = qu_over_p.cos();
        Vec3::new(
            self.radius * (2.0 + cs) * 0.5 * cu,
            self.radius * (2.0 + cs) * su * 0.5,
            self.radius * qu_over_p.sin() * 0.5,
        )
    }

    /// Sweep the tube along the curve. Seam rings are duplicated so every
    /// ring has its own vertices, which keeps indexing regular.
    pub fn build(&self) -> Result<MeshData, BlobError> {
        self.validate()?;
        let tubular = self.tubular_segments as usize;
        let radial = self.radial_segments as usize;

        let mut vertices = Vec::with_capacity(self.vertex_count());
        for i in 0..=tubular {
            let u = i as f32 / tubular as f32 * self.p as f32 * TAU;
            let p1 = self.curve(u);
            let p2 = self.curve(u + 0.01);

            // Frenet-like frame: tangent T, then B = T x N and N = B x T
            let t = p2 - p1;
            let n = p2 + p1;
            let b = t.cross(n);
            let n = b.cross(t).normalize();
            let b = b.normalize();

            for j in 0..=radial {
                let v = j as f32 / radial as f32 * TAU;
                let cx = -self.tube * v.cos();
                let cy = self.tube * v.sin();
                let position = p1 + cx * n + cy * b;
                let normal = (position - p1).normalize();
                vertices.push(Vertex {
                    position: position.to_array(),
                    normal: normal.to_array(),
                });
            }
        }

        let mut indices = Vec::with_capacity(self.index_count());
        let stride = (radial + 1) as u32;
        for j in 1..=tubular as u32 {
            for i in 1..=radial as u32 {
                let a = stride * (j - 1) + (i - 1);
                let b = stride * j + (i - 1);
                let c = stride * j + i;
                let d = stride * (j - 1) + i;
                indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }

        log::debug!(
            "[geometry] torus knot p={} q={} vertices={} triangles={}",
            self.p,
            self.q,
            vertices.len(),
            indices.len() / 3
        );
        Ok(MeshData { vertices, indices })
    }
}
