use crate::geometry::MeshData;
use glam::{Mat4, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction.
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
        }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }

    /// Same ray expressed in the space that `transform` maps into.
    pub fn transformed(&self, transform: Mat4) -> Ray {
        Ray::new(
            transform.transform_point3(self.origin),
            transform.transform_vector3(self.dir),
        )
    }
}

/// Nearest non-negative hit distance with a sphere. A ray starting inside
/// the sphere reports the exit point.
#[inline]
pub fn ray_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t0 = -b - sq;
    if t0 >= 0.0 {
        return Some(t0);
    }
    let t1 = -b + sq;
    (t1 >= 0.0).then_some(t1)
}

/// Möller–Trumbore intersection, both faces.
#[inline]
pub fn ray_triangle(ray: &Ray, tri: &[Vec3; 3]) -> Option<f32> {
    const EPS: f32 = 1e-7;
    let e1 = tri[1] - tri[0];
    let e2 = tri[2] - tri[0];
    let p = ray.dir.cross(e2);
    let det = e1.dot(p);
    if det.abs() < EPS {
        return None;
    }
    let inv = 1.0 / det;
    let s = ray.origin - tri[0];
    let u = s.dot(p) * inv;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    let q = s.cross(e1);
    let v = ray.dir.dot(q) * inv;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let t = e2.dot(q) * inv;
    (t >= 0.0).then_some(t)
}

/// Nearest hit of a world-space ray with `mesh` placed by `model`.
///
/// `broad_radius` bounds the mesh in object space; rays missing that sphere
/// skip the per-triangle loop. Distances are in world units as long as
/// `model` is rigid.
pub fn pick_mesh(mesh: &MeshData, model: Mat4, broad_radius: f32, ray: &Ray) -> Option<f32> {
    let local = ray.transformed(model.inverse());
    ray_sphere(&local, Vec3::ZERO, broad_radius)?;
    mesh.triangles()
        .filter_map(|tri| ray_triangle(&local, &tri))
        .min_by(|a, b| a.total_cmp(b))
}
