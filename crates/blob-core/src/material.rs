//! Physically based material parameters for the ribbon.

use crate::constants::{AMBIENT_INTENSITY, KEY_LIGHT_INTENSITY, KEY_LIGHT_POSITION};
use crate::error::BlobError;
use glam::Vec3;

const MAX_IOR: f32 = 2.333;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicalMaterial {
    pub color: [f32; 3],
    pub transmission: f32,
    pub roughness: f32,
    pub metalness: f32,
    /// Volume thickness used by transmission, in scene units.
    pub thickness: f32,
    pub iridescence: f32,
    pub iridescence_ior: f32,
    /// Thin-film thickness range in nanometres.
    pub iridescence_thickness_range: [f32; 2],
    pub clearcoat: f32,
    pub clearcoat_roughness: f32,
    pub ior: f32,
    pub dispersion: f32,
    pub double_sided: bool,
}

impl Default for PhysicalMaterial {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 1.0],
            transmission: 1.0,
            roughness: 0.0,
            metalness: 0.5,
            thickness: 0.1,
            iridescence: 1.0,
            iridescence_ior: 2.2,
            iridescence_thickness_range: [100.0, 800.0],
            clearcoat: 1.0,
            clearcoat_roughness: 0.0,
            ior: 1.2,
            dispersion: 2.0,
            double_sided: true,
        }
    }
}

fn check_range(
    field: &'static str,
    value: f32,
    lo: f32,
    hi: f32,
    expected: &'static str,
) -> Result<(), BlobError> {
    if value.is_finite() && value >= lo && value <= hi {
        Ok(())
    } else {
        Err(BlobError::InvalidMaterial {
            field,
            value,
            expected,
        })
    }
}

impl PhysicalMaterial {
    pub fn validate(&self) -> Result<(), BlobError> {
        for (i, c) in self.color.iter().enumerate() {
            let field = ["color.r", "color.g", "color.b"][i];
            check_range(field, *c, 0.0, 1.0, "[0, 1]")?;
        }
        check_range("transmission", self.transmission, 0.0, 1.0, "[0, 1]")?;
        check_range("roughness", self.roughness, 0.0, 1.0, "[0, 1]")?;
        check_range("metalness", self.metalness, 0.0, 1.0, "[0, 1]")?;
        check_range("iridescence", self.iridescence, 0.0, 1.0, "[0, 1]")?;
        check_range("clearcoat", self.clearcoat, 0.0, 1.0, "[0, 1]")?;
        check_range("clearcoat_roughness", self.clearcoat_roughness, 0.0, 1.0, "[0, 1]")?;
        check_range("thickness", self.thickness, 0.0, f32::MAX, ">= 0")?;
        check_range("dispersion", self.dispersion, 0.0, f32::MAX, ">= 0")?;
        check_range("ior", self.ior, 1.0, MAX_IOR, "[1, 2.333]")?;
        check_range("iridescence_ior", self.iridescence_ior, 1.0, MAX_IOR, "[1, 2.333]")?;
        let [lo, hi] = self.iridescence_thickness_range;
        check_range("iridescence_thickness_range.min", lo, 0.0, f32::MAX, ">= 0")?;
        check_range("iridescence_thickness_range.max", hi, lo, f32::MAX, ">= min")?;
        Ok(())
    }
}

/// Binding 1 of the displacement program (80 bytes). Matches
/// `MaterialUniforms` in `blob.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniforms {
    pub color_transmission: [f32; 4],
    pub roughness: f32,
    pub metalness: f32,
    pub thickness: f32,
    pub ior: f32,
    pub iridescence: f32,
    pub iridescence_ior: f32,
    pub iridescence_thickness_min: f32,
    pub iridescence_thickness_max: f32,
    pub clearcoat: f32,
    pub clearcoat_roughness: f32,
    pub dispersion: f32,
    pub ambient: f32,
    /// Direction toward the key light (xyz) and its intensity (w).
    pub light: [f32; 4],
}

impl From<&PhysicalMaterial> for MaterialUniforms {
    fn from(m: &PhysicalMaterial) -> Self {
        let dir = Vec3::from(KEY_LIGHT_POSITION).normalize();
        Self {
            color_transmission: [m.color[0], m.color[1], m.color[2], m.transmission],
            roughness: m.roughness,
            metalness: m.metalness,
            thickness: m.thickness,
            ior: m.ior,
            iridescence: m.iridescence,
            iridescence_ior: m.iridescence_ior,
            iridescence_thickness_min: m.iridescence_thickness_range[0],
            iridescence_thickness_max: m.iridescence_thickness_range[1],
            clearcoat: m.clearcoat,
            clearcoat_roughness: m.clearcoat_roughness,
            dispersion: m.dispersion,
            ambient: AMBIENT_INTENSITY,
            light: [dir.x, dir.y, dir.z, KEY_LIGHT_INTENSITY],
        }
    }
}
