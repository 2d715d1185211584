pub mod camera;
pub mod config;
pub mod constants;
pub mod displacement;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod gpu;
pub mod material;
pub mod noise;
pub mod picking;
pub mod state;
pub mod surface;

pub static BLOB_WGSL: &str = include_str!("../shaders/blob.wgsl");

pub use camera::{Camera, OrbitControls};
pub use config::BlobConfig;
pub use constants::*;
pub use displacement::{displace, PROGRAM_VERSION};
pub use error::BlobError;
pub use frame::{FrameUpdater, SmoothingConfig, SmoothingMode};
pub use geometry::{MeshData, TorusKnotDescriptor, Vertex};
pub use gpu::BlobRenderer;
pub use material::{MaterialUniforms, PhysicalMaterial};
pub use noise::{simplex3, NoiseField, Simplex3};
pub use picking::Ray;
pub use state::{BlobUniforms, HoverFlag, Rotation, UniformSnapshot, UniformState};
pub use surface::BlobSurface;
