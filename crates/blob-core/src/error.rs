use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlobError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("material field `{field}` out of range: {value} (expected {expected})")]
    InvalidMaterial {
        field: &'static str,
        value: f32,
        expected: &'static str,
    },

    #[error("displacement program failed to compile: {0}")]
    ShaderCompile(String),
}
