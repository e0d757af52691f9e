use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("chain needs at least 2 joints, got {0}")]
    TooFewSegments(usize),

    #[error("segment length must be positive and finite, got {0}")]
    InvalidSegmentLength(f32),

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f32 },

    #[error("gap range [{min}, {max}] is empty or negative")]
    InvalidGapRange { min: f32, max: f32 },

    #[error("initial gap {gap} is outside [{min}, {max}]")]
    GapOutOfRange { gap: f32, min: f32, max: f32 },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("no compatible GPU adapter found")]
    NoAdapter,

    #[error("surface reports no supported {0}")]
    UnsupportedSurface(&'static str),

    #[error("failed to request device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
}
