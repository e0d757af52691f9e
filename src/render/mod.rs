//! WebGPU rendering module
//!
//! GPU context, the flat-colour pipeline, CPU tessellation of scene shapes,
//! and the renderer that ties them together.

pub mod context;
pub mod mesh;
pub mod pipeline;
pub mod renderer;

pub use context::GpuContext;
pub use mesh::{Tessellator, Vertex};
pub use pipeline::RenderPipelines;
pub use renderer::SceneRenderer;
