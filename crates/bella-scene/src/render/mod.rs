//! wgpu renderer for the floating-sphere layers
//!
//! Mesh generation, GPU layouts and the shader are plain data and always
//! built; device setup and drawing need the `wasm` feature.

mod mesh;
mod shader;
mod uniforms;

#[cfg(feature = "wasm")]
mod init;
#[cfg(feature = "wasm")]
mod pass;
#[cfg(feature = "wasm")]
mod renderer;

pub use mesh::{SphereMesh, Vertex, SPHERE_SEGMENTS};
pub use shader::SHADER_SPHERE;
pub use uniforms::{Globals, InstanceRaw, MAX_POINT_LIGHTS};

#[cfg(feature = "wasm")]
pub use renderer::SceneRenderer;
