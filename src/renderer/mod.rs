//! WebGPU rendering module
//!
//! CPU-side mesh assembly each frame, one pipeline, one draw call.

pub mod camera;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod text;
pub mod vertex;

pub use camera::OrbitCamera;
pub use pipeline::RenderState;
pub use scene::Scene;
pub use text::{Font, TextStyle, typeset};
pub use vertex::Vertex;
