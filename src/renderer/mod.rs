//! WebGPU rendering module
//!
//! The scene is rebuilt from a [`crate::sim::Snapshot`] every frame as flat
//! colored triangles; no game logic lives here.

pub mod pipeline;
pub mod shapes;
pub mod vertex;
pub mod view;

pub use pipeline::RenderState;
pub use vertex::Vertex;
pub use view::Viewport;
