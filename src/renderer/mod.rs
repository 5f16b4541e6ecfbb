//! WebGPU rendering module
//!
//! Everything is drawn as flat-colored rectangles in camera space.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderState, world_to_ndc};
pub use vertex::Vertex;
