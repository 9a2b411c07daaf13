//! WebGPU rendering module
//!
//! The simulation is described as a [`Scene`] in field coordinates and drawn
//! as a single triangle list of flat-colored shapes.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderInitError, ShapeRenderer};
pub use scene::Scene;
pub use vertex::Vertex;
