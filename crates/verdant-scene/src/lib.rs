//! Scene data model for procedural generation: meshes, objects, instances,
//! the mesh utility primitives the generators rely on, and JSON persistence.

mod color;
mod error;
mod io;
mod mesh;
mod scene;

pub mod shape;

pub use color::{srgb_to_linear, srgb8};
pub use error::SceneError;
pub use io::{InstanceListing, load_scene, prepare_output_dirs, save_scene};
pub use mesh::{DEFAULT_COLOR, Mesh};
pub use scene::{
    Frame, Instance, InstanceId, Material, MaterialId, Object, ObjectId, Scene, ShapeId,
};
