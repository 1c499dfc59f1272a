//! Scene error types.

use std::path::PathBuf;

/// Errors raised by scene lookups and persistence.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// No object with this name exists in the scene.
    #[error("unknown object {0}")]
    UnknownObject(String),

    /// The named object does not reference a shape.
    #[error("object {0} has no shape")]
    MissingShape(String),

    /// An object references a mesh, material or instance group that does not exist.
    #[error("object {object} references missing {kind} {index}")]
    DanglingReference {
        /// Referencing object.
        object: String,
        /// Kind of the missing entity.
        kind: &'static str,
        /// Missing index.
        index: usize,
    },

    /// A face or line references a vertex past the end of the position array.
    #[error("{kind} {element} references vertex {index}, but the mesh has {vertices} vertices")]
    InvalidTopology {
        /// Topology kind: triangle, quad or line.
        kind: &'static str,
        /// Offending element within its topology array.
        element: usize,
        /// Out-of-range vertex index.
        index: u32,
        /// Vertex count of the mesh.
        vertices: usize,
    },

    /// Failed to read a scene or shape file.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a scene or shape file.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// File that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create an output directory.
    #[error("cannot create directory {}: {source}", .path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A scene or shape file is not valid JSON for the expected layout.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        /// Offending file.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to serialize scene content to JSON.
    #[error("failed to serialize scene: {0}")]
    Serialize(#[source] serde_json::Error),
}
