//! Error handling for REX decoding.
//!
//! Decoding distinguishes two severities:
//!
//! - [`RexError`] is fatal. The file is structurally broken (a triangle points
//!   past the vertex list, a scene node references a mesh that does not exist,
//!   nothing could be deserialized at all) and no scene graph is produced.
//! - [`Warning`] is recoverable. Something optional could not be honoured (an
//!   image does not decode, a material id has no record) and the pipeline keeps
//!   going with a fallback. Warnings are collected next to the finished scene.

use thiserror::Error;

/// Fatal decode failure. Assembly stops at the first one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RexError {
    #[error("nothing to decode: input buffer is empty")]
    EmptyInput,

    #[error("nothing to decode: the deserializer produced no REX file")]
    NothingToDecode,

    #[error("cannot decode REX file: {0}")]
    Deserialize(String),

    #[error(
        "mesh {mesh_id}: triangle {triangle} references vertex {index}, but the mesh only has {vertex_count} vertices"
    )]
    TriangleIndexOutOfRange {
        mesh_id: u64,
        triangle: usize,
        index: u32,
        vertex_count: usize,
    },

    #[error("record {record_id}: {attribute} has {actual} entries, expected {expected}")]
    AttributeLength {
        record_id: u64,
        attribute: &'static str,
        actual: usize,
        expected: usize,
    },

    #[error("scene node {node_id} references geometry {geometry_id}, which is not part of the file")]
    MissingGeometry { node_id: u64, geometry_id: u64 },

    #[error("background task failed: {0}")]
    Task(String),
}

/// Result alias used throughout the decode pipeline.
pub type Result<T> = std::result::Result<T, RexError>;

/// Recoverable issue. The affected texture or material is left out and a
/// fallback is used instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Warning {
    #[error("image {image_id} (material {material_id}): {reason}")]
    Texture {
        image_id: u64,
        material_id: u64,
        reason: TextureError,
    },

    #[error("material {material_id} references texture {texture_id}, which is not part of the file")]
    MissingImage { material_id: u64, texture_id: u64 },

    #[error("mesh {mesh_id} references material {material_id}, which is not part of the file")]
    MissingMaterial { mesh_id: u64, material_id: u64 },

    #[error("image {image_id} cannot be shown as a plane: {reason}")]
    ImagePlane { image_id: u64, reason: TextureError },

    #[error("{collection} id {id} occurs more than once, only the first record is addressable")]
    DuplicateId { collection: &'static str, id: u64 },
}

/// Why an embedded image could not become a texture.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextureError {
    #[error("unsupported image format (only PNG and JPEG are accepted)")]
    UnsupportedFormat,

    #[error("cannot decode image: {0}")]
    Decode(String),

    #[error("unsupported stride {stride} bytes per row, expected {expected}")]
    UnsupportedStride { stride: usize, expected: usize },
}
