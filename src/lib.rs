//! flow-rex
//!
//! Turns decoded REX scene files into renderer-agnostic geometry buffers and a
//! resolved scene graph. The crate does not talk to a GPU: it produces flat
//! vertex arrays, decoded RGBA textures and material descriptions that any
//! renderer (native or WASM) can upload and draw.
//!
//! High-level modules
//! - `config`: decode options and the default colours of fallback materials
//! - `context`: per-decode shared state, warning collection and logger setup
//! - `data_structures`: records, geometry buffers, materials, textures, scene graph
//! - `decoder`: the decode pipeline and scene assembly
//! - `error`: fatal errors and recoverable warnings
//! - `resources`: builders for geometry, normals, textures, materials and file loading
//!

pub mod config;
pub mod context;
pub mod data_structures;
pub mod decoder;
pub mod error;
pub mod resources;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath;
pub use config::Config;
pub use data_structures::{
    geometry::GeometryBuffer,
    material::{Color, ResolvedMaterial, ShadingModel, Side},
    records::{
        ImageRecord, LineSetRecord, MaterialRecord, MeshRecord, NOT_SPECIFIED, PointListRecord,
        RexFile, SceneNodeRecord, TrackRecord,
    },
    scene_graph::{NodeKind, SceneNode},
    texture::{Texture, WrapMode},
    transform::Transform,
};
#[cfg(not(target_arch = "wasm32"))]
pub use decoder::assemble_parallel;
pub use decoder::{DecodedScene, Decoder, RecordDeserializer, assemble};
pub use error::{RexError, TextureError, Warning};
