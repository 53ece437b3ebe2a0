//! Engine-independent data structures: records, geometry, materials, textures, transforms and scene graphs.
//!
//! This module contains the core data types for scene representation:
//!
//! - `records` contains the typed collections of a decoded REX file
//! - `geometry` contains flat vertex attribute buffers
//! - `material` contains resolved material descriptions
//! - `texture` contains decoded RGBA rasters
//! - `transform` holds per-node translation, rotation and scale
//! - `scene_graph` enables hierarchical scene organization

pub mod geometry;
pub mod material;
pub mod records;
pub mod scene_graph;
pub mod texture;
pub mod transform;
