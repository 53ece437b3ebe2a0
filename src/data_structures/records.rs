//! Typed records of a decoded REX file.
//!
//! The low-level deserializer turns the container's data blocks into these
//! collections. Everything downstream only reads them.

use crate::error::{Result, RexError};

/// Sentinel for "no id" (unassigned material, no diffuse texture).
pub const NOT_SPECIFIED: u64 = u64::MAX;

/// A triangle mesh data block.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshRecord {
    pub id: u64,
    pub name: Option<String>,
    /// Id of the material block, `0` or [`NOT_SPECIFIED`] when unassigned.
    pub material_id: u64,
    pub coords: Vec<[f32; 3]>,
    /// Per-vertex RGB, either empty or one entry per coordinate.
    pub colors: Vec<[f32; 3]>,
    /// Per-vertex UV, either empty or one entry per coordinate.
    pub tex_coords: Vec<[f32; 2]>,
    pub triangles: Vec<[u32; 3]>,
}

impl MeshRecord {
    /// `false` if `material_id` is one of the "unassigned" values (`0` or [`NOT_SPECIFIED`]).
    pub fn has_material(&self) -> bool {
        self.material_id != 0 && self.material_id != NOT_SPECIFIED
    }

    /// Check that every triangle index is inside the coordinate list and that
    /// optional per-vertex attributes line up with the coordinates.
    pub fn validate(&self) -> Result<()> {
        let vertex_count = self.coords.len();
        check_attribute(self.id, "colors", self.colors.len(), vertex_count)?;
        check_attribute(self.id, "texture coordinates", self.tex_coords.len(), vertex_count)?;

        for (triangle, indices) in self.triangles.iter().enumerate() {
            if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(RexError::TriangleIndexOutOfRange {
                    mesh_id: self.id,
                    triangle,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }
}

/// A phong-style material block.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialRecord {
    pub id: u64,
    pub kd_rgb: [f32; 3],
    pub ks_rgb: [f32; 3],
    /// Specular exponent, `0` means "use the renderer default".
    pub ns: f32,
    /// Opacity in `[0, 1]`.
    pub alpha: f32,
    /// Image block used as diffuse map, [`NOT_SPECIFIED`] for none.
    pub kd_texture_id: u64,
}

impl Default for MaterialRecord {
    fn default() -> Self {
        Self {
            id: 0,
            kd_rgb: [1.0, 1.0, 1.0],
            ks_rgb: [0.0, 0.0, 0.0],
            ns: 0.0,
            alpha: 1.0,
            kd_texture_id: NOT_SPECIFIED,
        }
    }
}

/// An embedded, still compressed image (PNG or JPEG).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImageRecord {
    pub id: u64,
    pub data: Vec<u8>,
}

/// A point cloud data block.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointListRecord {
    pub id: u64,
    pub points: Vec<[f32; 3]>,
    /// Either empty or one RGB entry per point.
    pub colors: Vec<[f32; 3]>,
}

impl PointListRecord {
    pub fn validate(&self) -> Result<()> {
        check_attribute(self.id, "colors", self.colors.len(), self.points.len())
    }
}

/// A recorded path. Point order is the drawing order of the polyline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrackRecord {
    pub id: u64,
    pub points: Vec<[f32; 3]>,
}

/// A coloured polyline.
#[derive(Clone, Debug, PartialEq)]
pub struct LineSetRecord {
    pub id: u64,
    /// RGBA
    pub color: [f32; 4],
    pub points: Vec<[f32; 3]>,
}

impl Default for LineSetRecord {
    fn default() -> Self {
        Self {
            id: 0,
            color: [1.0, 1.0, 1.0, 1.0],
            points: Vec::new(),
        }
    }
}

/// Explicit placement of a mesh. Only present in newer file versions.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneNodeRecord {
    pub id: u64,
    /// Id of the referenced [`MeshRecord`].
    pub geometry_id: u64,
    pub translation: [f32; 3],
    /// Unit quaternion as `[x, y, z, w]`.
    pub rotation: [f32; 4],
    pub scale: [f32; 3],
}

impl Default for SceneNodeRecord {
    fn default() -> Self {
        Self {
            id: 0,
            geometry_id: 0,
            translation: [0.0; 3],
            rotation: [0.0, 0.0, 0.0, 1.0],
            scale: [1.0; 3],
        }
    }
}

/// All collections of one decoded file, in file order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RexFile {
    pub meshes: Vec<MeshRecord>,
    pub materials: Vec<MaterialRecord>,
    pub images: Vec<ImageRecord>,
    pub point_lists: Vec<PointListRecord>,
    pub tracks: Vec<TrackRecord>,
    pub line_sets: Vec<LineSetRecord>,
    pub scene_nodes: Vec<SceneNodeRecord>,
}

impl RexFile {
    /// `true` if the file carries explicit scene node placements.
    pub fn has_scene_nodes(&self) -> bool {
        !self.scene_nodes.is_empty()
    }
}

fn check_attribute(record_id: u64, attribute: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != 0 && actual != expected {
        return Err(RexError::AttributeLength {
            record_id,
            attribute,
            actual,
            expected,
        });
    }
    Ok(())
}
