//! Renderer-agnostic geometry buffers.
//!
//! A [`GeometryBuffer`] holds flat vertex attribute arrays ready for upload.
//! Whether an optional array is present is meaningful: a renderer picks its
//! shading pipeline based on it (for instance vertex colors replace the
//! assigned material).

/// Flat vertex attribute arrays of one mesh, point list or polyline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeometryBuffer {
    /// 3 floats per vertex.
    pub positions: Vec<f32>,
    /// 3 floats (RGB) per vertex.
    pub colors: Option<Vec<f32>>,
    /// 2 floats per vertex.
    pub uvs: Option<Vec<f32>>,
    /// 3 floats per vertex.
    pub normals: Option<Vec<f32>>,
    /// Triangle list, 3 indices per triangle.
    pub indices: Option<Vec<u32>>,
}

impl GeometryBuffer {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.as_ref().map_or(0, |indices| indices.len() / 3)
    }

    pub fn has_vertex_colors(&self) -> bool {
        self.colors.is_some()
    }

    /// Position of vertex `i`, if it exists.
    pub fn position(&self, i: usize) -> Option<[f32; 3]> {
        self.positions
            .get(i * 3..i * 3 + 3)
            .map(|p| [p[0], p[1], p[2]])
    }

    /// Normal of vertex `i`, if normals were computed and the vertex exists.
    pub fn normal(&self, i: usize) -> Option<[f32; 3]> {
        self.normals
            .as_ref()
            .and_then(|normals| normals.get(i * 3..i * 3 + 3))
            .map(|n| [n[0], n[1], n[2]])
    }

    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn color_bytes(&self) -> Option<&[u8]> {
        self.colors.as_deref().map(bytemuck::cast_slice)
    }

    pub fn uv_bytes(&self) -> Option<&[u8]> {
        self.uvs.as_deref().map(bytemuck::cast_slice)
    }

    pub fn normal_bytes(&self) -> Option<&[u8]> {
        self.normals.as_deref().map(bytemuck::cast_slice)
    }

    pub fn index_bytes(&self) -> Option<&[u8]> {
        self.indices.as_deref().map(bytemuck::cast_slice)
    }
}

/// Flatten a list of fixed-size vectors into one contiguous array.
pub(crate) fn flatten<const N: usize>(items: &[[f32; N]]) -> Vec<f32> {
    items.iter().flatten().copied().collect()
}
