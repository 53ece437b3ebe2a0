//! Materials as seen by the renderer.

use crate::data_structures::texture::Texture;

/// Linear RGB colour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl From<[f32; 3]> for Color {
    fn from(rgb: [f32; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}

impl From<Color> for [f32; 3] {
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b]
    }
}

/// Which lighting pipeline a renderer should use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShadingModel {
    /// Lit phong-style shading with diffuse/specular/shininess.
    Standard,
    /// Unlit, flat colour or per-vertex colour.
    Basic,
}

/// Which faces get rasterized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Side {
    #[default]
    Front,
    Double,
}

/// A fully resolved material, shared by every node that uses it.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedMaterial {
    pub shading: ShadingModel,
    /// Shade from the geometry's colour array instead of `diffuse`.
    pub vertex_colors: bool,
    pub diffuse: Color,
    pub specular: Color,
    /// `None` leaves the renderer's default exponent in place.
    pub shininess: Option<f32>,
    pub opacity: f32,
    pub side: Side,
    pub diffuse_texture: Option<Texture>,
}

impl ResolvedMaterial {
    /// Lit material with the given diffuse colour and neutral everything else.
    pub fn standard(diffuse: Color) -> Self {
        Self {
            shading: ShadingModel::Standard,
            vertex_colors: false,
            diffuse,
            specular: Color::BLACK,
            shininess: None,
            opacity: 1.0,
            side: Side::Front,
            diffuse_texture: None,
        }
    }

    /// Unlit material with a flat colour.
    pub fn basic(color: Color) -> Self {
        Self {
            shading: ShadingModel::Basic,
            ..Self::standard(color)
        }
    }

    /// Unlit material that takes its colour from the vertex colour array.
    pub fn vertex_color() -> Self {
        Self {
            vertex_colors: true,
            ..Self::basic(Color::WHITE)
        }
    }

    pub fn has_texture(&self) -> bool {
        self.diffuse_texture.is_some()
    }

    pub fn is_vertex_color(&self) -> bool {
        self.vertex_colors
    }
}
