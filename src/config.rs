//! Decode configuration.
//!
//! All knobs have sensible defaults, so `Config::default()` reproduces the
//! behaviour of the REX reference tooling.

use crate::data_structures::material::Color;

/// Neutral brown used for meshes without a resolvable material.
pub const DEFAULT_MATERIAL_COLOR: Color = Color::new(0.5, 0.2, 0.0);

/// Line colour of tracks.
pub const DEFAULT_TRACK_COLOR: Color = Color::new(0.0, 1.0, 0.0);

/// Flat colour of point clouds that carry no per-point colours.
pub const DEFAULT_POINT_COLOR: Color = Color::WHITE;

/// Width of an image plane in metres.
pub const IMAGE_PLANE_WIDTH: f32 = 0.4;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub default_material_color: Color,
    pub track_color: Color,
    pub point_color: Color,
    pub image_plane_width: f32,
    /// Append every image that no material references as a textured plane.
    pub images_as_planes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_material_color: DEFAULT_MATERIAL_COLOR,
            track_color: DEFAULT_TRACK_COLOR,
            point_color: DEFAULT_POINT_COLOR,
            image_plane_width: IMAGE_PLANE_WIDTH,
            images_as_planes: false,
        }
    }
}

impl Config {
    pub fn with_default_material_color(mut self, color: Color) -> Self {
        self.default_material_color = color;
        self
    }

    pub fn with_track_color(mut self, color: Color) -> Self {
        self.track_color = color;
        self
    }

    pub fn with_point_color(mut self, color: Color) -> Self {
        self.point_color = color;
        self
    }

    pub fn with_image_plane_width(mut self, width: f32) -> Self {
        self.image_plane_width = width;
        self
    }

    pub fn with_images_as_planes(mut self, enabled: bool) -> Self {
        self.images_as_planes = enabled;
        self
    }
}
