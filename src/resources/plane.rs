use std::sync::Arc;

use crate::{
    config::Config,
    data_structures::{
        material::{Color, ResolvedMaterial, Side},
        records::ImageRecord,
        scene_graph::{NodeKind, SceneNode},
    },
    error::TextureError,
    resources::{mesh::build_image_plane_geometry, texture::decode_image},
};

/**
 * Shows an embedded image as a textured, double sided plane.
 *
 * The plane is `config.image_plane_width` wide and as high as the image's aspect ratio
 * requires. Unlike material textures a broken image is reported to the caller, who decides
 * whether that is fatal.
 */
pub fn image_plane_node(image: &ImageRecord, config: &Config) -> Result<SceneNode, TextureError> {
    let texture = decode_image(image)?;
    let width = config.image_plane_width;
    let height = width * texture.aspect_ratio();

    let material = ResolvedMaterial {
        side: Side::Double,
        diffuse_texture: Some(texture),
        ..ResolvedMaterial::standard(Color::WHITE)
    };

    Ok(SceneNode::leaf(
        format!("image-{}", image.id),
        NodeKind::Mesh,
        image.id,
        Arc::new(build_image_plane_geometry(width, height)),
        Arc::new(material),
    ))
}
