use crate::{
    context::Context,
    data_structures::{records::ImageRecord, texture::Texture},
    error::{TextureError, Warning},
};

/**
 * Decodes the diffuse texture `texture_id` of material `material_id`.
 *
 * `image` is the record found for `texture_id`, if any. Textures are an enhancement,
 * so every failure (unknown id, undecodable bytes, unsupported stride) is reported as
 * a warning and `None` is returned.
 */
pub fn load_texture(
    image: Option<&ImageRecord>,
    material_id: u64,
    texture_id: u64,
    ctx: &Context,
) -> Option<Texture> {
    let Some(image) = image else {
        ctx.warn(Warning::MissingImage {
            material_id,
            texture_id,
        });
        return None;
    };
    match decode_image(image) {
        Ok(texture) => {
            log::debug!(
                "Decoded texture {} ({}x{}) for material {}",
                image.id,
                texture.width,
                texture.height,
                material_id
            );
            Some(texture)
        }
        Err(reason) => {
            ctx.warn(Warning::Texture {
                image_id: image.id,
                material_id,
                reason,
            });
            None
        }
    }
}

/// Decode an image record into an RGBA raster with repeat wrapping on both axes.
pub fn decode_image(image: &ImageRecord) -> Result<Texture, TextureError> {
    Texture::from_bytes(&image.data)
}
