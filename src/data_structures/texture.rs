//! Decoded RGBA textures.
//!
//! This module provides [`Texture`], a CPU-side RGBA8 raster that a renderer
//! can upload as is. Rows are always tightly packed (`stride == width * 4`),
//! anything else is rejected before a texture is ever created.

use image::{GenericImageView, ImageFormat};

use crate::error::TextureError;

/// Texture addressing outside of `[0, 1]`. REX textures always repeat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WrapMode {
    #[default]
    Repeat,
}

/// A decoded RGBA8 raster with its sampling wrap modes.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    pub width: u32,
    pub height: u32,
    /// RGBA8, row-major, top row first.
    pub data: Vec<u8>,
    pub wrap_s: WrapMode,
    pub wrap_t: WrapMode,
}

impl Texture {
    pub const BYTES_PER_PIXEL: usize = 4;

    /// Decode an embedded PNG or JPEG image.
    ///
    /// The format is detected from the byte signature. Every other format is
    /// refused even if the image crate could read it.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TextureError> {
        let format = match image::guess_format(bytes) {
            Ok(format @ (ImageFormat::Png | ImageFormat::Jpeg)) => format,
            _ => return Err(TextureError::UnsupportedFormat),
        };
        let img = image::load_from_memory_with_format(bytes, format)
            .map_err(|e| TextureError::Decode(e.to_string()))?;
        let (width, height) = img.dimensions();
        Self::from_rgba(width, height, img.to_rgba8().into_raw())
    }

    /// Wrap an already decoded RGBA8 raster.
    ///
    /// `data` must hold exactly `height` rows of `width * 4` bytes.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, TextureError> {
        let expected = width as usize * Self::BYTES_PER_PIXEL;
        let stride = match height {
            0 => expected,
            h => data.len() / h as usize,
        };
        if stride != expected || stride * height as usize != data.len() {
            return Err(TextureError::UnsupportedStride { stride, expected });
        }
        Ok(Self {
            width,
            height,
            data,
            wrap_s: WrapMode::Repeat,
            wrap_t: WrapMode::Repeat,
        })
    }

    /// Bytes per row. Always `width * 4`.
    pub fn stride(&self) -> usize {
        self.width as usize * Self::BYTES_PER_PIXEL
    }

    /// `height / width`, used to size image planes.
    pub fn aspect_ratio(&self) -> f32 {
        if self.width == 0 {
            return 1.0;
        }
        self.height as f32 / self.width as f32
    }

    /// RGBA value at (`x`, `y`).
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = y as usize * self.stride() + x as usize * Self::BYTES_PER_PIXEL;
        self.data
            .get(offset..offset + Self::BYTES_PER_PIXEL)
            .map(|p| [p[0], p[1], p[2], p[3]])
    }
}
