use std::io::Cursor;

use flow_rex::{
    ImageRecord, MaterialRecord, MeshRecord, NOT_SPECIFIED, RecordDeserializer, RexFile,
};
use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};

pub const EPSILON: f32 = 1e-5;

/// Deserializer stand-in that ignores the bytes and hands out a fixed file.
pub struct FixedFile(pub Option<RexFile>);

impl RecordDeserializer for FixedFile {
    fn deserialize(&self, _bytes: &[u8]) -> anyhow::Result<Option<RexFile>> {
        Ok(self.0.clone())
    }
}

/// Deserializer stand-in that always fails.
pub struct BrokenFile;

impl RecordDeserializer for BrokenFile {
    fn deserialize(&self, _bytes: &[u8]) -> anyhow::Result<Option<RexFile>> {
        anyhow::bail!("unexpected data block type 42")
    }
}

pub fn png_bytes(width: u32, height: u32, pixel: [u8; 4]) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba(pixel));
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, ImageFormat::Png)
        .expect("failed to encode png fixture");
    bytes.into_inner()
}

pub fn jpeg_bytes(width: u32, height: u32, pixel: [u8; 3]) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb(pixel));
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, ImageFormat::Jpeg)
        .expect("failed to encode jpeg fixture");
    bytes.into_inner()
}

pub fn image(id: u64, data: Vec<u8>) -> ImageRecord {
    ImageRecord { id, data }
}

/// The unit triangle in the XY plane, counter-clockwise seen from +Z.
pub fn triangle_mesh(id: u64) -> MeshRecord {
    MeshRecord {
        id,
        name: None,
        material_id: NOT_SPECIFIED,
        coords: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        colors: Vec::new(),
        tex_coords: Vec::new(),
        triangles: vec![[0, 1, 2]],
    }
}

pub fn textured_quad(id: u64, material_id: u64) -> MeshRecord {
    MeshRecord {
        id,
        name: Some(format!("quad {id}")),
        material_id,
        coords: vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ],
        colors: Vec::new(),
        tex_coords: vec![[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]],
        triangles: vec![[0, 1, 2], [0, 2, 3]],
    }
}

pub fn colored_triangle(id: u64, material_id: u64) -> MeshRecord {
    MeshRecord {
        material_id,
        colors: vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        ..triangle_mesh(id)
    }
}

pub fn material(id: u64, kd_rgb: [f32; 3]) -> MaterialRecord {
    MaterialRecord {
        id,
        kd_rgb,
        ..Default::default()
    }
}

pub fn textured_material(id: u64, kd_texture_id: u64) -> MaterialRecord {
    MaterialRecord {
        kd_texture_id,
        ..material(id, [1.0, 1.0, 1.0])
    }
}

pub fn length(v: [f32; 3]) -> f32 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

pub fn assert_vec3_eq(actual: [f32; 3], expected: [f32; 3]) {
    for i in 0..3 {
        assert!(
            (actual[i] - expected[i]).abs() < EPSILON,
            "vectors differ: {:?} != {:?}",
            actual,
            expected
        );
    }
}
