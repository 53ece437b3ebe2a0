use flow_rex::{Texture, TextureError, WrapMode};

mod common;

use crate::common::test_utils::{jpeg_bytes, png_bytes};

#[test]
fn decodes_png() {
    let texture = Texture::from_bytes(&png_bytes(3, 2, [10, 20, 30, 128])).unwrap();

    assert_eq!((texture.width, texture.height), (3, 2));
    assert_eq!(texture.stride(), 12);
    assert_eq!(texture.data.len(), 24);
    assert_eq!(texture.pixel(2, 1), Some([10, 20, 30, 128]));
    assert_eq!(texture.pixel(3, 0), None);
    assert_eq!(texture.wrap_s, WrapMode::Repeat);
    assert_eq!(texture.wrap_t, WrapMode::Repeat);
}

#[test]
fn decodes_jpeg_to_opaque_rgba() {
    let texture = Texture::from_bytes(&jpeg_bytes(16, 8, [200, 100, 50])).unwrap();

    assert_eq!((texture.width, texture.height), (16, 8));
    assert_eq!(texture.data.len(), 16 * 8 * 4);
    let [r, g, b, a] = texture.pixel(4, 4).unwrap();
    assert_eq!(a, 255);
    // lossy, so only roughly the input colour
    assert!(r.abs_diff(200) < 10 && g.abs_diff(100) < 10 && b.abs_diff(50) < 10);
}

#[test]
fn aspect_ratio_is_height_over_width() {
    let texture = Texture::from_bytes(&png_bytes(4, 2, [0, 0, 0, 255])).unwrap();
    assert_eq!(texture.aspect_ratio(), 0.5);
}

#[test]
fn unknown_signature_is_unsupported() {
    assert_eq!(
        Texture::from_bytes(b"definitely not an image"),
        Err(TextureError::UnsupportedFormat)
    );
    assert_eq!(Texture::from_bytes(&[]), Err(TextureError::UnsupportedFormat));
}

#[test]
fn other_formats_are_refused() {
    let gif = b"GIF89a\x01\x00\x01\x00\x00\x00\x00;";
    assert_eq!(Texture::from_bytes(gif), Err(TextureError::UnsupportedFormat));
}

#[test]
fn truncated_png_fails_to_decode() {
    let png = png_bytes(8, 8, [255, 0, 0, 255]);
    let result = Texture::from_bytes(&png[..24]);

    assert!(matches!(result, Err(TextureError::Decode(_))), "{:?}", result);
}

#[test]
fn raw_rows_must_be_tightly_packed() {
    assert_eq!(
        Texture::from_rgba(2, 2, vec![0; 20]),
        Err(TextureError::UnsupportedStride {
            stride: 10,
            expected: 8
        })
    );
    assert!(Texture::from_rgba(2, 2, vec![0; 15]).is_err());
    assert!(Texture::from_rgba(2, 2, vec![0; 16]).is_ok());
}
