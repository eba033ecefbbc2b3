//! End-to-end tests for image to ASCII conversion.
//!
//! These go through the full pipeline: encoded file bytes in, text out.

use asciify::ascii::{CharSet, Palette};
use asciify::{convert, convert_file, ConvertError, ConvertOptions};
use image::{ImageFormat, Luma, Rgba, RgbaImage};
use std::collections::HashSet;
use std::io::Cursor;
use std::time::Instant;

fn encode(img: &RgbaImage, format: ImageFormat) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, format).unwrap();
    out.into_inner()
}

fn options_with_width(width: u32) -> ConvertOptions {
    ConvertOptions {
        width,
        ..Default::default()
    }
}

/// Helper to create a test image with a named pattern.
fn make_test_image(pattern: &str, width: u32, height: u32) -> RgbaImage {
    match pattern {
        "gradient_h" => RgbaImage::from_fn(width, height, |x, _| {
            let v = ((x as f32 / (width - 1) as f32) * 255.0).round() as u8;
            Rgba([v, v, v, 255])
        }),
        "gradient_v" => RgbaImage::from_fn(width, height, |_, y| {
            let v = ((y as f32 / (height - 1) as f32) * 255.0).round() as u8;
            Rgba([v, v, v, 255])
        }),
        "face_like" => {
            // Bright center, dark edges
            let cx = width as f32 / 2.0;
            let cy = height as f32 / 2.0;
            let max_dist = (cx.powi(2) + cy.powi(2)).sqrt();
            RgbaImage::from_fn(width, height, |x, y| {
                let dist = ((x as f32 - cx).powi(2) + (y as f32 - cy).powi(2)).sqrt();
                let v = (255.0 * (1.0 - dist / max_dist)).max(0.0) as u8;
                Rgba([v, v, v, 255])
            })
        }
        _ => panic!("unknown pattern {}", pattern),
    }
}

// ==================== Scenarios ====================

#[test]
fn test_two_by_two_black_white() {
    // Rows: [black, white], [black, white]
    let img = RgbaImage::from_fn(2, 2, |x, _| {
        if x == 0 {
            Rgba([0, 0, 0, 255])
        } else {
            Rgba([255, 255, 255, 255])
        }
    });
    let bytes = encode(&img, ImageFormat::Png);

    // height = floor(2 / 2 * 2 * 0.5) = 1
    let art = convert(&bytes, &options_with_width(2)).unwrap();

    let palette = Palette::default();
    let expected = format!("{}{}\n", palette.darkest(), palette.brightest());
    assert_eq!(art.as_str(), expected);
    assert_eq!(art.height(), 1);
}

#[test]
fn test_one_by_one_gray_128() {
    let img = RgbaImage::from_pixel(1, 1, Rgba([128, 128, 128, 255]));
    let bytes = encode(&img, ImageFormat::Png);
    let palette = Palette::default();

    let art = convert(&bytes, &options_with_width(1)).unwrap();

    // floor(128 / 255 * 9) = 4
    let expected = palette.chars()[4];
    assert_eq!(art.as_str(), format!("{}\n", expected));
}

#[test]
fn test_grayscale_png_input() {
    let img = image::GrayImage::from_pixel(1, 1, Luma([128]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png).unwrap();

    let art = convert(out.get_ref(), &options_with_width(1)).unwrap();
    assert_eq!(art.as_str(), "=\n");
}

#[test]
fn test_empty_bytes_is_decode_error() {
    let result = convert(&[], &ConvertOptions::default());
    assert!(matches!(result, Err(ConvertError::Decode(_))));
}

#[test]
fn test_non_image_is_decode_error() {
    let result = convert(b"hello, I am a text file\n", &ConvertOptions::default());
    assert!(matches!(result, Err(ConvertError::Decode(_))));
}

#[test]
fn test_conversion_is_idempotent() {
    let img = make_test_image("face_like", 320, 240);
    let bytes = encode(&img, ImageFormat::Png);
    let options = ConvertOptions::default();

    let first = convert(&bytes, &options).unwrap();
    let second = convert(&bytes, &options).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_default_output_shape() {
    let img = make_test_image("face_like", 640, 480);
    let bytes = encode(&img, ImageFormat::Png);

    let art = convert(&bytes, &ConvertOptions::default()).unwrap();

    // floor(480 / 640 * 100 * 0.5) = 37
    assert_eq!(art.width(), 100);
    assert_eq!(art.height(), 37);
    assert!(art.as_str().ends_with('\n'));
    assert_eq!(art.as_str().matches('\n').count(), 37);
    for line in art.lines() {
        assert_eq!(line.chars().count(), 100);
    }
}

#[test]
fn test_very_wide_image_gets_one_row() {
    let img = RgbaImage::from_pixel(1000, 2, Rgba([255, 255, 255, 255]));
    let bytes = encode(&img, ImageFormat::Png);

    let art = convert(&bytes, &ConvertOptions::default()).unwrap();

    assert_eq!(art.height(), 1);
    assert_eq!(art.lines().count(), 1);
}

#[test]
fn test_other_formats_decode() {
    let img = RgbaImage::from_pixel(8, 8, Rgba([255, 255, 255, 255]));
    for format in [ImageFormat::Bmp, ImageFormat::Tiff] {
        let bytes = encode(&img, format);
        let art = convert(&bytes, &options_with_width(8))
            .unwrap_or_else(|e| panic!("{:?} failed: {}", format, e));
        assert_eq!(art.as_str(), "@@@@@@@@\n@@@@@@@@\n@@@@@@@@\n@@@@@@@@\n");
    }
}

// ==================== Visual Sanity ====================

#[test]
fn test_horizontal_gradient_brightens_left_to_right() {
    let img = make_test_image("gradient_h", 200, 100);
    let bytes = encode(&img, ImageFormat::Png);
    let options = ConvertOptions::default();

    let art = convert(&bytes, &options).unwrap();
    let palette = &options.palette;

    for line in art.lines() {
        let indices: Vec<usize> = line
            .chars()
            .map(|c| palette.chars().iter().position(|p| *p == c).unwrap())
            .collect();
        assert!(
            indices.windows(2).all(|w| w[0] <= w[1]),
            "row should not get darker: {:?}",
            line
        );
        assert_eq!(indices.first(), Some(&0));
        // edge cells average a few pixels, so allow the level below the top
        assert!(*indices.last().unwrap() >= palette.levels() - 2);
    }
}

#[test]
fn test_vertical_gradient_brightens_top_to_bottom() {
    let img = make_test_image("gradient_v", 100, 200);
    let bytes = encode(&img, ImageFormat::Png);

    let art = convert(&bytes, &ConvertOptions::default()).unwrap();
    let lines: Vec<&str> = art.lines().collect();

    assert!(lines.first().unwrap().chars().all(|c| c == ' '));
    assert!(lines.last().unwrap().chars().all(|c| c == '%' || c == '@'));
}

#[test]
fn test_different_charsets_produce_different_output() {
    let img = make_test_image("face_like", 320, 240);
    let bytes = encode(&img, ImageFormat::Png);

    let outputs: HashSet<String> = [CharSet::Standard, CharSet::Blocks, CharSet::Minimal]
        .into_iter()
        .map(|cs| {
            let options = ConvertOptions {
                palette: cs.palette(),
                ..Default::default()
            };
            convert(&bytes, &options).unwrap().into_string()
        })
        .collect();

    assert_eq!(outputs.len(), 3);
}

#[test]
fn test_face_like_has_character_variety() {
    let img = make_test_image("face_like", 640, 480);
    let bytes = encode(&img, ImageFormat::Png);

    let art = convert(&bytes, &ConvertOptions::default()).unwrap();
    let unique: HashSet<char> = art.as_str().chars().filter(|c| *c != '\n').collect();

    assert!(
        unique.len() >= 5,
        "expected at least 5 distinct characters, got {:?}",
        unique
    );
}

#[test]
fn test_invert_swaps_ends() {
    let img = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
    let bytes = encode(&img, ImageFormat::Png);
    let options = ConvertOptions {
        width: 4,
        invert: true,
        ..Default::default()
    };

    let art = convert(&bytes, &options).unwrap();
    assert_eq!(art.as_str(), "@@@@\n@@@@\n");
}

// ==================== Files ====================

#[test]
fn test_convert_file_matches_convert_bytes() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("face.png");
    let img = make_test_image("face_like", 160, 120);
    img.save_with_format(&path, ImageFormat::Png).unwrap();
    let options = ConvertOptions::default();

    let from_file = convert_file(&path, &options).unwrap();
    let from_bytes = convert(&std::fs::read(&path).unwrap(), &options).unwrap();

    assert_eq!(from_file, from_bytes);
}

#[test]
fn test_convert_file_missing() {
    let result = convert_file("/definitely/not/here.png", &ConvertOptions::default());
    assert!(matches!(result, Err(ConvertError::Io { .. })));
}

// ==================== Performance ====================

#[test]
fn test_large_image_converts_quickly() {
    let img = make_test_image("face_like", 1920, 1080);
    let bytes = encode(&img, ImageFormat::Png);
    let options = ConvertOptions::default();

    let start = Instant::now();
    let art = convert(&bytes, &options).unwrap();
    let elapsed = start.elapsed();

    assert_eq!(art.height(), 28);
    // generous bound; debug builds decode PNG slowly
    assert!(elapsed.as_secs() < 30, "took {:?}", elapsed);
}
