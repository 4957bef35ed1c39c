use std::fs::File;
use std::path::Path;

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use iconforge::{
    ConversionParams, ErrorKind, convert_to_frames, convert_to_ico, ensure_output_dir,
    process_directory_to_path, render_preview,
};

//===========================================================================//

#[test]
fn wide_image_becomes_six_png_entries() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("banner.png");
    RgbaImage::from_pixel(100, 50, Rgba([255, 0, 0, 255]))
        .save(&source)
        .unwrap();
    let out = dir.path().join("output");
    ensure_output_dir(&out).unwrap();

    let report = convert_to_ico(&source, &out, &ConversionParams::default()).unwrap();
    assert_eq!(report.output_path, out.join("banner.ico"));
    assert!(!report.white_removed);
    assert_eq!(report.keyed_pixels, 0);

    let icon_dir = read_icon(&report.output_path);
    let sides: Vec<u32> = icon_dir.entries().iter().map(|e| e.width()).collect();
    assert_eq!(sides, vec![16, 32, 48, 64, 128, 256]);
    for entry in icon_dir.entries() {
        assert!(entry.is_png());
        assert_eq!(entry.width(), entry.height());
    }

    // transparent bands above and below the red content
    let big = icon_dir.entries()[5].decode().unwrap();
    assert_eq!(alpha_at(&big, 128, 2), 0);
    assert_eq!(alpha_at(&big, 128, 253), 0);
    assert!(alpha_at(&big, 128, 128) > 250);
}

#[test]
fn white_source_with_keying_is_fully_transparent() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("paper.png");
    RgbaImage::from_pixel(64, 32, Rgba([250, 252, 255, 255]))
        .save(&source)
        .unwrap();

    let params = ConversionParams::default().with_remove_white(true);
    let report = convert_to_ico(&source, dir.path(), &params).unwrap();
    assert!(report.white_removed);
    assert_eq!(report.keyed_pixels, 64 * 32);

    let icon_dir = read_icon(&report.output_path);
    for entry in icon_dir.entries() {
        let image = entry.decode().unwrap();
        assert!(image.rgba_data().chunks(4).all(|px| px[3] == 0));
    }
}

#[test]
fn missing_output_directory_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("logo.png");
    RgbaImage::from_pixel(8, 8, Rgba([0, 0, 255, 255]))
        .save(&source)
        .unwrap();

    let err = convert_to_ico(
        &source,
        &dir.path().join("not-there"),
        &ConversionParams::default(),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn frames_are_available_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("tall.png");
    RgbaImage::from_pixel(30, 90, Rgba([0, 0, 0, 255]))
        .save(&source)
        .unwrap();

    let icon = convert_to_frames(&source, &ConversionParams::default()).unwrap();
    assert_eq!(icon.base_name, "tall");
    assert_eq!(icon.frames.len(), 6);
    assert_eq!(icon.frames[5].image.dimensions(), (256, 256));
    assert!(std::fs::read_dir(dir.path()).unwrap().count() == 1);
}

#[test]
fn preview_fits_the_preview_box() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("photo.png");
    RgbaImage::from_pixel(800, 400, Rgba([10, 10, 10, 255]))
        .save(&source)
        .unwrap();

    let preview = render_preview(&source).unwrap();
    assert_eq!(preview.dimensions(), (300, 300));
}

#[test]
fn batch_counts_processed_skipped_and_failed() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in");
    std::fs::create_dir(&input).unwrap();
    RgbaImage::from_pixel(20, 20, Rgba([1, 2, 3, 255]))
        .save(input.join("a.png"))
        .unwrap();
    RgbImage::from_pixel(20, 10, Rgb([200, 100, 0]))
        .save(input.join("b.jpg"))
        .unwrap();
    std::fs::write(input.join("broken.png"), b"this is not a png file").unwrap();
    std::fs::write(input.join("notes.txt"), b"hello").unwrap();
    std::fs::create_dir(input.join("nested")).unwrap();

    let out = dir.path().join("out");
    let report =
        process_directory_to_path(&input, &out, &ConversionParams::default(), true).unwrap();
    assert_eq!(report.processed, 2);
    assert_eq!(report.skipped, 2);
    assert_eq!(report.errors, 1);
    assert!(out.join("a.ico").exists());
    assert!(out.join("b.ico").exists());

    let err =
        process_directory_to_path(&input, &out, &ConversionParams::default(), false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

//===========================================================================//

fn read_icon(path: &Path) -> ico::IconDir {
    ico::IconDir::read(File::open(path).unwrap()).unwrap()
}

fn alpha_at(image: &ico::IconImage, x: u32, y: u32) -> u8 {
    let index = ((y * image.width() + x) * 4 + 3) as usize;
    image.rgba_data()[index]
}
