use image::ExtendedColorType;
use image::codecs::ico::{IcoEncoder, IcoFrame};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

use crate::core::processing::pipeline::IconFrame;
use crate::error::{Error, Result};
use crate::types::IconSize;

/// Encodes `frames` as PNG-compressed entries of one ICO container.
/// Frames are written as given; nothing is resized here.
pub fn encode_ico<W: Write>(frames: &[IconFrame], writer: W) -> Result<()> {
    let mut encoded = Vec::with_capacity(frames.len());
    for frame in frames {
        let (width, height) = frame.image.dimensions();
        if width != height || IconSize::from_side(width) != Some(frame.size) {
            return Err(Error::UnsupportedSize { width, height });
        }
        encoded.push(IcoFrame::as_png(
            frame.image.as_raw(),
            width,
            height,
            ExtendedColorType::Rgba8,
        )?);
        debug!("Encoded ICO entry {}", frame.size);
    }
    IcoEncoder::new(writer).encode_images(&encoded)?;
    Ok(())
}

pub fn write_ico(frames: &[IconFrame], output: &Path) -> Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    encode_ico(frames, &mut writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::io::Cursor;

    fn frame(side: u32) -> IconFrame {
        IconFrame {
            size: IconSize::from_side(side).unwrap(),
            image: RgbaImage::from_pixel(side, side, Rgba([0, 128, 255, 200])),
        }
    }

    #[test]
    fn container_lists_every_frame() {
        let frames = vec![frame(16), frame(48), frame(256)];
        let mut buf = Vec::new();
        encode_ico(&frames, &mut buf).unwrap();

        let dir = ::ico::IconDir::read(Cursor::new(buf)).unwrap();
        let sizes: Vec<(u32, u32)> = dir
            .entries()
            .iter()
            .map(|e| (e.width(), e.height()))
            .collect();
        assert_eq!(sizes, vec![(16, 16), (48, 48), (256, 256)]);
        assert!(dir.entries().iter().all(|e| e.is_png()));
    }

    #[test]
    fn mismatched_frame_is_refused() {
        let bad = IconFrame {
            size: IconSize::S32,
            image: RgbaImage::new(32, 16),
        };
        let err = encode_ico(&[bad], Vec::new()).unwrap_err();
        assert!(matches!(err, Error::UnsupportedSize { width: 32, height: 16 }));
    }

    #[test]
    fn pixel_data_survives_encoding() {
        let mut buf = Vec::new();
        encode_ico(&[frame(32)], &mut buf).unwrap();
        let dir = ::ico::IconDir::read(Cursor::new(buf)).unwrap();
        let decoded = dir.entries()[0].decode().unwrap();
        assert_eq!(&decoded.rgba_data()[..4], &[0, 128, 255, 200]);
    }
}
