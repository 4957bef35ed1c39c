use image::RgbaImage;
use tracing::info;

/// Left/top offsets that center a `cols` x `rows` image on a square canvas.
/// Odd remainders leave the extra pixel on the right/bottom.
pub fn padding_offsets(cols: u32, rows: u32) -> (u32, u32) {
    let max_dim = cols.max(rows);
    ((max_dim - cols) / 2, (max_dim - rows) / 2)
}

/// Centers `image` on a transparent square canvas whose side is its long side.
/// Square inputs are returned as-is.
pub fn pad_to_square(image: RgbaImage) -> RgbaImage {
    let (cols, rows) = image.dimensions();
    if cols == rows {
        return image;
    }

    let max_dim = cols.max(rows);
    let (pad_cols, pad_rows) = padding_offsets(cols, rows);

    info!(
        "Adding padding: cols={}, rows={}, pad_cols={}, pad_rows={}",
        cols, rows, pad_cols, pad_rows
    );
    info!("Final dimensions: {}x{}", max_dim, max_dim);

    let mut padded = RgbaImage::new(max_dim, max_dim);
    let src = image.as_raw();
    let (cols, rows, max_dim) = (cols as usize, rows as usize, max_dim as usize);
    let (pad_cols, pad_rows) = (pad_cols as usize, pad_rows as usize);
    // Copy per row using slice copies to minimize per-pixel indexing
    let dst: &mut [u8] = &mut padded;
    for row in 0..rows {
        let src_offset = row * cols * 4;
        let dst_offset = ((row + pad_rows) * max_dim + pad_cols) * 4;
        dst[dst_offset..dst_offset + cols * 4]
            .copy_from_slice(&src[src_offset..src_offset + cols * 4]);
    }
    padded
}
