use burn::{
    prelude::Backend,
    tensor::{Tensor, s},
};

/// A rectangular region to extract from an image, in the coordinate space of
/// that image.
///
/// The origin may be negative and the rectangle may extend past the far edges
/// of the image; [`crop_from_image`] fills whatever lies outside the image
/// with zeros instead of erroring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropRegion {
    pub x: i64,
    pub y: i64,
    pub width: usize,
    pub height: usize,
}

impl CropRegion {
    pub fn new(x: i64, y: i64, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Extracts a rectangular region from a `[C, H, W]` image tensor, zero-filling
/// any part of the region that lies outside the image bounds.
///
/// The output always has shape `[C, region.height, region.width]` with the
/// same channel count and element type as the input. Only the pixels where
/// the region overlaps the image are copied; the rest of the output stays
/// zero. A region with no overlap at all yields an all-zero buffer.
///
/// # Arguments
///
/// * `image` – The source image tensor in `[C, H, W]` format.
/// * `region` – The rectangle to extract, in source image coordinates.
///
/// # Returns
///
/// A new `[C, region.height, region.width]` tensor.
///
/// # Notes
///
/// - Out-of-bounds coordinates never panic. Callers can always request a
///   canonical-size crop without bounds-checking first.
/// - The source tensor is not modified.
///
pub fn crop_from_image<B: Backend>(image: Tensor<B, 3>, region: CropRegion) -> Tensor<B, 3> {
    let [channels, image_height, image_width] = image.dims();

    let CropRegion {
        x,
        y,
        width,
        height,
    } = region;

    // Overlap between the requested region and the actual image bounds, in
    // source coordinates
    let src_x1 = x.clamp(0, image_width as i64) as usize;
    let src_y1 = y.clamp(0, image_height as i64) as usize;
    let src_x2 = (x + width as i64).clamp(0, image_width as i64) as usize;
    let src_y2 = (y + height as i64).clamp(0, image_height as i64) as usize;

    if src_x2 <= src_x1 || src_y2 <= src_y1 {
        return Tensor::zeros([channels, height, width], &image.device());
    }

    // Where the overlap lands inside the output buffer
    let dst_x = (-x).max(0) as usize;
    let dst_y = (-y).max(0) as usize;

    let overlap = image.slice(s![.., src_y1..src_y2, src_x1..src_x2]);
    let [_ch, overlap_height, overlap_width] = overlap.dims();

    overlap.pad(
        (
            dst_x,
            width - (dst_x + overlap_width),
            dst_y,
            height - (dst_y + overlap_height),
        ),
        0.0,
    )
}
