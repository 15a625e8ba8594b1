use burn::{prelude::Backend, tensor::Tensor};

use crate::tensor_ops::linspace;

/// Picks the single uniform scale factor for the shorter-edge resize policy.
///
/// The factor simultaneously tries to bring the shorter edge to exactly
/// `shorter_target` and guarantees the longer edge never exceeds
/// `longer_limit`; whichever constraint is tighter wins. This is the standard
/// resize policy used by detection training recipes on COCO.
///
/// # Arguments
///
/// * `image_height` / `image_width` – Dimensions of the input image.
/// * `shorter_target` – Desired length of the shorter edge after scaling.
/// * `longer_limit` – Hard ceiling on the longer edge after scaling.
///
/// # Returns
///
/// The scale factor to apply uniformly to both axes.
pub fn compute_resize_scale(
    image_height: usize,
    image_width: usize,
    shorter_target: u32,
    longer_limit: u32,
) -> f32 {
    let longer = image_height.max(image_width) as f32;
    let shorter = image_height.min(image_width) as f32;

    (longer_limit as f32 / longer).min(shorter_target as f32 / shorter)
}

/// Resizes an image tensor by a single uniform scale factor on both axes.
///
/// The output dimensions are `round(dim * scale)` per axis, so the aspect
/// ratio is preserved exactly up to integer rounding of the final sizes.
///
/// # Arguments
///
/// * `image` – The image tensor in `[C, H, W]` format.
/// * `scale` – The factor applied to height and width alike.
///
/// # Returns
///
/// A new tensor of shape `[C, round(H * scale), round(W * scale)]`.
pub fn resize_by_scale<B: Backend>(image: Tensor<B, 3>, scale: f32) -> Tensor<B, 3> {
    let [_ch, height, width] = image.dims();

    let new_h = (height as f32 * scale).round() as usize;
    let new_w = (width as f32 * scale).round() as usize;

    resize_bilinear(image, new_w, new_h)
}

/// Resizes an image tensor to the specified width and height using bilinear
/// interpolation.
///
/// Output pixel centers are spread evenly over the source grid and each value
/// is interpolated from its four surrounding source pixels. The computation
/// runs entirely as tensor ops, so it works for any channel count and stays
/// on the tensor's device.
///
/// # Arguments
///
/// * `image` – The image tensor in `[C, H, W]` format.
/// * `new_w` – Target width of the output image.
/// * `new_h` – Target height of the output image.
///
/// # Returns
///
/// A new tensor of shape `[C, new_h, new_w]`.
///
/// # Notes
///
/// - If the target dimensions equal the current ones the input is returned
///   unchanged.
/// - The operation does not modify the input tensor; a new tensor is
///   produced.
///
pub fn resize_bilinear<B: Backend>(image: Tensor<B, 3>, new_w: usize, new_h: usize) -> Tensor<B, 3> {
    let [_ch, height, width] = image.dims();

    if new_h == height && new_w == width {
        return image;
    }

    let device = image.device();

    let grid_y = linspace::<B>(0.0, (height - 1) as f32, new_h, &device);
    let grid_x = linspace::<B>(0.0, (width - 1) as f32, new_w, &device);

    let y1 = grid_y.clone().floor().int();
    let x1 = grid_x.clone().floor().int();
    let y2 = (y1.clone() + 1).clamp_max(height as i32 - 1);
    let x2 = (x1.clone() + 1).clamp_max(width as i32 - 1);

    // Fractional offsets, shaped to broadcast over [C, new_h, new_w]
    let dy = (grid_y - y1.clone().float()).reshape([1, new_h as i32, 1]);
    let dx = (grid_x - x1.clone().float()).reshape([1, 1, new_w as i32]);

    let top_left = image.clone().select(1, y1.clone()).select(2, x1.clone());
    let top_right = image.clone().select(1, y1).select(2, x2.clone());
    let bottom_left = image.clone().select(1, y2.clone()).select(2, x1);
    let bottom_right = image.select(1, y2).select(2, x2);

    let top = top_left * (1.0 - dx.clone()) + top_right * dx.clone();
    let bottom = bottom_left * (1.0 - dx.clone()) + bottom_right * dx;

    top * (1.0 - dy.clone()) + bottom * dy
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::{NdArray, ndarray::NdArrayDevice};
    use burn::tensor::{Tolerance, ops::FloatElem};
    use num::Float;

    #[test]
    fn bilinear_resize_test() {
        let device = &NdArrayDevice::default();
        type B = NdArray<f32>;
        type FT = FloatElem<B>;

        // Interpolate each 2x2 pixel block up to 4x4

        #[rustfmt::skip]
        let image: Tensor<B, 3> = Tensor::from_data(
            [
                [[10,  20],
                 [30,  40]],

                [[50,  60],
                 [70,  80]],
            ],
            device,
        );

        let resized = resize_bilinear(image, 4, 4);

        Tensor::<B, 3>::from_data(
            [
                [
                    [10.00, 13.33, 16.67, 20.00],
                    [16.67, 20.00, 23.33, 26.67],
                    [23.33, 26.67, 30.00, 33.33],
                    [30.00, 33.33, 36.67, 40.00],
                ],
                [
                    [50.00, 53.33, 56.67, 60.00],
                    [56.67, 60.00, 63.33, 66.67],
                    [63.33, 66.67, 70.00, 73.33],
                    [70.00, 73.33, 76.67, 80.00],
                ],
            ],
            device,
        )
        .into_data()
        .assert_approx_eq::<FT>(&resized.to_data(), Tolerance::default());
    }

    #[test]
    fn resize_by_scale_dims_test() {
        let device = &NdArrayDevice::default();
        type B = NdArray<f32>;

        let image: Tensor<B, 3> = Tensor::ones([3, 30, 50], device);
        let resized = resize_by_scale(image, 0.5);

        assert_eq!(resized.dims(), [3, 15, 25]);

        let image: Tensor<B, 3> = Tensor::ones([1, 600, 1000], device);
        let resized = resize_by_scale(image, 1.333);

        // 600 * 1.333 = 799.8 rounds up, 1000 * 1.333 lands exactly
        assert_eq!(resized.dims(), [1, 800, 1333]);
    }

    #[test]
    fn aspect_ratio_preserved_test() {
        let device = &NdArrayDevice::default();
        type B = NdArray<f32>;

        for (height, width) in [(600usize, 1000usize), (333, 500), (1024, 768), (57, 57)] {
            let scale = compute_resize_scale(height, width, 800, 1333);
            let image: Tensor<B, 3> = Tensor::zeros([1, height, width], device);
            let [_, new_h, new_w] = resize_by_scale(image, scale).dims();

            // Both axes were multiplied by the same factor
            let h_ratio = new_h as f32 / height as f32;
            let w_ratio = new_w as f32 / width as f32;
            assert!(
                (h_ratio - w_ratio).abs() < 0.01,
                "axis ratios diverge: {h_ratio} vs {w_ratio}"
            );
        }
    }

    #[test]
    fn longer_edge_cap_test() {
        for (height, width) in [(600usize, 1000usize), (100, 2000), (2000, 2000), (5, 3000)] {
            let scale = compute_resize_scale(height, width, 800, 1333);
            let longer = height.max(width) as f32;

            assert!(longer * scale <= 1333.0 + 1e-3);
        }
    }

    #[test]
    fn shorter_edge_target_test() {
        // Sizes where the longer edge cap is not the binding constraint
        for (height, width) in [(500usize, 600usize), (640, 700), (800, 900)] {
            let scale = compute_resize_scale(height, width, 800, 1333);
            let shorter = height.min(width) as f32;

            assert!((shorter * scale - 800.0).abs() < 1e-3);
        }
    }

    #[test]
    fn resize_scale_example_test() {
        let scale = compute_resize_scale(600, 1000, 800, 1333);

        // Shorter edge asks for 800/600, longer edge caps at 1333/1000
        assert!((scale - 1.333).abs() < f32::epsilon() * 4.0);
    }
}
