use burn::{
    prelude::Backend,
    tensor::{Tensor, s},
};

/// Splits an `[N, 4]` bounding box tensor into its four column components.
///
/// Boxes are stored as `[x, y, w, h]` rows: top-left corner followed by width
/// and height, in absolute pixel units.
///
/// # Arguments
///
/// * `bboxes` - Tensor of shape `[num_boxes, 4]`.
///
/// # Returns
///
/// A tuple `(x, y, w, h)` of `[num_boxes, 1]` tensors, one per column.
pub fn boxes_to_components<B: Backend>(
    bboxes: Tensor<B, 2>,
) -> (Tensor<B, 2>, Tensor<B, 2>, Tensor<B, 2>, Tensor<B, 2>) {
    let x = bboxes.clone().slice(s![.., 0..1]);
    let y = bboxes.clone().slice(s![.., 1..2]);
    let w = bboxes.clone().slice(s![.., 2..3]);
    let h = bboxes.slice(s![.., 3..4]);

    (x, y, w, h)
}

/// Rescales `[x, y, w, h]` bounding boxes by a single uniform factor.
///
/// The same multiplicative scale that resized the image is applied to every
/// component. Origins are floored to whole pixels; widths and heights keep
/// their fractional value but are clamped upward so no box degenerates below
/// one pixel per side.
///
/// # Arguments
///
/// * `bboxes` - Tensor of shape `[num_boxes, 4]` in `[x, y, w, h]` format.
/// * `scale` - The uniform scale factor applied to the image.
///
/// # Returns
///
/// A new `[num_boxes, 4]` tensor with rows
/// `[floor(x*scale), floor(y*scale), max(w*scale, 1), max(h*scale, 1)]`.
///
/// # Notes
///
/// - Origins are not clamped to any canvas bounds. When the resized image is
///   smaller than the output canvas, boxes may reference the zero-padded area;
///   downstream consumers tolerate this.
///
pub fn scale_boxes<B: Backend>(bboxes: Tensor<B, 2>, scale: f32) -> Tensor<B, 2> {
    let (x, y, w, h) = boxes_to_components(bboxes);

    Tensor::cat(
        vec![
            (x * scale).floor(),
            (y * scale).floor(),
            (w * scale).clamp_min(1.0),
            (h * scale).clamp_min(1.0),
        ],
        1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::{NdArray, ndarray::NdArrayDevice};
    use burn::tensor::{Tolerance, ops::FloatElem};

    #[test]
    fn components_test() {
        let device = &NdArrayDevice::default();
        type B = NdArray<f32>;

        let bboxes =
            Tensor::<B, 2>::from_floats([[1.0, 2.0, 3.0, 4.0], [5.0, 6.0, 7.0, 8.0]], device);

        let (x, y, w, h) = boxes_to_components(bboxes);

        Tensor::<B, 2>::from_data([[1.0], [5.0]], device)
            .into_data()
            .assert_eq(&x.into_data(), false);
        Tensor::<B, 2>::from_data([[2.0], [6.0]], device)
            .into_data()
            .assert_eq(&y.into_data(), false);
        Tensor::<B, 2>::from_data([[3.0], [7.0]], device)
            .into_data()
            .assert_eq(&w.into_data(), false);
        Tensor::<B, 2>::from_data([[4.0], [8.0]], device)
            .into_data()
            .assert_eq(&h.into_data(), false);
    }

    #[test]
    fn scale_boxes_test() {
        let device = &NdArrayDevice::default();
        type B = NdArray<f32>;
        type FT = FloatElem<B>;

        let bboxes = Tensor::<B, 2>::from_floats(
            [[100.0, 100.0, 50.0, 50.0], [10.0, 20.0, 30.0, 40.0]],
            device,
        );

        let scaled = scale_boxes(bboxes, 1.333);

        Tensor::<B, 2>::from_data(
            [[133.0, 133.0, 66.65, 66.65], [13.0, 26.0, 39.99, 53.32]],
            device,
        )
        .into_data()
        .assert_approx_eq::<FT>(&scaled.into_data(), Tolerance::default());
    }

    #[test]
    fn scale_boxes_minimum_size_test() {
        let device = &NdArrayDevice::default();
        type B = NdArray<f32>;

        // Tiny boxes shrink below one pixel per side and get clamped back up
        let bboxes =
            Tensor::<B, 2>::from_floats([[4.0, 4.0, 2.0, 3.0], [0.0, 0.0, 8.0, 8.0]], device);

        let scaled = scale_boxes(bboxes, 0.25);

        Tensor::<B, 2>::from_data([[1.0, 1.0, 1.0, 1.0], [0.0, 0.0, 2.0, 2.0]], device)
            .into_data()
            .assert_eq(&scaled.into_data(), false);
    }
}
