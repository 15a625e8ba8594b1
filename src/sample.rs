use burn::data::dataset::vision::BoundingBox;
use burn::tensor::{Int, Tensor, TensorData, backend::Backend};
use image::{GrayImage, RgbImage};

/// A detection training sample moving through the preprocessing pipeline.
///
/// `Sample` bundles an image tensor with its optional annotations. It is the
/// unit of work handed to a region sampler: the sampler consumes the record,
/// rescales the image and boxes, and hands back a new record of the same
/// shape.
///
/// # Fields
///
/// * `image` – The image tensor in `[C, H, W]` format; `C` is 1 for grayscale
///   input and 3 for RGB input.
/// * `bboxes` – Optional tensor of bounding boxes in `[N, 4]` format
///   (`[x, y, w, h]`, absolute pixel units, top-left origin).
/// * `labels` – Optional tensor of class labels for the bounding boxes. The
///   region samplers carry labels through untouched.
/// * `resize_scale` – The uniform scale factor applied by a region sampler,
///   `None` until a sampler has run. Evaluation code uses it to map predicted
///   coordinates back to original-image space.
///
#[derive(Clone, Debug)]
pub struct Sample<B: Backend> {
    pub image: Tensor<B, 3>,
    pub bboxes: Option<Tensor<B, 2>>,
    pub labels: Option<Tensor<B, 1, Int>>,
    pub resize_scale: Option<f32>,
}

impl<B: Backend> Sample<B> {
    /// Creates a new [`Sample`] directly from tensors representing the image,
    /// optional bounding boxes, and optional labels.
    ///
    /// # Arguments
    ///
    /// * `image` - A 3D tensor representing the image, shaped `[channels, height, width]`.
    /// * `bboxes` - An optional 2D tensor of bounding boxes, shaped `[num_boxes, 4]`.
    /// * `labels` - An optional 1D tensor of integer class labels for each
    ///   bounding box.
    ///
    /// # Returns
    ///
    /// A [`Sample`] instance with no resize scale recorded yet.
    ///
    pub fn new(
        image: Tensor<B, 3>,
        bboxes: Option<Tensor<B, 2>>,
        labels: Option<Tensor<B, 1, Int>>,
    ) -> Self {
        Self {
            image,
            bboxes,
            labels,
            resize_scale: None,
        }
    }

    /// Creates a new [`Sample`] from an `RgbImage` and optional bounding boxes
    /// and labels.
    ///
    /// # Arguments
    ///
    /// * `image` - An `RgbImage` from the `image` crate, representing the raw RGB input image.
    /// * `bboxes` - An optional 2D tensor of bounding boxes, shaped `[num_boxes, 4]`.
    /// * `labels` - An optional 1D tensor of integer class labels corresponding to the
    ///   bounding boxes.
    /// * `device` - A reference to the backend device where the tensors should
    ///   be allocated.
    ///
    /// # Returns
    ///
    /// A [`Sample`] instance containing the converted `[3, H, W]` image tensor
    /// and the provided annotations.
    ///
    pub fn from_rgb8(
        image: RgbImage,
        bboxes: Option<Tensor<B, 2>>,
        labels: Option<Tensor<B, 1, Int>>,
        device: &B::Device,
    ) -> Self {
        Self::new(Self::rgb_img_as_tensor(image, device), bboxes, labels)
    }

    /// Creates a new [`Sample`] from a single-channel `GrayImage`.
    ///
    /// Grayscale input is represented as a `[1, H, W]` tensor so the rest of
    /// the pipeline handles it uniformly with RGB input.
    pub fn from_luma8(
        image: GrayImage,
        bboxes: Option<Tensor<B, 2>>,
        labels: Option<Tensor<B, 1, Int>>,
        device: &B::Device,
    ) -> Self {
        Self::new(Self::luma_img_as_tensor(image, device), bboxes, labels)
    }

    /// Converts an `image::RgbImage` into a 3-channel tensor in `[C, H, W]` format.
    ///
    /// The pixel values are converted to the backend float type and the channel
    /// dimension is moved to the first axis.
    ///
    /// # Parameters
    ///
    /// * `image` – An `image::RgbImage` to convert.
    /// * `device` – The device where the resulting tensor will be allocated.
    ///
    /// # Returns
    ///
    /// A [`Tensor<B, 3>`] representing the image in `[3, H, W]` format.
    ///
    /// # Notes
    ///
    /// - No normalization or scaling is applied; pixel values remain in the `0–255` range.
    /// - The channel-first format `[C, H, W]` is standard for deep learning frameworks.
    ///
    pub fn rgb_img_as_tensor(image: RgbImage, device: &B::Device) -> Tensor<B, 3> {
        let (width, height) = image.dimensions();
        let img_vec = image.into_raw().iter().map(|&p| p as f32).collect();

        Tensor::<B, 3>::from_data(
            TensorData::new(img_vec, [height as usize, width as usize, 3])
                .convert::<B::FloatElem>(),
            device,
        )
        .permute([2, 0, 1])
    }

    /// Converts an `image::GrayImage` into a `[1, H, W]` tensor.
    ///
    /// Single-channel data is already stored row major, so no axis permutation
    /// is needed.
    pub fn luma_img_as_tensor(image: GrayImage, device: &B::Device) -> Tensor<B, 3> {
        let (width, height) = image.dimensions();
        let img_vec = image.into_raw().iter().map(|&p| p as f32).collect();

        Tensor::<B, 3>::from_data(
            TensorData::new(img_vec, [1, height as usize, width as usize])
                .convert::<B::FloatElem>(),
            device,
        )
    }
}

/// Converts a bounding box into a tensor.
///
/// Takes a `BoundingBox` and converts it into a single-row `[1, 4]` tensor in
/// `[x, y, w, h]` format.
///
/// # Parameters
/// - `bbox`: The bounding box to be converted.
///
/// # Returns
/// The `[x, y, w, h]` tensor representing the bounding box.
pub fn bbox_as_tensor<B: Backend>(bbox: BoundingBox, device: &B::Device) -> Tensor<B, 2> {
    Tensor::<B, 2>::from_data([bbox.coords], device)
}

/// Creates an RGB test image with a specified pattern.
///
/// Generates a new image of the given width and height, filling it with the
/// specified RGB pattern.
///
/// # Arguments
///
/// * `width` – The width of the image in pixels.
/// * `height` – The height of the image in pixels.
/// * `pattern` – A 3-element array representing the RGB pattern to fill the image with.
///
/// # Returns
///
/// An `RgbImage` with the specified width, height, and pattern applied to all pixels.
pub fn create_test_image(width: u32, height: u32, pattern: [u8; 3]) -> RgbImage {
    let mut img = RgbImage::new(width, height);
    let img_pattern: image::Rgb<u8> = image::Rgb(pattern);

    for px in img.pixels_mut() {
        *px = img_pattern;
    }

    img
}
