use burn::{config::Config, prelude::Backend};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::warn;

use crate::{
    boxes::scale_boxes,
    crop::{CropRegion, crop_from_image},
    resize::{compute_resize_scale, resize_by_scale},
    sample::Sample,
    sampler::RegionSampler,
};

/// Configuration for [`COCOTrainingRegionSampler`].
///
/// The defaults reproduce the typical COCO training recipe: resize so the
/// shorter edge becomes 800 while capping the longer edge at 1333, then place
/// the result on a 1333x1333 canvas large enough to contain every case.
#[derive(Config)]
pub struct COCOTrainingRegionSamplerConfig {
    /// `(height, width)` of the output canvas every sample is placed on.
    #[config(default = "(1333, 1333)")]
    pub output_size: (usize, usize),
    /// Candidate lengths for the shorter edge. Each call draws a target
    /// uniformly from the inclusive interval spanned by the smallest and
    /// largest entry.
    #[config(default = "vec![800]")]
    pub resize_shorter_range: Vec<u32>,
    /// Hard ceiling on the longer edge after scaling.
    #[config(default = 1333)]
    pub resize_longer_limit: u32,
}

impl COCOTrainingRegionSamplerConfig {
    /// Initializes the sampler with an operating system seeded generator.
    pub fn init(&self) -> COCOTrainingRegionSampler<StdRng> {
        self.init_with_rng(StdRng::from_os_rng())
    }

    /// Initializes the sampler with a caller supplied generator, making the
    /// shorter-edge draw reproducible under a fixed seed.
    ///
    /// # Panics
    ///
    /// - If `resize_shorter_range` is empty.
    /// - If the largest shorter-edge candidate exceeds `resize_longer_limit`.
    ///
    pub fn init_with_rng<R: Rng>(&self, rng: R) -> COCOTrainingRegionSampler<R> {
        assert!(
            !self.resize_shorter_range.is_empty(),
            "resize_shorter_range must contain at least one candidate length"
        );

        let resize_shorter_min = *self.resize_shorter_range.iter().min().unwrap();
        let resize_shorter_max = *self.resize_shorter_range.iter().max().unwrap();

        assert!(
            resize_shorter_max <= self.resize_longer_limit,
            "shorter edge candidates exceed the longer edge limit: {} > {}",
            resize_shorter_max,
            self.resize_longer_limit
        );

        COCOTrainingRegionSampler {
            output_size: self.output_size,
            resize_shorter_min,
            resize_shorter_max,
            resize_longer_limit: self.resize_longer_limit,
            rng,
        }
    }
}

/// Region sampler implementing the typical preprocessing for COCO detection
/// training:
///
/// 1. Resize the image while keeping the aspect ratio, so that the shorter
///    edge reaches a target drawn from the configured range. If that would
///    push the longer edge past `resize_longer_limit`, the longer edge is
///    pinned to the limit instead.
/// 2. Place the resized image flush against the top left corner of a fixed
///    size canvas and zero-pad the remainder, so every output has identical
///    dimensions.
///
/// Bounding boxes are rescaled with the same factor as the image, and the
/// chosen factor is recorded on the sample for the evaluator to map
/// predictions back to original coordinates.
///
/// # Type Parameters
///
/// * `R` – Random number generator used for the shorter-edge draw
///   (default: `StdRng`).
///
#[derive(Clone, Debug)]
pub struct COCOTrainingRegionSampler<R = StdRng>
where
    R: Rng,
{
    pub output_size: (usize, usize),
    pub resize_shorter_min: u32,
    pub resize_shorter_max: u32,
    pub resize_longer_limit: u32,
    pub rng: R,
}

impl<B: Backend, R: Rng> RegionSampler<B> for COCOTrainingRegionSampler<R> {
    /// Resizes the sample's image and bounding boxes and packages the result
    /// on the canonical canvas.
    ///
    /// # Arguments
    ///
    /// * `sample` – The sample to transform, consumed by the call.
    ///
    /// # Returns
    ///
    /// A new [`Sample`] whose image has exactly the configured output size,
    /// whose bounding boxes (if present) are rescaled with the same uniform
    /// factor as the image, and whose `resize_scale` records that factor.
    /// Labels are carried through untouched.
    ///
    /// # Notes
    ///
    /// - The resized image never gets cropped when it fits the canvas; the
    ///   scale formula guarantees it does for any configuration where the
    ///   shorter-edge candidates stay within the longer-edge limit and the
    ///   canvas matches that limit. Should it overhang anyway, the excess is
    ///   discarded with a warning rather than an error.
    /// - Degenerate inputs (zero-size images) are not rejected; the scale
    ///   arithmetic propagates whatever the division produces.
    ///
    fn apply(&mut self, sample: Sample<B>) -> Sample<B> {
        let [_ch, image_height, image_width] = sample.image.dims();
        let (output_height, output_width) = self.output_size;

        let shorter_target = self
            .rng
            .random_range(self.resize_shorter_min..=self.resize_shorter_max);

        let resize_scale = compute_resize_scale(
            image_height,
            image_width,
            shorter_target,
            self.resize_longer_limit,
        );

        let image = resize_by_scale(sample.image, resize_scale);

        let [_ch, resized_height, resized_width] = image.dims();
        if resized_height > output_height || resized_width > output_width {
            warn!(
                "resized image ({}x{}) overhangs the {}x{} canvas, excess content is discarded",
                resized_height, resized_width, output_height, output_width
            );
        }

        let bboxes = sample
            .bboxes
            .map(|bboxes| scale_boxes(bboxes, resize_scale));

        // Anchor the resized image at the top left corner of the canvas; the
        // remainder of the canvas stays zero
        let image = crop_from_image(image, CropRegion::new(0, 0, output_width, output_height));

        Sample {
            image,
            bboxes,
            labels: sample.labels,
            resize_scale: Some(resize_scale),
        }
    }

    fn num_regions(&self) -> usize {
        1
    }

    fn output_size(&self) -> (usize, usize) {
        self.output_size
    }
}
