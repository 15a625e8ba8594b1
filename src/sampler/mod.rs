use burn::prelude::Backend;

use crate::sample::Sample;

pub mod coco;

/// Interface for transforms that cut one or more fixed-size regions out of a
/// variable-size input sample.
///
/// A region sampler owns its source of randomness, so concrete variants take
/// `&mut self` in [`RegionSampler::apply`] and behave reproducibly when
/// constructed with a seeded generator. Configuration is immutable after
/// construction; the only mutable state is the generator itself, which keeps
/// independent sampler instances safe to run concurrently on separate
/// samples.
pub trait RegionSampler<B: Backend> {
    /// Consumes a sample and returns it with the image replaced by the
    /// sampled region(s) and the annotations rescaled to match.
    fn apply(&mut self, sample: Sample<B>) -> Sample<B>;

    /// Number of regions produced per input sample.
    fn num_regions(&self) -> usize;

    /// The fixed `(height, width)` every produced region has.
    fn output_size(&self) -> (usize, usize);
}
