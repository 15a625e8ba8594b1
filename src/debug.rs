use burn::tensor::{PrintOptions, set_print_options};
use num::Float;

pub fn set_tensor_dbg_precision(prec: usize) {
    let po = PrintOptions {
        precision: Option::Some(prec),
        edge_items: 10,
        ..Default::default()
    };

    set_print_options(po);
}

// Helper function for comparing floats
pub fn assert_approx_eq<F>(a: &F, b: &F, epsilon: F)
where
    F: Float + std::fmt::Display + std::fmt::Debug,
{
    assert!(
        (*a - *b).abs() <= epsilon,
        "Values differ: {:?} vs {:?} (tolerance: {:?})",
        *a,
        *b,
        epsilon
    );
}
