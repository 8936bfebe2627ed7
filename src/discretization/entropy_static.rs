use crate::Sample;
use super::cut_generator::*;
use super::mdlp::best_boundary;


/// Entropy-minimizing discretization of Fayyad and Irani,
/// applied to each attribute independently.
///
/// The value range is bisected recursively at the boundary minimizing
/// the class entropy, as long as the MDL criterion accepts the split.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyMinStatic;


impl EntropyMinStatic {
    /// Construct a new instance of [`EntropyMinStatic`].
    pub fn new() -> Self {
        Self
    }
}


impl CutGenerator for EntropyMinStatic {
    fn name(&self) -> &str {
        "Entropy minimization (static)"
    }


    fn generate_cuts(&self, attribute: usize, sample: &Sample) -> Vec<f64> {
        let n_classes = sample.header().n_classes();
        let items = sample.labeled_values(attribute, &all_indices(sample));

        let mut cuts = Vec::new();
        bisect(&items, n_classes, &mut cuts);
        cuts
    }
}


/// Pushes the accepted cuts of `items` to `cuts` in increasing order.
fn bisect(items: &[(f64, usize)], n_classes: usize, cuts: &mut Vec<f64>) {
    let boundary = match best_boundary(items, n_classes) {
        Some(boundary) if boundary.is_accepted() => boundary,
        _ => { return; },
    };

    let (left, right) = items.split_at(boundary.position);
    bisect(left, n_classes, cuts);
    cuts.push(boundary.cut);
    bisect(right, n_classes, cuts);
}
