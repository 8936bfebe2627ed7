use crate::{Sample, Progress};
use crate::error::Result;
use crate::progress::check;


/// A discretization algorithm.
///
/// `generate_cuts` returns a strictly increasing cut array for
/// one numeric attribute. Algorithms that work on all attributes jointly
/// override `generate_all`, and their `generate_cuts` extracts
/// one attribute of the joint result.
pub trait CutGenerator {
    /// Name of the algorithm, used as the progress label.
    fn name(&self) -> &str;


    /// Returns the sorted cuts for `attribute`.
    fn generate_cuts(&self, attribute: usize, sample: &Sample) -> Vec<f64>;


    /// Returns the cuts for every attribute of `sample`.
    /// The entry of an attribute that is not a numeric conditional one
    /// is `None`.
    fn generate_all(&self, sample: &Sample, progress: &mut dyn Progress)
        -> Result<Vec<Option<Vec<f64>>>>
    {
        let numeric = sample.header()
            .numeric_indices()
            .collect::<Vec<_>>();
        progress.set(self.name(), numeric.len());

        let mut cuts = vec![None; sample.header().len()];
        for attribute in numeric {
            check(&*progress)?;
            cuts[attribute] = Some(self.generate_cuts(attribute, sample));
            progress.step();
        }
        Ok(cuts)
    }
}


/// Records sharing one value of an attribute,
/// with their class counts.
#[derive(Debug, Clone)]
pub(crate) struct ValueGroup {
    pub(crate) value: f64,
    pub(crate) counts: Vec<usize>,
}


/// Groups the sorted `(value, class)` pairs by value.
pub(crate) fn group_by_value(items: &[(f64, usize)], n_classes: usize)
    -> Vec<ValueGroup>
{
    let mut groups: Vec<ValueGroup> = Vec::new();
    for &(value, y) in items {
        match groups.last_mut() {
            Some(group) if group.value == value => { group.counts[y] += 1; },
            _ => {
                let mut counts = vec![0_usize; n_classes];
                counts[y] += 1;
                groups.push(ValueGroup { value, counts, });
            },
        }
    }
    groups
}


/// Indices of every record of `sample`.
#[inline]
pub(crate) fn all_indices(sample: &Sample) -> Vec<usize> {
    (0..sample.len()).collect()
}


/// Returns the cut halfway between two adjacent distinct values.
/// The cut always satisfies `low < cut <= high`,
/// so `low` and `high` are encoded into different intervals
/// even when they are one ulp apart.
#[inline]
pub(crate) fn midpoint(low: f64, high: f64) -> f64 {
    let cut = low + (high - low) / 2.0;
    if cut <= low { high } else { cut }
}


/// Sorts `cuts` and removes duplicates.
pub(crate) fn normalize(mut cuts: Vec<f64>) -> Vec<f64> {
    cuts.sort_by(|a, b| a.total_cmp(b));
    cuts.dedup();
    cuts
}
