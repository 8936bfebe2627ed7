//! Selection of the test placed on a tree node.
use rayon::prelude::*;

use crate::Sample;
use crate::distribution::gain_ratio;
use super::discrimination::Discrimination;


/// A strategy choosing the [`Discrimination`] of a node
/// from the records reaching it.
pub trait DiscriminationProvider {
    /// Returns the best test over the records in `indices`,
    /// or `None` if no attribute separates them.
    fn select(&self, sample: &Sample, indices: &[usize])
        -> Option<Discrimination>;
}


/// Selects the test with the greatest gain ratio.
///
/// Every conditional attribute is scanned, skipping the records
/// whose value is missing. A nominal attribute is split into one branch
/// per value; a numeric one into `<= t` and `> t`, where `t` is the
/// midpoint between two adjacent distinct values.
/// Ties go to the attribute with the smallest index,
/// then to the smallest threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct GainRatioProvider;


impl GainRatioProvider {
    /// Construct a new instance of [`GainRatioProvider`].
    pub fn new() -> Self {
        Self
    }
}


impl DiscriminationProvider for GainRatioProvider {
    fn select(&self, sample: &Sample, indices: &[usize])
        -> Option<Discrimination>
    {
        if indices.is_empty() { return None; }

        let attributes = sample.header()
            .conditional_indices()
            .collect::<Vec<_>>();

        // Scored in parallel, reduced in attribute order.
        let candidates = attributes.par_iter()
            .map(|&attribute| {
                if sample.header()[attribute].is_nominal() {
                    nominal_candidate(sample, attribute, indices)
                } else {
                    numeric_candidate(sample, attribute, indices)
                }
            })
            .collect::<Vec<_>>();

        let mut best: Option<(f64, Discrimination)> = None;
        for (ratio, test) in candidates.into_iter().flatten() {
            if best.map_or(true, |(b, _)| ratio > b) {
                best = Some((ratio, test));
            }
        }
        best.map(|(_, test)| test)
    }
}


fn nominal_candidate(sample: &Sample, attribute: usize, indices: &[usize])
    -> Option<(f64, Discrimination)>
{
    let attr = &sample.header()[attribute];
    let n_values = attr.n_values();
    let n_classes = sample.header().n_classes();

    let mut branches = vec![vec![0_usize; n_classes]; n_values];
    let mut parent = vec![0_usize; n_classes];
    for &i in indices {
        let code = match attr.local_code(sample.value(i, attribute)) {
            Some(code) => code,
            None => { continue; },
        };
        if let Some(y) = sample.decision(i) {
            branches[code][y] += 1;
            parent[y] += 1;
        }
    }

    let ratio = gain_ratio(&parent, &branches)?;
    Some((ratio, Discrimination::Nominal { attribute, n_values }))
}


fn numeric_candidate(sample: &Sample, attribute: usize, indices: &[usize])
    -> Option<(f64, Discrimination)>
{
    let n_classes = sample.header().n_classes();
    let items = sample.labeled_values(attribute, indices);

    let mut right = vec![0_usize; n_classes];
    items.iter().for_each(|&(_, y)| { right[y] += 1; });
    let parent = right.clone();
    let mut left = vec![0_usize; n_classes];

    let mut best: Option<(f64, f64)> = None;
    for k in 0..items.len().saturating_sub(1) {
        let (value, y) = items[k];
        left[y] += 1;
        right[y] -= 1;

        let next = items[k + 1].0;
        if value == next { continue; }

        let ratio = match gain_ratio(&parent, &[&left[..], &right[..]]) {
            Some(ratio) => ratio,
            None => { continue; },
        };
        if best.map_or(true, |(b, _)| ratio > b) {
            best = Some((ratio, threshold_between(value, next)));
        }
    }

    best.map(|(ratio, threshold)| {
        (ratio, Discrimination::Numeric { attribute, threshold })
    })
}


/// Returns a threshold `t` with `low <= t < high`,
/// halfway between the two values when it can be represented.
#[inline]
fn threshold_between(low: f64, high: f64) -> f64 {
    let t = low + (high - low) / 2.0;
    if t >= high { low } else { t }
}
