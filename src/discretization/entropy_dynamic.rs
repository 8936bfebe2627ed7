use crate::{Sample, Progress, NoProgress};
use crate::error::Result;
use crate::progress::check;
use super::cut_generator::*;
use super::mdlp::{best_boundary, Boundary};


/// Entropy-minimizing discretization over all attributes jointly.
///
/// Each recursive step picks the single (attribute, boundary) pair
/// of highest information gain among all numeric attributes,
/// applies the MDL acceptance rule to it,
/// and splits the records along that attribute.
/// The cuts of every step are collected per attribute.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyMinDynamic;


impl EntropyMinDynamic {
    /// Construct a new instance of [`EntropyMinDynamic`].
    pub fn new() -> Self {
        Self
    }


    fn run(&self, sample: &Sample, progress: &dyn Progress)
        -> Result<Vec<Option<Vec<f64>>>>
    {
        let mut partition = RecordPartition {
            sample,
            attributes: sample.header().numeric_indices().collect(),
            n_classes: sample.header().n_classes(),
            cuts: vec![Vec::new(); sample.header().len()],
        };
        partition.split(all_indices(sample), progress)?;

        let RecordPartition { attributes, cuts: mut collected, .. } = partition;
        let mut cuts = vec![None; sample.header().len()];
        for attribute in attributes {
            let found = std::mem::take(&mut collected[attribute]);
            cuts[attribute] = Some(normalize(found));
        }
        Ok(cuts)
    }
}


/// State of one invocation of [`EntropyMinDynamic`].
struct RecordPartition<'a> {
    sample: &'a Sample,
    attributes: Vec<usize>,
    n_classes: usize,
    cuts: Vec<Vec<f64>>,
}


impl RecordPartition<'_> {
    fn split(&mut self, indices: Vec<usize>, progress: &dyn Progress)
        -> Result<()>
    {
        check(progress)?;

        let mut best: Option<(usize, Boundary)> = None;
        for &attribute in self.attributes.iter() {
            let items = self.sample.labeled_values(attribute, &indices);
            let boundary = match best_boundary(&items, self.n_classes) {
                Some(boundary) => boundary,
                None => { continue; },
            };
            let is_better = best.as_ref()
                .map_or(true, |(_, b)| boundary.gain() > b.gain());
            if is_better {
                best = Some((attribute, boundary));
            }
        }

        let (attribute, boundary) = match best {
            Some((a, b)) if b.is_accepted() => (a, b),
            _ => { return Ok(()); },
        };
        self.cuts[attribute].push(boundary.cut);

        // Records missing the value of `attribute` leave the partition.
        let (left, right): (Vec<_>, Vec<_>) = indices.into_iter()
            .filter(|&i| !self.sample.value(i, attribute).is_nan())
            .partition(|&i| self.sample.value(i, attribute) < boundary.cut);

        self.split(left, progress)?;
        self.split(right, progress)
    }
}


impl CutGenerator for EntropyMinDynamic {
    fn name(&self) -> &str {
        "Entropy minimization (dynamic)"
    }


    fn generate_cuts(&self, attribute: usize, sample: &Sample) -> Vec<f64> {
        self.run(sample, &NoProgress)
            .ok()
            .and_then(|mut cuts| cuts[attribute].take())
            .unwrap_or_default()
    }


    fn generate_all(&self, sample: &Sample, progress: &mut dyn Progress)
        -> Result<Vec<Option<Vec<f64>>>>
    {
        progress.set(self.name(), 1);
        let cuts = self.run(sample, &*progress)?;
        progress.step();
        Ok(cuts)
    }
}
