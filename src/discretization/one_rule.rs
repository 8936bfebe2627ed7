use crate::Sample;
use crate::error::{MiniSplitsError, Result};
use crate::distribution::accumulate;
use super::cut_generator::*;


/// Holte's 1-Rule discretization.
///
/// Scans the values in increasing order and closes an interval
/// as soon as its majority class has been seen `min_frequency` times.
/// The last interval takes every remaining value.
#[derive(Debug, Clone, Copy)]
pub struct OneRule {
    min_frequency: usize,
}


impl OneRule {
    /// Construct a new instance of [`OneRule`].
    /// Returns an error if `min_frequency == 0`.
    pub fn new(min_frequency: usize) -> Result<Self> {
        if min_frequency == 0 {
            return Err(MiniSplitsError::invalid(
                "min_frequency", "must be positive"
            ));
        }
        Ok(Self { min_frequency })
    }
}


impl CutGenerator for OneRule {
    fn name(&self) -> &str {
        "1R"
    }


    fn generate_cuts(&self, attribute: usize, sample: &Sample) -> Vec<f64> {
        let n_classes = sample.header().n_classes();
        let items = sample.labeled_values(attribute, &all_indices(sample));
        let groups = group_by_value(&items, n_classes);

        let mut acc = vec![0_usize; n_classes];
        let mut cuts = Vec::new();
        for (group, next) in groups.iter().zip(groups.iter().skip(1)) {
            accumulate(&mut acc, &group.counts);
            let majority = acc.iter().copied().max().unwrap_or(0);
            if majority >= self.min_frequency {
                cuts.push(midpoint(group.value, next.value));
                acc.fill(0);
            }
        }
        cuts
    }
}
