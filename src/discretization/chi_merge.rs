use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::Sample;
use crate::error::{MiniSplitsError, Result};
use crate::distribution::{accumulate, chi_square};
use super::cut_generator::*;


/// Kerber's ChiMerge discretization.
///
/// Starts with one interval per distinct value and repeatedly merges
/// the adjacent pair with the lowest chi-square statistic.
/// Merging stops once `min_intervals` intervals remain, or once
/// the lowest statistic exceeds the chi-square quantile of order
/// `1 - significance` with `classes - 1` degrees of freedom.
#[derive(Debug, Clone, Copy)]
pub struct ChiMerge {
    significance: f64,
    min_intervals: usize,
}


impl ChiMerge {
    /// Construct a new instance of [`ChiMerge`].
    /// `significance` must lie in `(0, 1)` and
    /// `min_intervals` must be at least `2`.
    pub fn new(significance: f64, min_intervals: usize) -> Result<Self> {
        if !(significance > 0.0 && significance < 1.0) {
            return Err(MiniSplitsError::invalid(
                "significance",
                format!("expected a value in (0, 1), got {significance}"),
            ));
        }
        if min_intervals < 2 {
            return Err(MiniSplitsError::invalid(
                "min_intervals",
                format!("expected at least 2 intervals, got {min_intervals}"),
            ));
        }
        Ok(Self { significance, min_intervals })
    }


    /// The statistic above which two intervals are kept apart.
    pub fn threshold(&self, n_classes: usize) -> f64 {
        let df = n_classes.saturating_sub(1).max(1);
        // At least one degree of freedom, so `new` never fails.
        ChiSquared::new(df as f64)
            .map(|chi2| chi2.inverse_cdf(1.0 - self.significance))
            .unwrap_or(f64::INFINITY)
    }
}


/// A run of adjacent distinct values.
struct Interval {
    low: f64,
    high: f64,
    counts: Vec<usize>,
}


impl CutGenerator for ChiMerge {
    fn name(&self) -> &str {
        "ChiMerge"
    }


    fn generate_cuts(&self, attribute: usize, sample: &Sample) -> Vec<f64> {
        let n_classes = sample.header().n_classes();
        let items = sample.labeled_values(attribute, &all_indices(sample));
        let mut intervals = group_by_value(&items, n_classes)
            .into_iter()
            .map(|group| Interval {
                low: group.value,
                high: group.value,
                counts: group.counts,
            })
            .collect::<Vec<_>>();
        if intervals.len() < 2 {
            return Vec::with_capacity(0);
        }

        let threshold = self.threshold(n_classes);

        // `chis[i]` is the statistic of `intervals[i]` and `intervals[i + 1]`.
        let mut chis = intervals.windows(2)
            .map(|w| chi_square(&w[0].counts, &w[1].counts))
            .collect::<Vec<_>>();

        while intervals.len() > self.min_intervals {
            let (i, lowest) = chis.iter()
                .copied()
                .enumerate()
                .fold((0, f64::MAX), |best, (i, chi)| {
                    if chi < best.1 { (i, chi) } else { best }
                });
            if lowest > threshold { break; }

            let merged = intervals.remove(i + 1);
            accumulate(&mut intervals[i].counts, &merged.counts);
            intervals[i].high = merged.high;

            chis.remove(i);
            if i < chis.len() {
                chis[i] = chi_square(&intervals[i].counts, &intervals[i + 1].counts);
            }
            if i > 0 {
                chis[i - 1] = chi_square(&intervals[i - 1].counts, &intervals[i].counts);
            }
        }

        intervals.windows(2)
            .map(|w| midpoint(w[0].high, w[1].low))
            .collect()
    }
}
