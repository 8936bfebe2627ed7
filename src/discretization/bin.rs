//! Unsupervised binning: equal-width and equal-frequency cuts.
use crate::Sample;
use crate::error::{MiniSplitsError, Result};
use super::cut_generator::*;


/// Ranges narrower than this are not cut.
const EPS: f64 = 1e-10;


fn check_intervals(intervals: usize) -> Result<()> {
    if intervals < 2 {
        return Err(MiniSplitsError::invalid(
            "intervals",
            format!("expected at least 2 intervals, got {intervals}"),
        ));
    }
    Ok(())
}


/// Cuts the range `[min, max]` of an attribute
/// into `intervals` ranges of the same width.
#[derive(Debug, Clone, Copy)]
pub struct EqualWidth {
    intervals: usize,
}


impl EqualWidth {
    /// Construct a new instance of [`EqualWidth`].
    /// Returns an error if `intervals < 2`.
    pub fn new(intervals: usize) -> Result<Self> {
        check_intervals(intervals)?;
        Ok(Self { intervals })
    }
}


impl CutGenerator for EqualWidth {
    fn name(&self) -> &str {
        "Equal width"
    }


    fn generate_cuts(&self, attribute: usize, sample: &Sample) -> Vec<f64> {
        let stats = match sample.numeric_statistics(attribute) {
            Some(stats) if stats.count > 0 => stats,
            _ => { return Vec::with_capacity(0); },
        };

        // If the minimum value almost equals to the maximum one,
        // the whole range is a single interval.
        let (min, max) = (stats.min, stats.max);
        if max - min < EPS {
            return Vec::with_capacity(0);
        }

        let width = (max - min) / self.intervals as f64;
        (1..self.intervals).map(|i| min + width * i as f64)
            .collect()
    }
}


/// Cuts an attribute into `intervals` ranges
/// holding almost the same number of records.
#[derive(Debug, Clone, Copy)]
pub struct EqualFrequency {
    intervals: usize,
}


impl EqualFrequency {
    /// Construct a new instance of [`EqualFrequency`].
    /// Returns an error if `intervals < 2`.
    pub fn new(intervals: usize) -> Result<Self> {
        check_intervals(intervals)?;
        Ok(Self { intervals })
    }
}


impl CutGenerator for EqualFrequency {
    fn name(&self) -> &str {
        "Equal frequency"
    }


    fn generate_cuts(&self, attribute: usize, sample: &Sample) -> Vec<f64> {
        let mut values = sample.records()
            .iter()
            .map(|record| record[attribute])
            .filter(|v| !v.is_nan())
            .collect::<Vec<_>>();
        values.sort_by(|a, b| a.total_cmp(b));

        let n_values = values.len();
        let mut cuts: Vec<f64> = Vec::with_capacity(self.intervals - 1);
        for i in 1..self.intervals {
            let mut pos = i * n_values / self.intervals;
            if pos == 0 { continue; }

            // Equal values never straddle a cut,
            // so move to the next change of value.
            while pos < n_values && values[pos] == values[pos - 1] {
                pos += 1;
            }
            if pos >= n_values { break; }

            let cut = midpoint(values[pos - 1], values[pos]);
            if cuts.last().map_or(true, |&last| cut > last) {
                cuts.push(cut);
            }
        }
        cuts
    }
}
