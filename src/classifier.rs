//! The traits exposed to the consumers of the fitted models.
use rayon::prelude::*;

use crate::{Sample, Header};


/// A trait that defines the behavior of classifier.
/// You only need to implement `classify` and `classify_with_distribution`.
pub trait Classifier {
    /// Returns the class (local code of the decision) of `record`,
    /// or `None` if no decision can be made.
    fn classify(&self, record: &[f64]) -> Option<usize>;


    /// Returns one score per class.
    /// The scores sum to `1`, or are all `0` if no decision can be made.
    fn classify_with_distribution(&self, record: &[f64]) -> Vec<f64>;


    /// Classify every record of `sample`.
    fn classify_all(&self, sample: &Sample) -> Vec<Option<usize>>
        where Self: Sync
    {
        sample.records()
            .par_iter()
            .map(|record| self.classify(record))
            .collect()
    }


    /// Fraction of the records of `sample` whose decision is predicted.
    /// Records with a missing decision are not counted.
    fn accuracy(&self, sample: &Sample) -> f64
        where Self: Sync
    {
        let predictions = self.classify_all(sample);
        let (n_labeled, n_correct) = predictions.into_iter()
            .enumerate()
            .filter_map(|(i, p)| sample.decision(i).map(|y| (y, p)))
            .fold((0_usize, 0_usize), |(n, c), (y, p)| {
                (n + 1, c + usize::from(p == Some(y)))
            });
        if n_labeled == 0 {
            0.0
        } else {
            n_correct as f64 / n_labeled as f64
        }
    }
}


/// A trait for record-wise transformations
/// such as [`Discretization`](crate::Discretization).
pub trait Transformer {
    /// Returns the transformed copy of `record`.
    fn transform(&self, record: &[f64]) -> Vec<f64>;


    /// Returns the header of the transformed records.
    fn header(&self) -> &Header;
}
