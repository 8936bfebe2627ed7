use serde::{Serialize, Deserialize};

use crate::{Sample, DecisionTree};
use crate::error::{MiniSplitsError, Result};
use super::split::{DiscriminationProvider, GainRatioProvider};


/// Share of the training records held out for pruning by default.
pub const DEFAULT_PRUNING_RATIO: f64 = 1.0 / 3.0;
/// Seed of the hold-out shuffle set as default.
pub const DEFAULT_SEED: u64 = 1234;
/// Nodes with fewer records than this become leaves by default.
pub const DEFAULT_MIN_SPLIT_SIZE: usize = 2;


/// Parameters of [`DecisionTree`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TreeOptions {
    /// Prune the grown tree on a held-out part of the training records.
    pub pruning: bool,
    /// Share of the training records held out for pruning.
    pub pruning_ratio: f64,
    /// Seed of the hold-out shuffle.
    pub seed: u64,
    /// Maximal depth of the tree. `None` means unbounded.
    pub max_depth: Option<usize>,
    /// Nodes with fewer records become leaves.
    pub min_split_size: usize,
}


impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            pruning: true,
            pruning_ratio: DEFAULT_PRUNING_RATIO,
            seed: DEFAULT_SEED,
            max_depth: None,
            min_split_size: DEFAULT_MIN_SPLIT_SIZE,
        }
    }
}


impl TreeOptions {
    /// Returns an error if a parameter is out of range.
    pub fn validate(&self) -> Result<()> {
        if !(self.pruning_ratio > 0.0 && self.pruning_ratio < 1.0) {
            return Err(MiniSplitsError::invalid(
                "pruning_ratio",
                format!("expected a value in (0, 1), got {}", self.pruning_ratio),
            ));
        }
        if self.max_depth == Some(0) {
            return Err(MiniSplitsError::invalid(
                "max_depth",
                "tree must have positive depth",
            ));
        }
        if self.min_split_size == 0 {
            return Err(MiniSplitsError::invalid(
                "min_split_size",
                "expected a positive number of records",
            ));
        }
        Ok(())
    }
}


/// A struct that builds `DecisionTree`.
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
///
/// # Example
///
/// ```no_run
/// use minisplits::prelude::*;
///
/// let sample = SampleReader::new()
///     .file("/path/to/data/file.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// let tree = DecisionTreeBuilder::new(&sample)
///     .max_depth(4)
///     .pruning_ratio(0.25)
///     .build()
///     .unwrap();
/// ```
pub struct DecisionTreeBuilder<'a> {
    sample: &'a Sample,
    options: TreeOptions,
    provider: Box<dyn DiscriminationProvider + Send + Sync>,
}


impl<'a> DecisionTreeBuilder<'a> {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// pruning: true,
    /// pruning_ratio: DEFAULT_PRUNING_RATIO == 1/3,
    /// seed: DEFAULT_SEED == 1234,
    /// max_depth: None,
    /// min_split_size: DEFAULT_MIN_SPLIT_SIZE == 2,
    /// provider: GainRatioProvider,
    /// ```
    pub fn new(sample: &'a Sample) -> Self {
        Self {
            sample,
            options: TreeOptions::default(),
            provider: Box::new(GainRatioProvider::new()),
        }
    }


    /// Replace every parameter at once.
    pub fn options(mut self, options: TreeOptions) -> Self {
        self.options = options;
        self
    }


    /// Turn reduced-error pruning on or off.
    pub fn pruning(mut self, flag: bool) -> Self {
        self.options.pruning = flag;
        self
    }


    /// Share of the training records held out for pruning.
    /// Must lie in `(0, 1)`.
    pub fn pruning_ratio(mut self, ratio: f64) -> Self {
        self.options.pruning_ratio = ratio;
        self
    }


    /// Seed of the hold-out shuffle.
    pub fn seed(mut self, seed: u64) -> Self {
        self.options.seed = seed;
        self
    }


    /// Specify the maximal depth of the tree.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }


    /// Nodes with fewer records than `size` become leaves.
    pub fn min_split_size(mut self, size: usize) -> Self {
        self.options.min_split_size = size;
        self
    }


    /// Set the strategy choosing the test of each node.
    pub fn provider<D>(mut self, provider: D) -> Self
        where D: DiscriminationProvider + Send + Sync + 'static
    {
        self.provider = Box::new(provider);
        self
    }


    /// Build a `DecisionTree`.
    /// Returns an error if a parameter is invalid
    /// or if the sample has no decision attribute.
    pub fn build(self) -> Result<DecisionTree> {
        self.options.validate()?;
        self.sample.check_target()?;
        Ok(DecisionTree::from_components(self.options, self.provider))
    }
}
