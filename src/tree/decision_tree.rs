use std::fmt;

use crate::{Sample, Progress};
use crate::error::{MiniSplitsError, Result};
use crate::progress::check;
use crate::distribution::{class_counts, majority, n_present};
use super::{
    builder::TreeOptions,
    node::{Node, partition},
    split::DiscriminationProvider,
    decision_tree_classifier::DecisionTreeClassifier,
};


/// The decision tree algorithm.
/// Given a set of training records,
/// [`DecisionTree`] grows a tree by gain ratio,
/// prunes it on held-out records (reduced-error pruning),
/// and outputs a [`DecisionTreeClassifier`].
///
/// Every conditional attribute can be tested:
/// a nominal one splits a node into one child per value,
/// a numeric one into two children.
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](crate::DecisionTreeBuilder).
///
/// # Example
/// ```no_run
/// use minisplits::prelude::*;
///
/// // Read the training data from the CSV file.
/// let file = "/path/to/data/file.csv";
/// let sample = SampleReader::new()
///     .file(file)
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// let tree = DecisionTreeBuilder::new(&sample)
///     .pruning(true)
///     .build()
///     .unwrap();
///
/// let f = tree.fit(&sample, &mut ConsoleProgress::new()).unwrap();
/// println!("{}", f.dump(0));
/// println!("accuracy (train) is: {}", f.accuracy(&sample));
/// ```
pub struct DecisionTree {
    options: TreeOptions,
    provider: Box<dyn DiscriminationProvider + Send + Sync>,
}


impl DecisionTree {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn from_components(
        options: TreeOptions,
        provider: Box<dyn DiscriminationProvider + Send + Sync>,
    ) -> Self
    {
        Self { options, provider, }
    }


    /// Returns the parameters.
    pub fn options(&self) -> &TreeOptions {
        &self.options
    }


    /// Grow a tree on `sample`.
    /// If pruning is enabled, a part of `sample` is held out
    /// and used to prune the tree.
    pub fn fit(&self, sample: &Sample, progress: &mut dyn Progress)
        -> Result<DecisionTreeClassifier>
    {
        sample.check_target()?;
        if !self.options.pruning {
            let root = self.grow_root(sample, progress)?;
            return Ok(DecisionTreeClassifier::new(sample.header().clone(), root));
        }

        let (train, validation) = sample.split_holdout(
            self.options.pruning_ratio, self.options.seed
        );
        self.fit_with_validation(&train, &validation, progress)
    }


    /// Grow a tree on `train` and prune it on `validation`.
    pub fn fit_with_validation(
        &self,
        train: &Sample,
        validation: &Sample,
        progress: &mut dyn Progress,
    ) -> Result<DecisionTreeClassifier>
    {
        train.check_target()?;
        if validation.header().len() != train.header().len() {
            return Err(MiniSplitsError::HeaderMismatch {
                expected: train.header().len(),
                found: validation.header().len(),
            });
        }

        let mut root = self.grow_root(train, progress)?;

        // Pruning on no record would collapse every branch.
        if !validation.is_empty() {
            progress.set("Pruning", 1);
            let indices = (0..validation.len()).collect::<Vec<_>>();
            root.prune(validation, &indices, &*progress)?;
            progress.step();
        }

        Ok(DecisionTreeClassifier::new(train.header().clone(), root))
    }


    fn grow_root(&self, sample: &Sample, progress: &mut dyn Progress)
        -> Result<Node>
    {
        progress.set("Growing the tree", 1);
        let indices = (0..sample.len()).collect::<Vec<_>>();
        let root = self.grow(sample, indices, None, 0, &*progress)?;
        progress.step();
        Ok(root)
    }


    /// Build the subtree of the records in `indices`.
    /// `default` is the decision of a node reached by no record.
    fn grow(
        &self,
        sample: &Sample,
        indices: Vec<usize>,
        default: Option<usize>,
        depth: usize,
        progress: &dyn Progress,
    ) -> Result<Node>
    {
        check(progress)?;

        let distribution = class_counts(sample, &indices);
        let decision = majority(&distribution).or(default);

        let depth_reached = self.options.max_depth
            .map_or(false, |max| depth >= max);
        if n_present(&distribution) < 2
            || indices.len() < self.options.min_split_size
            || depth_reached
        {
            return Ok(Node::leaf(distribution, decision));
        }

        let test = match self.provider.select(sample, &indices) {
            Some(test) => test,
            None => { return Ok(Node::leaf(distribution, decision)); },
        };

        let n_classes = distribution.len();
        let children = partition(&test, sample.records(), &indices)
            .into_iter()
            .map(|part| {
                if part.is_empty() {
                    Ok(Node::leaf(vec![0; n_classes], decision))
                } else {
                    self.grow(sample, part, decision, depth + 1, progress)
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Node::branch(test, distribution, decision, children))
    }
}


impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let max_depth = self.options.max_depth
            .map(|d| d.to_string())
            .unwrap_or_else(|| "unbounded".to_string());
        let pruning = if self.options.pruning {
            format!("on (held-out ratio {:.3})", self.options.pruning_ratio)
        } else {
            "off".to_string()
        };
        write!(
            f,
            "\
            ----------\n\
            # Decision Tree\n\n\
            - Max depth: {max_depth}\n\
            - Min split size: {}\n\
            - Pruning: {pruning}\n\
            ----------\
            ",
            self.options.min_split_size,
        )
    }
}
