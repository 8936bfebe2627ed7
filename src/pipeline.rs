//! Discretize a sample, then grow a decision tree on it.
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::{
    Sample,
    Progress,
    Classifier,
    Transformer,
    Discretizer,
    DiscretizationMethod,
    Discretization,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    TreeOptions,
};
use crate::error::Result;


/// Runs a discretizer, then grows (and prunes) a decision tree
/// on the discretized sample.
///
/// # Example
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
/// let f = DiscretizedTreeBuilder::new(&sample)
///     .method(DiscretizationMethod::EntropyMinStatic)
///     .fit(&mut NoProgress)
///     .unwrap();
///
/// let predictions = f.classify_all(&sample);
/// ```
pub struct DiscretizedTreeBuilder<'a> {
    sample: &'a Sample,
    method: DiscretizationMethod,
    options: TreeOptions,
}


impl<'a> DiscretizedTreeBuilder<'a> {
    /// Construct a new instance of [`DiscretizedTreeBuilder`]
    /// with the default method and tree options.
    pub fn new(sample: &'a Sample) -> Self {
        Self {
            sample,
            method: DiscretizationMethod::default(),
            options: TreeOptions::default(),
        }
    }


    /// Set the discretization method.
    pub fn method(mut self, method: DiscretizationMethod) -> Self {
        self.method = method;
        self
    }


    /// Set the parameters of the tree.
    pub fn tree_options(mut self, options: TreeOptions) -> Self {
        self.options = options;
        self
    }


    /// Discretize the sample and grow the tree.
    pub fn fit(self, progress: &mut dyn Progress)
        -> Result<DiscretizedTreeClassifier>
    {
        let discretizer = Discretizer::new(self.method)?;
        let discretization = discretizer.fit(self.sample, progress)?;
        let discretized = discretization.transform_sample(self.sample)?;

        let tree = DecisionTreeBuilder::new(&discretized)
            .options(self.options)
            .build()?
            .fit(&discretized, progress)?;

        Ok(DiscretizedTreeClassifier { discretization, tree, })
    }
}


/// A decision tree over discretized attributes
/// that classifies raw records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscretizedTreeClassifier {
    discretization: Discretization,
    tree: DecisionTreeClassifier,
}


impl DiscretizedTreeClassifier {
    /// Returns the discretization applied to the records.
    pub fn discretization(&self) -> &Discretization {
        &self.discretization
    }


    /// Returns the tree over the discretized records.
    pub fn tree(&self) -> &DecisionTreeClassifier {
        &self.tree
    }


    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }


    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}


impl Classifier for DiscretizedTreeClassifier {
    fn classify(&self, record: &[f64]) -> Option<usize> {
        self.tree.classify(&self.discretization.transform(record))
    }


    fn classify_with_distribution(&self, record: &[f64]) -> Vec<f64> {
        self.tree.classify_with_distribution(&self.discretization.transform(record))
    }
}


impl fmt::Display for DiscretizedTreeClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Cuts\n{}", self.discretization)?;
        write!(f, "# Tree\n{}", self.tree)
    }
}
