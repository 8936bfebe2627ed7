//! Defines the decision tree classifier.
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::{Classifier, Header};
use crate::error::Result;
use super::node::*;


/// Decision tree classifier.
/// This struct is a wrapper of `Node` that keeps
/// the header of the records it was grown on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    header: Header,
    root: Node,
}


impl DecisionTreeClassifier {
    #[inline]
    pub(super) fn new(header: Header, root: Node) -> Self {
        Self { header, root }
    }


    /// Returns the root node.
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Returns the header of the training records.
    pub fn header(&self) -> &Header {
        &self.header
    }


    /// Number of nodes.
    pub fn n_nodes(&self) -> usize {
        self.root.n_nodes()
    }


    /// Number of leaves.
    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }


    /// Depth of the tree. A single leaf has depth `0`.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// A human-readable form of the tree,
    /// every line indented by `indent` levels.
    pub fn dump(&self, indent: usize) -> String {
        let mut out = String::new();
        // Writing to a `String` does not fail.
        let _ = self.root.dump(&self.header, indent, &mut out);
        out
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


impl Classifier for DecisionTreeClassifier {
    fn classify(&self, record: &[f64]) -> Option<usize> {
        self.root.route(record).decision()
    }


    fn classify_with_distribution(&self, record: &[f64]) -> Vec<f64> {
        let outcome = self.root.route(record);
        let counts = outcome.distribution();
        let total = counts.iter().sum::<usize>();
        if total > 0 {
            return counts.into_iter()
                .map(|c| c as f64 / total as f64)
                .collect();
        }

        let mut scores = vec![0.0; counts.len()];
        if let Some(y) = outcome.decision() {
            if let Some(score) = scores.get_mut(y) {
                *score = 1.0;
            }
        }
        scores
    }
}


impl fmt::Display for DecisionTreeClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.root.dump(&self.header, 0, &mut out)?;
        f.write_str(&out)
    }
}
