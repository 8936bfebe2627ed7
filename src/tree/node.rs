//! Defines the inner representation
//! of the decision tree classifier.
use serde::{Serialize, Deserialize};

use std::fmt::Write;

use crate::{Sample, Header, Progress};
use crate::error::Result;
use crate::progress::check;
use crate::distribution::{accumulate, majority};
use super::discrimination::Discrimination;


/// Enumeration of `BranchNode` and `LeafNode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that tests a record and owns one child per branch.
    Branch(BranchNode),


    /// A node that have no child.
    Leaf(LeafNode),
}


/// Represents the branch nodes of decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchNode {
    pub(super) test: Discrimination,
    pub(super) distribution: Vec<usize>,
    pub(super) decision: Option<usize>,
    pub(super) children: Vec<Node>,
}


/// Represents the leaf nodes of decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode {
    pub(super) distribution: Vec<usize>,
    pub(super) decision: Option<usize>,
}


/// Where the classification of a record ends.
pub(super) enum Outcome<'a> {
    /// A leaf supported by training records (or the root leaf).
    Leaf(&'a LeafNode),
    /// A branch whose children are pooled.
    Pooled(&'a BranchNode),
}


impl<'a> Outcome<'a> {
    /// Class counts backing the decision.
    pub(super) fn distribution(&self) -> Vec<usize> {
        match self {
            Self::Leaf(leaf) => leaf.distribution.clone(),
            Self::Pooled(branch) => branch.pooled_distribution(),
        }
    }


    pub(super) fn decision(&self) -> Option<usize> {
        match self {
            Self::Leaf(leaf) => leaf.decision,
            Self::Pooled(branch) => {
                majority(&branch.pooled_distribution()).or(branch.decision)
            },
        }
    }
}


impl LeafNode {
    /// Number of training records that reached this leaf.
    #[inline]
    pub fn support(&self) -> usize {
        self.distribution.iter().sum()
    }
}


impl BranchNode {
    /// Element-wise sum of the children distributions.
    fn pooled_distribution(&self) -> Vec<usize> {
        let mut pooled = vec![0_usize; self.distribution.len()];
        for child in &self.children {
            accumulate(&mut pooled, child.distribution());
        }
        pooled
    }


    fn route(&self, record: &[f64]) -> Outcome<'_> {
        let child = match self.test.branch(record) {
            Some(b) => &self.children[b],
            None => { return Outcome::Pooled(self); },
        };
        match child {
            Node::Leaf(leaf) if leaf.support() > 0 => Outcome::Leaf(leaf),
            Node::Leaf(_) => Outcome::Pooled(self),
            Node::Branch(branch) => branch.route(record),
        }
    }
}


impl Node {
    #[inline]
    pub(super) fn leaf(distribution: Vec<usize>, decision: Option<usize>)
        -> Self
    {
        Self::Leaf(LeafNode { distribution, decision, })
    }


    #[inline]
    pub(super) fn branch(
        test: Discrimination,
        distribution: Vec<usize>,
        decision: Option<usize>,
        children: Vec<Node>,
    ) -> Self
    {
        Self::Branch(BranchNode { test, distribution, decision, children, })
    }


    /// Returns `true` if this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }


    /// Class counts of the training records that reached this node.
    pub fn distribution(&self) -> &[usize] {
        match self {
            Self::Branch(branch) => &branch.distribution,
            Self::Leaf(leaf) => &leaf.distribution,
        }
    }


    /// The majority class of this node (or the inherited default).
    pub fn decision(&self) -> Option<usize> {
        match self {
            Self::Branch(branch) => branch.decision,
            Self::Leaf(leaf) => leaf.decision,
        }
    }


    /// The test of a branch node.
    pub fn discrimination(&self) -> Option<&Discrimination> {
        match self {
            Self::Branch(branch) => Some(&branch.test),
            Self::Leaf(_) => None,
        }
    }


    /// The children of a branch node, indexed by branch.
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Branch(branch) => &branch.children,
            Self::Leaf(_) => &[],
        }
    }


    /// Follow `record` down the tree.
    ///
    /// A record stops at the leaf it reaches if that leaf saw some
    /// training record. Otherwise, or if a test is indeterminate,
    /// the distributions of all children of the current branch are pooled.
    pub(super) fn route(&self, record: &[f64]) -> Outcome<'_> {
        match self {
            Self::Leaf(leaf) => Outcome::Leaf(leaf),
            Self::Branch(branch) => branch.route(record),
        }
    }


    /// Number of nodes of the subtree.
    pub fn n_nodes(&self) -> usize {
        1 + self.children()
            .iter()
            .map(Node::n_nodes)
            .sum::<usize>()
    }


    /// Number of leaves of the subtree.
    pub fn n_leaves(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Branch(branch) => {
                branch.children.iter().map(Node::n_leaves).sum()
            },
        }
    }


    /// Length of the longest path to a leaf.
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf(_) => 0,
            Self::Branch(branch) => {
                1 + branch.children.iter()
                    .map(Node::depth)
                    .max()
                    .unwrap_or(0)
            },
        }
    }


    /// Reduced-error pruning.
    ///
    /// `indices` are the validation records reaching this node.
    /// Returns the number of them the subtree classifies correctly.
    /// A branch whose children are all leaves is collapsed into a leaf
    /// if the leaf does at least as well.
    pub(super) fn prune(
        &mut self,
        sample: &Sample,
        indices: &[usize],
        progress: &dyn Progress,
    ) -> Result<usize>
    {
        check(progress)?;

        let branch = match self {
            Self::Leaf(leaf) => {
                return Ok(n_correct(sample, indices, leaf.decision));
            },
            Self::Branch(branch) => branch,
        };

        let parts = partition(&branch.test, sample.records(), indices);
        let mut leaves_correct = 0;
        for (child, part) in branch.children.iter_mut().zip(&parts) {
            leaves_correct += child.prune(sample, part, progress)?;
        }

        if !branch.children.iter().all(Node::is_leaf) {
            return Ok(leaves_correct);
        }

        let own_correct = n_correct(sample, indices, branch.decision);
        if own_correct >= leaves_correct {
            let distribution = std::mem::take(&mut branch.distribution);
            let decision = branch.decision;
            *self = Self::leaf(distribution, decision);
            return Ok(own_correct);
        }
        Ok(leaves_correct)
    }


    /// Append the subtree to `out`, one line per branch.
    pub(super) fn dump(&self, header: &Header, indent: usize, out: &mut String)
        -> std::fmt::Result
    {
        let branch = match self {
            Self::Leaf(leaf) => {
                writeln!(
                    out,
                    "{}{}",
                    "|   ".repeat(indent),
                    leaf_label(header, leaf.decision, leaf.support()),
                )?;
                return Ok(());
            },
            Self::Branch(branch) => branch,
        };

        for (b, child) in branch.children.iter().enumerate() {
            let condition = branch.test.describe(header, b);
            write!(out, "{}{condition}", "|   ".repeat(indent))?;
            match child {
                Self::Leaf(leaf) => {
                    let label = leaf_label(header, leaf.decision, leaf.support());
                    writeln!(out, ": {label}")?;
                },
                Self::Branch(_) => {
                    writeln!(out)?;
                    child.dump(header, indent + 1, out)?;
                },
            }
        }
        Ok(())
    }
}


fn leaf_label(header: &Header, decision: Option<usize>, support: usize)
    -> String
{
    let label = decision.and_then(|y| header.class_label(y))
        .unwrap_or("?");
    format!("{label} ({support})")
}


/// Number of records in `indices` whose class is `decision`.
fn n_correct(sample: &Sample, indices: &[usize], decision: Option<usize>)
    -> usize
{
    match decision {
        None => 0,
        Some(y) => {
            indices.iter()
                .filter(|&&i| sample.decision(i) == Some(y))
                .count()
        },
    }
}


/// Distribute `indices` over the branches of `test`.
/// Indeterminate records are dropped.
pub(super) fn partition(
    test: &Discrimination,
    records: &[Vec<f64>],
    indices: &[usize],
) -> Vec<Vec<usize>>
{
    let mut parts = vec![Vec::new(); test.n_branches()];
    for &i in indices {
        if let Some(b) = test.branch(&records[i]) {
            parts[b].push(i);
        }
    }
    parts
}
