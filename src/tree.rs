//! Decision trees grown by gain ratio with reduced-error pruning.

/// Defines the tests placed on branch nodes.
pub mod discrimination;
/// Defines the best-split selection.
pub mod split;
/// Defines the decision tree algorithm.
pub mod decision_tree;
/// Defines the classifier produced by `DecisionTree`.
pub mod decision_tree_classifier;
/// Defines the builder of `DecisionTree`.
pub mod builder;

/// Defines the inner representation of `DecisionTreeClassifier`.
mod node;


pub use discrimination::Discrimination;
pub use split::{DiscriminationProvider, GainRatioProvider};
pub use decision_tree::DecisionTree;
pub use decision_tree_classifier::DecisionTreeClassifier;
pub use builder::{
    DecisionTreeBuilder,
    TreeOptions,
    DEFAULT_PRUNING_RATIO,
    DEFAULT_SEED,
    DEFAULT_MIN_SPLIT_SIZE,
};
pub use node::{Node, BranchNode, LeafNode};
