#![warn(missing_docs)]

//!
//! A crate that provides supervised discretization algorithms
//! and a decision tree learner built on top of them.
//!
//! This crate includes two families of algorithms.
//!
//! - Discretization
//!     Each numeric attribute is split into intervals by an array of cuts.
//!     In this crate,
//!     `EqualWidth` and `EqualFrequency` are unsupervised,
//!     `OneRule`, `EntropyMinStatic`, `EntropyMinDynamic`, `ChiMerge`,
//!     `MdGlobal` and `MdLocal` use the decision attribute.
//!     The resulting `Discretization` maps raw records to interval codes.
//!
//!
//! - Decision tree
//!     `DecisionTree` grows a tree by gain ratio over nominal and
//!     numeric attributes, and prunes it on held-out records.
//!     Records with missing values are classified
//!     by pooling the children of the node whose test they cannot answer.
//!
//! `DiscretizedTreeBuilder` chains both.

pub mod error;
pub mod sample;
pub mod distribution;
pub mod progress;
pub mod discretization;
pub mod tree;
pub mod classifier;
pub mod pipeline;

pub mod prelude;


pub use error::{MiniSplitsError, Result};

pub use sample::{
    Attribute,
    AttributeKind,
    AttributeRole,
    NominalDictionary,
    Header,
    Sample,
    SampleReader,
    NumericStatistics,
};

pub use progress::{
    Progress,
    NoProgress,
    ConsoleProgress,
    CancelFlag,
    Interruptible,
};

pub use discretization::{
    CutGenerator,
    Discretization,
    DiscretizationMethod,
    Discretizer,
    EqualWidth,
    EqualFrequency,
    OneRule,
    EntropyMinStatic,
    EntropyMinDynamic,
    ChiMerge,
    MdGlobal,
    MdLocal,
};

pub use tree::{
    Discrimination,
    DiscriminationProvider,
    GainRatioProvider,
    Node,
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    TreeOptions,
};

pub use classifier::{Classifier, Transformer};

pub use pipeline::{DiscretizedTreeBuilder, DiscretizedTreeClassifier};
