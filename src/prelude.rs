//! Exports the standard algorithms and traits.
//!
pub use crate::sample::{
    Attribute,
    AttributeRole,
    Header,
    Sample,
    SampleReader,
};


pub use crate::progress::{
    // Progress trait
    Progress,

    NoProgress,
    ConsoleProgress,
    CancelFlag,
    Interruptible,
};


pub use crate::discretization::{
    // Discretization trait
    CutGenerator,

    Discretizer,
    DiscretizationMethod,
    Discretization,

    // Unsupervised ---------------------------
    EqualWidth,
    EqualFrequency,

    // Supervised -----------------------------
    OneRule,
    EntropyMinStatic,
    EntropyMinDynamic,
    ChiMerge,
    MdGlobal,
    MdLocal,
};


pub use crate::tree::{
    // Split selection trait
    DiscriminationProvider,

    Discrimination,
    GainRatioProvider,
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    TreeOptions,
};


pub use crate::pipeline::{
    DiscretizedTreeBuilder,
    DiscretizedTreeClassifier,
};


pub use crate::classifier::{
    Classifier,
    Transformer,
};
