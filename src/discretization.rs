//! Supervised and unsupervised discretization of numeric attributes.
//!
//! Every algorithm implements [`CutGenerator`] and returns,
//! per numeric attribute, a strictly increasing array of cuts.
//! The cuts `c0 < c1 < ... < cn` split the real line into the
//! intervals `(-inf, c0), [c0, c1), ..., [cn, +inf)`.

/// Defines the `CutGenerator` trait.
pub mod cut_generator;
/// Maps values to interval codes.
pub mod encoder;

/// Equal-width and equal-frequency binning.
mod bin;
mod one_rule;
mod mdlp;
mod entropy_static;
mod entropy_dynamic;
mod chi_merge;
mod md_heuristic;

mod discretization_struct;
mod discretizer;


pub use cut_generator::CutGenerator;
pub use encoder::{encode, interval_index};

pub use bin::{EqualWidth, EqualFrequency};
pub use one_rule::OneRule;
pub use entropy_static::EntropyMinStatic;
pub use entropy_dynamic::EntropyMinDynamic;
pub use chi_merge::ChiMerge;
pub use md_heuristic::{MdGlobal, MdLocal};

pub use discretization_struct::Discretization;
pub use discretizer::{
    Discretizer,
    DiscretizationMethod,
    DEFAULT_INTERVALS,
    DEFAULT_MIN_FREQUENCY,
    DEFAULT_SIGNIFICANCE,
    DEFAULT_MIN_INTERVALS,
};
