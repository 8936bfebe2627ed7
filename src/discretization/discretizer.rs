use serde::{Serialize, Deserialize};

use std::fmt;

use crate::{Sample, Progress};
use crate::error::Result;
use super::{
    bin::*,
    chi_merge::ChiMerge,
    cut_generator::CutGenerator,
    discretization_struct::Discretization,
    entropy_dynamic::EntropyMinDynamic,
    entropy_static::EntropyMinStatic,
    md_heuristic::{MdGlobal, MdLocal},
    one_rule::OneRule,
};


/// Default number of intervals of the unsupervised binnings.
pub const DEFAULT_INTERVALS: usize = 5;
/// Default minimal frequency of the 1R discretization.
pub const DEFAULT_MIN_FREQUENCY: usize = 6;
/// Default significance level of ChiMerge.
pub const DEFAULT_SIGNIFICANCE: f64 = 0.05;
/// Default minimal number of intervals of ChiMerge.
pub const DEFAULT_MIN_INTERVALS: usize = 2;


/// The discretization algorithms and their parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DiscretizationMethod {
    /// See [`EqualWidth`].
    EqualWidth {
        /// Number of intervals.
        intervals: usize,
    },
    /// See [`EqualFrequency`].
    EqualFrequency {
        /// Number of intervals.
        intervals: usize,
    },
    /// See [`OneRule`].
    OneRule {
        /// Majority count closing an interval.
        min_frequency: usize,
    },
    /// See [`EntropyMinStatic`].
    EntropyMinStatic,
    /// See [`EntropyMinDynamic`].
    EntropyMinDynamic,
    /// See [`ChiMerge`].
    ChiMerge {
        /// Significance level of the independence test.
        significance: f64,
        /// Number of intervals below which no merge happens.
        min_intervals: usize,
    },
    /// See [`MdGlobal`].
    MdGlobal,
    /// See [`MdLocal`].
    MdLocal,
}


impl DiscretizationMethod {
    /// Returns `true` if the method uses the decision attribute.
    pub fn is_supervised(&self) -> bool {
        !matches!(self, Self::EqualWidth { .. } | Self::EqualFrequency { .. })
    }


    /// `OneRule` with its default parameter.
    pub fn one_rule() -> Self {
        Self::OneRule { min_frequency: DEFAULT_MIN_FREQUENCY }
    }


    /// `ChiMerge` with its default parameters.
    pub fn chi_merge() -> Self {
        Self::ChiMerge {
            significance: DEFAULT_SIGNIFICANCE,
            min_intervals: DEFAULT_MIN_INTERVALS,
        }
    }
}


impl Default for DiscretizationMethod {
    fn default() -> Self {
        Self::EntropyMinStatic
    }
}


impl fmt::Display for DiscretizationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EqualWidth { intervals }
                => write!(f, "Equal width ({intervals} intervals)"),
            Self::EqualFrequency { intervals }
                => write!(f, "Equal frequency ({intervals} intervals)"),
            Self::OneRule { min_frequency }
                => write!(f, "1R (min frequency {min_frequency})"),
            Self::EntropyMinStatic
                => write!(f, "Entropy minimization (static)"),
            Self::EntropyMinDynamic
                => write!(f, "Entropy minimization (dynamic)"),
            Self::ChiMerge { significance, min_intervals }
                => write!(
                    f,
                    "ChiMerge (significance {significance}, \
                     min {min_intervals} intervals)"
                ),
            Self::MdGlobal => write!(f, "MD heuristic (global)"),
            Self::MdLocal => write!(f, "MD heuristic (local)"),
        }
    }
}


/// Runs a [`DiscretizationMethod`] on a sample.
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
/// let discretizer = Discretizer::new(DiscretizationMethod::chi_merge())
///     .unwrap();
/// let discretization = discretizer.fit(&sample, &mut NoProgress)
///     .unwrap();
/// let discretized = discretization.transform_sample(&sample)
///     .unwrap();
/// ```
pub struct Discretizer {
    method: DiscretizationMethod,
    generator: Box<dyn CutGenerator + Send + Sync>,
}


impl Discretizer {
    /// Construct a new instance of [`Discretizer`].
    /// Returns an error if a parameter of `method` is invalid.
    pub fn new(method: DiscretizationMethod) -> Result<Self> {
        let generator: Box<dyn CutGenerator + Send + Sync> = match method {
            DiscretizationMethod::EqualWidth { intervals }
                => Box::new(EqualWidth::new(intervals)?),
            DiscretizationMethod::EqualFrequency { intervals }
                => Box::new(EqualFrequency::new(intervals)?),
            DiscretizationMethod::OneRule { min_frequency }
                => Box::new(OneRule::new(min_frequency)?),
            DiscretizationMethod::EntropyMinStatic
                => Box::new(EntropyMinStatic::new()),
            DiscretizationMethod::EntropyMinDynamic
                => Box::new(EntropyMinDynamic::new()),
            DiscretizationMethod::ChiMerge { significance, min_intervals }
                => Box::new(ChiMerge::new(significance, min_intervals)?),
            DiscretizationMethod::MdGlobal
                => Box::new(MdGlobal::new()),
            DiscretizationMethod::MdLocal
                => Box::new(MdLocal::new()),
        };
        Ok(Self { method, generator, })
    }


    /// Returns the method.
    pub fn method(&self) -> DiscretizationMethod {
        self.method
    }


    /// Returns the cuts of a single attribute.
    pub fn generate_cuts(&self, attribute: usize, sample: &Sample) -> Vec<f64> {
        self.generator.generate_cuts(attribute, sample)
    }


    /// Discretize every numeric conditional attribute of `sample`.
    pub fn fit(&self, sample: &Sample, progress: &mut dyn Progress)
        -> Result<Discretization>
    {
        if self.method.is_supervised() {
            sample.check_target()?;
        }
        let cuts = self.generator.generate_all(sample, progress)?;
        Discretization::from_cuts(sample.header(), cuts)
    }
}


impl fmt::Display for Discretizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "# Discretizer\n\n- Method: {}", self.method)
    }
}
