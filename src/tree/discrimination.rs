use serde::{Serialize, Deserialize};

use crate::Header;


/// A test mapping a record to a branch index.
/// The result is `None` (indeterminate) when the tested value is missing,
/// or when a nominal value is not a known code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Discrimination {
    /// One branch per value of a nominal attribute.
    Nominal {
        /// Tested attribute.
        attribute: usize,
        /// Number of values (and branches).
        n_values: usize,
    },
    /// Branch `0` if the value is `<= threshold`, `1` otherwise.
    Numeric {
        /// Tested attribute.
        attribute: usize,
        /// Split point.
        threshold: f64,
    },
}


impl Discrimination {
    /// Returns the tested attribute.
    pub fn attribute(&self) -> usize {
        match self {
            Self::Nominal { attribute, .. }
            | Self::Numeric { attribute, .. } => *attribute,
        }
    }


    /// Number of branches of this test.
    pub fn n_branches(&self) -> usize {
        match self {
            Self::Nominal { n_values, .. } => *n_values,
            Self::Numeric { .. } => 2,
        }
    }


    /// Returns the branch of `record`, or `None` if it is indeterminate.
    #[inline]
    pub fn branch(&self, record: &[f64]) -> Option<usize> {
        let value = *record.get(self.attribute())?;
        if value.is_nan() { return None; }
        match self {
            Self::Nominal { n_values, .. } => {
                if value < 0.0 || value.fract() != 0.0 {
                    return None;
                }
                let code = value as usize;
                (code < *n_values).then_some(code)
            },
            Self::Numeric { threshold, .. } => {
                Some(if value <= *threshold { 0 } else { 1 })
            },
        }
    }


    /// A printable form of the condition leading to `branch`.
    pub fn describe(&self, header: &Header, branch: usize) -> String {
        let attr = &header[self.attribute()];
        match self {
            Self::Nominal { .. } => {
                let value = attr.dictionary()
                    .and_then(|dict| dict.value_of(branch))
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("#{branch}"));
                format!("{} = {value}", attr.name())
            },
            Self::Numeric { threshold, .. } => {
                let op = if branch == 0 { "<=" } else { ">" };
                format!("{} {op} {threshold}", attr.name())
            },
        }
    }
}
