use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::{Sample, Header, Attribute, Transformer};
use crate::error::{MiniSplitsError, Result};
use super::encoder::{encode, interval_labels};


/// The result of a discretization:
/// one cut array per discretized attribute and
/// the header of the discretized records.
///
/// `Discretization` turns raw records into records whose
/// discretized attributes hold interval codes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discretization {
    cuts: Vec<Option<Vec<f64>>>,
    header: Header,
}


impl Discretization {
    /// Construct a discretization of `source`.
    /// `cuts[a]` holds the cuts of the attribute `a`,
    /// or `None` to leave `a` untouched.
    /// Every cut array must be strictly increasing.
    pub fn from_cuts(source: &Header, cuts: Vec<Option<Vec<f64>>>)
        -> Result<Self>
    {
        if cuts.len() != source.len() {
            return Err(MiniSplitsError::HeaderMismatch {
                expected: source.len(),
                found: cuts.len(),
            });
        }

        let mut attributes = Vec::with_capacity(source.len());
        for (attr, cuts) in source.attributes().iter().zip(&cuts) {
            let attribute = match cuts {
                None => attr.clone(),
                Some(cuts) => {
                    if !attr.is_numeric() {
                        return Err(MiniSplitsError::invalid(
                            "cuts",
                            format!("attribute `{}` is not numeric", attr.name()),
                        ));
                    }
                    if cuts.windows(2).any(|w| !(w[0] < w[1])) {
                        return Err(MiniSplitsError::invalid(
                            "cuts",
                            format!("cuts of `{}` are not strictly increasing", attr.name()),
                        ));
                    }
                    Attribute::nominal_with_values(attr.name(), interval_labels(cuts))
                        .with_role(attr.role())
                },
            };
            attributes.push(attribute);
        }

        let header = Header::new(attributes);
        Ok(Self { cuts, header, })
    }


    /// Returns the cuts of `attribute`,
    /// or `None` if it is not discretized.
    pub fn cuts(&self, attribute: usize) -> Option<&[f64]> {
        self.cuts.get(attribute)
            .and_then(|cuts| cuts.as_deref())
    }


    /// Number of intervals per attribute (`None` if not discretized).
    pub fn n_intervals(&self) -> Vec<Option<usize>> {
        self.cuts.iter()
            .map(|cuts| cuts.as_ref().map(|c| c.len() + 1))
            .collect()
    }


    /// Discretize every record of `sample` (in parallel).
    pub fn transform_sample(&self, sample: &Sample) -> Result<Sample> {
        if sample.header().len() != self.cuts.len() {
            return Err(MiniSplitsError::HeaderMismatch {
                expected: self.cuts.len(),
                found: sample.header().len(),
            });
        }
        let records = sample.records()
            .par_iter()
            .map(|record| self.transform(record))
            .collect::<Vec<_>>();
        Sample::new(self.header.clone(), records)
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


impl Transformer for Discretization {
    /// Encodes `record` attribute by attribute.
    /// The result always has one value per attribute of the header:
    /// positions missing from a short record become `NaN`,
    /// values past the header width are ignored.
    fn transform(&self, record: &[f64]) -> Vec<f64> {
        self.cuts.iter()
            .enumerate()
            .map(|(i, cuts)| (record.get(i).copied().unwrap_or(f64::NAN), cuts))
            .map(|(value, cuts)| match cuts {
                Some(cuts) => encode(value, cuts),
                None => value,
            })
            .collect()
    }


    fn header(&self) -> &Header {
        &self.header
    }
}


impl fmt::Display for Discretization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.header.attributes()
            .iter()
            .map(|attr| attr.name().len())
            .max()
            .unwrap_or(0);
        for (attr, cuts) in self.header.attributes().iter().zip(&self.cuts) {
            if let Some(cuts) = cuts {
                let cuts = cuts.iter()
                    .map(|c| format!("{c}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                writeln!(f, "\t* [{: <width$}] {{{cuts}}}", attr.name())?;
            }
        }
        Ok(())
    }
}
