use serde::{Serialize, Deserialize};

use std::fmt;
use std::ops::Index;

use crate::error::{MiniSplitsError, Result};
use super::attribute_struct::*;


/// The ordered attribute list shared by the records of a sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    attributes: Vec<Attribute>,
    decision: Option<usize>,
}


impl Header {
    /// Construct a header.
    /// The first attribute with the `Decision` role becomes the decision.
    pub fn new(attributes: Vec<Attribute>) -> Self {
        let decision = attributes.iter()
            .position(|attr| attr.role() == AttributeRole::Decision);
        Self { attributes, decision, }
    }


    /// Number of attributes, decision included.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }


    /// Returns `true` if the header has no attribute.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }


    /// Returns a slice of the attributes.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes[..]
    }


    pub(crate) fn attributes_mut(&mut self) -> &mut [Attribute] {
        &mut self.attributes[..]
    }


    /// Returns the index of the decision attribute.
    pub fn decision_index(&self) -> Option<usize> {
        self.decision
    }


    /// Returns the decision attribute.
    pub fn decision(&self) -> Option<&Attribute> {
        self.decision.map(|d| &self.attributes[d])
    }


    /// Number of classes (nominal values of the decision attribute).
    pub fn n_classes(&self) -> usize {
        self.decision().map(Attribute::n_values).unwrap_or(0)
    }


    /// Returns the raw label of the class `code`.
    pub fn class_label(&self, code: usize) -> Option<&str> {
        self.decision()
            .and_then(Attribute::dictionary)
            .and_then(|dict| dict.value_of(code))
    }


    /// Position of the attribute named `name`.
    pub fn position<S: AsRef<str>>(&self, name: S) -> Option<usize> {
        let name = name.as_ref();
        self.attributes.iter().position(|attr| attr.name() == name)
    }


    /// Indices of the conditional attributes in ascending order.
    pub fn conditional_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.attributes.iter()
            .enumerate()
            .filter_map(|(i, attr)| attr.is_conditional().then_some(i))
    }


    /// Indices of the numeric conditional attributes in ascending order.
    pub fn numeric_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.attributes.iter()
            .enumerate()
            .filter_map(|(i, attr)| {
                (attr.is_conditional() && attr.is_numeric()).then_some(i)
            })
    }


    /// Mark the attribute at `index` as the decision.
    /// The previous decision attribute, if any, becomes conditional.
    pub(crate) fn set_decision(&mut self, index: usize) -> Result<()> {
        if index >= self.attributes.len() {
            return Err(MiniSplitsError::UnknownAttribute(format!("#{index}")));
        }
        if let Some(old) = self.decision {
            self.attributes[old].set_role(AttributeRole::Conditional);
        }
        self.attributes[index].set_role(AttributeRole::Decision);
        self.decision = Some(index);
        Ok(())
    }


    /// Returns an error if `record` does not fit this header.
    pub(crate) fn check_width(&self, record: &[f64]) -> Result<()> {
        if record.len() != self.len() {
            return Err(MiniSplitsError::HeaderMismatch {
                expected: self.len(),
                found: record.len(),
            });
        }
        Ok(())
    }
}


impl Index<usize> for Header {
    type Output = Attribute;
    fn index(&self, idx: usize) -> &Self::Output {
        &self.attributes[idx]
    }
}


impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, attr) in self.attributes.iter().enumerate() {
            let mark = if Some(i) == self.decision { " (decision)" } else { "" };
            writeln!(f, "{attr}{mark}")?;
        }
        Ok(())
    }
}
