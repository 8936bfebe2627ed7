use serde::{Serialize, Deserialize};

use std::collections::HashMap;
use std::fmt;


/// The role an attribute plays in a supervised task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeRole {
    /// An attribute used to predict the decision.
    Conditional,
    /// The class label.
    Decision,
    /// Free text. Ignored by every algorithm in this crate.
    Text,
}


/// Append-only mapping between raw nominal values and local codes.
/// A code, once assigned, is never reused nor reassigned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct NominalDictionary {
    values: Vec<String>,
    index: HashMap<String, usize>,
}


impl NominalDictionary {
    /// Construct an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }


    /// Returns the local code of `raw`,
    /// assigning the next free code if `raw` is not seen yet.
    pub fn intern<S: AsRef<str>>(&mut self, raw: S) -> usize {
        let raw = raw.as_ref();
        if let Some(&code) = self.index.get(raw) {
            return code;
        }
        let code = self.values.len();
        self.values.push(raw.to_string());
        self.index.insert(raw.to_string(), code);
        code
    }


    /// Returns the local code of `raw` without interning it.
    pub fn code_of<S: AsRef<str>>(&self, raw: S) -> Option<usize> {
        self.index.get(raw.as_ref()).copied()
    }


    /// Returns the raw value of `code`.
    pub fn value_of(&self, code: usize) -> Option<&str> {
        self.values.get(code).map(String::as_str)
    }


    /// Returns the number of interned values.
    pub fn len(&self) -> usize {
        self.values.len()
    }


    /// Returns `true` if no value is interned.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }


    /// Returns the raw values in code order.
    pub fn values(&self) -> &[String] {
        &self.values[..]
    }
}


impl From<Vec<String>> for NominalDictionary {
    fn from(values: Vec<String>) -> Self {
        let mut dict = Self::new();
        values.into_iter()
            .for_each(|value| { dict.intern(value); });
        dict
    }
}


impl From<NominalDictionary> for Vec<String> {
    fn from(dict: NominalDictionary) -> Self {
        dict.values
    }
}


/// Domain of an attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeKind {
    /// Ordered real values.
    Numeric,
    /// Finite set of codes `0..n`.
    Nominal(NominalDictionary),
}


/// A named column of a [`Sample`](crate::Sample).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    name: String,
    role: AttributeRole,
    kind: AttributeKind,
}


impl Attribute {
    /// Construct a conditional numeric attribute.
    pub fn numeric<T: ToString>(name: T) -> Self {
        Self {
            name: name.to_string(),
            role: AttributeRole::Conditional,
            kind: AttributeKind::Numeric,
        }
    }


    /// Construct a conditional nominal attribute with no value yet.
    pub fn nominal<T: ToString>(name: T) -> Self {
        Self::nominal_with_values(name, Vec::<String>::new())
    }


    /// Construct a conditional nominal attribute whose codes
    /// `0..values.len()` are assigned in the given order.
    pub fn nominal_with_values<T, S>(name: T, values: Vec<S>) -> Self
        where T: ToString,
              S: ToString,
    {
        let values = values.into_iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>();
        Self {
            name: name.to_string(),
            role: AttributeRole::Conditional,
            kind: AttributeKind::Nominal(NominalDictionary::from(values)),
        }
    }


    /// Set the role of this attribute.
    pub fn with_role(mut self, role: AttributeRole) -> Self {
        self.role = role;
        self
    }


    /// Get the attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Get the attribute role.
    pub fn role(&self) -> AttributeRole {
        self.role
    }


    pub(crate) fn set_role(&mut self, role: AttributeRole) {
        self.role = role;
    }


    /// Get the attribute domain.
    pub fn kind(&self) -> &AttributeKind {
        &self.kind
    }


    /// Returns `true` for a numeric attribute.
    pub fn is_numeric(&self) -> bool {
        matches!(self.kind, AttributeKind::Numeric)
    }


    /// Returns `true` for a nominal attribute.
    pub fn is_nominal(&self) -> bool {
        !self.is_numeric()
    }


    /// Returns `true` if the attribute is used for prediction.
    pub fn is_conditional(&self) -> bool {
        self.role == AttributeRole::Conditional
    }


    /// Returns the dictionary of a nominal attribute.
    pub fn dictionary(&self) -> Option<&NominalDictionary> {
        match &self.kind {
            AttributeKind::Nominal(dict) => Some(dict),
            AttributeKind::Numeric => None,
        }
    }


    /// Number of nominal values. `0` for a numeric attribute.
    pub fn n_values(&self) -> usize {
        self.dictionary().map(NominalDictionary::len).unwrap_or(0)
    }


    /// Returns the local code stored in `value`,
    /// or `None` if it is missing or not a known code.
    pub fn local_code(&self, value: f64) -> Option<usize> {
        if !self.is_nominal() || !is_code(value) {
            return None;
        }
        let code = value as usize;
        (code < self.n_values()).then_some(code)
    }


    /// Returns a printable form of `value` for this attribute.
    pub fn format_value(&self, value: f64) -> String {
        if value.is_nan() {
            return "?".to_string();
        }
        match &self.kind {
            AttributeKind::Numeric => format!("{value}"),
            AttributeKind::Nominal(dict) => {
                self.local_code(value)
                    .and_then(|code| dict.value_of(code))
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("#{value}"))
            },
        }
    }


    /// Turn a numeric attribute into a nominal one
    /// by interning the printed form of each value.
    /// Returns the re-coded values.
    pub(crate) fn into_nominal(&mut self, values: &[f64]) -> Vec<f64> {
        if self.is_nominal() {
            return values.to_vec();
        }
        let mut dict = NominalDictionary::new();
        let codes = values.iter()
            .map(|&v| {
                if v.is_nan() { f64::NAN } else { dict.intern(format!("{v}")) as f64 }
            })
            .collect();
        self.kind = AttributeKind::Nominal(dict);
        codes
    }
}


#[inline]
fn is_code(value: f64) -> bool {
    value >= 0.0 && value.fract() == 0.0
}


impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.kind {
            AttributeKind::Numeric => "numeric".to_string(),
            AttributeKind::Nominal(dict) => {
                format!("{{{}}}", dict.values().join(","))
            },
        };
        write!(f, "{} {kind}", self.name)
    }
}
