//! Struct `Sample` represents a batch of labeled records.

// Provides attribute structs.
pub(crate) mod attribute_struct;
// Provides the header struct.
pub(crate) mod header;
// Provides sample struct.
pub(crate) mod sample_struct;
// Provides summary statistics of numeric attributes.
pub(crate) mod statistics;

// Provides a struct that reads a file.
pub(crate) mod sample_reader;


pub use attribute_struct::{
    Attribute,
    AttributeKind,
    AttributeRole,
    NominalDictionary,
};
pub use header::Header;
pub use sample_reader::SampleReader;
pub use sample_struct::Sample;
pub use statistics::NumericStatistics;
