//! Contains all data types to represent an enumeration that opted into bitmask semantics.

pub(crate) mod parse;
pub(crate) mod generate;

/// Stores all information about a registered enumeration.
pub(crate) struct Mask(crate::enumeration::Enumeration);
