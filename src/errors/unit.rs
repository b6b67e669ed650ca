//! Error type for unit names.

/// An unrecognised unit name was given to [`Unit::from_str`](crate::Unit).
///
/// Accepted names are `base` and `display`, in any case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown unit {name:?}, expected \"base\" or \"display\"")]
pub struct UnitParseError {
    /// The rejected name
    pub name: String,
}

impl UnitParseError {
    /// Create an error for the rejected unit name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
