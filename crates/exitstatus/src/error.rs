use thiserror::Error;

/// A raw integer that does not match any entry in the exit status table.
///
/// Carries the offending value so callers can report exactly what they
/// received. This crate never substitutes a recognized status for an unknown
/// one; deciding how to react is up to the boundary code that did the
/// conversion.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0} is not a recognized exit status")]
pub struct UnknownExitStatus(pub i32);
