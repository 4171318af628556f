//! Shared error types used across submodules.

use thiserror::Error;

use crate::grid::GridError;
use crate::input::InputError;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum Coulomb2dError {
    /// Wraps grid validation errors.
    #[error(transparent)]
    Grid(#[from] GridError),
    /// Wraps interactive input errors.
    #[error(transparent)]
    Input(#[from] InputError),
    /// Raised when a session mutation addresses a charge that does not exist.
    #[error("charge index {index} out of range for {len} charges")]
    ChargeIndex {
        /// Requested charge index.
        index: usize,
        /// Number of charges in the session.
        len: usize,
    },
}
