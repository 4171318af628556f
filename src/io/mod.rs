//! Export helpers for handing evaluated frames to external renderers.

pub mod csv;
pub mod vtk;

pub use csv::*;
pub use vtk::*;
