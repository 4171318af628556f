//! Convenience re-exports for building electrostatics demonstrations.

pub use crate::charge::PointCharge;
pub use crate::constants::*;
pub use crate::errors::Coulomb2dError;
pub use crate::frame::{ChargeMarker, FieldFrame, Polarity};
pub use crate::grid::{GridError, GridSpec};
pub use crate::input::{read_probe_config, InputError, ProbeConfig};
pub use crate::io::{write_frame_csv, write_frame_vtk, write_markers_csv};
pub use crate::math::{linspace, Scalar, R2};
pub use crate::session::FieldSession;
pub use crate::superposition::{
    field_magnitudes, field_on_grid, potential_on_grid, total_field, total_potential,
};
