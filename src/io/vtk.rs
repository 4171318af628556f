//! Legacy VTK ASCII export.
//!
//! Writes a frame as a `STRUCTURED_POINTS` dataset with the potential as
//! point scalars and the field as point vectors (z component zero), readable
//! by ParaView and other VTK consumers. The frame's row-major x-fastest
//! sample ordering matches VTK's expected point ordering directly.

use std::io::{self, Write};

use crate::frame::FieldFrame;

/// Writes the legacy VTK ASCII header and dataset description for `frame`.
fn write_vtk_header<W: Write>(w: &mut W, frame: &FieldFrame, title: &str) -> io::Result<()> {
    let grid = &frame.grid;
    writeln!(w, "# vtk DataFile Version 3.0")?;
    writeln!(w, "{title}")?;
    writeln!(w, "ASCII")?;
    writeln!(w, "DATASET STRUCTURED_POINTS")?;
    writeln!(w, "DIMENSIONS {} {} 1", grid.nx(), grid.ny())?;
    writeln!(w, "ORIGIN {:e} {:e} 0", grid.x_min(), grid.y_min())?;
    // VTK rejects zero spacing, so degenerate single-sample axes get 1.
    let dx = if grid.nx() > 1 { grid.dx() } else { 1.0 };
    let dy = if grid.ny() > 1 { grid.dy() } else { 1.0 };
    writeln!(w, "SPACING {dx:e} {dy:e} 1")?;
    Ok(())
}

/// Writes `frame` as a legacy VTK ASCII structured-points dataset.
pub fn write_frame_vtk<W: Write>(mut w: W, frame: &FieldFrame, title: &str) -> io::Result<()> {
    write_vtk_header(&mut w, frame, title)?;

    writeln!(w, "POINT_DATA {}", frame.grid.len())?;
    writeln!(w, "SCALARS potential double 1")?;
    writeln!(w, "LOOKUP_TABLE default")?;
    for v in &frame.potential {
        writeln!(w, "{v:e}")?;
    }

    writeln!(w, "VECTORS electric_field double")?;
    for e in &frame.field {
        writeln!(w, "{:e} {:e} 0", e.x, e.y)?;
    }
    Ok(())
}
