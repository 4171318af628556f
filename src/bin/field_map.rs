//! Dipole demonstration map: evaluates the classic {+1 nC at (-2, 0),
//! -1 nC at (2, 0)} configuration on a [-5, 5]² grid and writes the frame to
//! stdout as CSV, or as legacy VTK with `--vtk`.

use std::env;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use coulomb2d::charge::PointCharge;
use coulomb2d::frame::FieldFrame;
use coulomb2d::grid::GridSpec;
use coulomb2d::io::{write_frame_csv, write_frame_vtk};

fn run(vtk: bool) -> io::Result<()> {
    let charges = [
        PointCharge::new(1.0e-9, -2.0, 0.0),
        PointCharge::new(-1.0e-9, 2.0, 0.0),
    ];
    // Bounds and sample count are compile-time constants, so this cannot fail.
    let grid = GridSpec::square(5.0, 100).map_err(io::Error::other)?;
    let frame = FieldFrame::compute(&charges, &grid);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if vtk {
        write_frame_vtk(&mut out, &frame, "coulomb2d dipole")?;
    } else {
        write_frame_csv(&mut out, &frame)?;
    }
    out.flush()
}

fn main() -> ExitCode {
    let vtk = env::args().skip(1).any(|arg| arg == "--vtk");
    match run(vtk) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("export error: {err}");
            ExitCode::FAILURE
        }
    }
}
