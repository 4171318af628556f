//! CSV export of evaluated frames.

use std::io::{self, Write};

use crate::frame::{FieldFrame, Polarity};

/// Writes one row per grid sample: position, field components, field
/// magnitude, potential. Infinite potential samples print as `inf`.
pub fn write_frame_csv<W: Write>(mut w: W, frame: &FieldFrame) -> io::Result<()> {
    writeln!(w, "x,y,ex,ey,e_mag,potential")?;
    for (i, pos) in frame.positions.iter().enumerate() {
        let e = frame.field[i];
        writeln!(
            w,
            "{:.16e},{:.16e},{:.16e},{:.16e},{:.16e},{:.16e}",
            pos.x,
            pos.y,
            e.x,
            e.y,
            e.norm(),
            frame.potential[i]
        )?;
    }
    Ok(())
}

/// Writes one row per charge marker: position and sign.
pub fn write_markers_csv<W: Write>(mut w: W, frame: &FieldFrame) -> io::Result<()> {
    writeln!(w, "x,y,sign")?;
    for marker in &frame.markers {
        let sign = match marker.polarity {
            Polarity::Positive => "+",
            Polarity::Negative => "-",
        };
        writeln!(w, "{:.16e},{:.16e},{}", marker.position.x, marker.position.y, sign)?;
    }
    Ok(())
}
