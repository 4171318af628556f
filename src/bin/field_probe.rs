//! Interactive single-point probe: prompts for a charge configuration and one
//! evaluation point on stdin, then prints the total field and potential there.
//! Malformed input aborts the run with the underlying conversion error.

use std::io;
use std::process::ExitCode;

use coulomb2d::input::read_probe_config;
use coulomb2d::superposition::{total_field, total_potential};

fn main() -> ExitCode {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let config = match read_probe_config(&mut input, &mut output) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("input error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let e = total_field(&config.charges, config.point);
    let v = total_potential(&config.charges, config.point);

    println!();
    println!(
        "Electric field at ({}, {}): [{:.6e}, {:.6e}] N/C",
        config.point.x, config.point.y, e.x, e.y
    );
    println!(
        "Electric potential at ({}, {}): {:.6e} V",
        config.point.x, config.point.y, v
    );
    ExitCode::SUCCESS
}
