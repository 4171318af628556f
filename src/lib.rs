#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Physical constants used throughout the library.
pub mod constants;
/// Shared mathematical utilities (2D vectors, sample spacing).
pub mod math;
/// Point charges and their per-charge field/potential contributions.
pub mod charge;
/// Rectangular evaluation grids.
pub mod grid;
/// Superposition of charge contributions at points and over grids.
pub mod superposition;
/// Renderer-facing field frames and charge markers.
pub mod frame;
/// Interactive session controller owning the charge set and grid.
pub mod session;
/// Prompt-driven configuration input.
pub mod input;
/// Export helpers (CSV, legacy VTK).
pub mod io;
/// Error types shared between modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
