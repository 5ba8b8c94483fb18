/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! # feff-driver
//!
//! Runs the FEFF X-ray absorption code as an external program and reads its
//! results back into memory.
//!
//! The pipeline for one calculation is
//!
//! 1. [`input::write_feff_input`] turns an [`atoms::AtomicStructure`], the
//!    absorbing atom and a set of [`input::FeffOptions`] into `feff.inp`,
//! 2. [`runner::FeffRunner`] runs the engine in a scratch directory and
//!    retries on the engine's transient hash error,
//! 3. [`output::load_chi_dat`] and [`output::load_feff_dat`] parse `chi.dat`
//!    and the first `feffNNNN.dat` path file.
//!
//! ```no_run
//! use feff_driver::atoms::{Atom, AtomicStructure, Vector3D};
//! use feff_driver::input::FeffOptions;
//! use feff_driver::runner::{FeffRunner, RunnerConfig};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut cluster = AtomicStructure::new();
//! cluster.add_atom(Atom::new(29, Vector3D::origin(), 0)?);
//! cluster.add_atom(Atom::new(29, Vector3D::new(1.805, 1.805, 0.0), 0)?);
//!
//! let options = FeffOptions::new().with("RMAX", 3.0);
//! let runner = FeffRunner::new(RunnerConfig::default().with_path(true));
//! if let Some(output) = runner.run(&mut cluster, 0, &options)?.into_output() {
//!     println!("{} points", output.spectrum.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod atoms;
pub mod cli;
pub mod input;
pub mod output;
pub mod runner;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
