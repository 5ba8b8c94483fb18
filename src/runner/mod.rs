/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Driving the external FEFF engine
//!
//! [`FeffRunner::run`] writes the input, runs the engine and parses its
//! output into a [`RunOutcome`]:
//!
//! - `Completed`: chi(k), plus the first path when `with_path` is set
//! - `NoPaths`: the engine reported `Paths found 0`
//! - `EngineFailed`: non-zero exit; scratch dir and a saved input are kept
//!
//! A `hash error` on stderr is retried transparently.

pub mod config;
pub mod engine;
pub mod errors;
pub mod outcome;

pub use config::RunnerConfig;
pub use engine::{FeffRunner, HASH_ERROR};
pub use errors::{Result, RunnerError};
pub use outcome::{EngineFailure, FeffOutput, RunOutcome};

use crate::atoms::AtomicStructure;
use crate::input::FeffOptions;

/// Run FEFF once with the given configuration
pub fn run_feff(
    structure: &mut AtomicStructure,
    absorber: usize,
    options: &FeffOptions,
    config: RunnerConfig,
) -> Result<RunOutcome> {
    FeffRunner::new(config).run(structure, absorber, options)
}
