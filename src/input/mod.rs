/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! FEFF input generation
//!
//! Turns an [`AtomicStructure`](crate::atoms::AtomicStructure), the index of
//! the absorbing atom and a set of [`FeffOptions`] into the `feff.inp` file
//! the engine reads from its working directory.

pub mod errors;
pub mod options;
pub mod writer;

pub use errors::{InputError, Result};
pub use options::{Edge, FeffOptions};
pub use writer::{check_input, write_feff_input, write_feff_input_to};

/// Name of the input file the engine expects in its working directory
pub const FEFF_INPUT_FILE: &str = "feff.inp";
