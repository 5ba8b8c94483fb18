/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Atomic structure container handed to the FEFF input writer
//!
//! Atoms carry an atomic number, a cartesian position in Angstrom and a
//! potential tag. The structure is a plain ordered list of atoms; the only
//! mutation the pipeline performs is the absorber nudge on a hash-error retry.

pub mod atom;
pub mod database;
pub mod errors;
pub mod potential;
pub mod structure;
pub mod vector;

pub use atom::Atom;
pub use errors::{AtomError, Result};
pub use potential::PotentialMap;
pub use structure::AtomicStructure;
pub use vector::Vector3D;
