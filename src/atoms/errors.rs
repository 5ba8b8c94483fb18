/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for the atoms module

/// Error types for the atoms module
#[derive(Debug, thiserror::Error)]
pub enum AtomError {
    #[error("Invalid atomic number: {0}")]
    InvalidAtomicNumber(i32),

    #[error("Invalid potential index: {0}")]
    InvalidPotentialIndex(i32),

    #[error("Atom index {index} out of range for a structure of {count} atoms")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("Invalid structure: {0}")]
    InvalidStructure(String),
}

/// Result type for atom operations
pub type Result<T> = std::result::Result<T, AtomError>;
