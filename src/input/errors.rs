/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for FEFF input generation

use crate::atoms::AtomError;
use std::io;
use thiserror::Error;

/// Errors that can occur while writing a FEFF input file
#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Invalid atomic structure: {0}")]
    InvalidStructure(#[from] AtomError),

    #[error("Invalid option '{key}': {reason}")]
    InvalidOption { key: String, reason: String },

    #[error("Unknown absorption edge: {0}")]
    UnknownEdge(String),

    #[error("No potential assigned to atomic number {0}")]
    MissingPotential(i32),
}

/// Result type for input operations
pub type Result<T> = std::result::Result<T, InputError>;
