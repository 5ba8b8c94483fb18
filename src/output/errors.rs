/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for reading FEFF output files

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading `chi.dat` or `feffNNNN.dat`
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to read file {path}: {source}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Parse error at line {line}: {reason}")]
    ParseError { line: usize, reason: String },

    #[error("No effective path length (reff) found after the genfmt header")]
    MissingReff,
}

impl OutputError {
    /// True when the file could not be opened because it does not exist
    pub fn is_missing_file(&self) -> bool {
        match self {
            OutputError::FileReadError { source, .. } | OutputError::IoError(source) => {
                source.kind() == io::ErrorKind::NotFound
            }
            _ => false,
        }
    }
}

/// Result type for output parsing
pub type Result<T> = std::result::Result<T, OutputError>;
