/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for running the FEFF engine

use crate::atoms::AtomError;
use crate::input::InputError;
use crate::output::OutputError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a FEFF run
///
/// A non-zero engine exit is not an error here; it is reported as
/// [`RunOutcome::EngineFailed`](super::RunOutcome::EngineFailed).
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Invalid runner configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid atomic structure: {0}")]
    Structure(#[from] AtomError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Failed to create scratch directory under {path}: {source}")]
    ScratchDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to launch '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("Unreadable path count in FEFF log line '{0}'")]
    PathCount(String),

    #[error("Failed to read FEFF output in {work_dir}: {source}")]
    Output {
        work_dir: PathBuf,
        /// Postmortem copy of the input, if it could be written
        saved_input: Option<PathBuf>,
        #[source]
        source: OutputError,
    },

    #[error("FEFF still reports a hash error after {0} retries")]
    RetriesExhausted(usize),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// Result type for runner operations
pub type Result<T> = std::result::Result<T, RunnerError>;
