/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Results of a FEFF run

use crate::output::{ChiSpectrum, PathData};
use serde::Serialize;
use std::path::PathBuf;

/// Parsed output of a successful run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeffOutput {
    /// chi(k) from `chi.dat`
    pub spectrum: ChiSpectrum,
    /// First scattering path, present when the run asked for it
    pub path: Option<PathData>,
}

/// Evidence left behind by a run whose engine exited unsuccessfully
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineFailure {
    /// Scratch directory of the failed attempt, kept on disk
    pub work_dir: PathBuf,
    /// Copy of the input file in the postmortem directory, if it could be written
    pub saved_input: Option<PathBuf>,
    /// Exit code, `None` if the engine was killed by a signal
    pub exit_code: Option<i32>,
    /// Captured standard error, trimmed
    pub stderr: String,
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunOutcome {
    Completed(FeffOutput),
    /// The engine ran but found no scattering paths
    NoPaths,
    EngineFailed(EngineFailure),
}

impl RunOutcome {
    /// The parsed output, or `None` for the no-result outcomes
    pub fn into_output(self) -> Option<FeffOutput> {
        match self {
            RunOutcome::Completed(output) => Some(output),
            _ => None,
        }
    }
}
