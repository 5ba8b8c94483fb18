/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Configuration for a FEFF run

use super::errors::{Result, RunnerError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Offset added to each coordinate of the absorber after a hash error
pub const DEFAULT_PERTURBATION: f64 = 0.001;

/// How and where the engine is run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Engine command, looked up on PATH unless it contains a separator
    pub executable: String,
    /// Extra arguments passed to the engine
    pub arguments: Vec<String>,
    /// Parent of the per-run scratch directories; the system temp dir if unset
    pub scratch_dir: Option<PathBuf>,
    /// Where copies of failing input files are saved
    pub postmortem_dir: PathBuf,
    /// Also parse the first path file (`feff0001.dat`)
    pub with_path: bool,
    /// Give up after this many hash-error retries; unlimited if unset
    pub max_retries: Option<usize>,
    /// Absorber shift per axis applied before each hash-error retry, in Angstrom
    pub perturbation: f64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            executable: "feff".to_string(),
            arguments: Vec::new(),
            scratch_dir: None,
            postmortem_dir: PathBuf::from("."),
            with_path: false,
            max_retries: None,
            perturbation: DEFAULT_PERTURBATION,
        }
    }
}

impl RunnerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_executable(mut self, executable: impl Into<String>) -> Self {
        self.executable = executable.into();
        self
    }

    pub fn with_arguments<I, S>(mut self, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.arguments = arguments.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = Some(dir.into());
        self
    }

    pub fn with_postmortem_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.postmortem_dir = dir.into();
        self
    }

    pub fn with_path(mut self, with_path: bool) -> Self {
        self.with_path = with_path;
        self
    }

    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    pub fn with_perturbation(mut self, perturbation: f64) -> Self {
        self.perturbation = perturbation;
        self
    }

    /// Reject settings that cannot produce a run
    pub fn validate(&self) -> Result<()> {
        if self.executable.trim().is_empty() {
            return Err(RunnerError::InvalidConfig(
                "executable must not be blank".to_string(),
            ));
        }
        if !self.perturbation.is_finite() || self.perturbation == 0.0 {
            return Err(RunnerError::InvalidConfig(format!(
                "perturbation must be a finite non-zero shift, got {}",
                self.perturbation
            )));
        }
        Ok(())
    }
}
