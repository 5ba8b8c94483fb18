/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Running the FEFF engine in a scratch directory
//!
//! Each attempt gets its own `tmp_feff_*` directory holding `feff.inp`. The
//! engine is run there with captured stdout/stderr and the caller blocks
//! until it exits. Scratch directories are removed once their results have
//! been read; after a failure they are left in place next to a copy of the
//! input saved in the postmortem directory.

use super::config::RunnerConfig;
use super::errors::{Result, RunnerError};
use super::outcome::{EngineFailure, FeffOutput, RunOutcome};
use crate::atoms::{AtomError, AtomicStructure, Vector3D};
use crate::input::{self, FeffOptions, FEFF_INPUT_FILE};
use crate::output::{self, feff_dat_name, CHI_FILE};
use log::{debug, error, info, warn};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Exact stderr text of the engine's recoverable hash collision
pub const HASH_ERROR: &str = "hash error";

const PATHS_FOUND: &str = "Paths found";
const WORK_DIR_PREFIX: &str = "tmp_feff_";
const POSTMORTEM_PREFIX: &str = "feff.inp.";

/// What one invocation of the engine produced
enum Attempt {
    Finished(RunOutcome),
    HashError,
}

/// The input of one attempt
struct Job<'a> {
    structure: &'a AtomicStructure,
    absorber: usize,
    options: &'a FeffOptions,
}

/// Runs FEFF for a structure and collects its output
#[derive(Debug, Clone, Default)]
pub struct FeffRunner {
    config: RunnerConfig,
}

impl FeffRunner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Run FEFF with atom `absorber` of `structure` as the absorbing atom
    ///
    /// When the engine reports a hash error the absorber is shifted by
    /// `config.perturbation` on every axis, in place, and the run is repeated.
    /// Configuration problems are reported before anything touches the disk.
    pub fn run(
        &self,
        structure: &mut AtomicStructure,
        absorber: usize,
        options: &FeffOptions,
    ) -> Result<RunOutcome> {
        self.config.validate()?;
        input::check_input(structure, absorber, options)?;

        let mut retries = 0;
        loop {
            let job = Job {
                structure: &*structure,
                absorber,
                options,
            };
            match self.attempt(&job)? {
                Attempt::Finished(outcome) => return Ok(outcome),
                Attempt::HashError => {
                    if let Some(max) = self.config.max_retries {
                        if retries >= max {
                            return Err(RunnerError::RetriesExhausted(retries));
                        }
                    }
                    retries += 1;
                    nudge(structure, absorber, self.config.perturbation)?;
                    warn!(
                        "FEFF reported '{}', retrying with the absorber shifted (retry {})",
                        HASH_ERROR, retries
                    );
                }
            }
        }
    }

    fn attempt(&self, job: &Job<'_>) -> Result<Attempt> {
        let work_dir = self.create_work_dir()?;
        input::write_feff_input(
            work_dir.join(FEFF_INPUT_FILE),
            job.structure,
            job.absorber,
            job.options,
        )?;

        debug!(
            "running '{}' in {}",
            self.config.executable,
            work_dir.display()
        );
        let result = self.launch(&work_dir)?;

        if !result.status.success() {
            error!("Problem with feff calculation in {}", work_dir.display());
            let saved_input = self.save_postmortem(job);
            return Ok(Attempt::Finished(RunOutcome::EngineFailed(EngineFailure {
                work_dir,
                saved_input,
                exit_code: result.status.code(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            })));
        }

        let stderr = String::from_utf8_lossy(&result.stderr);
        if stderr.trim() == HASH_ERROR {
            remove_work_dir(&work_dir);
            return Ok(Attempt::HashError);
        }

        if found_no_paths(&String::from_utf8_lossy(&result.stdout))? {
            info!("FEFF found no scattering paths");
            remove_work_dir(&work_dir);
            return Ok(Attempt::Finished(RunOutcome::NoPaths));
        }

        let chi_file = work_dir.join(CHI_FILE);
        let spectrum = self.read_output(job, &work_dir, output::load_chi_dat(chi_file))?;
        let path = if self.config.with_path {
            let path_file = work_dir.join(feff_dat_name(1));
            Some(self.read_output(job, &work_dir, output::load_feff_dat(path_file))?)
        } else {
            None
        };

        remove_work_dir(&work_dir);
        info!("FEFF finished with {} chi(k) points", spectrum.len());
        Ok(Attempt::Finished(RunOutcome::Completed(FeffOutput {
            spectrum,
            path,
        })))
    }

    fn create_work_dir(&self) -> Result<PathBuf> {
        let parent = self
            .config
            .scratch_dir
            .clone()
            .unwrap_or_else(std::env::temp_dir);

        let dir = tempfile::Builder::new()
            .prefix(WORK_DIR_PREFIX)
            .tempdir_in(&parent)
            .map_err(|source| RunnerError::ScratchDir {
                path: parent.clone(),
                source,
            })?;
        // Lifetime is managed here: removed on success, kept on failure
        Ok(dir.keep())
    }

    fn launch(&self, work_dir: &Path) -> Result<Output> {
        Command::new(&self.config.executable)
            .args(&self.config.arguments)
            .current_dir(work_dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| RunnerError::Spawn {
                command: self.config.executable.clone(),
                source,
            })
    }

    /// Pass parsed output through, saving the input for postmortem on error
    fn read_output<T>(
        &self,
        job: &Job<'_>,
        work_dir: &Path,
        parsed: output::Result<T>,
    ) -> Result<T> {
        match parsed {
            Ok(value) => Ok(value),
            Err(source) => {
                error!("Problem with feff calculation in {}", work_dir.display());
                let saved_input = self.save_postmortem(job);
                Err(RunnerError::Output {
                    work_dir: work_dir.to_path_buf(),
                    saved_input,
                    source,
                })
            }
        }
    }

    /// Copy the input to the postmortem directory, `None` if the copy failed
    ///
    /// A failed copy is logged and never hides the failure being reported.
    fn save_postmortem(&self, job: &Job<'_>) -> Option<PathBuf> {
        match self.write_postmortem(job) {
            Ok(path) => {
                error!("feff.inp saved to: {}", path.display());
                Some(path)
            }
            Err(e) => {
                error!(
                    "could not save feff.inp to {}: {}",
                    self.config.postmortem_dir.display(),
                    e
                );
                None
            }
        }
    }

    /// Write a copy of the input to a fresh `feff.inp.XXXXXX` in the postmortem directory
    fn write_postmortem(&self, job: &Job<'_>) -> Result<PathBuf> {
        let file = tempfile::Builder::new()
            .prefix(POSTMORTEM_PREFIX)
            .tempfile_in(&self.config.postmortem_dir)?;
        let (file, path) = file.keep().map_err(|e| e.error)?;

        let mut writer = BufWriter::new(file);
        input::write_feff_input_to(&mut writer, job.structure, job.absorber, job.options)?;
        writer.flush()?;
        Ok(path)
    }
}

/// Shift the absorber by `offset` along x, y and z
fn nudge(structure: &mut AtomicStructure, absorber: usize, offset: f64) -> Result<()> {
    let count = structure.atom_count();
    let atom = structure
        .atom_mut(absorber)
        .ok_or(AtomError::IndexOutOfRange {
            index: absorber,
            count,
        })?;
    let shifted = *atom.position() + Vector3D::splat(offset);
    atom.set_position(shifted);
    Ok(())
}

/// True if any `Paths found <N>` line of the engine log reports zero paths
fn found_no_paths(stdout: &str) -> Result<bool> {
    for line in stdout.lines().map(str::trim) {
        if !line.starts_with(PATHS_FOUND) {
            continue;
        }
        let count: usize = line
            .split_whitespace()
            .nth(2)
            .and_then(|token| token.parse().ok())
            .ok_or_else(|| RunnerError::PathCount(line.to_string()))?;
        if count == 0 {
            return Ok(true);
        }
    }
    Ok(false)
}

fn remove_work_dir(work_dir: &Path) {
    if let Err(e) = fs::remove_dir_all(work_dir) {
        warn!("could not remove {}: {}", work_dir.display(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::Atom;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_paths() {
        let log = " Calculating potentials ...\n Paths found 0 of 0\n Done.\n";
        assert!(found_no_paths(log).unwrap());
    }

    #[test]
    fn test_some_paths() {
        let log = "    Paths found       12   (maxheap, maxscatt       3   1)\n";
        assert!(!found_no_paths(log).unwrap());
        assert!(!found_no_paths("no summary line\n").unwrap());
    }

    #[test]
    fn test_unreadable_path_count() {
        assert!(matches!(
            found_no_paths("Paths found many\n"),
            Err(RunnerError::PathCount(_))
        ));
    }

    #[test]
    fn test_nudge_shifts_every_axis() {
        let mut structure = AtomicStructure::new();
        structure.add_atom(Atom::new(8, Vector3D::new(1.0, 0.0, 0.0), 0).unwrap());
        structure.add_atom(Atom::new(26, Vector3D::new(0.5, -0.5, 2.0), 0).unwrap());

        nudge(&mut structure, 1, 0.001).unwrap();

        let moved = structure.atom(1).unwrap().position();
        assert_relative_eq!(moved.x, 0.501, epsilon = 1e-12);
        assert_relative_eq!(moved.y, -0.499, epsilon = 1e-12);
        assert_relative_eq!(moved.z, 2.001, epsilon = 1e-12);
        assert_eq!(structure.atom(0).unwrap().position(), &Vector3D::new(1.0, 0.0, 0.0));
        assert!(nudge(&mut structure, 2, 0.001).is_err());
    }
}
