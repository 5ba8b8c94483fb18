/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Command Line Interface (CLI) module
//!
//! `feff-driver write-input` and `feff-driver run` read a cluster from a JSON
//! file (the serde form of [`AtomicStructure`]); `chi` and `path` parse
//! existing output files. Results are printed to stdout as JSON.

use crate::atoms::AtomicStructure;
use crate::input::{self, Edge, FeffOptions};
use crate::output;
use crate::runner::{FeffRunner, RunOutcome, RunnerConfig};
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "feff-driver", version, about = "Run FEFF and read its chi(k) and path output")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write feff.inp for a cluster
    WriteInput {
        #[command(flatten)]
        job: JobArgs,

        /// Destination file
        #[arg(short, long, default_value = input::FEFF_INPUT_FILE)]
        output: PathBuf,
    },

    /// Run FEFF for a cluster and print the outcome as JSON
    Run {
        #[command(flatten)]
        job: JobArgs,

        #[command(flatten)]
        runner: RunnerArgs,
    },

    /// Parse a chi.dat file
    Chi { file: PathBuf },

    /// Parse a feffNNNN.dat path file
    Path { file: PathBuf },
}

/// Cluster, absorber and FEFF directives
#[derive(Args, Debug)]
pub struct JobArgs {
    /// Cluster as JSON
    pub structure: PathBuf,

    /// Index of the absorbing atom (0-based)
    #[arg(short, long)]
    pub absorber: usize,

    /// FEFF directive as KEY=VALUE, e.g. --option RMAX=6.0 (repeatable)
    #[arg(long = "option", value_name = "KEY=VALUE", value_parser = parse_directive)]
    pub options: Vec<(String, String)>,

    /// Absorption edge (k, l1, l2, l3); sets the HOLE directive
    #[arg(long)]
    pub edge: Option<Edge>,

    /// S0^2 written on the HOLE directive
    #[arg(long, default_value_t = 1.0)]
    pub s02: f64,
}

/// Overrides for the runner configuration
#[derive(Args, Debug)]
pub struct RunnerArgs {
    /// Runner configuration as JSON; flags below take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Also parse feff0001.dat
    #[arg(long)]
    pub with_path: bool,

    /// Parent directory for scratch directories
    #[arg(long)]
    pub scratch_dir: Option<PathBuf>,

    /// Directory receiving copies of failing input files
    #[arg(long)]
    pub postmortem_dir: Option<PathBuf>,

    /// Engine command
    #[arg(long)]
    pub executable: Option<String>,

    /// Maximum number of hash-error retries
    #[arg(long)]
    pub max_retries: Option<usize>,
}

impl JobArgs {
    fn load(&self) -> Result<(AtomicStructure, FeffOptions)> {
        let structure: AtomicStructure = read_json(&self.structure)
            .with_context(|| format!("reading cluster from {}", self.structure.display()))?;

        let mut options: FeffOptions = self.options.iter().cloned().collect();
        if let Some(edge) = self.edge {
            options.set_hole(edge, self.s02);
        }
        Ok((structure, options))
    }
}

impl RunnerArgs {
    fn config(&self) -> Result<RunnerConfig> {
        let mut config = match &self.config {
            Some(path) => read_json(path)
                .with_context(|| format!("reading runner configuration from {}", path.display()))?,
            None => RunnerConfig::default(),
        };

        if self.with_path {
            config.with_path = true;
        }
        if let Some(dir) = &self.scratch_dir {
            config.scratch_dir = Some(dir.clone());
        }
        if let Some(dir) = &self.postmortem_dir {
            config.postmortem_dir = dir.clone();
        }
        if let Some(executable) = &self.executable {
            config.executable = executable.clone();
        }
        if let Some(max) = self.max_retries {
            config.max_retries = Some(max);
        }
        Ok(config)
    }
}

/// Execute a parsed command line
pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Command::WriteInput {
            job,
            output: destination,
        } => {
            let (structure, options) = job.load()?;
            input::write_feff_input(&destination, &structure, job.absorber, &options)
                .with_context(|| format!("writing {}", destination.display()))?;
            log::info!("wrote {}", destination.display());
        }
        Command::Run { job, runner } => {
            let (mut structure, options) = job.load()?;
            let config = runner.config()?;
            let outcome = FeffRunner::new(config).run(&mut structure, job.absorber, &options)?;
            print_json(&outcome)?;
            if let RunOutcome::EngineFailed(failure) = outcome {
                match failure.saved_input {
                    Some(saved) => bail!(
                        "FEFF failed in {} (input saved to {})",
                        failure.work_dir.display(),
                        saved.display()
                    ),
                    None => bail!("FEFF failed in {}", failure.work_dir.display()),
                }
            }
        }
        Command::Chi { file } => {
            let spectrum = output::load_chi_dat(&file)
                .with_context(|| format!("parsing {}", file.display()))?;
            print_json(&spectrum)?;
        }
        Command::Path { file } => {
            let path = output::load_feff_dat(&file)
                .with_context(|| format!("parsing {}", file.display()))?;
            print_json(&path)?;
        }
    }
    Ok(())
}

/// Split a `KEY=VALUE` directive
fn parse_directive(s: &str) -> std::result::Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing keyword in '{}'", s));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
