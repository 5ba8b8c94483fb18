/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Reader for the per-path `feffNNNN.dat` files
//!
//! The file is read in one pass. Marker lines switch between three sections:
//!
//! - a line containing `genfmt` opens the path header; dashed dividers are
//!   skipped and the next line holds reff as its third column,
//! - a row starting `x y z` opens the atom table (x, y, z, ipot, Z),
//! - a row starting `k real[2*phc]` opens the data table, seven numeric
//!   columns per row.

use super::errors::{OutputError, Result};
use super::fields::{column, open};
use crate::atoms::{Atom, AtomicStructure, Vector3D};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::io::BufRead;
use std::path::Path;

const GENFMT_MARKER: &str = "genfmt";
const DIVIDER: &str = "---------------";
const ATOMS_HEADER: [&str; 3] = ["x", "y", "z"];
const DATA_HEADER: [&str; 2] = ["k", "real[2*phc]"];
const DATA_COLUMNS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    PathHeader,
    Atoms,
    Data,
}

/// Scattering path description and tabulated amplitude/phase data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathData {
    atoms: AtomicStructure,
    reff: f64,
    xk: Array1<f64>,
    cdelta: Array1<f64>,
    afeff: Array1<f64>,
    phfeff: Array1<f64>,
    redfac: Array1<f64>,
    xlam: Array1<f64>,
    rep: Array1<f64>,
}

impl PathData {
    /// Atoms of the path, tagged with their potential index
    pub fn atoms(&self) -> &AtomicStructure {
        &self.atoms
    }

    /// Effective (half) path length in Angstrom
    pub fn reff(&self) -> f64 {
        self.reff
    }

    /// Wavenumber grid
    pub fn xk(&self) -> &Array1<f64> {
        &self.xk
    }

    /// Central-atom phase shift, real[2*phc]
    pub fn cdelta(&self) -> &Array1<f64> {
        &self.cdelta
    }

    /// Effective scattering amplitude, mag[feff]
    pub fn afeff(&self) -> &Array1<f64> {
        &self.afeff
    }

    /// Effective scattering phase, phase[feff]
    pub fn phfeff(&self) -> &Array1<f64> {
        &self.phfeff
    }

    /// Reduction factor
    pub fn redfac(&self) -> &Array1<f64> {
        &self.redfac
    }

    /// Mean free path, lambda
    pub fn xlam(&self) -> &Array1<f64> {
        &self.xlam
    }

    /// Real part of the complex momentum, real[p]
    pub fn rep(&self) -> &Array1<f64> {
        &self.rep
    }

    /// Number of rows in the data table
    pub fn len(&self) -> usize {
        self.xk.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xk.is_empty()
    }
}

/// Read a `feffNNNN.dat` file
pub fn load_feff_dat<P: AsRef<Path>>(path: P) -> Result<PathData> {
    parse_feff_dat(open(path.as_ref())?)
}

/// Parse `feffNNNN.dat` content from any buffered reader
pub fn parse_feff_dat<R: BufRead>(reader: R) -> Result<PathData> {
    let mut section = Section::None;
    let mut reff: Option<f64> = None;
    let mut atoms = AtomicStructure::new();
    let mut columns: [Vec<f64>; DATA_COLUMNS] = Default::default();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = i + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }

        if reff.is_none() && line.contains(GENFMT_MARKER) {
            section = Section::PathHeader;
            continue;
        }
        if fields.starts_with(&ATOMS_HEADER) {
            section = Section::Atoms;
            continue;
        }
        if fields.starts_with(&DATA_HEADER) {
            section = Section::Data;
            continue;
        }

        match section {
            Section::None => {}
            Section::PathHeader => {
                if line.contains(DIVIDER) {
                    continue;
                }
                reff = Some(column(&fields, 2, line_no, "reff")?);
                section = Section::None;
            }
            Section::Atoms => {
                atoms.add_atom(parse_atom(&fields, line_no)?);
            }
            Section::Data => {
                if fields.len() < DATA_COLUMNS {
                    return Err(OutputError::ParseError {
                        line: line_no,
                        reason: format!(
                            "expected {} data columns, found {}",
                            DATA_COLUMNS,
                            fields.len()
                        ),
                    });
                }
                // Every token must be numeric, extra columns included
                let row = (0..fields.len())
                    .map(|idx| column::<f64>(&fields, idx, line_no, "data"))
                    .collect::<Result<Vec<_>>>()?;
                for (target, value) in columns.iter_mut().zip(row) {
                    target.push(value);
                }
            }
        }
    }

    let reff = reff.ok_or(OutputError::MissingReff)?;
    let [xk, cdelta, afeff, phfeff, redfac, xlam, rep] = columns.map(Array1::from_vec);

    Ok(PathData {
        atoms,
        reff,
        xk,
        cdelta,
        afeff,
        phfeff,
        redfac,
        xlam,
        rep,
    })
}

fn parse_atom(fields: &[&str], line_no: usize) -> Result<Atom> {
    let x: f64 = column(fields, 0, line_no, "x")?;
    let y: f64 = column(fields, 1, line_no, "y")?;
    let z: f64 = column(fields, 2, line_no, "z")?;
    let pot: i32 = column(fields, 3, line_no, "ipot")?;
    let atomic_number: i32 = column(fields, 4, line_no, "atomic number")?;

    Atom::new(atomic_number, Vector3D::new(x, y, z), pot).map_err(|e| OutputError::ParseError {
        line: line_no,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const MINIMAL: &str = "\
 Path    1      icalc       2          genfmt 3.0
 -----------------------------------------------------------------------
   2   2.000   3.4560   6.5310 -12.97652 nleg, deg, reff, rnrmav(bohr), edge
        x         y         z   pot at#
    0.0000    0.0000    0.0000  1 26
    k   real[2*phc]   mag[feff]  phase[feff] red factor   lambda     real[p]@#
    0.000  2.7140E+00  1.3820E-01  -1.6436E+00  1.000E+00  5.1282E+01  4.7133E-01
";

    #[test]
    fn test_minimal_path() {
        let path = parse_feff_dat(MINIMAL.as_bytes()).unwrap();

        assert_relative_eq!(path.reff(), 3.456, epsilon = 1e-12);
        assert_eq!(path.atoms().atom_count(), 1);
        assert_eq!(path.atoms().atoms()[0].atomic_number(), 26);
        assert_eq!(path.atoms().atoms()[0].tag(), 1);
        assert_eq!(path.len(), 1);
        for values in [
            path.xk(),
            path.cdelta(),
            path.afeff(),
            path.phfeff(),
            path.redfac(),
            path.xlam(),
            path.rep(),
        ] {
            assert_eq!(values.len(), 1);
        }
        assert_relative_eq!(path.xlam()[0], 51.282, epsilon = 1e-9);
    }

    #[test]
    fn test_missing_data_section_gives_empty_columns() {
        let text = "genfmt\n---------------\n1 2 2.5\nx y z\n0 0 0 0 29\n";
        let path = parse_feff_dat(text.as_bytes()).unwrap();
        assert!(path.is_empty());
        assert_eq!(path.atoms().atom_count(), 1);
    }

    #[test]
    fn test_missing_reff() {
        let text = "x y z\n0 0 0 0 29\n";
        assert!(matches!(
            parse_feff_dat(text.as_bytes()),
            Err(OutputError::MissingReff)
        ));
    }

    #[test]
    fn test_short_data_row() {
        let text = "genfmt\n1 2 2.5\nk real[2*phc]\n0.0 1.0 2.0\n";
        assert!(matches!(
            parse_feff_dat(text.as_bytes()),
            Err(OutputError::ParseError { line: 4, .. })
        ));
    }

    #[test]
    fn test_bad_atom_row() {
        let text = "genfmt\n1 2 2.5\nx y z\n0.0 0.0 zero 1 26\n";
        assert!(matches!(
            parse_feff_dat(text.as_bytes()),
            Err(OutputError::ParseError { line: 4, .. })
        ));
    }
}
