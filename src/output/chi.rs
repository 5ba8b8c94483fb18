/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Reader for `chi.dat`
//!
//! Everything up to a row starting with the tokens `k chi mag` is preamble.
//! Each later row contributes its first two columns as k and chi(k); further
//! columns (magnitude, phase) are ignored.

use super::errors::Result;
use super::fields::{column, open};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::io::BufRead;
use std::path::Path;

const HEADER: [&str; 3] = ["k", "chi", "mag"];

/// EXAFS chi(k) curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChiSpectrum {
    k: Array1<f64>,
    chi: Array1<f64>,
}

impl ChiSpectrum {
    /// Photoelectron wavenumbers in inverse Angstrom
    pub fn k(&self) -> &Array1<f64> {
        &self.k
    }

    /// chi(k) values
    pub fn chi(&self) -> &Array1<f64> {
        &self.chi
    }

    /// Number of (k, chi) points
    pub fn len(&self) -> usize {
        self.k.len()
    }

    pub fn is_empty(&self) -> bool {
        self.k.is_empty()
    }
}

/// Read a `chi.dat` file
pub fn load_chi_dat<P: AsRef<Path>>(path: P) -> Result<ChiSpectrum> {
    parse_chi(open(path.as_ref())?)
}

/// Parse `chi.dat` content from any buffered reader
pub fn parse_chi<R: BufRead>(reader: R) -> Result<ChiSpectrum> {
    let mut in_data = false;
    let mut k = Vec::new();
    let mut chi = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }

        if fields.starts_with(&HEADER) {
            in_data = true;
            continue;
        }

        if in_data {
            k.push(column(&fields, 0, i + 1, "k")?);
            chi.push(column(&fields, 1, i + 1, "chi")?);
        }
    }

    Ok(ChiSpectrum {
        k: Array1::from_vec(k),
        chi: Array1::from_vec(chi),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputError;
    use approx::assert_relative_eq;

    #[test]
    fn test_two_rows() {
        let text = "k chi mag\n1.0 0.5 0.1\n2.0 0.3 0.1\n";
        let spectrum = parse_chi(text.as_bytes()).unwrap();

        assert_eq!(spectrum.len(), 2);
        assert_relative_eq!(spectrum.k()[0], 1.0);
        assert_relative_eq!(spectrum.k()[1], 2.0);
        assert_relative_eq!(spectrum.chi()[0], 0.5);
        assert_relative_eq!(spectrum.chi()[1], 0.3);
    }

    #[test]
    fn test_preamble_and_blank_lines_ignored() {
        let text = "\
 Cu metal                                   Feff 6L.02
 Abs   Z=29 Rmt= 1.270 Rnm= 1.357 K  shell
 S02 1.000   Temp 0.00  Debye temp 0.00  Global sig2 0.00000

       k          chi          mag           phase @#
      k   chi   mag   phase

  0.0000  2.034E-01  2.034E-01  0.0000

  0.0500  1.987E-01  1.990E-01  5.1234E-02
";
        let spectrum = parse_chi(text.as_bytes()).unwrap();

        assert_eq!(spectrum.len(), 2);
        assert_relative_eq!(spectrum.k()[1], 0.05);
        assert_relative_eq!(spectrum.chi()[0], 0.2034);
        assert_relative_eq!(spectrum.chi()[1], 0.1987);
    }

    #[test]
    fn test_header_is_case_sensitive() {
        let text = "K CHI MAG\n1.0 0.5\n";
        let spectrum = parse_chi(text.as_bytes()).unwrap();
        assert!(spectrum.is_empty());
    }

    #[test]
    fn test_short_row_is_an_error() {
        let text = "k chi mag\n1.0 0.5\n3.0\n";
        match parse_chi(text.as_bytes()) {
            Err(OutputError::ParseError { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_row_is_an_error() {
        let text = "k chi mag\n1.0 abc\n";
        assert!(matches!(
            parse_chi(text.as_bytes()),
            Err(OutputError::ParseError { line: 2, .. })
        ));
    }
}
