/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Readers for the files FEFF leaves in its working directory
//!
//! - `chi.dat`: the total EXAFS chi(k), see [`chi`]
//! - `feffNNNN.dat`: amplitude and phase of one scattering path, see [`path`]

pub mod chi;
pub mod errors;
mod fields;
pub mod path;

pub use chi::{load_chi_dat, parse_chi, ChiSpectrum};
pub use errors::{OutputError, Result};
pub use path::{load_feff_dat, parse_feff_dat, PathData};

/// Name of the chi(k) output file
pub const CHI_FILE: &str = "chi.dat";

/// File name of the `index`-th path file, e.g. `feff0001.dat`
pub fn feff_dat_name(index: usize) -> String {
    format!("feff{:04}.dat", index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feff_dat_name() {
        assert_eq!(feff_dat_name(1), "feff0001.dat");
        assert_eq!(feff_dat_name(42), "feff0042.dat");
    }
}
