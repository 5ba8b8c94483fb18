/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Whitespace-separated column access with line-numbered errors

use super::errors::{OutputError, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

pub(crate) fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| OutputError::FileReadError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Parse column `index` of a split line as `T`
pub(crate) fn column<T: FromStr>(
    fields: &[&str],
    index: usize,
    line: usize,
    name: &str,
) -> Result<T> {
    let token = fields.get(index).ok_or_else(|| OutputError::ParseError {
        line,
        reason: format!(
            "expected at least {} columns for '{}', found {}",
            index + 1,
            name,
            fields.len()
        ),
    })?;

    token.parse().map_err(|_| OutputError::ParseError {
        line,
        reason: format!("invalid value '{}' for '{}'", token, name),
    })
}
