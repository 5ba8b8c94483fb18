/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Serialization of a cluster into `feff.inp`
//!
//! Layout:
//!
//! ```text
//! TITLE <structure>
//! <KEY> <VALUE>            one line per option
//!
//! POTENTIALS
//! 0 <Z of the absorber>
//! <ipot> <Z>               one line per remaining species
//!
//! ATOMS
//! <x> <y> <z> <ipot>       one line per atom, structure order
//! ```

use super::errors::{InputError, Result};
use super::options::FeffOptions;
use crate::atoms::{AtomicStructure, PotentialMap};
use crate::atoms::potential::ABSORBER_POTENTIAL;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write `feff.inp` for `structure` with atom `absorber` as the absorbing atom
///
/// Structure and options are validated before the destination is created.
pub fn write_feff_input<P: AsRef<Path>>(
    path: P,
    structure: &AtomicStructure,
    absorber: usize,
    options: &FeffOptions,
) -> Result<()> {
    let path = path.as_ref();
    let potentials = prepare(structure, absorber, options)?;

    let file = File::create(path).map_err(InputError::IoError)?;
    let mut writer = BufWriter::new(file);
    write_sections(&mut writer, structure, &potentials, options)?;
    writer.flush().map_err(InputError::IoError)?;

    debug!(
        "wrote {} ({} atoms, {} potentials)",
        path.display(),
        structure.atom_count(),
        potentials.len() + 1
    );
    Ok(())
}

/// Same as [`write_feff_input`], into any writer
pub fn write_feff_input_to<W: Write>(
    writer: &mut W,
    structure: &AtomicStructure,
    absorber: usize,
    options: &FeffOptions,
) -> Result<()> {
    let potentials = prepare(structure, absorber, options)?;
    write_sections(writer, structure, &potentials, options)
}

/// Validate structure, absorber index and options without writing anything
pub fn check_input(
    structure: &AtomicStructure,
    absorber: usize,
    options: &FeffOptions,
) -> Result<()> {
    prepare(structure, absorber, options).map(|_| ())
}

fn prepare(
    structure: &AtomicStructure,
    absorber: usize,
    options: &FeffOptions,
) -> Result<PotentialMap> {
    structure.validate()?;
    options.validate()?;
    Ok(PotentialMap::build(structure, absorber)?)
}

fn write_sections<W: Write>(
    writer: &mut W,
    structure: &AtomicStructure,
    potentials: &PotentialMap,
    options: &FeffOptions,
) -> Result<()> {
    writeln!(writer, "TITLE {}", structure)?;
    for (key, value) in options {
        writeln!(writer, "{} {}", key, value)?;
    }

    writeln!(writer)?;
    writeln!(writer, "POTENTIALS")?;
    writeln!(
        writer,
        "{} {}",
        ABSORBER_POTENTIAL,
        potentials.absorber_atomic_number()
    )?;
    for (z, index) in potentials.entries() {
        writeln!(writer, "{} {}", index, z)?;
    }

    writeln!(writer)?;
    writeln!(writer, "ATOMS")?;
    for (i, atom) in structure.atoms().iter().enumerate() {
        let pot = potentials
            .potential_of(i, atom.atomic_number())
            .ok_or(InputError::MissingPotential(atom.atomic_number()))?;
        writeln!(
            writer,
            "{:.6} {:.6} {:.6} {}",
            atom.x(),
            atom.y(),
            atom.z(),
            pot
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::{Atom, Vector3D};

    fn render(structure: &AtomicStructure, absorber: usize, options: &FeffOptions) -> String {
        let mut buffer = Vec::new();
        write_feff_input_to(&mut buffer, structure, absorber, options).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn fe_o2() -> AtomicStructure {
        let mut structure = AtomicStructure::new();
        structure.add_atom(Atom::new(26, Vector3D::origin(), 0).unwrap());
        structure.add_atom(Atom::new(8, Vector3D::new(2.0, 0.0, 0.0), 0).unwrap());
        structure.add_atom(Atom::new(8, Vector3D::new(-2.0, 0.0, 0.0), 0).unwrap());
        structure
    }

    #[test]
    fn test_full_layout() {
        let options = FeffOptions::new().with("RMAX", 4.5);
        let text = render(&fe_o2(), 0, &options);

        let expected = "TITLE FeO2\n\
                        RMAX 4.5\n\
                        \n\
                        POTENTIALS\n\
                        0 26\n\
                        1 8\n\
                        \n\
                        ATOMS\n\
                        0.000000 0.000000 0.000000 0\n\
                        2.000000 0.000000 0.000000 1\n\
                        -2.000000 0.000000 0.000000 1\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_absorber_in_the_middle() {
        let text = render(&fe_o2(), 1, &FeffOptions::new());
        let atoms: Vec<&str> = text.lines().skip_while(|l| *l != "ATOMS").skip(1).collect();

        assert!(text.contains("POTENTIALS\n0 8\n1 8\n2 26\n"));
        assert_eq!(atoms[0], "0.000000 0.000000 0.000000 2");
        assert_eq!(atoms[1], "2.000000 0.000000 0.000000 0");
        assert_eq!(atoms[2], "-2.000000 0.000000 0.000000 1");
    }

    #[test]
    fn test_bad_absorber_index() {
        let mut buffer = Vec::new();
        let result = write_feff_input_to(&mut buffer, &fe_o2(), 3, &FeffOptions::new());
        assert!(matches!(result, Err(InputError::InvalidStructure(_))));
        assert!(buffer.is_empty());
    }
}
