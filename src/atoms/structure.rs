/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Atomic structure representation for FEFF calculations

use super::atom::Atom;
use super::database;
use super::errors::{AtomError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered, non-periodic cluster of atoms
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomicStructure {
    /// Title or description of the structure
    #[serde(default)]
    title: String,
    /// Atoms in input order
    atoms: Vec<Atom>,
    /// Periodic boundary flags; clusters handed to FEFF are never periodic
    #[serde(default)]
    pbc: [bool; 3],
}

impl AtomicStructure {
    /// Create a new empty atomic structure
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a structure from a list of atoms
    pub fn from_atoms(atoms: Vec<Atom>) -> Self {
        Self {
            atoms,
            ..Self::default()
        }
    }

    /// Get the title of the atomic structure
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the title of the atomic structure
    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    /// Append an atom, returning its index
    pub fn add_atom(&mut self, atom: Atom) -> usize {
        self.atoms.push(atom);
        self.atoms.len() - 1
    }

    /// Get the number of atoms
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Get a reference to an atom by index
    pub fn atom(&self, index: usize) -> Option<&Atom> {
        self.atoms.get(index)
    }

    /// Get a mutable reference to an atom by index
    pub fn atom_mut(&mut self, index: usize) -> Option<&mut Atom> {
        self.atoms.get_mut(index)
    }

    /// Get a slice of all atoms
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Periodic boundary flags
    pub fn pbc(&self) -> [bool; 3] {
        self.pbc
    }

    /// Number of atoms with the given atomic number
    pub fn count_species(&self, atomic_number: i32) -> usize {
        self.atoms
            .iter()
            .filter(|atom| atom.atomic_number() == atomic_number)
            .count()
    }

    /// Chemical formula with species in order of first appearance, e.g. "Cu12O"
    pub fn formula(&self) -> String {
        let mut species: Vec<(i32, usize)> = Vec::new();
        for atom in &self.atoms {
            let z = atom.atomic_number();
            match species.iter_mut().find(|(sz, _)| *sz == z) {
                Some((_, count)) => *count += 1,
                None => species.push((z, 1)),
            }
        }

        species
            .into_iter()
            .map(|(z, count)| {
                let symbol = database::element_symbol(z).unwrap_or("X");
                if count == 1 {
                    symbol.to_string()
                } else {
                    format!("{}{}", symbol, count)
                }
            })
            .collect()
    }

    /// Check that the structure can be written as a FEFF cluster
    pub fn validate(&self) -> Result<()> {
        if self.atoms.is_empty() {
            return Err(AtomError::InvalidStructure(
                "Atomic structure is empty".to_string(),
            ));
        }

        // The title shares a line with the TITLE card
        if self.title.contains(['\n', '\r']) {
            return Err(AtomError::InvalidStructure(
                "Title must be a single line".to_string(),
            ));
        }

        if self.pbc.iter().any(|&periodic| periodic) {
            return Err(AtomError::InvalidStructure(
                "FEFF clusters must not be periodic".to_string(),
            ));
        }

        // Deserialized atoms skip the checks in Atom::new
        for atom in &self.atoms {
            let z = atom.atomic_number();
            if database::element_symbol(z).is_none() {
                return Err(AtomError::InvalidAtomicNumber(z));
            }
        }

        Ok(())
    }

    /// Check that `index` names an atom of this structure
    pub fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.atoms.len() {
            return Err(AtomError::IndexOutOfRange {
                index,
                count: self.atoms.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for AtomicStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.title.is_empty() {
            write!(f, "{}", self.formula())
        } else {
            write!(f, "{}", self.title)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::Vector3D;

    fn copper_oxide() -> AtomicStructure {
        let mut structure = AtomicStructure::new();
        structure.add_atom(Atom::new(29, Vector3D::origin(), 0).unwrap());
        structure.add_atom(Atom::new(8, Vector3D::new(1.8, 0.0, 0.0), 0).unwrap());
        structure.add_atom(Atom::new(29, Vector3D::new(3.6, 0.0, 0.0), 0).unwrap());
        structure
    }

    #[test]
    fn test_atomic_structure_creation() {
        let structure = AtomicStructure::new();

        assert_eq!(structure.atom_count(), 0);
        assert!(structure.is_empty());
        assert_eq!(structure.title(), "");
        assert_eq!(structure.pbc(), [false; 3]);
    }

    #[test]
    fn test_formula_keeps_first_appearance_order() {
        let structure = copper_oxide();
        assert_eq!(structure.formula(), "Cu2O");
        assert_eq!(structure.to_string(), "Cu2O");
        assert_eq!(structure.count_species(29), 2);
        assert_eq!(structure.count_species(8), 1);
    }

    #[test]
    fn test_title_overrides_formula() {
        let mut structure = copper_oxide();
        structure.set_title("cuprite fragment");
        assert_eq!(structure.to_string(), "cuprite fragment");
    }

    #[test]
    fn test_validate() {
        assert!(AtomicStructure::new().validate().is_err());
        assert!(copper_oxide().validate().is_ok());

        let mut titled = copper_oxide();
        titled.set_title("Cu\nATOMS");
        assert!(matches!(
            titled.validate(),
            Err(AtomError::InvalidStructure(_))
        ));
        titled.set_title("cuprite\r");
        assert!(titled.validate().is_err());
    }

    #[test]
    fn test_check_index() {
        let structure = copper_oxide();
        assert!(structure.check_index(2).is_ok());
        assert!(matches!(
            structure.check_index(3),
            Err(AtomError::IndexOutOfRange { index: 3, count: 3 })
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let structure = copper_oxide();
        let json = serde_json::to_string(&structure).unwrap();
        let back: AtomicStructure = serde_json::from_str(&json).unwrap();
        assert_eq!(back, structure);
    }
}
