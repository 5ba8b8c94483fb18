/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Atom representation for FEFF calculations

use super::database;
use super::errors::{AtomError, Result};
use super::vector::Vector3D;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An atom of the cluster handed to FEFF
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    /// Atomic number (Z) of the element
    atomic_number: i32,
    /// Cartesian position in Angstrom
    position: Vector3D,
    /// Potential index this atom was tagged with
    #[serde(default)]
    tag: i32,
}

impl Atom {
    /// Create a new atom with the given atomic number, position and tag
    pub fn new(atomic_number: i32, position: Vector3D, tag: i32) -> Result<Self> {
        if atomic_number <= 0 || atomic_number > database::MAX_ATOMIC_NUMBER {
            return Err(AtomError::InvalidAtomicNumber(atomic_number));
        }

        if tag < 0 {
            return Err(AtomError::InvalidPotentialIndex(tag));
        }

        Ok(Self {
            atomic_number,
            position,
            tag,
        })
    }

    /// Get the atomic number
    pub fn atomic_number(&self) -> i32 {
        self.atomic_number
    }

    /// Element symbol, or "X" for an atomic number outside the table
    pub fn symbol(&self) -> &'static str {
        database::element_symbol(self.atomic_number).unwrap_or("X")
    }

    pub fn position(&self) -> &Vector3D {
        &self.position
    }

    pub fn set_position(&mut self, position: Vector3D) {
        self.position = position;
    }

    /// Potential index tag
    pub fn tag(&self) -> i32 {
        self.tag
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn z(&self) -> f64 {
        self.position.z
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Z={}) at {} (tag {})",
            self.symbol(),
            self.atomic_number,
            self.position,
            self.tag
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atom_creation() {
        let position = Vector3D::new(1.0, 2.0, 3.0);
        let atom = Atom::new(29, position, 1).unwrap(); // Copper

        assert_eq!(atom.atomic_number(), 29);
        assert_eq!(atom.symbol(), "Cu");
        assert_eq!(atom.position(), &position);
        assert_eq!(atom.tag(), 1);
    }

    #[test]
    fn test_invalid_atom() {
        let position = Vector3D::origin();
        assert!(Atom::new(0, position, 1).is_err());
        assert!(Atom::new(119, position, 1).is_err());
        assert!(Atom::new(29, position, -1).is_err());
    }

    #[test]
    fn test_display() {
        let atom = Atom::new(26, Vector3D::origin(), 0).unwrap();
        assert_eq!(
            atom.to_string(),
            "Fe (Z=26) at (0.000000, 0.000000, 0.000000) (tag 0)"
        );
    }
}
