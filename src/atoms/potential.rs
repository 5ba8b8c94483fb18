/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Potential index assignment for the POTENTIALS card
//!
//! The absorbing atom always gets potential 0. Every other species gets a
//! positive index, assigned in ascending atomic-number order starting at 1.
//! The absorber's own species only gets an index when some other atom of
//! that species exists.

use super::errors::Result;
use super::structure::AtomicStructure;
use std::collections::BTreeSet;

/// Potential index reserved for the absorbing atom
pub const ABSORBER_POTENTIAL: i32 = 0;

/// Mapping from atomic number to potential index for one absorber choice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PotentialMap {
    absorber: usize,
    absorber_atomic_number: i32,
    /// (atomic number, potential index) in assignment order
    entries: Vec<(i32, i32)>,
}

impl PotentialMap {
    /// Build the potential map for `structure` with atom `absorber` as the absorber
    pub fn build(structure: &AtomicStructure, absorber: usize) -> Result<Self> {
        structure.check_index(absorber)?;
        let absorber_atomic_number = structure.atoms()[absorber].atomic_number();

        let distinct: BTreeSet<i32> = structure
            .atoms()
            .iter()
            .map(|atom| atom.atomic_number())
            .collect();

        let mut entries = Vec::with_capacity(distinct.len());
        let mut next_index = 1;
        for z in distinct {
            if z == absorber_atomic_number && structure.count_species(z) == 1 {
                continue;
            }
            entries.push((z, next_index));
            next_index += 1;
        }

        Ok(Self {
            absorber,
            absorber_atomic_number,
            entries,
        })
    }

    pub fn absorber_atomic_number(&self) -> i32 {
        self.absorber_atomic_number
    }

    /// Potential index assigned to a species, if it has one
    pub fn index_of(&self, atomic_number: i32) -> Option<i32> {
        self.entries
            .iter()
            .find(|(z, _)| *z == atomic_number)
            .map(|(_, index)| *index)
    }

    /// Potential index for the atom at `atom_index` with the given atomic number
    pub fn potential_of(&self, atom_index: usize, atomic_number: i32) -> Option<i32> {
        if atom_index == self.absorber {
            Some(ABSORBER_POTENTIAL)
        } else {
            self.index_of(atomic_number)
        }
    }

    /// (atomic number, potential index) pairs, excluding the absorber line
    pub fn entries(&self) -> &[(i32, i32)] {
        &self.entries
    }

    /// Number of non-absorber potentials
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
