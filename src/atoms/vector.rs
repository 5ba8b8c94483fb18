/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Cartesian positions in Angstrom

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// A position (or displacement) in 3D cartesian space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3D {
    /// Create a new 3D vector
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The origin
    pub fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// A vector with the same value on every axis
    pub fn splat(value: f64) -> Self {
        Self::new(value, value, value)
    }
}

impl fmt::Display for Vector3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6}, {:.6})", self.x, self.y, self.z)
    }
}

impl Add for Vector3D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign for Vector3D {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_splat_shift() {
        let mut v = Vector3D::new(1.0, 2.0, 3.0);
        v += Vector3D::splat(0.001);

        assert_relative_eq!(v.x, 1.001, epsilon = 1e-12);
        assert_relative_eq!(v.y, 2.001, epsilon = 1e-12);
        assert_relative_eq!(v.z, 3.001, epsilon = 1e-12);
    }
}
