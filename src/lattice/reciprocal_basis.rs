use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::lattice::crystal_systems::{CellParameters, CrystalSystem};
use crate::parser::parse_tree::MillerIndex;

/// Direct and reciprocal lattice bases for a crystal system.
///
/// Columns of `direct` are the Cartesian primitive vectors a, b, c;
/// columns of `reciprocal` are a*, b*, c* in the crystallographic
/// convention `a* = (b × c) / V` (no 2π factor), so that
/// `|h a* + k b* + l c*| = 1 / d_hkl`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReciprocalBasis {
    /// Real-space basis vectors (columns).
    pub direct: Matrix3<f64>,
    /// Reciprocal-space basis vectors (columns).
    pub reciprocal: Matrix3<f64>,
    /// Unit cell volume = a · (b × c).
    pub cell_volume: f64,
}

impl ReciprocalBasis {
    /// Basis for a crystal system's reference cell parameters.
    pub fn from_system(system: CrystalSystem) -> Self {
        Self::from_cell(&system.cell_parameters())
    }

    /// Basis from explicit cell parameters (angles in degrees).
    pub fn from_cell(cell: &CellParameters) -> Self {
        let alpha = cell.alpha.to_radians();
        let beta = cell.beta.to_radians();
        let gamma = cell.gamma.to_radians();

        let a_vec = Vector3::new(cell.a, 0.0, 0.0);
        let b_vec = Vector3::new(cell.b * gamma.cos(), cell.b * gamma.sin(), 0.0);
        let cx = cell.c * beta.cos();
        let cy = cell.c * (alpha.cos() - beta.cos() * gamma.cos()) / gamma.sin();
        let cz = (cell.c * cell.c - cx * cx - cy * cy).max(0.0).sqrt();
        let c_vec = Vector3::new(cx, cy, cz);

        let cell_volume = a_vec.dot(&b_vec.cross(&c_vec));
        let a_star = b_vec.cross(&c_vec) / cell_volume;
        let b_star = c_vec.cross(&a_vec) / cell_volume;
        let c_star = a_vec.cross(&b_vec) / cell_volume;

        ReciprocalBasis {
            direct: Matrix3::from_columns(&[a_vec, b_vec, c_vec]),
            reciprocal: Matrix3::from_columns(&[a_star, b_star, c_star]),
            cell_volume,
        }
    }

    /// Unnormalized plane normal `g = h a* + k b* + l c*`.
    ///
    /// The redundant hexagonal index is ignored. Zero for `{000}`.
    pub fn miller_normal_raw(&self, miller: &MillerIndex) -> Vector3<f64> {
        let (h, k, l) = miller.as_triple();
        self.reciprocal.column(0) * h as f64
            + self.reciprocal.column(1) * k as f64
            + self.reciprocal.column(2) * l as f64
    }

    /// Unit plane normal, or `None` for the degenerate `{000}`.
    pub fn miller_normal(&self, miller: &MillerIndex) -> Option<Vector3<f64>> {
        let raw = self.miller_normal_raw(miller);
        let norm = raw.norm();
        if norm > 0.0 {
            Some(raw / norm)
        } else {
            None
        }
    }
}
