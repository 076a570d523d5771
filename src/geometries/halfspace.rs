use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::parser::parse_tree::MillerIndex;

/// A finite intersection of half-spaces `{x : nᵢ · x ≤ dᵢ}`.
///
/// Parallel arrays: `normals[i]` is unit-length, `distances[i]` is the
/// signed plane offset along it, and `millers[i]` records the Miller
/// index that produced the plane (None for synthetic clip planes).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HalfspaceSet {
    pub normals: Vec<Vector3<f64>>,
    pub distances: Vec<f64>,
    pub millers: Vec<Option<MillerIndex>>,
}

impl HalfspaceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.normals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.normals.is_empty()
    }

    pub fn push(&mut self, normal: Vector3<f64>, distance: f64, miller: Option<MillerIndex>) {
        self.normals.push(normal);
        self.distances.push(distance);
        self.millers.push(miller);
    }

    /// True when a collinear normal with a matching distance is
    /// already present: `|n·nᵢ − 1| < tol` and `|d − dᵢ| < tol`.
    pub fn contains_duplicate(&self, normal: &Vector3<f64>, distance: f64, tol: f64) -> bool {
        self.normals
            .iter()
            .zip(&self.distances)
            .any(|(n, d)| (normal.dot(n) - 1.0).abs() < tol && (distance - d).abs() < tol)
    }

    /// Copy of this set with every normal rotated; distances keep.
    pub fn rotated(&self, rotation: &Matrix3<f64>) -> Self {
        Self {
            normals: self.normals.iter().map(|n| rotation * n).collect(),
            distances: self.distances.clone(),
            millers: self.millers.clone(),
        }
    }

    /// Copy of this set with one extra clipping plane appended.
    pub fn with_clip_plane(&self, normal: Vector3<f64>, distance: f64) -> Self {
        let mut clipped = self.clone();
        clipped.push(normal, distance, None);
        clipped
    }

    /// Append every half-space of `other`.
    pub fn extend(&mut self, other: &HalfspaceSet) {
        self.normals.extend_from_slice(&other.normals);
        self.distances.extend_from_slice(&other.distances);
        self.millers.extend_from_slice(&other.millers);
    }

    /// Anisotropic pre-scaling of the described polytope by
    /// `(sa, sb, sc)`: each plane becomes `n'·x ≤ d'` with
    /// `n' = (nₓ/sa, n_y/sb, n_z/sc)` renormalized and `d' = d/|n'|`.
    ///
    /// The main pipeline scales vertices after meshing instead; this
    /// transformation is kept for callers that need the convex input
    /// form.
    pub fn prescaled(&self, sa: f64, sb: f64, sc: f64) -> Self {
        let mut scaled = HalfspaceSet::new();
        for i in 0..self.len() {
            let n = self.normals[i];
            let raw = Vector3::new(n.x / sa, n.y / sb, n.z / sc);
            let magnitude = raw.norm();
            scaled.push(raw / magnitude, self.distances[i] / magnitude, self.millers[i]);
        }
        scaled
    }
}
