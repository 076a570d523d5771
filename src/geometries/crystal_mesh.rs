use std::collections::{BTreeSet, HashMap};

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::config::VERTEX_KEY_DECIMALS;
use crate::parser::parse_tree::MillerIndex;

/// ε for the face-plane containment test; vertex keying uses the
/// coarser 6-decimal rounding.
const CONTAINS_EPS: f64 = 1e-6;

/// One planar boundary polygon of a crystal mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Face {
    /// Polygon vertices, wound CCW as viewed from outside along `normal`.
    pub vertices: Vec<Vector3<f64>>,
    /// Outward unit normal.
    pub normal: Vector3<f64>,
    /// Miller index of the crystallographic form, when the face has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub miller_index: Option<MillerIndex>,
}

impl Face {
    pub fn centroid(&self) -> Vector3<f64> {
        self.vertices.iter().fold(Vector3::zeros(), |acc, v| acc + v)
            / self.vertices.len().max(1) as f64
    }

    /// Polygon area by fan triangulation from the first vertex.
    pub fn area(&self) -> f64 {
        let mut doubled = 0.0;
        for i in 1..self.vertices.len().saturating_sub(1) {
            let a = self.vertices[i] - self.vertices[0];
            let b = self.vertices[i + 1] - self.vertices[0];
            doubled += a.cross(&b).norm();
        }
        0.5 * doubled
    }
}

/// A polyhedral crystal mesh: deduplicated vertices, polygon faces and
/// the unordered edge set. Twin output concatenates several meshes, so
/// the polyhedron is not necessarily convex or even connected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrystalGeometry {
    /// Global vertex list, deduplicated by 6-decimal coordinate key.
    pub vertices: Vec<Vector3<f64>>,
    pub faces: Vec<Face>,
    /// Unordered vertex-index pairs, smaller index first.
    pub edges: Vec<(usize, usize)>,
}

impl CrystalGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the global vertex and edge sets from a face soup.
    ///
    /// Vertices are keyed by their coordinates rounded to 6 decimals
    /// and kept in first-seen order; every polygon edge lands in the
    /// set once.
    pub fn from_faces(faces: Vec<Face>) -> Self {
        let mut vertices: Vec<Vector3<f64>> = Vec::new();
        let mut index_of: HashMap<(i64, i64, i64), usize> = HashMap::new();
        let mut edges: BTreeSet<(usize, usize)> = BTreeSet::new();

        for face in &faces {
            let mut indices = Vec::with_capacity(face.vertices.len());
            for vertex in &face.vertices {
                let key = vertex_key(vertex);
                let index = *index_of.entry(key).or_insert_with(|| {
                    vertices.push(*vertex);
                    vertices.len() - 1
                });
                indices.push(index);
            }
            for i in 0..indices.len() {
                let j = (i + 1) % indices.len();
                if indices[i] != indices[j] {
                    edges.insert(normalized_edge(indices[i], indices[j]));
                }
            }
        }

        Self {
            vertices,
            faces,
            edges: edges.into_iter().collect(),
        }
    }

    /// Concatenate `other` into this mesh: vertices and faces append,
    /// and the second mesh's edge indices shift by the first vertex
    /// count. Overlapping interior faces are deliberately kept; the
    /// result is the visual union the renderers expect.
    pub fn merge(&mut self, other: CrystalGeometry) {
        let offset = self.vertices.len();
        self.vertices.extend(other.vertices);
        self.faces.extend(other.faces);
        self.edges
            .extend(other.edges.into_iter().map(|(a, b)| (a + offset, b + offset)));
    }

    /// Arithmetic mean of the global vertices.
    pub fn centroid(&self) -> Vector3<f64> {
        if self.vertices.is_empty() {
            return Vector3::zeros();
        }
        self.vertices.iter().fold(Vector3::zeros(), |acc, v| acc + v)
            / self.vertices.len() as f64
    }

    /// Total face area.
    pub fn surface_area(&self) -> f64 {
        self.faces.iter().map(Face::area).sum()
    }

    /// Face-plane containment test for convex meshes.
    pub fn contains(&self, point: &Vector3<f64>) -> bool {
        if self.faces.is_empty() {
            return false;
        }
        for face in &self.faces {
            if face.vertices.len() < 3 {
                continue;
            }
            let offset = face.normal.dot(&face.vertices[0]);
            if face.normal.dot(point) > offset + CONTAINS_EPS {
                return false;
            }
        }
        true
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

// Integer key at VERTEX_KEY_DECIMALS resolution; rounding through i64
// folds -0.0 and 0.0 together, which string formatting would not.
fn vertex_key(v: &Vector3<f64>) -> (i64, i64, i64) {
    let resolution = 10f64.powi(VERTEX_KEY_DECIMALS as i32);
    let quantize = |x: f64| (x * resolution).round() as i64;
    (quantize(v.x), quantize(v.y), quantize(v.z))
}

fn normalized_edge(a: usize, b: usize) -> (usize, usize) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}
