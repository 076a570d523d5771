// Rigid and scaling transforms on crystal meshes.
//
// Rotation is axis-angle (Rodrigues, via nalgebra's Rotation3);
// reflection across a plane through the origin is `I − 2 n nᵀ`.
// Axial modifications collapse into per-axis factors applied to the
// finished mesh, recomputing face normals afterward.

use nalgebra::{Matrix3, Rotation3, Unit, Vector3};

use crate::geometries::crystal_mesh::CrystalGeometry;
use crate::parser::parse_tree::{CrystalAxis, ModificationKind, ModificationSpec};

/// Rotation matrix for `angle_deg` about `axis` (need not be unit).
pub fn rotation_about_axis(axis: Vector3<f64>, angle_deg: f64) -> Matrix3<f64> {
    Rotation3::from_axis_angle(&Unit::new_normalize(axis), angle_deg.to_radians()).into_inner()
}

/// Householder reflection across the plane through the origin with the
/// given unit normal.
pub fn reflection_across_plane(unit_normal: &Vector3<f64>) -> Matrix3<f64> {
    Matrix3::identity() - (unit_normal * unit_normal.transpose()) * 2.0
}

/// Collapse an ordered modification list into multiplicative per-axis
/// factors `(sa, sb, sc)`. Elongate and scale multiply by the factor,
/// flatten by its reciprocal.
pub fn axis_scale_factors(modifications: &[ModificationSpec]) -> (f64, f64, f64) {
    let mut factors = (1.0, 1.0, 1.0);
    for modification in modifications {
        let factor = match modification.kind {
            ModificationKind::Elongate | ModificationKind::Scale => modification.factor,
            ModificationKind::Flatten => 1.0 / modification.factor,
        };
        match modification.axis {
            CrystalAxis::A => factors.0 *= factor,
            CrystalAxis::B => factors.1 *= factor,
            CrystalAxis::C => factors.2 *= factor,
        }
    }
    factors
}

/// Post-computation vertex scaling.
///
/// Multiplies every coordinate by the per-axis factors and recomputes
/// each face normal from its scaled first three vertices; the winding
/// is preserved, so the recomputed normal stays outward. Edge indices
/// are untouched.
pub fn apply_post_scaling(geometry: &mut CrystalGeometry, factors: (f64, f64, f64)) {
    let (sa, sb, sc) = factors;
    if sa == 1.0 && sb == 1.0 && sc == 1.0 {
        return;
    }
    let scale = |v: &Vector3<f64>| Vector3::new(v.x * sa, v.y * sb, v.z * sc);

    for vertex in &mut geometry.vertices {
        *vertex = scale(vertex);
    }
    for face in &mut geometry.faces {
        for vertex in &mut face.vertices {
            *vertex = scale(vertex);
        }
        if face.vertices.len() >= 3 {
            let edge_a = face.vertices[1] - face.vertices[0];
            let edge_b = face.vertices[2] - face.vertices[0];
            let normal = edge_a.cross(&edge_b);
            if normal.norm() > 0.0 {
                face.normal = normal.normalize();
            }
        }
    }
}

/// Rotate a mesh rigidly: vertices, face vertices and face normals.
pub fn rotate_geometry(geometry: &CrystalGeometry, rotation: &Matrix3<f64>) -> CrystalGeometry {
    CrystalGeometry {
        vertices: geometry.vertices.iter().map(|v| rotation * v).collect(),
        faces: geometry
            .faces
            .iter()
            .map(|face| {
                let mut rotated = face.clone();
                rotated.vertices = face.vertices.iter().map(|v| rotation * v).collect();
                rotated.normal = rotation * face.normal;
                rotated
            })
            .collect(),
        edges: geometry.edges.clone(),
    }
}

/// Mirror a mesh across the plane through the origin with the given
/// unit normal. Face windings reverse so the reflected normals
/// (`n − 2(n·n̂)n̂`) stay outward.
pub fn reflect_geometry(geometry: &CrystalGeometry, unit_normal: &Vector3<f64>) -> CrystalGeometry {
    let mirror = reflection_across_plane(unit_normal);
    CrystalGeometry {
        vertices: geometry.vertices.iter().map(|v| mirror * v).collect(),
        faces: geometry
            .faces
            .iter()
            .map(|face| {
                let mut reflected: Vec<Vector3<f64>> =
                    face.vertices.iter().map(|v| mirror * v).collect();
                reflected.reverse();
                let normal = face.normal - unit_normal * (2.0 * face.normal.dot(unit_normal));
                crate::geometries::crystal_mesh::Face {
                    vertices: reflected,
                    normal,
                    miller_index: face.miller_index,
                }
            })
            .collect(),
        edges: geometry.edges.clone(),
    }
}
