// Convex polyhedron construction by face clipping.
//
// For each half-space a large seed square is laid on its plane and
// Sutherland–Hodgman-clipped against every other half-space. Whatever
// survives with three or more vertices is a boundary face of the
// intersection polytope.

use nalgebra::Vector3;

use crate::config::{CLIP_EPSILON, CLIP_EXTENT};
use crate::geometries::crystal_mesh::{CrystalGeometry, Face};
use crate::geometries::halfspace::HalfspaceSet;

/// Mesh the boundary of `⋂ᵢ {x : nᵢ·x ≤ dᵢ}`.
pub fn intersect_halfspaces(halfspaces: &HalfspaceSet) -> CrystalGeometry {
    let mut faces = Vec::new();

    for i in 0..halfspaces.len() {
        let normal = halfspaces.normals[i];
        let distance = halfspaces.distances[i];

        let mut polygon = seed_polygon(&normal, distance);
        for j in 0..halfspaces.len() {
            if j == i {
                continue;
            }
            polygon = clip_polygon(&polygon, &halfspaces.normals[j], halfspaces.distances[j]);
            if polygon.len() < 3 {
                break;
            }
        }
        if polygon.len() < 3 {
            continue;
        }

        // Wind CCW as viewed from outside along the plane normal.
        let candidate =
            (polygon[1] - polygon[0]).cross(&(polygon[2] - polygon[0]));
        if candidate.dot(&normal) < 0.0 {
            polygon.reverse();
        }

        faces.push(Face {
            vertices: polygon,
            normal,
            miller_index: halfspaces.millers[i],
        });
    }

    CrystalGeometry::from_faces(faces)
}

// Large square centered on the plane, axis-aligned tangent frame.
fn seed_polygon(normal: &Vector3<f64>, distance: f64) -> Vec<Vector3<f64>> {
    let tangent = if normal.y.abs() < 0.9 {
        normal.cross(&Vector3::y()).normalize()
    } else {
        normal.cross(&Vector3::x()).normalize()
    };
    let bitangent = normal.cross(&tangent);
    let center = normal * distance;
    let s = CLIP_EXTENT;
    vec![
        center + tangent * s + bitangent * s,
        center - tangent * s + bitangent * s,
        center - tangent * s - bitangent * s,
        center + tangent * s - bitangent * s,
    ]
}

/// Sutherland–Hodgman clip of a polygon against `{x : n·x ≤ d}`.
///
/// A vertex within ε of the plane counts as inside; an edge only
/// crosses when its endpoints are strictly on opposite sides beyond ε.
pub fn clip_polygon(
    polygon: &[Vector3<f64>],
    normal: &Vector3<f64>,
    distance: f64,
) -> Vec<Vector3<f64>> {
    let mut clipped = Vec::with_capacity(polygon.len() + 1);
    for (index, u) in polygon.iter().enumerate() {
        let v = &polygon[(index + 1) % polygon.len()];
        let du = normal.dot(u) - distance;
        let dv = normal.dot(v) - distance;

        if du <= CLIP_EPSILON {
            clipped.push(*u);
        }
        let crosses = (du > CLIP_EPSILON && dv < -CLIP_EPSILON)
            || (du < -CLIP_EPSILON && dv > CLIP_EPSILON);
        if crosses {
            let t = du / (du - dv);
            clipped.push(u + (v - u) * t);
        }
    }
    clipped
}
