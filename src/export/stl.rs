// ASCII STL export. Faces fan-triangulate from their first vertex.

use std::fmt::Write;

use crate::geometries::crystal_mesh::CrystalGeometry;

/// Serialize a crystal mesh as ASCII STL, multiplying every vertex
/// coordinate by `scale`.
pub fn write_stl(geometry: &CrystalGeometry, scale: f64) -> String {
    let mut out = String::from("solid crystal\n");
    for face in &geometry.faces {
        if face.vertices.len() < 3 {
            continue;
        }
        let n = face.normal;
        for i in 1..face.vertices.len() - 1 {
            let _ = writeln!(
                out,
                "  facet normal {:.6} {:.6} {:.6}",
                n.x, n.y, n.z
            );
            out.push_str("    outer loop\n");
            for vertex in [&face.vertices[0], &face.vertices[i], &face.vertices[i + 1]] {
                let _ = writeln!(
                    out,
                    "      vertex {:.6} {:.6} {:.6}",
                    vertex.x * scale,
                    vertex.y * scale,
                    vertex.z * scale
                );
            }
            out.push_str("    endloop\n  endfacet\n");
        }
    }
    out.push_str("endsolid crystal\n");
    out
}
