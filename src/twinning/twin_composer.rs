// Twin composition.
//
// Every render mode starts from the immutable base half-space set and
// produces per-individual meshes by rotation, reflection or clipping,
// then concatenates them. The union never removes overlapping interior
// faces; downstream renderers want the visual union.

use crate::geometries::halfspace::HalfspaceSet;
use crate::geometries::halfspace_intersection::intersect_halfspaces;
use crate::geometries::crystal_mesh::CrystalGeometry;
use crate::geometries::mesh_transform::{reflect_geometry, rotate_geometry, rotation_about_axis};
use crate::twinning::twin_laws::{TwinLaw, TwinRenderMode};

const HALF_TURN_EPS: f64 = 1e-9;

/// Compose the twin described by `law` from the base half-space set.
pub fn compose_twin(law: &TwinLaw, halfspaces: &HalfspaceSet) -> CrystalGeometry {
    let axis = law.axis_vector().normalize();
    let rotation = rotation_about_axis(law.axis_vector(), law.angle);

    match law.render_mode {
        TwinRenderMode::SingleCrystal => intersect_halfspaces(halfspaces),

        TwinRenderMode::DualCrystal | TwinRenderMode::Unified => {
            let mut union = intersect_halfspaces(halfspaces);
            union.merge(intersect_halfspaces(&halfspaces.rotated(&rotation)));
            union
        }

        TwinRenderMode::ContactRotation => {
            // Keep the side the axis points into: −n̂·x ≤ 0.
            let clipped = halfspaces.with_clip_plane(-axis, 0.0);
            let first = intersect_halfspaces(&clipped);
            let second = rotate_geometry(&first, &rotation);
            let mut union = first;
            union.merge(second);
            union
        }

        TwinRenderMode::VShaped => {
            let first = intersect_halfspaces(&halfspaces.with_clip_plane(-axis, 0.0));
            let second = if (law.angle - 180.0).abs() < HALF_TURN_EPS {
                reflect_geometry(&first, &axis)
            } else {
                let opposite = intersect_halfspaces(&halfspaces.with_clip_plane(axis, 0.0));
                rotate_geometry(&opposite, &rotation)
            };
            let mut union = first;
            union.merge(second);
            union
        }

        TwinRenderMode::Cyclic => {
            let count = (360.0 / law.angle).round().max(1.0) as usize;
            let mut union_set = HalfspaceSet::new();
            for index in 0..count {
                let step = rotation_about_axis(law.axis_vector(), law.angle * index as f64);
                union_set.extend(&halfspaces.rotated(&step));
            }
            intersect_halfspaces(&union_set)
        }
    }
}
