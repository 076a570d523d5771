#[cfg(test)]
mod tests_mesh_transform {
    use super::super::halfspace::HalfspaceSet;
    use super::super::halfspace_intersection::intersect_halfspaces;
    use super::super::mesh_transform::{
        apply_post_scaling, axis_scale_factors, reflect_geometry, reflection_across_plane,
        rotate_geometry, rotation_about_axis,
    };
    use crate::geometries::crystal_mesh::CrystalGeometry;
    use crate::parser::parse_tree::{CrystalAxis, ModificationKind, ModificationSpec};
    use nalgebra::Vector3;

    const TOL: f64 = 1e-9;

    fn unit_cube() -> CrystalGeometry {
        let mut halfspaces = HalfspaceSet::new();
        for normal in [
            Vector3::x(),
            -Vector3::x(),
            Vector3::y(),
            -Vector3::y(),
            Vector3::z(),
            -Vector3::z(),
        ] {
            halfspaces.push(normal, 1.0, None);
        }
        intersect_halfspaces(&halfspaces)
    }

    fn modification(kind: ModificationKind, axis: CrystalAxis, factor: f64) -> ModificationSpec {
        ModificationSpec { kind, axis, factor }
    }

    #[test]
    fn test_factor_collapse() {
        let factors = axis_scale_factors(&[
            modification(ModificationKind::Elongate, CrystalAxis::C, 2.0),
            modification(ModificationKind::Scale, CrystalAxis::A, 0.5),
        ]);
        assert_eq!(factors, (0.5, 1.0, 2.0));
    }

    #[test]
    fn test_flatten_is_reciprocal_scale() {
        let flattened = axis_scale_factors(&[modification(
            ModificationKind::Flatten,
            CrystalAxis::C,
            2.0,
        )]);
        let scaled = axis_scale_factors(&[modification(
            ModificationKind::Scale,
            CrystalAxis::C,
            0.5,
        )]);
        assert!((flattened.2 - scaled.2).abs() < TOL);
    }

    #[test]
    fn test_flatten_twice_equals_inverse_square_scale() {
        let twice = axis_scale_factors(&[
            modification(ModificationKind::Flatten, CrystalAxis::B, 3.0),
            modification(ModificationKind::Flatten, CrystalAxis::B, 3.0),
        ]);
        let direct = axis_scale_factors(&[modification(
            ModificationKind::Scale,
            CrystalAxis::B,
            1.0 / 9.0,
        )]);
        assert!((twice.1 - direct.1).abs() < TOL);
    }

    #[test]
    fn test_post_scaling_moves_vertices_and_normals() {
        let mut cube = unit_cube();
        apply_post_scaling(&mut cube, (1.0, 1.0, 2.0));

        for vertex in &cube.vertices {
            assert!((vertex.z.abs() - 2.0).abs() < TOL);
            assert!((vertex.x.abs() - 1.0).abs() < TOL);
        }
        for face in &cube.faces {
            // Normals stay unit and outward after the recompute.
            assert!((face.normal.norm() - 1.0).abs() < TOL);
            assert!(face.normal.dot(&face.centroid()) > 0.0);
        }
    }

    #[test]
    fn test_identity_scaling_is_a_no_op() {
        let cube = unit_cube();
        let mut scaled = cube.clone();
        apply_post_scaling(&mut scaled, (1.0, 1.0, 1.0));
        assert_eq!(cube, scaled);
    }

    #[test]
    fn test_post_scaling_keeps_edges() {
        let mut cube = unit_cube();
        let edges = cube.edges.clone();
        apply_post_scaling(&mut cube, (2.0, 0.5, 1.0));
        assert_eq!(cube.edges, edges);
    }

    #[test]
    fn test_prescaled_halfspaces_agree_with_post_scaling() {
        // For a convex input, scaling the half-space set up front and
        // scaling the finished mesh produce the same solid.
        let mut halfspaces = HalfspaceSet::new();
        for normal in [
            Vector3::x(),
            -Vector3::x(),
            Vector3::y(),
            -Vector3::y(),
            Vector3::z(),
            -Vector3::z(),
        ] {
            halfspaces.push(normal, 1.0, None);
        }
        let prescaled = intersect_halfspaces(&halfspaces.prescaled(1.0, 1.0, 2.0));

        let mut postscaled = intersect_halfspaces(&halfspaces);
        apply_post_scaling(&mut postscaled, (1.0, 1.0, 2.0));

        assert_eq!(prescaled.vertex_count(), postscaled.vertex_count());
        for vertex in &prescaled.vertices {
            assert!(postscaled.vertices.iter().any(|v| (v - vertex).norm() < TOL));
        }
    }

    #[test]
    fn test_rotation_about_z_quarter_turn() {
        let rotation = rotation_about_axis(Vector3::z(), 90.0);
        let rotated = rotation * Vector3::x();
        assert!((rotated - Vector3::y()).norm() < TOL);
    }

    #[test]
    fn test_rotation_axis_is_fixed() {
        let axis = Vector3::new(1.0, 1.0, 1.0);
        let rotation = rotation_about_axis(axis, 180.0);
        assert!((rotation * axis - axis).norm() < TOL);
    }

    #[test]
    fn test_reflection_matrix() {
        let mirror = reflection_across_plane(&Vector3::z());
        let reflected = mirror * Vector3::new(0.3, -0.7, 2.0);
        assert!((reflected - Vector3::new(0.3, -0.7, -2.0)).norm() < TOL);
        assert!((mirror.determinant() + 1.0).abs() < TOL);
    }

    #[test]
    fn test_rotate_geometry_is_rigid() {
        let cube = unit_cube();
        let rotation = rotation_about_axis(Vector3::new(1.0, 2.0, 3.0), 37.0);
        let rotated = rotate_geometry(&cube, &rotation);

        assert_eq!(rotated.vertex_count(), cube.vertex_count());
        assert_eq!(rotated.edges, cube.edges);
        assert!((rotated.surface_area() - cube.surface_area()).abs() < 1e-6);
        for face in &rotated.faces {
            assert!((face.normal.norm() - 1.0).abs() < TOL);
        }
    }

    #[test]
    fn test_reflect_geometry_reverses_winding() {
        let cube = unit_cube();
        let reflected = reflect_geometry(&cube, &Vector3::z());

        assert_eq!(reflected.face_count(), cube.face_count());
        for face in &reflected.faces {
            // Winding stays CCW with respect to the reflected normal.
            let cross = (face.vertices[1] - face.vertices[0])
                .cross(&(face.vertices[2] - face.vertices[0]));
            assert!(cross.dot(&face.normal) > 0.0);
            // Reflected normals still point away from the interior.
            assert!(face.normal.dot(&face.centroid()) > 0.0);
        }
    }

    #[test]
    fn test_reflect_geometry_flips_normal_component() {
        let cube = unit_cube();
        let reflected = reflect_geometry(&cube, &Vector3::z());
        let top_faces: Vec<_> = reflected
            .faces
            .iter()
            .filter(|f| (f.normal.z - 1.0).abs() < TOL)
            .collect();
        assert_eq!(top_faces.len(), 1, "the old bottom face now faces up");
    }
}
