// Geometries module: Half-space sets, crystal meshes and transforms
// Convex polyhedron construction by face clipping, plus the rigid and
// scaling transforms twinning and modifiers need

// ======================== MODULE DECLARATIONS ========================
pub mod halfspace;
pub mod crystal_mesh;
pub mod halfspace_intersection;
pub mod mesh_transform;

mod _tests_mesh_transform;

// ======================== HALF-SPACE SETS ========================
pub use halfspace::HalfspaceSet; // struct - parallel normals/distances/millers arrays
// HalfspaceSet impl methods:
//   push(&mut self, n, d, miller)                                - append one half-space
//   contains_duplicate(&self, n, d, tol) -> bool                 - collinear same-distance check
//   rotated(&self, r: &Matrix3<f64>) -> Self                     - rotate every normal
//   with_clip_plane(&self, n, d) -> Self                         - copy plus one synthetic plane
//   extend(&mut self, other: &Self)                              - concatenate sets
//   prescaled(&self, sa, sb, sc) -> Self                         - anisotropic input transform

// ======================== CRYSTAL MESHES ========================
pub use crystal_mesh::{
    CrystalGeometry, // struct - deduplicated vertices + faces + unordered edge set
    Face,            // struct - CCW polygon + outward unit normal + optional miller index
};
// CrystalGeometry impl methods:
//   from_faces(faces: Vec<Face>) -> Self                         - 6-decimal vertex dedup + edge set
//   merge(&mut self, other: Self)                                - concatenate, shifting edge indices
//   centroid(&self) -> Vector3<f64>                              - mean of global vertices
//   surface_area(&self) -> f64                                   - sum of face areas
//   contains(&self, point: &Vector3<f64>) -> bool                - face-plane test (convex meshes)

// ======================== INTERSECTION ========================
pub use halfspace_intersection::{
    clip_polygon,         // fn(&[Vector3], n, d) -> Vec<Vector3> - Sutherland–Hodgman step
    intersect_halfspaces, // fn(&HalfspaceSet) -> CrystalGeometry - boundary mesh of the intersection
};

// ======================== TRANSFORMS ========================
pub use mesh_transform::{
    apply_post_scaling,      // fn(&mut CrystalGeometry, (sa,sb,sc)) - vertex scaling + normal recompute
    axis_scale_factors,      // fn(&[ModificationSpec]) -> (f64,f64,f64) - collapse modification list
    reflect_geometry,        // fn(&CrystalGeometry, &Vector3) -> CrystalGeometry - mirror + rewind
    reflection_across_plane, // fn(&Vector3) -> Matrix3<f64> - I − 2 n nᵀ
    rotate_geometry,         // fn(&CrystalGeometry, &Matrix3) -> CrystalGeometry - rigid rotation
    rotation_about_axis,     // fn(axis, angle_deg) -> Matrix3<f64> - Rodrigues rotation
};
