// Symmetries module: Point-group operation tables and Miller orbits
// Finite group closure from integer generators, with a process-wide cache

// ======================== MODULE DECLARATIONS ========================
pub mod symmetry_operations;
pub mod point_groups;
pub mod miller_expansion;


// ======================== SYMMETRY OPERATIONS ========================
pub use symmetry_operations::MillerOp; // struct - integer 3×3 operation on Miller triples
// MillerOp impl methods:
//   identity() / inversion() / c6z() / c3z() / c2_100() / c2_110() / mz() / m_100() - named generators
//   apply(&self, hkl: (i32, i32, i32)) -> (i32, i32, i32)        - act on a Miller triple
//   compose(&self, other: &Self) -> Self                         - matrix product
//   is_identity(&self) -> bool

// ======================== POINT GROUPS ========================
pub use point_groups::{
    close_generators,   // fn(&[MillerOp]) -> Vec<MillerOp> - bounded BFS closure under composition
    equivalent_millers, // fn(point_group, hkl) -> Vec<(i32,i32,i32)> - deduplicated symmetry orbit
    group_operations,   // fn(point_group) -> Vec<MillerOp> - memoized operation table
};

// ======================== FORM EXPANSION ========================
pub use miller_expansion::expand_form; // fn(form, point_group, basis, &mut HalfspaceSet) - orbit → half-spaces
