// Lattice module: Crystal system parameters and reciprocal bases
// Maps Miller indices to Cartesian plane normals per crystal system

// ======================== MODULE DECLARATIONS ========================
pub mod crystal_systems;
pub mod reciprocal_basis;


// ======================== CRYSTAL SYSTEMS ========================
pub use crystal_systems::{
    ALL_POINT_GROUPS, // const - every Hermann–Mauguin literal the lexer recognizes
    CellParameters,   // struct - (a, b, c, α, β, γ), angles in degrees
    CrystalSystem,    // enum - the seven crystal systems
    SYSTEM_KEYWORDS,  // const - lowercase system keywords for the lexer
};

// ======================== RECIPROCAL BASIS ========================
pub use reciprocal_basis::ReciprocalBasis; // struct - direct + reciprocal bases, miller plane normals
// ReciprocalBasis impl methods:
//   from_system(system: CrystalSystem) -> Self                  - basis for a system's reference cell
//   from_cell(cell: &CellParameters) -> Self                    - basis from explicit parameters
//   miller_normal_raw(&self, m: &MillerIndex) -> Vector3<f64>   - g = h a* + k b* + l c*
//   miller_normal(&self, m: &MillerIndex) -> Option<Vector3>    - unit normal, None for {000}
