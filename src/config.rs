// Process-wide constants

// Input bounds
pub const MAX_INPUT_LEN: usize = 5000; // CDL characters before preprocessing
pub const CLOSURE_ELEMENT_BOUND: usize = 200; // Safety valve for point-group closure
pub const MAX_EQUIVALENT_NORMALS: usize = 64; // Per-form equivalent-normal cap

// Tolerances
pub const MATRIX_TOLERANCE: f64 = 1e-10; // Matrix identity comparisons
pub const CLIP_EPSILON: f64 = 1e-8; // Polygon clipping inside/outside
pub const NORMAL_DEDUP_TOLERANCE: f64 = 1e-3; // Duplicate-normal detection
pub const VERTEX_KEY_DECIMALS: usize = 6; // Vertex coordinate keying

// Face clipping seed polygon half-extent; large against the expected
// polytope radius (form scales stay well under 5).
pub const CLIP_EXTENT: f64 = 10.0;

// Render defaults and clamps
pub const DEFAULT_ELEVATION: f64 = 30.0;
pub const DEFAULT_AZIMUTH: f64 = -45.0;
pub const DEFAULT_VIEW_WIDTH: u32 = 300;
pub const DEFAULT_VIEW_HEIGHT: u32 = 300;
pub const ELEVATION_RANGE: (f64, f64) = (-90.0, 90.0);
pub const AZIMUTH_RANGE: (f64, f64) = (-180.0, 180.0);
pub const PROJECTION_SCALE_FACTOR: f64 = 0.35; // of min(width, height)

// Export scale clamps
pub const STL_SCALE_RANGE: (f64, f64) = (1.0, 100.0);
pub const STL_SCALE_DEFAULT: f64 = 10.0;
pub const GLTF_SCALE_RANGE: (f64, f64) = (0.1, 10.0);
pub const GLTF_SCALE_DEFAULT: f64 = 1.0;
