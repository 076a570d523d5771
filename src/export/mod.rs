// Export module: SVG, STL and glTF encoders for crystal meshes

// ======================== MODULE DECLARATIONS ========================
pub mod svg;
pub mod stl;
pub mod gltf;


// ======================== ENCODERS ========================
pub use svg::{
    RenderOptions, // struct - elev/azim/width/height with defaults and clamping
    render_svg,    // fn(&CrystalGeometry, &RenderOptions) -> String - orthographic painter SVG
};
pub use stl::write_stl; // fn(&CrystalGeometry, scale: f64) -> String - ASCII STL, fan triangulation
pub use gltf::write_gltf; // fn(&CrystalGeometry, scale: f64) -> serde_json::Value - glTF 2.0 document
