// Orthographic SVG rendering.
//
// View transform is R_elev · R_azim (yaw about world Y, then pitch
// about X). Faces are painter-sorted on centroid depth, back-face
// culled, and flat-shaded with a fixed light.

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::config::{
    AZIMUTH_RANGE, DEFAULT_AZIMUTH, DEFAULT_ELEVATION, DEFAULT_VIEW_HEIGHT, DEFAULT_VIEW_WIDTH,
    ELEVATION_RANGE, PROJECTION_SCALE_FACTOR,
};
use crate::geometries::crystal_mesh::CrystalGeometry;
use crate::geometries::mesh_transform::rotation_about_axis;

const AMBIENT: f64 = 0.3;
const BASE_COLOR: (f64, f64, f64) = (14.0, 165.0, 233.0);
const STROKE_COLOR: &str = "#0369a1";
const STROKE_WIDTH: f64 = 1.5;
const BACKFACE_EPS: f64 = -0.01;

/// Camera and canvas parameters for SVG rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Elevation in degrees, clamped to [−90, 90].
    pub elev: f64,
    /// Azimuth in degrees, clamped to [−180, 180].
    pub azim: f64,
    pub width: u32,
    pub height: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            elev: DEFAULT_ELEVATION,
            azim: DEFAULT_AZIMUTH,
            width: DEFAULT_VIEW_WIDTH,
            height: DEFAULT_VIEW_HEIGHT,
        }
    }
}

impl RenderOptions {
    /// Clamp angles into their legal ranges.
    pub fn clamped(mut self) -> Self {
        self.elev = self.elev.clamp(ELEVATION_RANGE.0, ELEVATION_RANGE.1);
        self.azim = self.azim.clamp(AZIMUTH_RANGE.0, AZIMUTH_RANGE.1);
        self
    }

    /// Orthographic view matrix `R_elev · R_azim`.
    pub fn view_matrix(&self) -> Matrix3<f64> {
        let yaw = rotation_about_axis(Vector3::y(), self.azim);
        let pitch = rotation_about_axis(Vector3::x(), self.elev);
        pitch * yaw
    }
}

struct ShadedFace {
    points: Vec<(f64, f64)>,
    depth: f64,
    fill: String,
}

/// Render a crystal mesh as a standalone SVG document.
pub fn render_svg(geometry: &CrystalGeometry, options: &RenderOptions) -> String {
    let options = options.clamped();
    let view = options.view_matrix();
    let scale = options.width.min(options.height) as f64 * PROJECTION_SCALE_FACTOR;
    let center_x = options.width as f64 / 2.0;
    let center_y = options.height as f64 / 2.0;
    let light = Vector3::new(0.5, 0.7, 0.5).normalize();

    let mut shaded: Vec<ShadedFace> = Vec::new();
    for face in &geometry.faces {
        if face.vertices.len() < 3 {
            continue;
        }
        let view_normal = view * face.normal;
        if view_normal.z < BACKFACE_EPS {
            continue;
        }

        let mut depth = 0.0;
        let mut points = Vec::with_capacity(face.vertices.len());
        for vertex in &face.vertices {
            let v = view * vertex;
            depth += v.z;
            points.push((center_x + v.x * scale, center_y - v.y * scale));
        }
        depth /= face.vertices.len() as f64;

        let diffuse = view_normal.dot(&light).max(0.0);
        let intensity = (AMBIENT + (1.0 - AMBIENT) * diffuse).min(1.0);
        let fill = format!(
            "rgb({},{},{})",
            (BASE_COLOR.0 * intensity).round() as u8,
            (BASE_COLOR.1 * intensity).round() as u8,
            (BASE_COLOR.2 * intensity).round() as u8,
        );
        shaded.push(ShadedFace {
            points,
            depth,
            fill,
        });
    }

    // Painter's algorithm: far faces first.
    shaded.sort_by(|a, b| a.depth.partial_cmp(&b.depth).unwrap_or(std::cmp::Ordering::Equal));

    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
        w = options.width,
        h = options.height,
    );
    svg.push_str(
        "<defs>\
         <linearGradient id=\"crystal-sheen\" x1=\"0\" y1=\"0\" x2=\"0\" y2=\"1\">\
         <stop offset=\"0%\" stop-color=\"#e0f2fe\" stop-opacity=\"0.9\"/>\
         <stop offset=\"100%\" stop-color=\"#0ea5e9\" stop-opacity=\"0.1\"/>\
         </linearGradient>\
         <filter id=\"crystal-shadow\" x=\"-20%\" y=\"-20%\" width=\"140%\" height=\"140%\">\
         <feDropShadow dx=\"0\" dy=\"3\" stdDeviation=\"4\" flood-color=\"#0c4a6e\" flood-opacity=\"0.35\"/>\
         </filter>\
         </defs>",
    );
    svg.push_str("<g filter=\"url(#crystal-shadow)\">");
    for face in &shaded {
        let points = face
            .points
            .iter()
            .map(|(x, y)| format!("{:.2},{:.2}", x, y))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = write!(
            svg,
            "<polygon points=\"{points}\" fill=\"{fill}\" stroke=\"{stroke}\" \
             stroke-width=\"{width}\" stroke-linejoin=\"round\"/>\
             <polygon points=\"{points}\" fill=\"url(#crystal-sheen)\" fill-opacity=\"0.25\"/>",
            points = points,
            fill = face.fill,
            stroke = STROKE_COLOR,
            width = STROKE_WIDTH,
        );
    }
    svg.push_str("</g></svg>");
    svg
}
