// Request pipeline: CDL text → parse tree → symmetry-expanded
// half-spaces → mesh → twin composition → post-scaling.
//
// Every invocation is independent; the only cross-request state is the
// point-group operation cache. Also home of the wire-contract types the
// host mounts on its HTTP layer.

use log::warn;
use serde::Serialize;

use crate::config::{GLTF_SCALE_DEFAULT, GLTF_SCALE_RANGE, STL_SCALE_DEFAULT, STL_SCALE_RANGE};
use crate::error::Result;
use crate::geometries::crystal_mesh::CrystalGeometry;
use crate::geometries::halfspace::HalfspaceSet;
use crate::geometries::halfspace_intersection::intersect_halfspaces;
use crate::geometries::mesh_transform::{apply_post_scaling, axis_scale_factors};
use crate::lattice::reciprocal_basis::ReciprocalBasis;
use crate::parser::parse_tree::ParseResult;
use crate::parser::{cdl_parser, preprocessor};
use crate::symmetries::miller_expansion::expand_form;
use crate::twinning::{twin_composer, twin_laws};

/// Parse a raw CDL expression end to end.
pub fn parse_cdl(input: &str) -> Result<ParseResult> {
    let preprocessed = preprocessor::preprocess(input)?;
    cdl_parser::parse(&preprocessed)
}

/// Expand a parse result into its combined half-space set.
pub fn expand_halfspaces(parsed: &ParseResult) -> HalfspaceSet {
    let basis = ReciprocalBasis::from_system(parsed.system);
    let mut halfspaces = HalfspaceSet::new();
    for form in parsed.flattened_forms() {
        expand_form(&form, &parsed.point_group, &basis, &mut halfspaces);
    }
    halfspaces
}

/// Build the final mesh for a parse result: intersection, twin
/// composition, then post-computation axial scaling, in that order.
pub fn build_geometry(parsed: &ParseResult) -> Result<CrystalGeometry> {
    let halfspaces = expand_halfspaces(parsed);

    let mut geometry = match &parsed.twin {
        Some(spec) => match twin_laws::lookup(&spec.law) {
            Some(law) => twin_composer::compose_twin(law, &halfspaces),
            None => {
                warn!("unknown twin law '{}', rendering the base crystal", spec.law);
                intersect_halfspaces(&halfspaces)
            }
        },
        None => intersect_halfspaces(&halfspaces),
    };

    apply_post_scaling(&mut geometry, axis_scale_factors(&parsed.modifications));
    Ok(geometry)
}

/// Parse and build in one step.
pub fn geometry_from_cdl(input: &str) -> Result<CrystalGeometry> {
    build_geometry(&parse_cdl(input)?)
}

// ======================== WIRE CONTRACTS ========================

/// Response body of the validate endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed: Option<ParsedSummary>,
}

/// Parse summary inside a successful validate response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedSummary {
    pub system: String,
    pub point_group: String,
    pub forms_count: usize,
    pub forms: Vec<FormSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormSummary {
    /// `{hkl}` or `{hkil}` with minus signs inline.
    pub miller: String,
    pub scale: f64,
}

/// Validate a CDL expression without building geometry.
pub fn validate(input: &str) -> ValidateResponse {
    match parse_cdl(input) {
        Ok(parsed) => {
            let forms: Vec<FormSummary> = parsed
                .flattened_forms()
                .iter()
                .map(|form| FormSummary {
                    miller: form.miller.to_string(),
                    scale: form.scale,
                })
                .collect();
            ValidateResponse {
                valid: true,
                error: None,
                parsed: Some(ParsedSummary {
                    system: parsed.system.to_string(),
                    point_group: parsed.point_group.clone(),
                    forms_count: forms.len(),
                    forms,
                }),
            }
        }
        Err(error) => ValidateResponse {
            valid: false,
            error: Some(error.to_string()),
            parsed: None,
        },
    }
}

/// Clamp an STL export scale into [1, 100], defaulting to 10.
pub fn clamp_stl_scale(scale: Option<f64>) -> f64 {
    scale
        .unwrap_or(STL_SCALE_DEFAULT)
        .clamp(STL_SCALE_RANGE.0, STL_SCALE_RANGE.1)
}

/// Clamp a glTF export scale into [0.1, 10], defaulting to 1.
pub fn clamp_gltf_scale(scale: Option<f64>) -> f64 {
    scale
        .unwrap_or(GLTF_SCALE_DEFAULT)
        .clamp(GLTF_SCALE_RANGE.0, GLTF_SCALE_RANGE.1)
}
