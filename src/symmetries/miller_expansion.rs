// Expansion of crystal forms into symmetry-equivalent half-spaces.

use log::warn;

use crate::config::{MAX_EQUIVALENT_NORMALS, NORMAL_DEDUP_TOLERANCE};
use crate::geometries::halfspace::HalfspaceSet;
use crate::lattice::reciprocal_basis::ReciprocalBasis;
use crate::parser::parse_tree::{CrystalForm, MillerIndex};
use crate::symmetries::point_groups::equivalent_millers;

/// Expand one form into the accumulating half-space set.
///
/// Each equivalent Miller triple contributes the plane
/// `n · x ≤ scale / |g|` with `n = g/|g|`, `g = h a* + k b* + l c*`,
/// i.e. the scale multiplies the interplanar spacing. Normals collinear
/// with an already-accumulated one at a matching distance are redundant
/// and dropped; the per-form contribution is capped as a sanity bound.
pub fn expand_form(
    form: &CrystalForm,
    point_group: &str,
    basis: &ReciprocalBasis,
    halfspaces: &mut HalfspaceSet,
) {
    let mut added = 0usize;
    for (h, k, l) in equivalent_millers(point_group, form.miller.as_triple()) {
        if added >= MAX_EQUIVALENT_NORMALS {
            warn!(
                "form {} exceeded {} equivalent normals, truncating",
                form.miller, MAX_EQUIVALENT_NORMALS
            );
            break;
        }
        let miller = MillerIndex::new(h, k, l);
        let raw = basis.miller_normal_raw(&miller);
        let magnitude = raw.norm();
        if magnitude == 0.0 {
            warn!("form {} has a degenerate plane normal, skipping", form.miller);
            continue;
        }
        let normal = raw / magnitude;
        let distance = form.scale / magnitude;
        if halfspaces.contains_duplicate(&normal, distance, NORMAL_DEDUP_TOLERANCE) {
            continue;
        }
        halfspaces.push(normal, distance, Some(miller));
        added += 1;
    }
}
