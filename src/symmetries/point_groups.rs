// Point-group operation tables and equivalent-Miller enumeration.
//
// Cubic holohedry and the fixed tetragonal/orthorhombic tables are
// enumerated directly; every hexagonal/trigonal group is generated by
// closing its generator set under composition. All remaining groups
// fall through to the identity orbit.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, OnceLock};

use log::debug;

use crate::config::CLOSURE_ELEMENT_BOUND;
use crate::symmetries::symmetry_operations::MillerOp;

// Process-wide cache of generated operation tables, keyed by the
// point-group literal. Entries are immutable once inserted.
static OPERATION_CACHE: OnceLock<Mutex<HashMap<String, Vec<MillerOp>>>> = OnceLock::new();

fn cache() -> &'static Mutex<HashMap<String, Vec<MillerOp>>> {
    OPERATION_CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Generator sets for the hexagonal and trigonal groups.
fn generators_for(point_group: &str) -> Option<Vec<MillerOp>> {
    let gens = match point_group {
        "6/mmm" => vec![MillerOp::c6z(), MillerOp::c2_100(), MillerOp::mz()],
        "622" => vec![MillerOp::c6z(), MillerOp::c2_100()],
        "6mm" => vec![MillerOp::c6z(), MillerOp::m_100()],
        "-6m2" => vec![MillerOp::c3z(), MillerOp::mz(), MillerOp::m_100()],
        "6/m" => vec![MillerOp::c6z(), MillerOp::mz()],
        "-6" => vec![MillerOp::c3z(), MillerOp::mz()],
        "6" => vec![MillerOp::c6z()],
        "-3m" => vec![MillerOp::c3z(), MillerOp::c2_110(), MillerOp::inversion()],
        "32" => vec![MillerOp::c3z(), MillerOp::c2_110()],
        "3m" => vec![MillerOp::c3z(), MillerOp::m_100()],
        "-3" => vec![MillerOp::c3z(), MillerOp::inversion()],
        "3" => vec![MillerOp::c3z()],
        _ => return None,
    };
    Some(gens)
}

/// Close a generator set under composition.
///
/// BFS from the identity, multiplying every known element by each
/// generator on both sides until nothing new appears. The element
/// count is bounded as a safety valve; all defined groups close at 24
/// elements or fewer.
pub fn close_generators(generators: &[MillerOp]) -> Vec<MillerOp> {
    let mut elements = vec![MillerOp::identity()];
    let mut seen: HashSet<MillerOp> = elements.iter().copied().collect();

    loop {
        let mut added = Vec::new();
        for generator in generators {
            for element in &elements {
                for candidate in [generator.compose(element), element.compose(generator)] {
                    if seen.insert(candidate) {
                        added.push(candidate);
                    }
                }
            }
        }
        if added.is_empty() || elements.len() + added.len() > CLOSURE_ELEMENT_BOUND {
            elements.extend(added);
            elements.truncate(CLOSURE_ELEMENT_BOUND);
            break;
        }
        elements.extend(added);
    }
    elements
}

/// The operation table for a point group, memoized process-wide.
///
/// Groups without a generator set collapse to the identity.
pub fn group_operations(point_group: &str) -> Vec<MillerOp> {
    let generators = match generators_for(point_group) {
        Some(generators) => generators,
        None => return vec![MillerOp::identity()],
    };

    let mut table = cache().lock().expect("point-group cache poisoned");
    if let Some(ops) = table.get(point_group) {
        return ops.clone();
    }
    let ops = close_generators(&generators);
    debug!("point group {} closed at {} operations", point_group, ops.len());
    table.insert(point_group.to_string(), ops.clone());
    ops
}

/// Enumerate the symmetry-equivalent Miller triples of `hkl`.
///
/// Duplicate triples are removed preserving first-seen order; the
/// identity orbit is the fallback for every group without an
/// enumerated table.
pub fn equivalent_millers(point_group: &str, hkl: (i32, i32, i32)) -> Vec<(i32, i32, i32)> {
    match point_group {
        "m3m" | "m-3m" => cubic_equivalents(hkl),
        "4/mmm" => tetragonal_equivalents(hkl),
        "mmm" => orthorhombic_equivalents(hkl),
        pg if generators_for(pg).is_some() => {
            let triples = group_operations(pg)
                .iter()
                .map(|op| op.apply(hkl))
                .collect::<Vec<_>>();
            dedup_triples(triples)
        }
        _ => vec![hkl],
    }
}

// Cubic holohedry: 6 axis permutations × 8 sign combinations.
fn cubic_equivalents(hkl: (i32, i32, i32)) -> Vec<(i32, i32, i32)> {
    let (h, k, l) = hkl;
    let permutations = [
        (h, k, l),
        (h, l, k),
        (k, h, l),
        (k, l, h),
        (l, h, k),
        (l, k, h),
    ];
    let mut triples = Vec::with_capacity(48);
    for (a, b, c) in permutations {
        for signs in 0..8u8 {
            let sa = if signs & 1 == 0 { 1 } else { -1 };
            let sb = if signs & 2 == 0 { 1 } else { -1 };
            let sc = if signs & 4 == 0 { 1 } else { -1 };
            triples.push((a * sa, b * sb, c * sc));
        }
    }
    dedup_triples(triples)
}

// D4h: h,k exchange × 8 sign combinations, c axis fixed.
fn tetragonal_equivalents(hkl: (i32, i32, i32)) -> Vec<(i32, i32, i32)> {
    let (h, k, l) = hkl;
    let mut triples = Vec::with_capacity(16);
    for (a, b) in [(h, k), (k, h)] {
        for signs in 0..8u8 {
            let sa = if signs & 1 == 0 { 1 } else { -1 };
            let sb = if signs & 2 == 0 { 1 } else { -1 };
            let sc = if signs & 4 == 0 { 1 } else { -1 };
            triples.push((a * sa, b * sb, l * sc));
        }
    }
    dedup_triples(triples)
}

// D2h: the 8 sign combinations.
fn orthorhombic_equivalents(hkl: (i32, i32, i32)) -> Vec<(i32, i32, i32)> {
    let (h, k, l) = hkl;
    let mut triples = Vec::with_capacity(8);
    for signs in 0..8u8 {
        let sa = if signs & 1 == 0 { 1 } else { -1 };
        let sb = if signs & 2 == 0 { 1 } else { -1 };
        let sc = if signs & 4 == 0 { 1 } else { -1 };
        triples.push((h * sa, k * sb, l * sc));
    }
    dedup_triples(triples)
}

fn dedup_triples(triples: Vec<(i32, i32, i32)>) -> Vec<(i32, i32, i32)> {
    let mut seen = HashSet::new();
    triples
        .into_iter()
        .filter(|triple| seen.insert(*triple))
        .collect()
}
