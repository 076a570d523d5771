use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CdlError, Result};
use crate::lattice::crystal_systems::CrystalSystem;

/// Miller index naming a crystal plane.
///
/// Three integer components `(h, k, l)`; hexagonal/trigonal input may
/// carry the redundant fourth index `i = -(h + k)`, which is kept for
/// stringification but ignored by all normal computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MillerIndex {
    pub h: i32,
    pub k: i32,
    pub l: i32,
    /// Redundant hexagonal index, present only for 4-index input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i: Option<i32>,
}

impl MillerIndex {
    pub fn new(h: i32, k: i32, l: i32) -> Self {
        Self { h, k, l, i: None }
    }

    pub fn four_index(h: i32, k: i32, i: i32, l: i32) -> Self {
        Self { h, k, l, i: Some(i) }
    }

    /// Build from the parser's flat component list (3 or 4 entries).
    pub fn from_components(components: &[i32]) -> Result<Self> {
        match components {
            [h, k, l] => Ok(Self::new(*h, *k, *l)),
            [h, k, i, l] => Ok(Self::four_index(*h, *k, *i, *l)),
            _ => Err(CdlError::MillerArity {
                got: components.len(),
            }),
        }
    }

    /// The `(h, k, l)` triple used for all geometry.
    pub fn as_triple(&self) -> (i32, i32, i32) {
        (self.h, self.k, self.l)
    }
}

impl fmt::Display for MillerIndex {
    /// Renders `{hkl}` or `{hkil}` with minus signs inline, e.g. `{10-10}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        match self.i {
            Some(i) => write!(f, "{}{}{}{}", self.h, self.k, i, self.l)?,
            None => write!(f, "{}{}{}", self.h, self.k, self.l)?,
        }
        write!(f, "}}")
    }
}

/// A single crystal form: a Miller index plus its plane offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrystalForm {
    pub miller: MillerIndex,
    /// Plane offset from the origin, in units of the interplanar spacing.
    pub scale: f64,
    /// Opaque surface-feature annotation, passed through to consumers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl CrystalForm {
    pub fn new(miller: MillerIndex, scale: f64) -> Self {
        Self {
            miller,
            scale,
            features: None,
            label: None,
        }
    }
}

/// An ordered group of forms sharing an optional feature annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormGroup {
    pub children: Vec<FormNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Tagged node of the form tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormNode {
    Form(CrystalForm),
    Group(FormGroup),
}

impl FormNode {
    /// Collect the leaf forms of this subtree, merging group feature
    /// strings into descendants as `"parent, child"` (group first).
    pub fn flatten(&self) -> Vec<CrystalForm> {
        let mut leaves = Vec::new();
        self.flatten_into(None, &mut leaves);
        leaves
    }

    fn flatten_into(&self, inherited: Option<&str>, leaves: &mut Vec<CrystalForm>) {
        match self {
            FormNode::Form(form) => {
                let mut leaf = form.clone();
                leaf.features = merge_features(inherited, form.features.as_deref());
                leaves.push(leaf);
            }
            FormNode::Group(group) => {
                let merged = merge_features(inherited, group.features.as_deref());
                for child in &group.children {
                    child.flatten_into(merged.as_deref(), leaves);
                }
            }
        }
    }
}

/// Merge feature strings, parent preceding child.
pub fn merge_features(parent: Option<&str>, child: Option<&str>) -> Option<String> {
    match (parent, child) {
        (Some(p), Some(c)) => Some(format!("{}, {}", p, c)),
        (Some(p), None) => Some(p.to_string()),
        (None, Some(c)) => Some(c.to_string()),
        (None, None) => None,
    }
}

/// Twin clause extracted from the modifier tail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwinSpec {
    pub law: String,
}

/// The three crystallographic axes a modification may target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrystalAxis {
    A,
    B,
    C,
}

/// Kind of an axial modification clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModificationKind {
    Elongate,
    Flatten,
    Scale,
}

/// One `elongate|flatten|scale(axis:factor)` clause, in text order.
///
/// `flatten(ax:f)` is equivalent to `scale(ax:1/f)`; factors are
/// strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModificationSpec {
    pub kind: ModificationKind,
    pub axis: CrystalAxis,
    pub factor: f64,
}

/// Fully validated parse of one CDL expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    pub system: CrystalSystem,
    pub point_group: String,
    pub forms: Vec<FormNode>,
    /// Raw modifier tail (everything after `|`), if present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phenomenon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twin: Option<TwinSpec>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifications: Vec<ModificationSpec>,
    /// `@name = body` definitions in insertion order, bodies resolved.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub definitions: Vec<(String, String)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub doc_comments: Vec<String>,
    /// Non-fatal diagnostics (unknown point group and the like).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ParseResult {
    /// Leaf forms of the whole expression with group features merged in.
    pub fn flattened_forms(&self) -> Vec<CrystalForm> {
        self.forms.iter().flat_map(|node| node.flatten()).collect()
    }
}
