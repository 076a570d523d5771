// Modifier-tail extraction.
//
// Everything after `|` is kept raw on the parse result; twin,
// modification and phenomenon clauses are pulled out by pattern
// matching. The tail grammar is lenient: malformed clauses are dropped
// with a warning rather than failing the parse.

use log::warn;
use regex::Regex;

use crate::parser::parse_tree::{
    CrystalAxis, ModificationKind, ModificationSpec, TwinSpec,
};

/// Clauses extracted from the raw modifier tail.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TailModifiers {
    pub twin: Option<TwinSpec>,
    pub modifications: Vec<ModificationSpec>,
    pub phenomenon: Option<String>,
    pub warnings: Vec<String>,
}

/// Extract all recognized clauses from a modifier tail.
pub fn extract(tail: &str) -> TailModifiers {
    let mut extracted = TailModifiers::default();

    let twin = Regex::new(r"(?i)twin\(\s*(\w+)\s*\)").unwrap();
    if let Some(caps) = twin.captures(tail) {
        extracted.twin = Some(TwinSpec {
            law: caps[1].to_string(),
        });
    }

    let modification =
        Regex::new(r"(?i)(elongate|flatten|scale)\(\s*([abc])\s*:\s*([\d.]+)\s*\)").unwrap();
    for caps in modification.captures_iter(tail) {
        let kind = match caps[1].to_ascii_lowercase().as_str() {
            "elongate" => ModificationKind::Elongate,
            "flatten" => ModificationKind::Flatten,
            _ => ModificationKind::Scale,
        };
        let axis = match caps[2].to_ascii_lowercase().as_str() {
            "a" => CrystalAxis::A,
            "b" => CrystalAxis::B,
            _ => CrystalAxis::C,
        };
        match caps[3].parse::<f64>() {
            Ok(factor) if factor > 0.0 && factor.is_finite() => {
                extracted.modifications.push(ModificationSpec { kind, axis, factor });
            }
            _ => {
                let message = format!(
                    "ignoring modification '{}' with invalid factor '{}'",
                    &caps[1], &caps[3]
                );
                warn!("{}", message);
                extracted.warnings.push(message);
            }
        }
    }

    let phenomenon = Regex::new(r"phenomenon\[([^\]]*)\]").unwrap();
    if let Some(caps) = phenomenon.captures(tail) {
        extracted.phenomenon = Some(caps[1].to_string());
    }

    extracted
}
