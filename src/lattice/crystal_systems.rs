use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CdlError;

/// The seven crystal systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrystalSystem {
    Cubic,
    Hexagonal,
    Trigonal,
    Tetragonal,
    Orthorhombic,
    Monoclinic,
    Triclinic,
}

/// Lowercase system keywords accepted by the lexer (case-folded).
pub const SYSTEM_KEYWORDS: [&str; 7] = [
    "cubic",
    "hexagonal",
    "trigonal",
    "tetragonal",
    "orthorhombic",
    "monoclinic",
    "triclinic",
];

/// Every Hermann–Mauguin point-group literal the lexer recognizes.
pub const ALL_POINT_GROUPS: [&str; 33] = [
    // cubic
    "m3m", "432", "-43m", "m3", "m-3", "23", // hexagonal
    "6/mmm", "6mm", "-6m2", "622", "6/m", "-6", "6", // trigonal
    "-3m", "3m", "32", "-3", "3", // tetragonal
    "4/mmm", "4mm", "-42m", "422", "4/m", "-4", "4", // orthorhombic
    "mmm", "mm2", "222", // monoclinic
    "2/m", "m", "2", // triclinic
    "-1", "1",
];

/// Direct-cell parameters `(a, b, c, α, β, γ)`, angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellParameters {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl CrystalSystem {
    /// Reference cell parameters per system.
    ///
    /// Hexagonal and trigonal both use `c = 1.0`; the table is data and
    /// may be reparameterized without touching the basis math.
    pub fn cell_parameters(&self) -> CellParameters {
        let (a, b, c, alpha, beta, gamma) = match self {
            CrystalSystem::Cubic => (1.0, 1.0, 1.0, 90.0, 90.0, 90.0),
            CrystalSystem::Tetragonal => (1.0, 1.0, 1.2, 90.0, 90.0, 90.0),
            CrystalSystem::Orthorhombic => (1.0, 1.2, 0.8, 90.0, 90.0, 90.0),
            CrystalSystem::Hexagonal => (1.0, 1.0, 1.0, 90.0, 90.0, 120.0),
            CrystalSystem::Trigonal => (1.0, 1.0, 1.0, 90.0, 90.0, 120.0),
            CrystalSystem::Monoclinic => (1.0, 1.2, 0.9, 90.0, 110.0, 90.0),
            CrystalSystem::Triclinic => (1.0, 1.1, 0.95, 80.0, 85.0, 75.0),
        };
        CellParameters {
            a,
            b,
            c,
            alpha,
            beta,
            gamma,
        }
    }

    /// Point groups enumerated for this system.
    pub fn point_groups(&self) -> &'static [&'static str] {
        match self {
            CrystalSystem::Cubic => &["m3m", "432", "-43m", "m3", "m-3", "23"],
            CrystalSystem::Hexagonal => &["6/mmm", "6mm", "-6m2", "622", "6/m", "-6", "6"],
            CrystalSystem::Trigonal => &["-3m", "3m", "32", "-3", "3"],
            CrystalSystem::Tetragonal => &["4/mmm", "4mm", "-42m", "422", "4/m", "-4", "4"],
            CrystalSystem::Orthorhombic => &["mmm", "mm2", "222"],
            CrystalSystem::Monoclinic => &["2/m", "m", "2"],
            CrystalSystem::Triclinic => &["-1", "1"],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CrystalSystem::Cubic => "cubic",
            CrystalSystem::Hexagonal => "hexagonal",
            CrystalSystem::Trigonal => "trigonal",
            CrystalSystem::Tetragonal => "tetragonal",
            CrystalSystem::Orthorhombic => "orthorhombic",
            CrystalSystem::Monoclinic => "monoclinic",
            CrystalSystem::Triclinic => "triclinic",
        }
    }
}

impl fmt::Display for CrystalSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CrystalSystem {
    type Err = CdlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cubic" => Ok(CrystalSystem::Cubic),
            "hexagonal" => Ok(CrystalSystem::Hexagonal),
            "trigonal" => Ok(CrystalSystem::Trigonal),
            "tetragonal" => Ok(CrystalSystem::Tetragonal),
            "orthorhombic" => Ok(CrystalSystem::Orthorhombic),
            "monoclinic" => Ok(CrystalSystem::Monoclinic),
            "triclinic" => Ok(CrystalSystem::Triclinic),
            other => Err(CdlError::UnknownSystem(other.to_string())),
        }
    }
}
