use nalgebra::Vector3;
use serde::Serialize;

/// Relationship between the individuals of a twin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TwinType {
    Contact,
    Penetration,
    Cyclic,
}

/// How the composer assembles a twin from the base half-space set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TwinRenderMode {
    SingleCrystal,
    DualCrystal,
    VShaped,
    ContactRotation,
    Cyclic,
    Unified,
}

/// One named twin law.
#[derive(Debug, Clone, Serialize)]
pub struct TwinLaw {
    pub name: &'static str,
    pub description: &'static str,
    pub twin_type: TwinType,
    pub render_mode: TwinRenderMode,
    /// Twin axis as a crystallographic direction (also the composition
    /// plane normal for contact modes).
    pub axis: [f64; 3],
    /// Rotation angle in degrees.
    pub angle: f64,
    pub habit: &'static str,
    pub examples: &'static [&'static str],
}

impl TwinLaw {
    pub fn axis_vector(&self) -> Vector3<f64> {
        Vector3::new(self.axis[0], self.axis[1], self.axis[2])
    }
}

/// Japan-law rotation: 84° 33′ 30″.
pub const JAPAN_TWIN_ANGLE: f64 = 84.0 + 33.0 / 60.0 + 30.0 / 3600.0;

/// The enumerated twin laws.
pub const TWIN_LAWS: [TwinLaw; 14] = [
    TwinLaw {
        name: "spinel",
        description: "Octahedra joined on {111}, one rotated 180° about the shared axis",
        twin_type: TwinType::Contact,
        render_mode: TwinRenderMode::ContactRotation,
        axis: [1.0, 1.0, 1.0],
        angle: 180.0,
        habit: "octahedral",
        examples: &["spinel", "magnetite", "diamond"],
    },
    TwinLaw {
        name: "iron_cross",
        description: "Interpenetrating pyritohedra rotated 90° about [001]",
        twin_type: TwinType::Penetration,
        render_mode: TwinRenderMode::DualCrystal,
        axis: [0.0, 0.0, 1.0],
        angle: 90.0,
        habit: "pyritohedral",
        examples: &["pyrite"],
    },
    TwinLaw {
        name: "carlsbad",
        description: "Feldspar prisms interpenetrating after a 180° turn about c",
        twin_type: TwinType::Penetration,
        render_mode: TwinRenderMode::DualCrystal,
        axis: [0.0, 0.0, 1.0],
        angle: 180.0,
        habit: "prismatic",
        examples: &["orthoclase", "sanidine"],
    },
    TwinLaw {
        name: "albite",
        description: "Lamellar contact twin on {010}",
        twin_type: TwinType::Contact,
        render_mode: TwinRenderMode::ContactRotation,
        axis: [0.0, 1.0, 0.0],
        angle: 180.0,
        habit: "tabular",
        examples: &["albite", "labradorite"],
    },
    TwinLaw {
        name: "brazil",
        description: "Quartz penetration twin of opposite hands about [110]",
        twin_type: TwinType::Penetration,
        render_mode: TwinRenderMode::DualCrystal,
        axis: [1.0, 1.0, 0.0],
        angle: 180.0,
        habit: "prismatic",
        examples: &["quartz"],
    },
    TwinLaw {
        name: "dauphine",
        description: "Electrical quartz twin; externally a single crystal",
        twin_type: TwinType::Penetration,
        render_mode: TwinRenderMode::SingleCrystal,
        axis: [0.0, 0.0, 1.0],
        angle: 180.0,
        habit: "prismatic",
        examples: &["quartz"],
    },
    TwinLaw {
        name: "japan",
        description: "Quartz contact twin with prisms meeting at 84° 33′",
        twin_type: TwinType::Contact,
        render_mode: TwinRenderMode::VShaped,
        axis: [1.0, 1.0, -2.0],
        angle: JAPAN_TWIN_ANGLE,
        habit: "prismatic",
        examples: &["quartz"],
    },
    TwinLaw {
        name: "trilling",
        description: "Cyclic triplet about [001] in 120° steps",
        twin_type: TwinType::Cyclic,
        render_mode: TwinRenderMode::Cyclic,
        axis: [0.0, 0.0, 1.0],
        angle: 120.0,
        habit: "pseudo-hexagonal",
        examples: &["chrysoberyl", "cerussite"],
    },
    TwinLaw {
        name: "fluorite",
        description: "Interpenetrating cubes rotated 180° about [111]",
        twin_type: TwinType::Penetration,
        render_mode: TwinRenderMode::DualCrystal,
        axis: [1.0, 1.0, 1.0],
        angle: 180.0,
        habit: "cubic",
        examples: &["fluorite"],
    },
    TwinLaw {
        name: "staurolite_60",
        description: "Staurolite cross at 60° about [001]",
        twin_type: TwinType::Penetration,
        render_mode: TwinRenderMode::DualCrystal,
        axis: [0.0, 0.0, 1.0],
        angle: 60.0,
        habit: "prismatic",
        examples: &["staurolite"],
    },
    TwinLaw {
        name: "staurolite_90",
        description: "Staurolite right-angle cross about [001]",
        twin_type: TwinType::Penetration,
        render_mode: TwinRenderMode::DualCrystal,
        axis: [0.0, 0.0, 1.0],
        angle: 90.0,
        habit: "prismatic",
        examples: &["staurolite"],
    },
    TwinLaw {
        name: "manebach",
        description: "Feldspar contact twin on {001}",
        twin_type: TwinType::Contact,
        render_mode: TwinRenderMode::ContactRotation,
        axis: [0.0, 0.0, 1.0],
        angle: 180.0,
        habit: "prismatic",
        examples: &["orthoclase"],
    },
    TwinLaw {
        name: "baveno",
        description: "Feldspar contact twin on {021}",
        twin_type: TwinType::Contact,
        render_mode: TwinRenderMode::ContactRotation,
        axis: [0.0, 2.0, 1.0],
        angle: 180.0,
        habit: "prismatic",
        examples: &["orthoclase"],
    },
    TwinLaw {
        name: "gypsum_swallow",
        description: "Swallowtail contact twin on {100}",
        twin_type: TwinType::Contact,
        render_mode: TwinRenderMode::VShaped,
        axis: [1.0, 0.0, 0.0],
        angle: 180.0,
        habit: "tabular",
        examples: &["gypsum"],
    },
];

/// Find a twin law by name; case-insensitive, non-word separators
/// ignored (`"Staurolite 60"` matches `staurolite_60`).
pub fn lookup(name: &str) -> Option<&'static TwinLaw> {
    let key = normalize(name);
    TWIN_LAWS.iter().find(|law| normalize(law.name) == key)
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
