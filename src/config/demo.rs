use crate::extractor::IsolineParams;
use crate::grid::GridBounds;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, Deserialize)]
pub struct OutputConfig {
    pub json_out: Option<PathBuf>,
    /// Use the Rayon entry point when the crate is built with `parallel`.
    #[serde(default)]
    pub parallel: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DemoConfig {
    pub grid: GridBounds,
    pub field: FieldSpec,
    #[serde(default)]
    pub iso: f64,
    #[serde(default)]
    pub params: IsolineParams,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Built-in analytic fields.
///
/// The `FieldSpec` value is passed as the field context, so the demo closure is a
/// thin `|p, spec| spec.value_at(p)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldSpec {
    /// Squared distance to `center`, minus `radius²`.
    Circle {
        #[serde(default = "one")]
        radius: f64,
        #[serde(default)]
        center: [f64; 2],
    },
    /// `a·x + b·y + c`.
    Plane {
        a: f64,
        b: f64,
        #[serde(default)]
        c: f64,
    },
    /// Nearest-neighbour tight-binding band of a simple cubic lattice,
    /// `-2t (cos(kx·a) + cos(ky·a) + cos(kz·a))`, cut at fixed `kz`.
    CubicBand {
        #[serde(default = "one")]
        hopping: f64,
        #[serde(default = "one")]
        lattice: f64,
        #[serde(default)]
        kz: f64,
    },
}

fn one() -> f64 {
    1.0
}

impl FieldSpec {
    pub fn value_at(&self, p: &Point2<f64>) -> f64 {
        match *self {
            FieldSpec::Circle { radius, center } => {
                let dx = p.x - center[0];
                let dy = p.y - center[1];
                dx * dx + dy * dy - radius * radius
            }
            FieldSpec::Plane { a, b, c } => a * p.x + b * p.y + c,
            FieldSpec::CubicBand {
                hopping,
                lattice,
                kz,
            } => {
                -2.0 * hopping
                    * ((p.x * lattice).cos() + (p.y * lattice).cos() + (kz * lattice).cos())
            }
        }
    }
}

pub fn load_config(path: &Path) -> Result<DemoConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&contents).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn parse_config(contents: &str) -> Result<DemoConfig, serde_json::Error> {
    serde_json::from_str(contents)
}
