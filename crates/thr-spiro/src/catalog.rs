//! Named preset patterns.
//!
//! The built-in table is created once on first use and never changes. User
//! presets come from YAML files and are layered on top with `merged`, which
//! builds a new catalog instead of editing the old one.
//!
//! ```yaml
//! presets:
//!   - name: tight_star
//!     description: "Dense epitrochoid star"
//!     type: epitrochoid
//!     R: 1.0
//!     r: 0.1
//!     d: 0.45
//!     num_points: 4000
//! ```

use std::f64::consts::FRAC_PI_2;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::curves::{CurveParameters, CurveType};
use crate::error::{Result, SpiroError};

/// A named parameter bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(flatten)]
    pub parameters: CurveParameters,
}

impl Preset {
    pub fn new(name: &str, description: &str, parameters: CurveParameters) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            parameters,
        }
    }

    pub fn curve_type(&self) -> CurveType {
        self.parameters.curve_type()
    }
}

/// On-disk catalog layout.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    presets: Vec<Preset>,
}

/// An immutable, ordered set of presets with unique names.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    presets: Vec<Preset>,
}

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::from_unique(vec![
        Preset::new(
            "classic_5_petal",
            "Five-lobed inner spirograph",
            CurveParameters::hypotrochoid(1.0, 0.2, 0.4),
        ),
        Preset::new(
            "classic_7_petal",
            "Seven-lobed inner spirograph",
            CurveParameters::hypotrochoid(1.0, 0.142857, 0.3),
        ),
        Preset::new(
            "flower_small",
            "Fine flower with many overlapping loops",
            CurveParameters::hypotrochoid(1.0, 0.33, 0.66).with_num_points(3000),
        ),
        Preset::new(
            "flower_large",
            "Four broad looping petals",
            CurveParameters::hypotrochoid(1.0, 0.25, 1.0),
        ),
        Preset::new(
            "star_burst",
            "Ten-point outer spirograph star",
            CurveParameters::epitrochoid(1.0, 0.1, 0.3),
        ),
        Preset::new("rose_5", "Five-petal rose", CurveParameters::rose(5.0, 1.0)),
        Preset::new("rose_7", "Seven-petal rose", CurveParameters::rose(7.0, 1.0)),
        Preset::new(
            "lissajous_3_4",
            "Lissajous figure, 3:4",
            CurveParameters::lissajous(3.0, 4.0, 0.0),
        ),
        Preset::new(
            "lissajous_5_6",
            "Lissajous figure, 5:6 with quarter phase",
            CurveParameters::lissajous(5.0, 6.0, FRAC_PI_2).with_num_points(3000),
        ),
    ])
});

impl Catalog {
    /// The presets shipped with the crate.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Build a catalog, rejecting duplicate names and invalid parameters.
    pub fn new(presets: Vec<Preset>) -> Result<Self> {
        for (i, preset) in presets.iter().enumerate() {
            if preset.name.trim().is_empty() {
                return Err(SpiroError::Catalog(format!("preset #{} has an empty name", i + 1)));
            }
            if presets[..i].iter().any(|p| p.name.eq_ignore_ascii_case(&preset.name)) {
                return Err(SpiroError::Catalog(format!("duplicate preset name: {}", preset.name)));
            }
            preset
                .parameters
                .validate()
                .map_err(|e| SpiroError::Catalog(format!("preset {}: {}", preset.name, e)))?;
        }
        Ok(Self { presets })
    }

    fn from_unique(presets: Vec<Preset>) -> Self {
        Self { presets }
    }

    /// Parse a YAML preset file's contents.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let file: CatalogFile = serde_yaml::from_str(yaml)
            .map_err(|e| SpiroError::Catalog(format!("failed to parse preset YAML: {}", e)))?;
        Self::new(file.presets)
    }

    /// Load a YAML preset file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| SpiroError::Catalog(format!("failed to read {}: {}", path.display(), e)))?;
        Self::from_yaml_str(&content)
    }

    /// A new catalog holding `self` plus `other`. Presets in `other` replace
    /// same-named ones in `self`; new names are appended in order.
    pub fn merged(&self, other: &Catalog) -> Catalog {
        let mut presets: Vec<Preset> = self
            .presets
            .iter()
            .map(|p| other.get(&p.name).unwrap_or(p).clone())
            .collect();
        for p in &other.presets {
            if self.get(&p.name).is_none() {
                presets.push(p.clone());
            }
        }
        Catalog::from_unique(presets)
    }

    /// All presets in catalog order.
    pub fn list(&self) -> &[Preset] {
        &self.presets
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().map(|p| p.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Look up a preset by name, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&Preset> {
        let name = name.trim();
        self.presets.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Parameters for the named preset, or `PresetNotFound`.
    pub fn resolve(&self, name: &str) -> Result<CurveParameters> {
        self.get(name)
            .map(|p| p.parameters)
            .ok_or_else(|| SpiroError::PresetNotFound(name.to_string()))
    }
}

/// Presets from the built-in catalog.
pub fn list_presets() -> &'static [Preset] {
    Catalog::builtin().list()
}

/// Resolve a name against the built-in catalog.
pub fn resolve(name: &str) -> Result<CurveParameters> {
    Catalog::builtin().resolve(name)
}
