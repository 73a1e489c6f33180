//! Built-in material presets.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::temps::Temperature;

/// Filament material with a fixed nozzle temperature sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Material {
    /// Polylactic acid.
    Pla,
    /// Polyethylene terephthalate glycol.
    Petg,
    /// Carbon fibre filled PETG.
    PetgCf,
}

impl Material {
    /// All built-in presets, in listing order.
    pub const ALL: [Material; 3] = [Material::Pla, Material::Petg, Material::PetgCf];

    /// Preset name as accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Material::Pla => "PLA",
            Material::Petg => "PETG",
            Material::PetgCf => "PETG-CF",
        }
    }

    /// Ascending nozzle temperatures (°C) to sweep for this material.
    pub fn nozzle_temps(&self) -> &'static [Temperature] {
        match self {
            Material::Pla => &[190, 195, 200, 205, 210, 215, 220, 225, 230],
            Material::Petg | Material::PetgCf => {
                &[210, 215, 220, 225, 230, 235, 240, 245, 250, 255, 260]
            }
        }
    }

    /// Look up a preset by exact (case-sensitive) name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }

    /// Comma-separated list of every preset name.
    pub fn known_names() -> String {
        Self::ALL.map(|m| m.name()).join(", ")
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Material {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ConfigError::UnknownMaterial {
            name: s.to_string(),
            known: Self::known_names(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_strictly_ascending() {
        for material in Material::ALL {
            let temps = material.nozzle_temps();
            assert!(!temps.is_empty(), "{material} has no temperatures");
            assert!(
                temps.windows(2).all(|w| w[0] < w[1]),
                "{material} is not strictly ascending"
            );
        }
    }

    #[test]
    fn test_pla_sweep() {
        assert_eq!(
            Material::Pla.nozzle_temps(),
            &[190, 195, 200, 205, 210, 215, 220, 225, 230]
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(Material::from_name("PETG-CF"), Some(Material::PetgCf));
        assert_eq!(Material::from_name("pla"), None);
        assert_eq!("PETG".parse::<Material>(), Ok(Material::Petg));
    }

    #[test]
    fn test_unknown_material_lists_known() {
        let err = "ABS".parse::<Material>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown material preset 'ABS' (known presets: PLA, PETG, PETG-CF)"
        );
    }

    #[test]
    fn test_names_round_trip() {
        for material in Material::ALL {
            assert_eq!(material.to_string().parse::<Material>(), Ok(material));
        }
    }
}
