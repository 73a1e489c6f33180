//! Temperature set resolution.

use crate::error::ConfigError;
use crate::material::Material;

/// Nozzle temperature in degrees Celsius.
pub type Temperature = i32;

/// Where the temperatures to render come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemperatureSource {
    /// A built-in material preset, by name.
    Preset(String),
    /// A caller-supplied list, rendered in the given order.
    Explicit(Vec<Temperature>),
}

/// Ordered, non-empty, duplicate-free list of temperatures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemperatureSet {
    temps: Vec<Temperature>,
}

impl TemperatureSet {
    /// Resolve a temperature source into a set.
    pub fn resolve(source: TemperatureSource) -> Result<Self, ConfigError> {
        match source {
            TemperatureSource::Preset(name) => Self::from_preset(&name),
            TemperatureSource::Explicit(temps) => Self::from_list(temps),
        }
    }

    /// Temperatures of a built-in preset. The name is case-sensitive.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        let material: Material = name.parse()?;
        Ok(Self::from(material))
    }

    /// Temperatures from an explicit list.
    ///
    /// Order is preserved; a repeated value is kept only at its first
    /// position.
    pub fn from_list(temps: Vec<Temperature>) -> Result<Self, ConfigError> {
        if temps.is_empty() {
            return Err(ConfigError::NoTemperatures);
        }

        let mut unique = Vec::with_capacity(temps.len());
        for temp in temps {
            if unique.contains(&temp) {
                tracing::warn!(temp, "ignoring duplicate temperature");
            } else {
                unique.push(temp);
            }
        }

        tracing::debug!(temps = ?unique, "resolved explicit temperatures");
        Ok(Self { temps: unique })
    }

    /// Iterate over the temperatures in render order.
    pub fn iter(&self) -> impl Iterator<Item = Temperature> + '_ {
        self.temps.iter().copied()
    }

    /// Number of temperatures. Never zero.
    pub fn len(&self) -> usize {
        self.temps.len()
    }

    /// Whether the set is empty (never, once resolved).
    pub fn is_empty(&self) -> bool {
        self.temps.is_empty()
    }

    /// Temperatures as a slice.
    pub fn as_slice(&self) -> &[Temperature] {
        &self.temps
    }
}

impl From<Material> for TemperatureSet {
    fn from(material: Material) -> Self {
        tracing::debug!(%material, "resolved preset temperatures");
        Self {
            temps: material.nozzle_temps().to_vec(),
        }
    }
}

impl<'a> IntoIterator for &'a TemperatureSet {
    type Item = Temperature;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Temperature>>;

    fn into_iter(self) -> Self::IntoIter {
        self.temps.iter().copied()
    }
}
