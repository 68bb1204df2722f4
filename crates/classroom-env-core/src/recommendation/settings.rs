//! Live control values.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::climate::{Attribute, AttributeMap};
use crate::error::{CoreError, Result};

/// Snapshot of the four control values, always fully populated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrentSettings(AttributeMap<f64>);

impl CurrentSettings {
    pub fn new(temperature: f64, humidity: f64, ventilation: f64, lighting: f64) -> Self {
        Self(AttributeMap::new(temperature, humidity, ventilation, lighting))
    }

    /// Build a snapshot from a possibly partial map.
    ///
    /// # Errors
    ///
    /// Returns `MissingAttributeValue` for the first attribute (in
    /// `Attribute::ALL` order) that has no value.
    pub fn from_map(values: &HashMap<Attribute, f64>) -> Result<Self> {
        let mut out = AttributeMap::new(0.0, 0.0, 0.0, 0.0);
        for attr in Attribute::ALL {
            out[attr] = *values
                .get(&attr)
                .ok_or(CoreError::MissingAttributeValue(attr))?;
        }
        Ok(Self(out))
    }

    pub fn get(&self, attr: Attribute) -> f64 {
        self.0[attr]
    }

    pub fn set(&mut self, attr: Attribute, value: f64) {
        self.0[attr] = value;
    }

    pub fn values(&self) -> &AttributeMap<f64> {
        &self.0
    }
}

impl From<AttributeMap<f64>> for CurrentSettings {
    fn from(values: AttributeMap<f64>) -> Self {
        Self(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_map_complete() {
        let values: HashMap<Attribute, f64> = [
            (Attribute::Temperature, 22.0),
            (Attribute::Humidity, 45.0),
            (Attribute::Ventilation, 4.0),
            (Attribute::Lighting, 520.0),
        ]
        .into_iter()
        .collect();

        let settings = CurrentSettings::from_map(&values).unwrap();
        assert_eq!(settings, CurrentSettings::new(22.0, 45.0, 4.0, 520.0));
    }

    #[test]
    fn test_from_map_missing_attribute() {
        let values: HashMap<Attribute, f64> = [
            (Attribute::Temperature, 22.0),
            (Attribute::Humidity, 45.0),
            (Attribute::Lighting, 520.0),
        ]
        .into_iter()
        .collect();

        let err = CurrentSettings::from_map(&values).unwrap_err();
        assert!(matches!(
            err,
            CoreError::MissingAttributeValue(Attribute::Ventilation)
        ));
    }

    #[test]
    fn test_set_and_get() {
        let mut settings = CurrentSettings::new(22.0, 45.0, 4.0, 520.0);
        settings.set(Attribute::Humidity, 60.0);
        assert_eq!(settings.get(Attribute::Humidity), 60.0);
        assert_eq!(settings.values().humidity, 60.0);
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let settings = CurrentSettings::new(22.0, 45.0, 4.0, 520.0);
        let json = serde_json::to_value(settings).unwrap();
        assert_eq!(json["temperature"], 22.0);
        assert_eq!(json["lighting"], 520.0);
    }
}
