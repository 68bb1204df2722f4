//! Preset computation and range evaluation.

use serde::{Deserialize, Serialize};

use super::settings::CurrentSettings;
use super::table::{self, RangeSet};
use crate::climate::{AttributeMap, Season, TimeOfDay};

/// Which way a control should move to get back into range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Increase,
    Decrease,
}

/// Classification of one current value against its recommended range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EvalResult {
    InRange,
    Adjust { direction: Direction },
}

impl EvalResult {
    pub fn is_in_range(&self) -> bool {
        matches!(self, EvalResult::InRange)
    }
}

/// Preset value per attribute.
pub type Preset = AttributeMap<f64>;

/// Evaluation result per attribute.
pub type Evaluation = AttributeMap<EvalResult>;

/// The fixed ranges for a season and time of day.
pub fn lookup(season: Season, time: TimeOfDay) -> &'static RangeSet {
    table::lookup(season, time)
}

/// Midpoint of each recommended range, rounded to one decimal.
pub fn compute_preset(season: Season, time: TimeOfDay) -> Preset {
    let preset = lookup(season, time).map(|_, range| range.midpoint());
    tracing::debug!(%season, %time, ?preset, "computed preset");
    preset
}

/// Classify a single value. Bounds are inclusive.
pub fn classify(range: &table::Range, value: f64) -> EvalResult {
    if range.contains(value) {
        EvalResult::InRange
    } else if value < range.min {
        EvalResult::Adjust {
            direction: Direction::Increase,
        }
    } else {
        EvalResult::Adjust {
            direction: Direction::Decrease,
        }
    }
}

/// Classify every current value against the ranges of the given cell.
pub fn evaluate(season: Season, time: TimeOfDay, current: &CurrentSettings) -> Evaluation {
    let ranges = lookup(season, time);
    let evaluation = ranges.map(|attr, range| classify(range, current.get(attr)));
    tracing::debug!(
        %season,
        %time,
        in_range = evaluation.iter().filter(|(_, r)| r.is_in_range()).count(),
        "evaluated settings"
    );
    evaluation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::climate::Attribute;

    fn increase() -> EvalResult {
        EvalResult::Adjust {
            direction: Direction::Increase,
        }
    }

    fn decrease() -> EvalResult {
        EvalResult::Adjust {
            direction: Direction::Decrease,
        }
    }

    #[test]
    fn test_preset_spring_morning() {
        let preset = compute_preset(Season::Spring, TimeOfDay::Morning);
        assert_eq!(preset.temperature, 22.0);
        assert_eq!(preset.humidity, 45.0);
        assert_eq!(preset.ventilation, 4.5);
        assert_eq!(preset.lighting, 525.0);
    }

    #[test]
    fn test_preset_summer_evening_half_degree() {
        let preset = compute_preset(Season::Summer, TimeOfDay::Evening);
        assert_eq!(preset.temperature, 24.5);
    }

    #[test]
    fn test_summer_noon_too_cold() {
        let current = CurrentSettings::new(23.0, 60.0, 7.5, 520.0);
        let result = evaluate(Season::Summer, TimeOfDay::Noon, &current);
        assert_eq!(result.temperature, increase());
        assert_eq!(result.humidity, EvalResult::InRange);
    }

    #[test]
    fn test_winter_evening_humidity_in_range() {
        let current = CurrentSettings::new(21.0, 40.0, 3.5, 470.0);
        let result = evaluate(Season::Winter, TimeOfDay::Evening, &current);
        assert_eq!(result[Attribute::Humidity], EvalResult::InRange);
    }

    #[test]
    fn test_autumn_noon_too_bright() {
        let current = CurrentSettings::new(22.5, 50.0, 5.5, 700.0);
        let result = evaluate(Season::Autumn, TimeOfDay::Noon, &current);
        assert_eq!(result.lighting, decrease());
    }

    #[test]
    fn test_boundaries_are_in_range() {
        let range = table::Range::new(20.0, 22.0);
        assert_eq!(classify(&range, 20.0), EvalResult::InRange);
        assert_eq!(classify(&range, 22.0), EvalResult::InRange);
        assert_eq!(classify(&range, 19.99), increase());
        assert_eq!(classify(&range, 22.01), decrease());
    }

    #[test]
    fn test_eval_result_serde_shape() {
        let json = serde_json::to_value(decrease()).unwrap();
        assert_eq!(json["status"], "adjust");
        assert_eq!(json["direction"], "decrease");
        let json = serde_json::to_value(EvalResult::InRange).unwrap();
        assert_eq!(json["status"], "in_range");
    }
}
