//! Closed enumerations of the classroom climate domain.
//!
//! `Season`, `TimeOfDay` and `Attribute` are fixed sets; every table in the
//! crate is indexed by them so that coverage of all combinations is checked
//! by the compiler rather than at lookup time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [
        Season::Spring,
        Season::Summer,
        Season::Autumn,
        Season::Winter,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }

    /// Display name shown to students.
    pub fn display_name(&self) -> &'static str {
        match self {
            Season::Spring => "봄",
            Season::Summer => "여름",
            Season::Autumn => "가을",
            Season::Winter => "겨울",
        }
    }
}

impl FromStr for Season {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "autumn" | "fall" => Ok(Season::Autumn),
            "winter" => Ok(Season::Winter),
            _ => Err(CoreError::invalid("season", s)),
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Noon,
    Evening,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 3] = [TimeOfDay::Morning, TimeOfDay::Noon, TimeOfDay::Evening];

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Noon => "noon",
            TimeOfDay::Evening => "evening",
        }
    }

    /// Display name shown to students.
    pub fn display_name(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "아침",
            TimeOfDay::Noon => "점심",
            TimeOfDay::Evening => "저녁",
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "morning" => Ok(TimeOfDay::Morning),
            "noon" => Ok(TimeOfDay::Noon),
            "evening" => Ok(TimeOfDay::Evening),
            _ => Err(CoreError::invalid("time of day", s)),
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One of the four environmental controls in the classroom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    /// Degrees Celsius.
    Temperature,
    /// Relative humidity in percent.
    Humidity,
    /// Air changes per hour.
    Ventilation,
    /// Illuminance in lux.
    Lighting,
}

impl Attribute {
    pub const ALL: [Attribute; 4] = [
        Attribute::Temperature,
        Attribute::Humidity,
        Attribute::Ventilation,
        Attribute::Lighting,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Temperature => "temperature",
            Attribute::Humidity => "humidity",
            Attribute::Ventilation => "ventilation",
            Attribute::Lighting => "lighting",
        }
    }

    /// Unit suffix used when rendering a value of this attribute.
    pub fn unit(&self) -> &'static str {
        match self {
            Attribute::Temperature => "°C",
            Attribute::Humidity => "%",
            Attribute::Ventilation => "회",
            Attribute::Lighting => "lx",
        }
    }

    /// Label shown to students.
    pub fn label(&self) -> &'static str {
        match self {
            Attribute::Temperature => "온도",
            Attribute::Humidity => "습도",
            Attribute::Ventilation => "환기 횟수",
            Attribute::Lighting => "조명 밝기",
        }
    }
}

impl FromStr for Attribute {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "temperature" => Ok(Attribute::Temperature),
            "humidity" => Ok(Attribute::Humidity),
            "ventilation" => Ok(Attribute::Ventilation),
            "lighting" => Ok(Attribute::Lighting),
            _ => Err(CoreError::invalid("attribute", s)),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A value for every attribute.
///
/// Used for range sets, presets, settings snapshots and evaluation results
/// alike. Being a plain struct, it can never be missing an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttributeMap<T> {
    pub temperature: T,
    pub humidity: T,
    pub ventilation: T,
    pub lighting: T,
}

impl<T> AttributeMap<T> {
    pub const fn new(temperature: T, humidity: T, ventilation: T, lighting: T) -> Self {
        Self {
            temperature,
            humidity,
            ventilation,
            lighting,
        }
    }

    /// Build a map by computing each attribute's value.
    pub fn from_fn(mut f: impl FnMut(Attribute) -> T) -> Self {
        Self {
            temperature: f(Attribute::Temperature),
            humidity: f(Attribute::Humidity),
            ventilation: f(Attribute::Ventilation),
            lighting: f(Attribute::Lighting),
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(Attribute, &T) -> U) -> AttributeMap<U> {
        AttributeMap::from_fn(|attr| f(attr, &self[attr]))
    }

    /// Entries in `Attribute::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, &T)> {
        Attribute::ALL.into_iter().map(move |attr| (attr, &self[attr]))
    }
}

impl<T> Index<Attribute> for AttributeMap<T> {
    type Output = T;

    fn index(&self, attr: Attribute) -> &T {
        match attr {
            Attribute::Temperature => &self.temperature,
            Attribute::Humidity => &self.humidity,
            Attribute::Ventilation => &self.ventilation,
            Attribute::Lighting => &self.lighting,
        }
    }
}

impl<T> IndexMut<Attribute> for AttributeMap<T> {
    fn index_mut(&mut self, attr: Attribute) -> &mut T {
        match attr {
            Attribute::Temperature => &mut self.temperature,
            Attribute::Humidity => &mut self.humidity,
            Attribute::Ventilation => &mut self.ventilation,
            Attribute::Lighting => &mut self.lighting,
        }
    }
}
