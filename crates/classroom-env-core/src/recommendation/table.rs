//! The fixed recommendation table.
//!
//! Rows are seasons, columns are times of day; each cell carries one range per
//! attribute. The array shape makes the table total over the legal domain.

use serde::{Deserialize, Serialize};

use crate::climate::{AttributeMap, Season, TimeOfDay};

/// Inclusive recommended range `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Inclusive membership test.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Midpoint rounded to one decimal place.
    pub fn midpoint(&self) -> f64 {
        round_to_tenth((self.min + self.max) / 2.0)
    }
}

/// Round to one decimal place, ties away from zero.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// The four ranges of one table cell.
pub type RangeSet = AttributeMap<Range>;

const fn cell(t: (f64, f64), h: (f64, f64), v: (f64, f64), l: (f64, f64)) -> RangeSet {
    AttributeMap::new(
        Range::new(t.0, t.1),
        Range::new(h.0, h.1),
        Range::new(v.0, v.1),
        Range::new(l.0, l.1),
    )
}

/// `RECOMMENDATIONS[season][time]`, in `Season::ALL` x `TimeOfDay::ALL` order.
pub static RECOMMENDATIONS: [[RangeSet; 3]; 4] = [
    // spring
    [
        cell((21.0, 23.0), (40.0, 50.0), (4.0, 5.0), (500.0, 550.0)),
        cell((22.0, 24.0), (45.0, 55.0), (5.0, 6.0), (550.0, 600.0)),
        cell((20.0, 22.0), (45.0, 55.0), (3.0, 4.0), (400.0, 450.0)),
    ],
    // summer
    [
        cell((24.0, 26.0), (50.0, 60.0), (6.0, 7.0), (450.0, 500.0)),
        cell((25.0, 27.0), (55.0, 65.0), (7.0, 8.0), (500.0, 550.0)),
        cell((24.0, 25.0), (55.0, 65.0), (5.0, 6.0), (400.0, 450.0)),
    ],
    // autumn
    [
        cell((21.0, 22.0), (45.0, 55.0), (4.0, 5.0), (500.0, 550.0)),
        cell((22.0, 23.0), (45.0, 55.0), (5.0, 6.0), (550.0, 600.0)),
        cell((20.0, 21.0), (40.0, 50.0), (4.0, 5.0), (420.0, 470.0)),
    ],
    // winter
    [
        cell((20.0, 22.0), (35.0, 45.0), (3.0, 4.0), (520.0, 580.0)),
        cell((21.0, 23.0), (35.0, 45.0), (4.0, 5.0), (540.0, 600.0)),
        cell((20.0, 22.0), (35.0, 45.0), (3.0, 4.0), (450.0, 500.0)),
    ],
];

/// Ranges for one season and time of day.
pub fn lookup(season: Season, time: TimeOfDay) -> &'static RangeSet {
    &RECOMMENDATIONS[season.index()][time.index()]
}
