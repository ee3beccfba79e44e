use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use strum::{Display, EnumIter, IntoEnumIterator};

// ============================================================================
// Calendar windows
// ============================================================================

/// Business hours, inclusive on both ends (08:00-18:59)
pub const BUSINESS_HOURS: RangeInclusive<u8> = 8..=18;

/// Night window treated as presumptively avoidable load (00:00-06:59)
pub const NIGHT_HOURS: RangeInclusive<u8> = 0..=6;

/// First weekday index (Monday = 0) counted as weekend
pub const FIRST_WEEKEND_DAY: u8 = 5;

/// Round to two decimals, the precision every reported figure uses.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// Organisational units
// ============================================================================

/// Corporate department a metering record is attributed to.
///
/// Declaration order doubles as the tie-break order when two departments
/// share the same average consumption.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Department {
    It,
    Admin,
    Sales,
    Hr,
}

impl Department {
    pub const COUNT: usize = 4;

    pub fn all() -> Vec<Department> {
        Department::iter().collect()
    }
}

/// Office floors span 1..=4
pub const FLOORS: RangeInclusive<u8> = 1..=4;
