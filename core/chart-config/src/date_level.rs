//! FILENAME: core/chart-config/src/date_level.rs
//! Date granularity catalogue.
//!
//! A date field in the GROUP section can be re-bucketed at runtime by wrapping
//! its source column in one of the date aggregation functions below. The
//! function names are what the data source advertises as "available source
//! functions"; the menu only offers granularities whose function is present.

use serde::{Deserialize, Serialize};

/// Levels a date field can be grouped by, coarsest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateGranularity {
    Year,
    Quarter,
    Month,
    Week,
    Day,
}

impl DateGranularity {
    /// Every granularity in menu order.
    pub const ALL: [DateGranularity; 5] = [
        DateGranularity::Year,
        DateGranularity::Quarter,
        DateGranularity::Month,
        DateGranularity::Week,
        DateGranularity::Day,
    ];

    /// Name of the source function that buckets a date column at this level.
    pub fn function_name(self) -> &'static str {
        match self {
            DateGranularity::Year => "AGG_DATE_YEAR",
            DateGranularity::Quarter => "AGG_DATE_QUARTER",
            DateGranularity::Month => "AGG_DATE_MONTH",
            DateGranularity::Week => "AGG_DATE_WEEK",
            DateGranularity::Day => "AGG_DATE_DAY",
        }
    }

    pub fn from_function_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.function_name().eq_ignore_ascii_case(name))
    }

    /// Human-readable suffix used when naming the runtime column.
    pub fn display_name(self) -> &'static str {
        match self {
            DateGranularity::Year => "Year",
            DateGranularity::Quarter => "Quarter",
            DateGranularity::Month => "Month",
            DateGranularity::Week => "Week",
            DateGranularity::Day => "Day",
        }
    }

    /// i18n key of the menu label (relative to the date-level prefix).
    pub fn label_key(self) -> &'static str {
        match self {
            DateGranularity::Year => "year",
            DateGranularity::Quarter => "quarter",
            DateGranularity::Month => "month",
            DateGranularity::Week => "week",
            DateGranularity::Day => "day",
        }
    }

    /// Function names for every granularity, e.g. as a default capability set.
    pub fn all_function_names() -> Vec<String> {
        Self::ALL
            .iter()
            .map(|level| level.function_name().to_string())
            .collect()
    }
}
