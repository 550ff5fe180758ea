//! FILENAME: core/chart-config/src/field_helpers.rs
// PURPOSE: Pure helpers that pick field rows out of a section.

use std::sync::Arc;

use crate::definition::ChartDataSectionField;

/// Keeps only the rows eligible for a runtime date-level choice (DATE rows).
/// Absent rows yield an empty list.
pub fn get_runtime_date_level_fields(
    rows: Option<&[Arc<ChartDataSectionField>]>,
) -> Vec<Arc<ChartDataSectionField>> {
    rows.unwrap_or_default()
        .iter()
        .filter(|row| row.is_date())
        .cloned()
        .collect()
}
