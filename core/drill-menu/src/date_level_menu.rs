//! FILENAME: core/drill-menu/src/date_level_menu.rs
// PURPOSE: Granularity choices for one date field's sub-menu.

use chart_config::{ChartDataSectionField, DateGranularity};
use serde::{Deserialize, Serialize};

const DATE_LEVEL_I18N_PREFIX: &str = "viz.date";

/// One selectable granularity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateLevelMenuItem {
    pub granularity: DateGranularity,
    pub function_name: String,
    pub label_key: String,
    /// The seeded config is already at this granularity.
    pub checked: bool,
}

impl DateLevelMenuItem {
    /// The override config produced by picking this item for `field`.
    pub fn select(&self, field: &ChartDataSectionField) -> ChartDataSectionField {
        field.with_date_level(self.granularity)
    }
}

/// Lists the granularities whose source function is available, coarsest
/// first, marking the one `config` currently uses.
pub fn build_date_level_menu_items(
    available_functions: &[String],
    config: &ChartDataSectionField,
) -> Vec<DateLevelMenuItem> {
    DateGranularity::ALL
        .into_iter()
        .filter(|level| {
            available_functions
                .iter()
                .any(|name| DateGranularity::from_function_name(name) == Some(*level))
        })
        .map(|level| DateLevelMenuItem {
            granularity: level,
            function_name: level.function_name().to_string(),
            label_key: format!("{}.{}", DATE_LEVEL_I18N_PREFIX, level.label_key()),
            checked: config.date_level == Some(level),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chart_config::DataViewFieldType;

    #[test]
    fn test_only_available_functions_are_offered() {
        let field = ChartDataSectionField::new("a", "order_date", DataViewFieldType::Date);
        let available = vec![
            "AGG_DATE_MONTH".to_string(),
            "AGG_DATE_YEAR".to_string(),
            "SUM".to_string(),
        ];

        let items = build_date_level_menu_items(&available, &field);

        let levels: Vec<_> = items.iter().map(|item| item.granularity).collect();
        assert_eq!(levels, vec![DateGranularity::Year, DateGranularity::Month]);
        assert!(items.iter().all(|item| !item.checked));
        assert_eq!(items[0].label_key, "viz.date.year");
    }

    #[test]
    fn test_current_level_is_checked() {
        let field = ChartDataSectionField::new("a", "order_date", DataViewFieldType::Date)
            .with_date_level(DateGranularity::Quarter);

        let items = build_date_level_menu_items(&DateGranularity::all_function_names(), &field);

        let checked: Vec<_> = items.iter().filter(|item| item.checked).collect();
        assert_eq!(checked.len(), 1);
        assert_eq!(checked[0].granularity, DateGranularity::Quarter);
    }

    #[test]
    fn test_select_builds_override() {
        let field = ChartDataSectionField::new("a", "order_date", DataViewFieldType::Date);
        let items = build_date_level_menu_items(&DateGranularity::all_function_names(), &field);

        let week = items.iter().find(|item| item.granularity == DateGranularity::Week).unwrap();
        let config = week.select(&field);

        assert_eq!(config.uid, "a");
        assert_eq!(config.expression.as_deref(), Some("AGG_DATE_WEEK(order_date)"));
    }
}
