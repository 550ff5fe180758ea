//! FILENAME: core/drill-menu/src/context.rs
// PURPOSE: What the parent controller hands the drill menu.
// CONTEXT: The drill state and the chart configuration are owned by the
//          parent. The menu borrows them for one render/dispatch pass and
//          reports back through `DrillMenuHandler`.

use chart_config::{ChangeKind, DataSectionChange, DateGranularity};
use drill_engine::DrillState;
use serde::{Deserialize, Serialize};

/// Callbacks the parent supplies. Both default to doing nothing.
pub trait DrillMenuHandler {
    /// Called once after every drill mutation, with the mutated state.
    fn on_drill_option_change(&mut self, _state: &dyn DrillState) {}

    /// Called when a runtime date level was picked. The payload carries a new
    /// GROUP section; the existing config is left as it was.
    fn on_date_level_change(&mut self, _kind: ChangeKind, _payload: DataSectionChange) {}
}

/// Handler for parents that do not listen to the menu.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDrillMenuHandler;

impl DrillMenuHandler for NoopDrillMenuHandler {}

/// Deserializable menu options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrillMenuOptions {
    /// Source functions the data source supports, used to decide which date
    /// granularities the sub-menus offer.
    #[serde(default = "default_source_functions")]
    pub available_source_functions: Vec<String>,
}

fn default_source_functions() -> Vec<String> {
    DateGranularity::all_function_names()
}

impl Default for DrillMenuOptions {
    fn default() -> Self {
        DrillMenuOptions {
            available_source_functions: default_source_functions(),
        }
    }
}

/// Shared drill UI state for one chart.
pub struct DrillMenuContext<'a> {
    pub drill_option: Option<&'a mut dyn DrillState>,
    pub handler: &'a mut dyn DrillMenuHandler,
    pub options: DrillMenuOptions,
}

impl<'a> DrillMenuContext<'a> {
    pub fn new(
        drill_option: Option<&'a mut dyn DrillState>,
        handler: &'a mut dyn DrillMenuHandler,
    ) -> Self {
        DrillMenuContext {
            drill_option,
            handler,
            options: DrillMenuOptions::default(),
        }
    }

    pub fn with_options(mut self, options: DrillMenuOptions) -> Self {
        self.options = options;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default_to_every_date_function() {
        let options: DrillMenuOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, DrillMenuOptions::default());
        assert_eq!(options.available_source_functions.len(), 5);
    }

    #[test]
    fn test_options_from_json() {
        let options: DrillMenuOptions =
            serde_json::from_str(r#"{ "availableSourceFunctions": ["AGG_DATE_YEAR"] }"#).unwrap();
        assert_eq!(options.available_source_functions, vec!["AGG_DATE_YEAR".to_string()]);
    }
}
