//! FILENAME: core/drill-menu/src/view_model.rs
//! Drill Menu View Model - values derived from the drill state and config.
//!
//! Everything here is a pure function of the inputs and is recomputed on
//! each render, so a stale copy is never needed for correctness.

use std::sync::Arc;

use chart_config::{get_runtime_date_level_fields, ChartConfig, ChartDataSectionField};
use drill_engine::{DrillMode, DrillState};
use rustc_hash::FxHashSet;

#[derive(Debug, Clone, PartialEq)]
pub struct DrillMenuViewModel {
    pub has_drill_option: bool,

    /// Depth below the root; `Some(0)` and `None` both mean "at the root".
    pub current_drill_level: Option<usize>,

    /// GROUP rows on the active level that accept a runtime date level.
    /// `None` when there is no drill state.
    pub runtime_date_level_fields: Option<Vec<Arc<ChartDataSectionField>>>,

    /// Whether the context menu is attached at all.
    pub has_context_menu: bool,

    pub mode: Option<DrillMode>,
    pub is_bottom_level: bool,
    pub is_drillable: bool,
    pub is_selected_drill: bool,
}

impl DrillMenuViewModel {
    pub fn derive(drill: Option<&dyn DrillState>, chart_config: Option<&ChartConfig>) -> Self {
        let Some(drill) = drill else {
            return DrillMenuViewModel {
                has_drill_option: false,
                current_drill_level: None,
                runtime_date_level_fields: None,
                has_context_menu: false,
                mode: None,
                is_bottom_level: false,
                is_drillable: false,
                is_selected_drill: false,
            };
        };

        let fields = runtime_date_level_fields(drill, chart_config);
        let has_context_menu = drill.is_drillable() || !fields.is_empty();

        DrillMenuViewModel {
            has_drill_option: true,
            current_drill_level: drill.current_drill_level(),
            runtime_date_level_fields: Some(fields),
            has_context_menu,
            mode: Some(drill.mode()),
            is_bottom_level: drill.is_bottom_level(),
            is_drillable: drill.is_drillable(),
            is_selected_drill: drill.is_selected_drill(),
        }
    }

    /// A level below the root is active.
    pub fn can_roll_up(&self) -> bool {
        matches!(self.current_drill_level, Some(level) if level > 0)
    }

    pub fn shows_drill(&self) -> bool {
        self.mode != Some(DrillMode::Expand) && !self.is_bottom_level
    }

    pub fn shows_expand(&self) -> bool {
        self.mode != Some(DrillMode::Drill) && !self.is_bottom_level
    }

    pub fn shows_select_drill_toggle(&self) -> bool {
        self.mode != Some(DrillMode::Expand)
    }

    pub fn date_level_field(&self, index: usize) -> Option<&Arc<ChartDataSectionField>> {
        self.runtime_date_level_fields.as_ref()?.get(index)
    }
}

/// GROUP rows that belong to the active drill level, narrowed to date rows.
///
/// With a non-empty set of current fields, rows are matched by uid against
/// them. Otherwise only the row of the first hierarchy field is considered.
/// An empty hierarchy gives no rows.
pub fn runtime_date_level_fields(
    drill: &dyn DrillState,
    chart_config: Option<&ChartConfig>,
) -> Vec<Arc<ChartDataSectionField>> {
    let group_section = chart_config.and_then(ChartConfig::group_section);

    let rows: Option<Vec<Arc<ChartDataSectionField>>> = group_section.map(|section| {
        match drill.current_fields() {
            Some(current) if !current.is_empty() => {
                let uids: FxHashSet<&str> =
                    current.iter().map(|field| field.uid.as_str()).collect();
                section
                    .rows
                    .iter()
                    .filter(|row| uids.contains(row.uid.as_str()))
                    .cloned()
                    .collect()
            }
            _ => match drill.all_fields().first() {
                Some(first) => section
                    .rows
                    .iter()
                    .filter(|row| row.uid == first.uid)
                    .cloned()
                    .collect(),
                None => Vec::new(),
            },
        }
    });

    get_runtime_date_level_fields(rows.as_deref())
}
