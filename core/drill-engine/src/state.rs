//! FILENAME: core/drill-engine/src/state.rs
//! The drill-state capability set consumed by views.
//!
//! Views never see a concrete drill object. They query and mutate it through
//! [`DrillState`], while the parent controller owns the value and decides what
//! to do after each change notification.

use std::sync::Arc;

use chart_config::ChartDataSectionField;
use serde::{Deserialize, Serialize};

/// How the hierarchy is being explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DrillMode {
    /// At the root level; neither drilled nor expanded.
    Normal,
    /// Replace the current level with the next one (one level visible).
    Drill,
    /// Add the next level under the current ones (all levels visible).
    Expand,
}

impl Default for DrillMode {
    fn default() -> Self {
        DrillMode::Normal
    }
}

/// Drill level, hierarchy fields and the four mutators.
///
/// Mutators change the state in place; callers must re-read the queries
/// afterwards.
pub trait DrillState {
    /// Depth below the root, if the state tracks one. `Some(0)` is the root.
    fn current_drill_level(&self) -> Option<usize>;

    /// The full ordered hierarchy.
    fn all_fields(&self) -> &[Arc<ChartDataSectionField>];

    /// Fields active at the current level, or `None` at the root.
    fn current_fields(&self) -> Option<Vec<Arc<ChartDataSectionField>>>;

    fn is_selected_drill(&self) -> bool;

    fn is_bottom_level(&self) -> bool;

    fn is_drillable(&self) -> bool;

    fn mode(&self) -> DrillMode;

    fn drill_down(&mut self);

    fn expand_down(&mut self);

    fn roll_up(&mut self);

    fn toggle_selected_drill(&mut self, enable: bool);
}
