//! FILENAME: core/drill-engine/src/option.rs
//! Chart Drill Option - the default drill state.
//!
//! Tracks a cursor into an ordered list of GROUP fields:
//! - cursor `None` is the root (only the first field is grouped on)
//! - drilling moves the cursor down and shows only the next field, filtered
//!   by the value that was clicked on the level above
//! - expanding moves the cursor down and keeps every level up to the next
//!
//! A state is either drilling or expanding, never both. Rolling back to the
//! root resets it to `Normal`.

use std::sync::Arc;

use chart_config::{log_debug, ChartDataSectionField};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::state::{DrillMode, DrillState};

// ============================================================================
// PATH ENTRIES
// ============================================================================

/// Filter produced by drilling from a clicked data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillCondition {
    /// Column the filter applies to.
    pub col_name: String,
    /// Values kept (the clicked value, usually a single one).
    pub values: Vec<String>,
}

impl DrillCondition {
    pub fn new(col_name: impl Into<String>, value: impl Into<String>) -> Self {
        DrillCondition {
            col_name: col_name.into(),
            values: vec![value.into()],
        }
    }
}

/// One step taken down the hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillPathEntry {
    /// The field the step was taken from.
    pub field: Arc<ChartDataSectionField>,
    /// Filter on that field (drill mode only).
    pub condition: Option<DrillCondition>,
}

type DrillPath = SmallVec<[DrillPathEntry; 4]>;

// ============================================================================
// CHART DRILL OPTION
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartDrillOption {
    fields: Vec<Arc<ChartDataSectionField>>,
    cursor: Option<usize>,
    mode: DrillMode,
    selected: bool,
    drill_down_fields: DrillPath,
    expand_down_fields: DrillPath,
}

impl ChartDrillOption {
    pub fn new(fields: Vec<Arc<ChartDataSectionField>>) -> Self {
        ChartDrillOption {
            fields,
            ..Default::default()
        }
    }

    /// Steps taken in drill mode, outermost first.
    pub fn drill_down_fields(&self) -> &[DrillPathEntry] {
        &self.drill_down_fields
    }

    /// Steps taken in expand mode, outermost first.
    pub fn expand_down_fields(&self) -> &[DrillPathEntry] {
        &self.expand_down_fields
    }

    fn level(&self) -> usize {
        self.cursor.map_or(0, |cursor| cursor + 1)
    }

    fn has_next_level(&self) -> bool {
        self.level() + 1 < self.fields.len()
    }

    /// Drills one level down, optionally filtering on a clicked value.
    pub fn drill_down_with(&mut self, condition: Option<DrillCondition>) {
        if !self.has_next_level() {
            return;
        }
        if self.mode == DrillMode::Normal {
            self.mode = DrillMode::Drill;
        }
        if self.mode != DrillMode::Drill {
            return;
        }

        let cursor = self.level();
        let field = Arc::clone(&self.fields[cursor]);
        self.cursor = Some(cursor);
        self.drill_down_fields.push(DrillPathEntry { field, condition });

        log_debug!(
            "DRILL",
            "drill_down level={} path_len={}",
            self.level(),
            self.drill_down_fields.len()
        );
    }

    /// Rolls back to just above the path entry for `uid`.
    /// The first entry means back to the root. Unknown uids are ignored.
    pub fn roll_up_to(&mut self, uid: &str) {
        match self.mode {
            DrillMode::Drill => {
                Self::truncate_path(&mut self.drill_down_fields, &mut self.cursor, Some(uid))
            }
            DrillMode::Expand => {
                Self::truncate_path(&mut self.expand_down_fields, &mut self.cursor, Some(uid))
            }
            DrillMode::Normal => return,
        }
        if self.cursor.is_none() {
            self.clear_all();
        }

        log_debug!("DRILL", "roll_up_to uid={} level={}", uid, self.level());
    }

    /// Back to the root, forgetting both paths and the mode.
    pub fn clear_all(&mut self) {
        self.cursor = None;
        self.mode = DrillMode::Normal;
        self.drill_down_fields.clear();
        self.expand_down_fields.clear();
    }

    fn truncate_path(path: &mut DrillPath, cursor: &mut Option<usize>, uid: Option<&str>) {
        let Some(current) = *cursor else {
            return;
        };

        match uid {
            Some(uid) => {
                let Some(index) = path.iter().position(|entry| entry.field.uid == uid) else {
                    return;
                };
                path.truncate(index);
                *cursor = index.checked_sub(1);
            }
            None => {
                path.pop();
                *cursor = current.checked_sub(1);
            }
        }
    }
}

impl DrillState for ChartDrillOption {
    fn current_drill_level(&self) -> Option<usize> {
        Some(self.level())
    }

    fn all_fields(&self) -> &[Arc<ChartDataSectionField>] {
        &self.fields
    }

    fn current_fields(&self) -> Option<Vec<Arc<ChartDataSectionField>>> {
        let cursor = self.cursor?;
        let fields = match self.mode {
            DrillMode::Drill => self.fields.get(cursor + 1).cloned().into_iter().collect(),
            _ => self.fields.iter().take(cursor + 2).cloned().collect(),
        };
        Some(fields)
    }

    fn is_selected_drill(&self) -> bool {
        self.selected
    }

    fn is_bottom_level(&self) -> bool {
        !self.has_next_level()
    }

    fn is_drillable(&self) -> bool {
        self.fields.len() > 1
    }

    fn mode(&self) -> DrillMode {
        self.mode
    }

    fn drill_down(&mut self) {
        self.drill_down_with(None);
    }

    fn expand_down(&mut self) {
        if !self.has_next_level() {
            return;
        }
        if self.mode == DrillMode::Normal {
            self.mode = DrillMode::Expand;
        }
        if self.mode != DrillMode::Expand {
            return;
        }

        let cursor = self.level();
        let field = Arc::clone(&self.fields[cursor]);
        self.cursor = Some(cursor);
        self.expand_down_fields.push(DrillPathEntry { field, condition: None });

        log_debug!("DRILL", "expand_down level={}", self.level());
    }

    fn roll_up(&mut self) {
        match self.mode {
            DrillMode::Drill => {
                Self::truncate_path(&mut self.drill_down_fields, &mut self.cursor, None)
            }
            DrillMode::Expand => {
                Self::truncate_path(&mut self.expand_down_fields, &mut self.cursor, None)
            }
            DrillMode::Normal => return,
        }
        if self.cursor.is_none() {
            self.clear_all();
        }

        log_debug!("DRILL", "roll_up level={} mode={:?}", self.level(), self.mode);
    }

    fn toggle_selected_drill(&mut self, enable: bool) {
        self.selected = enable;
        log_debug!("DRILL", "toggle_selected_drill enable={}", enable);
    }
}
