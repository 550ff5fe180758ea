//! FILENAME: core/chart-config/src/definition.rs
//! Chart Configuration - The serializable description of a chart's data wiring.
//!
//! These structures are designed to be:
//! - Loaded from / saved to the chart JSON the editor produces
//! - Shared between the view layer and the parent controller
//! - Updated by structural sharing: sections and rows sit behind `Arc`, so a
//!   change to one row produces a new tree that reuses every untouched node

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::date_level::DateGranularity;
use crate::error::ConfigError;

/// Unique identifier of a field row inside a chart configuration.
pub type FieldUid = String;

// ============================================================================
// FIELD TYPES
// ============================================================================

/// Data type of a view column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataViewFieldType {
    String,
    Numeric,
    Date,
}

impl Default for DataViewFieldType {
    fn default() -> Self {
        DataViewFieldType::String
    }
}

/// Role of a data section in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChartDataSectionType {
    Group,
    Aggregate,
    Mixed,
    Filter,
    Color,
    Info,
    Size,
}

// ============================================================================
// FIELD ROWS
// ============================================================================

/// One field placed in a data section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataSectionField {
    pub uid: FieldUid,

    /// Column name the query selects (and the chart labels the axis with).
    pub col_name: String,

    #[serde(rename = "type", default)]
    pub field_type: DataViewFieldType,

    /// Source column the row is built on. Absent for plain columns, where it
    /// equals `col_name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_level: Option<DateGranularity>,

    /// Runtime date-level override chosen from the drill menu.
    /// At most one per row; a new choice replaces the slot.
    #[serde(
        rename = "RUNTIME_DATE_LEVEL",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub runtime_date_level: Option<Arc<ChartDataSectionField>>,
}

impl ChartDataSectionField {
    pub fn new(
        uid: impl Into<String>,
        col_name: impl Into<String>,
        field_type: DataViewFieldType,
    ) -> Self {
        ChartDataSectionField {
            uid: uid.into(),
            col_name: col_name.into(),
            field_type,
            field: None,
            expression: None,
            date_level: None,
            runtime_date_level: None,
        }
    }

    pub fn is_date(&self) -> bool {
        self.field_type == DataViewFieldType::Date
    }

    /// The source column this row reads from.
    pub fn source_column(&self) -> &str {
        self.field.as_deref().unwrap_or(&self.col_name)
    }

    /// The configuration currently in effect: the runtime override if one is
    /// set, else the row itself.
    pub fn effective(&self) -> &ChartDataSectionField {
        self.runtime_date_level.as_deref().unwrap_or(self)
    }

    pub fn effective_col_name(&self) -> &str {
        &self.effective().col_name
    }

    /// Builds the override config that re-buckets this field at `level`.
    pub fn with_date_level(&self, level: DateGranularity) -> ChartDataSectionField {
        let source = self.source_column().to_string();
        ChartDataSectionField {
            uid: self.uid.clone(),
            col_name: format!("{}({})", source, level.display_name()),
            field_type: self.field_type,
            expression: Some(format!("{}({})", level.function_name(), source)),
            field: Some(source),
            date_level: Some(level),
            runtime_date_level: None,
        }
    }
}

// ============================================================================
// DATA SECTIONS
// ============================================================================

/// An ordered group of field rows with a role (GROUP, AGGREGATE, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataSection {
    pub key: String,

    #[serde(default)]
    pub label: String,

    #[serde(rename = "type")]
    pub section_type: ChartDataSectionType,

    #[serde(default)]
    pub rows: Vec<Arc<ChartDataSectionField>>,

    /// Column name that was in effect before the last runtime date-level
    /// change, so the controller can detect the substitution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replaced_col_name: Option<String>,
}

impl ChartDataSection {
    pub fn new(key: impl Into<String>, section_type: ChartDataSectionType) -> Self {
        let key = key.into();
        ChartDataSection {
            label: key.clone(),
            key,
            section_type,
            rows: Vec::new(),
            replaced_col_name: None,
        }
    }

    pub fn with_rows(mut self, rows: Vec<ChartDataSectionField>) -> Self {
        self.rows = rows.into_iter().map(Arc::new).collect();
        self
    }

    pub fn find_row(&self, uid: &str) -> Option<&Arc<ChartDataSectionField>> {
        self.rows.iter().find(|row| row.uid == uid)
    }

    /// Replaces the runtime date-level override of the row `config.uid` and
    /// records the previously effective column name in `replaced_col_name`.
    ///
    /// Only the touched row is copied; the other rows keep their `Arc`.
    /// Returns the previously effective column name.
    pub fn set_runtime_date_level(
        &mut self,
        config: ChartDataSectionField,
    ) -> Result<String, ConfigError> {
        let index = self
            .rows
            .iter()
            .position(|row| row.uid == config.uid)
            .ok_or_else(|| ConfigError::FieldNotFound(config.uid.clone()))?;

        let row = Arc::make_mut(&mut self.rows[index]);
        let replaced_col_name = row.effective_col_name().to_string();
        row.runtime_date_level = Some(Arc::new(config));
        self.replaced_col_name = Some(replaced_col_name.clone());

        Ok(replaced_col_name)
    }
}

// ============================================================================
// CHART CONFIG
// ============================================================================

/// The data half of a chart configuration: its ordered data sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    #[serde(default)]
    pub datas: Vec<Arc<ChartDataSection>>,
}

impl ChartConfig {
    pub fn new(datas: Vec<ChartDataSection>) -> Self {
        ChartConfig {
            datas: datas.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// The section designated GROUP (the first one, if several are tagged).
    pub fn group_section(&self) -> Option<&Arc<ChartDataSection>> {
        self.datas
            .iter()
            .find(|section| section.section_type == ChartDataSectionType::Group)
    }

    /// Applies a section change coming back from the drill menu.
    /// The section with the same key is swapped; all others are shared.
    pub fn apply_data_change(
        &self,
        change: &DataSectionChange,
    ) -> Result<ChartConfig, ConfigError> {
        let key = &change.value.key;
        let index = self
            .datas
            .iter()
            .position(|section| &section.key == key)
            .ok_or_else(|| ConfigError::SectionNotFound(key.clone()))?;

        let mut datas = self.datas.clone();
        datas[index] = Arc::clone(&change.value);
        Ok(ChartConfig { datas })
    }
}

// ============================================================================
// CHANGE PAYLOADS
// ============================================================================

/// Which part of the chart a change notification refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChangeKind {
    Data,
}

/// Payload of a data-section change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSectionChange {
    /// The effective column changed, so the data must be fetched again.
    pub need_refresh: bool,
    pub ancestors: Vec<usize>,
    pub value: Arc<ChartDataSection>,
}
