//! FILENAME: core/drill-menu/src/menu.rs
//! Drill Menu - renderable description of the context menu.
//!
//! The host toolkit turns this into real widgets. Each entry carries a
//! stable key (fed back into the dispatcher on click) and an i18n label key.

use std::fmt;
use std::sync::Arc;

use chart_config::ChartDataSectionField;
use drill_engine::DrillMode;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::date_level_menu::DateLevelMenuItem;

pub const LABEL_ROLL_UP: &str = "viz.palette.drill.rollUp";
pub const LABEL_SHOW_NEXT_LEVEL: &str = "viz.palette.drill.showNextLevel";
pub const LABEL_EXPAND_NEXT_LEVEL: &str = "viz.palette.drill.expandNextLevel";
pub const LABEL_SELECT_DRILL_ON: &str = "viz.palette.drill.selectDrillOn";
pub const LABEL_SELECT_DRILL_OFF: &str = "viz.palette.drill.selectDrillOff";

// ============================================================================
// KEYS
// ============================================================================

/// Identity of a menu entry, as reported back by a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MenuKey {
    RollUp,
    Mode(DrillMode),
    SelectDrillStatus,
    /// Date-level sub-menu for the n-th runtime date field.
    SubMenu(usize),
}

impl fmt::Display for MenuKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuKey::RollUp => write!(f, "rollUp"),
            MenuKey::Mode(DrillMode::Drill) => write!(f, "drill"),
            MenuKey::Mode(DrillMode::Expand) => write!(f, "expand"),
            MenuKey::Mode(DrillMode::Normal) => write!(f, "normal"),
            MenuKey::SelectDrillStatus => write!(f, "selectDrillStatus"),
            MenuKey::SubMenu(index) => write!(f, "{}", index),
        }
    }
}

// ============================================================================
// ENTRIES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MenuEntry {
    /// Plain clickable row.
    Item { key: MenuKey, label_key: String },

    /// Row rendered as an on/off switch.
    Switch {
        key: MenuKey,
        on: bool,
        label_key: String,
    },

    /// Nested granularity choices for one date field.
    SubMenu {
        key: MenuKey,
        title: String,
        /// Config the choices are seeded with (the override if one is set).
        config: Arc<ChartDataSectionField>,
        items: Vec<DateLevelMenuItem>,
    },
}

impl MenuEntry {
    pub fn item(key: MenuKey, label_key: &str) -> Self {
        MenuEntry::Item {
            key,
            label_key: label_key.to_string(),
        }
    }

    pub fn key(&self) -> MenuKey {
        match self {
            MenuEntry::Item { key, .. }
            | MenuEntry::Switch { key, .. }
            | MenuEntry::SubMenu { key, .. } => *key,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextMenu {
    pub entries: SmallVec<[MenuEntry; 6]>,
}

impl ContextMenu {
    pub fn keys(&self) -> Vec<MenuKey> {
        self.entries.iter().map(MenuEntry::key).collect()
    }

    pub fn contains(&self, key: MenuKey) -> bool {
        self.entries.iter().any(|entry| entry.key() == key)
    }

    pub fn entry(&self, key: MenuKey) -> Option<&MenuEntry> {
        self.entries.iter().find(|entry| entry.key() == key)
    }
}

// ============================================================================
// ATTACHMENT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuTrigger {
    ContextMenu,
}

/// How the menu hooks onto the chart area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuAttachment {
    /// No menu; the chart renders bare.
    Detached,
    Attached {
        trigger: MenuTrigger,
        /// Trigger present but inert (no drill state).
        disabled: bool,
        /// Popup content is dropped when hidden.
        destroy_on_hide: bool,
    },
}

impl MenuAttachment {
    pub fn is_attached(&self) -> bool {
        matches!(self, MenuAttachment::Attached { .. })
    }
}

/// Output of one render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillMenuRender {
    pub attachment: MenuAttachment,
    pub menu: Option<ContextMenu>,
}
