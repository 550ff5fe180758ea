//! FILENAME: core/drill-menu/src/lib.rs
//! Drill context menu for charts.
//!
//! A headless view: it reads the drill state and chart configuration the
//! parent owns, describes which drill actions are valid right now, and turns
//! a selection back into a single drill-state call or a new GROUP section.
//!
//! Layers:
//! - `context`: Inputs from the parent (drill state, handler, options)
//! - `view_model`: Derived values (WHAT is currently possible)
//! - `menu`: Renderable menu description (WHAT we display)
//! - `date_level_menu`: Granularity choices for date fields
//! - `view`: Render + dispatch (HOW clicks become state changes)

pub mod context;
pub mod view_model;
pub mod menu;
pub mod date_level_menu;
pub mod view;

pub use context::{DrillMenuContext, DrillMenuHandler, DrillMenuOptions, NoopDrillMenuHandler};
pub use view_model::{runtime_date_level_fields, DrillMenuViewModel};
pub use menu::{
    ContextMenu, DrillMenuRender, MenuAttachment, MenuEntry, MenuKey, MenuTrigger,
    LABEL_EXPAND_NEXT_LEVEL, LABEL_ROLL_UP, LABEL_SELECT_DRILL_OFF, LABEL_SELECT_DRILL_ON,
    LABEL_SHOW_NEXT_LEVEL,
};
pub use date_level_menu::{build_date_level_menu_items, DateLevelMenuItem};
pub use view::DrillMenuView;
