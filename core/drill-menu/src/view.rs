//! FILENAME: core/drill-menu/src/view.rs
//! Drill Menu View - right-click menu for moving through the GROUP hierarchy.
//!
//! Each render derives a fresh view model and describes the menu. A click is
//! translated into exactly one drill-state mutation followed by exactly one
//! `on_drill_option_change`. Date-level picks take a separate path that
//! produces a new GROUP section and hands it to the parent.

use std::sync::Arc;

use chart_config::{
    log_debug, log_info, log_warn, try_update_by, ChangeKind, ChartConfig, ChartDataSectionField,
    DataSectionChange, DateGranularity,
};
use drill_engine::DrillMode;

use crate::context::DrillMenuContext;
use crate::date_level_menu::build_date_level_menu_items;
use crate::menu::{
    ContextMenu, DrillMenuRender, MenuAttachment, MenuEntry, MenuKey, MenuTrigger,
    LABEL_EXPAND_NEXT_LEVEL, LABEL_ROLL_UP, LABEL_SELECT_DRILL_OFF, LABEL_SELECT_DRILL_ON,
    LABEL_SHOW_NEXT_LEVEL,
};
use crate::view_model::DrillMenuViewModel;

pub struct DrillMenuView<'a> {
    context: DrillMenuContext<'a>,
    chart_config: Option<&'a ChartConfig>,
}

impl<'a> DrillMenuView<'a> {
    pub fn new(context: DrillMenuContext<'a>, chart_config: Option<&'a ChartConfig>) -> Self {
        DrillMenuView {
            context,
            chart_config,
        }
    }

    pub fn view_model(&self) -> DrillMenuViewModel {
        DrillMenuViewModel::derive(self.context.drill_option.as_deref(), self.chart_config)
    }

    // ========================================================================
    // RENDER
    // ========================================================================

    pub fn render(&self) -> DrillMenuRender {
        let vm = self.view_model();

        if !vm.has_context_menu {
            return DrillMenuRender {
                attachment: MenuAttachment::Detached,
                menu: None,
            };
        }

        DrillMenuRender {
            attachment: MenuAttachment::Attached {
                trigger: MenuTrigger::ContextMenu,
                disabled: !vm.has_drill_option,
                destroy_on_hide: true,
            },
            menu: Some(self.build_menu(&vm)),
        }
    }

    fn build_menu(&self, vm: &DrillMenuViewModel) -> ContextMenu {
        let mut menu = ContextMenu::default();

        if vm.can_roll_up() {
            menu.entries.push(MenuEntry::item(MenuKey::RollUp, LABEL_ROLL_UP));
        }
        if vm.shows_drill() {
            menu.entries
                .push(MenuEntry::item(MenuKey::Mode(DrillMode::Drill), LABEL_SHOW_NEXT_LEVEL));
        }
        if vm.shows_expand() {
            menu.entries
                .push(MenuEntry::item(MenuKey::Mode(DrillMode::Expand), LABEL_EXPAND_NEXT_LEVEL));
        }
        if vm.shows_select_drill_toggle() {
            let label = if vm.is_selected_drill {
                LABEL_SELECT_DRILL_ON
            } else {
                LABEL_SELECT_DRILL_OFF
            };
            menu.entries.push(MenuEntry::Switch {
                key: MenuKey::SelectDrillStatus,
                on: vm.is_selected_drill,
                label_key: label.to_string(),
            });
        }

        let fields = vm.runtime_date_level_fields.as_deref().unwrap_or_default();
        for (index, field) in fields.iter().enumerate() {
            if !field.is_date() {
                continue;
            }
            let config = field
                .runtime_date_level
                .clone()
                .unwrap_or_else(|| Arc::clone(field));
            let items = build_date_level_menu_items(
                &self.context.options.available_source_functions,
                &config,
            );
            menu.entries.push(MenuEntry::SubMenu {
                key: MenuKey::SubMenu(index),
                title: field.col_name.clone(),
                config,
                items,
            });
        }

        menu
    }

    // ========================================================================
    // DISPATCH
    // ========================================================================

    /// Handles a click on a top-level entry.
    pub fn on_click(&mut self, key: MenuKey) {
        let Some(drill) = self.context.drill_option.as_deref_mut() else {
            return;
        };

        match key {
            MenuKey::SelectDrillStatus => {
                let enable = !drill.is_selected_drill();
                drill.toggle_selected_drill(enable);
            }
            MenuKey::Mode(DrillMode::Drill) => drill.drill_down(),
            MenuKey::Mode(DrillMode::Expand) => drill.expand_down(),
            MenuKey::RollUp => drill.roll_up(),
            MenuKey::Mode(DrillMode::Normal) | MenuKey::SubMenu(_) => return,
        }

        log_info!(
            "MENU",
            "click key={} mode={:?} level={:?}",
            key,
            drill.mode(),
            drill.current_drill_level()
        );

        self.context.handler.on_drill_option_change(drill);
    }

    /// The menu closed without a selection.
    pub fn on_dismiss(&self) {
        log_debug!("MENU", "dismissed");
    }

    // ========================================================================
    // DATE LEVEL
    // ========================================================================

    /// Picks `granularity` in the sub-menu at `index`.
    pub fn select_date_level(&mut self, index: usize, granularity: DateGranularity) {
        let vm = self.view_model();
        let Some(field) = vm.date_level_field(index) else {
            log_warn!("MENU", "no date level sub-menu at index={}", index);
            return;
        };
        let config = field.effective().with_date_level(granularity);
        self.on_date_level_change(config);
    }

    /// Stores `config` as the runtime date level of its GROUP row and passes
    /// the new section to the parent. Without a GROUP section nothing happens.
    pub fn on_date_level_change(&mut self, config: ChartDataSectionField) {
        let Some(group_section) = self.chart_config.and_then(ChartConfig::group_section) else {
            log_debug!("MENU", "date level change ignored: no group section");
            return;
        };

        let uid = config.uid.clone();
        let updated = match try_update_by(group_section, |draft| {
            draft.set_runtime_date_level(config).map(|_| ())
        }) {
            Ok(updated) => updated,
            Err(err) => {
                log_warn!("MENU", "date level change ignored uid={}: {}", uid, err);
                return;
            }
        };

        log_info!(
            "MENU",
            "date level uid={} replaced={:?}",
            uid,
            updated.replaced_col_name
        );

        self.context.handler.on_date_level_change(
            ChangeKind::Data,
            DataSectionChange {
                need_refresh: true,
                ancestors: vec![0],
                value: updated,
            },
        );
    }
}
