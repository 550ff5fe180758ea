//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for drill menu integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use chart_config::{
    ChangeKind, ChartConfig, ChartDataSection, ChartDataSectionField, ChartDataSectionType,
    DataSectionChange, DataViewFieldType,
};
use drill_engine::{ChartDrillOption, DrillMode, DrillState};
use drill_menu::{DrillMenuContext, DrillMenuHandler, DrillMenuView};

/// Drill state that counts every mutator call before delegating.
#[derive(Debug, Default)]
pub struct CountingDrillState {
    pub inner: ChartDrillOption,
    pub drill_down_calls: usize,
    pub expand_down_calls: usize,
    pub roll_up_calls: usize,
    pub toggle_calls: Vec<bool>,
}

impl CountingDrillState {
    pub fn new(inner: ChartDrillOption) -> Self {
        CountingDrillState {
            inner,
            ..Default::default()
        }
    }

    pub fn total_calls(&self) -> usize {
        self.drill_down_calls
            + self.expand_down_calls
            + self.roll_up_calls
            + self.toggle_calls.len()
    }

    pub fn address(&self) -> usize {
        self as *const CountingDrillState as *const () as usize
    }
}

impl DrillState for CountingDrillState {
    fn current_drill_level(&self) -> Option<usize> {
        self.inner.current_drill_level()
    }

    fn all_fields(&self) -> &[Arc<ChartDataSectionField>] {
        self.inner.all_fields()
    }

    fn current_fields(&self) -> Option<Vec<Arc<ChartDataSectionField>>> {
        self.inner.current_fields()
    }

    fn is_selected_drill(&self) -> bool {
        self.inner.is_selected_drill()
    }

    fn is_bottom_level(&self) -> bool {
        self.inner.is_bottom_level()
    }

    fn is_drillable(&self) -> bool {
        self.inner.is_drillable()
    }

    fn mode(&self) -> DrillMode {
        self.inner.mode()
    }

    fn drill_down(&mut self) {
        self.drill_down_calls += 1;
        self.inner.drill_down();
    }

    fn expand_down(&mut self) {
        self.expand_down_calls += 1;
        self.inner.expand_down();
    }

    fn roll_up(&mut self) {
        self.roll_up_calls += 1;
        self.inner.roll_up();
    }

    fn toggle_selected_drill(&mut self, enable: bool) {
        self.toggle_calls.push(enable);
        self.inner.toggle_selected_drill(enable);
    }
}

/// What the handler saw of the drill state at notification time.
#[derive(Debug, Clone, PartialEq)]
pub struct DrillNotification {
    pub address: usize,
    pub mode: DrillMode,
    pub level: Option<usize>,
    pub is_selected_drill: bool,
}

/// Handler that records every callback.
#[derive(Debug, Default)]
pub struct RecordingHandler {
    pub drill_changes: Vec<DrillNotification>,
    pub date_level_changes: Vec<(ChangeKind, DataSectionChange)>,
}

impl DrillMenuHandler for RecordingHandler {
    fn on_drill_option_change(&mut self, state: &dyn DrillState) {
        self.drill_changes.push(DrillNotification {
            address: state as *const dyn DrillState as *const () as usize,
            mode: state.mode(),
            level: state.current_drill_level(),
            is_selected_drill: state.is_selected_drill(),
        });
    }

    fn on_date_level_change(&mut self, kind: ChangeKind, payload: DataSectionChange) {
        self.date_level_changes.push((kind, payload));
    }
}

/// Plays the parent controller: owns the drill state, config and handler.
pub struct TestHarness {
    pub config: ChartConfig,
    pub drill: CountingDrillState,
    pub handler: RecordingHandler,
}

impl TestHarness {
    /// GROUP section: region (string) > order_date (date) > ship_date (date),
    /// with the drill hierarchy over all three.
    pub fn new() -> Self {
        Self::with_config(sample_config())
    }

    pub fn with_config(config: ChartConfig) -> Self {
        let fields = config
            .group_section()
            .map(|section| section.rows.clone())
            .unwrap_or_default();
        TestHarness {
            config,
            drill: CountingDrillState::new(ChartDrillOption::new(fields)),
            handler: RecordingHandler::default(),
        }
    }

    pub fn with_hierarchy(config: ChartConfig, fields: Vec<Arc<ChartDataSectionField>>) -> Self {
        TestHarness {
            config,
            drill: CountingDrillState::new(ChartDrillOption::new(fields)),
            handler: RecordingHandler::default(),
        }
    }

    pub fn view(&mut self) -> DrillMenuView<'_> {
        let context = DrillMenuContext::new(
            Some(&mut self.drill as &mut dyn DrillState),
            &mut self.handler,
        );
        DrillMenuView::new(context, Some(&self.config))
    }

    /// Applies the last date-level change the way a parent would.
    pub fn apply_last_date_level_change(&mut self) {
        let (_, change) = self
            .handler
            .date_level_changes
            .last()
            .expect("no date level change recorded");
        self.config = self
            .config
            .apply_data_change(change)
            .expect("group section should exist");
    }
}

pub fn sample_config() -> ChartConfig {
    ChartConfig::new(vec![
        ChartDataSection::new("dimension", ChartDataSectionType::Group).with_rows(vec![
            ChartDataSectionField::new("region", "region", DataViewFieldType::String),
            ChartDataSectionField::new("order", "order_date", DataViewFieldType::Date),
            ChartDataSectionField::new("ship", "ship_date", DataViewFieldType::Date),
        ]),
        ChartDataSection::new("metrics", ChartDataSectionType::Aggregate).with_rows(vec![
            ChartDataSectionField::new("amount", "amount", DataViewFieldType::Numeric),
        ]),
    ])
}

/// GROUP section holding a single date row `a` / `order_date`.
pub fn single_date_config() -> ChartConfig {
    ChartConfig::new(vec![ChartDataSection::new("dimension", ChartDataSectionType::Group)
        .with_rows(vec![ChartDataSectionField::new("a", "order_date", DataViewFieldType::Date)])])
}
