//! FILENAME: core/drill-engine/src/lib.rs
//! Drill state subsystem.
//!
//! Layers:
//! - `state`: The `DrillState` capability trait and `DrillMode`
//! - `option`: `ChartDrillOption`, the default cursor-based implementation

pub mod state;
pub mod option;

pub use state::{DrillMode, DrillState};
pub use option::{ChartDrillOption, DrillCondition, DrillPathEntry};
