//! FILENAME: core/chart-config/src/lib.rs
//! Chart configuration subsystem.
//!
//! This crate describes WHAT a chart is wired to: its data sections and the
//! field rows inside them, including runtime date-level overrides chosen from
//! the drill menu. The drill crates depend on it for shared types.
//!
//! Layers:
//! - `definition`: Serializable configuration (sections, rows, change payloads)
//! - `date_level`: Date granularities and their source functions
//! - `mutation`: Structural-sharing updates (copy-on-write over `Arc`)
//! - `field_helpers`: Pure row selection helpers
//! - `logging`: Category-tagged logging macros

pub mod logging;
pub mod definition;
pub mod date_level;
pub mod mutation;
pub mod field_helpers;
pub mod error;

pub use definition::*;
pub use date_level::DateGranularity;
pub use mutation::{try_update_by, update_by};
pub use field_helpers::get_runtime_date_level_fields;
pub use error::ConfigError;
