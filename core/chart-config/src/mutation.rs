//! FILENAME: core/chart-config/src/mutation.rs
// PURPOSE: Structural-sharing updates over `Arc`-linked config trees.
// CONTEXT: The root is shallow-cloned and handed to the mutator as a draft.
//          Children are `Arc`s, so the draft shares them with the original
//          until the mutator calls `Arc::make_mut` on one, which copies only
//          that node. The original tree is never touched.

use std::sync::Arc;

/// Applies `mutator` to a draft copy of `value` and returns the new root.
pub fn update_by<T, F>(value: &Arc<T>, mutator: F) -> Arc<T>
where
    T: Clone,
    F: FnOnce(&mut T),
{
    let mut draft = T::clone(value);
    mutator(&mut draft);
    Arc::new(draft)
}

/// Like [`update_by`], but the mutator may fail, in which case the draft is
/// dropped and no new root is produced.
pub fn try_update_by<T, E, F>(value: &Arc<T>, mutator: F) -> Result<Arc<T>, E>
where
    T: Clone,
    F: FnOnce(&mut T) -> Result<(), E>,
{
    let mut draft = T::clone(value);
    mutator(&mut draft)?;
    Ok(Arc::new(draft))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::{
        ChartDataSection, ChartDataSectionField, ChartDataSectionType, DataViewFieldType,
    };
    use crate::error::ConfigError;
    use crate::DateGranularity;

    fn group_section() -> Arc<ChartDataSection> {
        Arc::new(
            ChartDataSection::new("dimension", ChartDataSectionType::Group).with_rows(vec![
                ChartDataSectionField::new("a", "order_date", DataViewFieldType::Date),
                ChartDataSectionField::new("b", "region", DataViewFieldType::String),
            ]),
        )
    }

    #[test]
    fn test_update_by_leaves_original_untouched() {
        let original = group_section();

        let updated = update_by(&original, |draft| draft.label = "Dimensions".to_string());

        assert_eq!(original.label, "dimension");
        assert_eq!(updated.label, "Dimensions");
        assert!(!Arc::ptr_eq(&original, &updated));
    }

    #[test]
    fn test_update_by_shares_untouched_rows() {
        let original = group_section();
        let month = original.rows[0].with_date_level(DateGranularity::Month);

        let updated = update_by(&original, |draft| {
            draft.set_runtime_date_level(month).unwrap();
        });

        assert!(!Arc::ptr_eq(&original.rows[0], &updated.rows[0]));
        assert!(Arc::ptr_eq(&original.rows[1], &updated.rows[1]));
        assert!(original.rows[0].runtime_date_level.is_none());
    }

    #[test]
    fn test_try_update_by_propagates_error() {
        let original = group_section();
        let missing = ChartDataSectionField::new("zz", "ship_date", DataViewFieldType::Date);

        let result: Result<_, ConfigError> = try_update_by(&original, |draft| {
            draft.set_runtime_date_level(missing).map(|_| ())
        });

        assert!(result.is_err());
        assert!(original.replaced_col_name.is_none());
    }
}
