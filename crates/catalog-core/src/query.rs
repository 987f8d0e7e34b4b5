use catalog_models::ContentItem;

use crate::filter::FilterCriteria;
use crate::sort::{apply_sorting, SortDirective};

/// Derive the visible, ordered subset for the current view.
///
/// Pure function of its three inputs: no side effects, no hidden state, and
/// the input collection is never mutated, so it is safe to re-run on every
/// state change. With no directive the filtered sequence is returned in
/// input order (the degraded path for unrecognized directive strings).
pub fn run_query(
    items: &[ContentItem],
    criteria: &FilterCriteria,
    directive: Option<SortDirective>,
) -> Vec<ContentItem> {
    let filtered = criteria.apply(items);
    match directive {
        Some(directive) => apply_sorting(&filtered, directive),
        None => filtered,
    }
}

#[cfg(test)]
mod tests;
