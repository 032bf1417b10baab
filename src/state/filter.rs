/// Search filtering over the car collection
///
/// A stateless, linear substring filter: the UI recomputes the visible
/// list from the live query on every keystroke and after every
/// mutation, so the filtered view can never go stale.

use super::data::CarRecord;

/// Select the cars whose name contains `query`, case-insensitively.
///
/// The empty query selects everything. Collection order is preserved;
/// `key` and `year` are never matched. No ranking, no fuzzy matching.
pub fn filter<'a>(cars: &'a [CarRecord], query: &str) -> Vec<&'a CarRecord> {
    if query.is_empty() {
        return cars.iter().collect();
    }

    let needle = query.to_lowercase();
    cars.iter()
        .filter(|car| car.name.to_lowercase().contains(&needle))
        .collect()
}

/// Cloning variant for UI state that has to own its visible list
pub fn filter_owned(cars: &[CarRecord], query: &str) -> Vec<CarRecord> {
    filter(cars, query).into_iter().cloned().collect()
}
