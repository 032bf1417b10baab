/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the persistence layer and the UI layer.

use serde::{Deserialize, Serialize};

/// A single catalogued toy car.
///
/// Records are owned by the `CollectionStore` and serialized as JSON
/// into the key-value prefs file. Every field is a string because the
/// stored blob is an array of string-valued objects.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CarRecord {
    /// Opaque unique identifier, assigned by the store at creation
    pub id: String,
    /// Display name (e.g. "Lamborghini Countach"), never empty once accepted
    pub name: String,
    /// Free-form key/series tag, may be empty
    pub key: String,
    /// Free-form year, digits expected but not validated, may be empty
    pub year: String,
    /// Local path to the car's photo, never empty once accepted
    pub image: String,
}

/// Caller-supplied field values for a new or updated record.
///
/// A draft has no id and has not been validated yet; the store rejects
/// drafts with an empty `name` or `image` at the boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarDraft {
    pub name: String,
    pub key: String,
    pub year: String,
    pub image: String,
}

impl CarDraft {
    /// Build a draft from an existing record, for edit mode
    pub fn from_record(record: &CarRecord) -> Self {
        Self {
            name: record.name.clone(),
            key: record.key.clone(),
            year: record.year.clone(),
            image: record.image.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_round_trips_through_json() {
        let record = CarRecord {
            id: "7".to_string(),
            name: "Ford GT".to_string(),
            key: "HW-2021".to_string(),
            year: "2021".to_string(),
            image: "img://1".to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let restored: CarRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, restored);
    }

    #[test]
    fn test_draft_from_record_copies_all_fields_but_id() {
        let record = CarRecord {
            id: "3".to_string(),
            name: "Bugatti".to_string(),
            key: String::new(),
            year: "1995".to_string(),
            image: "img://2".to_string(),
        };

        let draft = CarDraft::from_record(&record);

        assert_eq!(draft.name, record.name);
        assert_eq!(draft.key, record.key);
        assert_eq!(draft.year, record.year);
        assert_eq!(draft.image, record.image);
    }
}
