/// The CollectionStore owns the catalogue of toy cars.
///
/// It is the single writer of the collection: the UI and the search
/// filter only read it. Every mutation appends/replaces/removes in the
/// in-memory list and then serializes the whole list to the key-value
/// prefs under one fixed key. Storage failures are logged and swallowed;
/// the in-memory collection stays authoritative for the session.

use thiserror::Error;

use super::data::{CarDraft, CarRecord};
use super::prefs::KeyValue;

/// Fixed key under which the serialized collection lives
pub const COLLECTION_KEY: &str = "cars";

/// Errors surfaced to the user by store operations.
///
/// Validation errors abort the operation with no state change and no
/// write. Storage failures are not represented here at all; they are
/// logged inside `persist` and never returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Please give the car a name.")]
    EmptyName,

    #[error("Please add a photo of the car.")]
    EmptyImage,

    #[error("No car with id {0} exists.")]
    NotFound(String),
}

/// Single authoritative owner of the car collection and its persistence.
pub struct CollectionStore<K: KeyValue> {
    prefs: K,
    cars: Vec<CarRecord>,
    /// Next id to hand out; seeded past every id seen at load
    next_id: u64,
}

impl<K: KeyValue> CollectionStore<K> {
    /// Load the collection from storage, exactly once, at startup.
    ///
    /// An absent or unparseable blob yields an empty collection; the
    /// failure is logged and never surfaced.
    pub fn load(prefs: K) -> Self {
        let cars: Vec<CarRecord> = match prefs.get(COLLECTION_KEY) {
            Some(blob) => match serde_json::from_str(&blob) {
                Ok(cars) => cars,
                Err(e) => {
                    eprintln!("⚠️  Stored collection is unreadable, starting empty: {}", e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        // Seed the counter past any numeric id already in use so
        // reloaded collections never hand out a duplicate.
        let next_id = cars
            .iter()
            .filter_map(|car| car.id.parse::<u64>().ok())
            .max()
            .map_or(1, |max| max.saturating_add(1));

        println!("🚗 Loaded {} cars from the garage", cars.len());

        Self { prefs, cars, next_id }
    }

    /// The current collection, in insertion order
    pub fn cars(&self) -> &[CarRecord] {
        &self.cars
    }

    /// Find a record by id
    pub fn get(&self, id: &str) -> Option<&CarRecord> {
        self.cars.iter().find(|car| car.id == id)
    }

    /// Add a new car from a draft.
    ///
    /// The draft must carry a non-empty name and image; otherwise the
    /// collection is untouched and nothing is written. On success a
    /// fresh id is assigned, the record is appended, and the full
    /// collection is persisted.
    pub fn add(&mut self, draft: CarDraft) -> Result<&[CarRecord], StoreError> {
        Self::validate(&draft)?;

        let id = self.next_id.to_string();
        self.next_id += 1;

        self.cars.push(CarRecord {
            id,
            name: draft.name,
            key: draft.key,
            year: draft.year,
            image: draft.image,
        });

        self.persist();
        Ok(&self.cars)
    }

    /// Replace the fields of the car with the given id.
    ///
    /// Position and id are preserved; every other field is taken from
    /// the draft. Same validation as `add`. An unknown id is reported
    /// as `NotFound` with no state change.
    pub fn update(&mut self, id: &str, draft: CarDraft) -> Result<&[CarRecord], StoreError> {
        Self::validate(&draft)?;

        let car = self
            .cars
            .iter_mut()
            .find(|car| car.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        car.name = draft.name;
        car.key = draft.key;
        car.year = draft.year;
        car.image = draft.image;

        self.persist();
        Ok(&self.cars)
    }

    /// Remove the car with the given id, if present.
    ///
    /// Idempotent: removing an id that is not there is a no-op, not an
    /// error. The caller gates this behind an explicit confirmation.
    /// Persists unconditionally, like every other mutation.
    pub fn remove(&mut self, id: &str) -> &[CarRecord] {
        self.cars.retain(|car| car.id != id);
        self.persist();
        &self.cars
    }

    /// Serialize the whole collection and overwrite the stored blob.
    ///
    /// Failure is logged, never retried, never surfaced; a lost write
    /// costs at most the current session's changes.
    fn persist(&mut self) {
        let blob = match serde_json::to_string(&self.cars) {
            Ok(blob) => blob,
            Err(e) => {
                eprintln!("⚠️  Could not serialize collection: {}", e);
                return;
            }
        };

        if let Err(e) = self.prefs.set(COLLECTION_KEY, blob) {
            eprintln!("⚠️  Could not save collection: {}", e);
        }
    }

    fn validate(draft: &CarDraft) -> Result<(), StoreError> {
        if draft.name.trim().is_empty() {
            return Err(StoreError::EmptyName);
        }
        if draft.image.is_empty() {
            return Err(StoreError::EmptyImage);
        }
        Ok(())
    }
}
