//! In-memory store for a remotely fetched collection.

use crs_model::{TaxRecord, UpdatedRecord};

/// Load state of a remote collection.
///
/// `Idle → Loading → {Ready, Failed}`; a refetch re-enters `Loading`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// Owner of one fetched collection plus its load status.
///
/// The store is the sole mutator of its list; consumers get read-only
/// slices and derive their own views.
#[derive(Debug)]
pub struct RemoteStore<T> {
    phase: LoadPhase,
    items: Vec<T>,
}

impl<T> Default for RemoteStore<T> {
    fn default() -> Self {
        Self {
            phase: LoadPhase::default(),
            items: Vec::new(),
        }
    }
}

impl<T> RemoteStore<T> {
    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, LoadPhase::Idle | LoadPhase::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            LoadPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Enter `Loading`. Called when the fetch task is issued.
    pub fn begin_loading(&mut self) {
        self.phase = LoadPhase::Loading;
    }

    /// Apply a completed fetch. On failure the current items stay as
    /// they are; only the phase records the error.
    pub fn resolve(&mut self, result: Result<Vec<T>, String>) {
        match result {
            Ok(items) => {
                self.items = items;
                self.phase = LoadPhase::Ready;
            }
            Err(message) => {
                self.phase = LoadPhase::Failed(message);
            }
        }
    }
}

impl RemoteStore<TaxRecord> {
    /// Merge a server-confirmed update into the matching record.
    ///
    /// All other records stay untouched. No mutation happens before
    /// confirmation: callers only reach this with a successful response.
    pub fn apply_update(&mut self, update: UpdatedRecord) {
        if let Some(record) = self.items.iter_mut().find(|r| r.id == update.id) {
            record.merge(update);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str) -> TaxRecord {
        TaxRecord {
            id: id.to_string(),
            name: name.to_string(),
            country: "peru".to_string(),
            gender: "female".to_string(),
            created_at: "2024-01-05T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn store_walks_the_load_state_machine() {
        let mut store: RemoteStore<TaxRecord> = RemoteStore::default();
        assert_eq!(*store.phase(), LoadPhase::Idle);
        assert!(store.is_loading());

        store.begin_loading();
        assert_eq!(*store.phase(), LoadPhase::Loading);

        store.resolve(Ok(vec![record("1", "anna")]));
        assert_eq!(*store.phase(), LoadPhase::Ready);
        assert_eq!(store.items().len(), 1);
    }

    #[test]
    fn failed_fetch_keeps_items_and_records_the_message() {
        let mut store: RemoteStore<TaxRecord> = RemoteStore::default();
        store.resolve(Ok(vec![record("1", "anna")]));

        store.begin_loading();
        store.resolve(Err("Failed to fetch records".to_string()));
        assert_eq!(store.error(), Some("Failed to fetch records"));
        assert_eq!(store.items().len(), 1);
    }

    #[test]
    fn apply_update_rewrites_exactly_one_record() {
        let mut store: RemoteStore<TaxRecord> = RemoteStore::default();
        store.resolve(Ok(vec![record("1", "anna"), record("2", "bob")]));

        store.apply_update(UpdatedRecord {
            id: "2".to_string(),
            name: Some("Robert".to_string()),
            country: Some("Chile".to_string()),
            gender: None,
            created_at: None,
        });

        assert_eq!(store.items()[0].name, "anna");
        assert_eq!(store.items()[1].name, "Robert");
        assert_eq!(store.items()[1].country, "Chile");
        // Fields the server omitted are preserved.
        assert_eq!(store.items()[1].gender, "female");
    }

    #[test]
    fn apply_update_ignores_unknown_ids() {
        let mut store: RemoteStore<TaxRecord> = RemoteStore::default();
        store.resolve(Ok(vec![record("1", "anna")]));
        store.apply_update(UpdatedRecord {
            id: "99".to_string(),
            name: Some("Ghost".to_string()),
            country: None,
            gender: None,
            created_at: None,
        });
        assert_eq!(store.items()[0].name, "anna");
    }
}
