//! MemoryStore: in-process reference implementation of [`DocumentStore`]
//!
//! - `HashMap<ProjectId, BTreeMap<DocumentId, Document>>` partitions documents
//!   by tenant, so a filter only ever scans its own project
//! - `parking_lot::RwLock` guards the map; every call takes the lock once and
//!   releases it before returning, so no lock is held across an `.await`
//! - Multi-document updates and deletes run under a single write lock and are
//!   therefore all-or-nothing here, which is stronger than the contract asks

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use docstore_core::{Document, DocumentDraft, DocumentId, ProjectId};
use parking_lot::RwLock;
use tracing::debug;

use crate::filter::Filter;
use crate::group::{reduce, GroupBy, GroupStats};
use crate::options::FindOptions;
use crate::store::{DocumentStore, StoreError, StoreResult};
use crate::update::Update;

type Partition = BTreeMap<DocumentId, Document>;

/// In-memory document store
///
/// Clone-friendly via Arc; clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Arc<RwLock<HashMap<ProjectId, Partition>>>,
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Total documents across all projects
    pub fn len(&self) -> usize {
        self.data.read().values().map(BTreeMap::len).sum()
    }

    /// True if no project holds any document
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Documents held for one project
    pub fn project_len(&self, project_id: &ProjectId) -> usize {
        self.data.read().get(project_id).map_or(0, BTreeMap::len)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, draft: DocumentDraft) -> StoreResult<Document> {
        let id = DocumentId::new();
        let doc = draft.into_document(id);

        let mut data = self.data.write();
        let partition = data.entry(doc.project_id.clone()).or_default();
        if partition.contains_key(&id) {
            return Err(StoreError::Conflict(format!("document {} already exists", id)));
        }
        partition.insert(id, doc.clone());
        Ok(doc)
    }

    async fn find_one(&self, filter: &Filter) -> StoreResult<Option<Document>> {
        let data = self.data.read();
        let found = data
            .get(filter.project_id())
            .and_then(|p| p.values().find(|d| filter.matches(d)))
            .cloned();
        Ok(found)
    }

    async fn find_many(&self, filter: &Filter, options: &FindOptions) -> StoreResult<Vec<Document>> {
        let matched: Vec<Document> = {
            let data = self.data.read();
            match data.get(filter.project_id()) {
                Some(p) => p.values().filter(|d| filter.matches(d)).cloned().collect(),
                None => Vec::new(),
            }
        };
        Ok(options.apply(matched))
    }

    async fn find_one_and_update(
        &self,
        filter: &Filter,
        update: &Update,
    ) -> StoreResult<Option<Document>> {
        let mut data = self.data.write();
        let Some(partition) = data.get_mut(filter.project_id()) else {
            return Ok(None);
        };
        match partition.values_mut().find(|d| filter.matches(d)) {
            Some(doc) => {
                update.apply(doc);
                Ok(Some(doc.clone()))
            }
            None => Ok(None),
        }
    }

    async fn update_many(&self, filter: &Filter, update: &Update) -> StoreResult<u64> {
        let mut data = self.data.write();
        let Some(partition) = data.get_mut(filter.project_id()) else {
            return Ok(0);
        };
        let mut modified = 0;
        for doc in partition.values_mut().filter(|d| filter.matches(d)) {
            if update.apply(doc) {
                modified += 1;
            }
        }
        debug!(project = %filter.project_id(), modified, "update_many");
        Ok(modified)
    }

    async fn delete_one(&self, filter: &Filter) -> StoreResult<bool> {
        let mut data = self.data.write();
        let Some(partition) = data.get_mut(filter.project_id()) else {
            return Ok(false);
        };
        let target = partition
            .values()
            .find(|d| filter.matches(d))
            .map(|d| d.id);
        Ok(match target {
            Some(id) => partition.remove(&id).is_some(),
            None => false,
        })
    }

    async fn delete_many(&self, filter: &Filter) -> StoreResult<u64> {
        let mut data = self.data.write();
        let Some(partition) = data.get_mut(filter.project_id()) else {
            return Ok(0);
        };
        let before = partition.len();
        partition.retain(|_, d| !filter.matches(d));
        let removed = (before - partition.len()) as u64;
        debug!(project = %filter.project_id(), removed, "delete_many");
        Ok(removed)
    }

    async fn aggregate(&self, filter: &Filter, group_by: GroupBy) -> StoreResult<Vec<GroupStats>> {
        let data = self.data.read();
        let rows = match data.get(filter.project_id()) {
            Some(p) => reduce(p.values().filter(|d| filter.matches(d)), group_by),
            None => Vec::new(),
        };
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Clause;
    use crate::options::{Sort, SortField, SortOrder};
    use chrono::Utc;
    use docstore_core::DocumentInput;
    use serde_json::json;

    fn project(p: &str) -> ProjectId {
        ProjectId::new(p).unwrap()
    }

    fn draft(p: &str, name: &str, session: &str) -> DocumentDraft {
        let input = DocumentInput::new(name, session, json!({"name": name}));
        DocumentDraft::new(project(p), input, "system", Utc::now())
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_is_readable() {
        let store = MemoryStore::new();
        let doc = store.insert(draft("a", "one", "S1")).await.unwrap();
        let found = store
            .find_one(&Filter::document(project("a"), doc.id))
            .await
            .unwrap();
        assert_eq!(found, Some(doc));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_partitions_are_isolated() {
        let store = MemoryStore::new();
        let doc = store.insert(draft("a", "one", "S1")).await.unwrap();
        let foreign = Filter::document(project("b"), doc.id);
        assert!(store.find_one(&foreign).await.unwrap().is_none());
        assert!(!store.delete_one(&foreign).await.unwrap());
        assert_eq!(store.update_many(&foreign, &Update::record_access(Utc::now())).await.unwrap(), 0);
        assert_eq!(store.project_len(&project("a")), 1);
        assert_eq!(store.project_len(&project("b")), 0);
    }

    #[tokio::test]
    async fn test_find_many_sorts_and_paginates() {
        let store = MemoryStore::new();
        for name in ["c", "a", "b", "d"] {
            store.insert(draft("a", name, "S1")).await.unwrap();
        }
        let options = FindOptions::sorted(Sort::new(SortField::Name, SortOrder::Ascending)).page(1, 2);
        let docs = store.find_many(&Filter::project(project("a")), &options).await.unwrap();
        let names: Vec<_> = docs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c"]);
    }

    #[tokio::test]
    async fn test_find_one_and_update_returns_post_state() {
        let store = MemoryStore::new();
        let doc = store.insert(draft("a", "one", "S1")).await.unwrap();
        let filter = Filter::document(project("a"), doc.id);
        let now = Utc::now();
        let updated = store
            .find_one_and_update(&filter, &Update::record_access(now))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.access_count, 1);
        assert_eq!(updated.last_accessed_at, Some(now));
    }

    #[tokio::test]
    async fn test_delete_many_counts() {
        let store = MemoryStore::new();
        store.insert(draft("a", "one", "S1")).await.unwrap();
        store.insert(draft("a", "two", "S1")).await.unwrap();
        store.insert(draft("a", "three", "S2")).await.unwrap();
        let filter = Filter::project(project("a")).with(Clause::Session("S1".into()));
        assert_eq!(store.delete_many(&filter).await.unwrap(), 2);
        assert_eq!(store.project_len(&project("a")), 1);
    }

    #[tokio::test]
    async fn test_aggregate_on_unknown_project_is_empty() {
        let store = MemoryStore::new();
        let rows = store
            .aggregate(&Filter::project(project("nobody")), GroupBy::All)
            .await
            .unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_access_increments_are_not_lost() {
        let store = MemoryStore::new();
        let doc = store.insert(draft("a", "hot", "S1")).await.unwrap();
        let mut handles = Vec::new();
        for _ in 0..16 {
            let store = store.clone();
            let filter = Filter::document(project("a"), doc.id);
            handles.push(tokio::spawn(async move {
                for _ in 0..25 {
                    store
                        .find_one_and_update(&filter, &Update::record_access(Utc::now()))
                        .await
                        .unwrap();
                }
            }));
        }
        for h in handles {
            h.await.unwrap();
        }
        let final_doc = store
            .find_one(&Filter::document(project("a"), doc.id))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(final_doc.access_count, 400);
    }
}
