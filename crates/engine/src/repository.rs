//! Document Repository
//!
//! The repository is the single entry point for document operations. Every
//! call takes the caller's [`ProjectId`] and every store call it issues is
//! built from a [`Filter`] carrying that project, so a document owned by
//! another tenant is indistinguishable from one that does not exist.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use docstore_engine::DocumentRepository;
//! use docstore_storage::MemoryStore;
//!
//! let repo = DocumentRepository::new(Arc::new(MemoryStore::new()));
//! let doc = repo.create(&project, input, Some("alice")).await?;
//! let read = repo.get(&project, &doc.id.to_string(), true).await?;
//! assert_eq!(read.access_count, 1);
//! ```

use std::sync::Arc;

use chrono::Utc;
use docstore_core::{
    Document, DocumentDraft, DocumentId, DocumentInput, DocumentType, Error, Limits, ProjectId,
    Result,
};
use docstore_storage::{Clause, DocumentStore, Filter, FindOptions, Update};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::batch::{self, BatchReport, BatchRequest};
use crate::config::RepositoryConfig;
use crate::convert::StoreResultExt;
use crate::query::{session_filter, DocumentQuery, QueryCompiler, SessionQuery};
use crate::schema::{JsonSchemaValidator, SchemaCheck, SchemaError, SchemaValidator};
use crate::stats::{self, DocumentStatistics, SessionList};

/// Result of deleting a session's documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDeletion {
    /// Documents the store removed
    pub deleted_count: u64,
    /// Session that was cleared
    pub session_id: String,
    /// Ids targeted for deletion
    ///
    /// Collected before the delete runs. A concurrent delete can remove some
    /// of them first, leaving `deleted_count` below this list's length.
    pub documents_deleted: Vec<DocumentId>,
}

/// A document type with its display label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTypeInfo {
    /// Wire value
    pub value: DocumentType,
    /// Human-readable label
    pub label: String,
}

/// Project-scoped document operations over a [`DocumentStore`]
#[derive(Clone)]
pub struct DocumentRepository {
    store: Arc<dyn DocumentStore>,
    validator: Arc<dyn SchemaValidator>,
    config: RepositoryConfig,
    limits: Limits,
    compiler: QueryCompiler,
}

impl std::fmt::Debug for DocumentRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentRepository")
            .field("config", &self.config)
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}

impl DocumentRepository {
    /// Repository with the default configuration and a Draft 7 validator
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self::build(store, RepositoryConfig::default())
    }

    /// Repository with an explicit configuration
    ///
    /// # Errors
    ///
    /// Returns a validation error if the configuration is out of range.
    pub fn with_config(store: Arc<dyn DocumentStore>, config: RepositoryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(store, config))
    }

    fn build(store: Arc<dyn DocumentStore>, config: RepositoryConfig) -> Self {
        let limits = Limits::default();
        let compiler = QueryCompiler::new(
            limits.clone(),
            config.default_page_size,
            config.session_page_size,
        );
        DocumentRepository {
            store,
            validator: Arc::new(JsonSchemaValidator),
            config,
            limits,
            compiler,
        }
    }

    /// Replace the schema validator
    pub fn with_validator(mut self, validator: Arc<dyn SchemaValidator>) -> Self {
        self.validator = validator;
        self
    }

    /// Active configuration
    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    /// Underlying store handle
    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }

    fn actor<'a>(&'a self, actor: Option<&'a str>) -> &'a str {
        match actor.map(str::trim) {
            Some(a) if !a.is_empty() => a,
            _ => &self.config.default_actor,
        }
    }

    /// Validate, normalize and persist a new document
    ///
    /// # Errors
    ///
    /// - Validation: a field is blank or too long, there are too many tags,
    ///   or content fails its attached schema
    /// - Internal: the store rejected the insert
    pub async fn create(
        &self,
        project_id: &ProjectId,
        input: DocumentInput,
        created_by: Option<&str>,
    ) -> Result<Document> {
        let input = input.normalize(&self.limits)?;

        if self.config.validate_schemas {
            if let Some(schema) = &input.schema_validation {
                self.validator.check_schema(schema).map_err(schema_error)?;
                self.validator
                    .validate(&input.content, schema)
                    .map_err(schema_error)?;
            }
        }

        let actor = self.actor(created_by);
        let draft = DocumentDraft::new(project_id.clone(), input, actor, Utc::now());
        let doc = self.store.insert(draft).await.context("create document")?;

        info!(project = %project_id, id = %doc.id, actor, doc_type = %doc.document_type, "document created");
        Ok(doc)
    }

    /// Fetch one document, optionally counting the access
    ///
    /// With `increment_access` the lookup and the increment are one atomic
    /// store call, and the returned document reflects the increment.
    pub async fn get(&self, project_id: &ProjectId, id: &str, increment_access: bool) -> Result<Document> {
        let id = DocumentId::parse(id)?;
        let filter = Filter::document(project_id.clone(), id);

        let found = if increment_access {
            self.store
                .find_one_and_update(&filter, &Update::record_access(Utc::now()))
                .await
                .context("read document")?
        } else {
            self.store.find_one(&filter).await.context("read document")?
        };

        debug!(project = %project_id, %id, increment_access, found = found.is_some(), "get");
        found.ok_or_else(|| not_found(id))
    }

    /// Content of one document; counts as an access
    pub async fn get_content(&self, project_id: &ProjectId, id: &str) -> Result<Value> {
        self.get(project_id, id, true).await.map(|doc| doc.content)
    }

    /// Remove one document
    ///
    /// # Errors
    ///
    /// Returns NotFound if the document is absent, owned by another project,
    /// or removed concurrently before this call's delete ran.
    pub async fn delete(&self, project_id: &ProjectId, id: &str, deleted_by: Option<&str>) -> Result<bool> {
        let id = DocumentId::parse(id)?;
        let filter = Filter::document(project_id.clone(), id);

        if self
            .store
            .find_one(&filter)
            .await
            .context("look up document for delete")?
            .is_none()
        {
            return Err(not_found(id));
        }
        if !self.store.delete_one(&filter).await.context("delete document")? {
            return Err(not_found(id));
        }

        info!(project = %project_id, %id, actor = self.actor(deleted_by), "document deleted");
        Ok(true)
    }

    /// Filtered, sorted, paginated listing
    pub async fn list(&self, project_id: &ProjectId, query: &DocumentQuery) -> Result<Vec<Document>> {
        let compiled = self.compiler.compile(project_id, query)?;
        let docs = self
            .store
            .find_many(&compiled.filter, &compiled.options)
            .await
            .context("list documents")?;
        debug!(project = %project_id, returned = docs.len(), "list");
        Ok(docs)
    }

    /// Documents whose content contains every term, newest updates first
    pub async fn search_by_content(
        &self,
        project_id: &ProjectId,
        terms: &[String],
        document_type: Option<DocumentType>,
        limit: Option<usize>,
    ) -> Result<Vec<Document>> {
        let limit = limit.unwrap_or(self.config.search_limit);
        let compiled = self
            .compiler
            .content_search(project_id, terms, document_type, limit)?;
        self.store
            .find_many(&compiled.filter, &compiled.options)
            .await
            .context("search documents")
    }

    /// Documents of one session, oldest first by default
    pub async fn list_by_session(
        &self,
        project_id: &ProjectId,
        session_id: &str,
        query: &SessionQuery,
    ) -> Result<Vec<Document>> {
        let compiled = self.compiler.session(project_id, session_id, query)?;
        self.store
            .find_many(&compiled.filter, &compiled.options)
            .await
            .context("list session documents")
    }

    /// Remove every document of a session
    ///
    /// An empty or unknown session reports zero deletions.
    pub async fn delete_session(
        &self,
        project_id: &ProjectId,
        session_id: &str,
        deleted_by: Option<&str>,
    ) -> Result<SessionDeletion> {
        let filter = session_filter(project_id, session_id)?;
        let session_id = session_id.trim().to_string();

        let ids: Vec<DocumentId> = self
            .store
            .find_many(&filter, &FindOptions::default())
            .await
            .context("collect session documents")?
            .into_iter()
            .map(|d| d.id)
            .collect();

        if ids.is_empty() {
            return Ok(SessionDeletion {
                deleted_count: 0,
                session_id,
                documents_deleted: Vec::new(),
            });
        }

        let targets = filter.with(Clause::IdIn(ids.iter().copied().collect()));
        let deleted_count = self
            .store
            .delete_many(&targets)
            .await
            .context("delete session documents")?;

        info!(
            project = %project_id,
            session = %session_id,
            deleted_count,
            actor = self.actor(deleted_by),
            "session documents deleted"
        );
        Ok(SessionDeletion {
            deleted_count,
            session_id,
            documents_deleted: ids,
        })
    }

    /// Apply one mutation to a set of documents
    pub async fn batch(
        &self,
        project_id: &ProjectId,
        request: &BatchRequest,
        actor: Option<&str>,
    ) -> Result<BatchReport> {
        batch::run(
            self.store.as_ref(),
            &self.limits,
            project_id,
            request,
            self.actor(actor),
        )
        .await
    }

    /// Totals across the whole project
    pub async fn project_statistics(&self, project_id: &ProjectId) -> Result<DocumentStatistics> {
        stats::statistics(self.store.as_ref(), &Filter::project(project_id.clone()), None).await
    }

    /// Totals for one session
    pub async fn session_statistics(
        &self,
        project_id: &ProjectId,
        session_id: &str,
    ) -> Result<DocumentStatistics> {
        let filter = session_filter(project_id, session_id)?;
        stats::statistics(
            self.store.as_ref(),
            &filter,
            Some(session_id.trim().to_string()),
        )
        .await
    }

    /// Every session in the project, most recently updated first
    pub async fn list_sessions(&self, project_id: &ProjectId) -> Result<SessionList> {
        stats::sessions(self.store.as_ref(), project_id).await
    }

    /// Check a stored document against a schema without touching it
    ///
    /// A malformed schema is reported through the returned check, not as an
    /// error.
    pub async fn validate_against(
        &self,
        project_id: &ProjectId,
        id: &str,
        schema: &Value,
    ) -> Result<SchemaCheck> {
        let doc = self.get(project_id, id, false).await?;
        let result = self
            .validator
            .check_schema(schema)
            .and_then(|()| self.validator.validate(&doc.content, schema));
        Ok(SchemaCheck::from_result(result))
    }

    /// Every document type with its label
    pub fn document_types(&self) -> Vec<DocumentTypeInfo> {
        DocumentType::ALL
            .into_iter()
            .map(|t| DocumentTypeInfo {
                value: t,
                label: t.label(),
            })
            .collect()
    }
}

fn schema_error(e: SchemaError) -> Error {
    Error::validation(e.to_string())
}

fn not_found(id: DocumentId) -> Error {
    Error::not_found(format!("document {}", id))
}
