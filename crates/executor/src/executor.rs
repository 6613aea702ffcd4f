//! The Executor - single entry point to the document repository.
//!
//! The Executor is a stateless dispatcher that routes commands to the
//! repository and wraps results in a [`Response`].

use std::path::Path;
use std::sync::Arc;

use docstore_core::Result;
use docstore_engine::{DocumentRepository, RepositoryConfig};
use docstore_storage::{DocumentStore, MemoryStore};
use tracing::debug;

use crate::handlers::{batch, document, session};
use crate::{Command, Output, Response};

/// The command executor.
///
/// The Executor holds a repository handle but no state of its own; all
/// state lives in the store.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and can be shared across tasks.
///
/// # Example
///
/// ```ignore
/// use docstore::{Command, Executor};
///
/// let executor = Executor::in_memory();
/// let response = executor.execute(Command::DocumentTypes).await;
/// assert!(response.is_success());
/// ```
#[derive(Debug, Clone)]
pub struct Executor {
    repo: DocumentRepository,
}

impl Executor {
    /// Create an executor over an existing repository.
    pub fn new(repo: DocumentRepository) -> Self {
        Self { repo }
    }

    /// Executor over a fresh in-memory store with default configuration.
    pub fn in_memory() -> Self {
        Self::new(DocumentRepository::new(Arc::new(MemoryStore::new())))
    }

    /// Executor over `store`, configured from a `docstore.toml` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or holds invalid values.
    pub fn from_config_file(store: Arc<dyn DocumentStore>, path: &Path) -> Result<Self> {
        let config = RepositoryConfig::from_file(path)?;
        Ok(Self::new(DocumentRepository::with_config(store, config)?))
    }

    /// The underlying repository.
    pub fn repository(&self) -> &DocumentRepository {
        &self.repo
    }

    /// Execute a single command.
    ///
    /// Failures are folded into the response status; this never panics on
    /// bad input.
    pub async fn execute(&self, cmd: Command) -> Response {
        let name = cmd.name();
        let response = match self.dispatch(cmd).await {
            Ok(response) => response,
            Err(e) => Response::from_error(&e),
        };
        debug!(command = name, status = ?response.status, "executed");
        response
    }

    /// Execute commands in order, one response per command.
    pub async fn execute_many(&self, cmds: Vec<Command>) -> Vec<Response> {
        let mut responses = Vec::with_capacity(cmds.len());
        for cmd in cmds {
            responses.push(self.execute(cmd).await);
        }
        responses
    }

    async fn dispatch(&self, cmd: Command) -> Result<Response> {
        let repo = &self.repo;
        match cmd {
            Command::Ping => Ok(Response::success(
                "pong",
                Output::Pong {
                    version: env!("CARGO_PKG_VERSION").to_string(),
                },
            )),

            // Document commands
            Command::DocumentCreate {
                project,
                document: input,
                created_by,
            } => document::create(repo, project, input, created_by).await,
            Command::DocumentGet {
                project,
                id,
                increment_access,
            } => document::get(repo, project, id, increment_access).await,
            Command::DocumentContent { project, id } => document::content(repo, project, id).await,
            Command::DocumentDelete {
                project,
                id,
                deleted_by,
            } => document::delete(repo, project, id, deleted_by).await,
            Command::DocumentList { project, query } => document::list(repo, project, query).await,
            Command::DocumentSearch {
                project,
                terms,
                document_type,
                limit,
            } => document::search(repo, project, terms, document_type, limit).await,
            Command::DocumentValidate {
                project,
                id,
                schema,
            } => document::validate(repo, project, id, schema).await,
            Command::DocumentTypes => Ok(document::types(repo)),

            // Session commands
            Command::SessionDocuments {
                project,
                session_id,
                query,
            } => session::documents(repo, project, session_id, query).await,
            Command::SessionDelete {
                project,
                session_id,
                deleted_by,
            } => session::delete(repo, project, session_id, deleted_by).await,
            Command::SessionStatistics {
                project,
                session_id,
            } => session::statistics(repo, project, session_id).await,
            Command::SessionList { project } => session::list(repo, project).await,

            // Batch and aggregate commands
            Command::Batch {
                project,
                request,
                actor,
            } => batch::batch(repo, project, request, actor).await,
            Command::ProjectStatistics { project } => {
                batch::project_statistics(repo, project).await
            }
        }
    }
}
