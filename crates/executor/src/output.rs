//! Output enum for command execution results.
//!
//! Every command produces exactly one output variant on success.

use docstore_core::Document;
use docstore_engine::{
    BatchReport, DocumentStatistics, DocumentTypeInfo, SchemaCheck, SessionDeletion, SessionList,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Successful command results.
///
/// Each [`Command`](crate::Command) variant maps to exactly one `Output`
/// variant, documented on the command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    /// Liveness reply
    Pong {
        /// Crate version
        version: String,
    },

    /// One document
    Document(Document),

    /// Content only
    Content(Value),

    /// Deletion acknowledged
    Deleted(bool),

    /// A page of documents
    Documents(Vec<Document>),

    /// Session deletion summary
    SessionDeleted(SessionDeletion),

    /// Batch outcome
    BatchReport(BatchReport),

    /// Project or session totals
    Statistics(DocumentStatistics),

    /// Session summaries
    Sessions(SessionList),

    /// On-demand schema check
    SchemaCheck(SchemaCheck),

    /// Document type catalog
    DocumentTypes(Vec<DocumentTypeInfo>),
}
