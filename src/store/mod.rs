pub mod json_backend;

use std::fmt;

use crate::domain::FieldMap;
use crate::errors::StoreError;

pub type Result<T> = std::result::Result<T, StoreError>;

/// The two document collections the tracker writes: one income and one
/// expense document per period, both keyed by the period string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Incomes,
    Expenses,
}

impl Collection {
    pub fn name(self) -> &'static str {
        match self {
            Collection::Incomes => "incomes",
            Collection::Expenses => "expenses",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Abstraction over the document database: flat documents addressed by
/// collection and id, with full-overwrite writes and no transactions.
pub trait DocumentStore: Send + Sync {
    /// All documents of a collection as `(id, fields)` pairs, in backend
    /// order.
    fn list_documents(&self, collection: Collection) -> Result<Vec<(String, FieldMap)>>;

    /// The fields of one document, or `None` when the id is unknown.
    fn get_document(&self, collection: Collection, id: &str) -> Result<Option<FieldMap>>;

    /// Upserts a document. The previous body is replaced wholesale, never
    /// merged.
    fn set_document(&mut self, collection: Collection, id: &str, fields: FieldMap) -> Result<()>;

    /// Ids of every document in a collection.
    fn document_ids(&self, collection: Collection) -> Result<Vec<String>> {
        Ok(self
            .list_documents(collection)?
            .into_iter()
            .map(|(id, _)| id)
            .collect())
    }
}

pub use json_backend::JsonStore;
