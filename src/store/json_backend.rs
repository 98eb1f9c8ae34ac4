use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::core::utils::{app_data_dir, ensure_dir, write_atomic};
use crate::domain::FieldMap;

use super::{Collection, DocumentStore, Result};

/// JSON-file document store: each collection lives in one file holding an
/// id-to-fields map. Writes rewrite the whole collection file atomically,
/// which gives the same last-write-wins semantics as the hosted store.
#[derive(Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(|| app_data_dir().join("store"));
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    fn collection_path(&self, collection: Collection) -> PathBuf {
        self.root.join(format!("{}.json", collection.name()))
    }

    fn read_collection(&self, collection: Collection) -> Result<BTreeMap<String, FieldMap>> {
        let path = self.collection_path(collection);
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let data = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn write_collection(
        &self,
        collection: Collection,
        documents: &BTreeMap<String, FieldMap>,
    ) -> Result<()> {
        let json = serde_json::to_string_pretty(documents)?;
        write_atomic(&self.collection_path(collection), &json)
    }
}

impl DocumentStore for JsonStore {
    fn list_documents(&self, collection: Collection) -> Result<Vec<(String, FieldMap)>> {
        Ok(self.read_collection(collection)?.into_iter().collect())
    }

    fn get_document(&self, collection: Collection, id: &str) -> Result<Option<FieldMap>> {
        Ok(self.read_collection(collection)?.remove(id))
    }

    fn set_document(&mut self, collection: Collection, id: &str, fields: FieldMap) -> Result<()> {
        let mut documents = self.read_collection(collection)?;
        documents.insert(id.to_string(), fields);
        self.write_collection(collection, &documents)
    }
}
