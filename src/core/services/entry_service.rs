use std::collections::BTreeMap;

use uuid::Uuid;

use crate::domain::document::entry_document;
use crate::domain::{Period, PERIOD_FIELD};
use crate::store::{Collection, DocumentStore};

use super::ServiceResult;

/// Reads and writes the per-period income and expense documents.
pub struct EntryService;

impl EntryService {
    /// Persists one monthly entry: the income amounts into the `incomes`
    /// collection and the expense amounts into the `expenses` collection,
    /// both under document id = period key, replacing any previous body.
    ///
    /// The two writes are independent. When the second one fails the store is
    /// left with a fresh income document and a stale expense document; that
    /// inconsistency is accepted and only logged.
    pub fn save_entry(
        store: &mut dyn DocumentStore,
        user: Uuid,
        period: &Period,
        incomes: &[(&str, i64)],
        expenses: &[(&str, i64)],
    ) -> ServiceResult<()> {
        let key = period.key();
        let income_doc = entry_document(incomes, user, period);
        let expense_doc = entry_document(expenses, user, period);

        store.set_document(Collection::Incomes, &key, income_doc)?;
        if let Err(err) = store.set_document(Collection::Expenses, &key, expense_doc) {
            tracing::warn!(period = %key, error = %err, "expense write failed after income write");
            return Err(err.into());
        }
        tracing::info!(period = %key, "entry saved");
        Ok(())
    }

    /// All period keys an income document exists for, in backend order.
    /// Deliberately unfiltered by owner: every authenticated user sees every
    /// stored period.
    pub fn list_periods(store: &dyn DocumentStore) -> ServiceResult<Vec<String>> {
        Ok(store.document_ids(Collection::Incomes)?)
    }

    /// Category amounts of the document(s) matching `period` in a collection.
    ///
    /// Scans the whole collection and keeps every integer-valued field of a
    /// matching document; text fields such as the owner id and the period key
    /// are excluded by their type. Empty map when nothing matches.
    pub fn period_data(
        store: &dyn DocumentStore,
        collection: Collection,
        period: &str,
    ) -> ServiceResult<BTreeMap<String, i64>> {
        let mut amounts = BTreeMap::new();
        for (_, fields) in store.list_documents(collection)? {
            let matches = fields
                .get(PERIOD_FIELD)
                .and_then(|value| value.as_text())
                .map(|stored| stored == period)
                .unwrap_or(false);
            if !matches {
                continue;
            }
            for (name, value) in &fields {
                if let Some(amount) = value.as_int() {
                    amounts.insert(name.clone(), amount);
                }
            }
        }
        Ok(amounts)
    }
}
