use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Period;

/// Field name carrying the owning account id inside an entry document.
pub const USER_FIELD: &str = "user";
/// Field name carrying the period key inside an entry document.
pub const PERIOD_FIELD: &str = "period";

/// A single field of a stored document. Category amounts are integers;
/// ownership and period metadata are text. Aggregation keys off this
/// distinction, so the two must never be conflated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Text(String),
}

impl FieldValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(value) => Some(*value),
            FieldValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Int(_) => None,
            FieldValue::Text(value) => Some(value.as_str()),
        }
    }
}

/// Flat document body: field name to value.
pub type FieldMap = BTreeMap<String, FieldValue>;

/// Builds the document persisted for one side (income or expense) of a
/// monthly entry: one integer field per category amount, plus the owning
/// user and the period key as text fields.
pub fn entry_document(
    amounts: &[(&str, i64)],
    user: Uuid,
    period: &Period,
) -> FieldMap {
    let mut fields = FieldMap::new();
    for (name, amount) in amounts {
        fields.insert((*name).to_string(), FieldValue::Int(*amount));
    }
    fields.insert(USER_FIELD.to_string(), FieldValue::Text(user.to_string()));
    fields.insert(PERIOD_FIELD.to_string(), FieldValue::Text(period.key()));
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Month;

    #[test]
    fn entry_document_carries_amounts_and_metadata() {
        let user = Uuid::new_v4();
        let period = Period::new(2024, Month::March);
        let doc = entry_document(&[("Salary", 5000), ("Business", 0)], user, &period);

        assert_eq!(doc.get("Salary"), Some(&FieldValue::Int(5000)));
        assert_eq!(doc.get("Business"), Some(&FieldValue::Int(0)));
        assert_eq!(
            doc.get(USER_FIELD).and_then(FieldValue::as_text),
            Some(user.to_string().as_str())
        );
        assert_eq!(
            doc.get(PERIOD_FIELD).and_then(FieldValue::as_text),
            Some("2024_March")
        );
    }

    #[test]
    fn field_value_serde_stays_untagged() {
        let json = serde_json::to_string(&FieldValue::Int(42)).expect("serialize");
        assert_eq!(json, "42");
        let back: FieldValue = serde_json::from_str("\"2024_March\"").expect("deserialize");
        assert_eq!(back, FieldValue::Text("2024_March".into()));
    }
}
