pub mod category;
pub mod document;
pub mod period;

pub use category::{EXPENSE_CATEGORIES, INCOME_CATEGORIES, TOTAL_INCOME_LABEL};
pub use document::{FieldMap, FieldValue, PERIOD_FIELD, USER_FIELD};
pub use period::{Month, Period};
