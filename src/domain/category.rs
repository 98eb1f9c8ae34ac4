use once_cell::sync::Lazy;

/// Label of the synthetic node every income flows into and every expense
/// flows out of.
pub const TOTAL_INCOME_LABEL: &str = "Total Income";

/// Fixed income categories, in entry-form order.
pub static INCOME_CATEGORIES: Lazy<Vec<&'static str>> =
    Lazy::new(|| vec!["Salary", "Business", "Other Income"]);

/// Fixed expense categories, in entry-form order.
pub static EXPENSE_CATEGORIES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "Rent",
        "Utilities",
        "Groceries",
        "Car",
        "Savings",
        "Other Expenses",
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_names_are_unique_across_both_sets() {
        let mut all: Vec<&str> = INCOME_CATEGORIES
            .iter()
            .chain(EXPENSE_CATEGORIES.iter())
            .copied()
            .collect();
        all.push(TOTAL_INCOME_LABEL);
        let before = all.len();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), before);
    }
}
