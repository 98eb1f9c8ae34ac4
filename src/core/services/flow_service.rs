use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::TOTAL_INCOME_LABEL;

/// Totals shown above the flow diagram. `remaining` may go negative; it is
/// never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetSummary {
    pub total_income: i64,
    pub total_expense: i64,
    pub remaining: i64,
}

/// One edge of the flow diagram, indices into [`FlowDiagram::labels`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlowLink {
    pub source: usize,
    pub target: usize,
    pub value: i64,
}

/// Sankey-style diagram data: income nodes feed a synthetic "Total Income"
/// node, which feeds the expense nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowDiagram {
    pub labels: Vec<String>,
    pub links: Vec<FlowLink>,
    total: usize,
}

impl FlowDiagram {
    /// Index of the synthetic total node within `labels`.
    pub fn total_index(&self) -> usize {
        self.total
    }
}

/// Turns a period's aggregated amounts into summary totals and diagram data.
pub struct FlowService;

impl FlowService {
    pub fn summarize(
        incomes: &BTreeMap<String, i64>,
        expenses: &BTreeMap<String, i64>,
    ) -> BudgetSummary {
        let total_income: i64 = incomes.values().sum();
        let total_expense: i64 = expenses.values().sum();
        BudgetSummary {
            total_income,
            total_expense,
            remaining: total_income - total_expense,
        }
    }

    /// Builds the diagram: income labels in map order, then the total node,
    /// then expense labels in map order. Every category keeps its node and
    /// link even at amount zero.
    ///
    /// Targets are computed from each category's slot, not looked up by
    /// label, so an expense sharing its name with an income category still
    /// routes to the expense node.
    pub fn diagram(
        incomes: &BTreeMap<String, i64>,
        expenses: &BTreeMap<String, i64>,
    ) -> FlowDiagram {
        let total_index = incomes.len();
        let mut labels = Vec::with_capacity(incomes.len() + 1 + expenses.len());
        let mut links = Vec::with_capacity(incomes.len() + expenses.len());

        for (slot, (name, amount)) in incomes.iter().enumerate() {
            labels.push(name.clone());
            links.push(FlowLink {
                source: slot,
                target: total_index,
                value: *amount,
            });
        }
        labels.push(TOTAL_INCOME_LABEL.to_string());
        for (slot, (name, amount)) in expenses.iter().enumerate() {
            labels.push(name.clone());
            links.push(FlowLink {
                source: total_index,
                target: total_index + 1 + slot,
                value: *amount,
            });
        }

        FlowDiagram {
            labels,
            links,
            total: total_index,
        }
    }
}
