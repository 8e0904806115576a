use serde::{Deserialize, Serialize};

use crate::domain::{
    expense_percentage, format_amount, format_percentage, format_signed_total, Amount, Entry,
    Ledger,
};

/// Current aggregate of the budget, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub total: Amount,
    pub total_income: Amount,
    pub total_expense: Amount,
    /// Total expense as a percentage of total income; `None` without income.
    pub expense_percentage: Option<f64>,
}

impl BudgetSummary {
    pub fn from_ledger(ledger: &Ledger) -> Self {
        Self {
            total: ledger.total(),
            total_income: ledger.total_income(),
            total_expense: ledger.total_expense(),
            expense_percentage: expense_percentage(ledger.total_expense(), ledger.total_income()),
        }
    }

    /// "+600.00" / "-25.00"
    pub fn total_display(&self) -> String {
        format_signed_total(self.total)
    }

    /// "+ 1000.00"
    pub fn income_display(&self) -> String {
        format!("+ {}", format_amount(self.total_income))
    }

    /// "- 400.00"
    pub fn expense_display(&self) -> String {
        format!("- {}", format_amount(self.total_expense))
    }

    /// "40.0 %", or "--" when there is no income.
    pub fn percentage_display(&self) -> String {
        format_percentage(self.expense_percentage)
    }
}

/// An expense together with its share of the current total income.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRow {
    pub entry: Entry,
    pub percentage: Option<f64>,
}

impl ExpenseRow {
    pub fn rows(ledger: &Ledger) -> Vec<ExpenseRow> {
        ledger
            .expense_list()
            .iter()
            .map(|entry| ExpenseRow {
                entry: entry.clone(),
                percentage: expense_percentage(entry.amount(), ledger.total_income()),
            })
            .collect()
    }

    pub fn amount_display(&self) -> String {
        format!("- {}", format_amount(self.entry.amount()))
    }

    pub fn percentage_display(&self) -> String {
        format_percentage(self.percentage)
    }
}
