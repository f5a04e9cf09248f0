//! Transaction entries, drafts and the fixed category catalogue.

use std::{fmt, str::FromStr};

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::to_currency;
use crate::domain::common::{Displayable, Identifiable};
use crate::errors::PulseError;
use crate::period::calendar::{parse_iso_date, to_iso_date};

/// Closed set of top-level categories an entry can be filed under.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryCategory {
    Income,
    FixedExpense,
    VariableExpense,
}

impl PrimaryCategory {
    pub const ALL: [PrimaryCategory; 3] = [
        PrimaryCategory::Income,
        PrimaryCategory::FixedExpense,
        PrimaryCategory::VariableExpense,
    ];

    /// Stable machine key, also used as the category-share group when no subcategory is set.
    pub fn key(&self) -> &'static str {
        match self {
            PrimaryCategory::Income => "income",
            PrimaryCategory::FixedExpense => "fixed_expense",
            PrimaryCategory::VariableExpense => "variable_expense",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PrimaryCategory::Income => "Income",
            PrimaryCategory::FixedExpense => "Fixed Expense",
            PrimaryCategory::VariableExpense => "Variable Expense",
        }
    }

    pub fn kind(&self) -> TransactionKind {
        match self {
            PrimaryCategory::Income => TransactionKind::Income,
            PrimaryCategory::FixedExpense | PrimaryCategory::VariableExpense => {
                TransactionKind::Expense
            }
        }
    }
}

impl fmt::Display for PrimaryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PrimaryCategory {
    type Err = PulseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "income" => Ok(PrimaryCategory::Income),
            "fixed_expense" | "fixed" => Ok(PrimaryCategory::FixedExpense),
            "variable_expense" | "variable" => Ok(PrimaryCategory::VariableExpense),
            _ => Err(PulseError::InvalidInput(format!(
                "unknown category `{}` (expected income, fixed_expense or variable_expense)",
                raw.trim()
            ))),
        }
    }
}

/// Direction of money flow, always derived from [`PrimaryCategory`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        };
        f.write_str(label)
    }
}

/// Fixed subcategory suggestions offered per primary category.
pub fn default_subcategories(category: PrimaryCategory) -> &'static [&'static str] {
    match category {
        PrimaryCategory::Income => &["Salary", "Bonus", "Freelance", "Investments"],
        PrimaryCategory::FixedExpense => {
            &["Rent/Mortgage", "Utilities", "Insurance", "Subscriptions"]
        }
        PrimaryCategory::VariableExpense => {
            &["Groceries", "Dining", "Transportation", "Entertainment"]
        }
    }
}

/// Caller-supplied fields for a new entry, before an identifier is assigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionDraft {
    pub date: String,
    pub label: String,
    pub primary_category: PrimaryCategory,
    pub sub_category: String,
    pub amount: f64,
}

impl TransactionDraft {
    pub fn new(
        date: impl Into<String>,
        label: impl Into<String>,
        primary_category: PrimaryCategory,
        sub_category: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            date: date.into(),
            label: label.into(),
            primary_category,
            sub_category: sub_category.into(),
            amount,
        }
    }
}

/// A recorded income or expense. Entries are never edited after creation.
///
/// The transaction kind is not stored: [`TransactionEntry::kind`] derives it from
/// `primary_category`, so the two can never disagree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionEntry {
    pub id: Uuid,
    /// ISO-8601 calendar date. Kept as text so malformed imports stay representable.
    pub date: String,
    pub label: String,
    pub primary_category: PrimaryCategory,
    pub sub_category: String,
    pub amount: f64,
}

impl TransactionEntry {
    /// Creates an entry with a fresh identifier, a trimmed label and a quantized amount.
    pub fn new(
        date: impl Into<String>,
        label: impl AsRef<str>,
        primary_category: PrimaryCategory,
        sub_category: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: date.into(),
            label: label.as_ref().trim().to_string(),
            primary_category,
            sub_category: sub_category.into(),
            amount: to_currency(amount),
        }
    }

    pub fn from_draft(draft: TransactionDraft) -> Self {
        Self::new(
            draft.date,
            draft.label,
            draft.primary_category,
            draft.sub_category,
            draft.amount,
        )
    }

    /// Replaces the generated identifier, for fixtures and imports with known ids.
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn kind(&self) -> TransactionKind {
        self.primary_category.kind()
    }

    pub fn is_income(&self) -> bool {
        self.kind() == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind() == TransactionKind::Expense
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.date)
    }

    /// Grouping key for category share: the subcategory, or the primary key when blank.
    pub fn share_key(&self) -> &str {
        if self.sub_category.is_empty() {
            self.primary_category.key()
        } else {
            &self.sub_category
        }
    }
}

impl Identifiable for TransactionEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for TransactionEntry {
    fn display_label(&self) -> String {
        let sub = if self.sub_category.is_empty() {
            self.primary_category.label()
        } else {
            &self.sub_category
        };
        format!("{} {} [{}] {:.2}", self.date, self.label, sub, self.amount)
    }
}

/// Parses a user-typed amount such as `1,254.24` or `$18`.
///
/// Only boundary input goes through here; entries built in code are quantized as-is.
pub fn parse_amount(raw: &str) -> Result<f64, PulseError> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|ch| *ch != ',' && *ch != '_')
        .collect();
    let value: f64 = cleaned
        .parse()
        .map_err(|_| PulseError::InvalidInput(format!("`{}` is not a valid amount", raw.trim())))?;
    if !value.is_finite() {
        return Err(PulseError::InvalidInput(format!(
            "`{}` is not a finite amount",
            raw.trim()
        )));
    }
    if value < 0.0 {
        return Err(PulseError::InvalidInput(
            "amounts must not be negative; pick an expense category instead".into(),
        ));
    }
    Ok(to_currency(value))
}

/// Sample entries shown on first launch and after a reset, dated relative to `today`.
pub fn default_entries(today: NaiveDate) -> Vec<TransactionEntry> {
    vec![
        TransactionEntry::new(
            to_iso_date(today - Duration::days(2)),
            "Product Design Contract",
            PrimaryCategory::Income,
            "Freelance",
            3200.0,
        ),
        TransactionEntry::new(
            to_iso_date(today - Duration::days(1)),
            "Rent - Downtown Loft",
            PrimaryCategory::FixedExpense,
            "Rent/Mortgage",
            1800.0,
        ),
        TransactionEntry::new(
            to_iso_date(today),
            "Whole Foods Market",
            PrimaryCategory::VariableExpense,
            "Groceries",
            145.76,
        ),
    ]
}

/// Deterministic bulk fixture spread over the 120 days before `today`.
pub fn demo_entries(today: NaiveDate, count: usize) -> Vec<TransactionEntry> {
    (0..count)
        .map(|index| {
            let date = to_iso_date(today - Duration::days(((index * 3) % 120) as i64));
            let category = if index % 7 == 0 {
                PrimaryCategory::Income
            } else if index % 3 == 0 {
                PrimaryCategory::FixedExpense
            } else {
                PrimaryCategory::VariableExpense
            };
            let subs = default_subcategories(category);
            let sub = subs[index % subs.len()];
            let amount = match category {
                PrimaryCategory::Income => 1500.0 + (index % 5) as f64 * 250.0,
                _ => 12.5 + ((index * 37) % 400) as f64 + 0.25 * (index % 4) as f64,
            };
            TransactionEntry::new(date, format!("{sub} #{index}"), category, sub, amount)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn kind_follows_primary_category() {
        for category in PrimaryCategory::ALL {
            let entry = TransactionEntry::new("2024-03-01", "x", category, "", 1.0);
            assert_eq!(
                entry.kind() == TransactionKind::Income,
                category == PrimaryCategory::Income
            );
        }
    }

    #[test]
    fn new_entry_trims_label_and_quantizes_amount() {
        let entry = TransactionEntry::new(
            "2024-03-03",
            "  Coffee beans \n",
            PrimaryCategory::VariableExpense,
            "Groceries",
            12.346,
        );
        assert_eq!(entry.label, "Coffee beans");
        assert_eq!(entry.amount, 12.35);
    }

    #[test]
    fn share_key_falls_back_to_primary_key() {
        let fixed = PrimaryCategory::FixedExpense;
        let blank = TransactionEntry::new("2024-03-03", "Misc", fixed, "", 5.0);
        assert_eq!(blank.share_key(), "fixed_expense");
        let named = TransactionEntry::new("2024-03-03", "Misc", fixed, "Utilities", 5.0);
        assert_eq!(named.share_key(), "Utilities");
    }

    #[test]
    fn category_parses_keys_labels_and_aliases() {
        assert_eq!("income".parse::<PrimaryCategory>().unwrap(), PrimaryCategory::Income);
        assert_eq!(
            "Fixed Expense".parse::<PrimaryCategory>().unwrap(),
            PrimaryCategory::FixedExpense
        );
        assert_eq!(
            "variable".parse::<PrimaryCategory>().unwrap(),
            PrimaryCategory::VariableExpense
        );
        assert!(matches!(
            "rent".parse::<PrimaryCategory>(),
            Err(PulseError::InvalidInput(_))
        ));
    }

    #[test]
    fn parse_amount_accepts_formatted_values() {
        assert_eq!(parse_amount("$1,254.24").unwrap(), 1254.24);
        assert_eq!(parse_amount(" 18 ").unwrap(), 18.0);
        assert_eq!(parse_amount("0.005").unwrap(), 0.01);
    }

    #[test]
    fn parse_amount_rejects_garbage_and_negatives() {
        assert!(matches!(parse_amount("twelve"), Err(PulseError::InvalidInput(_))));
        assert!(matches!(parse_amount("inf"), Err(PulseError::InvalidInput(_))));
        assert!(matches!(parse_amount("-4"), Err(PulseError::InvalidInput(_))));
    }

    #[test]
    fn default_entries_are_relative_to_today() {
        let entries = default_entries(date(2024, 3, 15));
        let dates: Vec<_> = entries.iter().map(|e| e.date.as_str()).collect();
        assert_eq!(dates, ["2024-03-13", "2024-03-14", "2024-03-15"]);
        assert_eq!(entries[2].amount, 145.76);
        assert!(entries[0].is_income());
    }

    #[test]
    fn subcategory_lists_are_fixed() {
        assert_eq!(
            default_subcategories(PrimaryCategory::FixedExpense),
            ["Rent/Mortgage", "Utilities", "Insurance", "Subscriptions"]
        );
    }

    #[test]
    fn demo_entries_stay_in_the_past() {
        let today = date(2024, 3, 15);
        let entries = demo_entries(today, 200);
        assert_eq!(entries.len(), 200);
        assert!(entries
            .iter()
            .all(|entry| entry.parsed_date().unwrap() <= today));
    }
}
