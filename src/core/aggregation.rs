//! KPI aggregation over an already filtered, already ordered entry sequence.
//!
//! Sums are accumulated unrounded and quantized once at the output boundary. Grouping goes
//! through `BTreeMap`s so the emitted order never depends on hashing.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::currency::to_currency;
use crate::domain::kpi::{CategoryShareSlice, KpiBundle, TrendSeriesPoint};
use crate::domain::transaction::TransactionEntry;
use crate::period::calendar::{month_day_label, start_of_week, to_iso_date};

/// Unrounded income and expense sums.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawTotals {
    pub income: f64,
    pub expenses: f64,
}

impl RawTotals {
    fn add(&mut self, entry: &TransactionEntry) {
        if entry.is_income() {
            self.income += entry.amount;
        } else {
            self.expenses += entry.amount;
        }
    }

    pub fn net(&self) -> f64 {
        self.income - self.expenses
    }
}

pub fn sum_totals(entries: &[TransactionEntry]) -> RawTotals {
    entries.iter().fold(RawTotals::default(), |mut totals, entry| {
        totals.add(entry);
        totals
    })
}

/// Weekly buckets keyed by the Monday of each entry's week, ascending.
///
/// Entries whose date does not parse, or whose week would start before the
/// earliest representable date, are left out.
pub fn build_trend_series(entries: &[TransactionEntry]) -> Vec<TrendSeriesPoint> {
    let mut buckets: BTreeMap<NaiveDate, RawTotals> = BTreeMap::new();
    for entry in entries {
        let Some(date) = entry.parsed_date() else {
            continue;
        };
        let Some(week_start) = start_of_week(date) else {
            continue;
        };
        buckets.entry(week_start).or_default().add(entry);
    }

    buckets
        .into_iter()
        .map(|(week_start, totals)| TrendSeriesPoint {
            label: month_day_label(week_start),
            week_start: to_iso_date(week_start),
            income: to_currency(totals.income),
            expenses: to_currency(totals.expenses),
        })
        .collect()
}

/// Expense share per subcategory (or primary category when the subcategory is blank),
/// largest first. Empty when there is no positive expense total.
pub fn build_category_share(entries: &[TransactionEntry]) -> Vec<CategoryShareSlice> {
    let expenses: Vec<&TransactionEntry> = entries.iter().filter(|e| e.is_expense()).collect();
    let total: f64 = expenses.iter().map(|entry| entry.amount).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut groups: BTreeMap<&str, f64> = BTreeMap::new();
    for entry in &expenses {
        *groups.entry(entry.share_key()).or_insert(0.0) += entry.amount;
    }

    let mut slices: Vec<CategoryShareSlice> = groups
        .into_iter()
        .map(|(category, sum)| CategoryShareSlice {
            category: category.to_string(),
            value: to_currency(sum),
            // One decimal place, half-up.
            percentage: ((sum / total) * 1000.0 + 0.5).floor() / 10.0,
        })
        .collect();
    // Stable: equal values keep the map's name order.
    slices.sort_by(|a, b| b.value.total_cmp(&a.value));
    slices
}

/// Builds the full KPI bundle for the filtered entries.
pub fn build_kpis(entries: &[TransactionEntry]) -> KpiBundle {
    let totals = sum_totals(entries);
    let net = to_currency(totals.net());
    KpiBundle {
        total_income: to_currency(totals.income),
        total_expenses: to_currency(totals.expenses),
        amount_saved: net,
        leftover_balance: net,
        trend_series: build_trend_series(entries),
        category_share: build_category_share(entries),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::PrimaryCategory;

    fn entry(date: &str, category: PrimaryCategory, sub: &str, amount: f64) -> TransactionEntry {
        TransactionEntry::new(date, "entry", category, sub, amount)
    }

    fn scenario() -> Vec<TransactionEntry> {
        vec![
            entry("2024-03-03", PrimaryCategory::VariableExpense, "Groceries", 145.76),
            entry("2024-03-02", PrimaryCategory::FixedExpense, "Rent/Mortgage", 1800.0),
            entry("2024-03-01", PrimaryCategory::Income, "Freelance", 3200.0),
        ]
    }

    #[test]
    fn totals_and_savings() {
        let kpis = build_kpis(&scenario());
        assert_eq!(kpis.total_income, 3200.0);
        assert_eq!(kpis.total_expenses, 1945.76);
        assert_eq!(kpis.amount_saved, 1254.24);
        assert_eq!(kpis.leftover_balance, kpis.amount_saved);
    }

    #[test]
    fn category_share_matches_reference_split() {
        let share = build_category_share(&scenario());
        assert_eq!(
            share,
            vec![
                CategoryShareSlice {
                    category: "Rent/Mortgage".into(),
                    value: 1800.0,
                    percentage: 92.5,
                },
                CategoryShareSlice {
                    category: "Groceries".into(),
                    value: 145.76,
                    percentage: 7.5,
                },
            ]
        );
    }

    #[test]
    fn category_share_is_empty_without_expenses() {
        let incomes = vec![entry("2024-03-01", PrimaryCategory::Income, "Salary", 10.0)];
        assert!(build_category_share(&incomes).is_empty());
        let zero = vec![entry("2024-03-01", PrimaryCategory::FixedExpense, "Utilities", 0.0)];
        assert!(build_category_share(&zero).is_empty());
    }

    #[test]
    fn blank_subcategory_groups_under_primary_key() {
        let entries = vec![
            entry("2024-03-01", PrimaryCategory::FixedExpense, "", 30.0),
            entry("2024-03-02", PrimaryCategory::FixedExpense, "", 10.0),
            entry("2024-03-02", PrimaryCategory::VariableExpense, "", 60.0),
        ];
        let share = build_category_share(&entries);
        assert_eq!(share[0].category, "variable_expense");
        assert_eq!(share[1].category, "fixed_expense");
        assert_eq!(share[1].value, 40.0);
        assert_eq!(share[1].percentage, 40.0);
    }

    #[test]
    fn equal_values_are_ordered_by_name() {
        let entries = vec![
            entry("2024-03-01", PrimaryCategory::VariableExpense, "Dining", 25.0),
            entry("2024-03-01", PrimaryCategory::VariableExpense, "Books", 25.0),
        ];
        let names: Vec<_> = build_category_share(&entries)
            .into_iter()
            .map(|slice| slice.category)
            .collect();
        assert_eq!(names, ["Books", "Dining"]);
    }

    #[test]
    fn trend_buckets_by_monday_in_ascending_order() {
        let entries = vec![
            entry("2024-03-11", PrimaryCategory::VariableExpense, "Dining", 20.0),
            entry("2024-03-03", PrimaryCategory::Income, "Salary", 100.0),
            entry("2024-03-04", PrimaryCategory::VariableExpense, "Dining", 5.5),
            entry("2024-03-10", PrimaryCategory::VariableExpense, "Dining", 4.5),
            entry("bogus", PrimaryCategory::VariableExpense, "Dining", 999.0),
        ];
        let series = build_trend_series(&entries);
        let labels: Vec<_> = series.iter().map(|point| point.label.as_str()).collect();
        assert_eq!(labels, ["Feb 26", "Mar 4", "Mar 11"]);
        assert_eq!(series[0].income, 100.0);
        assert_eq!(series[1].expenses, 10.0);
        assert_eq!(series[1].week_start, "2024-03-04");
        assert_eq!(series[2].expenses, 20.0);
    }

    #[test]
    fn small_amounts_are_summed_before_rounding() {
        let entries: Vec<_> = (0..10)
            .map(|_| entry("2024-03-05", PrimaryCategory::VariableExpense, "Dining", 0.1))
            .collect();
        let kpis = build_kpis(&entries);
        assert_eq!(kpis.total_expenses, 1.0);
        assert_eq!(kpis.trend_series[0].expenses, 1.0);
        assert_eq!(kpis.amount_saved, -1.0);
    }

    #[test]
    fn nan_amount_does_not_disturb_share_order() {
        let entries = vec![
            entry("2024-03-01", PrimaryCategory::VariableExpense, "Dining", 25.0),
            entry("2024-03-02", PrimaryCategory::VariableExpense, "Misc", f64::NAN),
            entry("2024-03-03", PrimaryCategory::VariableExpense, "Books", 75.0),
        ];
        let share = build_category_share(&entries);
        assert_eq!(share.len(), 3);
        let nan_at = share.iter().position(|slice| slice.value.is_nan()).unwrap();
        assert!(nan_at == 0 || nan_at == 2);
        let finite: Vec<_> = share
            .iter()
            .filter(|slice| !slice.value.is_nan())
            .map(|slice| slice.category.as_str())
            .collect();
        assert_eq!(finite, ["Books", "Dining"]);
    }

    #[test]
    fn weeks_starting_before_min_date_are_skipped() {
        let entries = vec![
            entry("-262143-01-02", PrimaryCategory::VariableExpense, "Dining", 10.0),
            entry("2024-03-04", PrimaryCategory::VariableExpense, "Dining", 5.0),
        ];
        let series = build_trend_series(&entries);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].week_start, "2024-03-04");
        assert_eq!(series[0].expenses, 5.0);
    }
}
