// Dashboard wire models.
//
// `GET /dashboard/summary` returns a single object; `GET /dashboard/trend`
// returns a list of per-month totals.

use serde::{Deserialize, Serialize};

use super::transaction::TransactionModel;
use super::{WireModel, lenient};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummaryModel {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub period: String,

    #[serde(default, deserialize_with = "lenient::amount")]
    pub total_income: f64,

    #[serde(default, deserialize_with = "lenient::amount")]
    pub total_expense: f64,

    #[serde(default, deserialize_with = "lenient::amount")]
    pub balance: f64,

    #[serde(default, deserialize_with = "lenient::count")]
    pub transaction_count: u64,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub top_categories: Vec<CategorySpendingModel>,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub recent_transactions: Vec<TransactionModel>,
}

/// One slice of the spending breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpendingModel {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub category_id: String,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient::amount")]
    pub amount: f64,

    #[serde(default, deserialize_with = "lenient::amount")]
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrendModel {
    /// `YYYY-MM`.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub month: String,

    #[serde(default, deserialize_with = "lenient::amount")]
    pub income: f64,

    #[serde(default, deserialize_with = "lenient::amount")]
    pub expense: f64,
}

impl WireModel for DashboardSummaryModel {}
impl WireModel for CategorySpendingModel {}
impl WireModel for MonthlyTrendModel {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_summary_is_all_zeroes() {
        let model = DashboardSummaryModel::from_json(&json!({})).unwrap();
        assert_eq!(model.transaction_count, 0);
        assert!(model.top_categories.is_empty());
        assert!(model.recent_transactions.is_empty());
        assert!(model.balance.abs() < f64::EPSILON);
    }

    #[test]
    fn nested_lists_are_parsed_leniently() {
        let model = DashboardSummaryModel::from_json(&json!({
            "period": "month",
            "total_income": 3_000_000,
            "total_expense": "1250000",
            "balance": 1_750_000,
            "top_categories": [{ "category_id": "c1", "name": "Makan", "amount": 800_000, "percentage": "64" }],
            "recent_transactions": null
        }))
        .unwrap();

        assert_eq!(model.top_categories.len(), 1);
        assert!((model.top_categories[0].percentage - 64.0).abs() < f64::EPSILON);
        assert!((model.total_expense - 1_250_000.0).abs() < f64::EPSILON);
        assert!(model.recent_transactions.is_empty());
    }
}
