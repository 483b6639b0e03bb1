// ── Dashboard domain types ──

use serde::Serialize;

use super::Transaction;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    /// Server-side period label, e.g. `month` or `week`.
    pub period: String,
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
    pub transaction_count: u64,
    pub top_categories: Vec<CategorySpending>,
    pub recent_transactions: Vec<Transaction>,
}

impl DashboardSummary {
    /// Share of income already spent, in percent. `None` without income.
    pub fn spending_ratio(&self) -> Option<f64> {
        (self.total_income > 0.0).then(|| self.total_expense / self.total_income * 100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpending {
    pub category_id: String,
    pub name: String,
    pub amount: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTrend {
    /// `YYYY-MM`.
    pub month: String,
    pub income: f64,
    pub expense: f64,
}

impl MonthlyTrend {
    pub fn net(&self) -> f64 {
        self.income - self.expense
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spending_ratio_needs_income() {
        let mut summary = DashboardSummary {
            period: "month".into(),
            total_income: 2_000_000.0,
            total_expense: 500_000.0,
            balance: 1_500_000.0,
            transaction_count: 4,
            top_categories: Vec::new(),
            recent_transactions: Vec::new(),
        };
        assert_eq!(summary.spending_ratio(), Some(25.0));
        summary.total_income = 0.0;
        assert_eq!(summary.spending_ratio(), None);
    }

    #[test]
    fn trend_net() {
        let trend = MonthlyTrend {
            month: "2024-02".into(),
            income: 100.0,
            expense: 140.0,
        };
        assert!((trend.net() + 40.0).abs() < f64::EPSILON);
    }
}
