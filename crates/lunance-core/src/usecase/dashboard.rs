// Dashboard use cases.

use super::use_case;
use crate::entity::{DashboardSummary, MonthlyTrend};
use crate::outcome::Outcome;
use crate::repository::DashboardRepository;

use_case! {
    /// Totals for a period such as `"monthly"` or `"weekly"`.
    GetDashboardSummaryUseCase(DashboardRepository) {
        params: String,
        output: Outcome<DashboardSummary>,
        |repo, period| repo.get_summary(&period).await
    }
}

use_case! {
    GetMonthlyTrendUseCase(DashboardRepository) {
        params: u32,
        output: Outcome<Vec<MonthlyTrend>>,
        |repo, months| repo.get_monthly_trend(months).await
    }
}
