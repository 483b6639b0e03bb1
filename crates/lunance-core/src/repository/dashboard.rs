// Dashboard repository.

use std::sync::Arc;

use lunance_api::sources::DashboardDataSource;

use super::{Gateway, Operation};
use crate::entity::{DashboardSummary, MonthlyTrend};
use crate::outcome::Outcome;

const GET_SUMMARY: Operation = Operation::new("get_summary", "Gagal memuat ringkasan dashboard");
const GET_TREND: Operation = Operation::new("get_monthly_trend", "Gagal memuat tren bulanan");

pub struct DashboardRepository {
    source: Arc<dyn DashboardDataSource>,
    gateway: Gateway,
}

impl DashboardRepository {
    pub fn new(source: Arc<dyn DashboardDataSource>, gateway: Gateway) -> Self {
        Self { source, gateway }
    }

    pub async fn get_summary(&self, period: &str) -> Outcome<DashboardSummary> {
        self.gateway
            .fetch_one(GET_SUMMARY, move || self.source.get_summary(period))
            .await
    }

    pub async fn get_monthly_trend(&self, months: u32) -> Outcome<Vec<MonthlyTrend>> {
        self.gateway
            .fetch_many(GET_TREND, move || self.source.get_monthly_trend(months))
            .await
    }
}
