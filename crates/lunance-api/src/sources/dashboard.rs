// Dashboard remote data source.

use std::sync::Arc;

use async_trait::async_trait;

use super::{SourceError, decode_list, decode_object};
use crate::client::ApiClient;
use crate::models::{DashboardSummaryModel, MonthlyTrendModel};

#[async_trait]
pub trait DashboardDataSource: Send + Sync {
    /// `GET /dashboard/summary?period=`
    async fn get_summary(&self, period: &str) -> Result<DashboardSummaryModel, SourceError>;

    /// `GET /dashboard/trend?months=`
    async fn get_monthly_trend(&self, months: u32) -> Result<Vec<MonthlyTrendModel>, SourceError>;
}

pub struct HttpDashboardDataSource {
    client: Arc<ApiClient>,
}

impl HttpDashboardDataSource {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DashboardDataSource for HttpDashboardDataSource {
    async fn get_summary(&self, period: &str) -> Result<DashboardSummaryModel, SourceError> {
        let body = self
            .client
            .get(&["dashboard", "summary"], &[("period", period.to_owned())])
            .await?;
        decode_object("/dashboard/summary", &body)
    }

    async fn get_monthly_trend(&self, months: u32) -> Result<Vec<MonthlyTrendModel>, SourceError> {
        let body = self
            .client
            .get(&["dashboard", "trend"], &[("months", months.to_string())])
            .await?;
        decode_list("/dashboard/trend", &body)
    }
}
