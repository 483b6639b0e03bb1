// Transaction history remote data source.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::{SourceError, decode_list, decode_object, expect_ack};
use crate::client::ApiClient;
use crate::models::TransactionModel;
use crate::requests::{CreateTransactionRequest, TransactionFilter, UpdateTransactionRequest};

#[async_trait]
pub trait HistoryDataSource: Send + Sync {
    /// `GET /transactions` with the set filters as query parameters.
    async fn get_transactions(
        &self,
        filter: &TransactionFilter,
    ) -> Result<Vec<TransactionModel>, SourceError>;

    /// `GET /transactions/{id}`
    async fn get_transaction(&self, id: &str) -> Result<TransactionModel, SourceError>;

    /// `GET /transactions/search?q=`
    async fn search_transactions(&self, query: &str) -> Result<Vec<TransactionModel>, SourceError>;

    /// `POST /transactions`
    async fn create_transaction(
        &self,
        request: &CreateTransactionRequest,
    ) -> Result<TransactionModel, SourceError>;

    /// `PUT /transactions/{id}`
    async fn update_transaction(
        &self,
        id: &str,
        request: &UpdateTransactionRequest,
    ) -> Result<TransactionModel, SourceError>;

    /// `DELETE /transactions/{id}`
    async fn delete_transaction(&self, id: &str) -> Result<(), SourceError>;
}

pub struct HttpHistoryDataSource {
    client: Arc<ApiClient>,
}

impl HttpHistoryDataSource {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HistoryDataSource for HttpHistoryDataSource {
    async fn get_transactions(
        &self,
        filter: &TransactionFilter,
    ) -> Result<Vec<TransactionModel>, SourceError> {
        let body = self.client.get(&["transactions"], &filter.to_query()).await?;
        decode_list("/transactions", &body)
    }

    async fn get_transaction(&self, id: &str) -> Result<TransactionModel, SourceError> {
        let body = self.client.get(&["transactions", id], &[]).await?;
        decode_object("/transactions/{id}", &body)
    }

    async fn search_transactions(&self, query: &str) -> Result<Vec<TransactionModel>, SourceError> {
        let body = self
            .client
            .get(&["transactions", "search"], &[("q", query.to_owned())])
            .await?;
        decode_list("/transactions/search", &body)
    }

    async fn create_transaction(
        &self,
        request: &CreateTransactionRequest,
    ) -> Result<TransactionModel, SourceError> {
        debug!(amount = request.amount, kind = %request.transaction_type, "creating transaction");
        let body = self.client.post(&["transactions"], request).await?;
        decode_object("/transactions", &body)
    }

    async fn update_transaction(
        &self,
        id: &str,
        request: &UpdateTransactionRequest,
    ) -> Result<TransactionModel, SourceError> {
        debug!(id, "updating transaction");
        let body = self.client.put(&["transactions", id], request).await?;
        decode_object("/transactions/{id}", &body)
    }

    async fn delete_transaction(&self, id: &str) -> Result<(), SourceError> {
        debug!(id, "deleting transaction");
        let body = self.client.delete(&["transactions", id]).await?;
        expect_ack("/transactions/{id}", &body)
    }
}
