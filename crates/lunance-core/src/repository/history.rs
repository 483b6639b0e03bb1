// Transaction history repository.

use std::sync::Arc;

use lunance_api::requests::{CreateTransactionRequest, TransactionFilter, UpdateTransactionRequest};
use lunance_api::sources::HistoryDataSource;

use super::{Gateway, Operation};
use crate::entity::Transaction;
use crate::outcome::Outcome;

const GET_TRANSACTIONS: Operation =
    Operation::new("get_transactions", "Gagal memuat riwayat transaksi");
const GET_TRANSACTION: Operation =
    Operation::new("get_transaction", "Gagal memuat detail transaksi");
const SEARCH_TRANSACTIONS: Operation =
    Operation::new("search_transactions", "Gagal mencari transaksi");
const CREATE_TRANSACTION: Operation =
    Operation::new("create_transaction", "Gagal menambah transaksi");
const UPDATE_TRANSACTION: Operation =
    Operation::new("update_transaction", "Gagal memperbarui transaksi");
const DELETE_TRANSACTION: Operation =
    Operation::new("delete_transaction", "Gagal menghapus transaksi");

pub struct HistoryRepository {
    source: Arc<dyn HistoryDataSource>,
    gateway: Gateway,
}

impl HistoryRepository {
    pub fn new(source: Arc<dyn HistoryDataSource>, gateway: Gateway) -> Self {
        Self { source, gateway }
    }

    pub async fn get_transactions(&self, filter: &TransactionFilter) -> Outcome<Vec<Transaction>> {
        self.gateway
            .fetch_many(GET_TRANSACTIONS, move || self.source.get_transactions(filter))
            .await
    }

    pub async fn get_transaction(&self, id: &str) -> Outcome<Transaction> {
        self.gateway
            .fetch_one(GET_TRANSACTION, move || self.source.get_transaction(id))
            .await
    }

    pub async fn search_transactions(&self, query: &str) -> Outcome<Vec<Transaction>> {
        self.gateway
            .fetch_many(SEARCH_TRANSACTIONS, move || self.source.search_transactions(query))
            .await
    }

    pub async fn create_transaction(
        &self,
        request: &CreateTransactionRequest,
    ) -> Outcome<Transaction> {
        self.gateway
            .fetch_one(CREATE_TRANSACTION, move || self.source.create_transaction(request))
            .await
    }

    pub async fn update_transaction(
        &self,
        id: &str,
        request: &UpdateTransactionRequest,
    ) -> Outcome<Transaction> {
        self.gateway
            .fetch_one(UPDATE_TRANSACTION, move || {
                self.source.update_transaction(id, request)
            })
            .await
    }

    pub async fn delete_transaction(&self, id: &str) -> Outcome<()> {
        self.gateway
            .execute(DELETE_TRANSACTION, move || self.source.delete_transaction(id))
            .await
    }
}
