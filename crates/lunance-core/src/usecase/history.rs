// Transaction history use cases.

use lunance_api::requests::{CreateTransactionRequest, TransactionFilter, UpdateTransactionRequest};

use super::use_case;
use crate::entity::Transaction;
use crate::outcome::Outcome;
use crate::repository::HistoryRepository;

#[derive(Debug, Clone)]
pub struct UpdateTransactionParams {
    pub id: String,
    pub request: UpdateTransactionRequest,
}

use_case! {
    GetTransactionsUseCase(HistoryRepository) {
        params: TransactionFilter,
        output: Outcome<Vec<Transaction>>,
        |repo, filter| repo.get_transactions(&filter).await
    }
}

use_case! {
    GetTransactionUseCase(HistoryRepository) {
        params: String,
        output: Outcome<Transaction>,
        |repo, id| repo.get_transaction(&id).await
    }
}

use_case! {
    SearchTransactionsUseCase(HistoryRepository) {
        params: String,
        output: Outcome<Vec<Transaction>>,
        |repo, query| repo.search_transactions(&query).await
    }
}

use_case! {
    CreateTransactionUseCase(HistoryRepository) {
        params: CreateTransactionRequest,
        output: Outcome<Transaction>,
        |repo, request| repo.create_transaction(&request).await
    }
}

use_case! {
    UpdateTransactionUseCase(HistoryRepository) {
        params: UpdateTransactionParams,
        output: Outcome<Transaction>,
        |repo, params| repo.update_transaction(&params.id, &params.request).await
    }
}

use_case! {
    DeleteTransactionUseCase(HistoryRepository) {
        params: String,
        output: Outcome<()>,
        |repo, id| repo.delete_transaction(&id).await
    }
}
