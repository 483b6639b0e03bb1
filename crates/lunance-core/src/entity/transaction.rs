// ── Transaction domain type ──

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::TransactionType;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub id: String,
    pub transaction_type: TransactionType,
    /// Always non-negative; direction comes from `transaction_type`.
    pub amount: f64,
    pub category_id: String,
    pub category_name: Option<String>,
    pub description: String,
    pub notes: Option<String>,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Amount with income positive and expense negative. Other kinds count as zero.
    pub fn signed_amount(&self) -> f64 {
        match self.transaction_type {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
            TransactionType::Other(_) => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_amount_follows_type() {
        let mut tx = Transaction {
            id: "t1".into(),
            transaction_type: TransactionType::Expense,
            amount: 15_000.0,
            category_id: "c1".into(),
            category_name: None,
            description: "Kopi".into(),
            notes: None,
            date: Utc::now(),
            created_at: Utc::now(),
        };
        assert!((tx.signed_amount() + 15_000.0).abs() < f64::EPSILON);
        tx.transaction_type = TransactionType::Income;
        assert!((tx.signed_amount() - 15_000.0).abs() < f64::EPSILON);
        tx.transaction_type = TransactionType::Other("transfer".into());
        assert!(tx.signed_amount().abs() < f64::EPSILON);
    }
}
