// ── Category domain types ──

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::TransactionType;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub category_type: TransactionType,
    /// Glyph name rendered next to the category.
    pub icon: String,
    /// `#RRGGBB`.
    pub color: String,
    pub keywords: Vec<String>,
    /// Seeded by the backend rather than created by the user.
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStats {
    pub transaction_count: u64,
    pub total_amount: f64,
    pub average_amount: f64,
    pub last_used: Option<DateTime<Utc>>,
}

impl CategoryStats {
    pub fn is_unused(&self) -> bool {
        self.transaction_count == 0
    }
}

/// A category joined with its usage aggregates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryWithStats {
    pub category: Category,
    pub stats: CategoryStats,
}
