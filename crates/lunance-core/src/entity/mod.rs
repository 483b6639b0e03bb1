// ── Domain entities ──
//
// Immutable value objects handed to presentation code. Built only from wire
// models (see `convert`) or by explicit construction; equality is
// structural over every field.

pub mod account;
pub mod category;
pub mod dashboard;
pub mod transaction;

pub use account::{AuthSession, Preferences, UserProfile};
pub use category::{Category, CategoryStats, CategoryWithStats};
pub use dashboard::{CategorySpending, DashboardSummary, MonthlyTrend};
pub use lunance_api::TransactionType;
pub use transaction::Transaction;
