// ── Wire-to-domain conversions ──
//
// Bridges `lunance_api::models` into `lunance_core::entity`. Every default
// was already applied while parsing, so each conversion is pure and total;
// the only work left is typing stringly fields.

use secrecy::SecretString;

use lunance_api::models::{
    AuthResponseModel, CategoryModel, CategorySpendingModel, CategoryWithStatsModel,
    DashboardSummaryModel, MonthlyTrendModel, PreferencesModel, TransactionModel,
    UserProfileModel,
};

use crate::entity::{
    AuthSession, Category, CategorySpending, CategoryStats, CategoryWithStats, DashboardSummary,
    MonthlyTrend, Preferences, Transaction, TransactionType, UserProfile,
};

/// Borrowing conversion from a wire model to its entity.
///
/// Calling it twice on the same model yields equal entities.
pub trait IntoEntity {
    type Entity;

    fn to_entity(&self) -> Self::Entity;
}

macro_rules! into_entity {
    ($($model:ty => $entity:ty),+ $(,)?) => {
        $(
            impl IntoEntity for $model {
                type Entity = $entity;

                fn to_entity(&self) -> $entity {
                    <$entity>::from(self.clone())
                }
            }
        )+
    };
}

into_entity! {
    CategoryModel => Category,
    CategoryWithStatsModel => CategoryWithStats,
    TransactionModel => Transaction,
    DashboardSummaryModel => DashboardSummary,
    CategorySpendingModel => CategorySpending,
    MonthlyTrendModel => MonthlyTrend,
    UserProfileModel => UserProfile,
    PreferencesModel => Preferences,
    AuthResponseModel => AuthSession,
}

// ── Category ───────────────────────────────────────────────────────

impl From<CategoryModel> for Category {
    fn from(m: CategoryModel) -> Self {
        Self {
            id: m.id,
            name: m.name,
            category_type: TransactionType::from(m.category_type),
            icon: m.icon,
            color: m.color,
            keywords: m.keywords,
            is_default: m.is_default,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<CategoryWithStatsModel> for CategoryWithStats {
    fn from(m: CategoryWithStatsModel) -> Self {
        Self {
            category: Category::from(m.category),
            stats: CategoryStats {
                transaction_count: m.transaction_count,
                total_amount: m.total_amount,
                average_amount: m.average_amount,
                last_used: m.last_used,
            },
        }
    }
}

// ── Transaction ────────────────────────────────────────────────────

impl From<TransactionModel> for Transaction {
    fn from(m: TransactionModel) -> Self {
        Self {
            id: m.id,
            transaction_type: TransactionType::from(m.transaction_type),
            amount: m.amount.abs(),
            category_id: m.category_id,
            category_name: m.category_name,
            description: m.description,
            notes: m.notes,
            date: m.date,
            created_at: m.created_at,
        }
    }
}

// ── Dashboard ──────────────────────────────────────────────────────

impl From<DashboardSummaryModel> for DashboardSummary {
    fn from(m: DashboardSummaryModel) -> Self {
        Self {
            period: m.period,
            total_income: m.total_income,
            total_expense: m.total_expense,
            balance: m.balance,
            transaction_count: m.transaction_count,
            top_categories: m.top_categories.into_iter().map(CategorySpending::from).collect(),
            recent_transactions: m
                .recent_transactions
                .into_iter()
                .map(Transaction::from)
                .collect(),
        }
    }
}

impl From<CategorySpendingModel> for CategorySpending {
    fn from(m: CategorySpendingModel) -> Self {
        Self {
            category_id: m.category_id,
            name: m.name,
            amount: m.amount,
            percentage: m.percentage,
        }
    }
}

impl From<MonthlyTrendModel> for MonthlyTrend {
    fn from(m: MonthlyTrendModel) -> Self {
        Self {
            month: m.month,
            income: m.income,
            expense: m.expense,
        }
    }
}

// ── Account ────────────────────────────────────────────────────────

impl From<UserProfileModel> for UserProfile {
    fn from(m: UserProfileModel) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            university: m.university,
            created_at: m.created_at,
        }
    }
}

impl From<PreferencesModel> for Preferences {
    fn from(m: PreferencesModel) -> Self {
        Self {
            currency: m.currency,
            language: m.language,
            theme: m.theme,
            notifications_enabled: m.notifications_enabled,
            monthly_budget: m.monthly_budget,
        }
    }
}

impl From<AuthResponseModel> for AuthSession {
    fn from(m: AuthResponseModel) -> Self {
        Self {
            access_token: SecretString::from(m.access_token),
            token_type: m.token_type,
            user: UserProfile::from(m.user),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use lunance_api::WireModel;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn category_type_is_parsed() {
        let model = CategoryModel::from_json(&json!({ "id": "1", "name": "Gaji", "type": "income" })).unwrap();
        let category = model.to_entity();
        assert_eq!(category.category_type, TransactionType::Income);
        assert_eq!(category.keywords, Vec::<String>::new());
    }

    #[test]
    fn unknown_type_is_preserved() {
        let model = CategoryModel::from_json(&json!({ "id": "1", "type": "savings" })).unwrap();
        assert_eq!(
            Category::from(model).category_type,
            TransactionType::Other("savings".into())
        );
    }

    #[test]
    fn to_entity_is_idempotent() {
        let model = CategoryWithStatsModel::from_json(&json!({
            "id": "9",
            "name": "Kos",
            "type": "expense",
            "transaction_count": 3,
            "total_amount": 2_400_000
        }))
        .unwrap();
        assert_eq!(model.to_entity(), model.to_entity());
    }

    #[test]
    fn amount_is_a_magnitude_signed_by_type() {
        let model = TransactionModel::from_json(&json!({ "id": "t", "type": "expense", "amount": -5000 })).unwrap();
        let tx = model.to_entity();
        assert!((tx.amount - 5000.0).abs() < f64::EPSILON);
        assert!((tx.signed_amount() + 5000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn auth_session_keeps_token_secret() {
        let model = AuthResponseModel::from_json(&json!({
            "access_token": "super-secret-jwt",
            "user": { "id": "u1", "name": "Sari", "email": "sari@kampus.ac.id" }
        }))
        .unwrap();
        let session = model.to_entity();
        assert_eq!(session.user.name, "Sari");
        assert!(!format!("{session:?}").contains("super-secret-jwt"));
    }
}
