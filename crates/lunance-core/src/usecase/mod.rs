// ── Use cases ──
//
// One struct per repository operation: the unit presentation code calls.
// Each holds an `Arc` to its repository and forwards to it; the output is
// the repository's `Outcome` unchanged. Login and registration are the
// exception and validate their input before touching the network.

use async_trait::async_trait;

pub use auth::{
    GetCurrentUserUseCase, LoginUseCase, LogoutUseCase, RegisterUseCase, validate_login,
    validate_registration,
};
pub use category::{
    CreateCategoryUseCase, DeleteCategoryUseCase, GetCategoriesUseCase,
    GetCategoriesWithStatsUseCase, GetCategoryUseCase, GetPopularCategoriesUseCase,
    SearchCategoriesParams, SearchCategoriesUseCase, UpdateCategoryParams, UpdateCategoryUseCase,
};
pub use dashboard::{GetDashboardSummaryUseCase, GetMonthlyTrendUseCase};
pub use history::{
    CreateTransactionUseCase, DeleteTransactionUseCase, GetTransactionUseCase,
    GetTransactionsUseCase, SearchTransactionsUseCase, UpdateTransactionParams,
    UpdateTransactionUseCase,
};
pub use settings::{
    ChangePasswordUseCase, GetPreferencesUseCase, GetProfileUseCase, UpdatePreferencesUseCase,
    UpdateProfileUseCase,
};

/// A single application operation.
#[async_trait]
pub trait UseCase: Send + Sync {
    type Params: Send;
    type Output: Send;

    async fn call(&self, params: Self::Params) -> Self::Output;
}

/// Declare a use case that forwards straight to one repository method.
///
/// ```ignore
/// use_case! {
///     GetCategoryUseCase(CategoryRepository) {
///         params: String,
///         output: Outcome<Category>,
///         |repo, id| repo.get_category(&id).await
///     }
/// }
/// ```
macro_rules! use_case {
    (
        $(#[$meta:meta])*
        $name:ident($repo:ty) {
            params: $params:ty,
            output: $output:ty,
            |$r:ident, $p:tt| $body:expr
        }
    ) => {
        $(#[$meta])*
        pub struct $name {
            repository: ::std::sync::Arc<$repo>,
        }

        impl $name {
            pub fn new(repository: ::std::sync::Arc<$repo>) -> Self {
                Self { repository }
            }
        }

        #[::async_trait::async_trait]
        impl $crate::usecase::UseCase for $name {
            type Params = $params;
            type Output = $output;

            async fn call(&self, $p: Self::Params) -> Self::Output {
                let $r = &*self.repository;
                $body
            }
        }
    };
}

pub(crate) use use_case;

pub mod auth;
pub mod category;
pub mod dashboard;
pub mod history;
pub mod settings;
