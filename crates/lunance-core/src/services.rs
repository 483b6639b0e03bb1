// ── Service wiring ──
//
// Explicit dependency injection: one shared `ApiClient`, one reachability
// gate and one session store in, every repository and use case out. No
// global registry; consumers hold a `Services` and pull what they need.

use std::sync::Arc;

use lunance_api::ApiClient;
use lunance_api::sources::{
    AuthDataSource, CategoryDataSource, DashboardDataSource, HistoryDataSource,
    HttpAuthDataSource, HttpCategoryDataSource, HttpDashboardDataSource, HttpHistoryDataSource,
    HttpSettingsDataSource, SettingsDataSource,
};

use crate::reachability::Reachability;
use crate::repository::{
    AuthRepository, CategoryRepository, DashboardRepository, Gateway, HistoryRepository,
    SettingsRepository,
};
use crate::session::SessionStore;
use crate::usecase::{
    ChangePasswordUseCase, CreateCategoryUseCase, CreateTransactionUseCase, DeleteCategoryUseCase,
    DeleteTransactionUseCase, GetCategoriesUseCase, GetCategoriesWithStatsUseCase,
    GetCategoryUseCase, GetCurrentUserUseCase, GetDashboardSummaryUseCase, GetMonthlyTrendUseCase,
    GetPopularCategoriesUseCase, GetPreferencesUseCase, GetProfileUseCase, GetTransactionUseCase,
    GetTransactionsUseCase, LoginUseCase, LogoutUseCase, RegisterUseCase, SearchCategoriesUseCase,
    SearchTransactionsUseCase, UpdateCategoryUseCase, UpdatePreferencesUseCase,
    UpdateProfileUseCase, UpdateTransactionUseCase,
};

/// Data sources behind the repositories. Swap any of them in tests.
pub struct DataSources {
    pub auth: Arc<dyn AuthDataSource>,
    pub categories: Arc<dyn CategoryDataSource>,
    pub dashboard: Arc<dyn DashboardDataSource>,
    pub history: Arc<dyn HistoryDataSource>,
    pub settings: Arc<dyn SettingsDataSource>,
}

impl DataSources {
    /// HTTP data sources sharing one client.
    pub fn http(client: &Arc<ApiClient>) -> Self {
        Self {
            auth: Arc::new(HttpAuthDataSource::new(Arc::clone(client))),
            categories: Arc::new(HttpCategoryDataSource::new(Arc::clone(client))),
            dashboard: Arc::new(HttpDashboardDataSource::new(Arc::clone(client))),
            history: Arc::new(HttpHistoryDataSource::new(Arc::clone(client))),
            settings: Arc::new(HttpSettingsDataSource::new(Arc::clone(client))),
        }
    }
}

/// Every repository, built once and shared.
#[derive(Clone)]
pub struct Services {
    pub client: Arc<ApiClient>,
    pub auth: Arc<AuthRepository>,
    pub categories: Arc<CategoryRepository>,
    pub dashboard: Arc<DashboardRepository>,
    pub history: Arc<HistoryRepository>,
    pub settings: Arc<SettingsRepository>,
}

impl Services {
    pub fn new(
        client: Arc<ApiClient>,
        reachability: Arc<dyn Reachability>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        let sources = DataSources::http(&client);
        Self::with_sources(client, sources, reachability, sessions)
    }

    pub fn with_sources(
        client: Arc<ApiClient>,
        sources: DataSources,
        reachability: Arc<dyn Reachability>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        let gateway = Gateway::new(reachability);
        Self {
            auth: Arc::new(AuthRepository::new(
                sources.auth,
                gateway.clone(),
                Arc::clone(&client),
                sessions,
            )),
            categories: Arc::new(CategoryRepository::new(sources.categories, gateway.clone())),
            dashboard: Arc::new(DashboardRepository::new(sources.dashboard, gateway.clone())),
            history: Arc::new(HistoryRepository::new(sources.history, gateway.clone())),
            settings: Arc::new(SettingsRepository::new(sources.settings, gateway)),
            client,
        }
    }

    // ── Auth ──

    pub fn login(&self) -> LoginUseCase {
        LoginUseCase::new(Arc::clone(&self.auth))
    }

    pub fn register(&self) -> RegisterUseCase {
        RegisterUseCase::new(Arc::clone(&self.auth))
    }

    pub fn logout(&self) -> LogoutUseCase {
        LogoutUseCase::new(Arc::clone(&self.auth))
    }

    pub fn current_user(&self) -> GetCurrentUserUseCase {
        GetCurrentUserUseCase::new(Arc::clone(&self.auth))
    }

    // ── Categories ──

    pub fn get_categories(&self) -> GetCategoriesUseCase {
        GetCategoriesUseCase::new(Arc::clone(&self.categories))
    }

    pub fn get_category(&self) -> GetCategoryUseCase {
        GetCategoryUseCase::new(Arc::clone(&self.categories))
    }

    pub fn search_categories(&self) -> SearchCategoriesUseCase {
        SearchCategoriesUseCase::new(Arc::clone(&self.categories))
    }

    pub fn popular_categories(&self) -> GetPopularCategoriesUseCase {
        GetPopularCategoriesUseCase::new(Arc::clone(&self.categories))
    }

    pub fn categories_with_stats(&self) -> GetCategoriesWithStatsUseCase {
        GetCategoriesWithStatsUseCase::new(Arc::clone(&self.categories))
    }

    pub fn create_category(&self) -> CreateCategoryUseCase {
        CreateCategoryUseCase::new(Arc::clone(&self.categories))
    }

    pub fn update_category(&self) -> UpdateCategoryUseCase {
        UpdateCategoryUseCase::new(Arc::clone(&self.categories))
    }

    pub fn delete_category(&self) -> DeleteCategoryUseCase {
        DeleteCategoryUseCase::new(Arc::clone(&self.categories))
    }

    // ── Dashboard ──

    pub fn dashboard_summary(&self) -> GetDashboardSummaryUseCase {
        GetDashboardSummaryUseCase::new(Arc::clone(&self.dashboard))
    }

    pub fn monthly_trend(&self) -> GetMonthlyTrendUseCase {
        GetMonthlyTrendUseCase::new(Arc::clone(&self.dashboard))
    }

    // ── History ──

    pub fn get_transactions(&self) -> GetTransactionsUseCase {
        GetTransactionsUseCase::new(Arc::clone(&self.history))
    }

    pub fn get_transaction(&self) -> GetTransactionUseCase {
        GetTransactionUseCase::new(Arc::clone(&self.history))
    }

    pub fn search_transactions(&self) -> SearchTransactionsUseCase {
        SearchTransactionsUseCase::new(Arc::clone(&self.history))
    }

    pub fn create_transaction(&self) -> CreateTransactionUseCase {
        CreateTransactionUseCase::new(Arc::clone(&self.history))
    }

    pub fn update_transaction(&self) -> UpdateTransactionUseCase {
        UpdateTransactionUseCase::new(Arc::clone(&self.history))
    }

    pub fn delete_transaction(&self) -> DeleteTransactionUseCase {
        DeleteTransactionUseCase::new(Arc::clone(&self.history))
    }

    // ── Settings ──

    pub fn get_profile(&self) -> GetProfileUseCase {
        GetProfileUseCase::new(Arc::clone(&self.settings))
    }

    pub fn update_profile(&self) -> UpdateProfileUseCase {
        UpdateProfileUseCase::new(Arc::clone(&self.settings))
    }

    pub fn change_password(&self) -> ChangePasswordUseCase {
        ChangePasswordUseCase::new(Arc::clone(&self.settings))
    }

    pub fn get_preferences(&self) -> GetPreferencesUseCase {
        GetPreferencesUseCase::new(Arc::clone(&self.settings))
    }

    pub fn update_preferences(&self) -> UpdatePreferencesUseCase {
        UpdatePreferencesUseCase::new(Arc::clone(&self.settings))
    }
}
