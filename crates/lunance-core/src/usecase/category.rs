// Category use cases.

use lunance_api::requests::{CreateCategoryRequest, UpdateCategoryRequest};

use super::use_case;
use crate::entity::{Category, CategoryWithStats, TransactionType};
use crate::outcome::Outcome;
use crate::repository::CategoryRepository;

#[derive(Debug, Clone, Default)]
pub struct SearchCategoriesParams {
    pub query: String,
    pub category_type: Option<TransactionType>,
}

#[derive(Debug, Clone)]
pub struct UpdateCategoryParams {
    pub id: String,
    pub request: UpdateCategoryRequest,
}

use_case! {
    /// List categories, optionally of one type.
    GetCategoriesUseCase(CategoryRepository) {
        params: Option<TransactionType>,
        output: Outcome<Vec<Category>>,
        |repo, category_type| repo.get_categories(category_type.as_ref()).await
    }
}

use_case! {
    GetCategoryUseCase(CategoryRepository) {
        params: String,
        output: Outcome<Category>,
        |repo, id| repo.get_category(&id).await
    }
}

use_case! {
    SearchCategoriesUseCase(CategoryRepository) {
        params: SearchCategoriesParams,
        output: Outcome<Vec<Category>>,
        |repo, params| {
            repo.search_categories(&params.query, params.category_type.as_ref())
                .await
        }
    }
}

use_case! {
    /// Most-used categories; `limit` caps the result length.
    GetPopularCategoriesUseCase(CategoryRepository) {
        params: u32,
        output: Outcome<Vec<Category>>,
        |repo, limit| repo.get_popular_categories(limit).await
    }
}

use_case! {
    GetCategoriesWithStatsUseCase(CategoryRepository) {
        params: Option<TransactionType>,
        output: Outcome<Vec<CategoryWithStats>>,
        |repo, category_type| repo.get_categories_with_stats(category_type.as_ref()).await
    }
}

use_case! {
    CreateCategoryUseCase(CategoryRepository) {
        params: CreateCategoryRequest,
        output: Outcome<Category>,
        |repo, request| repo.create_category(&request).await
    }
}

use_case! {
    UpdateCategoryUseCase(CategoryRepository) {
        params: UpdateCategoryParams,
        output: Outcome<Category>,
        |repo, params| repo.update_category(&params.id, &params.request).await
    }
}

use_case! {
    DeleteCategoryUseCase(CategoryRepository) {
        params: String,
        output: Outcome<()>,
        |repo, id| repo.delete_category(&id).await
    }
}
