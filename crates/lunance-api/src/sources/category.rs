// Category remote data source.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::{SourceError, decode_list, decode_object, expect_ack, push_opt};
use crate::client::ApiClient;
use crate::models::{CategoryModel, CategoryWithStatsModel, TransactionType};
use crate::requests::{CreateCategoryRequest, UpdateCategoryRequest};

#[async_trait]
pub trait CategoryDataSource: Send + Sync {
    /// `GET /categories?category_type=`
    async fn get_categories(
        &self,
        category_type: Option<&TransactionType>,
    ) -> Result<Vec<CategoryModel>, SourceError>;

    /// `GET /categories/{id}`
    async fn get_category(&self, id: &str) -> Result<CategoryModel, SourceError>;

    /// `GET /categories/search?q=&category_type=`
    ///
    /// The query is sent as given, including the empty string.
    async fn search_categories(
        &self,
        query: &str,
        category_type: Option<&TransactionType>,
    ) -> Result<Vec<CategoryModel>, SourceError>;

    /// `GET /categories/popular?limit=`
    async fn get_popular_categories(&self, limit: u32) -> Result<Vec<CategoryModel>, SourceError>;

    /// `GET /categories/with-stats?category_type=`
    async fn get_categories_with_stats(
        &self,
        category_type: Option<&TransactionType>,
    ) -> Result<Vec<CategoryWithStatsModel>, SourceError>;

    /// `POST /categories`
    async fn create_category(
        &self,
        request: &CreateCategoryRequest,
    ) -> Result<CategoryModel, SourceError>;

    /// `PUT /categories/{id}`
    async fn update_category(
        &self,
        id: &str,
        request: &UpdateCategoryRequest,
    ) -> Result<CategoryModel, SourceError>;

    /// `DELETE /categories/{id}`
    async fn delete_category(&self, id: &str) -> Result<(), SourceError>;
}

/// [`CategoryDataSource`] over the Lunance REST API.
pub struct HttpCategoryDataSource {
    client: Arc<ApiClient>,
}

impl HttpCategoryDataSource {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

fn type_filter(category_type: Option<&TransactionType>) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    push_opt(&mut params, "category_type", category_type.map(ToString::to_string));
    params
}

#[async_trait]
impl CategoryDataSource for HttpCategoryDataSource {
    async fn get_categories(
        &self,
        category_type: Option<&TransactionType>,
    ) -> Result<Vec<CategoryModel>, SourceError> {
        let body = self
            .client
            .get(&["categories"], &type_filter(category_type))
            .await?;
        decode_list("/categories", &body)
    }

    async fn get_category(&self, id: &str) -> Result<CategoryModel, SourceError> {
        let body = self.client.get(&["categories", id], &[]).await?;
        decode_object("/categories/{id}", &body)
    }

    async fn search_categories(
        &self,
        query: &str,
        category_type: Option<&TransactionType>,
    ) -> Result<Vec<CategoryModel>, SourceError> {
        debug!(query, "searching categories");
        let mut params = vec![("q", query.to_owned())];
        params.extend(type_filter(category_type));
        let body = self.client.get(&["categories", "search"], &params).await?;
        decode_list("/categories/search", &body)
    }

    async fn get_popular_categories(&self, limit: u32) -> Result<Vec<CategoryModel>, SourceError> {
        let body = self
            .client
            .get(&["categories", "popular"], &[("limit", limit.to_string())])
            .await?;
        decode_list("/categories/popular", &body)
    }

    async fn get_categories_with_stats(
        &self,
        category_type: Option<&TransactionType>,
    ) -> Result<Vec<CategoryWithStatsModel>, SourceError> {
        let body = self
            .client
            .get(&["categories", "with-stats"], &type_filter(category_type))
            .await?;
        decode_list("/categories/with-stats", &body)
    }

    async fn create_category(
        &self,
        request: &CreateCategoryRequest,
    ) -> Result<CategoryModel, SourceError> {
        debug!(name = %request.name, "creating category");
        let body = self.client.post(&["categories"], request).await?;
        decode_object("/categories", &body)
    }

    async fn update_category(
        &self,
        id: &str,
        request: &UpdateCategoryRequest,
    ) -> Result<CategoryModel, SourceError> {
        debug!(id, "updating category");
        let body = self.client.put(&["categories", id], request).await?;
        decode_object("/categories/{id}", &body)
    }

    async fn delete_category(&self, id: &str) -> Result<(), SourceError> {
        debug!(id, "deleting category");
        let body = self.client.delete(&["categories", id]).await?;
        expect_ack("/categories/{id}", &body)
    }
}
