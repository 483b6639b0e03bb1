// Category repository.

use std::sync::Arc;

use lunance_api::requests::{CreateCategoryRequest, UpdateCategoryRequest};
use lunance_api::sources::CategoryDataSource;

use super::{Gateway, Operation};
use crate::entity::{Category, CategoryWithStats, TransactionType};
use crate::outcome::Outcome;

const GET_CATEGORIES: Operation = Operation::new("get_categories", "Gagal memuat kategori");
const GET_CATEGORY: Operation = Operation::new("get_category", "Gagal memuat detail kategori");
const SEARCH_CATEGORIES: Operation = Operation::new("search_categories", "Gagal mencari kategori");
const GET_POPULAR: Operation =
    Operation::new("get_popular_categories", "Gagal memuat kategori populer");
const GET_WITH_STATS: Operation =
    Operation::new("get_categories_with_stats", "Gagal memuat statistik kategori");
const CREATE_CATEGORY: Operation = Operation::new("create_category", "Gagal membuat kategori");
const UPDATE_CATEGORY: Operation = Operation::new("update_category", "Gagal memperbarui kategori");
const DELETE_CATEGORY: Operation = Operation::new("delete_category", "Gagal menghapus kategori");

pub struct CategoryRepository {
    source: Arc<dyn CategoryDataSource>,
    gateway: Gateway,
}

impl CategoryRepository {
    pub fn new(source: Arc<dyn CategoryDataSource>, gateway: Gateway) -> Self {
        Self { source, gateway }
    }

    pub async fn get_categories(
        &self,
        category_type: Option<&TransactionType>,
    ) -> Outcome<Vec<Category>> {
        self.gateway
            .fetch_many(GET_CATEGORIES, move || self.source.get_categories(category_type))
            .await
    }

    pub async fn get_category(&self, id: &str) -> Outcome<Category> {
        self.gateway
            .fetch_one(GET_CATEGORY, move || self.source.get_category(id))
            .await
    }

    /// An empty `query` is forwarded as-is; the backend decides what it matches.
    pub async fn search_categories(
        &self,
        query: &str,
        category_type: Option<&TransactionType>,
    ) -> Outcome<Vec<Category>> {
        self.gateway
            .fetch_many(SEARCH_CATEGORIES, move || {
                self.source.search_categories(query, category_type)
            })
            .await
    }

    pub async fn get_popular_categories(&self, limit: u32) -> Outcome<Vec<Category>> {
        self.gateway
            .fetch_many(GET_POPULAR, move || self.source.get_popular_categories(limit))
            .await
    }

    pub async fn get_categories_with_stats(
        &self,
        category_type: Option<&TransactionType>,
    ) -> Outcome<Vec<CategoryWithStats>> {
        self.gateway
            .fetch_many(GET_WITH_STATS, move || {
                self.source.get_categories_with_stats(category_type)
            })
            .await
    }

    pub async fn create_category(&self, request: &CreateCategoryRequest) -> Outcome<Category> {
        self.gateway
            .fetch_one(CREATE_CATEGORY, move || self.source.create_category(request))
            .await
    }

    pub async fn update_category(
        &self,
        id: &str,
        request: &UpdateCategoryRequest,
    ) -> Outcome<Category> {
        self.gateway
            .fetch_one(UPDATE_CATEGORY, move || self.source.update_category(id, request))
            .await
    }

    pub async fn delete_category(&self, id: &str) -> Outcome<()> {
        self.gateway
            .execute(DELETE_CATEGORY, move || self.source.delete_category(id))
            .await
    }
}
