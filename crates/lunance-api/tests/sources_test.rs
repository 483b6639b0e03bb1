// Integration tests for the HTTP data sources using wiremock.
#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lunance_api::requests::{LoginRequest, TransactionFilter, UpdateCategoryRequest};
use lunance_api::sources::{
    AuthDataSource, CategoryDataSource, DashboardDataSource, HistoryDataSource,
    HttpAuthDataSource, HttpCategoryDataSource, HttpDashboardDataSource, HttpHistoryDataSource,
    HttpSettingsDataSource, SettingsDataSource,
};
use lunance_api::{ApiClient, Shape, SourceError, TransactionType, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Arc<ApiClient>) {
    let server = MockServer::start().await;
    let client = ApiClient::new(&format!("{}/api/v1", server.uri()), &TransportConfig::default())
        .unwrap();
    (server, Arc::new(client))
}

// ── Categories ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_categories_filtered_by_type() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/categories"))
        .and(query_param("category_type", "income"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "c1", "name": "Gaji", "type": "income", "icon": null, "color": null },
            { "_id": 7, "name": "Beasiswa", "type": "income", "keywords": ["kip"] },
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let source = HttpCategoryDataSource::new(client);
    let list = source
        .get_categories(Some(&TransactionType::Income))
        .await
        .unwrap();

    assert_eq!(list.len(), 2);
    assert_eq!(list[0].icon, "category");
    assert_eq!(list[0].color, "#6B7280");
    assert_eq!(list[1].id, "7");
    assert_eq!(list[1].keywords, vec!["kip".to_owned()]);
}

#[tokio::test]
async fn test_unfiltered_categories_send_no_type() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/categories"))
        .and(query_param_is_missing("category_type"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let list = HttpCategoryDataSource::new(client)
        .get_categories(None)
        .await
        .unwrap();
    assert!(list.is_empty());
}

#[tokio::test]
async fn test_empty_search_query_is_sent() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/categories/search"))
        .and(query_param("q", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    HttpCategoryDataSource::new(client)
        .search_categories("", None)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_object_where_list_expected() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/categories/popular"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&server)
        .await;

    let err = HttpCategoryDataSource::new(client)
        .get_popular_categories(5)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SourceError::InvalidResponse { expected: Shape::List, .. }
    ));
    assert_eq!(
        err.to_string(),
        "Format respons tidak valid dari /categories/popular: diharapkan list"
    );
}

#[tokio::test]
async fn test_list_where_object_expected() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/categories/c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let err = HttpCategoryDataSource::new(client)
        .get_category("c1")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SourceError::InvalidResponse { expected: Shape::Object, .. }
    ));
}

#[tokio::test]
async fn test_with_stats_flattens_aggregates() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/categories/with-stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "c2",
            "name": "Makan",
            "type": "expense",
            "transaction_count": 12,
            "total_amount": "450000",
            "average_amount": 37500.5,
            "last_used": null,
        }])))
        .mount(&server)
        .await;

    let list = HttpCategoryDataSource::new(client)
        .get_categories_with_stats(None)
        .await
        .unwrap();

    assert_eq!(list[0].category.name, "Makan");
    assert_eq!(list[0].transaction_count, 12);
    assert!((list[0].total_amount - 450_000.0).abs() < f64::EPSILON);
    assert!(list[0].last_used.is_none());
}

#[tokio::test]
async fn test_update_omits_unset_fields() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/categories/c1"))
        .and(body_json(json!({ "color": "#EF4444" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "c1", "name": "Gaji", "type": "income", "color": "#EF4444"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = UpdateCategoryRequest {
        color: Some("#EF4444".into()),
        ..UpdateCategoryRequest::default()
    };
    let updated = HttpCategoryDataSource::new(client)
        .update_category("c1", &request)
        .await
        .unwrap();
    assert_eq!(updated.color, "#EF4444");
}

#[tokio::test]
async fn test_delete_accepts_empty_body() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/categories/c1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    HttpCategoryDataSource::new(client)
        .delete_category("c1")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_server_error_carries_upstream_message() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({ "message": "Kategori sudah ada" })),
        )
        .mount(&server)
        .await;

    let request = lunance_api::requests::CreateCategoryRequest {
        name: "Gaji".into(),
        category_type: TransactionType::Income,
        icon: None,
        color: None,
        keywords: None,
    };
    let err = HttpCategoryDataSource::new(client)
        .create_category(&request)
        .await
        .unwrap_err();

    match err {
        SourceError::Server { message, status } => {
            assert_eq!(message, "Kategori sudah ada");
            assert_eq!(status, Some(409));
        }
        other => panic!("expected Server, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unauthorized_becomes_session_expired() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "detail": "bad token" })))
        .mount(&server)
        .await;

    let err = HttpSettingsDataSource::new(client)
        .get_profile()
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Sesi berakhir, silakan masuk kembali");
    assert!(err.is_user_facing());
}

#[tokio::test]
async fn test_bad_element_is_decode_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "name": "no id" }])))
        .mount(&server)
        .await;

    let err = HttpCategoryDataSource::new(client)
        .get_categories(None)
        .await
        .unwrap_err();
    assert!(matches!(err, SourceError::Decode { .. }), "got {err:?}");
    assert!(!err.is_user_facing());
}

// ── Dashboard / history ─────────────────────────────────────────────

#[tokio::test]
async fn test_dashboard_summary_and_trend() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/dashboard/summary"))
        .and(query_param("period", "monthly"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "period": "monthly",
            "total_income": 3_000_000,
            "total_expense": 1_250_000.5,
            "balance": 1_749_999.5,
            "top_categories": null,
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/dashboard/trend"))
        .and(query_param("months", "6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "month": "2026-09", "income": 3_000_000, "expense": 1_000_000 }
        ])))
        .mount(&server)
        .await;

    let source = HttpDashboardDataSource::new(client);
    let summary = source.get_summary("monthly").await.unwrap();
    assert!(summary.top_categories.is_empty());
    assert!((summary.total_expense - 1_250_000.5).abs() < f64::EPSILON);

    let trend = source.get_monthly_trend(6).await.unwrap();
    assert_eq!(trend[0].month, "2026-09");
}

#[tokio::test]
async fn test_transaction_filter_sends_only_set_params() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/transactions"))
        .and(query_param("type", "expense"))
        .and(query_param("page", "2"))
        .and(query_param_is_missing("category_id"))
        .and(query_param_is_missing("start_date"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "t1", "type": "expense", "amount": "25000", "category_id": "c2",
              "description": "Nasi goreng", "date": "2026-10-01T12:00:00Z" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let filter = TransactionFilter {
        transaction_type: Some(TransactionType::Expense),
        page: Some(2),
        ..TransactionFilter::default()
    };
    let list = HttpHistoryDataSource::new(client)
        .get_transactions(&filter)
        .await
        .unwrap();

    assert_eq!(list[0].description, "Nasi goreng");
    assert!((list[0].amount - 25_000.0).abs() < f64::EPSILON);
}

// ── Auth ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_login_posts_plain_password() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .and(body_json(json!({ "email": "sari@kampus.ac.id", "password": "rahasia" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "jwt-123",
            "token_type": null,
            "user": { "id": "u1", "name": "Sari", "email": "sari@kampus.ac.id" },
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = LoginRequest {
        email: "sari@kampus.ac.id".into(),
        password: "rahasia".to_owned().into(),
    };
    let auth = HttpAuthDataSource::new(client).login(&request).await.unwrap();

    assert_eq!(auth.access_token, "jwt-123");
    assert_eq!(auth.token_type, "bearer");
    assert_eq!(auth.user.name, "Sari");
}

#[tokio::test]
async fn test_logout_accepts_object_ack() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/logout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .mount(&server)
        .await;

    HttpAuthDataSource::new(client).logout().await.unwrap();
}
