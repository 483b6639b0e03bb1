// Category wire models.
//
// `GET /categories`, `/categories/{id}`, `/categories/search`,
// `/categories/popular` return `CategoryModel`; `/categories/with-stats`
// returns the same record flattened together with its aggregates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{WireModel, lenient};

/// A category as the backend sends it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryModel {
    #[serde(alias = "_id", deserialize_with = "lenient::identifier")]
    pub id: String,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: String,

    /// Raw `income` / `expense` string; parsed into a typed kind on conversion.
    #[serde(
        rename = "type",
        alias = "category_type",
        default,
        deserialize_with = "lenient::or_default"
    )]
    pub category_type: String,

    #[serde(default = "lenient::default_icon", deserialize_with = "lenient::icon")]
    pub icon: String,

    #[serde(default = "lenient::default_color", deserialize_with = "lenient::color")]
    pub color: String,

    /// Words the backend matches against transaction descriptions.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub keywords: Vec<String>,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub is_default: bool,

    #[serde(default = "lenient::now", deserialize_with = "lenient::timestamp")]
    pub created_at: DateTime<Utc>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_timestamp"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A category plus the usage aggregates computed server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryWithStatsModel {
    #[serde(flatten)]
    pub category: CategoryModel,

    #[serde(default, deserialize_with = "lenient::count")]
    pub transaction_count: u64,

    #[serde(default, deserialize_with = "lenient::amount")]
    pub total_amount: f64,

    #[serde(default, deserialize_with = "lenient::amount")]
    pub average_amount: f64,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_timestamp"
    )]
    pub last_used: Option<DateTime<Utc>>,
}

impl WireModel for CategoryModel {}
impl WireModel for CategoryWithStatsModel {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Duration;
    use serde_json::json;

    use super::*;
    use crate::models::lenient::{DEFAULT_COLOR, DEFAULT_ICON};

    #[test]
    fn null_optional_keys_take_defaults() {
        let before = Utc::now();
        let model = CategoryModel::from_json(&json!({
            "id": "1",
            "name": "Gaji",
            "type": "income",
            "icon": null,
            "color": null,
            "keywords": null,
            "created_at": null
        }))
        .unwrap();

        assert_eq!(model.id, "1");
        assert_eq!(model.category_type, "income");
        assert_eq!(model.icon, DEFAULT_ICON);
        assert_eq!(model.color, DEFAULT_COLOR);
        assert!(model.keywords.is_empty());
        assert!(!model.is_default);
        assert!(model.created_at >= before - Duration::seconds(1));
        assert!(model.updated_at.is_none());
    }

    #[test]
    fn missing_optional_keys_take_defaults() {
        let model = CategoryModel::from_json(&json!({ "id": "7", "name": "Makan" })).unwrap();
        assert_eq!(model.icon, DEFAULT_ICON);
        assert_eq!(model.color, DEFAULT_COLOR);
        assert_eq!(model.category_type, "");
    }

    #[test]
    fn blank_icon_is_kept_and_round_trips() {
        let model = CategoryModel::from_json(&json!({ "id": "7", "icon": "" })).unwrap();
        assert_eq!(model.icon, "");
        assert_eq!(CategoryModel::from_json(&model.to_json()).unwrap(), model);
    }

    #[test]
    fn zoneless_and_date_only_timestamps_are_accepted() {
        let model = CategoryModel::from_json(&json!({
            "id": "7",
            "created_at": "2024-05-01T08:00:00.123000",
            "updated_at": "2024-05-02"
        }))
        .unwrap();
        assert_eq!(model.created_at.to_rfc3339(), "2024-05-01T08:00:00.123+00:00");
        assert_eq!(
            model.updated_at.map(|ts| ts.to_rfc3339()),
            Some("2024-05-02T00:00:00+00:00".to_owned())
        );
    }

    #[test]
    fn unparseable_optional_timestamp_is_none() {
        let model = CategoryWithStatsModel::from_json(&json!({
            "id": "3",
            "last_used": "belum pernah"
        }))
        .unwrap();
        assert!(model.last_used.is_none());
    }

    #[test]
    fn accepts_mongo_style_and_numeric_ids() {
        let mongo = CategoryModel::from_json(&json!({ "_id": "65af" })).unwrap();
        assert_eq!(mongo.id, "65af");
        let numeric = CategoryModel::from_json(&json!({ "id": 42 })).unwrap();
        assert_eq!(numeric.id, "42");
    }

    #[test]
    fn missing_id_is_an_error() {
        assert!(CategoryModel::from_json(&json!({ "name": "Tanpa id" })).is_err());
    }

    #[test]
    fn stats_accept_stringly_numbers() {
        let model = CategoryWithStatsModel::from_json(&json!({
            "id": "3",
            "name": "Transport",
            "type": "expense",
            "transaction_count": "12",
            "total_amount": "150000.50",
            "average_amount": null,
            "last_used": "2024-05-01T08:00:00Z"
        }))
        .unwrap();

        assert_eq!(model.category.name, "Transport");
        assert_eq!(model.transaction_count, 12);
        assert!((model.total_amount - 150_000.5).abs() < f64::EPSILON);
        assert!(model.average_amount.abs() < f64::EPSILON);
        assert!(model.last_used.is_some());
    }
}
