// ── Typed request payloads ──
//
// Create/update bodies and list filters. Keys are snake_case on the wire;
// unset optional fields are omitted from the body rather than sent as null.

use chrono::{DateTime, NaiveDate, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, Serializer};

use crate::models::TransactionType;
use crate::sources::push_opt;

// ── Category ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: TransactionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateCategoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub category_type: Option<TransactionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

// ── Transaction ────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTransactionRequest {
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub amount: f64,
    pub category_id: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Defaults server-side to "now" when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateTransactionRequest {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

/// Filters for `GET /transactions`. Unset filters are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub transaction_type: Option<TransactionType>,
    pub category_id: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl TransactionFilter {
    /// Query pairs for the set filters only.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_opt(&mut params, "type", self.transaction_type.as_ref().map(ToString::to_string));
        push_opt(&mut params, "category_id", self.category_id.clone());
        push_opt(&mut params, "start_date", self.start_date.map(|d| d.to_string()));
        push_opt(&mut params, "end_date", self.end_date.map(|d| d.to_string()));
        push_opt(&mut params, "page", self.page.map(|p| p.to_string()));
        push_opt(&mut params, "limit", self.limit.map(|l| l.to_string()));
        params
    }
}

// ── Auth ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(serialize_with = "expose")]
    pub password: SecretString,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    #[serde(serialize_with = "expose")]
    pub password: SecretString,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
}

// ── Settings ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChangePasswordRequest {
    #[serde(serialize_with = "expose")]
    pub current_password: SecretString,
    #[serde(serialize_with = "expose")]
    pub new_password: SecretString,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdatePreferencesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_budget: Option<f64>,
}

/// Secrets only leave memory on the wire.
fn expose<S: Serializer>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose_secret())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn update_payload_omits_unset_fields() {
        let req = UpdateCategoryRequest {
            name: Some("Jajan".into()),
            ..Default::default()
        };
        insta::assert_json_snapshot!(req, @r#"
        {
          "name": "Jajan"
        }
        "#);
    }

    #[test]
    fn create_payload_uses_type_key() {
        let req = CreateCategoryRequest {
            name: "Beasiswa".into(),
            category_type: TransactionType::Income,
            icon: None,
            color: Some("#22C55E".into()),
            keywords: None,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "name": "Beasiswa", "type": "income", "color": "#22C55E" })
        );
    }

    #[test]
    fn login_request_serializes_password_but_debug_hides_it() {
        let req = LoginRequest {
            email: "sari@kampus.ac.id".into(),
            password: SecretString::from("rahasia123".to_owned()),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["password"], "rahasia123");
        assert!(!format!("{req:?}").contains("rahasia123"));
    }

    #[test]
    fn filter_query_contains_only_set_filters() {
        let filter = TransactionFilter {
            transaction_type: Some(TransactionType::Expense),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            limit: Some(20),
            ..Default::default()
        };
        assert_eq!(
            filter.to_query(),
            vec![
                ("type", "expense".to_owned()),
                ("start_date", "2024-01-01".to_owned()),
                ("limit", "20".to_owned()),
            ]
        );
        assert!(TransactionFilter::default().to_query().is_empty());
    }
}
