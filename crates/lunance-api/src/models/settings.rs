// Profile and preference wire models served under `/users/me` and `/settings`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::{WireModel, lenient};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfileModel {
    #[serde(alias = "_id", deserialize_with = "lenient::identifier")]
    pub id: String,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,

    #[serde(default = "lenient::now", deserialize_with = "lenient::timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferencesModel {
    #[serde(default = "default_currency", deserialize_with = "currency")]
    pub currency: String,

    #[serde(default = "default_language", deserialize_with = "language")]
    pub language: String,

    #[serde(default = "default_theme", deserialize_with = "theme")]
    pub theme: String,

    #[serde(default = "lenient::default_true", deserialize_with = "lenient::true_if_missing")]
    pub notifications_enabled: bool,

    #[serde(
        default,
        deserialize_with = "lenient::optional_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub monthly_budget: Option<f64>,
}

impl Default for PreferencesModel {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            language: default_language(),
            theme: default_theme(),
            notifications_enabled: true,
            monthly_budget: None,
        }
    }
}

fn default_currency() -> String {
    "IDR".into()
}
fn default_language() -> String {
    "id".into()
}
fn default_theme() -> String {
    "system".into()
}

fn currency<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    lenient::string_or(deserializer, default_currency)
}
fn language<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    lenient::string_or(deserializer, default_language)
}
fn theme<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    lenient::string_or(deserializer, default_theme)
}

impl WireModel for UserProfileModel {}
impl WireModel for PreferencesModel {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_preferences_match_defaults() {
        let model = PreferencesModel::from_json(&json!({})).unwrap();
        assert_eq!(model, PreferencesModel::default());
    }

    #[test]
    fn null_notifications_flag_stays_enabled() {
        let model =
            PreferencesModel::from_json(&json!({ "notifications_enabled": null, "monthly_budget": "2000000" }))
                .unwrap();
        assert!(model.notifications_enabled);
        assert_eq!(model.monthly_budget, Some(2_000_000.0));
    }

    #[test]
    fn profile_without_university() {
        let model = UserProfileModel::from_json(&json!({
            "id": "u1",
            "name": "Sari",
            "email": "sari@kampus.ac.id"
        }))
        .unwrap();
        assert!(model.university.is_none());
        assert_eq!(model.email, "sari@kampus.ac.id");
    }
}
