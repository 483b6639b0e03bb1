// Transaction (history) wire model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{WireModel, lenient};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionModel {
    #[serde(alias = "_id", deserialize_with = "lenient::identifier")]
    pub id: String,

    #[serde(
        rename = "type",
        alias = "transaction_type",
        default,
        deserialize_with = "lenient::or_default"
    )]
    pub transaction_type: String,

    #[serde(default, deserialize_with = "lenient::amount")]
    pub amount: f64,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub category_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// When the money moved; falls back to parse time if the server omits it.
    #[serde(default = "lenient::now", deserialize_with = "lenient::timestamp")]
    pub date: DateTime<Utc>,

    #[serde(default = "lenient::now", deserialize_with = "lenient::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl WireModel for TransactionModel {}
