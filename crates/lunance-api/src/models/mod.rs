// ── Wire models ──
//
// JSON shapes exchanged with the Lunance backend. Deserialization is
// lenient (see `lenient`): missing or `null` keys resolve to documented
// defaults, so a model that parsed is always complete. Domain entities are
// built from these in `lunance-core`.

pub mod auth;
pub mod category;
pub mod dashboard;
pub mod lenient;
pub mod settings;
pub mod transaction;

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::EnumString;

pub use auth::AuthResponseModel;
pub use category::{CategoryModel, CategoryWithStatsModel};
pub use dashboard::{CategorySpendingModel, DashboardSummaryModel, MonthlyTrendModel};
pub use settings::{PreferencesModel, UserProfileModel};
pub use transaction::TransactionModel;

// ── JSON conversion ─────────────────────────────────────────────────

/// JSON round-tripping shared by every wire model.
///
/// `from_json(&m.to_json())` reproduces `m` exactly: every default is
/// applied during parsing, and serialization writes concrete values back.
/// Defaults replace only `null` or missing keys; a blank string stays blank.
pub trait WireModel: Serialize + DeserializeOwned {
    fn from_json(json: &Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(json)
    }

    fn to_json(&self) -> Value {
        // Models are plain structs of strings, numbers and timestamps; the
        // only failure mode of `to_value` (non-string map keys) cannot occur.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

// ── Transaction type ────────────────────────────────────────────────

/// Income/expense discriminator shared by categories and transactions.
///
/// Unknown values are kept verbatim in [`Other`](Self::Other) rather than
/// rejected, so new server-side kinds survive a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TransactionType {
    Income,
    Expense,
    #[strum(default)]
    Other(String),
}

impl TransactionType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for TransactionType {
    fn from(raw: String) -> Self {
        match raw.parse() {
            Ok(kind) => kind,
            Err(_) => Self::Other(raw),
        }
    }
}

impl From<TransactionType> for String {
    fn from(kind: TransactionType) -> Self {
        match kind {
            TransactionType::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_type_parses_known_values_case_insensitively() {
        assert_eq!(TransactionType::from("income".to_owned()), TransactionType::Income);
        assert_eq!(TransactionType::from("EXPENSE".to_owned()), TransactionType::Expense);
    }

    #[test]
    fn transaction_type_from_str() {
        assert_eq!("income".parse::<TransactionType>(), Ok(TransactionType::Income));
        assert_eq!(
            "tabungan".parse::<TransactionType>(),
            Ok(TransactionType::Other("tabungan".into()))
        );
    }

    #[test]
    fn transaction_type_keeps_unknown_values() {
        let kind = TransactionType::from("transfer".to_owned());
        assert_eq!(kind, TransactionType::Other("transfer".into()));
        assert_eq!(kind.to_string(), "transfer");
    }

    #[test]
    fn transaction_type_serializes_as_plain_string() {
        let json = serde_json::to_value(TransactionType::Income).unwrap_or_default();
        assert_eq!(json, Value::String("income".into()));
    }
}
