// Auth wire model returned by `POST /auth/login` and `POST /auth/register`.

use serde::{Deserialize, Deserializer, Serialize};

use super::settings::UserProfileModel;
use super::{WireModel, lenient};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponseModel {
    pub access_token: String,

    #[serde(default = "default_token_type", deserialize_with = "token_type")]
    pub token_type: String,

    pub user: UserProfileModel,
}

fn default_token_type() -> String {
    "bearer".into()
}

fn token_type<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    lenient::string_or(deserializer, default_token_type)
}

impl WireModel for AuthResponseModel {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn token_type_defaults_to_bearer() {
        let model = AuthResponseModel::from_json(&json!({
            "access_token": "jwt",
            "user": { "id": "u1", "email": "a@b.id" }
        }))
        .unwrap();
        assert_eq!(model.token_type, "bearer");
        assert_eq!(model.user.id, "u1");
    }

    #[test]
    fn missing_token_is_rejected() {
        assert!(AuthResponseModel::from_json(&json!({ "user": { "id": "u1" } })).is_err());
    }
}
