use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Body of both create and update calls.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct ApiEndpointRequestResource {
    #[validate(length(min = 1, max = 255), regex(path = *API_PATH_REGEX))]
    pub path: String,

    #[validate(length(min = 1, max = 16))]
    pub method: String,

    #[validate(length(min = 1, max = 100))]
    pub api_group: String,

    #[serde(default)]
    #[validate(length(max = 255))]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct DeleteApiEndpointsByIdsRequestResource {
    #[validate(length(min = 1))]
    pub ids: Vec<i64>,
}

lazy_static::lazy_static! {
    pub static ref API_PATH_REGEX: regex::Regex = regex::Regex::new(r"^/\S*$").expect("valid regex");
}
