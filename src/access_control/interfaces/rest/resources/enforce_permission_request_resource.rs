use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct EnforcePermissionRequestResource {
    #[validate(range(min = 1))]
    pub authority_id: u64,
    #[validate(length(min = 1))]
    pub path: String,
    #[validate(length(min = 1))]
    pub method: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct EnforcePermissionResponseResource {
    pub allowed: bool,
    pub cached: bool,
}
