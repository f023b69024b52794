use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct PolicyGrantResource {
    #[validate(length(min = 1, max = 100))]
    pub path: String,
    #[validate(length(min = 1, max = 16))]
    pub method: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateRolePoliciesRequestResource {
    #[validate(nested)]
    pub policies: Vec<PolicyGrantResource>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct RolePoliciesResource {
    pub authority_id: u64,
    pub policies: Vec<PolicyGrantResource>,
}
