use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AccessControlErrorResponseResource {
    pub code: String,
    pub message: String,
}
