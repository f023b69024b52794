use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api_catalog::domain::model::entities::api_endpoint::ApiEndpoint;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ApiEndpointResource {
    pub id: i64,
    pub path: String,
    pub method: String,
    pub api_group: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&ApiEndpoint> for ApiEndpointResource {
    fn from(endpoint: &ApiEndpoint) -> Self {
        Self {
            id: endpoint.id().value(),
            path: endpoint.path().value().to_string(),
            method: endpoint.method().value().to_string(),
            api_group: endpoint.api_group().value().to_string(),
            description: endpoint.description().to_string(),
            created_at: endpoint.created_at().to_rfc3339(),
            updated_at: endpoint.updated_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ApiEndpointPageResource {
    pub items: Vec<ApiEndpointResource>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
}
