use async_trait::async_trait;

use crate::api_catalog::domain::model::{
    entities::api_endpoint::ApiEndpoint,
    enums::api_catalog_domain_error::ApiCatalogDomainError,
    queries::{
        get_api_endpoint_by_id_query::GetApiEndpointByIdQuery,
        list_api_endpoints_query::ListApiEndpointsQuery,
    },
};

#[derive(Clone, Debug)]
pub struct ApiEndpointPage {
    pub items: Vec<ApiEndpoint>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
}

#[async_trait]
pub trait ApiCatalogQueryService: Send + Sync {
    async fn handle_list(
        &self,
        query: ListApiEndpointsQuery,
    ) -> Result<ApiEndpointPage, ApiCatalogDomainError>;

    async fn handle_get_all(&self) -> Result<Vec<ApiEndpoint>, ApiCatalogDomainError>;

    async fn handle_get_by_id(
        &self,
        query: GetApiEndpointByIdQuery,
    ) -> Result<ApiEndpoint, ApiCatalogDomainError>;
}
