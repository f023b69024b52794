use async_trait::async_trait;

use crate::api_catalog::domain::model::{
    entities::api_endpoint::{ApiEndpoint, ApiEndpointDraft},
    enums::api_catalog_domain_error::ApiCatalogDomainError,
    queries::list_api_endpoints_query::ListApiEndpointsQuery,
    value_objects::{api_endpoint_id::ApiEndpointId, api_path::ApiPath, http_method::HttpMethod},
};

#[async_trait]
pub trait ApiEndpointRepository: Send + Sync {
    async fn insert(&self, draft: &ApiEndpointDraft) -> Result<ApiEndpoint, ApiCatalogDomainError>;

    async fn find_by_id(
        &self,
        id: ApiEndpointId,
    ) -> Result<Option<ApiEndpoint>, ApiCatalogDomainError>;

    async fn find_by_route(
        &self,
        path: &ApiPath,
        method: &HttpMethod,
    ) -> Result<Option<ApiEndpoint>, ApiCatalogDomainError>;

    async fn list_all(&self) -> Result<Vec<ApiEndpoint>, ApiCatalogDomainError>;

    /// Returns one page of matches and the total match count before paging.
    async fn list_page(
        &self,
        query: &ListApiEndpointsQuery,
    ) -> Result<(Vec<ApiEndpoint>, i64), ApiCatalogDomainError>;

    async fn save(&self, endpoint: &ApiEndpoint) -> Result<(), ApiCatalogDomainError>;

    async fn delete(&self, id: ApiEndpointId) -> Result<bool, ApiCatalogDomainError>;

    /// Deletes every listed record and returns the rows that existed.
    async fn delete_by_ids(
        &self,
        ids: &[ApiEndpointId],
    ) -> Result<Vec<ApiEndpoint>, ApiCatalogDomainError>;
}
