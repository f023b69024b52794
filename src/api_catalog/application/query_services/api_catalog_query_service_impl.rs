use std::sync::Arc;

use async_trait::async_trait;

use crate::api_catalog::{
    domain::{
        model::{
            entities::api_endpoint::ApiEndpoint,
            enums::api_catalog_domain_error::ApiCatalogDomainError,
            queries::{
                get_api_endpoint_by_id_query::GetApiEndpointByIdQuery,
                list_api_endpoints_query::ListApiEndpointsQuery,
            },
        },
        services::api_catalog_query_service::{ApiCatalogQueryService, ApiEndpointPage},
    },
    infrastructure::persistence::repositories::api_endpoint_repository::ApiEndpointRepository,
};

pub struct ApiCatalogQueryServiceImpl {
    repository: Arc<dyn ApiEndpointRepository>,
}

impl ApiCatalogQueryServiceImpl {
    pub fn new(repository: Arc<dyn ApiEndpointRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ApiCatalogQueryService for ApiCatalogQueryServiceImpl {
    async fn handle_list(
        &self,
        query: ListApiEndpointsQuery,
    ) -> Result<ApiEndpointPage, ApiCatalogDomainError> {
        let (items, total) = self.repository.list_page(&query).await?;

        Ok(ApiEndpointPage {
            items,
            total,
            page: query.page(),
            page_size: query.page_size(),
        })
    }

    async fn handle_get_all(&self) -> Result<Vec<ApiEndpoint>, ApiCatalogDomainError> {
        self.repository.list_all().await
    }

    async fn handle_get_by_id(
        &self,
        query: GetApiEndpointByIdQuery,
    ) -> Result<ApiEndpoint, ApiCatalogDomainError> {
        self.repository
            .find_by_id(query.id())
            .await?
            .ok_or(ApiCatalogDomainError::ApiNotFound)
    }
}
